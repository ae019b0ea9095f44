//! Integration tests for the tick loop.

use swarm_arena::{Arena, PhysicalObject};
use swarm_control::{Command, Controller, NoopController, SimContext};
use swarm_core::{FrequencyMask, Pose, RobotId, RobotRng, SimConfig, Tick, Vec2};
use swarm_energy::{ConstantRate, EnergyContext, EnergyMeter, EnergyModel, MotionCost};
use swarm_motion::DifferentialDrive;
use swarm_robot::RobotStoreBuilder;
use swarm_sound::{Microphone, SensorOffset, Speaker, StepResponse};

use crate::{NoopObserver, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

const DT: f64 = 0.1;

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        dt_secs: DT,
        total_ticks,
        seed: 42,
        snapshot_interval_ticks: 0,
    }
}

fn arena_40() -> Arena {
    Arena::new(40.0, 40.0).unwrap()
}

fn mic(range: f32) -> Microphone {
    // Single sensor at the body centre: reach == range exactly.
    Microphone::new(vec![SensorOffset::new(0.0, 0.0)], range, 20, Box::new(StepResponse)).unwrap()
}

fn speaker() -> Speaker {
    Speaker::new(20).unwrap()
}

fn exact_drive() -> DifferentialDrive {
    DifferentialDrive::exact(0.5, 2.0).unwrap()
}

/// Stationary controller emitting a fixed per-robot mask, optionally only
/// on one tick.
struct ScriptedEmitter {
    masks:     Vec<FrequencyMask>,
    only_tick: Option<Tick>,
}

impl Controller for ScriptedEmitter {
    fn act(&self, robot: RobotId, ctx: &SimContext<'_>, _rng: &mut RobotRng) -> Command {
        match self.only_tick {
            Some(t) if ctx.tick != t => Command::IDLE,
            _ => Command::IDLE.emitting(self.masks[robot.index()]),
        }
    }
}

/// Drives straight at a fixed speed, silent.
struct DriveStraight(f32);

impl Controller for DriveStraight {
    fn act(&self, _robot: RobotId, _ctx: &SimContext<'_>, _rng: &mut RobotRng) -> Command {
        Command::drive(self.0, self.0)
    }
}

/// Emits on the channel equal to the current tick number.
struct TickEmitter;

impl Controller for TickEmitter {
    fn act(&self, _robot: RobotId, ctx: &SimContext<'_>, _rng: &mut RobotRng) -> Command {
        Command::IDLE.emitting(FrequencyMask::single((ctx.tick.0 % 8) as u8))
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_successfully() {
        let mut b = RobotStoreBuilder::new(42);
        b.robot(Pose::new(0.0, 0.0, 0.0));
        let (store, rngs) = b.build();
        let sim = SimBuilder::new(test_config(10), store, rngs, arena_40(), NoopController)
            .build()
            .unwrap();
        assert_eq!(sim.robots.count, 1);
        assert!(sim.field.is_silent());
    }

    #[test]
    fn rng_count_mismatch_errors() {
        let mut two = RobotStoreBuilder::new(42);
        two.robot(Pose::new(0.0, 0.0, 0.0));
        two.robot(Pose::new(1.0, 0.0, 0.0));
        let (store, _) = two.build();

        let mut one = RobotStoreBuilder::new(42);
        one.robot(Pose::new(0.0, 0.0, 0.0));
        let (_, rngs) = one.build();

        let err = SimBuilder::new(test_config(10), store, rngs, arena_40(), NoopController)
            .build()
            .unwrap_err();
        assert!(matches!(err, SimError::RobotCountMismatch { expected: 2, got: 1, .. }));
    }

    #[test]
    fn out_of_bounds_robot_errors() {
        let mut b = RobotStoreBuilder::new(42);
        b.robot(Pose::new(100.0, 0.0, 0.0));
        let (store, rngs) = b.build();
        let err = SimBuilder::new(test_config(10), store, rngs, arena_40(), NoopController)
            .build()
            .unwrap_err();
        assert!(matches!(err, SimError::RobotOutOfBounds(RobotId(0))));
    }

    #[test]
    fn bad_tick_duration_errors() {
        let mut b = RobotStoreBuilder::new(42);
        b.robot(Pose::new(0.0, 0.0, 0.0));
        let (store, rngs) = b.build();
        let config = SimConfig { dt_secs: 0.0, ..test_config(10) };
        let err = SimBuilder::new(config, store, rngs, arena_40(), NoopController)
            .build()
            .unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }
}

// ── Broadcast aggregation ─────────────────────────────────────────────────────

#[cfg(test)]
mod broadcast {
    use super::*;

    /// Two robots' emissions both survive one full tick — the regression
    /// test for resetting once per tick rather than once per robot.
    #[test]
    fn two_emitters_aggregate_in_one_tick() {
        let mut b = RobotStoreBuilder::new(42);
        b.robot(Pose::new(-2.0, 0.0, 0.0)).speaker(speaker());
        b.robot(Pose::new(2.0, 0.0, 0.0)).speaker(speaker());
        let (store, rngs) = b.build();

        let controller = ScriptedEmitter {
            masks: vec![FrequencyMask(0b0001), FrequencyMask(0b0010)],
            only_tick: None,
        };
        let mut sim = SimBuilder::new(test_config(10), store, rngs, arena_40(), controller)
            .build()
            .unwrap();

        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert_eq!(sim.field.current_state(), FrequencyMask(0b0011));
    }

    #[test]
    fn reset_clears_the_next_tick() {
        let mut b = RobotStoreBuilder::new(42);
        b.robot(Pose::new(-2.0, 0.0, 0.0)).speaker(speaker());
        b.robot(Pose::new(2.0, 0.0, 0.0)).speaker(speaker());
        let (store, rngs) = b.build();

        // Emit only on tick 0.
        let controller = ScriptedEmitter {
            masks: vec![FrequencyMask(0b0001), FrequencyMask(0b0010)],
            only_tick: Some(Tick(0)),
        };
        let mut sim = SimBuilder::new(test_config(10), store, rngs, arena_40(), controller)
            .build()
            .unwrap();

        sim.run_ticks(2, &mut NoopObserver).unwrap();
        // Tick 1 had no emissions: the accumulator is empty again…
        assert_eq!(sim.field.current_state(), FrequencyMask(0b0000));
        // …while tick 0's aggregate was what tick 1's receivers heard.
        assert_eq!(sim.field.ambient(), FrequencyMask(0b0011));
    }

    /// The aggregate for tick t is built from commands produced in tick t's
    /// controller phase — never stale profiles from an earlier tick — even
    /// when locomotion and energy updates run ahead of the emission step.
    #[test]
    fn aggregate_tracks_current_tick_commands() {
        let mut b = RobotStoreBuilder::new(42);
        b.robot(Pose::new(0.0, 0.0, 0.0))
            .drive(exact_drive())
            .energy(EnergyMeter::new(Box::new(ConstantRate(-0.1))))
            .speaker(speaker());
        let (store, rngs) = b.build();
        let mut sim = SimBuilder::new(test_config(10), store, rngs, arena_40(), TickEmitter)
            .build()
            .unwrap();

        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert_eq!(sim.field.current_state(), FrequencyMask::single(0));

        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert_eq!(sim.field.current_state(), FrequencyMask::single(1));
    }
}

// ── Reception ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reception {
    use super::*;

    #[test]
    fn ambient_is_heard_one_tick_later_at_any_distance() {
        let mut b = RobotStoreBuilder::new(42);
        b.robot(Pose::new(-15.0, 0.0, 0.0)).speaker(speaker());
        b.robot(Pose::new(15.0, 0.0, 0.0)).microphone(mic(2.0));
        let (store, rngs) = b.build();

        let controller = ScriptedEmitter {
            masks: vec![FrequencyMask(0b0001), FrequencyMask::EMPTY],
            only_tick: None,
        };
        let mut sim = SimBuilder::new(test_config(10), store, rngs, arena_40(), controller)
            .build()
            .unwrap();
        let listener = RobotId(1);

        // Tick 0: the emitter is 30 m away (far out of range) and the
        // settled aggregate is still empty — the listener hears nothing.
        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert!(sim.robots.heard_any(listener).is_empty());

        // Tick 1: tick 0's aggregate has settled; distance is irrelevant.
        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert_eq!(sim.robots.heard_any(listener), FrequencyMask(0b0001));
    }

    #[test]
    fn near_emitter_is_heard_in_the_same_tick() {
        let mut b = RobotStoreBuilder::new(42);
        b.robot(Pose::new(1.0, 0.0, 0.0)).speaker(speaker());
        b.robot(Pose::new(0.0, 0.0, 0.0)).microphone(mic(5.0));
        let (store, rngs) = b.build();

        let controller = ScriptedEmitter {
            masks: vec![FrequencyMask(0b0100), FrequencyMask::EMPTY],
            only_tick: None,
        };
        let mut sim = SimBuilder::new(test_config(10), store, rngs, arena_40(), controller)
            .build()
            .unwrap();

        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert_eq!(sim.robots.heard_any(RobotId(1)), FrequencyMask(0b0100));
    }

    /// Sensor range 5, sound source at distance 6, empty aggregate:
    /// reception is empty — out of range is a normal result, not an error.
    #[test]
    fn out_of_range_source_is_silent() {
        let mut arena = arena_40();
        arena
            .insert(PhysicalObject::beacon(
                Vec2::new(6.0, 0.0),
                0.2,
                FrequencyMask(0b0100),
            ))
            .unwrap();

        let mut b = RobotStoreBuilder::new(42);
        b.robot(Pose::new(0.0, 0.0, 0.0)).microphone(mic(5.0));
        let (store, rngs) = b.build();
        let mut sim = SimBuilder::new(test_config(10), store, rngs, arena, NoopController)
            .build()
            .unwrap();

        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert!(sim.robots.heard_any(RobotId(0)).is_empty());
    }

    #[test]
    fn beacon_within_range_is_heard_but_never_ambient() {
        let mut arena = arena_40();
        arena
            .insert(PhysicalObject::beacon(
                Vec2::new(2.0, 0.0),
                0.2,
                FrequencyMask(0b0100),
            ))
            .unwrap();

        let mut b = RobotStoreBuilder::new(42);
        b.robot(Pose::new(0.0, 0.0, 0.0)).microphone(mic(5.0));
        let (store, rngs) = b.build();
        let mut sim = SimBuilder::new(test_config(10), store, rngs, arena, NoopController)
            .build()
            .unwrap();

        sim.run_ticks(2, &mut NoopObserver).unwrap();
        assert_eq!(sim.robots.heard_any(RobotId(0)), FrequencyMask(0b0100));
        // Objects are near-field sources only; they never enter the
        // world aggregate.
        assert!(sim.field.current_state().is_empty());
        assert!(sim.field.ambient().is_empty());
    }

    #[test]
    fn own_speaker_is_excluded_from_the_near_field() {
        let mut b = RobotStoreBuilder::new(42);
        b.robot(Pose::new(0.0, 0.0, 0.0))
            .speaker(speaker())
            .microphone(mic(5.0));
        let (store, rngs) = b.build();

        let controller = ScriptedEmitter {
            masks: vec![FrequencyMask(0b1)],
            only_tick: None,
        };
        let mut sim = SimBuilder::new(test_config(10), store, rngs, arena_40(), controller)
            .build()
            .unwrap();

        // Same tick: nothing — not even its own emission.
        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert!(sim.robots.heard_any(RobotId(0)).is_empty());

        // Next tick: the robot hears itself through the settled world
        // aggregate, like everyone else does.
        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert_eq!(sim.robots.heard_any(RobotId(0)), FrequencyMask(0b1));
    }
}

// ── Energy ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod energy {
    use super::*;

    /// The pipeline resolves locomotion before energy: a motion-cost rule
    /// must see the velocity commanded *this* tick.
    #[test]
    fn energy_rule_sees_this_ticks_velocity() {
        let mut b = RobotStoreBuilder::new(42);
        b.robot(Pose::new(0.0, 0.0, 0.0))
            .drive(exact_drive())
            .energy(EnergyMeter::new(Box::new(MotionCost {
                idle_rate: 0.0,
                per_speed: 1.0,
            })));
        let (store, rngs) = b.build();
        let mut sim = SimBuilder::new(test_config(10), store, rngs, arena_40(), DriveStraight(1.0))
            .build()
            .unwrap();

        sim.run_ticks(1, &mut NoopObserver).unwrap();
        let meter = sim.robots.energy[0].as_ref().unwrap();
        // One tick at 1 m/s with cost 1 unit per metre: delta = -1.0 * DT.
        assert!((meter.delta() + DT as f32).abs() < 1e-6);
        assert!((meter.energy() + DT as f32).abs() < 1e-6);
    }

    #[test]
    fn previous_delta_equals_prior_ticks_delta() {
        /// Delta = tick number at the time of the update (1-based here).
        struct TickDelta(u32);
        impl EnergyModel for TickDelta {
            fn delta(&mut self, _ctx: &EnergyContext) -> f32 {
                self.0 += 1;
                self.0 as f32
            }
        }

        let mut b = RobotStoreBuilder::new(42);
        b.robot(Pose::new(0.0, 0.0, 0.0))
            .energy(EnergyMeter::new(Box::new(TickDelta(0))));
        let (store, rngs) = b.build();
        let mut sim = SimBuilder::new(test_config(10), store, rngs, arena_40(), NoopController)
            .build()
            .unwrap();

        let mut last_delta = 0.0;
        for _ in 0..4 {
            sim.run_ticks(1, &mut NoopObserver).unwrap();
            let meter = sim.robots.energy[0].as_ref().unwrap();
            assert_eq!(meter.previous_delta(), last_delta);
            last_delta = meter.delta();
        }
    }

    #[test]
    fn constant_drain_accumulates() {
        let mut b = RobotStoreBuilder::new(42);
        b.robot(Pose::new(0.0, 0.0, 0.0))
            .energy(EnergyMeter::with_initial(5.0, Box::new(ConstantRate(-1.0))));
        let (store, rngs) = b.build();
        let mut sim = SimBuilder::new(test_config(10), store, rngs, arena_40(), NoopController)
            .build()
            .unwrap();

        sim.run_ticks(10, &mut NoopObserver).unwrap();
        // 10 ticks at -1 unit/s, dt 0.1 → -1.0 total.
        let energy = sim.robots.energy_level(RobotId(0)).unwrap();
        assert!((energy - 4.0).abs() < 1e-5);
    }
}

// ── Motion ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod motion {
    use super::*;

    #[test]
    fn straight_drive_advances_the_pose() {
        let mut b = RobotStoreBuilder::new(42);
        b.robot(Pose::new(0.0, 0.0, 0.0)).drive(exact_drive());
        let (store, rngs) = b.build();
        let mut sim = SimBuilder::new(test_config(10), store, rngs, arena_40(), DriveStraight(1.0))
            .build()
            .unwrap();

        sim.run_ticks(10, &mut NoopObserver).unwrap();
        let pose = sim.robots.pose[0];
        assert!((pose.pos.x - 1.0).abs() < 1e-5);
        assert!(pose.pos.y.abs() < 1e-6);
        assert_eq!(pose.heading, 0.0);
    }

    #[test]
    fn robot_without_drive_ignores_wheel_commands() {
        let mut b = RobotStoreBuilder::new(42);
        b.robot(Pose::new(1.0, 2.0, 0.0)); // no drive capability
        let (store, rngs) = b.build();
        let mut sim = SimBuilder::new(test_config(10), store, rngs, arena_40(), DriveStraight(1.0))
            .build()
            .unwrap();

        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.robots.pose[0].pos, Vec2::new(1.0, 2.0));
        assert_eq!(sim.robots.velocity[0], swarm_core::Velocity::ZERO);
    }

    #[test]
    fn identical_seeds_reproduce_identical_runs() {
        let build = || {
            let mut b = RobotStoreBuilder::new(7);
            for i in 0..3 {
                b.robot(Pose::new(i as f32, 0.0, 0.0))
                    .drive(DifferentialDrive::new(0.5, 2.0, 0.1).unwrap());
            }
            let (store, rngs) = b.build();
            SimBuilder::new(test_config(20), store, rngs, arena_40(), DriveStraight(1.0))
                .build()
                .unwrap()
        };

        let mut a = build();
        let mut b = build();
        a.run(&mut NoopObserver).unwrap();
        b.run(&mut NoopObserver).unwrap();

        for i in 0..3 {
            assert_eq!(a.robots.pose[i], b.robots.pose[i]);
        }
    }
}

// ── Removal ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod removal {
    use super::*;

    #[test]
    fn removed_robot_is_skipped_by_every_phase() {
        let mut b = RobotStoreBuilder::new(42);
        b.robot(Pose::new(-2.0, 0.0, 0.0)).speaker(speaker()).drive(exact_drive());
        b.robot(Pose::new(2.0, 0.0, 0.0)).speaker(speaker());
        let (store, rngs) = b.build();

        let controller = ScriptedEmitter {
            masks: vec![FrequencyMask(0b0001), FrequencyMask(0b0010)],
            only_tick: None,
        };
        let mut sim = SimBuilder::new(test_config(10), store, rngs, arena_40(), controller)
            .build()
            .unwrap();

        sim.remove_robot(RobotId(0)).unwrap();
        let frozen_pose = sim.robots.pose[0];

        sim.run_ticks(1, &mut NoopObserver).unwrap();
        // Only the live robot's emission reached the aggregate…
        assert_eq!(sim.field.current_state(), FrequencyMask(0b0010));
        // …and the removed robot did not move.
        assert_eq!(sim.robots.pose[0], frozen_pose);
        assert_eq!(sim.robots.live_count(), 1);
    }

    #[test]
    fn remove_unknown_or_twice_errors() {
        let mut b = RobotStoreBuilder::new(42);
        b.robot(Pose::new(0.0, 0.0, 0.0));
        let (store, rngs) = b.build();
        let mut sim = SimBuilder::new(test_config(10), store, rngs, arena_40(), NoopController)
            .build()
            .unwrap();

        assert!(matches!(
            sim.remove_robot(RobotId(99)),
            Err(SimError::RobotNotFound(_))
        ));
        sim.remove_robot(RobotId(0)).unwrap();
        assert!(matches!(
            sim.remove_robot(RobotId(0)),
            Err(SimError::RobotNotFound(_))
        ));
    }
}

// ── Observer hooks ────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use super::*;

    #[derive(Default)]
    struct CountingObserver {
        starts:    usize,
        ends:      usize,
        snapshots: usize,
        stepped:   Vec<usize>,
        finished:  bool,
    }

    impl SimObserver for CountingObserver {
        fn on_tick_start(&mut self, _tick: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, _tick: Tick, stepped: usize, _field: &swarm_sound::SoundField) {
            self.ends += 1;
            self.stepped.push(stepped);
        }
        fn on_snapshot(
            &mut self,
            _tick: Tick,
            _robots: &swarm_robot::RobotStore,
            _field: &swarm_sound::SoundField,
        ) {
            self.snapshots += 1;
        }
        fn on_sim_end(&mut self, _final_tick: Tick) {
            self.finished = true;
        }
    }

    #[test]
    fn hooks_fire_at_tick_boundaries() {
        let mut b = RobotStoreBuilder::new(42);
        b.robot(Pose::new(0.0, 0.0, 0.0));
        b.robot(Pose::new(1.0, 0.0, 0.0));
        let (store, rngs) = b.build();

        let config = SimConfig { snapshot_interval_ticks: 2, ..test_config(4) };
        let mut sim = SimBuilder::new(config, store, rngs, arena_40(), NoopController)
            .build()
            .unwrap();

        let mut obs = CountingObserver::default();
        sim.run(&mut obs).unwrap();

        assert_eq!(obs.starts, 4);
        assert_eq!(obs.ends, 4);
        assert_eq!(obs.snapshots, 2); // ticks 0 and 2
        assert!(obs.finished);
        assert_eq!(obs.stepped, vec![2, 2, 2, 2]);
    }
}
