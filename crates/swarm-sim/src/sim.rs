//! The `Sim` struct and its tick loop.

use swarm_arena::Arena;
use swarm_control::{Command, Controller, SimContext};
use swarm_core::{RobotId, SimClock, SimConfig, Tick, Velocity};
use swarm_energy::EnergyContext;
use swarm_robot::{RobotRngs, RobotStore};
use swarm_sound::{Emitter, SoundField};

use crate::{SimError, SimResult, SimObserver};

/// The main simulation runner.
///
/// `Sim<C>` owns all simulation state — the robot roster, the arena, the
/// world-scoped [`SoundField`] — and drives the five-phase tick loop
/// described in the [crate docs](crate).  The field lives here, bound to
/// one world: several `Sim`s in one process each carry their own,
/// fully independent aggregate.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim<C: Controller> {
    /// Global configuration (total ticks, seed, tick duration, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: SimClock,

    /// All robot state (SoA arrays + capability slots).
    pub robots: RobotStore,

    /// Per-robot deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: RobotRngs,

    /// The world: bounds, objects, proximity queries, integration.
    pub arena: Arena,

    /// The world-scoped sound aggregate, reset once per tick by the driver.
    pub field: SoundField,

    /// The controller.  Called once per live robot per tick.
    pub controller: C,
}

impl<C: Controller> Sim<C> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }
            self.tick_once(now, observer);
            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            self.tick_once(now, observer);
            self.clock.advance();
        }
        Ok(())
    }

    /// Remove a robot from the world.
    ///
    /// Its ID stays allocated (never reused) but every subsequent phase
    /// skips it: it no longer moves, spends, emits, or hears.
    ///
    /// # Errors
    ///
    /// [`SimError::RobotNotFound`] if the ID is out of range or the robot
    /// was already removed.
    pub fn remove_robot(&mut self, robot: RobotId) -> SimResult<()> {
        if robot.index() >= self.robots.count || !self.robots.is_alive(robot) {
            return Err(SimError::RobotNotFound(robot));
        }
        self.robots.retire(robot);
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick_once<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        observer.on_tick_start(now);
        let stepped = self.process_tick(now);
        observer.on_tick_end(now, stepped, &self.field);
        if self.config.snapshot_interval_ticks > 0
            && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
        {
            observer.on_snapshot(now, &self.robots, &self.field);
        }
    }

    fn process_tick(&mut self, now: Tick) -> usize {
        // ── Phase ①: settle the broadcast field ───────────────────────────
        //
        // Exactly once per tick, before any emission.  Resetting per robot
        // would clobber the aggregate built by earlier robots in the tick.
        self.field.begin_tick();

        // Live roster in ascending ID order; removed robots are skipped by
        // every phase below.
        let live: Vec<RobotId> = self
            .robots
            .robot_ids()
            .filter(|&r| self.robots.is_alive(r))
            .collect();
        if live.is_empty() {
            return 0;
        }

        // ── Phase ②: controller phase (produce) ───────────────────────────
        let commands = self.compute_commands(now, &live);

        // ── Phase ③: apply phase (ascending RobotId) ──────────────────────
        //
        // Wheel commands and speaker profiles are fixed here for the whole
        // tick; phase ④ only reads them.
        for (&robot, command) in live.iter().zip(&commands) {
            let i = robot.index();
            self.robots.command[i] = command.wheels;
            if let Some(speaker) = &mut self.robots.speaker[i] {
                speaker.set_profile(command.emission);
            }
        }

        // ── Phase ④: capability pipeline per robot ────────────────────────
        self.step_robots(now, &live);

        // ── Phase ⑤: commit motion ────────────────────────────────────────
        //
        // Deferred to a single point so every within-tick interaction saw
        // the same start-of-tick pose snapshot.
        let dt = self.config.dt_secs;
        for &robot in &live {
            let i = robot.index();
            let next = self.arena.integrate(self.robots.pose[i], self.robots.velocity[i], dt);
            self.robots.pose[i] = next;
        }

        live.len()
    }

    /// Compute one [`Command`] per live robot.
    ///
    /// With the `parallel` Cargo feature, controllers run on Rayon's thread
    /// pool; the context is immutable and each robot's RNG reference is
    /// exclusive, so no synchronisation is needed.
    fn compute_commands(&mut self, now: Tick, live: &[RobotId]) -> Vec<Command> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let robots     = &self.robots;
        let arena      = &self.arena;
        let controller = &self.controller;
        let rngs       = &mut self.rngs;

        let ctx = SimContext::new(now, self.config.dt_secs, robots, arena, self.field.ambient());

        #[cfg(not(feature = "parallel"))]
        {
            live.iter()
                .map(|&robot| controller.act(robot, &ctx, rngs.get_mut(robot)))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // `get_many_mut` returns disjoint &mut refs indexed by unique
            // RobotIds; the live roster is an ascending scan, so uniqueness
            // holds.
            let rng_refs = rngs.get_many_mut(live);

            live.par_iter()
                .zip(rng_refs.into_par_iter())
                .map(|(&robot, rng)| controller.act(robot, &ctx, rng))
                .collect()
        }
    }

    /// Phase ④: the fixed capability pipeline, per live robot:
    ///
    /// locomotion → energy → emission → reception.
    ///
    /// Ordering rationale: energy rules may charge for motion, so the
    /// velocity must be resolved first; emission precedes reception so the
    /// accumulating aggregate is complete before anything could read it —
    /// though receivers hear the *settled* aggregate, keeping reception
    /// independent of roster order.
    fn step_robots(&mut self, now: Tick, live: &[RobotId]) {
        let dt = self.config.dt_secs;
        let ambient = self.field.ambient();

        // Destructure for disjoint field borrows inside the loop.
        let RobotStore {
            alive,
            pose,
            velocity,
            command,
            drive,
            energy,
            speaker,
            microphone,
            ..
        } = &mut self.robots;
        let arena = &self.arena;
        let field = &mut self.field;
        let rngs = &mut self.rngs;

        for &robot in live {
            let i = robot.index();

            // ── Locomotion: resolve this tick's commanded velocity ────────
            velocity[i] = match &drive[i] {
                Some(d) => d.compute(command[i], rngs.get_mut(robot)),
                None => Velocity::ZERO,
            };

            // ── Energy: derives from the velocity just resolved ───────────
            if let Some(meter) = &mut energy[i] {
                let ctx = EnergyContext { pose: pose[i], velocity: velocity[i], dt };
                meter.update(now, &ctx);
            }

            // ── Emission: contribute this robot's profile to the field ────
            if let Some(sp) = &speaker[i] {
                field.contribute(sp.profile());
            }

            // ── Reception: near emitters + the settled ambient ────────────
            if let Some(mic) = &mut microphone[i] {
                let listener = pose[i];
                let reach = mic.reach();
                let mut emitters: Vec<Emitter> = Vec::new();

                // Sounding objects within reach (R-tree broad phase).
                for (_, object) in arena.nearby_objects(listener.pos, reach) {
                    if let Some(frequencies) = object.sound {
                        if !frequencies.is_empty() {
                            emitters.push(Emitter { pos: object.pos, frequencies });
                        }
                    }
                }

                // Other robots' speakers — self excluded: a robot never
                // hears its own speaker through the near-field path.
                // Profiles were fixed in phase ③, so this read does not
                // depend on roster order.  Linear scan: rosters are small,
                // only the object set gets a spatial index.
                for j in 0..alive.len() {
                    if j == i || !alive[j] {
                        continue;
                    }
                    if let Some(other) = &speaker[j] {
                        let profile = other.profile();
                        if profile.is_empty() {
                            continue;
                        }
                        if pose[j].pos.distance(listener.pos) <= reach {
                            emitters.push(Emitter { pos: pose[j].pos, frequencies: profile });
                        }
                    }
                }

                mic.listen(listener, &emitters, ambient);
            }
        }
    }
}
