//! chorus — smallest runnable example for the rust_swarm framework.
//!
//! Eight robots wander a 30 × 30 m arena.  A sound beacon marks a feeding
//! zone; robots that hear it steer toward it, recharge inside the zone, and
//! once charged start singing on their own channel — which every robot in
//! the world hears one tick later through the broadcast aggregate.  CSV
//! telemetry lands in `./chorus_output`.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use swarm_arena::{Arena, PhysicalObject};
use swarm_control::{Command, Controller, SimContext};
use swarm_core::{FrequencyMask, Pose, RobotId, RobotRng, SimConfig, Vec2};
use swarm_energy::{EnergyMeter, ZoneFeed};
use swarm_motion::DifferentialDrive;
use swarm_output::{CsvWriter, SimOutputObserver};
use swarm_robot::RobotStoreBuilder;
use swarm_sim::SimBuilder;
use swarm_sound::{Microphone, Speaker, StepResponse};

// ── Constants ─────────────────────────────────────────────────────────────────

const ROBOT_COUNT:    usize = 8;
const SEED:           u64   = 42;
const DT_SECS:        f64   = 0.05; // 20 Hz control rate
const SIM_SECS:       f64   = 60.0;
const ARENA_SIDE:     f32   = 30.0;
const CHANNELS:       u8    = 8;

const MIC_OFFSET:     f32   = 0.25; // sensors 25 cm from the body centre
const MIC_RANGE:      f32   = 6.0;
const AXLE_LENGTH:    f32   = 0.5;
const MAX_SPEED:      f32   = 1.2;
const SLIP:           f32   = 0.05;

const FEED_CENTRE:    Vec2  = Vec2 { x: 8.0, y: 8.0 };
const FEED_RADIUS:    f32   = 3.0;
const FEED_RATE:      f32   = 1.0;  // units/s inside the zone
const DRAIN_RATE:     f32   = 0.05; // units/s outside

/// Channel the feeding beacon emits on (near-field only).
const BEACON_CHANNEL: u8 = 2;
/// Channel a charged robot sings on (reaches everyone via the aggregate).
const SONG_CHANNEL:   u8 = 0;
/// Energy level above which a robot sings.
const SING_THRESHOLD: f32 = 5.0;

// ── Controller ────────────────────────────────────────────────────────────────

/// Wander; steer toward a heard beacon; sing when charged.
struct ChorusController;

impl ChorusController {
    /// Map the four-way sensor that heard the beacon to a wheel bias:
    /// sensor 0 is dead ahead, 1 left, 2 behind, 3 right.
    fn steer_toward(sensor: usize, speed: f32) -> Command {
        match sensor {
            0 => Command::drive(speed, speed),
            1 => Command::drive(0.2 * speed, speed),
            2 => Command::drive(-0.5 * speed, speed),
            _ => Command::drive(speed, 0.2 * speed),
        }
    }
}

impl Controller for ChorusController {
    fn act(&self, robot: RobotId, ctx: &SimContext<'_>, rng: &mut RobotRng) -> Command {
        let speed = 0.8;

        // Steering: head for the beacon if any sensor hears it, otherwise
        // wander with a little differential jitter.
        let mut cmd = match ctx
            .robots
            .heard(robot)
            .and_then(|heard| heard.iter().position(|m| m.contains(BEACON_CHANNEL)))
        {
            Some(sensor) => Self::steer_toward(sensor, speed),
            None => {
                let wobble: f32 = rng.gen_range(-0.3..0.3);
                Command::drive(speed + wobble, speed - wobble)
            }
        };

        // Song: emit while charged.  The emission joins this tick's world
        // aggregate; the rest of the swarm hears it next tick.
        if ctx.robots.energy_level(robot).unwrap_or(0.0) > SING_THRESHOLD {
            cmd = cmd.emitting(FrequencyMask::single(SONG_CHANNEL));
        }

        cmd
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let start = Instant::now();

    // World: arena + feeding beacon.
    let mut arena = Arena::new(ARENA_SIDE, ARENA_SIDE)?;
    arena.insert(PhysicalObject::beacon(
        FEED_CENTRE,
        0.3,
        FrequencyMask::single(BEACON_CHANNEL),
    ))?;

    // Robots: ring start positions, all four capabilities each.
    let mut robots = RobotStoreBuilder::new(SEED);
    for i in 0..ROBOT_COUNT {
        let angle = i as f32 / ROBOT_COUNT as f32 * std::f32::consts::TAU;
        let pose = Pose::new(10.0 * angle.cos(), 10.0 * angle.sin(), angle);
        robots
            .robot(pose)
            .drive(DifferentialDrive::new(AXLE_LENGTH, MAX_SPEED, SLIP)?)
            .energy(EnergyMeter::new(Box::new(ZoneFeed::new(
                FEED_CENTRE,
                FEED_RADIUS,
                FEED_RATE,
                DRAIN_RATE,
            )?)))
            .speaker(Speaker::new(CHANNELS)?)
            .microphone(Microphone::four_way(
                MIC_OFFSET,
                MIC_RANGE,
                CHANNELS,
                Box::new(StepResponse),
            )?);
    }
    let (store, rngs) = robots.build();

    let config = SimConfig {
        dt_secs: DT_SECS,
        total_ticks: (SIM_SECS / DT_SECS) as u64,
        seed: SEED,
        snapshot_interval_ticks: 20, // once per simulated second
    };

    let mut sim = SimBuilder::new(config.clone(), store, rngs, arena, ChorusController).build()?;

    // Telemetry.
    let out_dir = Path::new("chorus_output");
    fs::create_dir_all(out_dir)?;
    let mut observer = SimOutputObserver::new(CsvWriter::new(out_dir)?, &config);

    sim.run(&mut observer)?;
    if let Some(e) = observer.take_error() {
        eprintln!("telemetry error: {e}");
    }

    // Summary.
    println!(
        "simulated {} robots for {:.0} s ({} ticks) in {:.2?}",
        sim.robots.live_count(),
        SIM_SECS,
        config.total_ticks,
        start.elapsed(),
    );
    for robot in sim.robots.robot_ids() {
        println!(
            "  {robot}: pose {}, energy {:.2}",
            sim.robots.pose[robot.index()],
            sim.robots.energy_level(robot).unwrap_or(0.0),
        );
    }
    println!("final broadcast state: {}", sim.field.current_state());
    println!("telemetry written to {}", out_dir.display());

    Ok(())
}
