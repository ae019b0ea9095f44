//! Core robot storage: `RobotStore` (SoA data) and `RobotRngs` (per-robot
//! RNG).
//!
//! # Why two structs?
//!
//! The controller phase needs `&mut RobotRngs` (exclusive access to each
//! robot's RNG) and `&RobotStore` (shared read access to world state)
//! simultaneously.  The borrow checker forbids that if both live in one
//! struct; keeping the RNGs separate resolves the conflict cleanly — the
//! driver borrows `&sim.robots` and `&mut sim.rngs` as disjoint fields.

use swarm_core::{FrequencyMask, Pose, RobotId, RobotRng, Velocity, WheelCommand};
use swarm_energy::EnergyMeter;
use swarm_motion::DifferentialDrive;
use swarm_sound::{Microphone, Speaker};

// ── RobotRngs ─────────────────────────────────────────────────────────────────

/// Per-robot deterministic RNG state, separated from [`RobotStore`] to
/// enable simultaneous `&mut RobotRngs` + `&RobotStore` borrows.
///
/// `Send` but intentionally not shared: each parallel worker gets exclusive
/// references to distinct elements via [`get_many_mut`](Self::get_many_mut).
#[derive(Debug)]
pub struct RobotRngs {
    pub inner: Vec<RobotRng>,
}

impl RobotRngs {
    /// Allocate and seed `count` per-robot RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| RobotRng::new(global_seed, RobotId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one robot's RNG.
    #[inline]
    pub fn get_mut(&mut self, robot: RobotId) -> &mut RobotRng {
        &mut self.inner[robot.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Mutable references to the RNGs of a set of robots, for the parallel
    /// controller phase.
    ///
    /// # Precondition (enforced by caller)
    ///
    /// `robots` must contain no duplicate IDs and every index must be
    /// in-bounds.  The driver builds the list by ascending scan over the
    /// roster, which guarantees both.
    pub fn get_many_mut(&mut self, robots: &[RobotId]) -> Vec<&mut RobotRng> {
        let ptr = self.inner.as_mut_ptr();
        // SAFETY: every `RobotId` in `robots` is unique (caller invariant)
        // and within bounds (roster invariant), so each pointer aliases a
        // distinct element and no two returned references overlap.
        robots
            .iter()
            .map(|r| unsafe { &mut *ptr.add(r.index()) })
            .collect()
    }
}

// ── RobotStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all robot state.
///
/// Every `Vec` field has exactly `count` elements; a `RobotId` is the index
/// into all of them.  Body state (`pose`, `velocity`, `command`, `alive`) is
/// dense; the four capability arrays hold `None` for robots without that
/// capability.
///
/// Robots are never deleted from the arrays — removal flips `alive` and the
/// driver skips dead robots — so IDs stay stable for a robot's lifetime and
/// are never reused within a run.
#[derive(Debug)]
pub struct RobotStore {
    /// Number of robots (live and removed).  Equals the length of every
    /// SoA `Vec`.
    pub count: usize,

    // ── Body state ────────────────────────────────────────────────────────
    /// `false` once the robot has been removed from the world.
    pub alive: Vec<bool>,

    /// Position + heading, committed once per tick by the driver.
    pub pose: Vec<Pose>,

    /// Body velocity resolved by this tick's locomotion update.
    /// `Velocity::ZERO` for robots without the locomotion capability.
    pub velocity: Vec<Velocity>,

    /// Wheel speed command set by the controller phase.
    pub command: Vec<WheelCommand>,

    // ── Capability slots ──────────────────────────────────────────────────
    pub drive:      Vec<Option<DifferentialDrive>>,
    pub energy:     Vec<Option<EnergyMeter>>,
    pub speaker:    Vec<Option<Speaker>>,
    pub microphone: Vec<Option<Microphone>>,
}

impl RobotStore {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `RobotId`s in ascending index order, dead robots
    /// included — filter with [`is_alive`](Self::is_alive) where needed.
    pub fn robot_ids(&self) -> impl Iterator<Item = RobotId> + '_ {
        (0..self.count as u32).map(RobotId)
    }

    #[inline]
    pub fn is_alive(&self, robot: RobotId) -> bool {
        self.alive[robot.index()]
    }

    /// Number of robots still in the world.
    pub fn live_count(&self) -> usize {
        self.alive.iter().filter(|&&a| a).count()
    }

    /// Mark a robot as removed.  Its arrays stay allocated (IDs are stable)
    /// but every phase of the tick skips it from now on.
    ///
    /// Drivers normally call this through their own removal API rather than
    /// directly.
    pub fn retire(&mut self, robot: RobotId) {
        self.alive[robot.index()] = false;
    }

    // ── Capability queries ────────────────────────────────────────────────

    #[inline]
    pub fn has_drive(&self, robot: RobotId) -> bool {
        self.drive[robot.index()].is_some()
    }

    #[inline]
    pub fn has_energy(&self, robot: RobotId) -> bool {
        self.energy[robot.index()].is_some()
    }

    #[inline]
    pub fn has_speaker(&self, robot: RobotId) -> bool {
        self.speaker[robot.index()].is_some()
    }

    #[inline]
    pub fn has_microphone(&self, robot: RobotId) -> bool {
        self.microphone[robot.index()].is_some()
    }

    // ── Convenience accessors for controllers ─────────────────────────────

    /// Current energy level, if the robot keeps books.
    pub fn energy_level(&self, robot: RobotId) -> Option<f32> {
        self.energy[robot.index()].as_ref().map(|m| m.energy())
    }

    /// Per-sensor reception results from the robot's last listen, if it has
    /// a microphone.
    pub fn heard(&self, robot: RobotId) -> Option<&[FrequencyMask]> {
        self.microphone[robot.index()].as_ref().map(|m| m.heard())
    }

    /// Union of everything the robot heard last listen.
    pub fn heard_any(&self, robot: RobotId) -> FrequencyMask {
        self.microphone[robot.index()]
            .as_ref()
            .map(|m| m.heard_any())
            .unwrap_or(FrequencyMask::EMPTY)
    }

    // ── Package-private constructor used by RobotStoreBuilder ─────────────

    pub(crate) fn new(
        pose:       Vec<Pose>,
        drive:      Vec<Option<DifferentialDrive>>,
        energy:     Vec<Option<EnergyMeter>>,
        speaker:    Vec<Option<Speaker>>,
        microphone: Vec<Option<Microphone>>,
    ) -> Self {
        let count = pose.len();
        Self {
            count,
            alive: vec![true; count],
            pose,
            velocity: vec![Velocity::ZERO; count],
            command: vec![WheelCommand::STOP; count],
            drive,
            energy,
            speaker,
            microphone,
        }
    }
}
