//! Deterministic per-robot and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each robot gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (robot_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive robot IDs uniformly across the seed space.
//! Consequences:
//!
//! - Robots never share RNG state, so actuator noise draws in one robot can
//!   never perturb another robot's sequence.
//! - A robot's noise stream depends only on the global seed and its own ID —
//!   adding robots to the end of the roster does not disturb existing runs.
//! - The noise consumed per tick is fixed by the drive model, so replaying a
//!   run with the same seed reproduces every pose exactly.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::RobotId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RobotRng ──────────────────────────────────────────────────────────────────

/// Per-robot deterministic RNG.
///
/// One per robot, created at build time and stored in a parallel
/// `Vec<RobotRng>` alongside the SoA arrays.  The type is `!Sync` to prevent
/// accidental sharing across threads.
pub struct RobotRng(SmallRng);

impl core::fmt::Debug for RobotRng {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("RobotRng").finish_non_exhaustive()
    }
}

impl RobotRng {
    /// Seed deterministically from the run's global seed and a robot ID.
    pub fn new(global_seed: u64, robot: RobotId) -> Self {
        let seed = global_seed ^ (robot.0 as u64).wrapping_mul(MIXING_CONSTANT);
        RobotRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A bounded symmetric perturbation factor `1 + U(-amplitude, +amplitude)`.
    ///
    /// Consumes exactly one draw even when `amplitude == 0`, so per-tick RNG
    /// consumption does not depend on the noise configuration.
    #[inline]
    pub fn slip_factor(&mut self, amplitude: f32) -> f32 {
        1.0 + self.0.gen_range(-1.0f32..=1.0) * amplitude
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for world-scoped draws (object placement, exogenous
/// events).
///
/// Used only in single-threaded contexts; derive per-thread RNGs with
/// [`SimRng::child`] if parallel randomness is ever needed.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
