//! Fluent builder for constructing a [`Sim`].

use swarm_arena::Arena;
use swarm_control::Controller;
use swarm_core::SimConfig;
use swarm_robot::{RobotRngs, RobotStore};
use swarm_sound::SoundField;

use crate::{Sim, SimError, SimResult};

/// Builder for [`Sim<C>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick duration, total ticks, seed, snapshot interval
/// - [`RobotStore`] + [`RobotRngs`] — from [`swarm_robot::RobotStoreBuilder`]
/// - [`Arena`] — the world
/// - `C: Controller` — the behaviour implementation
///
/// All cross-references are validated here; a missing or inconsistent
/// dependency is a configuration bug surfaced at build time, so the tick
/// loop itself has no recoverable failure path.
///
/// # Example
///
/// ```rust,ignore
/// let (store, rngs) = robots.build();
/// let mut sim = SimBuilder::new(config, store, rngs, arena, MyController)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<C: Controller> {
    config:     SimConfig,
    robots:     RobotStore,
    rngs:       RobotRngs,
    arena:      Arena,
    controller: C,
}

impl<C: Controller> SimBuilder<C> {
    /// Create a builder with all required inputs.
    pub fn new(
        config:     SimConfig,
        robots:     RobotStore,
        rngs:       RobotRngs,
        arena:      Arena,
        controller: C,
    ) -> Self {
        Self { config, robots, rngs, arena, controller }
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    ///
    /// # Errors
    ///
    /// - [`SimError::Config`] for a non-positive or non-finite tick duration;
    /// - [`SimError::RobotCountMismatch`] if the RNG bank does not match the
    ///   roster;
    /// - [`SimError::RobotOutOfBounds`] if any robot starts outside the
    ///   arena.
    pub fn build(self) -> SimResult<Sim<C>> {
        if !(self.config.dt_secs.is_finite() && self.config.dt_secs > 0.0) {
            return Err(SimError::Config(format!(
                "tick duration must be positive and finite, got {}",
                self.config.dt_secs
            )));
        }

        if self.rngs.len() != self.robots.count {
            return Err(SimError::RobotCountMismatch {
                expected: self.robots.count,
                got:      self.rngs.len(),
                what:     "robot RNGs",
            });
        }

        for robot in self.robots.robot_ids() {
            if !self.arena.contains(self.robots.pose[robot.index()].pos) {
                return Err(SimError::RobotOutOfBounds(robot));
            }
        }

        Ok(Sim {
            clock:      self.config.make_clock(),
            config:     self.config,
            robots:     self.robots,
            rngs:       self.rngs,
            arena:      self.arena,
            field:      SoundField::new(),
            controller: self.controller,
        })
    }
}
