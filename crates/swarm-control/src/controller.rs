//! The `Controller` trait — the main extension point for user code.

use swarm_core::{RobotId, RobotRng};

use crate::{Command, SimContext};

/// Pluggable robot behaviour.
///
/// Implement this to decide, each tick, what every robot commands its
/// actuators and speaker to do.  The method receives a read-only
/// [`SimContext`] and the robot's own deterministic RNG, so behaviour is
/// reproducible regardless of thread ordering.
///
/// # Thread safety
///
/// The driver may call `act` for many robots in parallel, so
/// implementations must be `Send + Sync`.  State that varies per robot
/// belongs in `RobotStore` (read through `ctx.robots`) or in per-robot
/// collections owned by the controller and indexed by `RobotId` — never in
/// fields mutated during `act`.
///
/// # Example
///
/// ```rust,ignore
/// struct SingWhenCrowded;
///
/// impl Controller for SingWhenCrowded {
///     fn act(&self, robot: RobotId, ctx: &SimContext<'_>, _rng: &mut RobotRng) -> Command {
///         let heard = ctx.robots.heard_any(robot);
///         let mut cmd = Command::drive(0.4, 0.4);
///         if !heard.is_empty() {
///             cmd = cmd.emitting(FrequencyMask::single(1));
///         }
///         cmd
///     }
/// }
/// ```
pub trait Controller: Send + Sync + 'static {
    /// Called once per live robot per tick.
    ///
    /// Return [`Command::IDLE`] to do nothing; the robot keeps its pose and
    /// stays silent.
    fn act(&self, robot: RobotId, ctx: &SimContext<'_>, rng: &mut RobotRng) -> Command;
}
