//! A no-op controller — robots stand still and stay silent.

use swarm_core::{RobotId, RobotRng};

use crate::{Command, Controller, SimContext};

/// A [`Controller`] that always returns [`Command::IDLE`].
///
/// Useful as a placeholder in tests and for passive robot populations that
/// only occupy space and listen.
#[derive(Debug)]
pub struct NoopController;

impl Controller for NoopController {
    fn act(&self, _robot: RobotId, _ctx: &SimContext<'_>, _rng: &mut RobotRng) -> Command {
        Command::IDLE
    }
}
