use swarm_core::RobotId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match robot count {expected}")]
    RobotCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("robot {0} not found or already removed")]
    RobotNotFound(RobotId),

    #[error("robot {0} starts outside the arena bounds")]
    RobotOutOfBounds(RobotId),
}

pub type SimResult<T> = Result<T, SimError>;
