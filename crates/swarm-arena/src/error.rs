use swarm_core::ObjectId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("invalid arena bounds {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },

    #[error("invalid object: {0}")]
    InvalidObject(String),

    #[error("object {0} not found")]
    ObjectNotFound(ObjectId),
}

pub type ArenaResult<T> = Result<T, ArenaError>;
