use thiserror::Error;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("axle length must be positive and finite, got {0}")]
    NonPositiveAxle(f32),

    #[error("max wheel speed must be positive and finite, got {0}")]
    NonPositiveMaxSpeed(f32),

    #[error("slip amplitude must be in [0, 1), got {0}")]
    SlipOutOfRange(f32),
}

pub type MotionResult<T> = Result<T, MotionError>;
