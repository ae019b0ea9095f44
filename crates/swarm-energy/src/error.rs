use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnergyError {
    #[error("zone radius must be positive and finite, got {0}")]
    NonPositiveRadius(f32),
}

pub type EnergyResult<T> = Result<T, EnergyError>;
