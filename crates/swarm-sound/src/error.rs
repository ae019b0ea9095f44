use thiserror::Error;

#[derive(Debug, Error)]
pub enum SoundError {
    #[error("channel count must be in 1..=32, got {0}")]
    ChannelCountOutOfRange(u8),

    #[error("channel {channel} out of range for a {channels}-channel component")]
    ChannelOutOfRange { channel: u8, channels: u8 },

    #[error("detection range must be positive and finite, got {0}")]
    NonPositiveRange(f32),

    #[error("sensor geometry must contain at least one offset")]
    EmptyGeometry,

    #[error("sensor offset {index} is malformed (distance {distance})")]
    InvalidOffset { index: usize, distance: f32 },
}

pub type SoundResult<T> = Result<T, SoundError>;
