//! A robot's sound emission profile.

use swarm_core::{FrequencyMask, MAX_CHANNELS};

use crate::{SoundError, SoundResult};

/// The set of frequencies a robot is currently emitting.
///
/// Mutated by the robot's controller between ticks; read once per tick by
/// the driver, which contributes it to the [`SoundField`](crate::SoundField)
/// and exposes it to nearby microphones.  All stored masks are truncated to
/// the configured channel width.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Speaker {
    channels: u8,
    profile:  FrequencyMask,
}

impl Speaker {
    /// A silent speaker distinguishing `channels` frequencies.
    ///
    /// # Errors
    ///
    /// Returns [`SoundError::ChannelCountOutOfRange`] unless
    /// `1 <= channels <= MAX_CHANNELS`.
    pub fn new(channels: u8) -> SoundResult<Self> {
        if channels == 0 || channels > MAX_CHANNELS {
            return Err(SoundError::ChannelCountOutOfRange(channels));
        }
        Ok(Self { channels, profile: FrequencyMask::EMPTY })
    }

    #[inline]
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// The current emission mask.
    #[inline]
    pub fn profile(&self) -> FrequencyMask {
        self.profile
    }

    /// Replace the whole profile.  Channels beyond the configured width are
    /// dropped.
    #[inline]
    pub fn set_profile(&mut self, mask: FrequencyMask) {
        self.profile = mask.truncate(self.channels);
    }

    /// Switch a single channel on or off.
    ///
    /// # Errors
    ///
    /// Returns [`SoundError::ChannelOutOfRange`] if `channel` is beyond this
    /// speaker's width.
    pub fn set_channel(&mut self, channel: u8, on: bool) -> SoundResult<()> {
        if channel >= self.channels {
            return Err(SoundError::ChannelOutOfRange { channel, channels: self.channels });
        }
        if on {
            self.profile.set(channel);
        } else {
            self.profile.unset(channel);
        }
        Ok(())
    }

    /// Stop emitting on every channel.
    #[inline]
    pub fn silence(&mut self) {
        self.profile = FrequencyMask::EMPTY;
    }

    #[inline]
    pub fn is_silent(&self) -> bool {
        self.profile.is_empty()
    }
}
