//! Shared locomotion vocabulary.
//!
//! These types cross three crate boundaries — controllers produce
//! [`WheelCommand`]s, the drive model turns them into [`Velocity`]s, and the
//! arena integrates velocities into poses — so they live here rather than in
//! any one of those crates.

use std::fmt;

/// Commanded speeds for the two wheels of a differential drive, in m/s.
///
/// Set externally before the tick; consumed, never mutated, by the drive
/// model.  Positive values drive the wheel forward.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelCommand {
    pub left:  f32,
    pub right: f32,
}

impl WheelCommand {
    pub const STOP: WheelCommand = WheelCommand { left: 0.0, right: 0.0 };

    #[inline]
    pub fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Equal speed on both wheels — straight-line driving.
    #[inline]
    pub fn straight(speed: f32) -> Self {
        Self { left: speed, right: speed }
    }
}

/// A body velocity: linear speed along the heading plus turn rate.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    /// Forward speed in m/s (negative = reverse).
    pub linear: f32,
    /// Turn rate in rad/s, CCW positive.
    pub angular: f32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { linear: 0.0, angular: 0.0 };

    #[inline]
    pub fn new(linear: f32, angular: f32) -> Self {
        Self { linear, angular }
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} m/s, {:.3} rad/s", self.linear, self.angular)
    }
}
