//! The differential-drive kinematic model.

use swarm_core::{RobotRng, Velocity, WheelCommand};

use crate::{MotionError, MotionResult};

/// Converts left/right wheel speed commands into a noisy body velocity.
///
/// Standard differential-drive kinematics over the axle:
///
/// ```text
/// linear  = (left + right) / 2
/// angular = (right - left) / axle_length
/// ```
///
/// Each wheel speed is first clamped to `±max_speed`, then perturbed by
/// bounded multiplicative slip noise `speed * (1 + U(-slip, +slip))`,
/// modelling real actuator slip.  The noise consumes exactly two RNG draws
/// per call (one per wheel) regardless of the configured amplitude, so a
/// run's RNG stream is stable across noise configurations.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifferentialDrive {
    axle_length: f32,
    max_speed:   f32,
    slip:        f32,
}

impl DifferentialDrive {
    /// Build a drive model.
    ///
    /// # Errors
    ///
    /// Refuses to build on invalid configuration: `axle_length` and
    /// `max_speed` must be positive and finite, `slip` must be in `[0, 1)`.
    pub fn new(axle_length: f32, max_speed: f32, slip: f32) -> MotionResult<Self> {
        if !(axle_length.is_finite() && axle_length > 0.0) {
            return Err(MotionError::NonPositiveAxle(axle_length));
        }
        if !(max_speed.is_finite() && max_speed > 0.0) {
            return Err(MotionError::NonPositiveMaxSpeed(max_speed));
        }
        if !(0.0..1.0).contains(&slip) {
            return Err(MotionError::SlipOutOfRange(slip));
        }
        Ok(Self { axle_length, max_speed, slip })
    }

    /// A drive with no slip noise — useful in tests and for ideal-actuator
    /// robots.
    pub fn exact(axle_length: f32, max_speed: f32) -> MotionResult<Self> {
        Self::new(axle_length, max_speed, 0.0)
    }

    #[inline]
    pub fn axle_length(&self) -> f32 {
        self.axle_length
    }

    #[inline]
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    #[inline]
    pub fn slip(&self) -> f32 {
        self.slip
    }

    /// Compute the body velocity commanded this tick.
    ///
    /// Consumes two draws from `rng` (left wheel, then right wheel).  The
    /// caller feeds the result to the arena's integrator; this model never
    /// mutates a pose.
    pub fn compute(&self, command: WheelCommand, rng: &mut RobotRng) -> Velocity {
        let left  = command.left.clamp(-self.max_speed, self.max_speed) * rng.slip_factor(self.slip);
        let right = command.right.clamp(-self.max_speed, self.max_speed) * rng.slip_factor(self.slip);

        Velocity {
            linear:  (left + right) * 0.5,
            angular: (right - left) / self.axle_length,
        }
    }
}
