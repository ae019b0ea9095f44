//! Microphone response models.
//!
//! A response model decides whether an emitter at a given distance triggers
//! a sensor.  Distance is the only input: directional gain and per-frequency
//! sensitivity belong to the sensor geometry and channel width, not the
//! response curve.

/// Maps emitter distance to a detection decision for a receiving sensor.
///
/// `range` is the microphone's configured maximum detection range; models
/// may ignore it (the microphone has already rejected emitters beyond it)
/// or use it to normalise the distance.
pub trait ResponseModel: Send + Sync + 'static {
    fn detects(&self, distance: f32, range: f32) -> bool;
}

/// Hears everything out to the full range, nothing beyond.
///
/// The classic step model: detection is a hard cutoff at `range`.
#[derive(Copy, Clone, Debug, Default)]
pub struct StepResponse;

impl ResponseModel for StepResponse {
    #[inline]
    fn detects(&self, distance: f32, range: f32) -> bool {
        distance <= range
    }
}

/// Inverse-square intensity against a threshold.
///
/// Intensity is `1 / max(distance, 0.01)²` (reference intensity 1 at 1 m,
/// floored near the emitter); detection requires intensity ≥ `threshold`
/// and distance within range.  A threshold of `1 / r²` detects out to
/// distance `r`.
#[derive(Copy, Clone, Debug)]
pub struct FalloffResponse {
    pub threshold: f32,
}

impl ResponseModel for FalloffResponse {
    #[inline]
    fn detects(&self, distance: f32, range: f32) -> bool {
        if distance > range {
            return false;
        }
        let d = distance.max(0.01);
        1.0 / (d * d) >= self.threshold
    }
}
