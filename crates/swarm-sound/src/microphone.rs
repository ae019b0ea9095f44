//! Directional sound reception.

use swarm_core::{FrequencyMask, MAX_CHANNELS, Pose, Vec2};

use crate::response::ResponseModel;
use crate::{SoundError, SoundResult};

// ── Sensor geometry ───────────────────────────────────────────────────────────

/// One reception point, fixed in the robot's body frame: `distance` metres
/// from the centre along `bearing` radians relative to the heading.
///
/// Geometry is configuration — the offsets never change at runtime.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorOffset {
    pub distance: f32,
    pub bearing:  f32,
}

impl SensorOffset {
    pub fn new(distance: f32, bearing: f32) -> Self {
        Self { distance, bearing }
    }
}

// ── Emitters ──────────────────────────────────────────────────────────────────

/// A sound source as seen by a listening microphone: a world position and
/// the frequencies it emits.
///
/// The driver assembles these from nearby beacon objects and other robots'
/// speakers.  The listening robot itself must never appear in the list — a
/// robot does not hear its own speaker through this path.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Emitter {
    pub pos:         Vec2,
    pub frequencies: FrequencyMask,
}

// ── Microphone ────────────────────────────────────────────────────────────────

/// A directional multi-sensor microphone.
///
/// Each [`SensorOffset`] is an independent reception point.  Per tick,
/// [`listen`](Self::listen) records for every sensor the union of:
///
/// - the frequencies of each supplied emitter whose distance to *that
///   sensor* is within range and passes the response model, and
/// - the ambient mask (the settled world aggregate), unattenuated.
///
/// Everything is truncated to the configured channel width.  No emitters
/// and silence ambient yield empty masks — an ordinary result, not an
/// error.
pub struct Microphone {
    offsets:  Vec<SensorOffset>,
    range:    f32,
    channels: u8,
    response: Box<dyn ResponseModel>,
    /// Per-sensor result of the most recent `listen`, same order as
    /// `offsets`.
    heard:    Vec<FrequencyMask>,
}

impl Microphone {
    /// Build a microphone from explicit sensor geometry.
    ///
    /// # Errors
    ///
    /// Configuration is validated eagerly; any violation refuses to build:
    /// - `offsets` must be non-empty, every distance finite and ≥ 0;
    /// - `range` must be positive and finite;
    /// - `channels` must be in `1..=MAX_CHANNELS`.
    pub fn new(
        offsets:  Vec<SensorOffset>,
        range:    f32,
        channels: u8,
        response: Box<dyn ResponseModel>,
    ) -> SoundResult<Self> {
        if offsets.is_empty() {
            return Err(SoundError::EmptyGeometry);
        }
        for (index, o) in offsets.iter().enumerate() {
            if !o.distance.is_finite() || o.distance < 0.0 || !o.bearing.is_finite() {
                return Err(SoundError::InvalidOffset { index, distance: o.distance });
            }
        }
        if !(range.is_finite() && range > 0.0) {
            return Err(SoundError::NonPositiveRange(range));
        }
        if channels == 0 || channels > MAX_CHANNELS {
            return Err(SoundError::ChannelCountOutOfRange(channels));
        }

        let heard = vec![FrequencyMask::EMPTY; offsets.len()];
        Ok(Self { offsets, range, channels, response, heard })
    }

    /// The canonical four-sensor layout: sensors `distance` metres from the
    /// centre at bearings 0, π/2, π and 3π/2.
    pub fn four_way(
        distance: f32,
        range:    f32,
        channels: u8,
        response: Box<dyn ResponseModel>,
    ) -> SoundResult<Self> {
        use std::f32::consts::FRAC_PI_2;
        let offsets = (0..4)
            .map(|i| SensorOffset::new(distance, i as f32 * FRAC_PI_2))
            .collect();
        Self::new(offsets, range, channels, response)
    }

    // ── Configuration accessors ───────────────────────────────────────────

    #[inline]
    pub fn sensor_count(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn offsets(&self) -> &[SensorOffset] {
        &self.offsets
    }

    #[inline]
    pub fn range(&self) -> f32 {
        self.range
    }

    #[inline]
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Broad-phase query radius: the detection range plus the farthest
    /// sensor's offset from the body centre.  An emitter beyond this
    /// distance from the *centre* cannot be within `range` of any sensor.
    pub fn reach(&self) -> f32 {
        let max_offset = self
            .offsets
            .iter()
            .map(|o| o.distance)
            .fold(0.0f32, f32::max);
        self.range + max_offset
    }

    // ── Reception ─────────────────────────────────────────────────────────

    /// Run one tick of reception and store the per-sensor results.
    ///
    /// `emitters` is the set of nearby sound sources supplied by the driver
    /// (self excluded); `ambient` is the settled world aggregate.
    pub fn listen(&mut self, pose: Pose, emitters: &[Emitter], ambient: FrequencyMask) {
        for (sensor, offset) in self.offsets.iter().enumerate() {
            let at = pose.local_point(offset.distance, offset.bearing);

            let mut mask = ambient;
            for emitter in emitters {
                if emitter.frequencies.is_empty() {
                    continue;
                }
                let distance = at.distance(emitter.pos);
                if distance <= self.range && self.response.detects(distance, self.range) {
                    mask |= emitter.frequencies;
                }
            }

            self.heard[sensor] = mask.truncate(self.channels);
        }
    }

    /// Per-sensor masks from the most recent `listen`, in offset order.
    #[inline]
    pub fn heard(&self) -> &[FrequencyMask] {
        &self.heard
    }

    /// Union over all sensors — "did anything reach this robot at all".
    pub fn heard_any(&self) -> FrequencyMask {
        self.heard
            .iter()
            .copied()
            .fold(FrequencyMask::EMPTY, |acc, m| acc | m)
    }

    /// Clear the stored reception results.
    pub fn reset(&mut self) {
        self.heard.fill(FrequencyMask::EMPTY);
    }
}

impl std::fmt::Debug for Microphone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Microphone")
            .field("sensors", &self.offsets.len())
            .field("range", &self.range)
            .field("channels", &self.channels)
            .field("heard", &self.heard)
            .finish_non_exhaustive()
    }
}
