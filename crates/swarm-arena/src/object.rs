//! Static physical objects placed in the arena.

use swarm_core::{FrequencyMask, Vec2};

/// A static body in the arena: an obstacle, a marker, or a sound beacon.
///
/// Objects do not move and do not step; robots interact with them through
/// proximity queries.  An object with a non-empty `sound` mask is an
/// environmental sound source that microphones can detect within range,
/// exactly like a robot emitter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalObject {
    /// Centre position in arena coordinates.
    pub pos: Vec2,

    /// Body radius in metres.  Zero is allowed (point markers).
    pub radius: f32,

    /// Frequencies this object emits continuously, or `None` for a silent
    /// body.
    pub sound: Option<FrequencyMask>,
}

impl PhysicalObject {
    /// A silent body.
    pub fn body(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius, sound: None }
    }

    /// A sound beacon emitting `frequencies` continuously.
    pub fn beacon(pos: Vec2, radius: f32, frequencies: FrequencyMask) -> Self {
        Self { pos, radius, sound: Some(frequencies) }
    }

    /// `true` if this object currently emits any frequency.
    #[inline]
    pub fn is_sounding(&self) -> bool {
        self.sound.is_some_and(|m| !m.is_empty())
    }
}
