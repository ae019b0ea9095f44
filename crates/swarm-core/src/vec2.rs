//! Planar vector and pose math.
//!
//! The arena is a flat plane measured in metres.  Headings are radians,
//! counter-clockwise, zero along +x.  `f32` keeps the SoA arrays compact and
//! gives sub-millimetre precision at arena scale (tens of metres).

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

// ── Vec2 ─────────────────────────────────────────────────────────────────────

/// A 2-D vector / point in arena coordinates (metres).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle` radians (CCW from +x).
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        Self { x: angle.cos(), y: angle.sin() }
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance to `other` in metres.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Squared distance — cheaper than [`distance`](Self::distance) for
    /// range comparisons against a squared radius.
    #[inline]
    pub fn distance_sq(self, other: Vec2) -> f32 {
        let d = other - self;
        d.x * d.x + d.y * d.y
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Angle of this vector in radians, in `(-π, π]`.
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── Pose ─────────────────────────────────────────────────────────────────────

/// Position + heading of a rigid body in the arena.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub pos: Vec2,
    /// Heading in radians, CCW, zero along +x.  Kept in `(-π, π]` by
    /// [`wrap_angle`]; callers that mutate `heading` directly should re-wrap.
    pub heading: f32,
}

impl Pose {
    #[inline]
    pub fn new(x: f32, y: f32, heading: f32) -> Self {
        Self { pos: Vec2::new(x, y), heading: wrap_angle(heading) }
    }

    /// World position of a body-frame point given in polar form: `distance`
    /// metres along `bearing` radians relative to the heading.
    ///
    /// Used to place sensor offsets around the body centre.
    #[inline]
    pub fn local_point(self, distance: f32, bearing: f32) -> Vec2 {
        self.pos + Vec2::from_angle(self.heading + bearing) * distance
    }

    /// Bearing from this pose to a world point, relative to the heading,
    /// wrapped to `(-π, π]`.
    #[inline]
    pub fn bearing_to(self, point: Vec2) -> f32 {
        wrap_angle((point - self.pos).angle() - self.heading)
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {:.3} rad", self.pos, self.heading)
    }
}

/// Wrap an angle into `(-π, π]`.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let a = angle.rem_euclid(TAU);
    if a > PI { a - TAU } else { a }
}
