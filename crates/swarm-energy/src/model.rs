//! Pluggable energy production rules.

use swarm_core::{Pose, Vec2, Velocity};

use crate::{EnergyError, EnergyResult};

/// The physical/behavioural context an energy rule may draw on.
///
/// Built by the driver after locomotion has been resolved for the tick, so
/// `velocity` is the velocity commanded *this* tick — rules that charge for
/// motion see the motion they are charging for.
#[derive(Copy, Clone, Debug)]
pub struct EnergyContext {
    /// The robot's pose at the start of the tick.
    pub pose: Pose,
    /// The body velocity resolved by this tick's locomotion update.
    pub velocity: Velocity,
    /// Tick duration in seconds.
    pub dt: f64,
}

/// A rule producing the per-tick energy delta.
///
/// Implementations may be stateful (feeding events, depletion curves); the
/// meter calls [`delta`](Self::delta) exactly once per applied tick.
/// `Send + Sync` so a meter can sit in robot storage shared read-only with a
/// parallel controller phase.
pub trait EnergyModel: Send + Sync + 'static {
    /// The energy change for one tick, in whatever unit the application
    /// ascribes to energy.  Positive = gain.
    fn delta(&mut self, ctx: &EnergyContext) -> f32;
}

// ── Provided rules ────────────────────────────────────────────────────────────

/// A fixed rate in energy units per second, independent of context.
///
/// Negative rates model idle drain; positive rates model trickle charging.
#[derive(Copy, Clone, Debug)]
pub struct ConstantRate(pub f32);

impl EnergyModel for ConstantRate {
    fn delta(&mut self, ctx: &EnergyContext) -> f32 {
        self.0 * ctx.dt as f32
    }
}

/// Drain that grows with commanded speed: `-(idle + per_speed * |v|) * dt`.
#[derive(Copy, Clone, Debug)]
pub struct MotionCost {
    /// Units/second burned while standing still.
    pub idle_rate: f32,
    /// Additional units/second per m/s of linear speed.
    pub per_speed: f32,
}

impl EnergyModel for MotionCost {
    fn delta(&mut self, ctx: &EnergyContext) -> f32 {
        -(self.idle_rate + self.per_speed * ctx.velocity.linear.abs()) * ctx.dt as f32
    }
}

/// Recharge inside a circular zone, drain outside it.
///
/// Models a feeding area: a robot whose centre is within `radius` of
/// `centre` gains `feed_rate` units/second, otherwise it loses
/// `drain_rate` units/second.
#[derive(Copy, Clone, Debug)]
pub struct ZoneFeed {
    centre:     Vec2,
    radius:     f32,
    feed_rate:  f32,
    drain_rate: f32,
}

impl ZoneFeed {
    /// # Errors
    ///
    /// Refuses to build unless `radius` is positive and finite.
    pub fn new(centre: Vec2, radius: f32, feed_rate: f32, drain_rate: f32) -> EnergyResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(EnergyError::NonPositiveRadius(radius));
        }
        Ok(Self { centre, radius, feed_rate, drain_rate })
    }

    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.distance_sq(self.centre) <= self.radius * self.radius
    }
}

impl EnergyModel for ZoneFeed {
    fn delta(&mut self, ctx: &EnergyContext) -> f32 {
        let rate = if self.contains(ctx.pose.pos) {
            self.feed_rate
        } else {
            -self.drain_rate
        };
        rate * ctx.dt as f32
    }
}
