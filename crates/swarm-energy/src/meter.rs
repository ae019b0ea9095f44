//! The per-robot energy ledger.

use swarm_core::Tick;

use crate::model::{EnergyContext, EnergyModel};

/// Tracks a robot's energy reservoir and its first difference across ticks.
///
/// The meter enforces the *shift-then-apply* ordering:
///
/// 1. `previous_delta ← delta` (snapshot before overwrite)
/// 2. `delta ← model.delta(ctx)`
/// 3. `energy ← energy + delta`
///
/// which yields the cross-tick invariant `previous_delta(t) == delta(t-1)`
/// for every tick `t > 0`.  Updates are idempotent within a tick: a second
/// call with the same tick number is a no-op, so a driver bug cannot
/// double-count a delta.
///
/// Energy is unclamped — this crate defines no bounds.
pub struct EnergyMeter {
    energy:         f32,
    delta:          f32,
    previous_delta: f32,
    /// Tick of the last applied update; `None` while the meter is idle
    /// (never updated since construction).
    last_update:    Option<Tick>,
    model:          Box<dyn EnergyModel>,
}

impl EnergyMeter {
    /// A meter starting at zero energy with `model` as its production rule.
    pub fn new(model: Box<dyn EnergyModel>) -> Self {
        Self::with_initial(0.0, model)
    }

    /// A meter starting at `energy`.
    pub fn with_initial(energy: f32, model: Box<dyn EnergyModel>) -> Self {
        Self {
            energy,
            delta: 0.0,
            previous_delta: 0.0,
            last_update: None,
            model,
        }
    }

    // ── Bookkeeping ───────────────────────────────────────────────────────

    /// Apply one tick's energy update.
    ///
    /// Idempotent for a given `now`: only the first call per tick touches
    /// the ledger.
    pub fn update(&mut self, now: Tick, ctx: &EnergyContext) {
        if self.last_update == Some(now) {
            return;
        }
        let new_delta = self.model.delta(ctx);
        self.previous_delta = self.delta;
        self.delta = new_delta;
        self.energy += self.delta;
        self.last_update = Some(now);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn energy(&self) -> f32 {
        self.energy
    }

    /// The delta applied by the most recent update.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// The delta applied by the update before that.
    #[inline]
    pub fn previous_delta(&self) -> f32 {
        self.previous_delta
    }

    /// `true` until the first update is applied.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.last_update.is_none()
    }
}

impl std::fmt::Debug for EnergyMeter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnergyMeter")
            .field("energy", &self.energy)
            .field("delta", &self.delta)
            .field("previous_delta", &self.previous_delta)
            .field("last_update", &self.last_update)
            .finish_non_exhaustive()
    }
}
