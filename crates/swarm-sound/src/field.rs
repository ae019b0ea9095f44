//! World-wide sound aggregation.

use swarm_core::FrequencyMask;

/// The world-scoped aggregate of every robot's emitted frequencies.
///
/// Double-buffered: [`contribute`](Self::contribute) ORs into the
/// *accumulating* mask for the current tick, while
/// [`ambient`](Self::ambient) exposes the *settled* aggregate of the
/// previous completed tick.  Receivers read the settled mask, so what a
/// robot hears never depends on where it sits in the tick's iteration
/// order.
///
/// # Lifecycle per tick
///
/// 1. The driver calls [`begin_tick`](Self::begin_tick) exactly once,
///    before any robot emits: the accumulator settles and clears.
/// 2. Each emitting robot's mask is [`contribute`](Self::contribute)d.
///    OR is commutative and associative, so contribution order is
///    irrelevant.
/// 3. Reception reads [`ambient`](Self::ambient) for the remainder of the
///    tick; [`current_state`](Self::current_state) exposes the in-progress
///    accumulator for telemetry and tests.
///
/// There are no failure modes — this is a pure bitwise accumulator.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundField {
    /// Aggregate being built by the current tick's emissions.
    current: FrequencyMask,
    /// Completed aggregate of the previous tick; what receivers hear.
    settled: FrequencyMask,
}

impl SoundField {
    /// A silent field: both buffers empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// The once-per-tick reset.  Settles the accumulated mask for receivers
    /// and clears the accumulator for this tick's emissions.
    ///
    /// Must be called by the world driver, once per tick — never per robot:
    /// a per-robot reset would clobber the aggregate built by robots
    /// processed earlier in the same tick.
    pub fn begin_tick(&mut self) {
        self.settled = self.current;
        self.current = FrequencyMask::EMPTY;
    }

    /// OR a robot's emission mask into this tick's aggregate.
    #[inline]
    pub fn contribute(&mut self, emission: FrequencyMask) {
        self.current |= emission;
    }

    /// The aggregate accumulated so far this tick (read-only).
    #[inline]
    pub fn current_state(&self) -> FrequencyMask {
        self.current
    }

    /// The settled aggregate of the previous completed tick — the ambient
    /// sound every receiver hears this tick, regardless of distance.
    #[inline]
    pub fn ambient(&self) -> FrequencyMask {
        self.settled
    }

    /// `true` if nothing was heard last tick and nothing has been emitted
    /// yet this tick.
    #[inline]
    pub fn is_silent(&self) -> bool {
        self.current.is_empty() && self.settled.is_empty()
    }
}
