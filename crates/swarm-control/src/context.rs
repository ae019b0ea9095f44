//! Read-only simulation state passed to every controller callback.

use swarm_arena::Arena;
use swarm_core::{FrequencyMask, Tick};
use swarm_robot::RobotStore;

/// A read-only snapshot of the simulation state shared by all controllers
/// during one tick's controller phase.
///
/// Built once per tick by the driver; every borrow lives only for that
/// phase, during which nothing mutates the underlying structures.  Poses,
/// reception results, and energy levels are therefore the values settled at
/// the end of the *previous* tick — uniform for every robot, whatever order
/// they are processed in.
pub struct SimContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Tick duration in seconds.
    pub dt: f64,

    /// Read-only view of every robot's SoA state.
    pub robots: &'a RobotStore,

    /// The world: bounds and object queries.
    pub arena: &'a Arena,

    /// The settled sound aggregate of the previous completed tick — what
    /// every microphone will hear as ambient this tick.
    pub ambient: FrequencyMask,
}

impl<'a> SimContext<'a> {
    /// Build a new context for a single tick.
    #[inline]
    pub fn new(
        tick:    Tick,
        dt:      f64,
        robots:  &'a RobotStore,
        arena:   &'a Arena,
        ambient: FrequencyMask,
    ) -> Self {
        Self { tick, dt, robots, arena, ambient }
    }
}
