//! Simulation observer trait for progress reporting and data collection.

use swarm_core::Tick;
use swarm_robot::RobotStore;
use swarm_sound::SoundField;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, stepped: usize, field: &SoundField) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {stepped} robots, field {}", field.current_state());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the field settles.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `stepped` is the number of live robots processed; `field` exposes the
    /// fully accumulated aggregate for the tick — the read-only
    /// introspection point for telemetry and test assertions.
    fn on_tick_end(&mut self, _tick: Tick, _stepped: usize, _field: &SoundField) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`).
    ///
    /// Read-only access to the full robot and field state so output writers
    /// can record a snapshot without the sim knowing any output format.
    fn on_snapshot(&mut self, _tick: Tick, _robots: &RobotStore, _field: &SoundField) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
