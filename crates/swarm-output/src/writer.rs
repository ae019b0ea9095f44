//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, RobotSnapshotRow, TickSummaryRow};

/// Trait implemented by telemetry backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored by [`SimOutputObserver`][crate::SimOutputObserver] and retrieved
/// after the run with `take_error`.
pub trait OutputWriter {
    /// Write a batch of robot snapshots.
    fn write_snapshots(&mut self, rows: &[RobotSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
