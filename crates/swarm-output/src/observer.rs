//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use swarm_core::{SimConfig, Tick};
use swarm_robot::RobotStore;
use swarm_sim::SimObserver;
use swarm_sound::SoundField;

use crate::row::{RobotSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes robot snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    dt_secs:    f64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for elapsed-
    /// time conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            dt_secs: config.dt_secs,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, stepped: usize, field: &SoundField) {
        let row = TickSummaryRow {
            tick:           tick.0,
            elapsed_secs:   tick.0 as f64 * self.dt_secs,
            live_robots:    stepped as u64,
            broadcast_mask: field.current_state().0,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, robots: &RobotStore, _field: &SoundField) {
        let rows: Vec<RobotSnapshotRow> = robots
            .robot_ids()
            .filter(|&r| robots.is_alive(r))
            .map(|r| {
                let pose = robots.pose[r.index()];
                RobotSnapshotRow {
                    robot_id: r.0,
                    tick:     tick.0,
                    x:        pose.pos.x,
                    y:        pose.pos.y,
                    heading:  pose.heading,
                    energy:   robots.energy_level(r),
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
