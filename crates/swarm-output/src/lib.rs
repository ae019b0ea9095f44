//! `swarm-output` — simulation telemetry writers for rust_swarm.
//!
//! One backend is provided: CSV.  It implements [`OutputWriter`] and is
//! driven by [`SimOutputObserver`], which implements
//! `swarm_sim::SimObserver`.
//!
//! | File created          | Contents                                        |
//! |-----------------------|-------------------------------------------------|
//! | `robot_snapshots.csv` | pose + energy per robot, at snapshot intervals  |
//! | `tick_summaries.csv`  | per tick: live robots + broadcast aggregate     |
//!
//! # Usage
//!
//! ```rust,ignore
//! use swarm_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{RobotSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
