//! `swarm-motion` — differential-drive locomotion for rust_swarm.
//!
//! # Crate layout
//!
//! | Module    | Contents                                         |
//! |-----------|--------------------------------------------------|
//! | [`drive`] | `DifferentialDrive` — command → noisy velocity   |
//! | [`error`] | `MotionError`, `MotionResult<T>`                 |
//!
//! The drive model is a pure map from a [`swarm_core::WheelCommand`] to a
//! [`swarm_core::Velocity`]; it never moves the robot itself.  Integration
//! belongs to the arena, which lets the driver commit all poses at a single
//! point in the tick.

pub mod drive;
pub mod error;

#[cfg(test)]
mod tests;

pub use drive::DifferentialDrive;
pub use error::{MotionError, MotionResult};
