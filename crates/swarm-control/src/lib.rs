//! `swarm-control` — the controller seam of rust_swarm.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`command`]    | `Command` — wheel speeds + emission profile for one tick  |
//! | [`context`]    | `SimContext<'a>` — read-only tick snapshot                |
//! | [`controller`] | `Controller` trait                                        |
//! | [`noop`]       | `NoopController` — stands still, stays silent             |
//! | [`error`]      | `ControlError`, `ControlResult<T>`                        |
//!
//! # Design notes
//!
//! The driver's tick loop is produce-then-apply:
//!
//! 1. **Controller phase** (optionally parallel): for every live robot,
//!    [`Controller::act`] reads the immutable [`SimContext`] and returns a
//!    [`Command`].  No mutation.
//! 2. **Apply + step phases** (sequential): the driver writes the commands
//!    into robot storage and runs the fixed capability pipeline.
//!
//! This split keeps `Controller` free of mutable state that could race —
//! it only needs `Send + Sync` — and makes what a robot observes
//! independent of the order robots are processed in: controllers see the
//! previous tick's poses, reception results, and settled sound aggregate.

pub mod command;
pub mod context;
pub mod controller;
pub mod error;
pub mod noop;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use context::SimContext;
pub use controller::Controller;
pub use error::{ControlError, ControlResult};
pub use noop::NoopController;
