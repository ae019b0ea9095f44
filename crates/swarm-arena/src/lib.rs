//! `swarm-arena` — the bounded 2D world the interaction core runs in.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`object`] | `PhysicalObject` — static bodies, optionally sounding   |
//! | [`arena`]  | `Arena` — object registry, R-tree proximity queries, pose integration |
//! | [`error`]  | `ArenaError`, `ArenaResult<T>`                          |
//!
//! # Scope
//!
//! The arena is the narrow world interface the per-tick interaction layer
//! consumes: enumerate objects near a position, and commit a velocity to a
//! pose.  It deliberately stops short of rigid-body collision response —
//! poses are clamped to the arena bounds and nothing more.

pub mod arena;
pub mod error;
pub mod object;


pub use arena::Arena;
pub use error::{ArenaError, ArenaResult};
pub use object::PhysicalObject;
