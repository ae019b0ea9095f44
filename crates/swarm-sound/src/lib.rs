//! `swarm-sound` — the sound channel of rust_swarm.
//!
//! # Crate layout
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`field`]      | `SoundField` — world-wide frequency aggregation        |
//! | [`speaker`]    | `Speaker` — a robot's emission profile                 |
//! | [`microphone`] | `Microphone`, `SensorOffset`, `Emitter` — directional reception |
//! | [`response`]   | `ResponseModel` trait, `StepResponse`, `FalloffResponse` |
//! | [`error`]      | `SoundError`, `SoundResult<T>`                         |
//!
//! # The two sound paths
//!
//! Sound reaches a microphone two ways:
//!
//! 1. **Near field** — an emitter (robot speaker or beacon object) within
//!    the microphone's range, gated by the response model at the actual
//!    distance.
//! 2. **Ambient** — the world-wide [`SoundField`] aggregate, heard by every
//!    sensor regardless of distance.  Robots are assumed to emit loudly
//!    enough that everyone hears the union.
//!
//! The field is an owned value scoped to one world, passed by reference into
//! each tick — never process-global — so several independent simulations can
//! coexist in one process.

pub mod error;
pub mod field;
pub mod microphone;
pub mod response;
pub mod speaker;


pub use error::{SoundError, SoundResult};
pub use field::SoundField;
pub use microphone::{Emitter, Microphone, SensorOffset};
pub use response::{FalloffResponse, ResponseModel, StepResponse};
pub use speaker::Speaker;
