//! `swarm-core` — foundational types for the `rust_swarm` robot simulation
//! framework.
//!
//! This crate is a dependency of every other `swarm-*` crate.  It
//! intentionally has no `swarm-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`ids`]        | `RobotId`, `ObjectId`                               |
//! | [`vec2`]       | `Vec2`, `Pose` (planar position + heading)          |
//! | [`kinematics`] | `WheelCommand`, `Velocity`                          |
//! | [`freq`]       | `FrequencyMask` (fixed-width channel bitmask)       |
//! | [`time`]       | `Tick`, `SimClock`, `SimConfig`                     |
//! | [`rng`]        | `RobotRng` (per-robot), `SimRng` (global)           |
//! | [`error`]      | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types. |

pub mod error;
pub mod freq;
pub mod ids;
pub mod kinematics;
pub mod rng;
pub mod time;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use freq::{FrequencyMask, MAX_CHANNELS};
pub use ids::{ObjectId, RobotId};
pub use kinematics::{Velocity, WheelCommand};
pub use rng::{RobotRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};
pub use vec2::{Pose, Vec2};
