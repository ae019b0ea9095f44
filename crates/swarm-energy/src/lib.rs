//! `swarm-energy` — energy bookkeeping for rust_swarm robots.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`meter`] | `EnergyMeter` — the (energy, delta, previous delta) ledger |
//! | [`model`] | `EnergyModel` trait + `ConstantRate`, `MotionCost`, `ZoneFeed` |
//! | [`error`] | `EnergyError`, `EnergyResult<T>`                           |
//!
//! The meter owns the *sequencing* of energy updates — shift the previous
//! delta, compute the new one, apply it — while the production rule itself
//! is a pluggable [`EnergyModel`].  This keeps "how energy is earned" a
//! per-robot policy decision and "when the books are written" a single,
//! testable contract.

pub mod error;
pub mod meter;
pub mod model;


pub use error::{EnergyError, EnergyResult};
pub use meter::EnergyMeter;
pub use model::{ConstantRate, EnergyContext, EnergyModel, MotionCost, ZoneFeed};
