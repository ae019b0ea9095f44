//! `swarm-robot` — Structure-of-Arrays robot storage for rust_swarm.
//!
//! # Crate layout
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`store`]   | `RobotStore` (SoA arrays + capability slots), `RobotRngs` |
//! | [`builder`] | `RobotStoreBuilder` / `RobotBuilder` (fluent construction) |
//!
//! # Capabilities as composition
//!
//! A robot is a positioned rigid body plus an *optional* slot for each of
//! the four behavioural capabilities: locomotion (`DifferentialDrive`),
//! energy bookkeeping (`EnergyMeter`), emission (`Speaker`) and reception
//! (`Microphone`).  The driver's per-tick pipeline invokes exactly the
//! capabilities present, in a fixed order — composition over inheritance,
//! so the ordering is an explicit contract rather than a side effect of
//! override chains.

pub mod builder;
pub mod store;


pub use builder::{RobotBuilder, RobotStoreBuilder};
pub use store::{RobotRngs, RobotStore};
