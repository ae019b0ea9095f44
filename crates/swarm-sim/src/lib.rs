//! `swarm-sim` — tick loop driver for the rust_swarm framework.
//!
//! # The five-phase tick
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Field     — SoundField::begin_tick(): settle last tick's aggregate
//!                 for receivers, clear the accumulator.  Exactly once per
//!                 tick, before any robot emits.
//!   ② Control   — Controller::act for every live robot against the
//!                 read-only SimContext (parallel with the `parallel`
//!                 feature).  Produces one Command each.
//!   ③ Apply     — write wheel commands and speaker profiles into the
//!                 store, ascending RobotId.
//!   ④ Step      — per live robot, the fixed capability pipeline:
//!                 locomotion → energy → emission → reception.
//!                 Capabilities a robot lacks are skipped, never reordered.
//!   ⑤ Commit    — integrate every live robot's velocity into its pose.
//! ```
//!
//! Poses and speaker profiles are fixed for the whole of phase ④, and
//! receivers hear the *settled* aggregate, so no robot's observations
//! depend on its position in the iteration order.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | Runs the controller phase on Rayon's thread pool.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use swarm_arena::Arena;
//! use swarm_control::NoopController;
//! use swarm_core::{Pose, SimConfig};
//! use swarm_robot::RobotStoreBuilder;
//! use swarm_sim::{NoopObserver, SimBuilder};
//!
//! let mut robots = RobotStoreBuilder::new(42);
//! robots.robot(Pose::new(0.0, 0.0, 0.0));
//! let (store, rngs) = robots.build();
//!
//! let arena = Arena::new(20.0, 20.0)?;
//! let mut sim = SimBuilder::new(SimConfig::default(), store, rngs, arena, NoopController)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
