//! Framework error type.
//!
//! Sub-crates define their own error enums for their own failure taxonomies
//! and may wrap or convert `CoreError` as suits their call sites.  All
//! configuration violations across the workspace are construction-time
//! errors: components refuse to build rather than fail mid-tick.

use thiserror::Error;

use crate::{ObjectId, RobotId};

/// The top-level error type for `swarm-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("robot {0} not found")]
    RobotNotFound(RobotId),

    #[error("object {0} not found")]
    ObjectNotFound(ObjectId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `swarm-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
