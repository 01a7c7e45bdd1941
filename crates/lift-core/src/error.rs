//! Validation errors for core data types.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::Floor;

/// Errors raised while constructing core values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("a hall call must want Up or Down, not None")]
    MissingDirection,

    #[error("floor {0} is negative")]
    NegativeFloor(Floor),

    #[error("unknown direction {0:?}: expected \"up\" or \"down\"")]
    UnknownDirection(String),
}

/// Shorthand result type for `lift-core`.
pub type CoreResult<T> = Result<T, CoreError>;
