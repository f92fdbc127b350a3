//! Error types for segmented reducers

use thiserror::Error;

/// Errors that can occur when selecting or running a reducer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Strategy name that does not parse
    #[error("Unknown strategy '{0}', expected one of: naive, single-pass, doubling-scan, lane-carry")]
    UnknownStrategy(String),

    /// Core computation error
    #[error("Core computation error: {0}")]
    Core(#[from] ragged_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
