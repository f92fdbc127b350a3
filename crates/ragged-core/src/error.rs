//! Error types for ragged reductions
//!
//! Provides a unified error type for all ragged-reduce crates. Every
//! precondition a reducer relies on is checked once, when a
//! [`GroupDescriptor`](crate::GroupDescriptor) is built, and reported here.

use thiserror::Error;

/// Core error type for ragged reduction operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Two parallel arrays disagree on their length
    #[error("Size mismatch in {context}: expected {expected}, got {actual}")]
    SizeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// A group's range reaches past the end of the value array
    #[error("Group {group} spans [{start}, {end}) but only {len} values exist")]
    BoundariesOutOfRange {
        group: usize,
        start: usize,
        end: usize,
        len: usize,
    },

    /// The boundary array decreases
    #[error("Boundaries decrease at group {group}: {start} > {end}")]
    NonMonotonicBoundaries { group: usize, start: usize, end: usize },

    /// A group id names a group that does not exist
    #[error("Element {index} names group {group} but only {group_count} groups exist")]
    GroupIdOutOfRange {
        index: usize,
        group: u32,
        group_count: usize,
    },

    /// Group ids and boundaries describe different partitions
    #[error("Element {index} belongs to {expected} by boundaries but is tagged {actual}")]
    PartitionMismatch {
        index: usize,
        expected: String,
        actual: String,
    },

    /// More groups than the lane encoding can address
    #[error("{group_count} groups exceed the supported maximum of {max}")]
    TooManyGroups { group_count: usize, max: usize },

    /// Operator name that does not parse
    #[error("Unknown operator '{0}', expected one of: sum, max")]
    UnknownOperator(String),

    /// Feature not available
    #[error("Feature not available: {0}")]
    FeatureNotAvailable(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::SizeMismatch {
            expected,
            actual,
            context: context.to_string(),
        }
    }

    /// Create an error for a partition whose two encodings disagree
    pub fn partition_mismatch(
        index: usize,
        expected: impl std::fmt::Display,
        actual: impl std::fmt::Display,
    ) -> Self {
        Self::PartitionMismatch {
            index,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
