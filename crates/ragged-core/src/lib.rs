//! Core types for segmented reductions over ragged arrays
//!
//! A ragged array is a flat value array partitioned into contiguous groups of
//! varying (possibly zero) length. This crate provides the shared building
//! blocks every reducer works from.
//!
//! # Architecture Overview
//!
//! 1. **Data model** - [`GroupDescriptor`] validates the partition in both of
//!    its encodings (boundaries and per-element [`GroupTag`]s)
//! 2. **Operators** - [`ReduceOp`] pairs an identity with an associative
//!    combine; [`Sum`] and [`Max`] are provided
//! 3. **Lane primitives** - [`LaneLayout`] pads the input to whole batches and
//!    [`LanePrimitives`] backends scan one batch at a time, scalar or AVX2
//!
//! # Example
//!
//! ```rust
//! use ragged_core::{GroupDescriptor, GroupTag};
//!
//! let groups = GroupDescriptor::new(
//!     vec![0, 3, 3, 5],
//!     vec![0u32, 0, 0, 2, 2].into_iter().map(GroupTag::from).collect(),
//!     vec![1.0f32, 2.0, 3.0, 4.0, 5.0],
//! )
//! .unwrap();
//!
//! assert_eq!(groups.group_count(), 3);
//! assert_eq!(groups.group_values(2), &[4.0, 5.0]);
//! assert_eq!(groups.empty_group_count(), 1);
//! ```

pub mod descriptor;
pub mod error;
#[cfg(feature = "rand")]
pub mod generate;
pub mod group;
pub mod layout;
pub mod numeric;
pub mod operator;
pub mod primitives;

// Re-export core types
pub use error::{Error, Result};

pub use descriptor::GroupDescriptor;
pub use group::{GroupTag, LaneKey, MAX_GROUPS, NO_GROUP_KEY};
pub use layout::{padded_len, Batch, Carry, LaneLayout, SegmentWrite};
pub use numeric::Numeric;
pub use operator::{Max, OperatorKind, ReduceOp, Sum};

pub use primitives::{
    best_available_backend, best_backend_name, scalar_backend, Avx2Backend, Avx2TypeDispatch,
    DetectedBackend, LaneMask, LanePrimitives, Lanes, ScalarBackend, DEFAULT_LANES,
};

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub use primitives::avx2_backend;

/// Element types every backend, including the runtime-detected one, can scan
pub trait LaneElement: Numeric + Avx2TypeDispatch {}

impl<T: Numeric + Avx2TypeDispatch> LaneElement for T {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        // Data model
        GroupDescriptor,
        GroupTag,
        LaneElement,
        LaneLayout,
        // Backend types
        LanePrimitives,
        Max,
        // Generic numeric traits
        Numeric,
        OperatorKind,
        ReduceOp,
        Result,
        ScalarBackend,
        Sum,
    };

    pub use crate::error::Error;
}
