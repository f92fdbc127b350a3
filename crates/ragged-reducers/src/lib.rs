//! Segmented reductions over ragged arrays
//!
//! This crate provides four interchangeable ways to compute one aggregate per
//! group of a [`GroupDescriptor`](ragged_core::GroupDescriptor), from a plain
//! loop per group to a vector scan that threads a carry between batches.
//!
//! # Features
//!
//! - **Naive**: fold each group's slice, the reference result
//! - **Single pass**: one scan over the group tags, one store per group
//! - **Doubling scan**: Hillis–Steele segmented scan, vectorizable passes
//! - **Lane carry**: in-register segmented scan per batch with a scalar
//!   carry, scalar or AVX2 backend
//!
//! # Example
//!
//! ```rust
//! use ragged_core::GroupDescriptor;
//! use ragged_reducers::{reduce, ReduceStrategy};
//!
//! let groups = GroupDescriptor::from_boundaries(
//!     vec![0, 3, 3, 5],
//!     vec![1.0f32, 2.0, 3.0, 4.0, 5.0],
//! )
//! .unwrap();
//!
//! for strategy in ReduceStrategy::ALL {
//!     assert_eq!(reduce(strategy, &groups), vec![6.0, 0.0, 9.0]);
//! }
//! ```

pub mod config;
pub mod doubling_scan;
pub mod error;
pub mod lane_carry;
pub mod naive;
pub mod single_pass;
pub mod strategy;
pub mod traits;

// Re-export main types
pub use config::ReducerConfig;
pub use doubling_scan::DoublingScanReducer;
pub use error::{Error, Result};
pub use lane_carry::LaneCarryReducer;
pub use naive::NaiveReducer;
pub use single_pass::SinglePassReducer;
pub use strategy::{reduce, reduce_arrays, reduce_with, ReduceStrategy};
pub use traits::SegmentedReducer;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        reduce, reduce_with, DoublingScanReducer, Error, LaneCarryReducer, NaiveReducer,
        ReduceStrategy, ReducerConfig, Result, SegmentedReducer, SinglePassReducer,
    };
}
