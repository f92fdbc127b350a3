//! Per-group reductions over ragged arrays
//!
//! This crate re-exports the workspace crates behind one dependency:
//!
//! - [`ragged_core`]: group descriptors, reduction operators, lane primitives
//! - [`ragged_reducers`]: the naive, single-pass, doubling-scan and lane-carry
//!   reducers and strategy selection
//!
//! # Example
//!
//! ```rust
//! use ragged_reduce::prelude::*;
//!
//! let output = ragged_reduce::reduce_arrays(
//!     ReduceStrategy::LaneCarry,
//!     &[0, 0, 0, 2, 2],
//!     &[0, 3, 3, 5],
//!     &[1.0f32, 2.0, 3.0, 4.0, 5.0],
//! )
//! .unwrap();
//! assert_eq!(output, vec![6.0, 0.0, 9.0]);
//! ```

pub use ragged_core;
pub use ragged_reducers;

pub use ragged_core::{
    best_backend_name, Carry, GroupDescriptor, GroupTag, LaneElement, LaneLayout, Max, Numeric,
    OperatorKind, ReduceOp, SegmentWrite, Sum,
};
pub use ragged_reducers::{
    reduce, reduce_arrays, reduce_with, DoublingScanReducer, Error, LaneCarryReducer,
    NaiveReducer, ReduceStrategy, ReducerConfig, Result, SegmentedReducer, SinglePassReducer,
};

#[cfg(feature = "rand")]
pub use ragged_core::generate;

/// Prelude for convenient imports
pub mod prelude {
    pub use ragged_core::prelude::{
        GroupDescriptor, GroupTag, LaneElement, LaneLayout, LanePrimitives, Max, Numeric,
        OperatorKind, ReduceOp, ScalarBackend, Sum,
    };
    pub use ragged_reducers::prelude::*;
}
