//! Boundary-driven reducer
//!
//! Walks each group's range of the value array in turn. Every other strategy
//! is checked against this one.

use crate::traits::SegmentedReducer;
use ragged_core::{GroupDescriptor, Numeric, ReduceOp};
use tracing::instrument;

/// Reads the boundary array and folds each group's slice on its own
#[derive(Clone, Copy, Debug, Default)]
pub struct NaiveReducer;

impl NaiveReducer {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Numeric> SegmentedReducer<T> for NaiveReducer {
    fn name(&self) -> &'static str {
        "naive"
    }

    #[instrument(
        skip(self, groups),
        fields(groups = groups.group_count(), len = groups.len(), op = O::name())
    )]
    fn reduce_with<O: ReduceOp<T>>(&self, groups: &GroupDescriptor<T>) -> Vec<T> {
        let values = groups.values();
        groups
            .boundaries()
            .windows(2)
            .map(|w| {
                values[w[0]..w[1]]
                    .iter()
                    .fold(O::identity(), |acc, &v| O::combine(acc, v))
            })
            .collect()
    }
}
