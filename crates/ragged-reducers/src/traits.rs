//! The contract shared by every reducer

use ragged_core::{GroupDescriptor, Numeric, ReduceOp, Sum};

/// One aggregate per group, in group order
///
/// Every implementation fills all `group_count()` output slots; a group with
/// no elements reports the operator's identity. Implementations keep no state
/// between calls, so reducing the same descriptor twice gives the same
/// output.
pub trait SegmentedReducer<T: Numeric> {
    /// Short name for logging and benchmark ids
    fn name(&self) -> &'static str;

    /// Reduce every group with operator `O`
    fn reduce_with<O: ReduceOp<T>>(&self, groups: &GroupDescriptor<T>) -> Vec<T>;

    /// Per-group sums
    fn reduce(&self, groups: &GroupDescriptor<T>) -> Vec<T> {
        self.reduce_with::<Sum>(groups)
    }
}
