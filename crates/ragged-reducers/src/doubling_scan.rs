//! Segmented inclusive scan by doubling distance (Hillis–Steele)
//!
//! Pass `d` combines every element with the partial result `d` positions
//! earlier when both belong to the same group. Each pass reads only the
//! previous pass's results, so the elements of one pass are independent and
//! the inner loop vectorizes. After `ceil(log2(N))` passes the last element of
//! every group holds that group's total.

use crate::traits::SegmentedReducer;
use ragged_core::{GroupDescriptor, Numeric, ReduceOp};
use tracing::{instrument, trace};

/// Scans the whole value array, then reads one element per group
#[derive(Clone, Copy, Debug, Default)]
pub struct DoublingScanReducer;

impl DoublingScanReducer {
    pub fn new() -> Self {
        Self
    }

    /// Run the segmented inclusive scan over a descriptor's values
    ///
    /// Element `i` of the result is the reduction of its group's elements up
    /// to and including `i`. Elements in no group are scanned among
    /// themselves and carry no meaning.
    pub fn scan<T: Numeric, O: ReduceOp<T>>(&self, groups: &GroupDescriptor<T>) -> Vec<T> {
        let ids = groups.group_ids();
        let n = ids.len();

        let mut working = groups.values().to_vec();
        let mut next = working.clone();
        let mut distance = 1;
        let mut passes = 0;
        while distance < n {
            next[..distance].copy_from_slice(&working[..distance]);
            for i in distance..n {
                next[i] = if ids[i] == ids[i - distance] {
                    O::combine(working[i - distance], working[i])
                } else {
                    working[i]
                };
            }
            std::mem::swap(&mut working, &mut next);
            distance *= 2;
            passes += 1;
        }

        trace!(passes, "segmented scan done");
        working
    }
}

impl<T: Numeric> SegmentedReducer<T> for DoublingScanReducer {
    fn name(&self) -> &'static str {
        "doubling-scan"
    }

    #[instrument(
        skip(self, groups),
        fields(groups = groups.group_count(), len = groups.len(), op = O::name())
    )]
    fn reduce_with<O: ReduceOp<T>>(&self, groups: &GroupDescriptor<T>) -> Vec<T> {
        let scanned = self.scan::<T, O>(groups);
        groups
            .boundaries()
            .windows(2)
            .map(|w| {
                if w[0] == w[1] {
                    // Nothing to read for an empty group
                    O::identity()
                } else {
                    scanned[w[1] - 1]
                }
            })
            .collect()
    }
}
