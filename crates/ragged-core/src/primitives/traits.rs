//! Lane primitives trait
//!
//! The two per-batch steps of a lane-carry reduction that benefit from vector
//! instructions: the in-register segmented scan and end-of-group detection.

use crate::group::LaneKey;
use crate::layout::Carry;
use crate::primitives::lanes::{segmented_scan, LaneMask, Lanes};
use crate::{Numeric, ReduceOp};

/// Backend operations on one batch of `W` lanes
///
/// The provided methods are the portable lowering; SIMD backends override
/// them with intrinsics for the element types they accelerate.
pub trait LanePrimitives<T: Numeric, const W: usize>: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Number of elements processed per batch
    fn lane_width(&self) -> usize {
        W
    }

    /// Fold `carry` into the batch and scan it in place
    ///
    /// On return lane `k` holds the reduction of its group's elements up to
    /// lane `k`, including the carried-in prefix when lane 0 continues the
    /// carried group.
    fn scan_batch<O: ReduceOp<T>>(
        &self,
        values: &mut Lanes<T, W>,
        keys: &Lanes<LaneKey, W>,
        carry: Carry<T>,
    ) {
        segmented_scan::<T, O, W>(values, keys, carry)
    }

    /// Lanes whose next element belongs to a different group
    fn segment_ends(&self, keys: &Lanes<LaneKey, W>, next_keys: &Lanes<LaneKey, W>) -> LaneMask<W> {
        keys.lanes_ne(next_keys)
    }
}
