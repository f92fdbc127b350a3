//! Scalar fallback implementation for segmented scan

use crate::group::LaneKey;
use crate::layout::Carry;
use crate::primitives::backends::avx2::AVX2_LANES;
use crate::primitives::{segmented_scan, Lanes};
use crate::{Numeric, ReduceOp};

/// Scalar implementation of the batch scan
#[inline(always)]
pub fn scan_scalar<T: Numeric, O: ReduceOp<T>>(
    values: &mut Lanes<T, AVX2_LANES>,
    keys: &Lanes<LaneKey, AVX2_LANES>,
    carry: Carry<T>,
) {
    segmented_scan::<T, O, AVX2_LANES>(values, keys, carry)
}
