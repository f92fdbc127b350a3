//! Per-element-type dispatch for the AVX2 backend
//!
//! `f32` batches fill one register and get the intrinsic scan; wider or
//! integer element types keep the portable lowering.

use super::ops::SegmentedScan;
use super::{Avx2Backend, AVX2_LANES};
use crate::group::LaneKey;
use crate::layout::Carry;
use crate::primitives::Lanes;
use crate::{Numeric, ReduceOp};

/// Element types the AVX2 backend accepts, resolved at compile time
pub trait Avx2TypeDispatch: Numeric + SegmentedScan<Self> {
    fn backend_name() -> &'static str;

    /// Scan one batch
    ///
    /// # Safety
    /// The CPU must support AVX2.
    unsafe fn scan_batch_impl<O: ReduceOp<Self>>(
        backend: &Avx2Backend,
        values: &mut Lanes<Self, AVX2_LANES>,
        keys: &Lanes<LaneKey, AVX2_LANES>,
        carry: Carry<Self>,
    ) {
        <Self as SegmentedScan<Self>>::compute::<O>(backend, values, keys, carry)
    }
}

impl Avx2TypeDispatch for f32 {
    fn backend_name() -> &'static str {
        if cfg!(all(target_arch = "x86_64", feature = "avx2")) {
            "avx2"
        } else {
            "avx2 (scalar fallback)"
        }
    }
}

// Other types keep keys in vector registers but scan with the scalar lowering
impl Avx2TypeDispatch for f64 {
    fn backend_name() -> &'static str {
        "avx2 (scalar fallback)"
    }
}

impl Avx2TypeDispatch for i32 {
    fn backend_name() -> &'static str {
        "avx2 (scalar fallback)"
    }
}

impl Avx2TypeDispatch for i64 {
    fn backend_name() -> &'static str {
        "avx2 (scalar fallback)"
    }
}
