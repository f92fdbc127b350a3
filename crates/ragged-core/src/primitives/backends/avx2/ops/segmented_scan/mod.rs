//! Segmented scan operation for AVX2 backend
//!
//! Folds the incoming carry into lane 0 and runs the masked shift-and-combine
//! steps at distances 1, 2 and 4 over one eight-lane batch.

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod f32;
mod scalar;

use crate::group::LaneKey;
use crate::layout::Carry;
use crate::primitives::backends::avx2::{Avx2Backend, AVX2_LANES};
use crate::primitives::Lanes;
use crate::{Numeric, ReduceOp};

/// Trait for segmented scan operation
pub trait SegmentedScan<T: Numeric> {
    /// Scan one batch in place with AVX2 optimizations
    ///
    /// # Safety
    /// The CPU must support AVX2.
    unsafe fn compute<O: ReduceOp<T>>(
        backend: &Avx2Backend,
        values: &mut Lanes<T, AVX2_LANES>,
        keys: &Lanes<LaneKey, AVX2_LANES>,
        carry: Carry<T>,
    );
}

// Type-specific implementations
impl SegmentedScan<f32> for f32 {
    unsafe fn compute<O: ReduceOp<f32>>(
        backend: &Avx2Backend,
        values: &mut Lanes<f32, AVX2_LANES>,
        keys: &Lanes<LaneKey, AVX2_LANES>,
        carry: Carry<f32>,
    ) {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            f32::scan_f32::<O>(backend, values, keys, carry)
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            let _ = backend;
            scalar::scan_scalar::<f32, O>(values, keys, carry)
        }
    }
}

// Generic fallback for other types
macro_rules! impl_scan_fallback {
    ($type:ty) => {
        impl SegmentedScan<$type> for $type {
            unsafe fn compute<O: ReduceOp<$type>>(
                _backend: &Avx2Backend,
                values: &mut Lanes<$type, AVX2_LANES>,
                keys: &Lanes<LaneKey, AVX2_LANES>,
                carry: Carry<$type>,
            ) {
                scalar::scan_scalar::<$type, O>(values, keys, carry)
            }
        }
    };
}

impl_scan_fallback!(f64);
impl_scan_fallback!(i32);
impl_scan_fallback!(i64);
