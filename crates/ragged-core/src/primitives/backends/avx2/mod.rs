//! AVX2 backend implementation with operation-centric organization
//!
//! This module provides AVX2-optimized batch operations with compile-time
//! type dispatch. A batch is one 256-bit register: eight `f32` values and
//! eight `i32` lane keys.

mod dispatch;
mod ops;

pub use dispatch::Avx2TypeDispatch;

use crate::group::LaneKey;
use crate::layout::Carry;
use crate::primitives::{LaneMask, LanePrimitives, Lanes};
use crate::{Error, ReduceOp, Result};

/// Lanes per AVX2 batch
pub const AVX2_LANES: usize = 8;

/// AVX2 backend for x86_64 processors
#[derive(Clone, Copy, Debug)]
pub struct Avx2Backend;

impl Avx2Backend {
    /// Create a new AVX2 backend
    ///
    /// # Panics
    /// Panics if the CPU doesn't support AVX2 instructions
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            if !is_x86_feature_detected!("avx2") {
                panic!("AVX2 backend requested but CPU doesn't support AVX2 instructions");
            }
            Self
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            panic!("AVX2 backend not available: not compiled with AVX2 support");
        }
    }

    /// Create a new AVX2 backend, or report why it is unavailable
    pub fn try_new() -> Result<Self> {
        if Self::is_available() {
            Ok(Self)
        } else {
            Err(Error::FeatureNotAvailable(
                "avx2 (not compiled in or not supported by this CPU)".to_string(),
            ))
        }
    }

    /// Check if AVX2 is available on this CPU
    pub fn is_available() -> bool {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            is_x86_feature_detected!("avx2")
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            false
        }
    }
}

// AVX2 implementations delegate to type-specific modules via compile-time dispatch
impl<T: Avx2TypeDispatch> LanePrimitives<T, AVX2_LANES> for Avx2Backend {
    fn backend_name(&self) -> &'static str {
        T::backend_name()
    }

    fn scan_batch<O: ReduceOp<T>>(
        &self,
        values: &mut Lanes<T, AVX2_LANES>,
        keys: &Lanes<LaneKey, AVX2_LANES>,
        carry: Carry<T>,
    ) {
        // Safety: an Avx2Backend only exists once CPU support was checked
        unsafe { T::scan_batch_impl::<O>(self, values, keys, carry) }
    }

    fn segment_ends(
        &self,
        keys: &Lanes<LaneKey, AVX2_LANES>,
        next_keys: &Lanes<LaneKey, AVX2_LANES>,
    ) -> LaneMask<AVX2_LANES> {
        // Safety: an Avx2Backend only exists once CPU support was checked
        unsafe { ops::segment_ends::compute(self, keys, next_keys) }
    }
}
