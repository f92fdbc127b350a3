//! Lane backends
//!
//! Each backend is a zero-sized type implementing [`LanePrimitives`]. Callers
//! that know their target pick one statically; [`DetectedBackend`] is the
//! enum for choosing at runtime.

pub mod avx2;
pub mod scalar;

// Re-export the main backend types
pub use avx2::{Avx2Backend, Avx2TypeDispatch, AVX2_LANES};
pub use scalar::ScalarBackend;

use super::{LaneMask, LanePrimitives, Lanes, DEFAULT_LANES};
use crate::group::LaneKey;
use crate::layout::Carry;
use crate::ReduceOp;

/// Backend picked at runtime from the CPU features of this host
#[derive(Clone, Copy, Debug)]
pub enum DetectedBackend {
    Scalar(ScalarBackend<DEFAULT_LANES>),
    Avx2(Avx2Backend),
}

impl DetectedBackend {
    /// Detect the best backend for this CPU
    pub fn detect() -> Self {
        match Avx2Backend::try_new() {
            Ok(backend) => DetectedBackend::Avx2(backend),
            Err(_) => DetectedBackend::Scalar(ScalarBackend::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DetectedBackend::Scalar(_) => "scalar",
            DetectedBackend::Avx2(_) => "avx2",
        }
    }
}

impl<T: Avx2TypeDispatch> LanePrimitives<T, DEFAULT_LANES> for DetectedBackend {
    fn backend_name(&self) -> &'static str {
        match self {
            DetectedBackend::Scalar(b) => LanePrimitives::<T, DEFAULT_LANES>::backend_name(b),
            DetectedBackend::Avx2(b) => LanePrimitives::<T, DEFAULT_LANES>::backend_name(b),
        }
    }

    #[inline(always)]
    fn scan_batch<O: ReduceOp<T>>(
        &self,
        values: &mut Lanes<T, DEFAULT_LANES>,
        keys: &Lanes<LaneKey, DEFAULT_LANES>,
        carry: Carry<T>,
    ) {
        match self {
            DetectedBackend::Scalar(b) => b.scan_batch::<O>(values, keys, carry),
            DetectedBackend::Avx2(b) => b.scan_batch::<O>(values, keys, carry),
        }
    }

    #[inline(always)]
    fn segment_ends(
        &self,
        keys: &Lanes<LaneKey, DEFAULT_LANES>,
        next_keys: &Lanes<LaneKey, DEFAULT_LANES>,
    ) -> LaneMask<DEFAULT_LANES> {
        match self {
            DetectedBackend::Scalar(b) => {
                LanePrimitives::<T, DEFAULT_LANES>::segment_ends(b, keys, next_keys)
            }
            DetectedBackend::Avx2(b) => {
                LanePrimitives::<T, DEFAULT_LANES>::segment_ends(b, keys, next_keys)
            }
        }
    }
}

/// Get the best available backend for the current platform
pub fn best_available_backend() -> DetectedBackend {
    let backend = DetectedBackend::detect();
    log::debug!("selected {} lane backend", backend.name());
    backend
}
