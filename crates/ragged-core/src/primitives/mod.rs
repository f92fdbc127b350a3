//! Lane primitives with compile-time dispatch
//!
//! This module provides the per-batch operations of the lane-carry reducer
//! with support for multiple numeric types and SIMD backends.
//!
//! # Architecture
//!
//! - `Lanes<T, W>` / `LaneMask<W>`: portable fixed-width vectors
//! - Single `LanePrimitives<T, W>` trait for the batch operations
//! - Concrete backend types: `ScalarBackend<W>`, `Avx2Backend`
//! - `DetectedBackend` for runtime selection
//!
//! # Usage
//!
//! ```rust
//! use ragged_core::primitives::{LanePrimitives, Lanes, ScalarBackend};
//! use ragged_core::{Carry, Sum};
//!
//! let backend = ScalarBackend::<4>::new();
//! let mut values = Lanes([1.0f32, 2.0, 3.0, 4.0]);
//! let keys = Lanes([0, 0, 1, 1]);
//! backend.scan_batch::<Sum>(&mut values, &keys, Carry::empty::<Sum>());
//! assert_eq!(values, Lanes([1.0, 3.0, 3.0, 7.0]));
//! ```

pub mod backends;
pub mod lanes;
pub mod traits;

pub use backends::{
    best_available_backend, Avx2Backend, Avx2TypeDispatch, DetectedBackend, ScalarBackend,
    AVX2_LANES,
};
pub use lanes::{segmented_scan, LaneMask, Lanes, DEFAULT_LANES};
pub use traits::LanePrimitives;

/// Create a scalar backend (always available)
pub fn scalar_backend() -> ScalarBackend {
    ScalarBackend::new()
}

/// Create an AVX2 backend (panics if not supported)
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub fn avx2_backend() -> Avx2Backend {
    Avx2Backend::new()
}

/// Get the best available backend name
pub fn best_backend_name() -> &'static str {
    if Avx2Backend::is_available() {
        return "avx2";
    }
    "scalar"
}
