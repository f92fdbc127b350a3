//! Scalar backend implementation
//!
//! Runs the portable lane lowering for every element type and any width `W`.
//! It is the reference the AVX2 kernels are compared against lane for lane,
//! and the only backend for widths other than one AVX2 register.

use crate::primitives::{LanePrimitives, DEFAULT_LANES};
use crate::Numeric;

/// Scalar backend - works for all numeric types and lane widths
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend<const W: usize = DEFAULT_LANES>;

impl<const W: usize> ScalarBackend<W> {
    pub fn new() -> Self {
        Self
    }
}

// Generic implementation for all types
impl<T: Numeric, const W: usize> LanePrimitives<T, W> for ScalarBackend<W> {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }

    // Scan and segment-end detection use the portable trait defaults
}
