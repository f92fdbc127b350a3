//! Generic numeric trait for element types of the value array
//!
//! This module provides the type foundation for reducing values of different
//! numeric types (f32, f64, i32, i64) without imposing any computational
//! infrastructure. All computation happens through the reduction operators
//! and the lane primitives.

use bytemuck::Pod;
use num_traits::{Num, WrappingAdd};
use std::fmt::Debug;

/// Base trait for numeric types that can be reduced per group
///
/// `Pod` keeps the element layout plain so batches can be loaded straight
/// into vector registers.
pub trait Numeric: Pod + Num + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Smallest representable value, the identity of a max reduction
    fn lowest() -> Self;

    /// Addition used by sum reductions
    ///
    /// Integers wrap, so every grouping of the same elements gives the same
    /// total even where an intermediate partial sum would overflow.
    fn sum_with(self, rhs: Self) -> Self;

    /// Maximum used by max reductions, `self` being the earlier element
    ///
    /// A NaN on either side wins and ties keep `self`. Both rules hold for
    /// any grouping, and the lowest value stays an identity.
    fn max_with(self, rhs: Self) -> Self {
        if rhs > self {
            rhs
        } else {
            self
        }
    }

    /// Convert to f64 (for tolerance comparisons)
    fn to_f64(&self) -> f64;
}

macro_rules! impl_numeric_float {
    ($t:ty) => {
        impl Numeric for $t {
            fn lowest() -> Self {
                <$t>::NEG_INFINITY
            }

            #[inline(always)]
            fn sum_with(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn max_with(self, rhs: Self) -> Self {
                if rhs > self || rhs.is_nan() {
                    rhs
                } else {
                    self
                }
            }

            fn to_f64(&self) -> f64 {
                *self as f64
            }
        }
    };
}

macro_rules! impl_numeric_int {
    ($t:ty) => {
        impl Numeric for $t {
            fn lowest() -> Self {
                <$t>::MIN
            }

            #[inline(always)]
            fn sum_with(self, rhs: Self) -> Self {
                WrappingAdd::wrapping_add(&self, &rhs)
            }

            fn to_f64(&self) -> f64 {
                *self as f64
            }
        }
    };
}

impl_numeric_float!(f64);
impl_numeric_float!(f32);
impl_numeric_int!(i32);
impl_numeric_int!(i64);
