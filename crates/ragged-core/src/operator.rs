//! Reduction operators
//!
//! A reducer only needs an associative combine step with an identity. The
//! identity fills every output slot before any group contributes, so an
//! empty group reports it unchanged.

use crate::{Error, Numeric};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which operator a [`ReduceOp`] implements
///
/// Backends with hand-written kernels match on this to pick the vector
/// instruction for the combine step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperatorKind {
    #[default]
    Sum,
    Max,
}

impl OperatorKind {
    pub const ALL: [OperatorKind; 2] = [OperatorKind::Sum, OperatorKind::Max];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorKind::Sum => "sum",
            OperatorKind::Max => "max",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" => Ok(OperatorKind::Sum),
            "max" => Ok(OperatorKind::Max),
            other => Err(Error::UnknownOperator(other.to_string())),
        }
    }
}

/// Associative reduction operator with an identity element
pub trait ReduceOp<T: Numeric>: Copy + Default + Send + Sync + fmt::Debug + 'static {
    const KIND: OperatorKind;

    /// Value of a group with no elements
    fn identity() -> T;

    /// Fold `rhs` into `lhs`; `rhs` is the later element in group order
    fn combine(lhs: T, rhs: T) -> T;

    /// Name of this operator for debugging/logging
    fn name() -> &'static str {
        Self::KIND.as_str()
    }
}

/// Sum reduction, identity zero
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sum;

impl<T: Numeric> ReduceOp<T> for Sum {
    const KIND: OperatorKind = OperatorKind::Sum;

    #[inline(always)]
    fn identity() -> T {
        T::zero()
    }

    #[inline(always)]
    fn combine(lhs: T, rhs: T) -> T {
        lhs.sum_with(rhs)
    }
}

/// Max reduction, identity is the lowest representable value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Max;

impl<T: Numeric> ReduceOp<T> for Max {
    const KIND: OperatorKind = OperatorKind::Max;

    #[inline(always)]
    fn identity() -> T {
        T::lowest()
    }

    #[inline(always)]
    fn combine(lhs: T, rhs: T) -> T {
        lhs.max_with(rhs)
    }
}
