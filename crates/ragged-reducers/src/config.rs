//! Reducer configuration
//!
//! A [`ReducerConfig`] names a strategy and an operator, so the choice can
//! come from a config file or the command line instead of generic parameters.

use crate::strategy::{reduce_with, ReduceStrategy};
use ragged_core::{GroupDescriptor, LaneElement, Max, OperatorKind, Sum};
use serde::{Deserialize, Serialize};

/// Strategy and operator for a reduction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReducerConfig {
    pub strategy: ReduceStrategy,
    pub operator: OperatorKind,
}

impl ReducerConfig {
    pub fn new(strategy: ReduceStrategy, operator: OperatorKind) -> Self {
        Self { strategy, operator }
    }

    pub fn with_strategy(mut self, strategy: ReduceStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_operator(mut self, operator: OperatorKind) -> Self {
        self.operator = operator;
        self
    }

    /// Reduce `groups` with the configured strategy and operator
    pub fn run<T: LaneElement>(&self, groups: &GroupDescriptor<T>) -> Vec<T> {
        match self.operator {
            OperatorKind::Sum => reduce_with::<T, Sum>(self.strategy, groups),
            OperatorKind::Max => reduce_with::<T, Max>(self.strategy, groups),
        }
    }
}
