//! Strategy selection and the top-level entry points

use crate::error::{Error, Result};
use crate::{
    DoublingScanReducer, LaneCarryReducer, NaiveReducer, SegmentedReducer, SinglePassReducer,
};
use ragged_core::{GroupDescriptor, GroupTag, LaneElement, ReduceOp, Sum};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Which algorithm computes the per-group aggregates
///
/// All strategies agree on their output up to floating-point reassociation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReduceStrategy {
    /// Fold each group's range of the boundary array
    Naive,
    /// One pass over the group tags, one store per group
    SinglePass,
    /// Doubling-distance segmented scan, then read group ends
    DoublingScan,
    /// Batch-wise vector scan with a carry between batches
    #[default]
    LaneCarry,
}

impl ReduceStrategy {
    pub const ALL: [ReduceStrategy; 4] = [
        ReduceStrategy::Naive,
        ReduceStrategy::SinglePass,
        ReduceStrategy::DoublingScan,
        ReduceStrategy::LaneCarry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReduceStrategy::Naive => "naive",
            ReduceStrategy::SinglePass => "single-pass",
            ReduceStrategy::DoublingScan => "doubling-scan",
            ReduceStrategy::LaneCarry => "lane-carry",
        }
    }
}

impl fmt::Display for ReduceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReduceStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        ReduceStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == name)
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}

/// Reduce every group with operator `O` using `strategy`
#[instrument(skip(groups), fields(groups = groups.group_count(), len = groups.len()))]
pub fn reduce_with<T: LaneElement, O: ReduceOp<T>>(
    strategy: ReduceStrategy,
    groups: &GroupDescriptor<T>,
) -> Vec<T> {
    match strategy {
        ReduceStrategy::Naive => NaiveReducer.reduce_with::<O>(groups),
        ReduceStrategy::SinglePass => SinglePassReducer.reduce_with::<O>(groups),
        ReduceStrategy::DoublingScan => DoublingScanReducer.reduce_with::<O>(groups),
        ReduceStrategy::LaneCarry => LaneCarryReducer::detect().reduce_with::<O>(groups),
    }
}

/// Per-group sums using `strategy`
pub fn reduce<T: LaneElement>(strategy: ReduceStrategy, groups: &GroupDescriptor<T>) -> Vec<T> {
    reduce_with::<T, Sum>(strategy, groups)
}

/// Validate raw input arrays, then compute per-group sums
///
/// `group_ids` holds one parent index per value, any negative id meaning
/// "no group"; `boundaries` holds `G + 1` offsets into `values`. Both
/// encodings must describe the same partition.
pub fn reduce_arrays<T: LaneElement>(
    strategy: ReduceStrategy,
    group_ids: &[i32],
    boundaries: &[usize],
    values: &[T],
) -> Result<Vec<T>> {
    let tags = group_ids
        .iter()
        .map(|&id| GroupTag::from_raw(i64::from(id)))
        .collect();
    let groups = GroupDescriptor::new(boundaries.to_vec(), tags, values.to_vec())?;
    debug!(%strategy, groups = groups.group_count(), "validated raw arrays");
    Ok(reduce(strategy, &groups))
}
