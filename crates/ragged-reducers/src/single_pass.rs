//! Tag-driven reducer with one store per group
//!
//! Scans the group tags once, keeping a running total for the current run
//! and flushing it when the tag changes. The final run is flushed after the
//! loop.

use crate::traits::SegmentedReducer;
use ragged_core::{GroupDescriptor, GroupTag, Numeric, ReduceOp};
use tracing::{instrument, trace};

/// Reads the group tags and writes each group's total once
#[derive(Clone, Copy, Debug, Default)]
pub struct SinglePassReducer;

impl SinglePassReducer {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Numeric> SegmentedReducer<T> for SinglePassReducer {
    fn name(&self) -> &'static str {
        "single-pass"
    }

    #[instrument(
        skip(self, groups),
        fields(groups = groups.group_count(), len = groups.len(), op = O::name())
    )]
    fn reduce_with<O: ReduceOp<T>>(&self, groups: &GroupDescriptor<T>) -> Vec<T> {
        let mut output = vec![O::identity(); groups.group_count()];
        let mut flushes = 0usize;

        let mut current = GroupTag::NoGroup;
        let mut running = O::identity();
        for (&tag, &value) in groups.group_ids().iter().zip(groups.values()) {
            if tag != current {
                // Reset on every change, leaving a no-group run included
                if let GroupTag::Group(g) = current {
                    output[g as usize] = running;
                    flushes += 1;
                }
                running = O::identity();
                current = tag;
            }
            running = O::combine(running, value);
        }
        if let GroupTag::Group(g) = current {
            output[g as usize] = running;
            flushes += 1;
        }

        trace!(flushes, "single-pass reduction done");
        output
    }
}
