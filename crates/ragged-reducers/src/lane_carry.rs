//! Batch-wise vector reducer with a carry between batches
//!
//! The padded value array is processed `W` lanes at a time. Per batch:
//!
//! 1. the backend folds the incoming [`Carry`] into lane 0 and runs the
//!    in-register segmented scan, after which lane `k` holds its group's
//!    partial result up to `k`
//! 2. lanes whose next element has a different key are segment ends; each
//!    one that holds a real group emits a [`SegmentWrite`]
//! 3. the last lane becomes the carry for the next batch
//!
//! A group's total is written once, by the batch holding its last element.
//! Groups with no elements produce no write, so the output must already hold
//! the identity in their slots.

use crate::traits::SegmentedReducer;
use ragged_core::{
    best_available_backend, Batch, Carry, DetectedBackend, GroupDescriptor, GroupTag,
    LaneLayout, LanePrimitives, Numeric, ReduceOp, SegmentWrite, DEFAULT_LANES,
};
use tracing::{debug, instrument};

/// Lane-carry reducer over backend `B` with `W` lanes per batch
#[derive(Clone, Copy, Debug)]
pub struct LaneCarryReducer<B = DetectedBackend, const W: usize = DEFAULT_LANES> {
    backend: B,
}

impl LaneCarryReducer<DetectedBackend, DEFAULT_LANES> {
    /// Reducer on the best backend this CPU supports
    pub fn detect() -> Self {
        Self::new(best_available_backend())
    }
}

impl Default for LaneCarryReducer<DetectedBackend, DEFAULT_LANES> {
    fn default() -> Self {
        Self::detect()
    }
}

impl<B, const W: usize> LaneCarryReducer<B, W> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Report every segment-end write in batch order
    ///
    /// This is the whole algorithm with the final store left to `emit`; it
    /// calls `emit` exactly once per non-empty group.
    pub fn for_each_segment<T, O, F>(&self, layout: &LaneLayout<T, W>, mut emit: F)
    where
        T: Numeric,
        O: ReduceOp<T>,
        B: LanePrimitives<T, W>,
        F: FnMut(SegmentWrite<T>),
    {
        let last = layout
            .batches()
            .fold(Carry::empty::<O>(), |carry, batch| {
                self.process_batch::<T, O, F>(batch, carry, &mut emit)
            });
        // Padding is never grouped, so nothing may be left open
        debug_assert!(layout.padded_len() == layout.len() || last.group() == GroupTag::NoGroup);
    }

    /// Write each non-empty group's total into `output`
    ///
    /// Slots of empty groups are left untouched; fill `output` with the
    /// identity first.
    ///
    /// # Panics
    /// Panics if `output` is shorter than `layout.group_count()`.
    pub fn reduce_layout_into<T, O>(&self, layout: &LaneLayout<T, W>, output: &mut [T])
    where
        T: Numeric,
        O: ReduceOp<T>,
        B: LanePrimitives<T, W>,
    {
        assert!(
            output.len() >= layout.group_count(),
            "output holds {} slots but the layout has {} groups",
            output.len(),
            layout.group_count()
        );
        self.for_each_segment::<T, O, _>(layout, |write| {
            output[write.group as usize] = write.value;
        });
    }

    #[inline]
    fn process_batch<T, O, F>(&self, batch: Batch<T, W>, carry: Carry<T>, emit: &mut F) -> Carry<T>
    where
        T: Numeric,
        O: ReduceOp<T>,
        B: LanePrimitives<T, W>,
        F: FnMut(SegmentWrite<T>),
    {
        let mut values = batch.values;
        self.backend.scan_batch::<O>(&mut values, &batch.keys, carry);

        let ends = self.backend.segment_ends(&batch.keys, &batch.next_keys);
        if ends.any() {
            for k in ends.set_lanes() {
                if let GroupTag::Group(group) = GroupTag::from_lane_key(batch.keys.lane(k)) {
                    emit(SegmentWrite {
                        group,
                        value: values.lane(k),
                    });
                }
            }
        }

        Carry::from_last_lane(&values, &batch.keys)
    }
}

impl<T, B, const W: usize> SegmentedReducer<T> for LaneCarryReducer<B, W>
where
    T: Numeric,
    B: LanePrimitives<T, W>,
{
    fn name(&self) -> &'static str {
        "lane-carry"
    }

    #[instrument(
        skip(self, groups),
        fields(groups = groups.group_count(), len = groups.len(), op = O::name())
    )]
    fn reduce_with<O: ReduceOp<T>>(&self, groups: &GroupDescriptor<T>) -> Vec<T> {
        let layout = LaneLayout::<T, W>::from_descriptor(groups);
        debug!(
            backend = self.backend.backend_name(),
            lanes = W,
            batches = layout.batch_count(),
            "lane-carry reduction"
        );

        let mut output = vec![O::identity(); layout.group_count()];
        self.reduce_layout_into::<T, O>(&layout, &mut output);
        output
    }
}
