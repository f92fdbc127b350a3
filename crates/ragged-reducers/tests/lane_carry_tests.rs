//! Carry handoff and scatter-write behavior of the lane-carry reducer

mod common;

use common::{count_patterns, descriptor_from_counts, exact_values};
use ragged_core::{
    DetectedBackend, GroupDescriptor, LaneLayout, LanePrimitives, Max, ScalarBackend,
    SegmentWrite, Sum,
};
use ragged_reducers::{LaneCarryReducer, NaiveReducer, SegmentedReducer};
use std::collections::HashMap;

fn collect_writes<B: LanePrimitives<f32, 8>>(
    reducer: &LaneCarryReducer<B, 8>,
    groups: &GroupDescriptor<f32>,
) -> Vec<SegmentWrite<f32>> {
    let layout = LaneLayout::<f32, 8>::from_descriptor(groups);
    let mut writes = Vec::new();
    reducer.for_each_segment::<f32, Sum, _>(&layout, |w| writes.push(w));
    writes
}

#[test]
fn test_group_straddling_batches_is_exact() {
    // Group sizes that are not multiples of 8 and cross one or more batch edges
    for size in [9, 10, 15, 17, 23, 31, 64, 65] {
        let counts = [5, size, 3];
        let groups = descriptor_from_counts(&counts);
        let expected: f32 = groups.group_values(1).iter().sum();
        let output = LaneCarryReducer::detect().reduce(&groups);
        assert_eq!(output[1], expected, "group of {size}");
    }
}

#[test]
fn test_each_non_empty_group_written_once() {
    let reducer = LaneCarryReducer::detect();
    for (name, counts) in count_patterns() {
        let groups = descriptor_from_counts(&counts);
        let writes = collect_writes(&reducer, &groups);

        let mut per_group: HashMap<u32, usize> = HashMap::new();
        for write in &writes {
            *per_group.entry(write.group).or_default() += 1;
        }
        for (g, &count) in counts.iter().enumerate() {
            let expected = usize::from(count > 0);
            assert_eq!(
                per_group.get(&(g as u32)).copied().unwrap_or(0),
                expected,
                "{name}: group {g}"
            );
        }
    }
}

#[test]
fn test_writes_arrive_in_group_order() {
    let groups = descriptor_from_counts(&[3, 0, 1, 9, 0, 0, 5, 2, 33, 0, 4]);
    let writes = collect_writes(&LaneCarryReducer::detect(), &groups);
    assert!(writes.windows(2).all(|w| w[0].group < w[1].group));
}

#[test]
fn test_no_group_padding_never_written() {
    // Trailing no-group values and batch padding share the sentinel key
    let values = exact_values(13);
    let groups = GroupDescriptor::from_boundaries(vec![0, 4, 6], values).unwrap();
    let writes = collect_writes(&LaneCarryReducer::detect(), &groups);
    assert_eq!(writes.len(), 2);
    assert!(writes.iter().all(|w| w.group < 2));
}

#[test]
fn test_carry_does_not_match_next_group() {
    // Group 0 fills batch 0 exactly; group 1 must not pick up its total
    let groups = GroupDescriptor::from_counts(&[8, 8], vec![1.0f32; 16]).unwrap();
    assert_eq!(LaneCarryReducer::detect().reduce(&groups), vec![8.0, 8.0]);
    assert_eq!(
        LaneCarryReducer::detect().reduce_with::<Max>(&groups),
        vec![1.0, 1.0]
    );
}

#[test]
fn test_reduce_layout_into_prefilled_output() {
    let groups = descriptor_from_counts(&[0, 12, 0, 3]);
    let layout = LaneLayout::<f32>::from_descriptor(&groups);
    let reducer = LaneCarryReducer::<_, 8>::new(ScalarBackend::<8>::new());

    let mut output = vec![0.0f32; layout.group_count()];
    reducer.reduce_layout_into::<f32, Sum>(&layout, &mut output);
    assert_eq!(output, NaiveReducer.reduce(&groups));
}

#[test]
fn test_from_padded_layout() {
    // Already padded arrays, as a caller with its own storage would pass them
    let layout = LaneLayout::<f32, 4>::from_padded(
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 0.0, 0.0, 0.0],
        vec![0, 0, 0, 2, 2, -1, -1, -1, -1],
        3,
    )
    .unwrap();
    let mut output = vec![0.0f32; 3];
    LaneCarryReducer::<_, 4>::new(ScalarBackend::<4>::new())
        .reduce_layout_into::<f32, Sum>(&layout, &mut output);
    assert_eq!(output, vec![6.0, 0.0, 9.0]);
}

#[test]
fn test_detected_backend_reports_name() {
    let reducer = LaneCarryReducer::detect();
    let name = LanePrimitives::<f32, 8>::backend_name(reducer.backend());
    match DetectedBackend::detect() {
        DetectedBackend::Scalar(_) => assert_eq!(name, "scalar"),
        DetectedBackend::Avx2(_) => assert!(name.starts_with("avx2")),
    }
}
