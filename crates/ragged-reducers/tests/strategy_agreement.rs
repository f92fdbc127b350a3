//! Every strategy must reproduce the naive reducer's output

mod common;

use common::{
    assert_outputs_close, assert_relative_eq, count_patterns, descriptor_from_counts,
    edge_case_lengths, uniform_descriptor,
};
use ragged_core::generate::{poisson_groups, AVERAGE_SIZES};
use ragged_core::{GroupDescriptor, GroupTag, Max, ReduceOp, ScalarBackend, Sum};
use ragged_reducers::{
    reduce, reduce_with, DoublingScanReducer, LaneCarryReducer, NaiveReducer, ReduceStrategy,
    SegmentedReducer, SinglePassReducer,
};

fn check_all_strategies<O: ReduceOp<f32>>(groups: &GroupDescriptor<f32>, context: &str) {
    let expected = NaiveReducer.reduce_with::<O>(groups);
    assert_eq!(expected.len(), groups.group_count());
    for strategy in ReduceStrategy::ALL {
        let actual = reduce_with::<f32, O>(strategy, groups);
        assert_outputs_close(
            &actual,
            &expected,
            &format!("{strategy}/{} on {context}", O::name()),
        );
    }
}

#[test]
fn test_concrete_scenario_all_strategies() {
    let groups = GroupDescriptor::new(
        vec![0, 3, 3, 5],
        vec![0u32, 0, 0, 2, 2].into_iter().map(GroupTag::from).collect(),
        vec![1.0f32, 2.0, 3.0, 4.0, 5.0],
    )
    .unwrap();

    for strategy in ReduceStrategy::ALL {
        assert_eq!(reduce(strategy, &groups), vec![6.0, 0.0, 9.0], "{strategy}");
    }
}

#[test]
fn test_patterns_agree() {
    for (name, counts) in count_patterns() {
        let groups = descriptor_from_counts(&counts);
        check_all_strategies::<Sum>(&groups, name);
        check_all_strategies::<Max>(&groups, name);
    }
}

#[test]
fn test_uniform_groups_across_lengths() {
    for len in edge_case_lengths() {
        for group_size in [1, 2, 3, 8, 13] {
            let groups = uniform_descriptor(len, group_size);
            check_all_strategies::<Sum>(&groups, &format!("len {len} size {group_size}"));
        }
    }
}

#[test]
fn test_empty_groups_report_identity() {
    let groups = descriptor_from_counts(&[0, 4, 0, 0, 2, 0]);
    for strategy in ReduceStrategy::ALL {
        let sums = reduce_with::<f32, Sum>(strategy, &groups);
        let maxes = reduce_with::<f32, Max>(strategy, &groups);
        for g in [0, 2, 3, 5] {
            assert_eq!(sums[g], 0.0, "{strategy} sum of group {g}");
            assert_eq!(maxes[g], f32::NEG_INFINITY, "{strategy} max of group {g}");
        }
    }
}

#[test]
fn test_zero_groups_and_zero_values() {
    let no_groups = GroupDescriptor::<f32>::from_boundaries(vec![], vec![]).unwrap();
    let no_values = GroupDescriptor::<f32>::from_counts(&[0, 0, 0], vec![]).unwrap();
    for strategy in ReduceStrategy::ALL {
        assert!(reduce(strategy, &no_groups).is_empty());
        assert_eq!(reduce(strategy, &no_values), vec![0.0; 3]);
    }
}

#[test]
fn test_single_group_totality() {
    let values: Vec<f64> = (0..1000).map(|i| (i as f64).sqrt()).collect();
    let direct: f64 = values.iter().sum();
    let groups = GroupDescriptor::from_counts(&[values.len()], values).unwrap();

    assert_relative_eq!(NaiveReducer.reduce(&groups)[0], direct, max_relative = 1e-12);
    assert_relative_eq!(SinglePassReducer.reduce(&groups)[0], direct, max_relative = 1e-12);
    assert_relative_eq!(DoublingScanReducer.reduce(&groups)[0], direct, max_relative = 1e-12);
    assert_relative_eq!(
        LaneCarryReducer::detect().reduce(&groups)[0],
        direct,
        max_relative = 1e-12
    );
}

#[test]
fn test_no_group_elements_are_excluded() {
    // Values before the first boundary and after the last one are in no group
    let groups = GroupDescriptor::from_boundaries(
        vec![3, 6, 6, 10],
        vec![100.0f32, 100.0, 100.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 100.0, 100.0],
    )
    .unwrap();
    for strategy in ReduceStrategy::ALL {
        assert_eq!(reduce(strategy, &groups), vec![6.0, 0.0, 22.0], "{strategy}");
        assert_eq!(
            reduce_with::<f32, Max>(strategy, &groups),
            vec![3.0, f32::NEG_INFINITY, 7.0],
            "{strategy}"
        );
    }
}

#[test]
fn test_integer_types_are_exact() {
    let counts = [5, 0, 17, 1, 0, 9];
    let values: Vec<i64> = (0..32).map(|i| i * 1_000_000_007).collect();
    let groups = GroupDescriptor::from_counts(&counts, values).unwrap();
    let expected = NaiveReducer.reduce(&groups);
    for strategy in ReduceStrategy::ALL {
        assert_eq!(reduce(strategy, &groups), expected, "{strategy}");
    }

    let values: Vec<i32> = (0..32).map(|i| (i * 37) % 19 - 9).collect();
    let groups = GroupDescriptor::from_counts(&counts, values).unwrap();
    let expected = NaiveReducer.reduce_with::<Max>(&groups);
    for strategy in ReduceStrategy::ALL {
        assert_eq!(reduce_with::<i32, Max>(strategy, &groups), expected, "{strategy}");
    }
}

#[test]
fn test_idempotent() {
    let groups = poisson_groups(5_000, 5.0, 11).unwrap();
    for strategy in ReduceStrategy::ALL {
        let first = reduce(strategy, &groups);
        let second = reduce(strategy, &groups);
        let first_bits: Vec<u32> = first.iter().map(|v| v.to_bits()).collect();
        let second_bits: Vec<u32> = second.iter().map(|v| v.to_bits()).collect();
        assert_eq!(first_bits, second_bits, "{strategy}");
    }
}

#[test]
fn test_generated_data_agrees() {
    for (seed, &average_size) in AVERAGE_SIZES.iter().enumerate() {
        // Keep the sparsest sweep points small
        let total = if average_size < 1.0 { 500 } else { 10_000 };
        let groups = poisson_groups(total, average_size, seed as u64).unwrap();
        check_all_strategies::<Sum>(&groups, &format!("average size {average_size}"));
        check_all_strategies::<Max>(&groups, &format!("average size {average_size}"));
    }
}

#[test]
fn test_lane_widths_agree() {
    for (name, counts) in count_patterns() {
        let groups = descriptor_from_counts(&counts);
        let expected = NaiveReducer.reduce(&groups);
        assert_eq!(
            LaneCarryReducer::<_, 4>::new(ScalarBackend::<4>::new()).reduce(&groups),
            expected,
            "4 lanes on {name}"
        );
        assert_eq!(
            LaneCarryReducer::<_, 8>::new(ScalarBackend::<8>::new()).reduce(&groups),
            expected,
            "8 lanes on {name}"
        );
        assert_eq!(
            LaneCarryReducer::<_, 16>::new(ScalarBackend::<16>::new()).reduce(&groups),
            expected,
            "16 lanes on {name}"
        );
    }
}

#[test]
fn test_integer_sum_overflowing_partials() {
    // Every prefix fits, but the partial 2147483647 + 1 does not
    let groups = GroupDescriptor::from_counts(&[3, 2], vec![-1i32, i32::MAX, 1, 4, 5]).unwrap();
    for strategy in ReduceStrategy::ALL {
        assert_eq!(reduce(strategy, &groups), vec![i32::MAX, 9], "{strategy}");
    }

    let values = vec![i64::MIN, -1, 1, i64::MAX, 1, -1, 7, 0, 0, 0, 0];
    let groups = GroupDescriptor::from_counts(&[6, 5], values).unwrap();
    for strategy in ReduceStrategy::ALL {
        assert_eq!(reduce(strategy, &groups), vec![-1, 7], "{strategy}");
    }
}

#[test]
fn test_max_with_nan() {
    let values = vec![
        f32::NAN, 3.0, // NaN first
        3.0, f32::NAN, // NaN last
        1.0, 2.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.0, f32::NAN, 6.0, // NaN after a batch boundary
        1.0, 2.0, // no NaN
    ];
    let groups = GroupDescriptor::from_counts(&[2, 2, 0, 10, 2], values).unwrap();
    for strategy in ReduceStrategy::ALL {
        let maxes = reduce_with::<f32, Max>(strategy, &groups);
        assert!(maxes[0].is_nan(), "{strategy}: {maxes:?}");
        assert!(maxes[1].is_nan(), "{strategy}: {maxes:?}");
        assert_eq!(maxes[2], f32::NEG_INFINITY, "{strategy}");
        assert!(maxes[3].is_nan(), "{strategy}: {maxes:?}");
        assert_eq!(maxes[4], 2.0, "{strategy}");
    }
}
