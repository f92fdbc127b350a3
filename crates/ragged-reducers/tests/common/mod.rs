//! Shared utilities for reducer integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use ragged_core::{GroupDescriptor, Numeric};

/// Relative tolerance between strategies that reassociate float sums
pub const REL_TOLERANCE: f64 = 1e-5;

/// Generate array lengths that test edge cases for 4, 8 and 16 lane batches
pub fn edge_case_lengths() -> Vec<usize> {
    vec![0, 1, 2, 3, 4, 5, 7, 8, 9, 15, 16, 17, 31, 32, 33, 100, 127, 128, 129]
}

/// Group size patterns covering empty, short and batch-straddling groups
pub fn count_patterns() -> Vec<(&'static str, Vec<usize>)> {
    vec![
        ("singletons", vec![1; 20]),
        ("all_empty", vec![0; 5]),
        ("empty_runs", vec![0, 0, 3, 0, 0, 0, 5, 0]),
        ("batch_sized", vec![8, 8, 8]),
        ("straddling", vec![7, 9, 15, 17, 1]),
        ("one_long", vec![129]),
        ("mixed", vec![3, 0, 1, 9, 0, 0, 5, 2, 33, 0, 4]),
    ]
}

/// Integer-valued floats, so every summation order is exact
pub fn exact_values(len: usize) -> Vec<f32> {
    (0..len).map(|i| ((i * 7) % 11) as f32 - 5.0).collect()
}

pub fn descriptor_from_counts(counts: &[usize]) -> GroupDescriptor<f32> {
    let len = counts.iter().sum();
    GroupDescriptor::from_counts(counts, exact_values(len)).expect("counts cover the values")
}

/// Split `len` values into groups of `group_size`, with a shorter last group
pub fn uniform_descriptor(len: usize, group_size: usize) -> GroupDescriptor<f32> {
    let mut counts = vec![group_size; len / group_size];
    if len % group_size != 0 {
        counts.push(len % group_size);
    }
    GroupDescriptor::from_counts(&counts, exact_values(len)).expect("counts cover the values")
}

/// Assert two outputs agree within [`REL_TOLERANCE`]
pub fn assert_outputs_close<T: Numeric>(actual: &[T], expected: &[T], context: &str) {
    assert_eq!(actual.len(), expected.len(), "length mismatch for {context}");
    for (g, (a, e)) in actual.iter().zip(expected).enumerate() {
        if a == e {
            continue;
        }
        let (a, e) = (a.to_f64(), e.to_f64());
        assert!(
            (a - e).abs() <= REL_TOLERANCE * e.abs().max(1.0),
            "{context}: group {g} got {a}, expected {e}"
        );
    }
}
