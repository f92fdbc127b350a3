//! Shared utilities for integration tests

#![allow(dead_code)]

use ragged_core::GroupDescriptor;

/// Generate array lengths that test edge cases for batch processing
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        0,   // Empty
        1,   // Single element
        3,   // Half batch
        7,   // Batch width - 1
        8,   // Batch width
        9,   // Batch width + 1
        15,  // Two batches - 1
        16,  // Two batches
        17,  // Two batches + 1
        31,  // Prime
        64,  // Cache line
        100, // Round number
        127, // Mersenne prime
    ]
}

/// Group sizes cycling through empty, short and batch-straddling groups
pub fn cycling_counts(len: usize) -> Vec<usize> {
    const PATTERN: [usize; 7] = [3, 0, 1, 9, 0, 0, 5];
    let mut counts = Vec::new();
    let mut total = 0;
    for &count in PATTERN.iter().cycle() {
        if total >= len {
            break;
        }
        let count = count.min(len - total);
        counts.push(count);
        total += count;
    }
    counts
}

/// Generate test data with specific patterns
pub fn generate_test_data(len: usize) -> Vec<f32> {
    (0..len).map(|i| (i % 13) as f32 - 4.0).collect()
}

/// Descriptor of `len` values split by [`cycling_counts`]
pub fn cycling_descriptor(len: usize) -> GroupDescriptor<f32> {
    GroupDescriptor::from_counts(&cycling_counts(len), generate_test_data(len))
        .expect("cycling counts cover every value")
}
