//! Synthetic ragged data for tests and benchmarks
//!
//! Group sizes are Poisson distributed around a chosen average, values are
//! drawn from Normal(1, 0.01). Sweeping the average group size from well
//! below one element to a thousand exercises every regime of the reducers:
//! mostly empty groups, groups shorter than a batch, and groups spanning many
//! batches.

use crate::{Error, GroupDescriptor, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal, Poisson};

/// Average group sizes of the throughput sweep
pub const AVERAGE_SIZES: [f64; 9] = [0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 100.0, 1000.0];

/// Per-group element counts, `ceil(total / average_size)` groups
pub fn poisson_counts(total: usize, average_size: f64, seed: u64) -> Result<Vec<usize>> {
    let poisson = Poisson::new(average_size).map_err(|e| {
        Error::InvalidInput(format!("average group size {average_size}: {e}"))
    })?;
    let group_count = (total as f64 / average_size).ceil() as usize;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Ok((0..group_count)
        .map(|_| {
            let count: f64 = poisson.sample(&mut rng);
            count as usize
        })
        .collect())
}

/// Random descriptor with Poisson group sizes and values near 1.0
pub fn poisson_groups(total: usize, average_size: f64, seed: u64) -> Result<GroupDescriptor<f32>> {
    let counts = poisson_counts(total, average_size, seed)?;
    let len: usize = counts.iter().sum();

    let normal = Normal::new(1.0f32, 0.01)
        .map_err(|e| Error::InvalidInput(format!("value distribution: {e}")))?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    let values: Vec<f32> = (0..len).map(|_| normal.sample(&mut rng)).collect();

    log::debug!(
        "generated {} groups, {} values (average size {})",
        counts.len(),
        len,
        average_size
    );

    GroupDescriptor::from_counts(&counts, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poisson_groups_shape() {
        let groups = poisson_groups(1000, 5.0, 42).unwrap();
        assert_eq!(groups.group_count(), 200);
        // Poisson(5) totals stay well within this band for 200 groups
        assert!(groups.len() > 800 && groups.len() < 1200);
        assert!(groups.values().iter().all(|v| (v - 1.0).abs() < 0.1));
    }

    #[test]
    fn test_small_average_gives_many_empty_groups() {
        let groups = poisson_groups(1000, 0.1, 7).unwrap();
        assert_eq!(groups.group_count(), 10_000);
        assert!(groups.empty_group_count() > 8_000);
    }

    #[test]
    fn test_generation_is_reproducible() {
        let a = poisson_groups(500, 2.0, 3).unwrap();
        let b = poisson_groups(500, 2.0, 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_non_positive_average() {
        assert!(matches!(
            poisson_counts(100, 0.0, 1),
            Err(Error::InvalidInput(_))
        ));
    }
}
