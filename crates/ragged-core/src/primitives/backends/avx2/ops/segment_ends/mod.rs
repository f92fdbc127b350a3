//! End-of-group detection for AVX2 backend
//!
//! A lane ends its group when the key one element ahead differs. Keys are
//! `i32` whatever the value type, so every element type takes this path.

use crate::group::LaneKey;
use crate::primitives::backends::avx2::{Avx2Backend, AVX2_LANES};
use crate::primitives::{LaneMask, Lanes};

/// Compare `keys` with `next_keys` and return the lanes that differ
///
/// # Safety
/// The CPU must support AVX2 when the `avx2` feature is compiled in.
#[inline]
pub unsafe fn compute(
    _backend: &Avx2Backend,
    keys: &Lanes<LaneKey, AVX2_LANES>,
    next_keys: &Lanes<LaneKey, AVX2_LANES>,
) -> LaneMask<AVX2_LANES> {
    #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
    {
        LaneMask::from_bits(segment_end_bits(keys, next_keys))
    }
    #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
    {
        keys.lanes_ne(next_keys)
    }
}

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
#[target_feature(enable = "avx2")]
unsafe fn segment_end_bits(
    keys: &Lanes<LaneKey, AVX2_LANES>,
    next_keys: &Lanes<LaneKey, AVX2_LANES>,
) -> u32 {
    use std::arch::x86_64::*;

    let p = _mm256_loadu_si256(keys.0.as_ptr() as *const __m256i);
    let p_next = _mm256_loadu_si256(next_keys.0.as_ptr() as *const __m256i);
    let same = _mm256_movemask_ps(_mm256_castsi256_ps(_mm256_cmpeq_epi32(p, p_next))) as u32;
    !same & 0xff
}
