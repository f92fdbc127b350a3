//! AVX2 segmented scan implementation for f32

use crate::group::{LaneKey, NO_GROUP_KEY};
use crate::layout::Carry;
use crate::primitives::backends::avx2::{Avx2Backend, AVX2_LANES};
use crate::primitives::Lanes;
use crate::{OperatorKind, ReduceOp};
use std::arch::x86_64::*;

/// Permutation indices for shifting lanes up by 1, 2 and 4
///
/// Vacated low lanes repeat lane 0; `SHIFT_VALID` masks them out.
const SHIFT_INDEX: [[i32; 8]; 3] = [
    [0, 0, 1, 2, 3, 4, 5, 6],
    [0, 0, 0, 1, 2, 3, 4, 5],
    [0, 0, 0, 0, 0, 1, 2, 3],
];

/// Lanes that have a real predecessor at each shift distance
const SHIFT_VALID: [[i32; 8]; 3] = [
    [0, -1, -1, -1, -1, -1, -1, -1],
    [0, 0, -1, -1, -1, -1, -1, -1],
    [0, 0, 0, 0, -1, -1, -1, -1],
];

/// Combine `earlier` into `s` on the lanes set in `mask`
#[inline]
#[target_feature(enable = "avx2")]
unsafe fn masked_combine_ps<O: ReduceOp<f32>>(s: __m256, mask: __m256, earlier: __m256) -> __m256 {
    match O::KIND {
        OperatorKind::Sum => _mm256_add_ps(s, _mm256_and_ps(mask, earlier)),
        OperatorKind::Max => {
            // max_ps(s, earlier) picks earlier on ties and when either is NaN;
            // a NaN in s is put back so it wins too
            let max = _mm256_max_ps(s, earlier);
            let max = _mm256_blendv_ps(max, s, _mm256_cmp_ps::<_CMP_UNORD_Q>(s, s));
            _mm256_blendv_ps(s, max, mask)
        }
    }
}

/// One masked shift-and-combine step
#[inline]
#[target_feature(enable = "avx2")]
unsafe fn shift_step<O: ReduceOp<f32>>(s: __m256, p: __m256i, step: usize) -> __m256 {
    let index = _mm256_loadu_si256(SHIFT_INDEX[step].as_ptr() as *const __m256i);
    let valid = _mm256_loadu_si256(SHIFT_VALID[step].as_ptr() as *const __m256i);

    let shifted_p = _mm256_permutevar8x32_epi32(p, index);
    let shifted_s = _mm256_permutevar8x32_ps(s, index);
    let same_group = _mm256_and_si256(_mm256_cmpeq_epi32(p, shifted_p), valid);

    masked_combine_ps::<O>(s, _mm256_castsi256_ps(same_group), shifted_s)
}

/// AVX2 implementation of the batch scan for f32
#[target_feature(enable = "avx2")]
pub unsafe fn scan_f32<O: ReduceOp<f32>>(
    _backend: &Avx2Backend,
    values: &mut Lanes<f32, AVX2_LANES>,
    keys: &Lanes<LaneKey, AVX2_LANES>,
    carry: Carry<f32>,
) {
    let mut s = _mm256_loadu_ps(values.0.as_ptr());
    let p = _mm256_loadu_si256(keys.0.as_ptr() as *const __m256i);

    // Carry enters through lane 0 only
    let fill_key = NO_GROUP_KEY;
    let fill = O::identity();
    let carry_p = _mm256_setr_epi32(
        carry.key, fill_key, fill_key, fill_key, fill_key, fill_key, fill_key, fill_key,
    );
    let carry_s = _mm256_setr_ps(carry.value, fill, fill, fill, fill, fill, fill, fill);
    let continues = _mm256_castsi256_ps(_mm256_cmpeq_epi32(p, carry_p));
    s = masked_combine_ps::<O>(s, continues, carry_s);

    s = shift_step::<O>(s, p, 0);
    s = shift_step::<O>(s, p, 1);
    s = shift_step::<O>(s, p, 2);

    _mm256_storeu_ps(values.0.as_mut_ptr(), s);
}
