//! Portable fixed-width lane vectors
//!
//! `Lanes<T, W>` models one vector register holding `W` elements and
//! `LaneMask<W>` the result of a lane-wise comparison. The operations are the
//! ones a segmented scan needs: shift towards higher lanes, compare, masked
//! combine and select. Without hardware support they lower to plain loops over
//! `W` elements, which the compiler is free to auto-vectorize.

use crate::group::{LaneKey, NO_GROUP_KEY};
use crate::layout::Carry;
use crate::{Numeric, ReduceOp};

/// Default batch width: one AVX2 register of 32-bit elements
pub const DEFAULT_LANES: usize = 8;

/// One batch of `W` elements
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lanes<T, const W: usize>(pub [T; W]);

impl<T: Copy, const W: usize> Lanes<T, W> {
    /// Load the first `W` elements of `src`
    ///
    /// # Panics
    /// Panics if `src` holds fewer than `W` elements.
    #[inline(always)]
    pub fn load(src: &[T]) -> Self {
        Self(std::array::from_fn(|k| src[k]))
    }

    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self([value; W])
    }

    /// `value` in lane 0 and `fill` everywhere else
    #[inline(always)]
    pub fn first_lane_only(value: T, fill: T) -> Self {
        Self(std::array::from_fn(|k| if k == 0 { value } else { fill }))
    }

    /// Move every lane `distance` lanes up; vacated low lanes get `fill`
    #[inline(always)]
    pub fn shift_up(self, distance: usize, fill: T) -> Self {
        Self(std::array::from_fn(|k| {
            if k >= distance {
                self.0[k - distance]
            } else {
                fill
            }
        }))
    }

    /// Lane-wise `mask ? if_true : if_false`
    #[inline(always)]
    pub fn select(mask: LaneMask<W>, if_true: Self, if_false: Self) -> Self {
        Self(std::array::from_fn(|k| {
            if mask.0[k] {
                if_true.0[k]
            } else {
                if_false.0[k]
            }
        }))
    }

    #[inline(always)]
    pub fn last(&self) -> T {
        self.0[W - 1]
    }

    #[inline(always)]
    pub fn lane(&self, k: usize) -> T {
        self.0[k]
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; W] {
        self.0
    }
}

impl<T: Copy + PartialEq, const W: usize> Lanes<T, W> {
    #[inline(always)]
    pub fn lanes_eq(&self, other: &Self) -> LaneMask<W> {
        LaneMask(std::array::from_fn(|k| self.0[k] == other.0[k]))
    }

    #[inline(always)]
    pub fn lanes_ne(&self, other: &Self) -> LaneMask<W> {
        self.lanes_eq(other).not()
    }
}

impl<T: Numeric, const W: usize> Lanes<T, W> {
    /// Where `mask` is set, fold `earlier` into this lane with `O`
    ///
    /// `earlier` holds the elements that precede this lane's elements in
    /// group order.
    #[inline(always)]
    pub fn masked_combine<O: ReduceOp<T>>(self, mask: LaneMask<W>, earlier: Self) -> Self {
        let combined = Self(std::array::from_fn(|k| O::combine(earlier.0[k], self.0[k])));
        Self::select(mask, combined, self)
    }
}

/// Result of a lane-wise comparison
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaneMask<const W: usize>(pub [bool; W]);

impl<const W: usize> LaneMask<W> {
    /// Lanes `first..W` set
    #[inline(always)]
    pub fn from_lane(first: usize) -> Self {
        Self(std::array::from_fn(|k| k >= first))
    }

    /// Build from the low `W` bits of `bits`, lane 0 in bit 0
    #[inline(always)]
    pub fn from_bits(bits: u32) -> Self {
        Self(std::array::from_fn(|k| bits & (1 << k) != 0))
    }

    #[inline(always)]
    pub fn and(self, other: Self) -> Self {
        Self(std::array::from_fn(|k| self.0[k] && other.0[k]))
    }

    #[inline(always)]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self(std::array::from_fn(|k| !self.0[k]))
    }

    #[inline(always)]
    pub fn any(&self) -> bool {
        self.0.iter().any(|&m| m)
    }

    #[inline(always)]
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&m| m).count()
    }

    /// Indices of the set lanes, ascending
    #[inline]
    pub fn set_lanes(self) -> impl Iterator<Item = usize> {
        (0..W).filter(move |&k| self.0[k])
    }
}

/// In-register segmented inclusive scan of one batch
///
/// Folds `carry` into lane 0 when it belongs to the same group, then runs
/// the doubling steps at distances 1, 2, 4, ... below `W`. Afterwards lane `k`
/// holds the reduction of its group's elements up to and including `k`,
/// counting the carried-in prefix. Lanes shifted in from below the batch
/// never match.
#[inline(always)]
pub fn segmented_scan<T: Numeric, O: ReduceOp<T>, const W: usize>(
    values: &mut Lanes<T, W>,
    keys: &Lanes<LaneKey, W>,
    carry: Carry<T>,
) {
    let carry_keys = Lanes::first_lane_only(carry.key, NO_GROUP_KEY);
    let carry_values = Lanes::first_lane_only(carry.value, O::identity());
    *values = values.masked_combine::<O>(keys.lanes_eq(&carry_keys), carry_values);

    let mut distance = 1;
    while distance < W {
        let shifted_keys = keys.shift_up(distance, NO_GROUP_KEY);
        let same_group = keys
            .lanes_eq(&shifted_keys)
            .and(LaneMask::from_lane(distance));
        let shifted = values.shift_up(distance, O::identity());
        *values = values.masked_combine::<O>(same_group, shifted);
        distance *= 2;
    }
}
