//! Batch-aligned layout for lane-carry reductions
//!
//! The vector reducer reads its input in whole batches of `W` lanes and
//! compares every lane's key with the key one element ahead. [`LaneLayout`]
//! owns copies of the values and lane keys padded so both reads stay in
//! bounds:
//!
//! - values are padded to a multiple of `W`
//! - keys are padded the same way with [`NO_GROUP_KEY`], plus one trailing
//!   lookahead key
//!
//! Padding lanes belong to no group, so they never contribute to a total and
//! never produce a write.

use crate::group::{GroupTag, LaneKey, MAX_GROUPS, NO_GROUP_KEY};
use crate::primitives::{Lanes, DEFAULT_LANES};
use crate::{Error, GroupDescriptor, Numeric, ReduceOp, Result};

/// Partial reduction of a group still open at the end of a batch
///
/// Produced from the last lane of batch `k` and consumed by batch `k + 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Carry<T> {
    pub value: T,
    pub key: LaneKey,
}

impl<T: Numeric> Carry<T> {
    /// Carry entering the first batch: identity value, no group
    #[inline]
    pub fn empty<O: ReduceOp<T>>() -> Self {
        Self {
            value: O::identity(),
            key: NO_GROUP_KEY,
        }
    }

    /// Carry leaving a scanned batch: its last lane
    #[inline]
    pub fn from_last_lane<const W: usize>(values: &Lanes<T, W>, keys: &Lanes<LaneKey, W>) -> Self {
        Self {
            value: values.last(),
            key: keys.last(),
        }
    }

    #[inline]
    pub fn group(&self) -> GroupTag {
        GroupTag::from_lane_key(self.key)
    }
}

/// A finished group total, emitted by the lane holding the group's last element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentWrite<T> {
    pub group: u32,
    pub value: T,
}

/// One batch of a [`LaneLayout`]
#[derive(Clone, Copy, Debug)]
pub struct Batch<T, const W: usize> {
    /// Index of lane 0 in the value array
    pub offset: usize,
    pub values: Lanes<T, W>,
    pub keys: Lanes<LaneKey, W>,
    /// `keys` shifted one element ahead, for end-of-group detection
    pub next_keys: Lanes<LaneKey, W>,
}

/// Padded values and lane keys, ready for batch-wise processing
#[derive(Clone, Debug, PartialEq)]
pub struct LaneLayout<T: Numeric, const W: usize = DEFAULT_LANES> {
    values: Vec<T>,
    keys: Vec<LaneKey>,
    len: usize,
    group_count: usize,
}

impl<T: Numeric, const W: usize> LaneLayout<T, W> {
    /// Pad a validated descriptor to whole batches
    pub fn from_descriptor(groups: &GroupDescriptor<T>) -> Self {
        assert!(W > 0, "lane width must be non-zero");
        let len = groups.len();
        let padded_len = padded_len::<W>(len);

        let mut values = Vec::with_capacity(padded_len);
        values.extend_from_slice(groups.values());
        values.resize(padded_len, T::zero());

        let mut keys = Vec::with_capacity(padded_len + 1);
        keys.extend(groups.group_ids().iter().map(|tag| tag.lane_key()));
        keys.resize(padded_len + 1, NO_GROUP_KEY);

        log::trace!(
            "lane layout: {} values padded to {} ({} lanes per batch)",
            len,
            padded_len,
            W
        );

        Self {
            values,
            keys,
            len,
            group_count: groups.group_count(),
        }
    }

    /// Adopt arrays that are already padded
    ///
    /// `values.len()` must be a multiple of `W` and `keys` must hold one more
    /// element than `values`, ending in [`NO_GROUP_KEY`]. Every key must be
    /// [`NO_GROUP_KEY`] or a group index below `group_count`, and real keys
    /// must form contiguous runs.
    pub fn from_padded(values: Vec<T>, keys: Vec<LaneKey>, group_count: usize) -> Result<Self> {
        assert!(W > 0, "lane width must be non-zero");
        if group_count > MAX_GROUPS {
            return Err(Error::TooManyGroups {
                group_count,
                max: MAX_GROUPS,
            });
        }
        if values.len() % W != 0 {
            return Err(Error::InvalidInput(format!(
                "{} values are not a whole number of {}-lane batches",
                values.len(),
                W
            )));
        }
        if keys.len() != values.len() + 1 {
            return Err(Error::size_mismatch(
                values.len() + 1,
                keys.len(),
                "padded lane keys",
            ));
        }
        if keys.last() != Some(&NO_GROUP_KEY) {
            return Err(Error::InvalidInput(
                "padded lane keys must end with the no-group lookahead".to_string(),
            ));
        }

        let mut closed_up_to: LaneKey = NO_GROUP_KEY;
        let mut previous = NO_GROUP_KEY;
        for (index, &key) in keys.iter().enumerate() {
            if key == NO_GROUP_KEY {
                previous = key;
                continue;
            }
            if key < 0 || key as usize >= group_count {
                return Err(Error::GroupIdOutOfRange {
                    index,
                    group: key as u32,
                    group_count,
                });
            }
            if key != previous {
                if key <= closed_up_to {
                    return Err(Error::InvalidInput(format!(
                        "group {key} at element {index} is not contiguous"
                    )));
                }
                closed_up_to = key;
            }
            previous = key;
        }

        let len = keys[..values.len()]
            .iter()
            .rposition(|&key| key != NO_GROUP_KEY)
            .map_or(0, |last| last + 1);

        Ok(Self {
            values,
            keys,
            len,
            group_count,
        })
    }

    /// Number of real (unpadded) values, up to the last grouped element
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn padded_len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    #[inline]
    pub fn batch_count(&self) -> usize {
        self.values.len() / W
    }

    #[inline]
    pub fn lane_width(&self) -> usize {
        W
    }

    /// Padded value array
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Padded lane keys including the lookahead
    #[inline]
    pub fn keys(&self) -> &[LaneKey] {
        &self.keys
    }

    /// Load batch `index`
    #[inline]
    pub fn batch(&self, index: usize) -> Batch<T, W> {
        let offset = index * W;
        Batch {
            offset,
            values: Lanes::load(&self.values[offset..]),
            keys: Lanes::load(&self.keys[offset..]),
            next_keys: Lanes::load(&self.keys[offset + 1..]),
        }
    }

    /// All batches in order
    pub fn batches(&self) -> impl Iterator<Item = Batch<T, W>> + '_ {
        (0..self.batch_count()).map(move |index| self.batch(index))
    }
}

/// Smallest multiple of `W` that holds `len` elements
#[inline]
pub fn padded_len<const W: usize>(len: usize) -> usize {
    len.div_ceil(W) * W
}
