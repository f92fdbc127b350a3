//! Group descriptor: the partition of a flat value array into groups
//!
//! A descriptor carries both encodings of the same partition:
//!
//! - **boundaries** (offsets): `G + 1` non-decreasing indices, group `g` owns
//!   `values[boundaries[g]..boundaries[g + 1]]`
//! - **group ids** (parents): one [`GroupTag`] per value
//!
//! Different reducers read different encodings, so the constructor checks that
//! they agree. Elements before `boundaries[0]` or from `boundaries[G]` on
//! belong to no group.

use crate::group::{GroupTag, MAX_GROUPS};
use crate::{Error, Numeric, Result};
use std::ops::Range;

/// Validated (boundaries, group ids, values) triple
#[derive(Clone, Debug, PartialEq)]
pub struct GroupDescriptor<T: Numeric> {
    boundaries: Vec<usize>,
    group_ids: Vec<GroupTag>,
    values: Vec<T>,
}

impl<T: Numeric> GroupDescriptor<T> {
    /// Build a descriptor from both encodings, checking that they agree
    ///
    /// An empty `boundaries` array describes zero groups.
    pub fn new(boundaries: Vec<usize>, group_ids: Vec<GroupTag>, values: Vec<T>) -> Result<Self> {
        validate_boundaries(&boundaries, values.len())?;
        if group_ids.len() != values.len() {
            return Err(Error::size_mismatch(
                values.len(),
                group_ids.len(),
                "group ids",
            ));
        }
        validate_agreement(&boundaries, &group_ids)?;

        log::debug!(
            "validated descriptor: {} groups over {} values",
            boundaries.len().saturating_sub(1),
            values.len()
        );

        Ok(Self {
            boundaries,
            group_ids,
            values,
        })
    }

    /// Build a descriptor from boundaries alone, deriving the group ids
    pub fn from_boundaries(boundaries: Vec<usize>, values: Vec<T>) -> Result<Self> {
        validate_boundaries(&boundaries, values.len())?;
        let group_ids = derive_group_ids(&boundaries, values.len());
        Ok(Self {
            boundaries,
            group_ids,
            values,
        })
    }

    /// Build a descriptor from per-group element counts
    ///
    /// The counts must cover every value.
    pub fn from_counts(counts: &[usize], values: Vec<T>) -> Result<Self> {
        let mut boundaries = Vec::with_capacity(counts.len() + 1);
        boundaries.push(0);
        let mut total = 0usize;
        for &count in counts {
            total += count;
            boundaries.push(total);
        }
        if total != values.len() {
            return Err(Error::size_mismatch(total, values.len(), "values"));
        }
        Self::from_boundaries(boundaries, values)
    }

    /// Build a descriptor without checking that the encodings agree
    ///
    /// Reducers read whichever encoding they need; if the two disagree the
    /// strategies produce different (but memory-safe) results. Checked in
    /// debug builds only.
    pub fn new_unchecked(boundaries: Vec<usize>, group_ids: Vec<GroupTag>, values: Vec<T>) -> Self {
        debug_assert!(validate_boundaries(&boundaries, values.len()).is_ok());
        debug_assert_eq!(group_ids.len(), values.len());
        debug_assert!(validate_agreement(&boundaries, &group_ids).is_ok());
        Self {
            boundaries,
            group_ids,
            values,
        }
    }

    /// Group boundary (offsets) array, `group_count() + 1` entries unless empty
    #[inline]
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// Per-value group tags
    #[inline]
    pub fn group_ids(&self) -> &[GroupTag] {
        &self.group_ids
    }

    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of groups, which is also the output length of every reducer
    #[inline]
    pub fn group_count(&self) -> usize {
        self.boundaries.len().saturating_sub(1)
    }

    /// Number of values
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Index range of group `g` in the value array
    ///
    /// # Panics
    /// Panics if `g >= group_count()`.
    #[inline]
    pub fn group_range(&self, g: usize) -> Range<usize> {
        self.boundaries[g]..self.boundaries[g + 1]
    }

    /// Number of elements in group `g`
    #[inline]
    pub fn group_len(&self, g: usize) -> usize {
        self.boundaries[g + 1] - self.boundaries[g]
    }

    /// Values of group `g`
    #[inline]
    pub fn group_values(&self, g: usize) -> &[T] {
        &self.values[self.group_range(g)]
    }

    /// Number of groups with no elements
    pub fn empty_group_count(&self) -> usize {
        self.boundaries.windows(2).filter(|w| w[0] == w[1]).count()
    }

    /// Consume the descriptor, returning (boundaries, group ids, values)
    pub fn into_parts(self) -> (Vec<usize>, Vec<GroupTag>, Vec<T>) {
        (self.boundaries, self.group_ids, self.values)
    }
}

fn validate_boundaries(boundaries: &[usize], len: usize) -> Result<()> {
    let group_count = boundaries.len().saturating_sub(1);
    if group_count > MAX_GROUPS {
        return Err(Error::TooManyGroups {
            group_count,
            max: MAX_GROUPS,
        });
    }
    if let Some(&first) = boundaries.first() {
        if first > len {
            return Err(Error::BoundariesOutOfRange {
                group: 0,
                start: first,
                end: first,
                len,
            });
        }
    }
    for (group, w) in boundaries.windows(2).enumerate() {
        let (start, end) = (w[0], w[1]);
        if start > end {
            return Err(Error::NonMonotonicBoundaries { group, start, end });
        }
        if end > len {
            return Err(Error::BoundariesOutOfRange {
                group,
                start,
                end,
                len,
            });
        }
    }
    Ok(())
}

/// Tag each element with the group the boundaries assign it to
fn derive_group_ids(boundaries: &[usize], len: usize) -> Vec<GroupTag> {
    let mut group_ids = vec![GroupTag::NoGroup; len];
    for (g, w) in boundaries.windows(2).enumerate() {
        for tag in &mut group_ids[w[0]..w[1]] {
            *tag = GroupTag::Group(g as u32);
        }
    }
    group_ids
}

fn validate_agreement(boundaries: &[usize], group_ids: &[GroupTag]) -> Result<()> {
    let group_count = boundaries.len().saturating_sub(1);
    let (start, end) = match (boundaries.first(), boundaries.last()) {
        (Some(&first), Some(&last)) if group_count > 0 => (first, last),
        _ => (0, 0),
    };

    let mut g = 0usize;
    for (index, &actual) in group_ids.iter().enumerate() {
        if let GroupTag::Group(id) = actual {
            if id as usize >= group_count {
                return Err(Error::GroupIdOutOfRange {
                    index,
                    group: id,
                    group_count,
                });
            }
        }

        let expected = if index < start || index >= end {
            GroupTag::NoGroup
        } else {
            while boundaries[g + 1] <= index {
                g += 1;
            }
            GroupTag::Group(g as u32)
        };

        if expected != actual {
            return Err(Error::partition_mismatch(index, expected, actual));
        }
    }
    Ok(())
}
