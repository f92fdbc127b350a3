//! Group membership tags
//!
//! Every element of the value array is either a member of one group or of
//! none. "No group" is its own variant rather than a reserved integer, so any
//! non-negative id stays usable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer encoding of a [`GroupTag`] inside a lane vector
pub type LaneKey = i32;

/// Lane encoding of [`GroupTag::NoGroup`]
///
/// Real group ids are validated to fit in `0..MAX_GROUPS`, so this value is
/// never produced by a real group.
pub const NO_GROUP_KEY: LaneKey = -1;

/// Largest number of groups a descriptor may hold
pub const MAX_GROUPS: usize = LaneKey::MAX as usize;

/// Group membership of one element of the value array
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GroupTag {
    /// Element is excluded from every group's total
    NoGroup,
    /// Element belongs to the group with this index
    Group(u32),
}

impl GroupTag {
    /// Group index, if any
    #[inline]
    pub fn group(self) -> Option<u32> {
        match self {
            GroupTag::Group(g) => Some(g),
            GroupTag::NoGroup => None,
        }
    }

    #[inline]
    pub fn is_group(self) -> bool {
        matches!(self, GroupTag::Group(_))
    }

    /// Interpret a raw parent index where any negative value means no group
    ///
    /// Ids too large for `u32` saturate, which descriptor validation then
    /// rejects as out of range.
    #[inline]
    pub fn from_raw(raw: i64) -> Self {
        if raw < 0 {
            GroupTag::NoGroup
        } else {
            GroupTag::Group(u32::try_from(raw).unwrap_or(u32::MAX))
        }
    }

    /// Encoding used by the lane primitives
    ///
    /// Only meaningful for ids below [`MAX_GROUPS`], which descriptor
    /// validation guarantees.
    #[inline]
    pub fn lane_key(self) -> LaneKey {
        match self {
            GroupTag::Group(g) => g as LaneKey,
            GroupTag::NoGroup => NO_GROUP_KEY,
        }
    }

    /// Inverse of [`GroupTag::lane_key`]
    #[inline]
    pub fn from_lane_key(key: LaneKey) -> Self {
        if key == NO_GROUP_KEY {
            GroupTag::NoGroup
        } else {
            GroupTag::Group(key as u32)
        }
    }
}

impl From<Option<u32>> for GroupTag {
    fn from(group: Option<u32>) -> Self {
        group.map_or(GroupTag::NoGroup, GroupTag::Group)
    }
}

impl From<u32> for GroupTag {
    fn from(group: u32) -> Self {
        GroupTag::Group(group)
    }
}

impl fmt::Display for GroupTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupTag::Group(g) => write!(f, "group {g}"),
            GroupTag::NoGroup => f.write_str("no group"),
        }
    }
}
