//! One-based item positions
//!
//! `ItemIndex` addresses entries of the rename plan the way the operator sees
//! them (starting at 1) and feeds the `{i}` and `{c...}` pattern tokens.
//! Every constructor and every arithmetic operation is checked: a value
//! outside `1..=isize::MAX` is reported as an `IndexError` instead of wrapping.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Largest position an `ItemIndex` may hold
const MAX_POSITION: usize = isize::MAX as usize;

/// Errors produced while building or moving an `ItemIndex`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Position outside `1..=isize::MAX`
    #[error("Item index {0} is out of range")]
    OutOfRange(i128),

    /// Input that is not a decimal number
    #[error("Not a valid item index: '{0}'")]
    Parse(String),

    /// Index valid on its own but past the end of the current plan
    #[error("Item index {index} is out of range (plan has {len} item(s))")]
    NotInPlan { index: ItemIndex, len: usize },
}

/// A bounds-checked, one-based position in the rename plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// The first position
    pub const FIRST: Self = Self(1);

    /// Create an index from a one-based position.
    ///
    /// # Errors
    /// Returns `IndexError::OutOfRange` for `0` or anything above `isize::MAX`.
    pub fn new(position: usize) -> Result<Self, IndexError> {
        if position == 0 || position > MAX_POSITION {
            return Err(IndexError::OutOfRange(position as i128));
        }
        Ok(Self(position))
    }

    /// Create an index from a zero-based container offset.
    ///
    /// # Errors
    /// Returns `IndexError::OutOfRange` when `offset + 1` exceeds `isize::MAX`.
    pub fn from_zero_based(offset: usize) -> Result<Self, IndexError> {
        offset
            .checked_add(1)
            .ok_or(IndexError::OutOfRange(offset as i128 + 1))
            .and_then(Self::new)
    }

    /// Index of an element held in memory.
    ///
    /// `offset` must be a position inside a live collection, whose length
    /// never exceeds `isize::MAX`.
    pub(crate) const fn for_offset(offset: usize) -> Self {
        Self(offset + 1)
    }

    /// One-based position as shown to the operator
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Zero-based offset for container access
    #[must_use]
    pub const fn zero_based(self) -> usize {
        self.0 - 1
    }

    /// Move by a signed amount.
    ///
    /// # Errors
    /// Returns `IndexError::OutOfRange` if the result leaves `1..=isize::MAX`.
    pub fn offset(self, delta: isize) -> Result<Self, IndexError> {
        let target = self.0 as i128 + delta as i128;
        if target < 1 || target > MAX_POSITION as i128 {
            return Err(IndexError::OutOfRange(target));
        }
        Ok(Self(target as usize))
    }

    /// The following position.
    ///
    /// # Errors
    /// Returns `IndexError::OutOfRange` at `isize::MAX`.
    pub fn succ(self) -> Result<Self, IndexError> {
        self.offset(1)
    }

    /// The preceding position.
    ///
    /// # Errors
    /// Returns `IndexError::OutOfRange` at position 1.
    pub fn pred(self) -> Result<Self, IndexError> {
        self.offset(-1)
    }

    /// Signed distance `self - other`
    #[must_use]
    pub const fn distance_from(self, other: Self) -> isize {
        self.0 as isize - other.0 as isize
    }

    /// Check that the index addresses an entry of a plan holding `len` items.
    ///
    /// # Errors
    /// Returns `IndexError::NotInPlan` when the index is past the end.
    pub const fn within(self, len: usize) -> Result<Self, IndexError> {
        if self.zero_based() < len {
            Ok(self)
        } else {
            Err(IndexError::NotInPlan { index: self, len })
        }
    }
}

impl fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemIndex {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let position = trimmed
            .parse::<u128>()
            .map_err(|_| IndexError::Parse(trimmed.to_string()))?;
        if position == 0 || position > MAX_POSITION as u128 {
            return Err(IndexError::OutOfRange(
                i128::try_from(position).unwrap_or(i128::MAX),
            ));
        }
        Self::new(position as usize)
    }
}

impl TryFrom<usize> for ItemIndex {
    type Error = IndexError;

    fn try_from(position: usize) -> Result<Self, Self::Error> {
        Self::new(position)
    }
}

impl From<ItemIndex> for usize {
    fn from(index: ItemIndex) -> Self {
        index.get()
    }
}
