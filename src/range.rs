//! Half-open character ranges.

use std::fmt;
use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("empty range: start {start} is not before end {end}")]
    Empty { start: usize, end: usize },
}

/// A non-empty, half-open interval `[start, end)` of **character** indices
/// (Unicode scalar values, not bytes).
///
/// Ranges returned by [`find_match_ranges`](crate::find_match_ranges) index
/// into the normalized text; ranges returned by the `*_in_original`
/// operations index into the caller's text.
///
/// Ordering is by start, then end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", try_from = "RawMatchRange")
)]
pub struct MatchRange {
    start_index_inclusive: usize,
    end_index_exclusive: usize,
}

impl MatchRange {
    pub fn new(start: usize, end: usize) -> Result<Self, RangeError> {
        if start >= end {
            return Err(RangeError::Empty { start, end });
        }
        Ok(Self {
            start_index_inclusive: start,
            end_index_exclusive: end,
        })
    }

    /// `len` characters starting at `start`. `len` must be non-zero.
    #[inline]
    pub(crate) fn spanning(start: usize, len: usize) -> Self {
        debug_assert!(len > 0, "match ranges are never empty");
        Self {
            start_index_inclusive: start,
            end_index_exclusive: start + len,
        }
    }

    #[inline]
    pub const fn start(&self) -> usize {
        self.start_index_inclusive
    }

    #[inline]
    pub const fn end(&self) -> usize {
        self.end_index_exclusive
    }

    /// Number of characters covered. Never zero.
    #[inline]
    pub const fn char_len(&self) -> usize {
        self.end_index_exclusive - self.start_index_inclusive
    }

    #[inline]
    pub const fn as_range(&self) -> Range<usize> {
        self.start_index_inclusive..self.end_index_exclusive
    }

    /// `true` when the two ranges share at least one character.
    #[inline]
    pub const fn overlaps(&self, other: &MatchRange) -> bool {
        self.start_index_inclusive < other.end_index_exclusive
            && other.start_index_inclusive < self.end_index_exclusive
    }
}

impl fmt::Display for MatchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {})",
            self.start_index_inclusive, self.end_index_exclusive
        )
    }
}

impl From<MatchRange> for Range<usize> {
    fn from(range: MatchRange) -> Self {
        range.as_range()
    }
}

impl TryFrom<Range<usize>> for MatchRange {
    type Error = RangeError;

    fn try_from(range: Range<usize>) -> Result<Self, Self::Error> {
        Self::new(range.start, range.end)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMatchRange {
    start_index_inclusive: usize,
    end_index_exclusive: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatchRange> for MatchRange {
    type Error = RangeError;

    fn try_from(raw: RawMatchRange) -> Result<Self, Self::Error> {
        Self::new(raw.start_index_inclusive, raw.end_index_exclusive)
    }
}
