//! The [`Range`] interval.

use crate::error::RangeError;
use std::fmt;
use std::ops::RangeInclusive;

/// A run of `length` consecutive integers beginning at `start`.
///
/// Always non-empty. Iterating a range yields `start, start + 1, ...,
/// start + length - 1`; every iteration starts over from `start`.
///
/// # Examples
///
/// ```
/// use gridwork_range::Range;
///
/// let r = Range::new(1, 4).unwrap();
/// assert_eq!(r.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
/// assert_eq!(r.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
/// assert!(Range::new(1, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Range {
    start: i64,
    length: i64,
}

impl Range {
    /// Create a range.
    ///
    /// Returns `Err(RangeError::NonPositiveLength)` when `length <= 0` and
    /// `Err(RangeError::Overflow)` when the last value exceeds `i64::MAX`.
    pub fn new(start: i64, length: i64) -> Result<Self, RangeError> {
        if length <= 0 {
            return Err(RangeError::NonPositiveLength { length });
        }
        if start.checked_add(length - 1).is_none() {
            return Err(RangeError::Overflow { start, length });
        }
        Ok(Self { start, length })
    }

    /// First covered integer.
    #[inline]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Number of covered integers.
    #[inline]
    pub fn len(&self) -> i64 {
        self.length
    }

    /// Always `false`; construction rejects empty ranges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Last covered integer (inclusive).
    #[inline]
    pub fn end(&self) -> i64 {
        self.start + (self.length - 1)
    }

    /// `true` iff `start <= value <= end`.
    #[inline]
    pub fn includes(&self, value: i64) -> bool {
        self.start <= value && value <= self.end()
    }

    /// The covered integers in ascending order.
    #[inline]
    pub fn iter(&self) -> RangeInclusive<i64> {
        self.start..=self.end()
    }
}

impl IntoIterator for Range {
    type Item = i64;
    type IntoIter = RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Range {
    type Item = i64;
    type IntoIter = RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end())
    }
}
