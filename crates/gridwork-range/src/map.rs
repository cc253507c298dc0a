//! [`RangeMap`] and its precomputed twin [`FastRangeMap`].
//!
//! Both maps resolve overlapping source ranges the same way: the pair
//! declared first wins.

use crate::error::RangeError;
use crate::range::Range;
use std::collections::HashMap;

/// Check that every pair shifts without resizing.
fn validate_pairs(pairs: &[(Range, Range)]) -> Result<(), RangeError> {
    for (i, (src, dst)) in pairs.iter().enumerate() {
        if src.len() != dst.len() {
            return Err(RangeError::LengthMismatch {
                pair: i,
                source: src.len(),
                destination: dst.len(),
            });
        }
    }
    Ok(())
}

/// Build pairs from `(source start, destination start, length)` triples.
fn pairs_from_triples(
    triples: impl IntoIterator<Item = (i64, i64, i64)>,
) -> Result<Vec<(Range, Range)>, RangeError> {
    triples
        .into_iter()
        .map(|(src, dst, length)| -> Result<(Range, Range), RangeError> {
            Ok((Range::new(src, length)?, Range::new(dst, length)?))
        })
        .collect()
}

/// A piecewise shift map from source ranges to destination ranges.
///
/// [`get`](Self::get) scans the pairs in declaration order and shifts the
/// key by the first pair whose source contains it. Keys outside every
/// source map to themselves. Lookups cost O(pairs) and the map stores
/// nothing beyond the pairs.
///
/// # Examples
///
/// ```
/// use gridwork_range::{Range, RangeMap};
///
/// let map = RangeMap::new(vec![
///     (Range::new(98, 2).unwrap(), Range::new(50, 2).unwrap()),
///     (Range::new(50, 48).unwrap(), Range::new(52, 48).unwrap()),
/// ])
/// .unwrap();
///
/// assert_eq!(map.get(49), 49);
/// assert_eq!(map.get(50), 52);
/// assert_eq!(map.get(98), 50);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RangeMap {
    pairs: Vec<(Range, Range)>,
}

impl RangeMap {
    /// Build a map from `(source, destination)` pairs.
    ///
    /// Returns `Err(RangeError::LengthMismatch)` when a pair's ranges
    /// differ in length.
    pub fn new(pairs: Vec<(Range, Range)>) -> Result<Self, RangeError> {
        validate_pairs(&pairs)?;
        Ok(Self { pairs })
    }

    /// Build a map from `(source start, destination start, length)`
    /// triples.
    pub fn from_triples(
        triples: impl IntoIterator<Item = (i64, i64, i64)>,
    ) -> Result<Self, RangeError> {
        Self::new(pairs_from_triples(triples)?)
    }

    /// Map `key` through the first pair whose source contains it, or
    /// return `key` unchanged.
    pub fn get(&self, key: i64) -> i64 {
        self.pairs
            .iter()
            .find(|(src, _)| src.includes(key))
            .map_or(key, |(src, dst)| dst.start() + (key - src.start()))
    }

    /// The pairs in declaration order.
    pub fn pairs(&self) -> &[(Range, Range)] {
        &self.pairs
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `true` when the map has no pairs and is therefore the identity.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// A [`RangeMap`] flattened into a point table.
///
/// Construction visits every covered source key, so time and memory grow
/// with the total length of the source ranges; lookups are O(1) on
/// average. Results are identical to [`RangeMap::get`] for every key.
///
/// # Examples
///
/// ```
/// use gridwork_range::{FastRangeMap, RangeMap};
///
/// let slow = RangeMap::from_triples([(98, 50, 2), (50, 52, 48)]).unwrap();
/// let fast = FastRangeMap::from(&slow);
/// assert!((0..100).all(|k| fast.get(k) == slow.get(k)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FastRangeMap {
    points: HashMap<i64, i64>,
}

impl FastRangeMap {
    /// Build the point table from `(source, destination)` pairs.
    ///
    /// Fails like [`RangeMap::new`].
    pub fn new(pairs: Vec<(Range, Range)>) -> Result<Self, RangeError> {
        validate_pairs(&pairs)?;
        Ok(Self::expand(&pairs))
    }

    /// Build the point table from `(source start, destination start,
    /// length)` triples.
    pub fn from_triples(
        triples: impl IntoIterator<Item = (i64, i64, i64)>,
    ) -> Result<Self, RangeError> {
        Self::new(pairs_from_triples(triples)?)
    }

    fn expand(pairs: &[(Range, Range)]) -> Self {
        let capacity = pairs.iter().map(|(src, _)| src.len() as usize).sum();
        let mut points = HashMap::with_capacity(capacity);
        for (src, dst) in pairs {
            for (key, value) in src.iter().zip(dst.iter()) {
                // Earlier pairs win on overlap.
                points.entry(key).or_insert(value);
            }
        }
        Self { points }
    }

    /// Map `key` through the table, or return it unchanged.
    pub fn get(&self, key: i64) -> i64 {
        self.points.get(&key).copied().unwrap_or(key)
    }

    /// Number of keys the table remaps.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` when no key is remapped.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<&RangeMap> for FastRangeMap {
    fn from(map: &RangeMap) -> Self {
        Self::expand(map.pairs())
    }
}
