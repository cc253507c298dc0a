//! Memoisation for recursive counting.
//!
//! A [`MemoCache`] belongs to one top-level computation: create it at the
//! root of a call tree, thread `&mut` through the recursion, and drop it
//! when the root returns. Keys must capture every argument that affects
//! the result.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::AddAssign;

/// Hit and miss counters for a [`MemoCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to be computed.
    pub misses: u64,
    /// Entries stored.
    pub entries: usize,
}

impl CacheStats {
    /// Fraction of lookups that hit, or `0.0` before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl AddAssign for CacheStats {
    fn add_assign(&mut self, other: Self) {
        self.hits += other.hits;
        self.misses += other.misses;
        self.entries += other.entries;
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hits, {} misses, {} entries ({:.1}% hit rate)",
            self.hits,
            self.misses,
            self.entries,
            self.hit_rate() * 100.0
        )
    }
}

/// A map from argument tuples to computed results, with usage counters.
#[derive(Debug)]
pub struct MemoCache<K, V> {
    entries: HashMap<K, V>,
    hits: u64,
    misses: u64,
}

impl<K: Eq + Hash, V: Clone> MemoCache<K, V> {
    /// An empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Look up `key`, counting a hit or a miss.
    pub fn get(&mut self, key: &K) -> Option<V> {
        match self.entries.get(key) {
            Some(value) => {
                self.hits += 1;
                Some(value.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store the result for `key`, replacing any previous entry.
    pub fn insert(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// Counters so far.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}

impl<K: Eq + Hash, V: Clone> Default for MemoCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fib(n: u64, cache: &mut MemoCache<u64, u64>) -> u64 {
        if n < 2 {
            return n;
        }
        if let Some(v) = cache.get(&n) {
            return v;
        }
        let v = fib(n - 1, cache) + fib(n - 2, cache);
        cache.insert(n, v);
        v
    }

    #[test]
    fn counts_hits_and_misses() {
        let mut cache = MemoCache::new();
        assert_eq!(fib(50, &mut cache), 12_586_269_025);
        let stats = cache.stats();
        // Every n in 2..=50 misses once; n in 2..=48 is reused by n + 2.
        assert_eq!(stats.misses, 49);
        assert_eq!(stats.entries, 49);
        assert_eq!(stats.hits, 47);
    }

    #[test]
    fn stats_accumulate_and_report() {
        let mut total = CacheStats::default();
        assert_eq!(total.hit_rate(), 0.0);
        total += CacheStats {
            hits: 3,
            misses: 1,
            entries: 1,
        };
        total += CacheStats {
            hits: 1,
            misses: 3,
            entries: 3,
        };
        assert_eq!(total.hits, 4);
        assert_eq!(total.entries, 4);
        assert_eq!(total.hit_rate(), 0.5);
        assert_eq!(total.to_string(), "4 hits, 4 misses, 4 entries (50.0% hit rate)");
    }
}
