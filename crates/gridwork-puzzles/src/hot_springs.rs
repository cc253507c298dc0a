//! Day 12: counting spring arrangements consistent with damage records.
//!
//! Each record is a row of springs, some of unknown condition, and the
//! sizes of the contiguous damaged groups in order. The count is a
//! left-to-right recursion over `(spring, group, run)`, where `run` is the
//! length of the damaged group currently open. Part 2 unfolds every record
//! fivefold, which is only tractable with a [`MemoCache`] per record.

use crate::error::PuzzleError;
use crate::memo::{CacheStats, MemoCache};
use crate::puzzle::{Puzzle, PuzzleParams};
use tracing::debug;

const UNFOLD: usize = 5;

/// Solver for the hot springs.
#[derive(Clone, Copy, Debug, Default)]
pub struct HotSprings;

/// Condition of one spring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Spring {
    /// `.`
    Operational,
    /// `#`
    Damaged,
    /// `?`
    Unknown,
}

impl TryFrom<char> for Spring {
    type Error = char;

    fn try_from(c: char) -> Result<Self, char> {
        match c {
            '.' => Ok(Spring::Operational),
            '#' => Ok(Spring::Damaged),
            '?' => Ok(Spring::Unknown),
            other => Err(other),
        }
    }
}

type Key = (usize, usize, usize);

/// One line of the condition records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Springs left to right.
    pub springs: Vec<Spring>,
    /// Damaged group sizes left to right.
    pub groups: Vec<usize>,
}

impl Record {
    /// Parse `"???.### 1,1,3"`. `line` is used in errors.
    pub fn parse(text: &str, line: usize) -> Result<Self, PuzzleError> {
        let Some((springs, groups)) = text.trim().split_once(' ') else {
            return Err(PuzzleError::parse(line, "expected `springs groups`"));
        };
        let springs = springs
            .chars()
            .map(|c| {
                Spring::try_from(c)
                    .map_err(|c| PuzzleError::parse(line, format!("unknown spring `{c}`")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let groups = groups
            .split(',')
            .map(|g| {
                g.trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(|| PuzzleError::parse(line, format!("bad group size `{g}`")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { springs, groups })
    }

    /// The record repeated `copies` times, springs joined by an unknown
    /// spring.
    pub fn unfold(&self, copies: usize) -> Self {
        let mut springs = Vec::with_capacity((self.springs.len() + 1) * copies);
        for i in 0..copies {
            if i > 0 {
                springs.push(Spring::Unknown);
            }
            springs.extend_from_slice(&self.springs);
        }
        Self {
            springs,
            groups: self.groups.repeat(copies),
        }
    }

    /// Number of ways to assign the unknown springs so the damaged groups
    /// match, along with the cache counters of the computation.
    pub fn arrangements(&self) -> (u64, CacheStats) {
        let mut cache = MemoCache::new();
        let count = self.count(&mut cache, 0, 0, 0);
        (count, cache.stats())
    }

    fn count(&self, cache: &mut MemoCache<Key, u64>, spring: usize, group: usize, run: usize) -> u64 {
        let Some(&condition) = self.springs.get(spring) else {
            return self.closes(group, run) as u64;
        };
        let key = (spring, group, run);
        if let Some(hit) = cache.get(&key) {
            return hit;
        }
        let total = match condition {
            Spring::Unknown => {
                self.assume(cache, Spring::Operational, spring, group, run)
                    + self.assume(cache, Spring::Damaged, spring, group, run)
            }
            known => self.assume(cache, known, spring, group, run),
        };
        cache.insert(key, total);
        total
    }

    /// Count arrangements with `spring` fixed to `condition`.
    fn assume(
        &self,
        cache: &mut MemoCache<Key, u64>,
        condition: Spring,
        spring: usize,
        group: usize,
        run: usize,
    ) -> u64 {
        if condition == Spring::Damaged {
            return match self.groups.get(group) {
                Some(&size) if run < size => self.count(cache, spring + 1, group, run + 1),
                _ => 0,
            };
        }
        if run == 0 {
            self.count(cache, spring + 1, group, 0)
        } else if self.groups.get(group) == Some(&run) {
            self.count(cache, spring + 1, group + 1, 0)
        } else {
            0
        }
    }

    /// `true` when the record is complete after the last spring.
    fn closes(&self, group: usize, run: usize) -> bool {
        if run == 0 {
            group == self.groups.len()
        } else {
            group + 1 == self.groups.len() && self.groups[group] == run
        }
    }
}

fn parse_records(input: &str) -> Result<Vec<Record>, PuzzleError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| Record::parse(l, i + 1))
        .collect()
}

fn total_arrangements(records: &[Record]) -> i64 {
    let mut stats = CacheStats::default();
    let mut total = 0u64;
    for record in records {
        let (count, record_stats) = record.arrangements();
        total += count;
        stats += record_stats;
    }
    debug!(records = records.len(), %stats, "memo cache usage");
    total as i64
}

impl Puzzle for HotSprings {
    fn name(&self) -> &'static str {
        "hot-springs"
    }

    fn day(&self) -> u8 {
        12
    }

    fn part1(&self, input: &str, _params: &PuzzleParams) -> Result<i64, PuzzleError> {
        Ok(total_arrangements(&parse_records(input)?))
    }

    fn part2(&self, input: &str, _params: &PuzzleParams) -> Result<i64, PuzzleError> {
        let records: Vec<Record> = parse_records(input)?
            .iter()
            .map(|r| r.unfold(UNFOLD))
            .collect();
        Ok(total_arrangements(&records))
    }
}
