//! Day 5: chaining seeds through the almanac's conversion maps.
//!
//! The input is a `seeds:` line followed by blank-line separated
//! `x-to-y map:` sections of `destination source length` triples. Each
//! section becomes a [`RangeMap`]; a seed's location is the seed pushed
//! through every map in order.

use crate::error::PuzzleError;
use crate::input::{numbers, sections};
use crate::puzzle::{Puzzle, PuzzleParams};
use gridwork_range::{Range, RangeMap};
use tracing::debug;

/// Solver for the seed almanac.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeedAlmanac;

/// One conversion stage, e.g. `seed-to-soil`.
#[derive(Clone, Debug)]
pub struct Stage {
    /// Section name without the trailing ` map:`.
    pub name: String,
    /// The conversion.
    pub map: RangeMap,
}

/// A parsed almanac.
#[derive(Clone, Debug)]
pub struct Almanac {
    /// Values from the `seeds:` line.
    pub seeds: Vec<i64>,
    /// Conversion stages in the order they appear.
    pub stages: Vec<Stage>,
}

impl Almanac {
    /// Parse the puzzle text.
    pub fn parse(input: &str) -> Result<Self, PuzzleError> {
        let sections = sections(input);
        let Some((first, rest)) = sections.split_first() else {
            return Err(PuzzleError::parse(1, "empty almanac"));
        };
        if first.lines().count() != 1 {
            return Err(PuzzleError::parse(2, "`seeds:` must be a single line"));
        }
        let seeds = match first.split_once(':') {
            Some(("seeds", values)) => numbers(values, 1)?,
            _ => return Err(PuzzleError::parse(1, "expected a `seeds:` line")),
        };

        let mut stages = Vec::with_capacity(rest.len());
        for section in rest {
            let mut lines = section.lines();
            let header = lines.next().unwrap_or_default().trim_end();
            let Some(name) = header.strip_suffix(" map:") else {
                return Err(PuzzleError::parse(
                    1,
                    format!("expected an `x-to-y map:` header, got `{header}`"),
                ));
            };
            let name = name.to_string();
            let mut triples = Vec::new();
            for (i, line) in lines.enumerate() {
                let values = numbers(line, i + 2)?;
                let [dst, src, len] = values[..] else {
                    return Err(PuzzleError::parse(
                        i + 2,
                        format!("`{name}` entries need three numbers, got {}", values.len()),
                    ));
                };
                triples.push((src, dst, len));
            }
            stages.push(Stage {
                name,
                map: RangeMap::from_triples(triples)?,
            });
        }
        Ok(Self { seeds, stages })
    }

    /// Push `seed` through every stage.
    pub fn location(&self, seed: i64) -> i64 {
        self.stages.iter().fold(seed, |key, stage| stage.map.get(key))
    }

    /// Seeds read as `(start, length)` pairs.
    pub fn seed_ranges(&self) -> Result<Vec<Range>, PuzzleError> {
        if self.seeds.len() % 2 != 0 {
            return Err(PuzzleError::parse(
                1,
                "seed ranges need an even number of values",
            ));
        }
        self.seeds
            .chunks_exact(2)
            .map(|pair| Range::new(pair[0], pair[1]).map_err(PuzzleError::from))
            .collect()
    }
}

impl Puzzle for SeedAlmanac {
    fn name(&self) -> &'static str {
        "seed-almanac"
    }

    fn day(&self) -> u8 {
        5
    }

    fn part1(&self, input: &str, _params: &PuzzleParams) -> Result<i64, PuzzleError> {
        let almanac = Almanac::parse(input)?;
        debug!(
            seeds = almanac.seeds.len(),
            stages = almanac.stages.len(),
            "almanac parsed"
        );
        almanac
            .seeds
            .iter()
            .map(|&seed| almanac.location(seed))
            .min()
            .ok_or_else(|| PuzzleError::no_solution("almanac lists no seeds"))
    }

    fn part2(&self, input: &str, _params: &PuzzleParams) -> Result<i64, PuzzleError> {
        let almanac = Almanac::parse(input)?;
        let mut best: Option<i64> = None;
        for range in almanac.seed_ranges()? {
            debug!(%range, seeds = range.len(), "scanning seed range");
            for seed in range {
                let location = almanac.location(seed);
                if best.is_none_or(|b| location < b) {
                    debug!(seed, location, "new lowest location");
                    best = Some(location);
                }
            }
        }
        best.ok_or_else(|| PuzzleError::no_solution("almanac lists no seeds"))
    }
}
