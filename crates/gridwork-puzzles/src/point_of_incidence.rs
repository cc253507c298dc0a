//! Day 13: lines of reflection in ash and rock patterns.
//!
//! A pattern reflects across the gap before line `i` when every pair of
//! lines equidistant from the gap matches, up to the first edge. Rows give
//! horizontal mirrors, [`Grid::columns`] vertical ones. Part 2 looks for
//! the mirror that needs exactly one smudged cell fixed.

use crate::error::PuzzleError;
use crate::input::sections;
use crate::puzzle::{Puzzle, PuzzleParams};
use gridwork_grid::Grid;
use tracing::debug;

/// Solver for point of incidence.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointOfIncidence;

/// One cell of a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    /// `.`
    Ash,
    /// `#`
    Rock,
}

impl TryFrom<char> for Terrain {
    type Error = char;

    fn try_from(c: char) -> Result<Self, char> {
        match c {
            '.' => Ok(Terrain::Ash),
            '#' => Ok(Terrain::Rock),
            other => Err(other),
        }
    }
}

/// Number of lines before the first mirror whose reflected pairs differ
/// in exactly `smudges` cells, or `None`.
pub fn mirror_line<L: AsRef<[Terrain]>>(lines: &[L], smudges: usize) -> Option<usize> {
    (1..lines.len()).find(|&gap| {
        let before = lines[..gap].iter().rev();
        let after = lines[gap..].iter();
        let differences: usize = before
            .zip(after)
            .map(|(a, b)| {
                a.as_ref()
                    .iter()
                    .zip(b.as_ref())
                    .filter(|(x, y)| x != y)
                    .count()
            })
            .sum();
        differences == smudges
    })
}

/// `100 * rows above + columns left` over every mirror found.
pub fn summarize(pattern: &Grid<Terrain>, smudges: usize) -> usize {
    let rows: Vec<&[Terrain]> = pattern.rows().collect();
    let columns: Vec<Vec<Terrain>> = pattern.columns().collect();
    let horizontal = mirror_line(&rows, smudges);
    let vertical = mirror_line(&columns, smudges);
    debug!(?horizontal, ?vertical, smudges, "mirror lines");
    100 * horizontal.unwrap_or(0) + vertical.unwrap_or(0)
}

fn solve(input: &str, smudges: usize) -> Result<i64, PuzzleError> {
    let mut total = 0;
    for section in sections(input) {
        let pattern = Grid::<Terrain>::parse(&section)?;
        total += summarize(&pattern, smudges);
    }
    Ok(total as i64)
}

impl Puzzle for PointOfIncidence {
    fn name(&self) -> &'static str {
        "point-of-incidence"
    }

    fn day(&self) -> u8 {
        13
    }

    fn part1(&self, input: &str, _params: &PuzzleParams) -> Result<i64, PuzzleError> {
        solve(input, 0)
    }

    fn part2(&self, input: &str, _params: &PuzzleParams) -> Result<i64, PuzzleError> {
        solve(input, 1)
    }
}
