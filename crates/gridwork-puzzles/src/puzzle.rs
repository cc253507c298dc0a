//! The [`Puzzle`] trait and its run parameters.

use crate::error::PuzzleError;
use std::fmt;

/// Which half of a puzzle to solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    /// The first question.
    One,
    /// The second question, usually a scaled-up variant of the first.
    Two,
}

impl Part {
    /// Both parts, in order.
    pub const BOTH: [Part; 2] = [Part::One, Part::Two];
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "1"),
            Self::Two => write!(f, "2"),
        }
    }
}

/// Tunables that some solvers read. Defaults are the puzzle's own values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleParams {
    /// How many lines one empty galaxy row or column becomes in part 2 of
    /// [`CosmicExpansion`](crate::CosmicExpansion). Default: 1,000,000.
    pub expansion_factor: i64,
    /// Spin cycles applied in part 2 of
    /// [`ParabolicDish`](crate::ParabolicDish). Default: 1,000,000,000.
    pub spin_cycles: u64,
}

impl Default for PuzzleParams {
    fn default() -> Self {
        Self {
            expansion_factor: 1_000_000,
            spin_cycles: 1_000_000_000,
        }
    }
}

/// A two-part puzzle solver.
///
/// # Contract
///
/// - `&self`: solvers are stateless; any cache lives inside one call.
/// - Both parts are deterministic for a given input and params.
/// - Malformed input is an error, never a panic.
///
/// # Object safety
///
/// This trait is object-safe; the registry stores solvers as
/// `Vec<Box<dyn Puzzle>>`.
pub trait Puzzle: Send + Sync + 'static {
    /// Kebab-case name used on the command line and for input files.
    fn name(&self) -> &'static str;

    /// Calendar day the puzzle belongs to.
    fn day(&self) -> u8;

    /// Answer the first question.
    fn part1(&self, input: &str, params: &PuzzleParams) -> Result<i64, PuzzleError>;

    /// Answer the second question.
    fn part2(&self, input: &str, params: &PuzzleParams) -> Result<i64, PuzzleError>;

    /// Dispatch to [`part1`](Self::part1) or [`part2`](Self::part2).
    fn solve(&self, part: Part, input: &str, params: &PuzzleParams) -> Result<i64, PuzzleError> {
        match part {
            Part::One => self.part1(input, params),
            Part::Two => self.part2(input, params),
        }
    }
}
