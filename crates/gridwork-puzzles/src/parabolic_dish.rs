//! Day 14: tilting a platform of rolling rocks.
//!
//! Only a northward tilt is implemented. A spin cycle tilts north, west,
//! south and east in turn, which is the same as tilting north and rotating
//! clockwise four times. A billion cycles are reached by finding the first
//! repeated state and skipping whole periods.

use crate::error::PuzzleError;
use crate::puzzle::{Puzzle, PuzzleParams};
use gridwork_core::{Position, Rotation};
use gridwork_grid::Grid;
use indexmap::IndexSet;
use tracing::{debug, trace};

/// Solver for the parabolic reflector dish.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParabolicDish;

/// One cell of the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rock {
    /// `O`, rolls when tilted.
    Round,
    /// `#`, fixed in place.
    Cube,
    /// `.`
    Empty,
}

impl TryFrom<char> for Rock {
    type Error = char;

    fn try_from(c: char) -> Result<Self, char> {
        match c {
            'O' => Ok(Rock::Round),
            '#' => Ok(Rock::Cube),
            '.' => Ok(Rock::Empty),
            other => Err(other),
        }
    }
}

/// Roll every round rock as far north as it goes.
pub fn tilt_north(grid: &mut Grid<Rock>) -> Result<(), PuzzleError> {
    for x in 0..grid.width() as i64 {
        let mut resting = 0;
        for y in 0..grid.height() as i64 {
            let here = Position::new(x, y);
            let rock = grid[here];
            match rock {
                Rock::Cube => resting = y + 1,
                Rock::Round => {
                    if resting != y {
                        grid.set(Position::new(x, resting), Rock::Round)?;
                        grid.set(here, Rock::Empty)?;
                    }
                    resting += 1;
                }
                Rock::Empty => {}
            }
        }
    }
    Ok(())
}

/// Total load on the north support beams.
pub fn north_load(grid: &Grid<Rock>) -> i64 {
    let height = grid.height() as i64;
    grid.filter(|&r| r == Rock::Round)
        .into_iter()
        .map(|p| height - p.y)
        .sum()
}

/// Tilt north, west, south, then east.
pub fn spin_cycle(grid: &mut Grid<Rock>) -> Result<(), PuzzleError> {
    for _ in 0..4 {
        tilt_north(grid)?;
        grid.rotate(Rotation::Clockwise);
    }
    Ok(())
}

/// The platform after `cycles` spin cycles.
pub fn spin(mut grid: Grid<Rock>, cycles: u64) -> Result<Grid<Rock>, PuzzleError> {
    let mut seen: IndexSet<Grid<Rock>> = IndexSet::new();
    seen.insert(grid.clone());
    for done in 1..=cycles {
        spin_cycle(&mut grid)?;
        trace!(done, load = north_load(&grid), "spin cycle");
        if let Some(first) = seen.get_index_of(&grid) {
            let period = done - first as u64;
            let index = first as u64 + (cycles - first as u64) % period;
            debug!(first, period, index, "spin cycle repeats");
            return seen
                .swap_remove_index(index as usize)
                .ok_or_else(|| PuzzleError::no_solution("cycle index out of range"));
        }
        seen.insert(grid.clone());
    }
    Ok(grid)
}

impl Puzzle for ParabolicDish {
    fn name(&self) -> &'static str {
        "parabolic-dish"
    }

    fn day(&self) -> u8 {
        14
    }

    fn part1(&self, input: &str, _params: &PuzzleParams) -> Result<i64, PuzzleError> {
        let mut grid = Grid::<Rock>::parse(input)?;
        tilt_north(&mut grid)?;
        Ok(north_load(&grid))
    }

    fn part2(&self, input: &str, params: &PuzzleParams) -> Result<i64, PuzzleError> {
        let grid = Grid::<Rock>::parse(input)?;
        Ok(north_load(&spin(grid, params.spin_cycles)?))
    }
}
