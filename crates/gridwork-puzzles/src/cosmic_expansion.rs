//! Day 11: summed distances between galaxies in an expanding universe.
//!
//! Every row and column without a galaxy is wider than it looks. Part 1
//! doubles them by inserting real rows and columns into the grid. Part 2
//! scales them by [`PuzzleParams::expansion_factor`], which is too large to
//! materialise, so galaxy coordinates are shifted instead.

use crate::error::PuzzleError;
use crate::puzzle::{Puzzle, PuzzleParams};
use gridwork_core::Position;
use gridwork_grid::Grid;
use tracing::debug;

/// Solver for cosmic expansion.
#[derive(Clone, Copy, Debug, Default)]
pub struct CosmicExpansion;

/// One cell of the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Space {
    /// `.`
    Empty,
    /// `#`
    Galaxy,
}

impl TryFrom<char> for Space {
    type Error = char;

    fn try_from(c: char) -> Result<Self, char> {
        match c {
            '.' => Ok(Space::Empty),
            '#' => Ok(Space::Galaxy),
            other => Err(other),
        }
    }
}

fn is_empty(line: &[Space]) -> bool {
    line.iter().all(|&s| s == Space::Empty)
}

fn empty_rows(grid: &Grid<Space>) -> Vec<usize> {
    (0..grid.height())
        .filter(|&y| grid.row(y).is_some_and(is_empty))
        .collect()
}

fn empty_columns(grid: &Grid<Space>) -> Vec<usize> {
    grid.columns()
        .enumerate()
        .filter(|(_, column)| is_empty(column))
        .map(|(x, _)| x)
        .collect()
}

fn pairwise_distance(galaxies: &[Position]) -> i64 {
    let mut total = 0u64;
    for (i, a) in galaxies.iter().enumerate() {
        for b in &galaxies[i + 1..] {
            total += a.manhattan_distance(*b);
        }
    }
    total as i64
}

/// Duplicate every empty row and column in place.
///
/// Insertion runs from the highest index down so earlier indices stay
/// valid.
pub fn expand_universe(grid: &mut Grid<Space>) -> Result<(), PuzzleError> {
    let columns = empty_columns(grid);
    let rows = empty_rows(grid);
    debug!(?columns, ?rows, "empty lines");
    for &x in columns.iter().rev() {
        let blank = vec![Space::Empty; grid.height()];
        grid.insert_column(x, blank)?;
    }
    for &y in rows.iter().rev() {
        let blank = vec![Space::Empty; grid.width()];
        grid.insert_row(y, blank)?;
    }
    Ok(())
}

/// Sum of pairwise distances when each empty line counts `factor` times.
pub fn expanded_distance(grid: &Grid<Space>, factor: i64) -> Result<i64, PuzzleError> {
    if factor < 1 {
        return Err(PuzzleError::no_solution(format!(
            "expansion factor must be at least 1, got {factor}"
        )));
    }
    let columns = empty_columns(grid);
    let rows = empty_rows(grid);
    let stretch = factor - 1;
    let galaxies: Vec<Position> = grid
        .filter(|&s| s == Space::Galaxy)
        .into_iter()
        .map(|p| {
            let before_x = columns.iter().filter(|&&x| (x as i64) < p.x).count() as i64;
            let before_y = rows.iter().filter(|&&y| (y as i64) < p.y).count() as i64;
            Position::new(p.x + before_x * stretch, p.y + before_y * stretch)
        })
        .collect();
    Ok(pairwise_distance(&galaxies))
}

impl Puzzle for CosmicExpansion {
    fn name(&self) -> &'static str {
        "cosmic-expansion"
    }

    fn day(&self) -> u8 {
        11
    }

    fn part1(&self, input: &str, _params: &PuzzleParams) -> Result<i64, PuzzleError> {
        let mut grid = Grid::<Space>::parse(input)?;
        expand_universe(&mut grid)?;
        let galaxies = grid.filter(|&s| s == Space::Galaxy);
        debug!(
            galaxies = galaxies.len(),
            width = grid.width(),
            height = grid.height(),
            "universe expanded"
        );
        Ok(pairwise_distance(&galaxies))
    }

    fn part2(&self, input: &str, params: &PuzzleParams) -> Result<i64, PuzzleError> {
        let grid = Grid::<Space>::parse(input)?;
        expanded_distance(&grid, params.expansion_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwork_test_utils::examples::COSMIC_EXPANSION;

    fn image() -> Grid<Space> {
        Grid::parse(COSMIC_EXPANSION).unwrap()
    }

    #[test]
    fn finds_empty_lines() {
        let grid = image();
        assert_eq!(empty_columns(&grid), vec![2, 5, 8]);
        assert_eq!(empty_rows(&grid), vec![3, 7]);
    }

    #[test]
    fn expansion_grows_the_grid() {
        let mut grid = image();
        expand_universe(&mut grid).unwrap();
        assert_eq!((grid.width(), grid.height()), (13, 12));
        assert_eq!(grid.filter(|&s| s == Space::Galaxy).len(), 9);
        // The first galaxy moves right past one doubled column.
        assert_eq!(grid.find(|&s| s == Space::Galaxy), Some(Position::new(4, 0)));
    }

    #[test]
    fn example_answers() {
        let params = PuzzleParams::default();
        assert_eq!(CosmicExpansion.part1(COSMIC_EXPANSION, &params).unwrap(), 374);
        assert_eq!(
            CosmicExpansion.part2(COSMIC_EXPANSION, &params).unwrap(),
            82_000_210
        );
    }

    #[test]
    fn custom_factors() {
        let grid = image();
        assert_eq!(expanded_distance(&grid, 10).unwrap(), 1030);
        assert_eq!(expanded_distance(&grid, 100).unwrap(), 8410);
    }

    #[test]
    fn doubling_matches_materialised_expansion() {
        let grid = image();
        let params = PuzzleParams::default();
        assert_eq!(
            expanded_distance(&grid, 2).unwrap(),
            CosmicExpansion.part1(COSMIC_EXPANSION, &params).unwrap()
        );
    }

    #[test]
    fn factor_below_one_is_rejected() {
        assert!(expanded_distance(&image(), 0).is_err());
    }
}
