//! Day 16: a beam of light bouncing through mirrors and splitters.
//!
//! Beams are traced with [`cast_rays`]; each tile decides the outgoing
//! headings for an incoming one. Part 2 tries every entry along the four
//! edges and keeps the best. Every entry is an independent trace over the
//! same immutable grid.

use crate::error::PuzzleError;
use crate::puzzle::{Puzzle, PuzzleParams};
use gridwork_core::{Direction, Position, Ray};
use gridwork_grid::traverse::Headings;
use gridwork_grid::{cast_rays, Grid};
use smallvec::smallvec;
use tracing::debug;

/// Solver for the lava floor contraption.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloorLava;

/// One tile of the contraption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// `.`, beams pass through.
    Empty,
    /// `/`
    ForwardMirror,
    /// `\`
    BackMirror,
    /// `|`, splits horizontal beams up and down.
    VerticalSplitter,
    /// `-`, splits vertical beams left and right.
    HorizontalSplitter,
}

impl Tile {
    /// Outgoing headings for a beam arriving with `heading`.
    pub fn deflect(self, heading: Direction) -> Headings {
        use Direction::*;
        match (self, heading) {
            (Tile::ForwardMirror, Up) => smallvec![Right],
            (Tile::ForwardMirror, Right) => smallvec![Up],
            (Tile::ForwardMirror, Down) => smallvec![Left],
            (Tile::ForwardMirror, Left) => smallvec![Down],
            (Tile::BackMirror, Up) => smallvec![Left],
            (Tile::BackMirror, Left) => smallvec![Up],
            (Tile::BackMirror, Down) => smallvec![Right],
            (Tile::BackMirror, Right) => smallvec![Down],
            (Tile::VerticalSplitter, h) if h.is_horizontal() => smallvec![Up, Down],
            (Tile::HorizontalSplitter, h) if !h.is_horizontal() => smallvec![Left, Right],
            (_, h) => smallvec![h],
        }
    }
}

impl TryFrom<char> for Tile {
    type Error = char;

    fn try_from(c: char) -> Result<Self, char> {
        match c {
            '.' => Ok(Tile::Empty),
            '/' => Ok(Tile::ForwardMirror),
            '\\' => Ok(Tile::BackMirror),
            '|' => Ok(Tile::VerticalSplitter),
            '-' => Ok(Tile::HorizontalSplitter),
            other => Err(other),
        }
    }
}

/// Number of tiles a beam entering along `entry` energises.
pub fn energized(grid: &Grid<Tile>, entry: Ray) -> usize {
    cast_rays(grid, entry, |tile, heading| tile.deflect(heading)).len()
}

/// Every entry just outside the grid, pointing in.
pub fn edge_entries(grid: &Grid<Tile>) -> Vec<Ray> {
    let width = grid.width() as i64;
    let height = grid.height() as i64;
    let mut entries = Vec::with_capacity(2 * (width + height) as usize);
    for x in 0..width {
        entries.push(Ray::new(Position::new(x, -1), Direction::Down));
        entries.push(Ray::new(Position::new(x, height), Direction::Up));
    }
    for y in 0..height {
        entries.push(Ray::new(Position::new(-1, y), Direction::Right));
        entries.push(Ray::new(Position::new(width, y), Direction::Left));
    }
    entries
}

impl Puzzle for FloorLava {
    fn name(&self) -> &'static str {
        "floor-lava"
    }

    fn day(&self) -> u8 {
        16
    }

    fn part1(&self, input: &str, _params: &PuzzleParams) -> Result<i64, PuzzleError> {
        let grid = Grid::<Tile>::parse(input)?;
        let entry = Ray::new(Position::new(-1, 0), Direction::Right);
        Ok(energized(&grid, entry) as i64)
    }

    fn part2(&self, input: &str, _params: &PuzzleParams) -> Result<i64, PuzzleError> {
        let grid = Grid::<Tile>::parse(input)?;
        let (best, count) = edge_entries(&grid)
            .into_iter()
            .map(|entry| (entry, energized(&grid, entry)))
            .max_by_key(|&(_, count)| count)
            .ok_or_else(|| PuzzleError::no_solution("grid has no edges"))?;
        debug!(entry = %best.position, heading = ?best.direction, count, "best entry");
        Ok(count as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwork_test_utils::examples::FLOOR_LAVA;

    fn contraption() -> Grid<Tile> {
        Grid::parse(FLOOR_LAVA).unwrap()
    }

    #[test]
    fn mirrors_turn_a_quarter() {
        for heading in Direction::ALL {
            for mirror in [Tile::ForwardMirror, Tile::BackMirror] {
                let out = mirror.deflect(heading);
                assert_eq!(out.len(), 1);
                assert_ne!(out[0].is_horizontal(), heading.is_horizontal());
                // Reflecting the outgoing beam back reverses the path.
                assert_eq!(mirror.deflect(out[0].opposite())[0], heading.opposite());
            }
        }
    }

    #[test]
    fn splitters_split_only_across() {
        assert_eq!(
            Tile::VerticalSplitter.deflect(Direction::Right).to_vec(),
            vec![Direction::Up, Direction::Down]
        );
        assert_eq!(
            Tile::VerticalSplitter.deflect(Direction::Up).to_vec(),
            vec![Direction::Up]
        );
        assert_eq!(
            Tile::HorizontalSplitter.deflect(Direction::Down).to_vec(),
            vec![Direction::Left, Direction::Right]
        );
        assert_eq!(
            Tile::HorizontalSplitter.deflect(Direction::Left).to_vec(),
            vec![Direction::Left]
        );
        assert_eq!(Tile::Empty.deflect(Direction::Down).to_vec(), vec![Direction::Down]);
    }

    #[test]
    fn edge_entries_cover_the_border() {
        let grid = contraption();
        let entries = edge_entries(&grid);
        assert_eq!(entries.len(), 40);
        assert!(entries.iter().all(|r| !grid.is_valid_position(r.position)));
        assert!(entries.iter().all(|r| grid.is_valid_position(r.advance().position)));
    }

    #[test]
    fn best_entry_is_from_the_top() {
        let grid = contraption();
        assert_eq!(energized(&grid, Ray::new(Position::new(3, -1), Direction::Down)), 51);
    }

    #[test]
    fn example_answers() {
        let params = PuzzleParams::default();
        assert_eq!(FloorLava.part1(FLOOR_LAVA, &params).unwrap(), 46);
        assert_eq!(FloorLava.part2(FLOOR_LAVA, &params).unwrap(), 51);
    }
}
