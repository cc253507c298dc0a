//! Day 10: a closed pipe loop hidden in a field of pipe.
//!
//! Part 1 walks the loop from the start tile with [`bfs`]; the farthest
//! tile is half the loop length away.
//!
//! Part 2 counts tiles enclosed by the loop. Rather than tracking
//! crossings, the loop is redrawn at three times the resolution so the
//! gaps between adjacent pipes become real cells, the zoomed grid is
//! padded by one cell, and [`flood_fill`] floods the outside from the
//! corner. Each enclosed tile leaves a 3x3 block of unflooded open cells.

use crate::error::PuzzleError;
use crate::puzzle::{Puzzle, PuzzleParams};
use gridwork_core::{Direction, Position};
use gridwork_grid::{bfs, flood_fill, Grid};
use indexmap::IndexSet;
use tracing::debug;

const ZOOM: usize = 3;

/// Solver for the pipe maze.
#[derive(Clone, Copy, Debug, Default)]
pub struct PipeMaze;

/// One tile of the maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pipe {
    /// `|`, connects up and down.
    Vertical,
    /// `-`, connects left and right.
    Horizontal,
    /// `L`, connects up and right.
    UpRight,
    /// `J`, connects up and left.
    UpLeft,
    /// `7`, connects left and down.
    DownLeft,
    /// `F`, connects right and down.
    DownRight,
    /// `.`, no pipe.
    Ground,
    /// `S`, the start; its shape is inferred from its neighbours.
    Start,
}

impl Pipe {
    /// The six shapes a real pipe can take.
    pub const SHAPES: [Pipe; 6] = [
        Pipe::Vertical,
        Pipe::Horizontal,
        Pipe::UpRight,
        Pipe::UpLeft,
        Pipe::DownLeft,
        Pipe::DownRight,
    ];

    /// The two directions this pipe opens towards, or `None` for ground
    /// and the unresolved start.
    pub const fn connections(self) -> Option<[Direction; 2]> {
        use Direction::*;
        match self {
            Pipe::Vertical => Some([Up, Down]),
            Pipe::Horizontal => Some([Left, Right]),
            Pipe::UpRight => Some([Up, Right]),
            Pipe::UpLeft => Some([Up, Left]),
            Pipe::DownLeft => Some([Left, Down]),
            Pipe::DownRight => Some([Right, Down]),
            Pipe::Ground | Pipe::Start => None,
        }
    }

    /// `true` when the pipe opens towards `direction`.
    pub fn connects(self, direction: Direction) -> bool {
        self.connections().is_some_and(|c| c.contains(&direction))
    }
}

impl TryFrom<char> for Pipe {
    type Error = char;

    fn try_from(c: char) -> Result<Self, char> {
        Ok(match c {
            '|' => Pipe::Vertical,
            '-' => Pipe::Horizontal,
            'L' => Pipe::UpRight,
            'J' => Pipe::UpLeft,
            '7' => Pipe::DownLeft,
            'F' => Pipe::DownRight,
            '.' => Pipe::Ground,
            'S' => Pipe::Start,
            other => return Err(other),
        })
    }
}

/// Work out which shape the pipe at `position` must have from the
/// neighbours that point back at it.
pub fn infer_start_pipe(grid: &Grid<Pipe>, position: Position) -> Result<Pipe, PuzzleError> {
    let open: Vec<Direction> = Direction::ALL
        .into_iter()
        .filter(|&d| {
            grid.get(position.step(d))
                .is_some_and(|n| n.connects(d.opposite()))
        })
        .collect();
    Pipe::SHAPES
        .into_iter()
        .find(|shape| open.len() == 2 && open.iter().all(|&d| shape.connects(d)))
        .ok_or_else(|| {
            PuzzleError::no_solution(format!(
                "{} neighbours of {position} connect to it, need exactly 2",
                open.len()
            ))
        })
}

/// A maze with the start tile resolved to its real shape.
#[derive(Clone, Debug)]
pub struct Maze {
    /// The tiles, with no [`Pipe::Start`] left.
    pub grid: Grid<Pipe>,
    /// Where the start tile is.
    pub start: Position,
}

impl Maze {
    /// Parse the puzzle text and resolve the start tile.
    pub fn parse(input: &str) -> Result<Self, PuzzleError> {
        let mut grid = Grid::<Pipe>::parse(input)?;
        let start = grid
            .find(|&p| p == Pipe::Start)
            .ok_or_else(|| PuzzleError::no_solution("maze has no start tile"))?;
        let shape = infer_start_pipe(&grid, start)?;
        debug!(%start, ?shape, "start tile resolved");
        grid.set(start, shape)?;
        Ok(Self { grid, start })
    }

    /// Neighbours of `position` joined to it by pipe on both sides.
    fn linked(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        self.grid
            .get(position)
            .and_then(|pipe| pipe.connections())
            .into_iter()
            .flatten()
            .filter(move |&d| {
                self.grid
                    .get(position.step(d))
                    .is_some_and(|n| n.connects(d.opposite()))
            })
            .map(move |d| position.step(d))
    }

    /// Every tile on the loop through the start, in discovery order.
    ///
    /// Fails with `NoSolution` when the pipe from the start does not close
    /// back on itself.
    pub fn main_loop(&self) -> Result<IndexSet<Position>, PuzzleError> {
        let tiles = bfs(self.start, |&position| self.linked(position));
        if let Some(open) = tiles.iter().find(|&&p| self.linked(p).count() != 2) {
            return Err(PuzzleError::no_solution(format!(
                "pipe at {open} does not close the loop"
            )));
        }
        Ok(tiles)
    }

    /// Number of tiles the loop encloses.
    pub fn enclosed_tiles(&self) -> Result<usize, PuzzleError> {
        let main_loop = self.main_loop()?;
        let mut zoomed = Grid::filled(
            self.grid.width() * ZOOM,
            self.grid.height() * ZOOM,
            Zoomed::Open,
        )?;

        for &position in &main_loop {
            let zoom = ZOOM as i64;
            let centre = Position::new(position.x * zoom + 1, position.y * zoom + 1);
            for dy in -1..=1 {
                for dx in -1..=1 {
                    zoomed.set(Position::new(centre.x + dx, centre.y + dy), Zoomed::Padding)?;
                }
            }
            zoomed.set(centre, Zoomed::Wall)?;
            for d in self.grid[position].connections().into_iter().flatten() {
                zoomed.set(centre.step(d), Zoomed::Wall)?;
            }
        }

        for d in Direction::ALL {
            zoomed.expand(d, 1, Zoomed::Open);
        }
        let flooded = flood_fill(
            &mut zoomed,
            Position::ORIGIN,
            |&z| matches!(z, Zoomed::Open | Zoomed::Padding),
            Zoomed::Outside,
        );
        let open = zoomed.filter(|&z| z == Zoomed::Open).len();
        debug!(
            loop_len = main_loop.len(),
            flooded,
            open,
            "zoomed maze flooded"
        );
        Ok(open / (ZOOM * ZOOM))
    }
}

/// Cells of the zoomed maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Zoomed {
    /// Part of a tile off the loop.
    Open,
    /// Part of a loop tile that is not pipe.
    Padding,
    /// Pipe.
    Wall,
    /// Reached from outside the loop.
    Outside,
}

impl Puzzle for PipeMaze {
    fn name(&self) -> &'static str {
        "pipe-maze"
    }

    fn day(&self) -> u8 {
        10
    }

    fn part1(&self, input: &str, _params: &PuzzleParams) -> Result<i64, PuzzleError> {
        let maze = Maze::parse(input)?;
        Ok((maze.main_loop()?.len() / 2) as i64)
    }

    fn part2(&self, input: &str, _params: &PuzzleParams) -> Result<i64, PuzzleError> {
        Ok(Maze::parse(input)?.enclosed_tiles()? as i64)
    }
}
