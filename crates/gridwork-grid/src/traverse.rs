//! Worklist traversals over grids.
//!
//! All three walks share one shape: a FIFO queue of value-type states, a
//! visited set keyed by the state itself, and [`Grid::get`] returning `None`
//! as the only edge-of-grid check.

use crate::grid::Grid;
use gridwork_core::{Direction, Position, Ray};
use indexmap::IndexSet;
use smallvec::SmallVec;
use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// Outgoing headings produced when a ray enters a cell.
///
/// Two inline slots cover pass-through, reflection, and a two-way split.
pub type Headings = SmallVec<[Direction; 2]>;

/// Flood-fill from `seed` across four-neighbour cells satisfying `passable`.
///
/// Every reached cell is overwritten with `mark` in place. Returns the
/// number of cells filled; `0` when `seed` is off the grid or not passable.
///
/// # Examples
///
/// ```
/// use gridwork_grid::{flood_fill, Grid, Position};
///
/// let mut grid = Grid::<char>::parse("...\n.#.\n...").unwrap();
/// let filled = flood_fill(&mut grid, Position::new(0, 0), |&c| c == '.', 'o');
/// assert_eq!(filled, 8);
/// assert_eq!(grid.get(Position::new(1, 1)), Some(&'#'));
/// ```
pub fn flood_fill<T: Clone>(
    grid: &mut Grid<T>,
    seed: Position,
    mut passable: impl FnMut(&T) -> bool,
    mark: T,
) -> usize {
    let width = grid.width();
    let mut visited = vec![false; width * grid.height()];
    let idx = |p: Position| (p.y as usize) * width + (p.x as usize);

    let mut queue = VecDeque::new();
    queue.push_back(seed);
    let mut filled = 0;

    while let Some(position) = queue.pop_front() {
        let Some(cell) = grid.get_mut(position) else {
            continue;
        };
        let i = idx(position);
        if visited[i] || !passable(&*cell) {
            continue;
        }
        visited[i] = true;
        *cell = mark.clone();
        filled += 1;
        queue.extend(position.neighbours());
    }

    filled
}

/// Breadth-first discovery from `start`.
///
/// `successors` yields the states reachable in one step; states already
/// discovered are skipped. Returns every discovered state, `start` first,
/// in discovery order.
pub fn bfs<S, I>(start: S, mut successors: impl FnMut(&S) -> I) -> IndexSet<S>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = S>,
{
    let mut visited = IndexSet::new();
    let mut queue = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back(start);

    while let Some(state) = queue.pop_front() {
        for next in successors(&state) {
            if visited.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }

    visited
}

/// Propagate rays through `grid` starting from `entry`.
///
/// `entry` usually sits just off the grid, pointing in. Each step moves a
/// ray one cell along its heading; if that cell exists, it is energised
/// and `propagate(cell, heading)` decides the outgoing headings. Rays that
/// step off the grid stop. A `(position, heading)` state is expanded at
/// most once, so loops terminate.
///
/// Returns the energised positions in the order first reached.
pub fn cast_rays<T>(
    grid: &Grid<T>,
    entry: Ray,
    mut propagate: impl FnMut(&T, Direction) -> Headings,
) -> IndexSet<Position> {
    let mut energised = IndexSet::new();
    let mut seen: HashSet<Ray> = HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(entry);

    while let Some(ray) = queue.pop_front() {
        if !seen.insert(ray) {
            continue;
        }
        let next = ray.advance();
        let Some(cell) = grid.get(next.position) else {
            continue;
        };
        energised.insert(next.position);
        queue.extend(
            propagate(cell, ray.direction)
                .into_iter()
                .map(|heading| next.redirect(heading)),
        );
    }

    energised
}
