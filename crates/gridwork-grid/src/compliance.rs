//! Grid contract test helpers.
//!
//! These functions verify that a grid of any shape satisfies the read,
//! write, and reshape laws. Called from the grid, parse, and traversal
//! test modules.

use crate::grid::Grid;
use gridwork_core::{Direction, Position, Rotation};
use indexmap::IndexSet;
use std::fmt::Debug;

/// Assert that every in-bounds position reads back a cell and the ring of
/// positions just outside the grid reads back `None`.
pub fn assert_bounds_exact<T>(grid: &Grid<T>) {
    let w = grid.width() as i64;
    let h = grid.height() as i64;
    for pos in grid.positions() {
        assert!(grid.get(pos).is_some(), "{pos} should be on the grid");
    }
    for x in -1..=w {
        for y in [-1, h] {
            let pos = Position::new(x, y);
            assert!(grid.get(pos).is_none(), "{pos} should be off the grid");
        }
    }
    for y in -1..=h {
        for x in [-1, w] {
            let pos = Position::new(x, y);
            assert!(grid.get(pos).is_none(), "{pos} should be off the grid");
        }
    }
}

/// Assert that `positions()` enumerates exactly `width * height` unique
/// positions in strictly increasing row-major order.
pub fn assert_positions_complete<T>(grid: &Grid<T>) {
    let ordering: Vec<Position> = grid.positions().collect();
    assert_eq!(
        ordering.len(),
        grid.width() * grid.height(),
        "positions() length ({}) != width * height ({})",
        ordering.len(),
        grid.width() * grid.height()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(unique.len(), ordering.len(), "positions() has duplicates");
    assert!(
        ordering.windows(2).all(|w| w[0] < w[1]),
        "positions() is not row-major"
    );
}

/// Assert that writing each cell changes that cell only.
pub fn assert_set_is_local<T: Clone + PartialEq + Debug>(grid: &Grid<T>, value: T) {
    for target in grid.positions() {
        let mut g = grid.clone();
        g.set(target, value.clone())
            .expect("in-bounds set should succeed");
        assert_eq!(g.get(target), Some(&value));
        for (pos, cell) in g.iter() {
            if pos != target {
                assert_eq!(Some(cell), grid.get(pos), "set({target}) changed {pos}");
            }
        }
    }
}

/// Assert that clockwise then counter-clockwise rotation restores the grid.
pub fn assert_rotation_round_trip<T: Clone + PartialEq + Debug>(grid: &Grid<T>) {
    for first in [Rotation::Clockwise, Rotation::CounterClockwise] {
        let mut g = grid.clone();
        g.rotate(first);
        assert_eq!(g.width(), grid.height());
        assert_eq!(g.height(), grid.width());
        g.rotate(first.inverse());
        assert_eq!(&g, grid, "{first:?} round trip changed the grid");
    }
}

/// Assert that expanding in each direction grows exactly one axis and
/// fills only the new cells.
pub fn assert_expand_shapes<T: Clone + PartialEq + Debug>(grid: &Grid<T>, fill: T) {
    for direction in Direction::ALL {
        let mut g = grid.clone();
        g.expand(direction, 2, fill.clone());
        let (w, h) = (grid.width(), grid.height());
        let expected = if direction.is_horizontal() {
            (w + 2, h)
        } else {
            (w, h + 2)
        };
        assert_eq!((g.width(), g.height()), expected, "{direction:?}");
        let offset = match direction {
            Direction::Up => Position::new(0, 2),
            Direction::Left => Position::new(2, 0),
            Direction::Right | Direction::Down => Position::ORIGIN,
        };
        for (pos, cell) in grid.iter() {
            let moved = Position::new(pos.x + offset.x, pos.y + offset.y);
            assert_eq!(g.get(moved), Some(cell), "{direction:?} moved {pos}");
        }
        let added = g.width() * g.height() - w * h;
        let fills = g.iter().filter(|(_, c)| **c == fill).count()
            - grid.iter().filter(|(_, c)| **c == fill).count();
        assert_eq!(fills, added, "{direction:?} fill count");
    }
}

/// Run every compliance check on a `usize` grid.
pub fn run_full_compliance(grid: &Grid<usize>) {
    assert_bounds_exact(grid);
    assert_positions_complete(grid);
    assert_set_is_local(grid, usize::MAX);
    assert_rotation_round_trip(grid);
    assert_expand_shapes(grid, usize::MAX);
}
