//! Grid builders for tests.

use gridwork_grid::Grid;

/// Parse a character grid, panicking on malformed text.
///
/// Leading newlines let callers write the grid on its own lines inside a
/// string literal.
pub fn char_grid(text: &str) -> Grid<char> {
    match Grid::parse(text) {
        Ok(grid) => grid,
        Err(err) => panic!("fixture grid is malformed: {err}"),
    }
}

/// A `width` x `height` grid whose cells hold their row-major index.
///
/// Every cell is distinct, so any misplaced cell after a reshape shows up
/// in an equality check.
pub fn numbered_grid(width: usize, height: usize) -> Grid<usize> {
    match Grid::from_fn(width, height, |p| p.y as usize * width + p.x as usize) {
        Ok(grid) => grid,
        Err(err) => panic!("fixture grid must be non-empty: {err}"),
    }
}
