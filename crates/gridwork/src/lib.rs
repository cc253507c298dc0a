//! Gridwork: typed 2D grids, worklist traversals, and piecewise range maps.
//!
//! This is the facade crate that re-exports the public API of the gridwork
//! sub-crates. For most users, adding `gridwork` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridwork::prelude::*;
//!
//! let mut grid = Grid::<char>::parse("
//! 123
//! 456
//! 789").unwrap();
//!
//! assert_eq!(grid.get(Position::new(1, 1)), Some(&'5'));
//! assert_eq!(grid.column(2), Some(vec!['3', '6', '9']));
//!
//! grid.rotate(Rotation::Clockwise);
//! assert_eq!(grid.row(0), Some(&['7', '4', '1'][..]));
//!
//! let soil = RangeMap::from_triples([(98, 50, 2), (50, 52, 48)]).unwrap();
//! assert_eq!(soil.get(79), 81);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridwork-core` | `Position`, `Direction`, `Rotation`, `Ray` |
//! | [`grid`] | `gridwork-grid` | `Grid<T>`, parsing, flood fill, BFS, ray casting |
//! | [`range`] | `gridwork-range` | `Range`, `RangeMap`, `FastRangeMap` |
//! | [`puzzles`] | `gridwork-puzzles` | Puzzle solvers and their registry |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinate and heading value types (`gridwork-core`).
pub use gridwork_core as types;

/// Rectangular grids and traversals (`gridwork-grid`).
///
/// [`grid::Grid`] is the container; [`grid::flood_fill`], [`grid::bfs`] and
/// [`grid::cast_rays`] are the worklist walks built on it.
pub use gridwork_grid as grid;

/// Integer ranges and piecewise shift maps (`gridwork-range`).
pub use gridwork_range as range;

/// Puzzle solvers (`gridwork-puzzles`).
///
/// [`puzzles::registry`] lists every [`puzzles::Puzzle`].
pub use gridwork_puzzles as puzzles;

/// Common imports for typical gridwork usage.
///
/// ```rust
/// use gridwork::prelude::*;
/// ```
pub mod prelude {
    // Value types
    pub use gridwork_core::{Direction, Position, Ray, Rotation};

    // Grid
    pub use gridwork_grid::{bfs, cast_rays, flood_fill, Grid, GridError};

    // Ranges
    pub use gridwork_range::{FastRangeMap, Range, RangeError, RangeMap};

    // Puzzles
    pub use gridwork_puzzles::{Part, Puzzle, PuzzleError, PuzzleParams};
}
