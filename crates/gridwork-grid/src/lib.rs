//! Rectangular typed grids for gridwork.
//!
//! This crate defines [`Grid`], a row-major field of typed cells addressed
//! by [`Position`], together with text parsing into typed grids and the
//! worklist traversals built on top of it.
//!
//! # Reads and writes
//!
//! Reads never fail: [`Grid::get`] returns `None` off the grid, so a
//! traversal can treat "left the grid" as an ordinary branch. Writes and
//! structural changes that would break rectangularity return
//! [`GridError`] instead.
//!
//! # Traversals
//!
//! - [`flood_fill`]: mark every cell reachable from a seed
//! - [`bfs`]: breadth-first discovery over any hashable state
//! - [`cast_rays`]: propagate rays that may turn or split at cells

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod parse;
pub mod traverse;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::{Axis, GridError};
pub use grid::Grid;
pub use gridwork_core::{Direction, Position, Ray, Rotation};
pub use traverse::{bfs, cast_rays, flood_fill};
