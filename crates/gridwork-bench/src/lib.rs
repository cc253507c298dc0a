//! Benchmark inputs for the gridwork toolkit.
//!
//! - [`maze`]: a square grid of open cells with a deterministic wall lattice
//! - [`dense_range_map`]: a [`RangeMap`] of many short adjacent pairs
//! - [`key_sweep`]: keys covering the map's domain plus a margin either side

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridwork_core::Position;
use gridwork_grid::Grid;
use gridwork_range::RangeMap;

/// Cell of a benchmark maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Passable.
    Open,
    /// Blocks flood fill.
    Wall,
    /// Written by flood fill.
    Filled,
}

/// A `size` x `size` grid of open cells with walls on a sparse lattice.
///
/// The lattice never closes a region, so a flood fill from the origin
/// reaches every open cell.
pub fn maze(size: usize) -> Grid<Cell> {
    match Grid::from_fn(size, size, |p: Position| {
        if p.x % 4 == 2 && p.y % 4 == 2 {
            Cell::Wall
        } else {
            Cell::Open
        }
    }) {
        Ok(grid) => grid,
        Err(e) => panic!("benchmark maze needs a positive size: {e}"),
    }
}

/// A map of `pairs` adjacent source ranges, each `width` keys long,
/// shifted by a fixed offset.
pub fn dense_range_map(pairs: i64, width: i64) -> RangeMap {
    let triples = (0..pairs).map(|i| (i * width, 1_000_000 + i * width * 3, width));
    match RangeMap::from_triples(triples) {
        Ok(map) => map,
        Err(e) => panic!("benchmark map parameters are invalid: {e}"),
    }
}

/// Every key from `-margin` to the end of `map`'s covered domain plus
/// `margin`.
pub fn key_sweep(map: &RangeMap, margin: i64) -> Vec<i64> {
    let end = map.pairs().iter().map(|(src, _)| src.end()).max().unwrap_or(0);
    (-margin..=end + margin).collect()
}
