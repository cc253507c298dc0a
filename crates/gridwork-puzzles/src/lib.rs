//! Puzzle solvers for the gridwork toolkit.
//!
//! Each solver is a stateless unit struct implementing [`Puzzle`]. The
//! [`registry`] lists them in calendar order, and [`find`] looks one up by
//! name or by `dayN` alias.
//!
//! | Puzzle | Day | Builds on |
//! |---|---|---|
//! | [`SeedAlmanac`] | 5 | [`RangeMap`](gridwork_range::RangeMap) chains |
//! | [`PipeMaze`] | 10 | [`bfs`](gridwork_grid::bfs), zoom + [`flood_fill`](gridwork_grid::flood_fill) |
//! | [`CosmicExpansion`] | 11 | row/column insertion, Manhattan distance |
//! | [`HotSprings`] | 12 | [`MemoCache`] |
//! | [`PointOfIncidence`] | 13 | rows and columns as sequences |
//! | [`ParabolicDish`] | 14 | rotation, cycle detection |
//! | [`FloorLava`] | 16 | [`cast_rays`](gridwork_grid::cast_rays) |
//!
//! # Examples
//!
//! ```
//! use gridwork_puzzles::{find, Part, PuzzleParams};
//!
//! let puzzle = find("cosmic-expansion").unwrap();
//! let input = "#..\n...\n..#\n";
//! let answer = puzzle.solve(Part::One, input, &PuzzleParams::default()).unwrap();
//! assert_eq!(answer, 6);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod cosmic_expansion;
pub mod error;
pub mod floor_lava;
pub mod hot_springs;
mod input;
pub mod memo;
pub mod parabolic_dish;
pub mod pipe_maze;
pub mod point_of_incidence;
pub mod puzzle;
pub mod seed_almanac;

pub use cosmic_expansion::CosmicExpansion;
pub use error::PuzzleError;
pub use floor_lava::FloorLava;
pub use hot_springs::HotSprings;
pub use memo::{CacheStats, MemoCache};
pub use parabolic_dish::ParabolicDish;
pub use pipe_maze::PipeMaze;
pub use point_of_incidence::PointOfIncidence;
pub use puzzle::{Part, Puzzle, PuzzleParams};
pub use seed_almanac::SeedAlmanac;

/// Every solver, ordered by day.
pub fn registry() -> Vec<Box<dyn Puzzle>> {
    vec![
        Box::new(SeedAlmanac),
        Box::new(PipeMaze),
        Box::new(CosmicExpansion),
        Box::new(HotSprings),
        Box::new(PointOfIncidence),
        Box::new(ParabolicDish),
        Box::new(FloorLava),
    ]
}

/// Look up a solver by name (`"pipe-maze"`) or day alias (`"day10"`).
///
/// Matching ignores ASCII case.
pub fn find(name: &str) -> Option<Box<dyn Puzzle>> {
    let wanted = name.trim().to_ascii_lowercase();
    registry()
        .into_iter()
        .find(|p| p.name() == wanted || format!("day{}", p.day()) == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_is_ordered_by_day_with_unique_names() {
        let puzzles = registry();
        let days: Vec<u8> = puzzles.iter().map(|p| p.day()).collect();
        assert_eq!(days, vec![5, 10, 11, 12, 13, 14, 16]);
        let names: HashSet<&str> = puzzles.iter().map(|p| p.name()).collect();
        assert_eq!(names.len(), puzzles.len());
    }

    #[test]
    fn find_by_name_or_alias() {
        assert_eq!(find("floor-lava").map(|p| p.day()), Some(16));
        assert_eq!(find("DAY12").map(|p| p.name()), Some("hot-springs"));
        assert_eq!(find(" seed-almanac ").map(|p| p.day()), Some(5));
        assert!(find("day1").is_none());
        assert!(find("").is_none());
    }
}
