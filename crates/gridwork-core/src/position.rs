//! The [`Position`] coordinate type.

use crate::direction::Direction;
use std::fmt;

/// An `(x, y)` integer coordinate.
///
/// `x` grows to the right and `y` grows downwards, so `(0, 0)` is the
/// top-left cell of a grid. Positions are plain values: deriving a
/// neighbour always returns a new `Position`.
///
/// Ordering is row-major (`y` first, then `x`), the same order grid scans
/// visit cells in.
///
/// # Examples
///
/// ```
/// use gridwork_core::Position;
///
/// let p = Position::new(1, 1);
/// assert_eq!(p.above(), Position::new(1, 0));
/// assert_eq!(p.right().below(), Position::new(2, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Column index.
    pub x: i64,
    /// Row index.
    pub y: i64,
}

impl Position {
    /// The top-left origin.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    /// Create a position from its coordinates.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The cell one row up.
    #[inline]
    pub const fn above(self) -> Self {
        Self::new(self.x, self.y - 1)
    }

    /// The cell one column to the left.
    #[inline]
    pub const fn left(self) -> Self {
        Self::new(self.x - 1, self.y)
    }

    /// The cell one column to the right.
    #[inline]
    pub const fn right(self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    /// The cell one row down.
    #[inline]
    pub const fn below(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    /// Move one cell in `direction`.
    #[inline]
    pub const fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => self.above(),
            Direction::Left => self.left(),
            Direction::Right => self.right(),
            Direction::Down => self.below(),
        }
    }

    /// The four axis-aligned neighbours in `Up, Left, Right, Down` order.
    #[inline]
    pub const fn neighbours(self) -> [Position; 4] {
        [self.above(), self.left(), self.right(), self.below()]
    }

    /// L1 distance between two positions.
    #[inline]
    pub const fn manhattan_distance(self, other: Position) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Scale both coordinates by `factor`.
    #[inline]
    pub const fn scale(self, factor: i64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn neighbours_are_one_step_away() {
        let p = Position::new(3, 7);
        assert_eq!(p.above(), Position::new(3, 6));
        assert_eq!(p.left(), Position::new(2, 7));
        assert_eq!(p.right(), Position::new(4, 7));
        assert_eq!(p.below(), Position::new(3, 8));
        assert_eq!(
            p.neighbours(),
            [p.above(), p.left(), p.right(), p.below()]
        );
    }

    #[test]
    fn neighbours_may_leave_the_first_quadrant() {
        assert_eq!(Position::ORIGIN.above(), Position::new(0, -1));
        assert_eq!(Position::ORIGIN.left(), Position::new(-1, 0));
    }

    #[test]
    fn step_matches_named_neighbours() {
        let p = Position::new(0, 0);
        assert_eq!(p.step(Direction::Up), p.above());
        assert_eq!(p.step(Direction::Left), p.left());
        assert_eq!(p.step(Direction::Right), p.right());
        assert_eq!(p.step(Direction::Down), p.below());
    }

    #[test]
    fn ordering_is_row_major() {
        let mut ps = vec![
            Position::new(2, 0),
            Position::new(0, 1),
            Position::new(1, 0),
            Position::new(0, 0),
        ];
        ps.sort();
        assert_eq!(
            ps,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(0, 1),
            ]
        );
    }

    #[test]
    fn display_is_comma_separated() {
        assert_eq!(Position::new(-4, 9).to_string(), "-4,9");
    }

    proptest! {
        #[test]
        fn step_then_opposite_returns_home(
            x in -1000i64..1000,
            y in -1000i64..1000,
            d in 0usize..4,
        ) {
            let p = Position::new(x, y);
            let dir = Direction::ALL[d];
            prop_assert_eq!(p.step(dir).step(dir.opposite()), p);
        }

        #[test]
        fn manhattan_is_symmetric(
            ax in -1000i64..1000, ay in -1000i64..1000,
            bx in -1000i64..1000, by in -1000i64..1000,
        ) {
            let a = Position::new(ax, ay);
            let b = Position::new(bx, by);
            prop_assert_eq!(a.manhattan_distance(b), b.manhattan_distance(a));
            prop_assert_eq!(a.manhattan_distance(a), 0);
        }
    }
}
