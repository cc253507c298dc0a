//! Error types for grid construction and mutation.

use gridwork_core::Position;
use std::fmt;

/// Which structural axis an index or length refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// A row, indexed by `y`.
    Row,
    /// A column, indexed by `x`.
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
        }
    }
}

/// Errors arising from grid construction or mutation.
///
/// Out-of-bounds *reads* are not errors; see [`Grid::get`](crate::Grid::get).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A write targeted a position outside the grid.
    PositionOutOfBounds {
        /// The offending position.
        position: Position,
        /// Grid width at the time of the write.
        width: usize,
        /// Grid height at the time of the write.
        height: usize,
    },
    /// A row or column insertion index is outside the permitted range.
    IndexOutOfBounds {
        /// Which axis the index addresses.
        axis: Axis,
        /// The offending index.
        index: usize,
        /// Largest permitted index (inclusive).
        max: usize,
    },
    /// An inserted row or column has the wrong number of cells.
    LengthMismatch {
        /// Whether a row or a column was inserted.
        axis: Axis,
        /// Cells required to keep the grid rectangular.
        expected: usize,
        /// Cells supplied.
        actual: usize,
    },
    /// Attempted to build a grid with no rows or no columns.
    Empty,
    /// Construction rows differ in length.
    Ragged {
        /// Index of the first row whose length differs from row 0.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
    /// A character in grid text does not name any cell variant.
    InvalidCell {
        /// The rejected character.
        ch: char,
        /// Where it appeared.
        position: Position,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionOutOfBounds {
                position,
                width,
                height,
            } => {
                write!(
                    f,
                    "position ({position}) out of bounds: [0, {width}) x [0, {height})"
                )
            }
            Self::IndexOutOfBounds { axis, index, max } => {
                write!(f, "{axis} index {index} out of bounds: must be <= {max}")
            }
            Self::LengthMismatch {
                axis,
                expected,
                actual,
            } => {
                write!(f, "{axis} has {actual} cells, expected {expected}")
            }
            Self::Empty => write!(f, "grid must have at least one row and one column"),
            Self::Ragged {
                row,
                expected,
                actual,
            } => {
                write!(f, "row {row} has {actual} cells, expected {expected}")
            }
            Self::InvalidCell { ch, position } => {
                write!(f, "invalid cell {ch:?} at ({position})")
            }
        }
    }
}

impl std::error::Error for GridError {}
