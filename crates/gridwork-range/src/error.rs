//! Error types for range and range-map construction.

use std::fmt;

/// Errors arising from building a [`Range`](crate::Range) or a map over
/// ranges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RangeError {
    /// A range must cover at least one integer.
    NonPositiveLength {
        /// The rejected length.
        length: i64,
    },
    /// The last covered integer does not fit in `i64`.
    Overflow {
        /// Requested start.
        start: i64,
        /// Requested length.
        length: i64,
    },
    /// A source range and its destination differ in length.
    LengthMismatch {
        /// Position of the offending pair in declaration order.
        pair: usize,
        /// Source range length.
        source: i64,
        /// Destination range length.
        destination: i64,
    },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveLength { length } => {
                write!(f, "range length must be positive, got {length}")
            }
            Self::Overflow { start, length } => {
                write!(f, "range starting at {start} with length {length} overflows i64")
            }
            Self::LengthMismatch {
                pair,
                source,
                destination,
            } => {
                write!(
                    f,
                    "pair {pair}: source length {source} != destination length {destination}"
                )
            }
        }
    }
}

impl std::error::Error for RangeError {}
