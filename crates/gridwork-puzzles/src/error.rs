//! Error type shared by every solver.

use gridwork_grid::GridError;
use gridwork_range::RangeError;
use std::error::Error;
use std::fmt;

/// Errors returned by [`Puzzle`](crate::Puzzle) implementations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PuzzleError {
    /// The input grid failed to parse or a grid operation was refused.
    Grid(GridError),
    /// A range or range map could not be built.
    Range(RangeError),
    /// A line of input is malformed.
    Parse {
        /// 1-based line number within the section being parsed.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
    /// The input parsed but has no answer.
    NoSolution {
        /// Why no answer exists.
        reason: String,
    },
}

impl PuzzleError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn no_solution(reason: impl Into<String>) -> Self {
        Self::NoSolution {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Range(e) => write!(f, "range: {e}"),
            Self::Parse { line, reason } => write!(f, "line {line}: {reason}"),
            Self::NoSolution { reason } => write!(f, "no solution: {reason}"),
        }
    }
}

impl Error for PuzzleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Range(e) => Some(e),
            Self::Parse { .. } | Self::NoSolution { .. } => None,
        }
    }
}

impl From<GridError> for PuzzleError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<RangeError> for PuzzleError {
    fn from(e: RangeError) -> Self {
        Self::Range(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_lower_layer_errors_with_source() {
        let err = PuzzleError::from(GridError::Empty);
        assert_eq!(err.to_string(), format!("grid: {}", GridError::Empty));
        assert!(err.source().is_some());

        let err = PuzzleError::from(RangeError::NonPositiveLength { length: 0 });
        assert!(err.to_string().starts_with("range: "));
        assert!(err.source().is_some());
    }

    #[test]
    fn own_variants_have_no_source() {
        let err = PuzzleError::parse(3, "expected a number");
        assert_eq!(err.to_string(), "line 3: expected a number");
        assert!(err.source().is_none());
        assert_eq!(
            PuzzleError::no_solution("no seeds").to_string(),
            "no solution: no seeds"
        );
    }
}
