//! Errors that end a run.

use crate::config::ConfigError;
use gridwork_puzzles::{Part, PuzzleError};
use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// A failure that stops [`run`](crate::run).
#[derive(Debug)]
pub enum SolveError {
    /// The configuration is invalid.
    Config(ConfigError),
    /// An input file could not be read.
    Input {
        /// The file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// A solver failed.
    Puzzle {
        /// Puzzle name.
        name: &'static str,
        /// Which part.
        part: Part,
        /// The solver's error.
        source: PuzzleError,
    },
    /// Writing results failed.
    Output(io::Error),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Input { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Self::Puzzle { name, part, source } => write!(f, "{name} part {part}: {source}"),
            Self::Output(e) => write!(f, "output: {e}"),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Input { source, .. } => Some(source),
            Self::Puzzle { source, .. } => Some(source),
            Self::Output(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SolveError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<io::Error> for SolveError {
    fn from(e: io::Error) -> Self {
        Self::Output(e)
    }
}
