//! Run configuration, validation, and error types.

use gridwork_puzzles::{find, registry, Part, Puzzle, PuzzleParams};
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

/// Which puzzles to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Every registered puzzle, in registry order.
    All,
    /// One puzzle, by name or `dayN` alias.
    One(String),
}

impl Selection {
    /// `"all"` (any case) selects everything; anything else names one
    /// puzzle.
    pub fn parse(text: &str) -> Self {
        if text.trim().eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::One(text.trim().to_string())
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`SolveConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// No registered puzzle has this name or alias.
    UnknownPuzzle {
        /// The name as given.
        name: String,
    },
    /// An explicit input file was given while running every puzzle.
    InputNeedsSinglePuzzle,
    /// `expansion_factor` is below 1.
    InvalidExpansionFactor {
        /// The invalid value.
        value: i64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPuzzle { name } => {
                write!(f, "unknown puzzle `{name}` (try --list)")
            }
            Self::InputNeedsSinglePuzzle => {
                write!(f, "--input can only be used with a single puzzle")
            }
            Self::InvalidExpansionFactor { value } => {
                write!(f, "expansion factor must be at least 1, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── SolveConfig ────────────────────────────────────────────────────

/// Everything a run needs.
#[derive(Clone, Debug)]
pub struct SolveConfig {
    /// Puzzles to run. Default: all.
    pub selection: Selection,
    /// Explicit input file; only valid with a single puzzle.
    pub input: Option<PathBuf>,
    /// Directory holding `<name>.txt` inputs. Default: `inputs`.
    pub input_dir: PathBuf,
    /// Part to run; `None` runs both.
    pub part: Option<Part>,
    /// Parameters forwarded to every solver.
    pub params: PuzzleParams,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            selection: Selection::All,
            input: None,
            input_dir: PathBuf::from("inputs"),
            part: None,
            params: PuzzleParams::default(),
        }
    }
}

impl SolveConfig {
    /// Check the configuration before any input is read.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Selection::One(name) = &self.selection {
            if find(name).is_none() {
                return Err(ConfigError::UnknownPuzzle { name: name.clone() });
            }
        }
        if self.input.is_some() && self.selection == Selection::All {
            return Err(ConfigError::InputNeedsSinglePuzzle);
        }
        if self.params.expansion_factor < 1 {
            return Err(ConfigError::InvalidExpansionFactor {
                value: self.params.expansion_factor,
            });
        }
        Ok(())
    }

    /// The selected solvers.
    pub fn puzzles(&self) -> Result<Vec<Box<dyn Puzzle>>, ConfigError> {
        match &self.selection {
            Selection::All => Ok(registry()),
            Selection::One(name) => find(name)
                .map(|p| vec![p])
                .ok_or_else(|| ConfigError::UnknownPuzzle { name: name.clone() }),
        }
    }

    /// The parts to run, in order.
    pub fn parts(&self) -> Vec<Part> {
        match self.part {
            Some(part) => vec![part],
            None => Part::BOTH.to_vec(),
        }
    }

    /// Where the input for `puzzle` is read from.
    pub fn input_path(&self, puzzle: &dyn Puzzle) -> PathBuf {
        match &self.input {
            Some(path) => path.clone(),
            None => input_file(&self.input_dir, puzzle.name()),
        }
    }
}

fn input_file(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SolveConfig::default();
        config.validate().unwrap();
        assert_eq!(config.puzzles().unwrap().len(), registry().len());
        assert_eq!(config.parts(), vec![Part::One, Part::Two]);
    }

    #[test]
    fn selection_parsing() {
        assert_eq!(Selection::parse("ALL"), Selection::All);
        assert_eq!(
            Selection::parse(" day10 "),
            Selection::One("day10".to_string())
        );
    }

    #[test]
    fn unknown_puzzle_rejected() {
        let config = SolveConfig {
            selection: Selection::One("day99".to_string()),
            ..SolveConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownPuzzle {
                name: "day99".to_string()
            })
        );
        assert!(config.puzzles().is_err());
    }

    #[test]
    fn explicit_input_needs_single_puzzle() {
        let mut config = SolveConfig {
            input: Some(PathBuf::from("x.txt")),
            ..SolveConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InputNeedsSinglePuzzle));

        config.selection = Selection::One("floor-lava".to_string());
        config.validate().unwrap();
        let puzzles = config.puzzles().unwrap();
        assert_eq!(config.input_path(puzzles[0].as_ref()), PathBuf::from("x.txt"));
    }

    #[test]
    fn expansion_factor_must_be_positive() {
        let mut config = SolveConfig::default();
        config.params.expansion_factor = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidExpansionFactor { value: 0 })
        );
    }

    #[test]
    fn input_path_defaults_to_named_file() {
        let config = SolveConfig {
            selection: Selection::One("day11".to_string()),
            input_dir: PathBuf::from("data"),
            part: Some(Part::Two),
            ..SolveConfig::default()
        };
        let puzzles = config.puzzles().unwrap();
        assert_eq!(
            config.input_path(puzzles[0].as_ref()),
            PathBuf::from("data").join("cosmic-expansion.txt")
        );
        assert_eq!(config.parts(), vec![Part::Two]);
    }
}
