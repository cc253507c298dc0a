//! Running the selected puzzles and reporting answers.

use crate::config::{Selection, SolveConfig};
use crate::error::SolveError;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use tracing::{info, warn};

/// What a run did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Puzzle parts answered.
    pub solved: usize,
    /// Puzzles skipped for lack of input.
    pub skipped: usize,
}

/// Run every selected puzzle part, writing one line per answer to `out`:
/// `name part N: answer (elapsed)`.
///
/// When running all puzzles a missing input file is logged and skipped;
/// for a single puzzle it is an error, as is any solver failure.
pub fn run(config: &SolveConfig, out: &mut impl Write) -> Result<RunSummary, SolveError> {
    config.validate()?;
    let mut summary = RunSummary::default();

    for puzzle in config.puzzles()? {
        let path = config.input_path(puzzle.as_ref());
        let input = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound && config.selection == Selection::All => {
                warn!(puzzle = puzzle.name(), path = %path.display(), "no input, skipping");
                summary.skipped += 1;
                continue;
            }
            Err(source) => return Err(SolveError::Input { path, source }),
        };

        for part in config.parts() {
            info!(puzzle = puzzle.name(), day = puzzle.day(), %part, "solving");
            let started = Instant::now();
            let answer = puzzle
                .solve(part, &input, &config.params)
                .map_err(|source| SolveError::Puzzle {
                    name: puzzle.name(),
                    part,
                    source,
                })?;
            let elapsed = started.elapsed();
            info!(puzzle = puzzle.name(), %part, answer, ?elapsed, "solved");
            writeln!(out, "{} part {part}: {answer} ({elapsed:.2?})", puzzle.name())?;
            summary.solved += 1;
        }
    }

    Ok(summary)
}
