//! Command-line surface of `solve`.

use crate::config::{Selection, SolveConfig};
use clap::Parser;
use gridwork_puzzles::{Part, PuzzleParams};
use std::path::PathBuf;

/// Solve grid and range puzzles from their input files.
#[derive(Parser, Debug)]
#[command(name = "solve", version)]
pub struct Args {
    /// Puzzle name, `dayN` alias, or `all`.
    #[arg(default_value = "all")]
    pub puzzle: String,

    /// Read this file instead of `<input-dir>/<name>.txt`. Single puzzle only.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory holding one `<name>.txt` input per puzzle.
    #[arg(long, value_name = "DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Run only this part (1 or 2). Both run when omitted.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Size of one empty galaxy row or column in cosmic-expansion part 2.
    #[arg(long, default_value_t = PuzzleParams::default().expansion_factor)]
    pub expansion_factor: i64,

    /// Spin cycles for parabolic-dish part 2.
    #[arg(long, default_value_t = PuzzleParams::default().spin_cycles)]
    pub spin_cycles: u64,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    pub verbose: bool,

    /// List the available puzzles and exit.
    #[arg(long)]
    pub list: bool,
}

impl Args {
    /// Build the run configuration. Validation is left to the caller.
    pub fn to_config(&self) -> SolveConfig {
        SolveConfig {
            selection: Selection::parse(&self.puzzle),
            input: self.input.clone(),
            input_dir: self.input_dir.clone(),
            part: self.part.map(|p| if p == 1 { Part::One } else { Part::Two }),
            params: PuzzleParams {
                expansion_factor: self.expansion_factor,
                spin_cycles: self.spin_cycles,
            },
        }
    }
}
