#![forbid(unsafe_code)]

use clap::Parser;
use gridwork_cli::{run, Args};
use gridwork_puzzles::registry;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "info" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.list {
        for puzzle in registry() {
            println!("day{:<3} {}", puzzle.day(), puzzle.name());
        }
        return ExitCode::SUCCESS;
    }

    let config = args.to_config();
    let stdout = io::stdout();
    match run(&config, &mut stdout.lock()) {
        Ok(summary) => {
            tracing::debug!(solved = summary.solved, skipped = summary.skipped, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
