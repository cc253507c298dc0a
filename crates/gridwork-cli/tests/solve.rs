//! End-to-end runs against the example inputs in `tests/data`.

use gridwork_cli::{run, ConfigError, RunSummary, Selection, SolveConfig, SolveError};
use gridwork_puzzles::Part;
use std::path::PathBuf;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

fn run_to_string(config: &SolveConfig) -> (Result<RunSummary, SolveError>, String) {
    let mut out = Vec::new();
    let result = run(config, &mut out);
    (result, String::from_utf8(out).unwrap())
}

/// `name part N: answer` without the timing suffix.
fn answers(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|l| l.rsplit_once(" (").map_or(l, |(head, _)| head).to_string())
        .collect()
}

#[test]
fn all_skips_puzzles_without_input() {
    let config = SolveConfig {
        input_dir: data_dir(),
        ..SolveConfig::default()
    };
    let (result, output) = run_to_string(&config);
    assert_eq!(
        result.unwrap(),
        RunSummary {
            solved: 6,
            skipped: 4
        }
    );
    assert_eq!(
        answers(&output),
        vec![
            "seed-almanac part 1: 35",
            "seed-almanac part 2: 46",
            "cosmic-expansion part 1: 374",
            "cosmic-expansion part 2: 82000210",
            "floor-lava part 1: 46",
            "floor-lava part 2: 51",
        ]
    );
}

#[test]
fn single_part_with_parameter() {
    let mut config = SolveConfig {
        selection: Selection::One("day11".to_string()),
        input_dir: data_dir(),
        part: Some(Part::Two),
        ..SolveConfig::default()
    };
    config.params.expansion_factor = 100;
    let (result, output) = run_to_string(&config);
    assert_eq!(result.unwrap().solved, 1);
    assert_eq!(answers(&output), vec!["cosmic-expansion part 2: 8410"]);
}

#[test]
fn missing_input_for_single_puzzle_is_an_error() {
    let config = SolveConfig {
        selection: Selection::One("hot-springs".to_string()),
        input_dir: data_dir(),
        ..SolveConfig::default()
    };
    let (result, output) = run_to_string(&config);
    assert!(matches!(result, Err(SolveError::Input { .. })));
    assert!(output.is_empty());
}

#[test]
fn solver_failure_names_puzzle_and_part() {
    let config = SolveConfig {
        selection: Selection::One("cosmic-expansion".to_string()),
        input: Some(data_dir().join("broken").join("cosmic-expansion.txt")),
        ..SolveConfig::default()
    };
    let (result, _) = run_to_string(&config);
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        SolveError::Puzzle {
            name: "cosmic-expansion",
            part: Part::One,
            ..
        }
    ));
    assert!(err.to_string().starts_with("cosmic-expansion part 1: grid:"));
}

#[test]
fn invalid_config_fails_before_reading() {
    let config = SolveConfig {
        selection: Selection::One("nope".to_string()),
        ..SolveConfig::default()
    };
    let (result, _) = run_to_string(&config);
    assert!(matches!(
        result,
        Err(SolveError::Config(ConfigError::UnknownPuzzle { .. }))
    ));
}
