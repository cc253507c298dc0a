//! Text helpers shared by the solvers.

use crate::error::PuzzleError;

/// Split `input` into blank-line separated sections.
///
/// Line endings may be `\n` or `\r\n`; surrounding blank lines are
/// ignored.
pub(crate) fn sections(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in input.lines().map(|l| l.trim_end_matches('\r')) {
        if line.trim().is_empty() {
            if !current.is_empty() {
                out.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join("\n"));
    }
    out
}

/// Parse whitespace-separated integers.
pub(crate) fn numbers(text: &str, line: usize) -> Result<Vec<i64>, PuzzleError> {
    text.split_whitespace()
        .map(|word| {
            word.parse::<i64>()
                .map_err(|_| PuzzleError::parse(line, format!("`{word}` is not an integer")))
        })
        .collect()
}
