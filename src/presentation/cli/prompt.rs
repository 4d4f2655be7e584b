use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::common::error::BatchCloneError;
use crate::common::result::BatchCloneResult;

const PROMPT: &str = "Enter the path to the JSON configuration file:";

/// Ask the operator for the configuration file path on stdin
pub fn prompt_config_path() -> BatchCloneResult<PathBuf> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    read_config_path(&mut stdin.lock(), &mut stdout.lock())
}

/// Write the prompt to `output` and read one trimmed line from `input`
pub fn read_config_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> BatchCloneResult<PathBuf> {
    write!(output, "{} {} ", "?".yellow().bold(), PROMPT)
        .and_then(|_| output.flush())
        .map_err(|e| BatchCloneError::input_error_with_source("cannot write prompt", e))?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| BatchCloneError::input_error_with_source("cannot read from stdin", e))?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(BatchCloneError::input_error(
            "no configuration file path was given",
        ));
    }

    Ok(PathBuf::from(trimmed))
}
