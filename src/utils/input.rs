//! Interactive line prompts for first-run setup and selection dialogs

use crate::error::CliError;
use std::io::{self, Write};

/// Print a prompt and read one trimmed line from stdin.
pub fn prompt_line(label: &str) -> crate::Result<String> {
    print!("{}: ", label);
    io::stdout()
        .flush()
        .map_err(|e| CliError::Input(format!("Failed to flush stdout: {}", e)))?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|e| CliError::Input(format!("Failed to read input: {}", e)))?;

    Ok(line.trim().to_string())
}

/// Prompt until a non-empty line is entered.
pub fn prompt_required(label: &str) -> crate::Result<String> {
    loop {
        let line = prompt_line(label)?;
        if !line.is_empty() {
            return Ok(line);
        }
        println!("A value is required.");
    }
}

/// Prompt for a numeric id.
pub fn prompt_id(label: &str) -> crate::Result<u64> {
    loop {
        let line = prompt_required(label)?;
        match line.parse::<u64>() {
            Ok(id) => return Ok(id),
            Err(_) => println!("'{}' is not a numeric id.", line),
        }
    }
}
