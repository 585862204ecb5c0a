//! Defaults command implementation
//!
//! Writes a parameter file holding every default value.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use bitsfx_spec::SfxrParams;

/// Run the defaults command
///
/// # Arguments
/// * `output` - Output file path (default: stdout)
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(output: Option<&str>) -> Result<ExitCode> {
    let json = SfxrParams::new()
        .to_json()
        .context("Failed to serialize default parameters")?;

    match output {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("Failed to write to: {}", path))?;
            println!("{} Wrote defaults to: {}", "SUCCESS".green().bold(), path);
        }
        None => println!("{}", json),
    }

    Ok(ExitCode::SUCCESS)
}
