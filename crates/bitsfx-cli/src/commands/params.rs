//! Params command implementation
//!
//! Lists the parameter catalog with bounds and defaults.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use bitsfx_spec::CATALOG;

use super::json_output::ParamEntry;

/// Collects the catalog in display order.
pub fn catalog_entries() -> Vec<ParamEntry> {
    CATALOG.iter().map(ParamEntry::from).collect()
}

/// Run the params command
///
/// # Arguments
/// * `json` - Print the catalog as JSON instead of a table
///
/// # Returns
/// Exit code: 0 success
pub fn run(json: bool) -> Result<ExitCode> {
    let entries = catalog_entries();

    if json {
        let out = serde_json::to_string_pretty(&entries).context("Failed to serialize catalog")?;
        println!("{}", out);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Parameters:".cyan().bold());
    let mut group = None;
    for entry in &entries {
        if group != Some(entry.group) {
            group = Some(entry.group);
            println!();
        }
        let uid = match (entry.square_only, entry.hidden) {
            (true, _) => format!("{} (square)", entry.uid),
            (false, true) => format!("{} (hidden)", entry.uid),
            (false, false) => entry.uid.clone(),
        };
        println!(
            "  {:<28} {:<20} default {:>6.3}  [{:>6.3}, {:>6.3}]",
            uid.bold(),
            entry.name,
            entry.default,
            entry.min,
            entry.max
        );
    }

    Ok(ExitCode::SUCCESS)
}
