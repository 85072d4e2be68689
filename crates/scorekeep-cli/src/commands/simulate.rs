//! Game simulation command.

use anyhow::Result;
use scorekeep::ScoreRegistry;

use crate::cli::{OutputFormat, PlayerScore};
use crate::cli_utils;

pub fn render(registry: &ScoreRegistry, format: OutputFormat) -> Result<String> {
    let content = match format {
        OutputFormat::Text => format!("Initial Scores:\n{}", registry),
        OutputFormat::Json => serde_json::to_string_pretty(registry)?,
    };
    Ok(content)
}

/// Seed a registry and print its initial scores
pub fn run(players: &[PlayerScore], format: OutputFormat) -> Result<()> {
    let registry = cli_utils::build_registry(players)?;
    println!("{}", render(&registry, format)?.trim_end());
    Ok(())
}
