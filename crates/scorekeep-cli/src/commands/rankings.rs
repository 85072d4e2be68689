//! Rankings command.

use std::path::Path;

use anyhow::Result;
use scorekeep::{ScoreRegistry, ScoreStore};

use crate::cli::{OutputFormat, PlayerScore};
use crate::{cli_utils, output};

pub fn render(registry: &ScoreRegistry, format: OutputFormat, colored: bool) -> Result<String> {
    let rankings = registry.rankings();
    let content = match format {
        OutputFormat::Text => output::format_rankings(&rankings, colored),
        OutputFormat::Json => serde_json::to_string_pretty(&rankings)?,
    };
    Ok(content)
}

/// Print or export the players ranked by score
pub fn run(players: &[PlayerScore], format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let registry = cli_utils::build_registry(players)?;
    let content = render(&registry, format, output.is_none())?;
    cli_utils::write_output(&content, output)
}
