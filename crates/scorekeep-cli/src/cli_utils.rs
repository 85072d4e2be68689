//! Common CLI utility functions shared across commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use scorekeep::config::demo;
use scorekeep::{ScoreRegistry, ScoreStore};
use tracing::{debug, info};

use crate::cli::PlayerScore;

/// Build a registry from the supplied players, or the demo roster if none.
pub fn build_registry(players: &[PlayerScore]) -> Result<ScoreRegistry> {
    let registry = if players.is_empty() {
        debug!("No players supplied, seeding demo roster");
        ScoreRegistry::from_scores(demo::DEFAULT_PLAYERS)?
    } else {
        ScoreRegistry::from_scores(players.iter().map(|p| (p.player_id.as_str(), p.score)))?
    };
    info!("Registry seeded with {} players", registry.len());
    Ok(registry)
}

/// Write `content` to `output`, or print it to stdout.
///
/// Both destinations end with a single trailing newline.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", content))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Exported to: {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
