//! CLI argument definitions for scorekeep.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scorekeep")]
#[command(about = "Player score registry demo", version)]
pub struct Args {
    /// Player scores as ID=SCORE[,ID=SCORE...] (repeatable; repeated ids accumulate)
    #[arg(
        long = "player",
        value_name = "ID=SCORE",
        env = "SCOREKEEP_PLAYERS",
        global = true
    )]
    pub players: Vec<PlayerList>,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// All supplied player scores in command-line order.
    ///
    /// Empty when no flag was given or every value was blank.
    pub fn roster(&self) -> Vec<PlayerScore> {
        self.players
            .iter()
            .flat_map(|list| list.0.iter().cloned())
            .collect()
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the player holding the highest score
    TopPlayer,
    /// Seed a registry and print its contents
    Simulate {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print all players ranked by score
    Rankings {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// A `ID=SCORE` pair supplied on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    pub player_id: String,
    pub score: i64,
}

impl FromStr for PlayerScore {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (player_id, score) = s
            .split_once('=')
            .ok_or_else(|| format!("expected ID=SCORE, got '{}'", s))?;
        let score = score
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("invalid score '{}': {}", score, e))?;
        Ok(Self {
            player_id: player_id.trim().to_string(),
            score,
        })
    }
}

/// One `--player` value: comma separated `ID=SCORE` pairs, blank items skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerList(pub Vec<PlayerScore>);

impl FromStr for PlayerList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::parse::<PlayerScore>)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
