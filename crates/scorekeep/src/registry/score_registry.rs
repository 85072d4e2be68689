use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use super::ScoreStore;
use crate::config::display;
use crate::error::{Error, Result};

/// In-memory registry of player scores.
///
/// Players iterate in insertion order. Removing a player keeps the order of
/// the others; a removed player that is added again goes to the end.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ScoreRegistry {
    entries: IndexMap<String, i64>,
}

impl ScoreRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry by adding each `(player id, score)` pair in order.
    ///
    /// Repeated ids accumulate, exactly like successive `add_score` calls.
    pub fn from_scores<I, S>(scores: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        for (player_id, score) in scores {
            registry.add_score(player_id.as_ref(), score)?;
        }
        Ok(registry)
    }

    fn slot_mut(&mut self, player_id: &str) -> Result<&mut i64> {
        self.entries
            .get_mut(player_id)
            .ok_or_else(|| Error::UnknownPlayer(player_id.to_string()))
    }
}

fn validate_player_id(player_id: &str) -> Result<()> {
    if player_id.is_empty() {
        return Err(Error::InvalidArgument(
            "player id must not be empty".to_string(),
        ));
    }
    Ok(())
}

impl ScoreStore for ScoreRegistry {
    fn add_score(&mut self, player_id: &str, delta: i64) -> Result<()> {
        validate_player_id(player_id)?;
        if delta < 0 {
            return Err(Error::InvalidArgument(format!(
                "negative score {} for player {}",
                delta, player_id
            )));
        }

        match self.entries.get_mut(player_id) {
            Some(score) => {
                *score = score.checked_add(delta).ok_or_else(|| Error::ScoreOverflow {
                    player_id: player_id.to_string(),
                })?;
                debug!(player_id, delta, score = *score, "Accumulated score");
            }
            None => {
                self.entries.insert(player_id.to_string(), delta);
                debug!(player_id, score = delta, "Added player");
            }
        }
        Ok(())
    }

    fn update_score(&mut self, player_id: &str, new_score: i64) -> Result<()> {
        validate_player_id(player_id)?;
        let slot = self.slot_mut(player_id)?;
        let previous = std::mem::replace(slot, new_score);
        debug!(player_id, previous, score = new_score, "Updated score");
        Ok(())
    }

    fn score(&self, player_id: &str) -> Result<i64> {
        validate_player_id(player_id)?;
        self.entries
            .get(player_id)
            .copied()
            .ok_or_else(|| Error::UnknownPlayer(player_id.to_string()))
    }

    fn is_player(&self, player_id: &str) -> bool {
        self.entries.contains_key(player_id)
    }

    fn remove_player(&mut self, player_id: &str) -> Result<i64> {
        validate_player_id(player_id)?;
        let score = self
            .entries
            .shift_remove(player_id)
            .ok_or_else(|| Error::UnknownPlayer(player_id.to_string()))?;
        debug!(player_id, score, "Removed player");
        Ok(score)
    }

    fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        debug!(removed, "Cleared registry");
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn entries(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries
            .iter()
            .map(|(player_id, score)| (player_id.as_str(), *score))
    }
}

impl PartialEq for ScoreRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.same_entries(other)
    }
}

impl Eq for ScoreRegistry {}

impl fmt::Display for ScoreRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", display::HEADER)?;
        for (player_id, score) in &self.entries {
            writeln!(
                f,
                "{}{}{}{}",
                display::ENTRY_PREFIX,
                player_id,
                display::SCORE_SEPARATOR,
                score
            )?;
        }
        Ok(())
    }
}
