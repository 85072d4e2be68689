use serde::Serialize;

/// A player and its score as produced by a ranking query
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RankedEntry {
    pub player_id: String,
    pub score: i64,
}

impl RankedEntry {
    pub fn new(player_id: impl Into<String>, score: i64) -> Self {
        Self {
            player_id: player_id.into(),
            score,
        }
    }
}

impl std::fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.player_id, self.score)
    }
}
