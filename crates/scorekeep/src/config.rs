//! Display and demo configuration.
//!
//! - Text layout used by the registry's `Display` output
//! - The default roster seeded by the demo commands

/// Text layout of a registry dump.
pub mod display {
    /// First line of every registry dump.
    pub const HEADER: &str = "ScoreTracker:";

    /// Prefix of each player line, followed by the player id.
    pub const ENTRY_PREFIX: &str = "PlayerID: ";

    /// Separator between the player id and the score.
    pub const SCORE_SEPARATOR: &str = ", Score: ";
}

/// Demo roster configuration.
pub mod demo {
    /// Players seeded when no roster is supplied, in insertion order.
    pub const DEFAULT_PLAYERS: [(&str, i64); 3] =
        [("Player1", 10), ("Player2", 15), ("Player3", 12)];
}
