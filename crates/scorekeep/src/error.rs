use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("Registry is empty")]
    EmptyRegistry,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Player already tracked: {0}")]
    DuplicatePlayer(String),

    #[error("Score overflow for player {player_id}")]
    ScoreOverflow { player_id: String },
}

pub type Result<T> = std::result::Result<T, Error>;
