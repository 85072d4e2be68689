//! Top player command.

use anyhow::Result;
use scorekeep::{ScoreRegistry, ScoreStore};

use crate::cli::PlayerScore;
use crate::cli_utils;

pub fn render(registry: &ScoreRegistry) -> Result<String> {
    let top = registry.top_player()?;
    Ok(format!("Top player is:\n{}", top))
}

/// Print the player with the highest score
pub fn run(players: &[PlayerScore]) -> Result<()> {
    let registry = cli_utils::build_registry(players)?;
    println!("{}", render(&registry)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorekeep::Error;

    #[test]
    fn test_render_top_player() {
        let registry =
            ScoreRegistry::from_scores([("Player1", 10), ("Player2", 15), ("Player3", 12)])
                .unwrap();
        assert_eq!(render(&registry).unwrap(), "Top player is:\nPlayer2");
    }

    #[test]
    fn test_render_empty_registry() {
        let err = render(&ScoreRegistry::new()).unwrap_err();
        assert_eq!(err.downcast_ref::<Error>(), Some(&Error::EmptyRegistry));
    }
}
