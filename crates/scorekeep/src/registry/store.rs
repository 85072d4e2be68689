//! Score store abstraction.
//!
//! `ScoreStore` splits a score registry into the primitive operations an
//! implementation must supply and the aggregate queries derived from them.
//! Every derived query is a single read-only pass over `entries()`.

use super::RankedEntry;
use crate::error::{Error, Result};

/// Trait for player score storage.
///
/// Implementations own the mapping from player id to score and define its
/// canonical iteration order. Failed calls must leave the store unchanged.
pub trait ScoreStore {
    /// Add `delta` to a player's score, tracking the player if it is new.
    ///
    /// Fails with `InvalidArgument` for an empty id or a negative delta.
    fn add_score(&mut self, player_id: &str, delta: i64) -> Result<()>;

    /// Replace the score of a tracked player.
    fn update_score(&mut self, player_id: &str, new_score: i64) -> Result<()>;

    /// Current score of a tracked player.
    fn score(&self, player_id: &str) -> Result<i64>;

    /// Whether the player is tracked.
    fn is_player(&self, player_id: &str) -> bool;

    /// Stop tracking a player, returning its last score.
    fn remove_player(&mut self, player_id: &str) -> Result<i64>;

    /// Remove every player.
    fn clear(&mut self);

    /// Number of tracked players.
    fn len(&self) -> usize;

    /// All `(player id, score)` pairs in canonical order.
    fn entries(&self) -> impl Iterator<Item = (&str, i64)>;

    /// Whether no players are tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Track a new player with `score`, failing if it is already tracked.
    fn insert_player(&mut self, player_id: &str, score: i64) -> Result<()> {
        if self.is_player(player_id) {
            return Err(Error::DuplicatePlayer(player_id.to_string()));
        }
        self.add_score(player_id, score)
    }

    /// Highest score among all tracked players.
    fn highest_score(&self) -> Result<i64> {
        self.entries()
            .map(|(_, score)| score)
            .max()
            .ok_or(Error::EmptyRegistry)
    }

    /// Player holding the highest score.
    ///
    /// Ties go to the player that comes first in canonical order.
    fn top_player(&self) -> Result<&str> {
        let mut top: Option<(&str, i64)> = None;

        for (player_id, score) in self.entries() {
            match top {
                Some((_, best)) if score <= best => {}
                _ => top = Some((player_id, score)),
            }
        }

        top.map(|(player_id, _)| player_id)
            .ok_or(Error::EmptyRegistry)
    }

    /// All players sorted by score, highest first.
    ///
    /// Equal scores keep their canonical order.
    fn rankings(&self) -> Vec<RankedEntry> {
        let mut ranked: Vec<RankedEntry> = self
            .entries()
            .map(|(player_id, score)| RankedEntry::new(player_id, score))
            .collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// Whether both stores track the same players with identical scores.
    ///
    /// Iteration order is ignored.
    fn same_entries<S: ScoreStore>(&self, other: &S) -> bool {
        self.len() == other.len()
            && self
                .entries()
                .all(|(player_id, score)| other.score(player_id) == Ok(score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal store backed by a vector, used to exercise the derived queries
    /// independently of `ScoreRegistry`.
    #[derive(Debug, Default)]
    struct VecStore {
        rows: Vec<(String, i64)>,
    }

    impl VecStore {
        fn with(rows: &[(&str, i64)]) -> Self {
            Self {
                rows: rows
                    .iter()
                    .map(|(id, score)| (id.to_string(), *score))
                    .collect(),
            }
        }

        fn position(&self, player_id: &str) -> Option<usize> {
            self.rows.iter().position(|(id, _)| id == player_id)
        }
    }

    impl ScoreStore for VecStore {
        fn add_score(&mut self, player_id: &str, delta: i64) -> Result<()> {
            if player_id.is_empty() || delta < 0 {
                return Err(Error::InvalidArgument("bad input".to_string()));
            }
            match self.position(player_id) {
                Some(i) => self.rows[i].1 += delta,
                None => self.rows.push((player_id.to_string(), delta)),
            }
            Ok(())
        }

        fn update_score(&mut self, player_id: &str, new_score: i64) -> Result<()> {
            let i = self
                .position(player_id)
                .ok_or_else(|| Error::UnknownPlayer(player_id.to_string()))?;
            self.rows[i].1 = new_score;
            Ok(())
        }

        fn score(&self, player_id: &str) -> Result<i64> {
            self.position(player_id)
                .map(|i| self.rows[i].1)
                .ok_or_else(|| Error::UnknownPlayer(player_id.to_string()))
        }

        fn is_player(&self, player_id: &str) -> bool {
            self.position(player_id).is_some()
        }

        fn remove_player(&mut self, player_id: &str) -> Result<i64> {
            let i = self
                .position(player_id)
                .ok_or_else(|| Error::UnknownPlayer(player_id.to_string()))?;
            Ok(self.rows.remove(i).1)
        }

        fn clear(&mut self) {
            self.rows.clear();
        }

        fn len(&self) -> usize {
            self.rows.len()
        }

        fn entries(&self) -> impl Iterator<Item = (&str, i64)> {
            self.rows.iter().map(|(id, score)| (id.as_str(), *score))
        }
    }

    #[test]
    fn test_highest_score() {
        let store = VecStore::with(&[("A", 10), ("B", 15), ("C", 12)]);
        assert_eq!(store.highest_score(), Ok(15));
    }

    #[test]
    fn test_empty_store_aggregates() {
        let store = VecStore::default();
        assert!(store.is_empty());
        assert_eq!(store.highest_score(), Err(Error::EmptyRegistry));
        assert_eq!(store.top_player(), Err(Error::EmptyRegistry));
        assert!(store.rankings().is_empty());
    }

    #[test]
    fn test_top_player_prefers_first_on_tie() {
        let store = VecStore::with(&[("A", 3), ("B", 7), ("C", 7), ("D", 1)]);
        assert_eq!(store.top_player(), Ok("B"));
    }

    #[test]
    fn test_top_player_with_negative_scores() {
        let store = VecStore::with(&[("A", -5), ("B", -2)]);
        assert_eq!(store.top_player(), Ok("B"));
        assert_eq!(store.highest_score(), Ok(-2));
    }

    #[test]
    fn test_rankings_order() {
        let store = VecStore::with(&[("A", 10), ("B", 15), ("C", 12)]);
        assert_eq!(
            store.rankings(),
            vec![
                RankedEntry::new("B", 15),
                RankedEntry::new("C", 12),
                RankedEntry::new("A", 10),
            ]
        );
    }

    #[test]
    fn test_rankings_ties_keep_order() {
        let store = VecStore::with(&[("X", 5), ("Y", 9), ("Z", 5), ("W", 9)]);
        let ids: Vec<String> = store.rankings().into_iter().map(|e| e.player_id).collect();
        assert_eq!(ids, vec!["Y", "W", "X", "Z"]);
    }

    #[test]
    fn test_insert_player_rejects_duplicate() {
        let mut store = VecStore::with(&[("A", 1)]);
        assert_eq!(
            store.insert_player("A", 4),
            Err(Error::DuplicatePlayer("A".to_string()))
        );
        assert_eq!(store.score("A"), Ok(1));

        store.insert_player("B", 2).unwrap();
        assert_eq!(store.score("B"), Ok(2));
    }

    #[test]
    fn test_same_entries_ignores_order() {
        let a = VecStore::with(&[("A", 1), ("B", 2)]);
        let b = VecStore::with(&[("B", 2), ("A", 1)]);
        assert!(a.same_entries(&b));
        assert!(b.same_entries(&a));

        let c = VecStore::with(&[("A", 1), ("B", 3)]);
        assert!(!a.same_entries(&c));

        let d = VecStore::with(&[("A", 1)]);
        assert!(!a.same_entries(&d));
    }
}
