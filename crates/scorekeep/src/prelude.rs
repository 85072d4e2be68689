//! Commonly used items.
//!
//! ```
//! use scorekeep::prelude::*;
//!
//! let mut registry = ScoreRegistry::new();
//! registry.add_score("Player1", 10).unwrap();
//! assert_eq!(registry.top_player().unwrap(), "Player1");
//! ```

pub use crate::error::{Error, Result};
pub use crate::registry::{RankedEntry, ScoreRegistry, ScoreStore};
