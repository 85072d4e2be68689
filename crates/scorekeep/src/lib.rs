//! # scorekeep
//!
//! In-memory registry of player scores.
//!
//! This crate provides:
//! - Score mutation (cumulative add, replacement, removal, clear)
//! - Lookups (score, membership, player count)
//! - Aggregate queries (highest score, top player, rankings)
//!
//! Aggregate queries live on the `ScoreStore` trait, so bring it into scope
//! (or use the `prelude`) to call them on a `ScoreRegistry`.

pub mod config;
pub mod error;
pub mod prelude;
pub mod registry;

// Re-export from error module
pub use error::{Error, Result};

// Re-export from registry module
pub use registry::{RankedEntry, ScoreRegistry, ScoreStore};
