//! Player score registry.
//!
//! This module contains:
//! - `ScoreStore` - primitive score operations plus derived aggregate queries
//! - `ScoreRegistry` - insertion-ordered in-memory store
//! - `RankedEntry` - one row of a ranking

mod ranking;
mod score_registry;
mod store;

pub use ranking::*;
pub use score_registry::*;
pub use store::*;
