//! CLI command implementations.
//!
//! Each command seeds a registry from the supplied players and renders one
//! view of it.

pub mod rankings;
pub mod simulate;
pub mod top_player;
