//! Game rules for Icebreaker
//!
//! This module implements the rule set:
//! - Movement legality (king-move adjacency, intact cells, no overlap)
//! - Trap detection (a player with no legal destination loses)
//! - The turn state machine (move half-turn, break half-turn, game over)

pub mod movement;
pub mod turn;

// Re-exports for convenient access
pub use movement::{can_move_to, is_trapped, legal_moves};
pub use turn::{BreakOutcome, GameSession, Phase, Player, RuleError};
