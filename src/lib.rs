//! Icebreaker game engine and GUI
//!
//! A two-player, turn-based grid game on a 6x5 sheet of ice. Each turn
//! the active player steps to one of the 8 neighboring cells, then breaks
//! any intact unoccupied cell. A player with no legal step left is
//! trapped and loses.
//!
//! # Architecture
//!
//! - [`board`]: grid geometry and the broken-cell state
//! - [`rules`]: movement legality, trap detection, and the turn machine
//! - [`ui`]: egui application (start screen, game screen, end screen)
//!
//! # Quick Start
//!
//! ```
//! use icebreaker::{GameSession, Phase, Pos};
//!
//! let mut session = GameSession::new();
//!
//! // Player 0 steps off its spawn, then breaks the vacated cell
//! session.attempt_move(Pos::new(1, 2)).unwrap();
//! assert_eq!(session.phase(), Phase::Break);
//! session.attempt_break(Pos::new(0, 2)).unwrap();
//!
//! // Turn has passed to player 1
//! assert_eq!(session.phase(), Phase::Move);
//! ```

pub mod board;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, PlayerId, Pos, GRID_COLS, GRID_ROWS};
pub use rules::{BreakOutcome, GameSession, Phase, RuleError};
