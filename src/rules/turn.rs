//! Turn state machine
//!
//! Each full turn is two half-turns by the active player: step to an
//! adjacent intact cell, then break one intact unoccupied cell anywhere
//! on the grid. The turn then passes; if the incoming player has no legal
//! step left, the game ends and the breaker wins.

use thiserror::Error;

use crate::board::{Board, PlayerId, Pos};

use super::movement::{can_move_to, is_trapped};

/// Recoverable rule violations. None of these mutate session state;
/// the caller re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("illegal move: {reason}")]
    IllegalMove { reason: &'static str },
    #[error("illegal break: {reason}")]
    IllegalBreak { reason: &'static str },
    #[error("the game is over")]
    GameOver,
}

/// Which half-turn the session is waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the active player to step to an adjacent cell
    Move,
    /// Waiting for the active player to break a cell
    Break,
    /// Terminal: no further input accepted
    Over { winner: PlayerId },
}

/// Result of a successful break
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakOutcome {
    /// Turn passed to the other player
    TurnPassed { next: PlayerId },
    /// The incoming player had no legal step left; the breaker wins
    Trapped { loser: PlayerId, winner: PlayerId },
}

/// A player's piece on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub pos: Pos,
}

impl Player {
    fn at_spawn(id: PlayerId) -> Self {
        Self {
            id,
            pos: id.spawn(),
        }
    }
}

/// One game of Icebreaker: the board, both players, and the turn machine.
///
/// Invariants held across every operation:
/// - the two players never occupy the same cell
/// - no player ever stands on a broken cell
/// - once `Phase::Over`, nothing mutates
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    active: PlayerId,
    phase: Phase,
    turn_count: u32,
}

impl GameSession {
    /// Fresh session: intact board, players at their spawns, player 0 to move
    pub fn new() -> Self {
        let mut session = Self {
            board: Board::new(),
            players: [Player::at_spawn(PlayerId::P0), Player::at_spawn(PlayerId::P1)],
            active: PlayerId::P0,
            phase: Phase::Move,
            turn_count: 0,
        };
        // Trap check on Move entry applies to the opening turn as well.
        // Degenerate on a fresh board, but keeps the rule in one place.
        session.check_entrapment();
        session
    }

    /// Restore defaults for a rematch on a fresh board
    pub fn reset(&mut self) {
        *self = Self::new();
        log::info!("session reset");
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn active(&self) -> PlayerId {
        self.active
    }

    #[inline]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    #[inline]
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    #[inline]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over { .. })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Over { winner } => Some(winner),
            _ => None,
        }
    }

    /// Current positions of both players
    #[inline]
    fn occupied(&self) -> [Pos; 2] {
        [self.players[0].pos, self.players[1].pos]
    }

    #[inline]
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.occupied().contains(&pos)
    }

    /// Whether the active player may step to `target` right now.
    /// Used by the UI for hover previews; `attempt_move` re-validates.
    pub fn can_move_to(&self, target: Pos) -> bool {
        self.phase == Phase::Move
            && can_move_to(
                &self.board,
                self.active_player().pos,
                target,
                &self.occupied(),
            )
    }

    /// Whether `target` may be broken right now. Any intact, unoccupied
    /// cell is eligible, including the cell the mover just vacated.
    pub fn can_break_at(&self, target: Pos) -> bool {
        self.phase == Phase::Break && !self.board.is_broken(target) && !self.is_occupied(target)
    }

    /// Step the active player to `target`.
    ///
    /// On success transitions `Move` -> `Break`. On failure returns the
    /// violation and leaves all state untouched.
    pub fn attempt_move(&mut self, target: Pos) -> Result<(), RuleError> {
        match self.phase {
            Phase::Over { .. } => return Err(RuleError::GameOver),
            Phase::Break => {
                return Err(RuleError::IllegalMove {
                    reason: "break a cell first",
                })
            }
            Phase::Move => {}
        }

        let from = self.active_player().pos;
        if !from.is_adjacent(target) {
            return Err(RuleError::IllegalMove {
                reason: "not an adjacent cell",
            });
        }
        if self.board.is_broken(target) {
            return Err(RuleError::IllegalMove {
                reason: "that cell is broken",
            });
        }
        if self.is_occupied(target) {
            return Err(RuleError::IllegalMove {
                reason: "that cell is occupied",
            });
        }

        self.players[self.active.index()].pos = target;
        self.phase = Phase::Break;
        log::debug!("{} moved {} -> {}", self.active, from, target);
        Ok(())
    }

    /// Break `target` and pass the turn.
    ///
    /// Valid only in `Phase::Break`. The mover's vacated origin cell is a
    /// legal target; the destination cell is not (it is occupied).
    pub fn attempt_break(&mut self, target: Pos) -> Result<BreakOutcome, RuleError> {
        match self.phase {
            Phase::Over { .. } => return Err(RuleError::GameOver),
            Phase::Move => {
                return Err(RuleError::IllegalBreak {
                    reason: "move first",
                })
            }
            Phase::Break => {}
        }

        if self.board.is_broken(target) {
            return Err(RuleError::IllegalBreak {
                reason: "that cell is already broken",
            });
        }
        if self.is_occupied(target) {
            return Err(RuleError::IllegalBreak {
                reason: "that cell is occupied",
            });
        }

        let breaker = self.active;
        self.board.break_cell(target);
        self.turn_count += 1;
        self.active = breaker.opponent();
        self.phase = Phase::Move;
        log::debug!("{} broke {}", breaker, target);

        if let Some(winner) = self.check_entrapment() {
            log::info!("{} trapped, {} wins", winner.opponent(), winner);
            return Ok(BreakOutcome::Trapped {
                loser: winner.opponent(),
                winner,
            });
        }

        Ok(BreakOutcome::TurnPassed { next: self.active })
    }

    /// Trap check on `Phase::Move` entry: if the player about to move has
    /// no legal step, the game ends in the opponent's favor.
    fn check_entrapment(&mut self) -> Option<PlayerId> {
        if self.phase != Phase::Move {
            return None;
        }
        let pos = self.active_player().pos;
        if is_trapped(&self.board, pos, &self.occupied()) {
            let winner = self.active.opponent();
            self.phase = Phase::Over { winner };
            return Some(winner);
        }
        None
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive a session to the given player layout and phase, bypassing
    /// the click-by-click route
    fn session_with(p0: Pos, p1: Pos, broken: &[Pos]) -> GameSession {
        let mut s = GameSession::new();
        s.players[0].pos = p0;
        s.players[1].pos = p1;
        for &b in broken {
            s.board.break_cell(b);
        }
        s
    }

    #[test]
    fn test_fresh_session() {
        let s = GameSession::new();
        assert_eq!(s.phase(), Phase::Move);
        assert_eq!(s.active(), PlayerId::P0);
        assert_eq!(s.player(PlayerId::P0).pos, Pos::new(0, 2));
        assert_eq!(s.player(PlayerId::P1).pos, Pos::new(5, 2));
        assert_eq!(s.turn_count(), 0);
        assert!(!s.is_over());
    }

    #[test]
    fn test_move_then_break_passes_turn() {
        let mut s = GameSession::new();
        s.attempt_move(Pos::new(1, 2)).unwrap();
        assert_eq!(s.phase(), Phase::Break);
        assert_eq!(s.player(PlayerId::P0).pos, Pos::new(1, 2));

        let outcome = s.attempt_break(Pos::new(3, 3)).unwrap();
        assert_eq!(outcome, BreakOutcome::TurnPassed { next: PlayerId::P1 });
        assert_eq!(s.phase(), Phase::Move);
        assert_eq!(s.active(), PlayerId::P1);
        assert_eq!(s.turn_count(), 1);
        assert!(s.board().is_broken(Pos::new(3, 3)));
    }

    #[test]
    fn test_move_out_of_range_rejected() {
        let mut s = GameSession::new();
        let err = s.attempt_move(Pos::new(3, 2)).unwrap_err();
        assert!(matches!(err, RuleError::IllegalMove { .. }));
        assert_eq!(s.phase(), Phase::Move);
        assert_eq!(s.player(PlayerId::P0).pos, Pos::new(0, 2));
    }

    #[test]
    fn test_move_onto_opponent_rejected() {
        let mut s = session_with(Pos::new(2, 2), Pos::new(3, 2), &[]);
        let err = s.attempt_move(Pos::new(3, 2)).unwrap_err();
        assert_eq!(
            err,
            RuleError::IllegalMove {
                reason: "that cell is occupied"
            }
        );
        assert_eq!(s.player(PlayerId::P0).pos, Pos::new(2, 2));
        assert_eq!(s.phase(), Phase::Move);
    }

    #[test]
    fn test_move_onto_broken_rejected() {
        let mut s = session_with(Pos::new(2, 2), Pos::new(5, 2), &[Pos::new(2, 1)]);
        let err = s.attempt_move(Pos::new(2, 1)).unwrap_err();
        assert!(matches!(err, RuleError::IllegalMove { .. }));
        assert_eq!(s.phase(), Phase::Move);
    }

    #[test]
    fn test_move_in_place_rejected() {
        let mut s = GameSession::new();
        let err = s.attempt_move(Pos::new(0, 2)).unwrap_err();
        assert!(matches!(err, RuleError::IllegalMove { .. }));
    }

    #[test]
    fn test_break_before_move_rejected() {
        let mut s = GameSession::new();
        let err = s.attempt_break(Pos::new(3, 3)).unwrap_err();
        assert!(matches!(err, RuleError::IllegalBreak { .. }));
        assert!(!s.board().is_broken(Pos::new(3, 3)));
    }

    #[test]
    fn test_move_during_break_phase_rejected() {
        let mut s = GameSession::new();
        s.attempt_move(Pos::new(1, 2)).unwrap();
        let err = s.attempt_move(Pos::new(2, 2)).unwrap_err();
        assert!(matches!(err, RuleError::IllegalMove { .. }));
        assert_eq!(s.player(PlayerId::P0).pos, Pos::new(1, 2));
        assert_eq!(s.phase(), Phase::Break);
    }

    #[test]
    fn test_break_already_broken_rejected() {
        let mut s = session_with(Pos::new(2, 2), Pos::new(5, 2), &[Pos::new(4, 4)]);
        s.attempt_move(Pos::new(1, 2)).unwrap();
        let err = s.attempt_break(Pos::new(4, 4)).unwrap_err();
        assert_eq!(
            err,
            RuleError::IllegalBreak {
                reason: "that cell is already broken"
            }
        );
        assert_eq!(s.phase(), Phase::Break);
        assert_eq!(s.board().broken_count(), 1);
    }

    #[test]
    fn test_break_occupied_rejected() {
        let mut s = GameSession::new();
        s.attempt_move(Pos::new(1, 2)).unwrap();
        // Mover's destination cell
        let err = s.attempt_break(Pos::new(1, 2)).unwrap_err();
        assert!(matches!(err, RuleError::IllegalBreak { .. }));
        // Opponent's cell
        let err = s.attempt_break(Pos::new(5, 2)).unwrap_err();
        assert!(matches!(err, RuleError::IllegalBreak { .. }));
        assert_eq!(s.board().broken_count(), 0);
    }

    #[test]
    fn break_vacated_origin_is_legal() {
        // Policy decision: the cell the mover just left is breakable
        let mut s = GameSession::new();
        s.attempt_move(Pos::new(1, 2)).unwrap();
        let outcome = s.attempt_break(Pos::new(0, 2)).unwrap();
        assert_eq!(outcome, BreakOutcome::TurnPassed { next: PlayerId::P1 });
        assert!(s.board().is_broken(Pos::new(0, 2)));
    }

    #[test]
    fn test_break_traps_opponent() {
        // P1 in the corner with two escapes broken, one intact
        let mut s = session_with(
            Pos::new(2, 2),
            Pos::new(5, 0),
            &[Pos::new(4, 0), Pos::new(4, 1)],
        );
        s.attempt_move(Pos::new(3, 2)).unwrap();
        let outcome = s.attempt_break(Pos::new(5, 1)).unwrap();
        assert_eq!(
            outcome,
            BreakOutcome::Trapped {
                loser: PlayerId::P1,
                winner: PlayerId::P0
            }
        );
        assert_eq!(
            s.phase(),
            Phase::Over {
                winner: PlayerId::P0
            }
        );
        assert_eq!(s.winner(), Some(PlayerId::P0));
    }

    #[test]
    fn test_trapped_by_adjacent_opponent() {
        // P1 at (5,0): neighbors (4,0) broken, (4,1) broken, (5,1) is P0
        let mut s = session_with(
            Pos::new(4, 2),
            Pos::new(5, 0),
            &[Pos::new(4, 0)],
        );
        s.attempt_move(Pos::new(5, 1)).unwrap();
        let outcome = s.attempt_break(Pos::new(4, 1)).unwrap();
        assert!(matches!(outcome, BreakOutcome::Trapped { .. }));
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut s = session_with(
            Pos::new(2, 2),
            Pos::new(5, 0),
            &[Pos::new(4, 0), Pos::new(4, 1)],
        );
        s.attempt_move(Pos::new(3, 2)).unwrap();
        s.attempt_break(Pos::new(5, 1)).unwrap();
        assert!(s.is_over());

        let before_broken = s.board().broken_count();
        let before_p0 = s.player(PlayerId::P0).pos;

        assert_eq!(s.attempt_move(Pos::new(2, 2)), Err(RuleError::GameOver));
        assert_eq!(s.attempt_break(Pos::new(0, 0)), Err(RuleError::GameOver));
        assert_eq!(s.board().broken_count(), before_broken);
        assert_eq!(s.player(PlayerId::P0).pos, before_p0);
        assert_eq!(s.turn_count(), 1);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut s = GameSession::new();
        s.attempt_move(Pos::new(1, 2)).unwrap();
        s.attempt_break(Pos::new(0, 2)).unwrap();
        s.reset();
        assert_eq!(s.phase(), Phase::Move);
        assert_eq!(s.active(), PlayerId::P0);
        assert_eq!(s.player(PlayerId::P0).pos, Pos::new(0, 2));
        assert_eq!(s.player(PlayerId::P1).pos, Pos::new(5, 2));
        assert_eq!(s.board().broken_count(), 0);
        assert_eq!(s.turn_count(), 0);
    }

    #[test]
    fn test_hover_helpers_follow_phase() {
        let mut s = GameSession::new();
        assert!(s.can_move_to(Pos::new(1, 2)));
        assert!(!s.can_break_at(Pos::new(3, 3)));

        s.attempt_move(Pos::new(1, 2)).unwrap();
        assert!(!s.can_move_to(Pos::new(2, 2)));
        assert!(s.can_break_at(Pos::new(3, 3)));
        assert!(s.can_break_at(Pos::new(0, 2))); // vacated origin
        assert!(!s.can_break_at(Pos::new(1, 2))); // own cell
        assert!(!s.can_break_at(Pos::new(5, 2))); // opponent
    }

    #[test]
    fn test_scenario_opening_exchange() {
        // Typical opening: P0 at (0,2) steps diagonally, breaks the
        // origin, turn passes to P1 untrapped.
        let mut s = GameSession::new();
        s.attempt_move(Pos::new(1, 1)).unwrap();
        assert_eq!(s.phase(), Phase::Break);
        let outcome = s.attempt_break(Pos::new(0, 2)).unwrap();
        assert_eq!(outcome, BreakOutcome::TurnPassed { next: PlayerId::P1 });
        assert_eq!(s.active(), PlayerId::P1);
    }
}
