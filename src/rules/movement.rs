//! Movement legality and trap detection
//!
//! A player may step to any of the 8 king-move neighbors of their cell,
//! provided the destination is on the grid, not broken, and not occupied.
//! A player's own cell counts as occupied, so staying put is not a move.

use crate::board::{Board, Pos};

/// Check whether a step from `from` to `target` is legal.
///
/// `occupied` holds the current positions of both players (including the
/// mover's own cell).
pub fn can_move_to(board: &Board, from: Pos, target: Pos, occupied: &[Pos]) -> bool {
    from.is_adjacent(target) && !board.is_broken(target) && !occupied.contains(&target)
}

/// All legal destinations from `from`
pub fn legal_moves(board: &Board, from: Pos, occupied: &[Pos]) -> Vec<Pos> {
    board
        .neighbors(from)
        .filter(|&n| can_move_to(board, from, n, occupied))
        .collect()
}

/// A player is trapped iff no neighbor of their cell is a legal destination
/// (every neighbor is out of bounds, broken, or occupied).
pub fn is_trapped(board: &Board, from: Pos, occupied: &[Pos]) -> bool {
    board
        .neighbors(from)
        .all(|n| !can_move_to(board, from, n, occupied))
}
