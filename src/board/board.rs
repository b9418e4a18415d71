//! Grid state with broken-cell tracking

use super::{Pos, GRID_COLS, GRID_ROWS, TOTAL_CELLS};

/// The 8 king-move direction deltas
const KING_DELTAS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Game board: a 6x5 grid where cells break permanently.
///
/// Broken cells are stored as a bitmask, one bit per cell. A cell is
/// never un-broken during a session; a fresh board is created on reset.
#[derive(Debug, Clone, Default)]
pub struct Board {
    broken: u32,
}

impl Board {
    pub fn new() -> Self {
        Self { broken: 0 }
    }

    #[inline]
    pub fn cols(&self) -> usize {
        GRID_COLS
    }

    #[inline]
    pub fn rows(&self) -> usize {
        GRID_ROWS
    }

    /// Check whether (col, row) lies on the grid
    #[inline]
    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        Pos::is_valid(col, row)
    }

    /// Check whether the cell has been broken
    #[inline]
    pub fn is_broken(&self, pos: Pos) -> bool {
        self.broken & (1 << pos.to_index()) != 0
    }

    /// Mark a cell broken. Idempotent: breaking an already-broken cell
    /// is a no-op (the turn engine rejects such a break before it gets
    /// here; see `GameSession::attempt_break`).
    #[inline]
    pub fn break_cell(&mut self, pos: Pos) {
        self.broken |= 1 << pos.to_index();
    }

    /// Number of broken cells
    #[inline]
    pub fn broken_count(&self) -> usize {
        self.broken.count_ones() as usize
    }

    /// Number of intact cells
    #[inline]
    pub fn intact_count(&self) -> usize {
        TOTAL_CELLS - self.broken_count()
    }

    /// The up-to-8 king-move neighbors of a cell, intersected with bounds
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        KING_DELTAS.iter().filter_map(move |&(dc, dr)| {
            let c = pos.col as i32 + dc;
            let r = pos.row as i32 + dr;
            if Pos::is_valid(c, r) {
                Some(Pos::new(c as u8, r as u8))
            } else {
                None
            }
        })
    }
}
