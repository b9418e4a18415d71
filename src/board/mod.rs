//! Board representation for Icebreaker

pub mod board;

// Re-exports
pub use board::Board;

/// Grid width in columns
pub const GRID_COLS: usize = 6;
/// Grid height in rows
pub const GRID_ROWS: usize = 5;
pub const TOTAL_CELLS: usize = GRID_COLS * GRID_ROWS; // 30

/// Player identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    P0,
    P1,
}

impl PlayerId {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::P0 => PlayerId::P1,
            PlayerId::P1 => PlayerId::P0,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerId::P0 => 0,
            PlayerId::P1 => 1,
        }
    }

    /// Starting cell for this player (left and right edge, middle row)
    #[inline]
    pub fn spawn(self) -> Pos {
        match self {
            PlayerId::P0 => Pos::new(0, 2),
            PlayerId::P1 => Pos::new(GRID_COLS as u8 - 1, 2),
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PLAYER {}", self.index())
    }
}

/// Position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub col: u8,
    pub row: u8,
}

impl Pos {
    #[inline]
    pub fn new(col: u8, row: u8) -> Self {
        debug_assert!(col < GRID_COLS as u8 && row < GRID_ROWS as u8);
        Self { col, row }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * GRID_COLS + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            col: (idx % GRID_COLS) as u8,
            row: (idx / GRID_COLS) as u8,
        }
    }

    #[inline]
    pub fn is_valid(col: i32, row: i32) -> bool {
        col >= 0 && col < GRID_COLS as i32 && row >= 0 && row < GRID_ROWS as i32
    }

    /// King-move adjacency: within one step on both axes, excluding self
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        let dc = (self.col as i32 - other.col as i32).abs();
        let dr = (self.row as i32 - other.row as i32).abs();
        dc <= 1 && dr <= 1 && (dc, dr) != (0, 0)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.col, self.row)
    }
}
