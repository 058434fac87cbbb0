//! Board representation for Gomoku

mod bitboard;
pub mod board;


use std::fmt;
use std::hash::{Hash, Hasher};

// Re-exports
pub use board::Board;

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Color that moves after `moves_played` stones. Black takes the even turns.
    #[inline]
    pub fn for_turn(moves_played: usize) -> Color {
        if moves_played % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Single-character symbol used by the board renderer
    pub fn symbol(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("Black"),
            Color::White => f.write_str("White"),
        }
    }
}

/// A stone placed (or proposed) at one cell.
///
/// Coordinates are 0-based. They are signed so that any candidate, including
/// one outside the board, can be represented and handed to the validator.
///
/// Two stones are equal when they occupy the same cell; color is ignored.
#[derive(Debug, Clone, Copy)]
pub struct Stone {
    row: i32,
    col: i32,
    color: Color,
}

impl Stone {
    #[inline]
    pub fn new(row: i32, col: i32, color: Color) -> Self {
        Self { row, col, color }
    }

    /// Build a stone from the 1-based coordinates shown to players.
    #[inline]
    pub fn from_one_based(row: i32, col: i32, color: Color) -> Self {
        Self::new(row.saturating_sub(1), col.saturating_sub(1), color)
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.col
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Check the stone lies within `[0, BOARD_SIZE)` on both axes
    #[inline]
    pub fn is_on_board(&self) -> bool {
        is_valid(self.row, self.col)
    }

    /// Cell index (row-major), `None` when off the board
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.is_on_board()
            .then(|| self.row as usize * BOARD_SIZE + self.col as usize)
    }
}

impl PartialEq for Stone {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.col == other.col
    }
}

impl Eq for Stone {}

impl Hash for Stone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.col.hash(state);
    }
}

/// Check that a 0-based coordinate pair is on the board
#[inline]
pub fn is_valid(row: i32, col: i32) -> bool {
    row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
}
