//! Board structure backed by the move history

use super::bitboard::Bitboard;
use super::{is_valid, Color, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Game board.
///
/// The ordered move history is the source of truth. The per-color bitboards
/// are an index over it, updated on every push, so cell lookups stay O(1).
#[derive(Debug, Clone)]
pub struct Board {
    history: Vec<Stone>,
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            history: Vec::with_capacity(TOTAL_CELLS),
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Color at a 0-based cell, `None` for empty or off-board cells
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> Option<Color> {
        if !is_valid(row, col) {
            return None;
        }
        let idx = row as usize * BOARD_SIZE + col as usize;
        if self.black.get(idx) {
            Some(Color::Black)
        } else if self.white.get(idx) {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Check whether the stone's cell already holds a stone of either color
    #[inline]
    pub fn is_occupied(&self, stone: &Stone) -> bool {
        self.get(stone.row(), stone.col()).is_some()
    }

    /// Append a stone to the history.
    ///
    /// The caller must have validated the stone; `Game::place` is the only
    /// production caller.
    pub(crate) fn push(&mut self, stone: Stone) {
        debug_assert!(stone.is_on_board() && !self.is_occupied(&stone));
        if let Some(idx) = stone.index() {
            match stone.color() {
                Color::Black => self.black.set(idx),
                Color::White => self.white.set(idx),
            }
            self.history.push(stone);
        }
    }

    /// Stones in play order
    #[inline]
    pub fn stones(&self) -> &[Stone] {
        &self.history
    }

    /// Most recently placed stone
    #[inline]
    pub fn last(&self) -> Option<&Stone> {
        self.history.last()
    }

    /// Total stones on board
    #[inline]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.history.len() == TOTAL_CELLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Stone> for Board {
    /// Build a board from stones in play order, skipping any that are off
    /// the board or repeat an occupied cell.
    fn from_iter<I: IntoIterator<Item = Stone>>(iter: I) -> Self {
        let mut board = Board::new();
        for stone in iter {
            if stone.is_on_board() && !board.is_occupied(&stone) {
                board.push(stone);
            }
        }
        board
    }
}
