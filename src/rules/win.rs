//! Five-in-a-row detection
//!
//! A win can only appear through the stone just placed, so every check here
//! starts from that stone and walks the four lines through it.

use crate::board::{Board, Color, Stone};

/// Stones needed in a row to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count consecutive `color` stones from `(row, col)` stepping by `(dr, dc)`,
/// not counting the start cell, stopping after `limit` stones.
#[inline]
fn run_length(
    board: &Board,
    row: i32,
    col: i32,
    (dr, dc): (i32, i32),
    color: Color,
    limit: usize,
) -> usize {
    let mut count = 0;
    let mut r = row + dr;
    let mut c = col + dc;
    while count < limit && board.get(r, c) == Some(color) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Fast five-in-a-row check through a just-placed stone.
///
/// Only checks 4 directions from the stone and at most four cells on each
/// side, so the cost is independent of board size and history length.
/// Overlines (six or more) also win.
#[inline]
pub fn has_win(board: &Board, last_placed: &Stone) -> bool {
    let color = last_placed.color();
    let (row, col) = (last_placed.row(), last_placed.col());
    let reach = WIN_LENGTH - 1;

    DIRECTIONS.iter().any(|&(dr, dc)| {
        let forward = run_length(board, row, col, (dr, dc), color, reach);
        let backward = run_length(board, row, col, (-dr, -dc), color, reach);
        forward + backward + 1 >= WIN_LENGTH
    })
}

/// Find the full winning run through a stone, if any.
///
/// Returns the stones of the run in board order (at least five of them).
pub fn winning_line(board: &Board, stone: &Stone) -> Option<Vec<Stone>> {
    let color = stone.color();
    let (row, col) = (stone.row(), stone.col());

    for &(dr, dc) in &DIRECTIONS {
        let backward = run_length(board, row, col, (-dr, -dc), color, usize::MAX);
        let forward = run_length(board, row, col, (dr, dc), color, usize::MAX);
        let total = backward + forward + 1;
        if total >= WIN_LENGTH {
            let (start_r, start_c) = (row - dr * backward as i32, col - dc * backward as i32);
            let line = (0..total as i32)
                .map(|i| Stone::new(start_r + dr * i, start_c + dc * i, color))
                .collect();
            return Some(line);
        }
    }
    None
}
