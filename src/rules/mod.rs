//! Game rules for standard Gomoku
//!
//! - Legality: a move must be on the board and on an empty cell
//! - Win: five or more in a row through the last stone (overlines allowed)

pub mod validate;
pub mod win;

// Re-exports for convenient access
pub use validate::validate;
pub use win::{has_win, winning_line, WIN_LENGTH};
