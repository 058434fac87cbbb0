//! Console front end for the Gomoku game
//!
//! Player setup, the turn loop, board rendering and the play-again prompt.
//! Everything here goes through `Game`; no rule logic lives in this module.

mod app;
mod board_view;

pub use app::{Console, ConsoleConfig};
pub use board_view::{render_board, EMPTY_CELL};
