//! Gomoku rule engine with a console front end
//!
//! Standard five-in-a-row on a 15x15 board:
//! - Black moves first, players alternate
//! - A move must be on the board and on an empty cell
//! - Five or more in a row (any axis) wins, overlines included
//! - A full board with no five is a draw
//!
//! # Architecture
//!
//! - [`board`]: stones, colors and the move history with its bitboard index
//! - [`rules`]: move validation and win detection
//! - [`player`]: human and random players behind the [`Player`] trait
//! - [`game`]: turn order, placement results and game status
//! - [`ui`]: console loop and board rendering
//! - [`error`]: error types
//!
//! # Coordinates
//!
//! The engine works in 0-based coordinates. Players see and type 1-based
//! ones; [`Stone::from_one_based`] is the conversion point.
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Color, Game, GameStatus, HumanPlayer, Stone};
//!
//! let mut game = Game::seated(
//!     Box::new(HumanPlayer::new("Black")),
//!     Box::new(HumanPlayer::new("White")),
//! );
//!
//! for col in 0..4 {
//!     game.place(Stone::new(7, col, Color::Black));
//!     game.place(Stone::new(8, col, Color::White));
//! }
//! let result = game.place(Stone::new(7, 4, Color::Black));
//! assert_eq!(result.status(), GameStatus::Won(Color::Black));
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod player;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Color, Stone, BOARD_SIZE, TOTAL_CELLS};
pub use error::{ConsoleError, PlacementError};
pub use game::{Game, GameStatus, PlaceResult};
pub use player::{HumanPlayer, Player, RandomPlayer};
