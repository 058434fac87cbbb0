//! Game orchestration: seats, turn order, move application and results
//!
//! # Example
//!
//! ```
//! use gomoku::{Color, Game, GameStatus, HumanPlayer, Stone};
//!
//! let mut game = Game::new(
//!     Box::new(HumanPlayer::new("Ada")),
//!     Box::new(HumanPlayer::new("Grace")),
//! );
//!
//! let result = game.place(Stone::from_one_based(8, 8, Color::Black));
//! assert!(result.is_success());
//! assert_eq!(result.status(), GameStatus::InProgress);
//! assert!(!game.is_blacks_turn());
//! ```

use rand::Rng;
use tracing::{debug, info};

use crate::board::{Board, Color, Stone};
use crate::error::PlacementError;
use crate::player::Player;
use crate::rules::{has_win, validate};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Color),
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Outcome of a placement attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceResult {
    success: bool,
    message: String,
    status: GameStatus,
    error: Option<PlacementError>,
}

impl PlaceResult {
    fn accepted(message: String, status: GameStatus) -> Self {
        Self {
            success: true,
            message,
            status,
            error: None,
        }
    }

    fn rejected(error: PlacementError, status: GameStatus) -> Self {
        Self {
            success: false,
            message: error.to_string(),
            status,
            error: Some(error),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.success
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Why the placement was rejected, `None` on success
    #[inline]
    pub fn error(&self) -> Option<PlacementError> {
        self.error
    }
}

/// A single match between two players.
///
/// One player is seated as Black at construction. Black always moves first.
/// A finished game is not reused; start a new `Game` for a rematch.
pub struct Game {
    black: Box<dyn Player>,
    white: Box<dyn Player>,
    board: Board,
    turn: Color,
    status: GameStatus,
}

impl Game {
    /// Create a game, flipping a fair coin with the thread RNG to decide
    /// which player takes Black.
    pub fn new(player1: Box<dyn Player>, player2: Box<dyn Player>) -> Self {
        Self::with_rng(player1, player2, &mut rand::rng())
    }

    /// Create a game, deciding who takes Black with the given RNG.
    pub fn with_rng<R: Rng>(
        player1: Box<dyn Player>,
        player2: Box<dyn Player>,
        rng: &mut R,
    ) -> Self {
        let (black, white) = if rng.random_bool(0.5) {
            (player1, player2)
        } else {
            (player2, player1)
        };
        Self::seated(black, white)
    }

    /// Create a game with fixed seats.
    pub fn seated(black: Box<dyn Player>, white: Box<dyn Player>) -> Self {
        info!(black = black.name(), white = white.name(), "new game");
        Self {
            black,
            white,
            board: Board::new(),
            turn: Color::Black,
            status: GameStatus::InProgress,
        }
    }

    /// Attempt to place a stone.
    ///
    /// A rejected placement leaves the game exactly as it was.
    pub fn place(&mut self, stone: Stone) -> PlaceResult {
        if let Err(error) = self.check(&stone) {
            debug!(
                row = stone.row(),
                col = stone.col(),
                color = %stone.color(),
                %error,
                "placement rejected"
            );
            return PlaceResult::rejected(error, self.status);
        }

        self.board.push(stone);
        debug!(
            row = stone.row(),
            col = stone.col(),
            color = %stone.color(),
            "stone placed"
        );

        let mover = self.player(stone.color()).name().to_string();
        let message = if has_win(&self.board, &stone) {
            self.status = GameStatus::Won(stone.color());
            format!("{mover} wins!")
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            "The board is full. Game ends in a draw.".to_string()
        } else {
            self.turn = self.turn.opponent();
            format!(
                "{mover} placed a stone at row {}, column {}.",
                stone.row() + 1,
                stone.col() + 1
            )
        };

        if self.status.is_terminal() {
            info!(status = ?self.status, moves = self.board.len(), "game over");
        }
        PlaceResult::accepted(message, self.status)
    }

    fn check(&self, stone: &Stone) -> Result<(), PlacementError> {
        if self.status.is_terminal() {
            return Err(PlacementError::GameOver);
        }
        if stone.color() != self.turn {
            return Err(PlacementError::WrongTurn {
                expected: self.turn,
            });
        }
        validate(&self.board, stone)
    }

    /// Player whose turn it is.
    ///
    /// Once the game is over this keeps reporting the player who made the
    /// final move.
    pub fn current(&self) -> &dyn Player {
        self.player(self.turn)
    }

    /// Mutable access to the current player, for driving its move generator
    pub fn current_mut(&mut self) -> &mut dyn Player {
        match self.turn {
            Color::Black => self.black.as_mut(),
            Color::White => self.white.as_mut(),
        }
    }

    /// Player seated at a color
    pub fn player(&self, color: Color) -> &dyn Player {
        match color {
            Color::Black => self.black.as_ref(),
            Color::White => self.white.as_ref(),
        }
    }

    /// Color to move (frozen at the last mover once the game is over)
    #[inline]
    pub fn current_color(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn is_blacks_turn(&self) -> bool {
        self.turn == Color::Black
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Stones in play order
    #[inline]
    pub fn stones(&self) -> &[Stone] {
        self.board.stones()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Let the current player propose a move, if it can.
    pub fn generate_move(&mut self) -> Option<Stone> {
        let history = self.board.stones();
        match self.turn {
            Color::Black => self.black.generate_move(history),
            Color::White => self.white.generate_move(history),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{HumanPlayer, RandomPlayer};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn humans() -> Game {
        Game::seated(
            Box::new(HumanPlayer::new("George")),
            Box::new(HumanPlayer::new("Jim")),
        )
    }

    fn stone(game: &Game, row: i32, col: i32) -> Stone {
        Stone::from_one_based(row, col, game.current_color())
    }

    #[test]
    fn test_initial_state() {
        let game = humans();
        assert!(game.is_blacks_turn());
        assert!(!game.is_over());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.stones().is_empty());
        assert_eq!(game.current().name(), "George");
    }

    #[test]
    fn test_first_move_flips_turn() {
        let mut game = humans();
        let result = game.place(stone(&game, 1, 1));
        assert!(result.is_success());
        assert_eq!(result.error(), None);
        assert_eq!(result.status(), GameStatus::InProgress);
        assert!(!game.is_blacks_turn());
        assert_eq!(game.current().name(), "Jim");
        assert_eq!(game.stones().len(), 1);
    }

    #[test]
    fn test_off_board_keeps_turn() {
        let mut game = humans();
        let result = game.place(stone(&game, 16, 16));
        assert!(!result.is_success());
        assert!(result.message().contains("Stone is off the board."));
        assert_eq!(result.error(), Some(PlacementError::OffBoard));
        assert!(game.is_blacks_turn());
        assert!(game.stones().is_empty());
    }

    #[test]
    fn test_duplicate_keeps_turn() {
        let mut game = humans();
        assert!(game.place(stone(&game, 1, 1)).is_success());

        let result = game.place(stone(&game, 1, 1));
        assert!(!result.is_success());
        assert!(result.message().contains("Duplicate move."));
        assert_eq!(game.current_color(), Color::White);
        assert_eq!(game.stones().len(), 1);
    }

    #[test]
    fn test_wrong_color_rejected() {
        let mut game = humans();
        let result = game.place(Stone::new(0, 0, Color::White));
        assert!(!result.is_success());
        assert_eq!(
            result.error(),
            Some(PlacementError::WrongTurn {
                expected: Color::Black
            })
        );
        assert!(game.stones().is_empty());
        assert!(game.is_blacks_turn());
    }

    #[test]
    fn test_black_wins_row() {
        let mut game = humans();
        let black = [(1, 1), (1, 2), (1, 3), (1, 4)];
        let white = [(5, 5), (9, 2), (12, 12)];
        for (i, &(r, c)) in black.iter().enumerate() {
            assert!(game.place(stone(&game, r, c)).is_success());
            if let Some(&(wr, wc)) = white.get(i) {
                assert!(game.place(stone(&game, wr, wc)).is_success());
            } else {
                // Fourth white reply
                assert!(game.place(stone(&game, 15, 15)).is_success());
            }
        }
        let result = game.place(stone(&game, 1, 5));
        assert!(result.is_success());
        assert_eq!(result.status(), GameStatus::Won(Color::Black));
        assert_eq!(result.message(), "George wins!");
        assert!(game.is_over());
    }

    #[test]
    fn test_current_frozen_after_win() {
        let mut game = humans();
        for col in 1..=4 {
            game.place(stone(&game, 3, col));
            game.place(stone(&game, 10, col));
        }
        game.place(stone(&game, 3, 5));
        assert_eq!(game.status(), GameStatus::Won(Color::Black));
        assert_eq!(game.current().name(), "George");
        assert!(game.is_blacks_turn());
    }

    #[test]
    fn test_no_placement_after_game_over() {
        let mut game = humans();
        for col in 1..=4 {
            game.place(stone(&game, 3, col));
            game.place(stone(&game, 10, col));
        }
        game.place(stone(&game, 3, 5));
        let before = game.stones().len();

        let result = game.place(Stone::from_one_based(7, 7, Color::White));
        assert!(!result.is_success());
        assert_eq!(result.error(), Some(PlacementError::GameOver));
        assert_eq!(result.status(), GameStatus::Won(Color::Black));
        assert_eq!(game.stones().len(), before);
    }

    #[test]
    fn test_seeded_black_assignment_is_deterministic() {
        let names = |seed: u64| {
            let game = Game::with_rng(
                Box::new(HumanPlayer::new("one")),
                Box::new(HumanPlayer::new("two")),
                &mut StdRng::seed_from_u64(seed),
            );
            game.current().name().to_string()
        };

        for seed in 0..16 {
            assert_eq!(names(seed), names(seed));
        }
        let firsts: Vec<String> = (0..64).map(names).collect();
        assert!(firsts.iter().any(|n| n == "one"));
        assert!(firsts.iter().any(|n| n == "two"));
    }

    #[test]
    fn test_rename_current_player() {
        let mut game = humans();
        game.current_mut().set_name("Georgina".to_string());
        assert_eq!(game.player(Color::Black).name(), "Georgina");
        assert_eq!(game.player(Color::White).name(), "Jim");
    }

    #[test]
    fn test_generate_move_uses_current_player() {
        let mut game = Game::seated(
            Box::new(RandomPlayer::seeded(3)),
            Box::new(HumanPlayer::new("Jim")),
        );
        let proposed = game.generate_move().unwrap();
        assert_eq!(proposed.color(), Color::Black);
        assert!(game.place(proposed).is_success());

        assert!(game.generate_move().is_none());
    }
}
