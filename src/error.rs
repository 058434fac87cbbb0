//! Error types for placement and the console front end

use crate::board::Color;

/// Reasons a stone placement is rejected.
///
/// The `Display` text is the message shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("Stone is off the board.")]
    OffBoard,

    #[error("Duplicate move.")]
    Duplicate,

    #[error("Game is already over.")]
    GameOver,

    #[error("It is {expected}'s turn.")]
    WrongTurn { expected: Color },
}

/// Errors that end a console session.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before the game finished")]
    InputClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_error_display() {
        assert_eq!(
            PlacementError::OffBoard.to_string(),
            "Stone is off the board."
        );
        assert_eq!(PlacementError::Duplicate.to_string(), "Duplicate move.");
        assert_eq!(
            PlacementError::GameOver.to_string(),
            "Game is already over."
        );
        assert_eq!(
            PlacementError::WrongTurn {
                expected: Color::White
            }
            .to_string(),
            "It is White's turn."
        );
    }

    #[test]
    fn test_console_error_display() {
        assert_eq!(
            ConsoleError::InputClosed.to_string(),
            "input closed before the game finished"
        );
    }
}
