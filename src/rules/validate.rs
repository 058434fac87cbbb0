//! Move legality: bounds and occupancy

use crate::board::{Board, Stone};
use crate::error::PlacementError;

/// Check that a candidate stone may be placed on the board.
///
/// Bounds are checked before occupancy, so an off-board stone always reports
/// `OffBoard`. Color plays no part: a cell held by either color is a
/// duplicate. Pure; the board is not touched.
pub fn validate(board: &Board, candidate: &Stone) -> Result<(), PlacementError> {
    if !candidate.is_on_board() {
        return Err(PlacementError::OffBoard);
    }
    if board.is_occupied(candidate) {
        return Err(PlacementError::Duplicate);
    }
    Ok(())
}
