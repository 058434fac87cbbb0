//! Text rendering of the board for the console

use std::fmt::Write;

use crate::{Stone, BOARD_SIZE};

/// Marker for an empty cell
pub const EMPTY_CELL: char = '_';

/// Render the board described by `stones` as text.
///
/// Rows and columns are labelled 1-based with two digits. Black stones show
/// as `B`, white as `W`, empty cells as `_`. Stones off the board are ignored.
pub fn render_board(stones: &[Stone]) -> String {
    let mut grid = [[EMPTY_CELL; BOARD_SIZE]; BOARD_SIZE];
    for stone in stones.iter().filter(|s| s.is_on_board()) {
        grid[stone.row() as usize][stone.col() as usize] = stone.color().symbol();
    }

    let mut out = String::with_capacity((BOARD_SIZE + 1) * (BOARD_SIZE * 3 + 4));

    // Column labels
    out.push_str("   ");
    for col in 1..=BOARD_SIZE {
        let _ = write!(out, "{col:02} ");
    }
    out.push('\n');

    for (row, cells) in grid.iter().enumerate() {
        let _ = write!(out, "{:02} ", row + 1);
        for cell in cells {
            let _ = write!(out, " {cell} ");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_clean_board() {
        let text = render_board(&[]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), BOARD_SIZE + 1);
        assert_eq!(lines[0], "   01 02 03 04 05 06 07 08 09 10 11 12 13 14 15 ");
        assert_eq!(
            lines[1].trim_end(),
            "01  _  _  _  _  _  _  _  _  _  _  _  _  _  _  _"
        );
        assert!(lines[15].starts_with("15  _"));
    }

    #[test]
    fn test_stones_rendered() {
        let stones = [
            Stone::new(0, 0, Color::Black),
            Stone::new(14, 14, Color::White),
            Stone::new(2, 4, Color::Black),
        ];
        let text = render_board(&stones);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with("01  B  _"));
        assert!(lines[15].trim_end().ends_with("_  W"));
        assert_eq!(
            lines[3].trim_end(),
            "03  _  _  _  _  B  _  _  _  _  _  _  _  _  _  _"
        );
    }
}
