//! Plain-text grid rendering for the terminal.

use sudovis_core::{Board, Position};

/// Number of terminal lines one rendered grid occupies.
pub const GRID_HEIGHT: usize = 11;

/// Formats the board as an 11-line text grid with box separators.
///
/// Empty cells render as `.`. The output always spans exactly
/// [`GRID_HEIGHT`] lines (without a trailing newline), so a renderer can
/// rewind the cursor by a fixed amount between frames.
///
/// ```text
/// 5 3 . | . 7 . | . . .
/// 6 . . | 1 9 5 | . . .
/// . 9 8 | . . . | . 6 .
/// ------+-------+------
/// ...
/// ```
#[must_use]
pub fn format_grid(board: &Board) -> String {
    let mut out = String::new();
    for y in 0..9 {
        if y > 0 && y % 3 == 0 {
            out.push_str("------+-------+------\n");
        }
        for x in 0..9 {
            if x > 0 {
                out.push(' ');
                if x % 3 == 0 {
                    out.push_str("| ");
                }
            }
            match board.get(Position::new(x, y)) {
                Some(digit) => out.push_str(&digit.to_string()),
                None => out.push('.'),
            }
        }
        if y < 8 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_spans_fixed_height() {
        assert_eq!(format_grid(&Board::new()).lines().count(), GRID_HEIGHT);
    }

    #[test]
    fn test_classic_first_row() {
        let board: Board = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap();

        let rendered = format_grid(&board);
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("5 3 . | . 7 . | . . ."));
        assert_eq!(lines.next(), Some("6 . . | 1 9 5 | . . ."));
        assert_eq!(lines.nth(1), Some("------+-------+------"));
    }

    #[test]
    fn test_empty_board_renders_dots_only() {
        let rendered = format_grid(&Board::new());
        assert!(!rendered.chars().any(|ch| ch.is_ascii_digit()));
        assert_eq!(rendered.matches('.').count(), 81);
    }
}
