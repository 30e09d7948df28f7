//! The mutable 9×9 grid and its constraint checks.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, Position};

/// A 9×9 sudoku board.
///
/// Each cell holds `Some(digit)` or `None` for empty. The board is a plain
/// value type: cloning it yields an independent snapshot, which is how the
/// solver reports observations without retaining references into the grid.
///
/// The board never enforces the sudoku constraint on mutation;
/// [`check_consistency`](Self::check_consistency) validates the whole grid
/// up front and [`is_legal_placement`](Self::is_legal_placement) answers
/// whether a single placement would introduce a conflict.
///
/// # Examples
///
/// ```
/// use sudovis_core::{Board, Digit, Position};
///
/// let mut board = Board::new();
/// assert_eq!(board.empty_count(), 81);
///
/// board.set(Position::new(0, 0), Digit::D5);
/// assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
/// assert!(!board.is_legal_placement(Position::new(8, 0), Digit::D5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Digit>; 9]; 9],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.y() as usize][pos.x() as usize]
    }

    /// Places `digit` at `pos`, overwriting any previous value.
    pub const fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.y() as usize][pos.x() as usize] = Some(digit);
    }

    /// Empties the cell at `pos`.
    pub const fn clear(&mut self, pos: Position) {
        self.cells[pos.y() as usize][pos.x() as usize] = None;
    }

    /// Returns the first empty cell in row-major order, or `None` if the
    /// board is completely filled.
    ///
    /// This is the cell-selection rule of the backtracking search: row 0 left
    /// to right, then row 1, and so on.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self.get(pos).is_none())
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.get(pos).is_none())
            .count()
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Returns `true` if placing `digit` at `pos` would not conflict with the
    /// row, column, or 3×3 box of `pos`.
    ///
    /// The cell at `pos` itself participates in the scans; callers are
    /// expected to query before setting the cell, in which case it is empty
    /// and cannot match.
    #[must_use]
    pub fn is_legal_placement(&self, pos: Position, digit: Digit) -> bool {
        for i in 0..9 {
            if self.get(Position::new(i, pos.y())) == Some(digit)
                || self.get(Position::new(pos.x(), i)) == Some(digit)
            {
                return false;
            }
        }
        let origin = pos.box_origin();
        for dy in 0..3 {
            for dx in 0..3 {
                let cell = Position::new(origin.x() + dx, origin.y() + dy);
                if self.get(cell) == Some(digit) {
                    return false;
                }
            }
        }
        true
    }

    /// Validates that no filled cell conflicts with another filled cell in
    /// its row, column, or 3×3 box.
    ///
    /// The solver runs this once before searching, so that a contradictory
    /// input grid is rejected with a distinct error instead of silently
    /// surfacing as an unsolvable puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError`] naming the first conflicting cell found
    /// in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudovis_core::{Board, Digit, Position};
    ///
    /// let mut board = Board::new();
    /// board.set(Position::new(0, 0), Digit::D5);
    /// board.set(Position::new(1, 0), Digit::D5);
    ///
    /// let err = board.check_consistency().unwrap_err();
    /// assert_eq!(err.position, Position::new(0, 0));
    /// assert_eq!(err.digit, Digit::D5);
    /// ```
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        for pos in Position::ALL {
            let Some(digit) = self.get(pos) else {
                continue;
            };
            for peer in Self::peers(pos) {
                if self.get(peer) == Some(digit) {
                    return Err(ConsistencyError {
                        position: pos,
                        digit,
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the positions sharing a row, column, or box with `pos`,
    /// excluding `pos` itself. Positions in more than one shared house are
    /// yielded more than once, which is harmless for conflict scans.
    fn peers(pos: Position) -> impl Iterator<Item = Position> {
        let row = (0..9).map(move |x| Position::new(x, pos.y()));
        let column = (0..9).map(move |y| Position::new(pos.x(), y));
        let origin = pos.box_origin();
        let boxed = (0..9).map(move |i| Position::new(origin.x() + i % 3, origin.y() + i / 3));
        row.chain(column).chain(boxed).filter(move |&p| p != pos)
    }
}

impl Display for Board {
    /// Formats the board in the same grid-string shape [`FromStr`] accepts:
    /// one line per row, `_` for empty cells, a space between 3-column
    /// groups.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            for x in 0..9 {
                if x > 0 && x % 3 == 0 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(x, y)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
            if y < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses a grid string.
    ///
    /// Digits 1-9 are filled cells; `.`, `_`, and `0` are empty cells; all
    /// whitespace is ignored. Exactly 81 cells are required.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudovis_core::{Board, Digit, Position};
    ///
    /// let board: Board = "
    ///     53_ _7_ ___
    ///     6__ 195 ___
    ///     _98 ___ _6_
    ///     8__ _6_ __3
    ///     4__ 8_3 __1
    ///     7__ _2_ __6
    ///     _6_ ___ 28_
    ///     ___ 419 __5
    ///     ___ _8_ _79
    /// "
    /// .parse()
    /// .unwrap();
    ///
    /// assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
    /// assert_eq!(board.get(Position::new(2, 0)), None);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::new();
        let mut count = 0_usize;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let cell = match ch {
                '.' | '_' | '0' => None,
                '1'..='9' => {
                    // In range by the match arm, so the cast cannot lose digits.
                    #[expect(clippy::cast_possible_truncation)]
                    let value = ch.to_digit(10).unwrap_or_default() as u8;
                    Some(Digit::from_value(value))
                }
                _ => return Err(BoardParseError::InvalidCharacter { ch }),
            };
            if count >= 81 {
                return Err(BoardParseError::WrongCellCount { count: count + 1 });
            }
            if let Some(digit) = cell {
                board.set(Position::ALL[count], digit);
            }
            count += 1;
        }
        if count != 81 {
            return Err(BoardParseError::WrongCellCount { count });
        }
        Ok(board)
    }
}

/// A conflict between two filled cells sharing a row, column, or box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("digit {digit} at {position} conflicts with a row, column, or box peer")]
pub struct ConsistencyError {
    /// The first cell (in row-major order) involved in a conflict.
    pub position: Position,
    /// The duplicated digit.
    pub digit: Digit,
}

/// Errors that can occur when parsing a grid string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// The string contains a character that is neither a cell nor whitespace.
    #[display("invalid character in grid string: {ch:?}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
    /// The string does not contain exactly 81 cells.
    #[display("expected 81 cells in grid string, found {count}")]
    WrongCellCount {
        /// The number of cells encountered.
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// A full valid grid built from the cyclic-shift pattern.
    const SOLVED: &str = "
        123 456 789
        456 789 123
        789 123 456
        234 567 891
        567 891 234
        891 234 567
        345 678 912
        678 912 345
        912 345 678
    ";

    fn solved_board() -> Board {
        SOLVED.parse().unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_count(), 81);
        assert_eq!(board.first_empty(), Some(Position::new(0, 0)));
        assert!(!board.is_filled());
        assert!(board.check_consistency().is_ok());
    }

    #[test]
    fn test_set_clear_round_trip() {
        let mut board = Board::new();
        let pos = Position::new(3, 7);

        board.set(pos, Digit::D4);
        assert_eq!(board.get(pos), Some(Digit::D4));
        assert_eq!(board.empty_count(), 80);

        board.clear(pos);
        assert_eq!(board.get(pos), None);
        assert_eq!(board.empty_count(), 81);
    }

    #[test]
    fn test_first_empty_is_row_major() {
        let mut board = solved_board();
        board.clear(Position::new(6, 4));
        board.clear(Position::new(2, 1));
        assert_eq!(board.first_empty(), Some(Position::new(2, 1)));

        board.clear(Position::new(8, 0));
        assert_eq!(board.first_empty(), Some(Position::new(8, 0)));
    }

    #[test]
    fn test_legal_placement_row_column_box() {
        let mut board = Board::new();
        board.set(Position::new(4, 4), Digit::D5);

        // Same row
        assert!(!board.is_legal_placement(Position::new(0, 4), Digit::D5));
        // Same column
        assert!(!board.is_legal_placement(Position::new(4, 8), Digit::D5));
        // Same box
        assert!(!board.is_legal_placement(Position::new(3, 3), Digit::D5));
        // Unrelated cell
        assert!(board.is_legal_placement(Position::new(0, 0), Digit::D5));
        // Different digit next to the 5
        assert!(board.is_legal_placement(Position::new(3, 3), Digit::D6));
    }

    #[test]
    fn test_legal_placement_on_filled_board_is_always_false() {
        let board = solved_board();
        for pos in Position::ALL {
            for digit in Digit::ALL {
                assert!(!board.is_legal_placement(pos, digit));
            }
        }
    }

    #[test]
    fn test_consistency_detects_row_duplicate() {
        let mut board = Board::new();
        board.set(Position::new(0, 0), Digit::D5);
        board.set(Position::new(5, 0), Digit::D5);

        let err = board.check_consistency().unwrap_err();
        assert_eq!(err.position, Position::new(0, 0));
        assert_eq!(err.digit, Digit::D5);
    }

    #[test]
    fn test_consistency_detects_column_duplicate() {
        let mut board = Board::new();
        board.set(Position::new(2, 1), Digit::D7);
        board.set(Position::new(2, 8), Digit::D7);
        assert!(board.check_consistency().is_err());
    }

    #[test]
    fn test_consistency_detects_box_duplicate() {
        let mut board = Board::new();
        board.set(Position::new(0, 0), Digit::D3);
        board.set(Position::new(2, 2), Digit::D3);
        assert!(board.check_consistency().is_err());
    }

    #[test]
    fn test_consistency_accepts_solved_grid() {
        assert!(solved_board().check_consistency().is_ok());
        assert!(solved_board().is_filled());
    }

    #[test]
    fn test_parse_rejects_invalid_character() {
        let err = "x".repeat(81).parse::<Board>().unwrap_err();
        assert_eq!(err, BoardParseError::InvalidCharacter { ch: 'x' });
    }

    #[test]
    fn test_parse_rejects_wrong_cell_count() {
        let err = "123".parse::<Board>().unwrap_err();
        assert_eq!(err, BoardParseError::WrongCellCount { count: 3 });

        let err = "1".repeat(82).parse::<Board>().unwrap_err();
        assert_eq!(err, BoardParseError::WrongCellCount { count: 82 });
    }

    #[test]
    fn test_parse_accepts_dot_underscore_zero_for_empty() {
        let board: Board = ".".repeat(27).chars()
            .chain("_".repeat(27).chars())
            .chain("0".repeat(27).chars())
            .collect::<String>()
            .parse()
            .unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_parse_round_trip() {
        let board = solved_board();
        let round_tripped: Board = board.to_string().parse().unwrap();
        assert_eq!(round_tripped, board);

        let mut partial = board;
        partial.clear(Position::new(0, 0));
        partial.clear(Position::new(8, 8));
        let round_tripped: Board = partial.to_string().parse().unwrap();
        assert_eq!(round_tripped, partial);
    }

    proptest! {
        /// Any sub-grid of a valid solution stays consistent, and the display
        /// form parses back to the same board.
        #[test]
        fn prop_masked_solution_is_consistent(mask in prop::collection::vec(any::<bool>(), 81)) {
            let mut board = solved_board();
            for (keep, pos) in mask.iter().zip(Position::ALL) {
                if !keep {
                    board.clear(pos);
                }
            }

            prop_assert!(board.check_consistency().is_ok());
            prop_assert_eq!(
                board.first_empty().is_none(),
                board.empty_count() == 0
            );

            let round_tripped: Board = board.to_string().parse().unwrap();
            prop_assert_eq!(round_tripped, board);
        }
    }
}
