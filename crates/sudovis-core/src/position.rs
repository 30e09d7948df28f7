//! Board coordinates and scan ordering.

use std::fmt::{self, Display};

/// A cell position on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). [`Position::ALL`] enumerates the cells in row-major order, which
/// is the scan order the solver uses to pick the next cell to branch on.
///
/// # Examples
///
/// ```
/// use sudovis_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 2);
/// assert_eq!(pos.box_index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    ///
    /// Row 0 left to right, then row 1, and so on. The solver branches on the
    /// first empty cell in this order, so the order is part of the observable
    /// search contract.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index of the 3×3 box containing this position.
    ///
    /// Boxes are numbered 0-8, left to right, top to bottom.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the top-left position of the 3×3 box containing this position.
    #[must_use]
    pub const fn box_origin(self) -> Self {
        Self {
            x: (self.x / 3) * 3,
            y: (self.y / 3) * 3,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL.len(), 81);
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[8], Position::new(8, 0));
        assert_eq!(Position::ALL[9], Position::new(0, 1));
        assert_eq!(Position::ALL[80], Position::new(8, 8));

        for window in Position::ALL.windows(2) {
            let (a, b) = (window[0], window[1]);
            assert!((a.y(), a.x()) < (b.y(), b.x()), "not row-major: {a} then {b}");
        }
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(8, 0).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(0, 8).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_box_origin() {
        assert_eq!(Position::new(4, 2).box_origin(), Position::new(3, 0));
        assert_eq!(Position::new(8, 8).box_origin(), Position::new(6, 6));
        assert_eq!(Position::new(0, 0).box_origin(), Position::new(0, 0));
    }

    #[test]
    fn test_boxes_partition_the_grid() {
        let mut counts = [0_usize; 9];
        for pos in Position::ALL {
            counts[usize::from(pos.box_index())] += 1;
        }
        assert_eq!(counts, [9; 9]);
    }

    #[test]
    #[should_panic(expected = "x < 9 && y < 9")]
    fn test_new_out_of_range_panics() {
        let _ = Position::new(9, 0);
    }
}
