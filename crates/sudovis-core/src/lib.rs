//! Core board model for the sudovis solver.
//!
//! This crate provides the data structures shared by the solver and any
//! presentation layer:
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`position`]: Board coordinates and scan ordering
//! - [`board`]: The mutable 9×9 grid, legality checks, and consistency
//!   validation
//!
//! # Examples
//!
//! ```
//! use sudovis_core::{Board, Digit, Position};
//!
//! let mut board = Board::new();
//! board.set(Position::new(4, 4), Digit::D5);
//!
//! // 5 is now blocked for every peer of (4, 4)
//! assert!(!board.is_legal_placement(Position::new(4, 7), Digit::D5));
//! assert!(board.is_legal_placement(Position::new(0, 0), Digit::D5));
//! ```

pub mod board;
pub mod digit;
pub mod position;

pub use self::{
    board::{Board, BoardParseError, ConsistencyError},
    digit::Digit,
    position::Position,
};
