//! Backtracking sudoku solver with a step-by-step observation trace.
//!
//! The solver fills empty cells in strict row-major order, trying digits in
//! ascending order, and reports the full board to a registered
//! [`BoardObserver`] after every placement and every retraction. The trace is
//! fully deterministic for a given input, which makes it suitable both for
//! driving a visualization and for testing against an exact expected
//! sequence.
//!
//! # Examples
//!
//! ```
//! use sudovis_core::Board;
//! use sudovis_solver::{BacktrackSolver, NullObserver};
//!
//! let mut board: Board = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let solver = BacktrackSolver::new();
//! let solved = solver.solve(&mut board, &mut NullObserver)?;
//! assert!(solved);
//! assert!(board.is_filled());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cancel;
pub mod observer;
pub mod solver;

pub use self::{
    cancel::CancelToken,
    observer::{BoardObserver, NullObserver, RecordingObserver},
    solver::{BacktrackSolver, SolveStats, SolverError},
};
