//! The backtracking search itself.

use std::{thread, time::Duration};

use sudovis_core::{Board, ConsistencyError, Digit};

use crate::{BoardObserver, CancelToken};

/// A naive backtracking solver that traces every search step.
///
/// The search strategy is fixed and part of the observable contract:
///
/// - the cell branched on at each depth is the first empty cell in row-major
///   order;
/// - candidate digits are tried in ascending order 1 through 9;
/// - success propagates immediately without undoing the placement
///   (commit-on-success), so the first solution found is the one returned.
///
/// After each placement and each retraction the solver reports the full board
/// to the observer and then pauses for the configured step delay, so that a
/// presentation layer has time to render the step. The delay defaults to zero
/// and should stay zero for headless runs.
///
/// # Examples
///
/// ```
/// use sudovis_core::Board;
/// use sudovis_solver::{BacktrackSolver, RecordingObserver};
///
/// let mut board = Board::new();
/// let mut observer = RecordingObserver::new();
///
/// let solved = BacktrackSolver::new().solve(&mut board, &mut observer)?;
/// assert!(solved);
/// assert!(board.is_filled());
/// // Every placement and retraction produced one snapshot.
/// assert!(!observer.is_empty());
/// # Ok::<(), sudovis_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BacktrackSolver {
    step_delay: Duration,
    cancel: CancelToken,
}

impl BacktrackSolver {
    /// Creates a solver with zero step delay and a fresh cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pause performed after each observation.
    ///
    /// The delay only paces the visualization; it has no effect on the search
    /// itself. It is skipped while a cancelled search unwinds.
    #[must_use]
    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    /// Replaces the cancellation token.
    ///
    /// Hold a clone of the token to be able to abort the search from another
    /// thread.
    #[must_use]
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Returns a clone of the solver's cancellation token.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Solves the board in place, reporting every step to `observer`.
    ///
    /// On `Ok(true)` the board has been mutated into a complete grid
    /// satisfying the sudoku constraint, with every originally filled cell
    /// unchanged. On `Ok(false)` no solution is reachable from the input and
    /// the board equals the input exactly (all tentative placements undone).
    ///
    /// # Errors
    ///
    /// - [`SolverError::Inconsistent`] if the input grid already contains a
    ///   duplicate in a row, column, or box. The pre-check runs before any
    ///   search step, so the board is untouched.
    /// - [`SolverError::Cancelled`] if the cancellation token was tripped.
    ///   The partial search is unwound first, so the board again equals the
    ///   input.
    pub fn solve<O>(&self, board: &mut Board, observer: &mut O) -> Result<bool, SolverError>
    where
        O: BoardObserver + ?Sized,
    {
        let mut stats = SolveStats::default();
        self.solve_with_stats(board, observer, &mut stats)
    }

    /// Like [`solve`](Self::solve), but accumulates search statistics into
    /// `stats`.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve). Statistics accumulated up to the point
    /// of a cancellation are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudovis_core::Board;
    /// use sudovis_solver::{BacktrackSolver, NullObserver, SolveStats};
    ///
    /// let mut board = Board::new();
    /// let mut stats = SolveStats::default();
    ///
    /// let solved =
    ///     BacktrackSolver::new().solve_with_stats(&mut board, &mut NullObserver, &mut stats)?;
    /// assert!(solved);
    /// assert!(stats.placements() >= 81);
    /// # Ok::<(), sudovis_solver::SolverError>(())
    /// ```
    pub fn solve_with_stats<O>(
        &self,
        board: &mut Board,
        observer: &mut O,
        stats: &mut SolveStats,
    ) -> Result<bool, SolverError>
    where
        O: BoardObserver + ?Sized,
    {
        board.check_consistency()?;
        self.search(board, observer, stats)
    }

    fn search<O>(
        &self,
        board: &mut Board,
        observer: &mut O,
        stats: &mut SolveStats,
    ) -> Result<bool, SolverError>
    where
        O: BoardObserver + ?Sized,
    {
        if self.cancel.is_cancelled() {
            return Err(SolverError::Cancelled);
        }
        let Some(pos) = board.first_empty() else {
            // Invariant maintenance along the way makes a full board a
            // solution.
            return Ok(true);
        };

        for digit in Digit::ALL {
            if !board.is_legal_placement(pos, digit) {
                continue;
            }

            board.set(pos, digit);
            stats.placements += 1;
            self.report(board, observer);

            let outcome = self.search(board, observer, stats);
            if outcome == Ok(true) {
                // Commit on success: no undo, no further digits.
                return outcome;
            }

            board.clear(pos);
            stats.backtracks += 1;
            self.report(board, observer);
            // A cancelled descent still retracts before unwinding further.
            outcome?;
        }

        Ok(false)
    }

    fn report<O>(&self, board: &Board, observer: &mut O)
    where
        O: BoardObserver + ?Sized,
    {
        observer.on_board_changed(board);
        if !self.step_delay.is_zero() && !self.cancel.is_cancelled() {
            thread::sleep(self.step_delay);
        }
    }
}

/// Counters accumulated over one search.
///
/// One observation is emitted per placement and per backtrack, so the total
/// number of snapshots an observer receives is
/// `placements() + backtracks()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    placements: usize,
    backtracks: usize,
}

impl SolveStats {
    /// Returns the number of tentative digit placements performed.
    #[must_use]
    pub fn placements(&self) -> usize {
        self.placements
    }

    /// Returns the number of placements that were retracted.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }
}

/// Errors reported by [`BacktrackSolver::solve`].
///
/// Note that "no solution exists" is not an error: it is the `Ok(false)`
/// outcome of a completed search.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
)]
pub enum SolverError {
    /// The input grid violated the sudoku constraint before the search began.
    #[display("invalid initial state: {_0}")]
    #[from]
    Inconsistent(ConsistencyError),
    /// The cancellation token was tripped; the board has been restored.
    #[display("solve cancelled")]
    Cancelled,
}
