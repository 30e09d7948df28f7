//! The step-observation contract between the solver and a presentation layer.

use sudovis_core::Board;

/// Receives the full board state after every solver mutation.
///
/// The solver invokes [`on_board_changed`](Self::on_board_changed)
/// synchronously after each placement and each retraction, in strict
/// chronological order matching the depth-first traversal. Each call carries
/// the complete board at that instant, not a diff; implementations that need
/// to keep a snapshot should clone the board, since the reference is only
/// valid for the duration of the call.
///
/// Observers must not fail. Any error while rendering or forwarding a
/// snapshot is the presentation layer's responsibility.
pub trait BoardObserver {
    /// Called after every placement and every retraction.
    fn on_board_changed(&mut self, board: &Board);
}

/// An observer that discards every snapshot.
///
/// Useful for headless solves where only the result matters.
///
/// # Examples
///
/// ```
/// use sudovis_core::Board;
/// use sudovis_solver::{BacktrackSolver, NullObserver};
///
/// let mut board = Board::new();
/// let solved = BacktrackSolver::new().solve(&mut board, &mut NullObserver)?;
/// assert!(solved);
/// # Ok::<(), sudovis_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl BoardObserver for NullObserver {
    fn on_board_changed(&mut self, _board: &Board) {}
}

/// An observer that records every snapshot it receives.
///
/// Mainly used by tests to assert on the exact observation sequence, which is
/// deterministic for a fixed input board.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    snapshots: Vec<Board>,
}

impl RecordingObserver {
    /// Creates an observer with no recorded snapshots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded snapshots in delivery order.
    #[must_use]
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns the number of recorded snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if no snapshot has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl BoardObserver for RecordingObserver {
    fn on_board_changed(&mut self, board: &Board) {
        self.snapshots.push(*board);
    }
}

#[cfg(test)]
mod tests {
    use sudovis_core::{Digit, Position};

    use super::*;

    #[test]
    fn test_null_observer_ignores_snapshots() {
        let mut observer = NullObserver;
        observer.on_board_changed(&Board::new());
    }

    #[test]
    fn test_recording_observer_keeps_delivery_order() {
        let mut observer = RecordingObserver::new();
        assert!(observer.is_empty());

        let mut board = Board::new();
        observer.on_board_changed(&board);
        board.set(Position::new(0, 0), Digit::D1);
        observer.on_board_changed(&board);

        assert_eq!(observer.len(), 2);
        assert_eq!(observer.snapshots()[0], Board::new());
        assert_eq!(observer.snapshots()[1].get(Position::new(0, 0)), Some(Digit::D1));
    }

    #[test]
    fn test_recorded_snapshots_are_independent_of_later_mutation() {
        let mut observer = RecordingObserver::new();
        let mut board = Board::new();
        observer.on_board_changed(&board);

        board.set(Position::new(4, 4), Digit::D9);
        assert_eq!(observer.snapshots()[0], Board::new());
    }
}
