//! Background solve dispatch using a worker thread and channel.
//!
//! The solver blocks for the duration of a solve, so the app runs it on a
//! dedicated thread and marshals each observation back over an `mpsc`
//! channel. The board moves onto the worker thread for the whole solve; the
//! consumer only ever sees owned snapshots.

use std::{
    sync::mpsc,
    thread,
    time::Duration,
};

use sudovis_core::Board;
use sudovis_solver::{BacktrackSolver, BoardObserver, CancelToken, SolverError};

/// An event produced by a background solve.
#[derive(Debug, Clone)]
pub enum SolveEvent {
    /// One observation: the full board after a placement or retraction.
    Step(Board),
    /// The solve finished; no further events follow.
    Finished {
        /// `Ok(true)` solved, `Ok(false)` unsolvable, or a solver error.
        result: Result<bool, SolverError>,
        /// The board as the solver left it (solved, or restored to the
        /// input on failure and cancellation).
        board: Board,
    },
}

/// A handle for consuming events from a background solve.
#[derive(Debug)]
pub struct SolveHandle {
    receiver: mpsc::Receiver<SolveEvent>,
    cancel: CancelToken,
}

impl SolveHandle {
    /// Blocks until the next event, or returns `None` if the worker is gone.
    ///
    /// Events arrive in strict chronological order; the last one is always
    /// [`SolveEvent::Finished`].
    pub fn recv(&self) -> Option<SolveEvent> {
        self.receiver.recv().ok()
    }

    /// Requests cancellation of the running solve.
    ///
    /// The solver notices before its next recursive descent, unwinds all
    /// tentative placements, and finishes with
    /// [`SolverError::Cancelled`].
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

/// Forwards each observation into the event channel.
struct ChannelObserver {
    sender: mpsc::Sender<SolveEvent>,
}

impl BoardObserver for ChannelObserver {
    fn on_board_changed(&mut self, board: &Board) {
        // A send failure means the consumer hung up; the solve keeps running
        // until it finishes or is cancelled.
        let _ = self.sender.send(SolveEvent::Step(*board));
    }
}

/// Starts solving `board` on a worker thread.
///
/// `step_delay` paces the solver between observations so the consumer has
/// time to render them; pass [`Duration::ZERO`] for an un-paced solve.
pub fn spawn_solve(board: Board, step_delay: Duration) -> SolveHandle {
    let cancel = CancelToken::new();
    let solver = BacktrackSolver::new()
        .with_step_delay(step_delay)
        .with_cancel_token(cancel.clone());

    let (sender, receiver) = mpsc::channel();
    let step_sender = sender.clone();
    thread::spawn(move || {
        let mut board = board;
        let mut observer = ChannelObserver { sender: step_sender };
        let result = solver.solve(&mut board, &mut observer);
        let _ = sender.send(SolveEvent::Finished { result, board });
    });

    SolveHandle { receiver, cancel }
}
