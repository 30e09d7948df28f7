//! Terminal visualizer for the backtracking sudoku solver.
//!
//! Solves a puzzle on a worker thread and animates every placement and
//! retraction in place on the terminal, redrawing the grid for each step.

use std::{fs, path::PathBuf, process::ExitCode, time::Duration};

use clap::Parser;
use sudovis_core::Board;

use crate::worker::SolveEvent;

mod render;
mod worker;

/// The sample puzzle bundled with the app.
const SAMPLE: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

#[derive(Debug, Parser)]
#[command(
    name = "sudovis",
    version,
    about = "Watch a backtracking solver work through a sudoku grid"
)]
struct Args {
    /// Pause between visualized steps, in milliseconds.
    #[arg(long, default_value_t = 15)]
    delay: u64,

    /// Puzzle file in grid-string format: digits for givens, `.`/`_`/`0`
    /// for empty cells, whitespace ignored. Defaults to the built-in sample.
    #[arg(long)]
    puzzle: Option<PathBuf>,

    /// Cancel the solve after this many visualized steps.
    #[arg(long)]
    max_steps: Option<usize>,

    /// Print only the final result, skipping the step animation.
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum AppError {
    #[display("failed to read puzzle file: {_0}")]
    #[from]
    Io(std::io::Error),
    #[display("failed to parse puzzle: {_0}")]
    #[from]
    Parse(sudovis_core::BoardParseError),
    #[display("{_0}")]
    #[from]
    Solver(sudovis_solver::SolverError),
    #[display("solver thread disconnected unexpectedly")]
    WorkerDisconnected,
}

/// How a run ended, as far as the exit code is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunOutcome {
    Solved,
    Unsolvable,
    /// The solve was stopped by a user-requested step limit.
    Stopped,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(RunOutcome::Solved | RunOutcome::Stopped) => ExitCode::SUCCESS,
        Ok(RunOutcome::Unsolvable) => {
            eprintln!("unsolvable puzzle");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Maps the solver's verdict to a run outcome.
///
/// A cancellation the user asked for (via `--max-steps`) is an expected
/// stop; any other cancellation is surfaced as an error.
fn interpret_result(
    result: Result<bool, sudovis_solver::SolverError>,
    stop_requested: bool,
) -> Result<RunOutcome, AppError> {
    match result {
        Ok(true) => Ok(RunOutcome::Solved),
        Ok(false) => Ok(RunOutcome::Unsolvable),
        Err(sudovis_solver::SolverError::Cancelled) if stop_requested => Ok(RunOutcome::Stopped),
        Err(err) => Err(err.into()),
    }
}

fn run(args: &Args) -> Result<RunOutcome, AppError> {
    let board: Board = match &args.puzzle {
        Some(path) => fs::read_to_string(path)?.parse()?,
        None => SAMPLE.parse()?,
    };
    log::info!("solving a grid with {} empty cells", board.empty_count());

    let step_delay = if args.quiet {
        Duration::ZERO
    } else {
        Duration::from_millis(args.delay)
    };
    let handle = worker::spawn_solve(board, step_delay);

    if !args.quiet {
        println!("{}", render::format_grid(&board));
    }

    let mut steps = 0_usize;
    let mut limit_reached = false;
    loop {
        match handle.recv().ok_or(AppError::WorkerDisconnected)? {
            SolveEvent::Step(snapshot) => {
                steps += 1;
                if !args.quiet {
                    // Rewind over the previous frame and redraw in place.
                    print!("\x1b[{}A", render::GRID_HEIGHT);
                    println!("{}", render::format_grid(&snapshot));
                }
                if args.max_steps == Some(steps) {
                    log::info!("step limit reached, cancelling solve");
                    limit_reached = true;
                    handle.cancel();
                }
            }
            SolveEvent::Finished { result, board } => {
                log::debug!("worker delivered {steps} step snapshots");
                let outcome = interpret_result(result, limit_reached)?;
                match outcome {
                    RunOutcome::Solved if args.quiet => {
                        println!("{}", render::format_grid(&board));
                    }
                    RunOutcome::Stopped => println!("stopped after {steps} steps"),
                    RunOutcome::Solved | RunOutcome::Unsolvable => {}
                }
                return Ok(outcome);
            }
        }
    }
}
