//! Example demonstrating a traced solve of the bundled sample puzzle.
//!
//! This example shows how to:
//! - Parse a grid string into a `Board`
//! - Solve it with a `RecordingObserver` collecting every step
//! - Inspect the search statistics and the final solution
//!
//! # Usage
//!
//! ```sh
//! cargo run --example trace_sample
//! ```

use sudovis_core::Board;
use sudovis_solver::{BacktrackSolver, RecordingObserver, SolveStats};

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

fn main() {
    let mut board: Board = SAMPLE.parse().expect("sample grid is well-formed");
    let problem = board;

    let solver = BacktrackSolver::new();
    let mut observer = RecordingObserver::new();
    let mut stats = SolveStats::default();

    let solved = solver
        .solve_with_stats(&mut board, &mut observer, &mut stats)
        .expect("sample grid is consistent");
    assert!(solved);

    println!("Problem:");
    println!("{problem}");
    println!();
    println!("Solution:");
    println!("{board}");
    println!();
    println!("Trace:");
    println!("  placements: {}", stats.placements());
    println!("  backtracks: {}", stats.backtracks());
    println!("  snapshots:  {}", observer.len());
}
