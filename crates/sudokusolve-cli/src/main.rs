//! Command-line Sudoku solver.
//!
//! Reads a board as 81 digits (`0` for empty), solves it, and prints the
//! solutions as plain-text grids together with a difficulty score.
//!
//! ```sh
//! sudokusolve --board-preset 0
//! sudokusolve --input-board "530070000..." --max-results 2
//! ```

mod presets;
mod render;

use std::process::ExitCode;

use clap::Parser;
use sudokusolve_solver::{InputError, solve, validator};

/// Multi-solution boards can have absurdly many solutions; cap the grids
/// printed and summarize the rest.
const MAX_BOARDS_TO_DISPLAY: usize = 5;

#[derive(Debug, Parser)]
#[command(name = "sudokusolve", version, about = "Solve any Sudoku puzzle")]
struct Args {
    /// Board to solve, as 81 digits (0 = empty). Other characters are ignored.
    #[arg(
        short,
        long,
        value_name = "BOARD",
        conflicts_with = "board_preset",
        required_unless_present = "board_preset"
    )]
    input_board: Option<String>,

    /// Solve one of the built-in puzzles instead.
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=6))]
    board_preset: Option<u8>,

    /// Maximum number of solutions to find.
    #[arg(short, long, value_name = "COUNT", default_value_t = 1)]
    max_results: usize,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), InputError> {
    let input = match args.board_preset {
        Some(preset) => presets::PRESETS[usize::from(preset)].to_string(),
        None => validator::clean(args.input_board.as_deref().unwrap_or_default()),
    };
    log::info!("input board: {input:?}, max results: {}", args.max_results);

    let report = solve(&input, validator::validate_solved_board, args.max_results)?;
    let found = report.solutions().len();

    if found == 0 {
        println!("No solution found.");
        return Ok(());
    }

    let plural = if found == 1 { "" } else { "s" };
    println!("Found {found} solution{plural}:");
    for solution in report.solutions().iter().take(MAX_BOARDS_TO_DISPLAY) {
        println!();
        print!("{}", render::render_grid(solution));
    }
    if found > MAX_BOARDS_TO_DISPLAY {
        println!();
        println!("(showing the first {MAX_BOARDS_TO_DISPLAY} of {found} solutions)");
    }
    println!();
    println!("Difficulty: {}", report.difficulty());
    Ok(())
}
