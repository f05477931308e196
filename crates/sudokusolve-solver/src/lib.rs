//! Sudoku solving: input validation, constraint propagation, and
//! exhaustive backtracking search.
//!
//! The crate exposes one main operation, [`solve`]: given an 81-character
//! board string, an injected solved-board validator, and a solution bound,
//! it returns every valid completion it finds (up to the bound) together
//! with a difficulty score. Invalid input is rejected up front as an
//! [`InputError`]; an unsatisfiable board is not an error, it just solves
//! to zero solutions.
//!
//! # Overview
//!
//! - [`validator`]: pure string checks for raw input and completed boards
//! - [`solve`] / [`parse_input`] / [`SolveReport`]: the solving engine
//!
//! # Examples
//!
//! ```
//! use sudokusolve_solver::{solve, validator};
//!
//! // An empty board is valid input; any completion will do.
//! let report = solve(&"0".repeat(81), validator::validate_solved_board, 1)?;
//! assert_eq!(report.solutions().len(), 1);
//! assert!(validator::validate_solved_board(&report.solutions()[0]));
//! # Ok::<(), sudokusolve_solver::InputError>(())
//! ```

pub mod validator;

mod engine;
mod error;

pub use self::{
    engine::{SolveReport, parse_input, solve},
    error::InputError,
};
