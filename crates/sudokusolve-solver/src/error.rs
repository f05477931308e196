//! Solver error types.

use derive_more::{Display, Error, From};
use sudokusolve_core::ParseBoardError;

/// Rejection of an input board, detected before any search work begins.
///
/// This is a usage error, distinct from "no solution found": a structurally
/// valid but unsatisfiable board solves to an empty solution list, not to an
/// `InputError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum InputError {
    /// The board string is not 81 characters of `0-9`.
    #[display("malformed board: {_0}")]
    Malformed(ParseBoardError),
    /// A digit 1-9 appears more than once in some row, column, or box.
    #[display("board repeats a digit within a row, column, or box")]
    #[from(ignore)]
    DuplicateDigit,
}
