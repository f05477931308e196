//! Board-string validation.
//!
//! These are pure functions over the 81-character board format (`0` for
//! empty, `1-9` for givens). They run once, before the search starts;
//! branches generated during the search are consistent by construction and
//! are never re-validated here. The solved-board check doubles as the
//! default validator injected into [`solve`](crate::solve).

use sudokusolve_core::{Digit, DigitSet, House};
use tinyvec::ArrayVec;

/// Strips every character outside `0-9` from `input`.
///
/// This is the tolerant front door for user-supplied board strings: spaces,
/// newlines, `.` separators and the like are dropped, and the result can
/// then be checked with [`validate_input_board`].
///
/// # Examples
///
/// ```
/// use sudokusolve_solver::validator::clean;
///
/// assert_eq!(clean("53. |07"), "5307");
/// ```
#[must_use]
pub fn clean(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Returns `true` if `board` is exactly 81 characters, all digits `0-9`.
#[must_use]
pub fn validate_structure(board: &str) -> bool {
    board.len() == 81 && board.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if `board` is structurally valid and no digit 1-9 appears
/// more than once in any row, column, or box.
///
/// Zeros (empty cells) are unconstrained, so an all-zero board is valid
/// input. Fails closed: any violation makes the whole board invalid.
///
/// # Examples
///
/// ```
/// use sudokusolve_solver::validator::validate_input_board;
///
/// assert!(validate_input_board(&"0".repeat(81)));
/// assert!(!validate_input_board(&"0".repeat(80)));
/// ```
#[must_use]
pub fn validate_input_board(board: &str) -> bool {
    validate_structure(board)
        && all_houses(board.as_bytes()).all(|house| {
            let mut seen = DigitSet::EMPTY;
            house
                .into_iter()
                .filter_map(Digit::from_ascii)
                .all(|digit| seen.insert(digit))
        })
}

/// Returns `true` if `board` is a completely solved, rule-consistent grid:
/// 81 digits with every row, column, and box holding exactly the digits 1-9.
///
/// # Examples
///
/// ```
/// use sudokusolve_solver::validator::validate_solved_board;
///
/// // All ones is complete but not rule-consistent.
/// assert!(!validate_solved_board(&"1".repeat(81)));
/// ```
#[must_use]
pub fn validate_solved_board(board: &str) -> bool {
    validate_structure(board)
        && all_houses(board.as_bytes()).all(|house| {
            let digits: DigitSet = house.into_iter().filter_map(Digit::from_ascii).collect();
            digits == DigitSet::FULL
        })
}

/// Yields the nine bytes of every house (rows, then columns, then boxes).
///
/// `board` must already be known to be 81 bytes long.
fn all_houses(board: &[u8]) -> impl Iterator<Item = ArrayVec<[u8; 9]>> + '_ {
    House::ALL
        .into_iter()
        .map(|house| house.cells().into_iter().map(|cell| board[cell]).collect())
}
