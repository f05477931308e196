//! The 81-cell sudoku board and its string format.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{digit::Digit, digit_set::DigitSet, house::House};

/// Error parsing a board from its 81-character string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The string did not contain exactly 81 characters.
    #[display("board must contain exactly 81 digits, got {len}")]
    WrongLength {
        /// Number of characters found.
        len: usize,
    },
    /// The string contained a character outside `0-9`.
    #[display("board contains {found:?}, which is not a digit 0-9")]
    InvalidCharacter {
        /// The offending character.
        found: char,
    },
}

/// A 9×9 sudoku board.
///
/// Cells are indexed 0-80 in row-major order (`index = row * 9 + column`);
/// each cell is either empty or holds a [`Digit`]. The 81-cell invariant is
/// the array type itself, so a `Board` can never have the wrong shape.
///
/// `Board` is `Copy`: the backtracking search snapshots boards onto its
/// guess stack, and sibling branches must never alias each other's state.
///
/// # String format
///
/// [`FromStr`] and [`Display`] use the 81-character wire format shared with
/// the validator: digits `1-9` for filled cells and `0` for empty cells,
/// row by row.
///
/// # Examples
///
/// ```
/// use sudokusolve_core::{Board, Digit};
///
/// let board: Board = "0".repeat(81).parse()?;
/// assert!(!board.is_full());
/// assert_eq!(board.candidates_at(0).len(), 9);
/// # Ok::<(), sudokusolve_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `cell`, or `None` if the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not in the range 0-80.
    #[must_use]
    pub fn get(&self, cell: usize) -> Option<Digit> {
        self.cells[cell]
    }

    /// Places `digit` at `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not in the range 0-80.
    pub fn set(&mut self, cell: usize, digit: Digit) {
        self.cells[cell] = Some(digit);
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns an iterator over the indices of all empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
    }

    /// Returns the set of digits already placed in `house`.
    #[must_use]
    pub fn digits_in_house(&self, house: House) -> DigitSet {
        house
            .cells()
            .into_iter()
            .filter_map(|cell| self.cells[cell])
            .collect()
    }

    /// Returns the set of digits that can legally be placed at `cell`: all
    /// digits not already present in its row, column, or box.
    ///
    /// Candidates are always recomputed from the current cell values; no
    /// cached candidate state exists to go stale.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not in the range 0-80.
    #[must_use]
    pub fn candidates_at(&self, cell: usize) -> DigitSet {
        let used = House::memberships(cell)
            .into_iter()
            .map(|(house_index, _)| self.digits_in_house(House::ALL[house_index]))
            .fold(DigitSet::EMPTY, DigitSet::union);
        DigitSet::FULL.difference(used)
    }

    /// Returns `true` if no digit occurs more than once in any house.
    ///
    /// Empty cells are unconstrained, so a partially filled board can be
    /// consistent; a full consistent board is a solved puzzle.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        House::ALL.into_iter().all(|house| {
            let mut seen = DigitSet::EMPTY;
            house
                .cells()
                .into_iter()
                .filter_map(|cell| self.cells[cell])
                .all(|digit| seen.insert(digit))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(found) = s.chars().find(|ch| !ch.is_ascii_digit()) {
            return Err(ParseBoardError::InvalidCharacter { found });
        }
        if s.len() != 81 {
            return Err(ParseBoardError::WrongLength { len: s.len() });
        }
        let mut board = Self::new();
        for (cell, ch) in s.bytes().enumerate() {
            board.cells[cell] = Digit::from_ascii(ch);
        }
        Ok(board)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.cells {
            let ch = cell.map_or('0', |digit| char::from(digit.to_ascii()));
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
