//! Core data structures for the sudokusolve solver.
//!
//! This crate provides the leaf data model shared by the solving engine and
//! the command-line front end: type-safe digits, bit-set containers, the 27
//! constraint houses, and the 81-cell board itself.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`containers`]: [`BitSet9`], a generic 9-element bit set parameterized
//!   by an index-semantics type
//! - [`digit_set`]: [`DigitSet`], candidate digits for a single cell
//! - [`house`]: [`House`], the 27 rows/columns/boxes, and [`HouseMask`],
//!   a bit set of cell slots within one house
//! - [`board`]: [`Board`], the 81-cell grid with its `0`-for-empty string
//!   format
//!
//! [`BitSet9`]: containers::BitSet9
//!
//! # Examples
//!
//! ```
//! use sudokusolve_core::{Board, Digit};
//!
//! let mut board = Board::new();
//! board.set(40, Digit::D5);
//!
//! // 5 is no longer a candidate anywhere in row 4, column 4, or the
//! // center box.
//! assert!(!board.candidates_at(36).contains(Digit::D5));
//! assert!(!board.candidates_at(4).contains(Digit::D5));
//! assert!(!board.candidates_at(30).contains(Digit::D5));
//! ```

pub mod board;
pub mod containers;
pub mod digit;
pub mod digit_set;
pub mod house;

pub use self::{
    board::{Board, ParseBoardError},
    digit::Digit,
    digit_set::DigitSet,
    house::{House, HouseMask},
};
