//! The 27 constraint houses (rows, columns, boxes) of a sudoku board.
//!
//! Houses are static: they are pure index arithmetic over the flat 0-80
//! board, shared read-only by every board instance. Every cell belongs to
//! exactly one row, one column, and one box.

use crate::containers::{BitSet9, Bits9Semantics, Slot9};

/// A sudoku house (row, column, or 3×3 box).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its index (0-8, top to bottom).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its index (0-8, left to right).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { y: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { x: i as u8 };
            i += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// Array containing all 27 houses in row, column, box order.
    ///
    /// The position of a house in this array is its *house index*; the
    /// solver's hidden-single tracking is laid out in the same order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a cell slot within the house (0-8) into an absolute board
    /// index (0-80).
    ///
    /// Slots run left to right for rows, top to bottom for columns, and
    /// row-major within a box.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not in the range 0-8.
    #[must_use]
    pub fn cell(self, slot: u8) -> usize {
        assert!(slot < 9);
        let slot = usize::from(slot);
        match self {
            House::Row { y } => usize::from(y) * 9 + slot,
            House::Column { x } => slot * 9 + usize::from(x),
            House::Box { index } => {
                let index = usize::from(index);
                let row = (index / 3) * 3 + slot / 3;
                let col = (index % 3) * 3 + slot % 3;
                row * 9 + col
            }
        }
    }

    /// Returns the absolute board indices of all nine cells in this house.
    #[must_use]
    pub fn cells(self) -> [usize; 9] {
        let mut cells = [0; 9];
        for slot in 0..9 {
            cells[usize::from(slot)] = self.cell(slot);
        }
        cells
    }

    /// Returns the three houses containing `cell`, each as a pair of
    /// (house index into [`House::ALL`], slot of `cell` within that house).
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not in the range 0-80.
    #[must_use]
    pub fn memberships(cell: usize) -> [(usize, u8); 3] {
        assert!(cell < 81);
        let row = cell / 9;
        let col = cell % 9;
        let box_index = (row / 3) * 3 + col / 3;
        let box_slot = (row % 3) * 3 + col % 3;
        #[expect(clippy::cast_possible_truncation)]
        let (row_slot, col_slot, box_slot) = (col as u8, row as u8, box_slot as u8);
        [
            (row, row_slot),
            (9 + col, col_slot),
            (18 + box_index, box_slot),
        ]
    }
}

/// Semantics mapping cell slots 0-8 directly to bit slots.
#[derive(Debug)]
pub struct SlotSemantics;

impl Bits9Semantics for SlotSemantics {
    type Value = u8;

    fn to_slot(value: u8) -> Slot9 {
        Slot9::new(value)
    }

    fn from_slot(slot: Slot9) -> u8 {
        slot.get()
    }
}

/// A bit mask of cell slots (0-8) within a single house.
///
/// The solver's hidden-single tracking keeps one `HouseMask` per
/// (house, digit) pair: the slots where that digit is still a legal
/// candidate. A mask with exactly one slot set is a hidden single.
pub type HouseMask = BitSet9<SlotSemantics>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order() {
        assert_eq!(House::ALL[0], House::Row { y: 0 });
        assert_eq!(House::ALL[8], House::Row { y: 8 });
        assert_eq!(House::ALL[9], House::Column { x: 0 });
        assert_eq!(House::ALL[17], House::Column { x: 8 });
        assert_eq!(House::ALL[18], House::Box { index: 0 });
        assert_eq!(House::ALL[26], House::Box { index: 8 });
    }

    #[test]
    fn test_cell_arithmetic() {
        assert_eq!(House::Row { y: 0 }.cell(0), 0);
        assert_eq!(House::Row { y: 8 }.cell(8), 80);
        assert_eq!(House::Column { x: 4 }.cell(2), 22);
        // Box 4 (center) starts at cell 30.
        assert_eq!(House::Box { index: 4 }.cell(0), 30);
        assert_eq!(House::Box { index: 4 }.cell(8), 50);
        // Box 8 (bottom right) ends at cell 80.
        assert_eq!(House::Box { index: 8 }.cell(8), 80);
    }

    #[test]
    fn test_houses_partition_cells() {
        // Every cell appears in exactly one row, one column, and one box.
        let mut counts = [0usize; 81];
        for house in House::ALL {
            for cell in house.cells() {
                counts[cell] += 1;
            }
        }
        assert!(counts.iter().all(|&n| n == 3));
    }

    #[test]
    fn test_memberships_match_cell() {
        for cell in 0..81 {
            for (house_index, slot) in House::memberships(cell) {
                assert_eq!(House::ALL[house_index].cell(slot), cell);
            }
        }
    }

    #[test]
    fn test_known_membership() {
        // Cell 40 is the board center: row 4, column 4, box 4.
        let [(row, rs), (col, cs), (boxh, bs)] = House::memberships(40);
        assert_eq!((row, rs), (4, 4));
        assert_eq!((col, cs), (9 + 4, 4));
        assert_eq!((boxh, bs), (18 + 4, 4));
    }
}
