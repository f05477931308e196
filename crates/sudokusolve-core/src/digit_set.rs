//! Candidate digits (1-9) for a single cell.
//!
//! This module provides [`DigitSet`], a specialized instantiation of
//! [`BitSet9`] for sets of digits 1-9. The solver uses it for every
//! candidate-set computation: digits present in a house, digits still legal
//! in a cell, and the candidate list branched on during backtracking.
//!
//! # Examples
//!
//! ```
//! use sudokusolve_core::{Digit, DigitSet};
//!
//! let mut set = DigitSet::new();
//! set.insert(Digit::D1);
//! set.insert(Digit::D5);
//! set.insert(Digit::D9);
//!
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(Digit::D5));
//! ```

use crate::{
    containers::{BitSet9, Bits9Semantics, Slot9},
    digit::Digit,
};

/// Semantics mapping digits 1-9 to bit slots 0-8.
#[derive(Debug)]
pub struct DigitSemantics;

impl Bits9Semantics for DigitSemantics {
    type Value = Digit;

    fn to_slot(value: Digit) -> Slot9 {
        Slot9::new(value.value() - 1)
    }

    fn from_slot(slot: Slot9) -> Digit {
        Digit::from_value(slot.get() + 1)
    }
}

/// A set of candidate digits (1-9), represented as a 9-bit mask.
///
/// This is the fixed-width replacement for per-cell digit sets: union,
/// difference, and cardinality are single bit operations and no allocation
/// is ever involved.
///
/// # Set Operations
///
/// ```
/// use sudokusolve_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// assert_eq!(a | b, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4]));
/// assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
/// assert_eq!(a.difference(b), DigitSet::from_elem(Digit::D1));
/// ```
pub type DigitSet = BitSet9<DigitSemantics>;

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::digit::Digit::*;

    #[test]
    fn test_digit_range() {
        let mut set = DigitSet::new();
        set.insert(D1);
        set.insert(D9);
        assert!(set.contains(D1));
        assert!(set.contains(D9));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_iteration_order() {
        let set = DigitSet::from_iter([D9, D1, D5, D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![D1, D3, D5, D9]);
    }

    #[test]
    fn test_full_contains_all_digits() {
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    proptest! {
        #[test]
        fn prop_difference_is_complement_of_intersection(
            a in proptest::bits::u16::masked(0x1FF),
            b in proptest::bits::u16::masked(0x1FF),
        ) {
            let a = DigitSet::from_iter(Digit::ALL.into_iter().filter(|d| a & (1 << (d.value() - 1)) != 0));
            let b = DigitSet::from_iter(Digit::ALL.into_iter().filter(|d| b & (1 << (d.value() - 1)) != 0));
            prop_assert_eq!(a.difference(b).len() + a.intersection(b).len(), a.len());
            for digit in a.difference(b) {
                prop_assert!(a.contains(digit) && !b.contains(digit));
            }
        }
    }
}
