//! Generic 9-element bit-set container.
//!
//! This module provides [`BitSet9`], a set of up to nine values backed by a
//! single `u16`. The mapping between user-facing values and internal bit
//! slots is defined by a [`Bits9Semantics`] type, so the same container
//! serves both candidate-digit sets ([`DigitSet`]) and per-house cell-slot
//! masks ([`HouseMask`]).
//!
//! [`DigitSet`]: crate::DigitSet
//! [`HouseMask`]: crate::HouseMask

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    marker::PhantomData,
    ops::{BitAnd, BitOr},
};

/// A validated bit slot in the range 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot9(u8);

impl Slot9 {
    /// Creates a new slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not in the range 0-8.
    #[must_use]
    pub const fn new(slot: u8) -> Self {
        assert!(slot < 9, "Slot must be between 0 and 8");
        Self(slot)
    }

    /// Returns the slot as a plain integer (0-8).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Defines how user-facing values map to bit slots in a [`BitSet9`].
pub trait Bits9Semantics {
    /// The user-facing value type stored in the set.
    type Value: Copy + Eq + Debug;

    /// Converts a value into its bit slot.
    fn to_slot(value: Self::Value) -> Slot9;

    /// Converts a bit slot back into its value.
    fn from_slot(slot: Slot9) -> Self::Value;
}

/// A set of up to nine values, represented as a 9-bit mask.
///
/// The implementation uses a `u16` where bits 0-8 represent the nine
/// possible values of the semantics type. All set operations (union,
/// intersection, difference, cardinality) are single machine instructions,
/// which matters because the solver recomputes candidate sets for every
/// empty cell on every propagation pass.
///
/// # Examples
///
/// ```
/// use sudokusolve_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert!(candidates.contains(Digit::D1));
/// ```
pub struct BitSet9<S> {
    bits: u16,
    _semantics: PhantomData<S>,
}

impl<S> BitSet9<S> {
    const MASK: u16 = 0x1FF;

    /// The empty set.
    pub const EMPTY: Self = Self {
        bits: 0,
        _semantics: PhantomData,
    };

    /// The set containing all nine values.
    pub const FULL: Self = Self {
        bits: Self::MASK,
        _semantics: PhantomData,
    };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Returns the number of values in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no values.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the union of `self` and `other`.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
            _semantics: PhantomData,
        }
    }

    /// Returns the intersection of `self` and `other`.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
            _semantics: PhantomData,
        }
    }

    /// Returns the values in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits & Self::MASK,
            _semantics: PhantomData,
        }
    }
}

impl<S: Bits9Semantics> BitSet9<S> {
    /// Creates a set containing a single value.
    #[must_use]
    pub fn from_elem(value: S::Value) -> Self {
        let mut set = Self::EMPTY;
        set.insert(value);
        set
    }

    /// Inserts a value. Returns `true` if the value was not already present.
    pub fn insert(&mut self, value: S::Value) -> bool {
        let bit = 1 << S::to_slot(value).get();
        let inserted = self.bits & bit == 0;
        self.bits |= bit;
        inserted
    }

    /// Removes a value. Returns `true` if the value was present.
    pub fn remove(&mut self, value: S::Value) -> bool {
        let bit = 1 << S::to_slot(value).get();
        let removed = self.bits & bit != 0;
        self.bits &= !bit;
        removed
    }

    /// Returns `true` if the set contains `value`.
    #[must_use]
    pub fn contains(self, value: S::Value) -> bool {
        self.bits & (1 << S::to_slot(value).get()) != 0
    }

    /// If the set contains exactly one value, returns it.
    ///
    /// This is the primitive behind both singles detections: a cell whose
    /// candidate set `as_single`s is a naked single, and a house mask that
    /// `as_single`s is a hidden single.
    #[must_use]
    pub fn as_single(self) -> Option<S::Value> {
        if self.bits.count_ones() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            let slot = self.bits.trailing_zeros() as u8;
            Some(S::from_slot(Slot9::new(slot)))
        } else {
            None
        }
    }

    /// Returns an iterator over the values in ascending slot order.
    #[must_use]
    pub fn iter(self) -> Iter<S> {
        Iter {
            bits: self.bits,
            _semantics: PhantomData,
        }
    }
}

impl<S> Clone for BitSet9<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for BitSet9<S> {}

impl<S> PartialEq for BitSet9<S> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<S> Eq for BitSet9<S> {}

impl<S> Default for BitSet9<S> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<S: Bits9Semantics> Debug for BitSet9<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<S> BitOr for BitSet9<S> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl<S> BitAnd for BitSet9<S> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl<S: Bits9Semantics> FromIterator<S::Value> for BitSet9<S> {
    fn from_iter<I: IntoIterator<Item = S::Value>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<S: Bits9Semantics> IntoIterator for BitSet9<S> {
    type Item = S::Value;
    type IntoIter = Iter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the values of a [`BitSet9`], in ascending slot order.
#[derive(Debug, Clone)]
pub struct Iter<S> {
    bits: u16,
    _semantics: PhantomData<S>,
}

impl<S: Bits9Semantics> Iterator for Iter<S> {
    type Item = S::Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let slot = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(S::from_slot(Slot9::new(slot)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl<S: Bits9Semantics> ExactSizeIterator for Iter<S> {}
impl<S: Bits9Semantics> FusedIterator for Iter<S> {}
