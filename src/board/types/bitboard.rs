//! Bitboard square sets.
//!
//! Move generation reports destination squares as a `Bitboard`: one bit per
//! square, `rank * 8 + file`. Placement itself lives in the board's 64-slot
//! array; bitboards are only used as cheap square sets.

use std::ops::{BitOr, BitOrAssign};

use super::square::Square;

/// A 64-bit set of squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1 << sq.as_index())
    }

    /// Add a square to the set
    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1 << sq.as_index();
    }

    /// Returns an iterator over the squares set in this bitboard, a1 first
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    /// Returns true if the bitboard is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is set. Off-board squares are never set.
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        sq.is_valid() && (self.0 & (1 << sq.as_index())) != 0
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

pub(crate) fn pop_lsb(bb: &mut Bitboard) -> Square {
    let idx = bb.0.trailing_zeros() as usize;
    bb.0 &= bb.0 - 1;
    Square::from_index(idx)
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(pop_lsb(&mut self.0))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.popcount() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
