//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Castling rights represented as a bitmask.
///
/// Rights are only ever removed while playing; undo restores the previous value
/// from the move's snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// Bits in FEN order: K, Q, k, q.
    pub(crate) const ORDERED: [(Color, bool); 4] = [
        (Color::White, true),
        (Color::White, false),
        (Color::Black, true),
        (Color::Black, false),
    ];

    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Build from the four independent flags.
    #[must_use]
    pub const fn from_flags(
        white_kingside: bool,
        white_queenside: bool,
        black_kingside: bool,
        black_queenside: bool,
    ) -> Self {
        let mut bits = 0;
        if white_kingside {
            bits |= CASTLE_WHITE_K;
        }
        if white_queenside {
            bits |= CASTLE_WHITE_Q;
        }
        if black_kingside {
            bits |= CASTLE_BLACK_K;
        }
        if black_queenside {
            bits |= CASTLE_BLACK_Q;
        }
        CastlingRights(bits)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        let bit = Self::bit_for(color, kingside);
        self.0 & bit != 0
    }

    /// True if the color keeps at least one right.
    #[inline]
    #[must_use]
    pub const fn has_any(self, color: Color) -> bool {
        self.has(color, true) || self.has(color, false)
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Remove both rights of a color
    #[inline]
    pub fn remove_all(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Create from raw bitmask value; unknown bits are dropped.
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & ALL_CASTLING_RIGHTS)
    }

    /// Get the bit for a specific castling right
    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_independent() {
        let mut rights = CastlingRights::all();
        rights.remove(Color::White, true);
        assert!(!rights.has(Color::White, true));
        assert!(rights.has(Color::White, false));
        assert!(rights.has(Color::Black, true));
        assert!(rights.has(Color::Black, false));

        rights.remove_all(Color::Black);
        assert!(!rights.has_any(Color::Black));
        assert!(rights.has_any(Color::White));
    }

    #[test]
    fn test_from_flags_matches_set() {
        let rights = CastlingRights::from_flags(true, false, false, true);
        let mut manual = CastlingRights::none();
        manual.set(Color::White, true);
        manual.set(Color::Black, false);
        assert_eq!(rights, manual);
    }

    #[test]
    fn test_from_u8_masks_unknown_bits() {
        assert_eq!(CastlingRights::from_u8(0xFF), CastlingRights::all());
    }
}
