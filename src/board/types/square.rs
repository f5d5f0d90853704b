//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

pub(crate) fn file_to_index(file: char) -> usize {
    file as usize - ('a' as usize)
}

pub(crate) fn rank_to_index(rank: char) -> usize {
    (rank as usize) - ('0' as usize) - 1
}

/// A square on the chess board, represented as (rank, file).
///
/// The fields are public, so a `Square` may lie outside the board. Check
/// [`Square::is_valid`] before using it as an index; the validator reports such
/// squares as [`MoveOutcome::OutOfBounds`](crate::board::MoveOutcome::OutOfBounds).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    /// Sentinel for "no square / unknown square".
    pub const UNKNOWN: Square = Square(usize::MAX, usize::MAX);

    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    /// Returns true if both coordinates are on the board.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// Step by a (rank, file) delta, returning `None` when leaving the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_rank: isize, d_file: isize) -> Option<Self> {
        if !self.is_valid() {
            return None;
        }
        let r = self.0 as isize + d_rank;
        let f = self.1 as isize + d_file;
        if (0..8).contains(&r) && (0..8).contains(&f) {
            Some(Square(r as usize, f as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "-");
        }
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.0, self.1).cmp(&(other.0, other.1))
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let file = match chars[0] {
            'a'..='h' => file_to_index(chars[0]),
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let rank = match chars[1] {
            '1'..='8' => rank_to_index(chars[1]),
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Square(rank, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_is_not_valid() {
        assert!(!Square::UNKNOWN.is_valid());
        assert_eq!(Square::UNKNOWN.offset(0, 0), None);
        assert_eq!(Square::UNKNOWN.to_string(), "-");
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Square(0, 0).offset(1, 1), Some(Square(1, 1)));
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(7, 7).offset(0, 1), None);
    }

    #[test]
    fn test_index_round_trip() {
        for idx in 0..64 {
            assert_eq!(Square::from_index(idx).as_index(), idx);
        }
        assert_eq!(Square(3, 4).as_index(), 28);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Square(3, 4).to_string(), "e4");
        assert_eq!("h8".parse::<Square>().unwrap(), Square(7, 7));
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("".parse::<Square>().is_err());
    }

    #[test]
    fn test_try_from_bounds() {
        assert!(Square::try_from((7, 7)).is_ok());
        assert!(matches!(
            Square::try_from((8, 0)),
            Err(SquareError::RankOutOfBounds { rank: 8 })
        ));
        assert!(matches!(
            Square::try_from((0, 8)),
            Err(SquareError::FileOutOfBounds { file: 8 })
        ));
    }
}
