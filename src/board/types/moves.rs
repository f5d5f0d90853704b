//! Move requests and move outcomes.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;
use crate::board::error::MoveParseError;

/// A requested move: from-square, to-square and an optional promotion type.
///
/// A `Move` carries no knowledge of the position; whether it is legal is decided
/// by [`Board::validate`](crate::board::Board::validate). Squares may be off the
/// board, in which case validation reports [`MoveOutcome::OutOfBounds`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }
}

/// Engine notation: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if !(4..=5).contains(&len) || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength { len });
        }

        let from: Square = s[0..2].parse().map_err(|_| MoveParseError::InvalidSquare {
            notation: s.to_string(),
        })?;
        let to: Square = s[2..4].parse().map_err(|_| MoveParseError::InvalidSquare {
            notation: s.to_string(),
        })?;

        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(p) if p.is_promotion_target() => Some(p),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}

/// Result of validating or applying a single move.
///
/// Rejections are ordinary values: the board is untouched whenever the outcome
/// is anything other than [`MoveOutcome::Ok`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveOutcome {
    Ok,
    OutOfBounds,
    PieceNotFound,
    WrongColor,
    TargetInvalid,
    CastleNotAllowed,
    WouldBeCheck,
}

impl MoveOutcome {
    #[inline]
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, MoveOutcome::Ok)
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MoveOutcome::Ok => "ok",
            MoveOutcome::OutOfBounds => "square out of bounds",
            MoveOutcome::PieceNotFound => "no piece on the from-square",
            MoveOutcome::WrongColor => "piece belongs to the side not on move",
            MoveOutcome::TargetInvalid => "piece cannot reach the target square",
            MoveOutcome::CastleNotAllowed => "castling not allowed",
            MoveOutcome::WouldBeCheck => "move would leave the king in check",
        };
        f.write_str(text)
    }
}
