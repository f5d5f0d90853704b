//! Pseudo-legal move generation.
//!
//! Every generator works on the placement array and returns the destination
//! set as a [`Bitboard`]. Self-check is not considered here; see the legality
//! module for that.
//!
//! Two modes exist. Move mode is what a piece may play: pawn pushes, captures
//! onto enemies or the en-passant target, and castling for a king on its home
//! square. Attack mode is what a piece threatens: pawn diagonals whatever
//! stands on them, no pushes and no castling. Attacked-square queries use
//! attack mode.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::{castle_path, castle_side, KING_FILE};

use super::state::Squares;
use super::{Bitboard, Board, Color, Piece, Square};

fn step_targets(
    squares: &Squares,
    from: Square,
    color: Color,
    offsets: &[(isize, isize)],
) -> Bitboard {
    let mut targets = Bitboard::EMPTY;
    for &(dr, df) in offsets {
        if let Some(sq) = from.offset(dr, df) {
            match squares[sq.as_index()] {
                Some((occupant, _)) if occupant == color => {}
                _ => targets.insert(sq),
            }
        }
    }
    targets
}

/// Attack-mode destination set of the piece on `from`.
pub(crate) fn attacks_on(squares: &Squares, from: Square) -> Bitboard {
    let Some((color, piece)) = squares[from.as_index()] else {
        return Bitboard::EMPTY;
    };
    match piece {
        Piece::Pawn => pawns::pawn_attacks(from, color),
        Piece::Knight => knights::knight_targets(squares, from, color),
        Piece::King => kings::king_step_targets(squares, from, color),
        Piece::Bishop | Piece::Rook | Piece::Queen => {
            sliders::slider_targets(squares, from, color, sliders::slider_directions(piece))
        }
    }
}

/// Whether any piece of `by` attacks `target` on the given placement.
pub(crate) fn is_attacked_on(squares: &Squares, target: Square, by: Color) -> bool {
    squares.iter().enumerate().any(|(idx, slot)| match slot {
        Some((color, _)) if *color == by => {
            attacks_on(squares, Square::from_index(idx)).contains(target)
        }
        _ => false,
    })
}

impl Board {
    /// Squares the piece on `from` may move to, ignoring self-check.
    ///
    /// Empty or off-board squares yield an empty set. The piece's own color is
    /// used, not the side to move.
    #[must_use]
    pub fn pseudo_legal_targets(&self, from: Square) -> Bitboard {
        let Some((color, piece)) = self.piece_at(from) else {
            return Bitboard::EMPTY;
        };
        match piece {
            Piece::Pawn => pawns::pawn_targets(&self.squares, from, color, self.en_passant_target),
            Piece::King => {
                kings::king_step_targets(&self.squares, from, color)
                    | self.castling_targets(from, color)
            }
            _ => attacks_on(&self.squares, from),
        }
    }

    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        square.is_valid() && is_attacked_on(&self.squares, square, attacker_color)
    }

    /// Whether `color`'s king is attacked. A side without a king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color.opponent()),
            None => false,
        }
    }
}
