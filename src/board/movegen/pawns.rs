use super::super::state::Squares;
use super::super::{Bitboard, Board, Color, Piece, Square};

/// Diagonal squares a pawn attacks, whatever stands on them.
pub(crate) fn pawn_attacks(from: Square, color: Color) -> Bitboard {
    let mut targets = Bitboard::EMPTY;
    for df in [-1, 1] {
        if let Some(sq) = from.offset(color.pawn_direction(), df) {
            targets.insert(sq);
        }
    }
    targets
}

pub(crate) fn pawn_targets(
    squares: &Squares,
    from: Square,
    color: Color,
    en_passant_target: Option<Square>,
) -> Bitboard {
    let mut targets = Bitboard::EMPTY;
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if squares[one.as_index()].is_none() {
            targets.insert(one);
            if from.rank() == color.pawn_start_rank() {
                if let Some(two) = one.offset(dir, 0) {
                    if squares[two.as_index()].is_none() {
                        targets.insert(two);
                    }
                }
            }
        }
    }

    for sq in pawn_attacks(from, color) {
        match squares[sq.as_index()] {
            Some((occupant, _)) if occupant != color => targets.insert(sq),
            None if en_passant_target == Some(sq) => targets.insert(sq),
            _ => {}
        }
    }

    targets
}

impl Board {
    /// An en-passant target is only worth recording when an enemy pawn stands
    /// beside the pawn that just double-pushed.
    pub(crate) fn en_passant_capturable(&self, to: Square, mover: Color) -> bool {
        let enemy_pawn = Some((mover.opponent(), Piece::Pawn));
        [-1, 1]
            .into_iter()
            .filter_map(|df| to.offset(0, df))
            .any(|sq| self.piece_at(sq) == enemy_pawn)
    }
}
