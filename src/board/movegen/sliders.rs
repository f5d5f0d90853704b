use super::super::state::Squares;
use super::super::{Bitboard, Color, Piece, Square};

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) fn slider_directions(piece: Piece) -> &'static [(isize, isize)] {
    const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];
    match piece {
        Piece::Bishop => &BISHOP_DIRECTIONS,
        Piece::Rook => &ROOK_DIRECTIONS,
        Piece::Queen => &QUEEN_DIRECTIONS,
        _ => &[],
    }
}

/// Walk each ray until the edge or the first occupied square; an enemy blocker
/// is included, a friendly one is not.
pub(crate) fn slider_targets(
    squares: &Squares,
    from: Square,
    color: Color,
    directions: &[(isize, isize)],
) -> Bitboard {
    let mut targets = Bitboard::EMPTY;
    for &(dr, df) in directions {
        let mut current = from.offset(dr, df);
        while let Some(sq) = current {
            match squares[sq.as_index()] {
                None => targets.insert(sq),
                Some((occupant, _)) => {
                    if occupant != color {
                        targets.insert(sq);
                    }
                    break;
                }
            }
            current = sq.offset(dr, df);
        }
    }
    targets
}
