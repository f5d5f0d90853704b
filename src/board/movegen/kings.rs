use super::super::state::Squares;
use super::super::{Bitboard, Board, Color, Piece, Square};

const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// King home file.
pub(crate) const KING_FILE: usize = 4;

pub(crate) fn king_step_targets(squares: &Squares, from: Square, color: Color) -> Bitboard {
    super::step_targets(squares, from, color, &KING_OFFSETS)
}

/// Squares strictly between king and rook, the king's destination, and the
/// rook's start and destination for one castling side.
pub(crate) struct CastlePath {
    pub(crate) between: &'static [usize],
    pub(crate) king_to: usize,
    pub(crate) rook_from: usize,
    pub(crate) rook_to: usize,
}

pub(crate) const KINGSIDE: CastlePath = CastlePath {
    between: &[5, 6],
    king_to: 6,
    rook_from: 7,
    rook_to: 5,
};

pub(crate) const QUEENSIDE: CastlePath = CastlePath {
    between: &[1, 2, 3],
    king_to: 2,
    rook_from: 0,
    rook_to: 3,
};

pub(crate) fn castle_path(kingside: bool) -> &'static CastlePath {
    if kingside {
        &KINGSIDE
    } else {
        &QUEENSIDE
    }
}

/// Whether `from -> to` has the shape of a castle: king home square to two
/// files away on the same back rank. Returns the side when it does.
pub(crate) fn castle_side(color: Color, piece: Piece, from: Square, to: Square) -> Option<bool> {
    let rank = color.back_rank();
    if piece != Piece::King || from != Square(rank, KING_FILE) || to.rank() != rank {
        return None;
    }
    match to.file() {
        6 => Some(true),
        2 => Some(false),
        _ => None,
    }
}

impl Board {
    /// Right held, rook at home and the squares between them empty. Attacks
    /// are judged separately.
    pub(crate) fn castle_path_clear(&self, color: Color, kingside: bool) -> bool {
        let rank = color.back_rank();
        let path = castle_path(kingside);
        self.castling_rights.has(color, kingside)
            && self.piece_at(Square(rank, KING_FILE)) == Some((color, Piece::King))
            && self.piece_at(Square(rank, path.rook_from)) == Some((color, Piece::Rook))
            && path
                .between
                .iter()
                .all(|&file| self.is_empty(Square(rank, file)))
    }

    pub(crate) fn castling_targets(&self, from: Square, color: Color) -> Bitboard {
        let mut targets = Bitboard::EMPTY;
        let rank = color.back_rank();
        if from != Square(rank, KING_FILE) {
            return targets;
        }
        for kingside in [true, false] {
            if self.castle_path_clear(color, kingside) {
                targets.insert(Square(rank, castle_path(kingside).king_to));
            }
        }
        targets
    }
}
