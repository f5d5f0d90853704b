//! Move legality.
//!
//! [`Board::validate`] runs one move request through a fixed sequence of
//! checks and stops at the first that fails:
//!
//! 1. both squares on the board, else [`MoveOutcome::OutOfBounds`]
//! 2. a piece on the from-square, else [`MoveOutcome::PieceNotFound`]
//! 3. that piece belongs to the side to move, else [`MoveOutcome::WrongColor`]
//! 4. the to-square is a pseudo-legal destination (castle-shaped king moves
//!    pass here and are judged in step 6), else [`MoveOutcome::TargetInvalid`]
//! 5. the promotion field matches the move, else a [`ChessError`]
//! 6. for castling: right held, rook home, path empty, and the king's start,
//!    transit and destination squares unattacked, else
//!    [`MoveOutcome::CastleNotAllowed`]
//! 7. the mover's king is not attacked afterwards, else
//!    [`MoveOutcome::WouldBeCheck`]
//!
//! Nothing here mutates the board. The self-check test replays the placement
//! change on a copy of the square array.

use super::make_unmake::relocate;
use super::movegen::{castle_path, castle_side, is_attacked_on, KING_FILE};
use super::state::find_king_in;
use super::{Bitboard, Board, ChessError, Color, Move, MoveOutcome, Piece, Square, PROMOTION_PIECES};

impl Board {
    /// Decide whether `mv` may be played by the side to move.
    ///
    /// Rejections come back as `Ok(outcome)`. Only a malformed promotion field
    /// is an error.
    pub fn validate(&self, mv: Move) -> Result<MoveOutcome, ChessError> {
        if !mv.from.is_valid() || !mv.to.is_valid() {
            return Ok(MoveOutcome::OutOfBounds);
        }
        let Some((color, piece)) = self.piece_at(mv.from) else {
            return Ok(MoveOutcome::PieceNotFound);
        };
        if color != self.side_to_move() {
            return Ok(MoveOutcome::WrongColor);
        }

        let castle = castle_side(color, piece, mv.from, mv.to);
        if castle.is_none() && !self.pseudo_legal_targets(mv.from).contains(mv.to) {
            return Ok(MoveOutcome::TargetInvalid);
        }

        check_promotion(mv, color, piece)?;

        if let Some(kingside) = castle {
            if !self.castle_allowed(color, kingside) {
                return Ok(MoveOutcome::CastleNotAllowed);
            }
        }

        if self.would_be_check(mv, color) {
            return Ok(MoveOutcome::WouldBeCheck);
        }

        Ok(MoveOutcome::Ok)
    }

    /// Whether `color`'s king is attacked after `mv` is played on a copy of
    /// the placement.
    pub(crate) fn would_be_check(&self, mv: Move, color: Color) -> bool {
        let mut scratch = self.squares;
        relocate(&mut scratch, mv, self.en_passant_target);
        match find_king_in(&scratch, color) {
            Some(king_sq) => is_attacked_on(&scratch, king_sq, color.opponent()),
            None => false,
        }
    }

    /// Castling legality on the current board: the path must be clear and
    /// none of the squares the king stands on or crosses may be attacked.
    pub(crate) fn castle_allowed(&self, color: Color, kingside: bool) -> bool {
        if !self.castle_path_clear(color, kingside) {
            return false;
        }
        let rank = color.back_rank();
        let king_to = castle_path(kingside).king_to;
        let (lo, hi) = if kingside {
            (KING_FILE, king_to)
        } else {
            (king_to, KING_FILE)
        };
        let enemy = color.opponent();
        (lo..=hi).all(|file| !self.is_square_attacked(Square(rank, file), enemy))
    }

    /// Legal destinations of the piece on `from`. Empty unless that piece
    /// belongs to the side to move.
    #[must_use]
    pub fn legal_targets(&self, from: Square) -> Bitboard {
        let mut legal = Bitboard::EMPTY;
        let Some((color, piece)) = self.piece_at(from) else {
            return legal;
        };
        if color != self.side_to_move() {
            return legal;
        }
        for to in self.pseudo_legal_targets(from) {
            if let Some(kingside) = castle_side(color, piece, from, to) {
                if !self.castle_allowed(color, kingside) {
                    continue;
                }
            }
            if !self.would_be_check(Move::new(from, to), color) {
                legal.insert(to);
            }
        }
        legal
    }

    /// All legal moves for the side to move. Promotions appear once per
    /// promotion piece.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let color = self.side_to_move();
        let mut moves = Vec::new();
        for (from, _, piece) in self.pieces().filter(|(_, c, _)| *c == color) {
            for to in self.legal_targets(from) {
                if piece == Piece::Pawn && to.rank() == color.pawn_promotion_rank() {
                    moves.extend(
                        PROMOTION_PIECES
                            .iter()
                            .map(|&promo| Move::with_promotion(from, to, promo)),
                    );
                } else {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    pub(crate) fn has_legal_move(&self) -> bool {
        let color = self.side_to_move();
        self.pieces()
            .filter(|(_, c, _)| *c == color)
            .any(|(from, _, _)| !self.legal_targets(from).is_empty())
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    ///
    /// The last ply is bulk-counted from [`Board::legal_moves`] without being
    /// played.
    pub fn perft(&mut self, depth: usize) -> u64 {
        match depth {
            0 => 1,
            1 => self.legal_moves().len() as u64,
            _ => {
                let mut nodes = 0;
                for mv in self.legal_moves() {
                    if self.execute(mv).is_ok() {
                        nodes += self.perft(depth - 1);
                        self.undo();
                    }
                }
                nodes
            }
        }
    }

    /// Side to move is not in check and has no legal move.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_check && !self.has_legal_move()
    }

    /// SAN disambiguation for `mv`: empty when no other piece of the same type
    /// and color can legally reach the destination, otherwise the from-file,
    /// the from-rank, or both. Pawns never need it.
    #[must_use]
    pub fn disambiguation(&self, mv: Move) -> String {
        let mut text = String::new();
        let Some((color, piece)) = self.piece_at(mv.from) else {
            return text;
        };
        if piece == Piece::Pawn {
            return text;
        }

        let rivals: Vec<Square> = self
            .pieces()
            .filter(|&(sq, c, p)| c == color && p == piece && sq != mv.from)
            .map(|(sq, _, _)| sq)
            .filter(|&sq| self.legal_targets(sq).contains(mv.to))
            .collect();
        if rivals.is_empty() {
            return text;
        }

        let same_file = rivals.iter().any(|sq| sq.file() == mv.from.file());
        let same_rank = rivals.iter().any(|sq| sq.rank() == mv.from.rank());
        let (needs_file, needs_rank) = match (same_file, same_rank) {
            (false, _) => (true, false),
            (true, false) => (false, true),
            (true, true) => (true, true),
        };
        if needs_file {
            text.push((b'a' + mv.from.file() as u8) as char);
        }
        if needs_rank {
            text.push((b'1' + mv.from.rank() as u8) as char);
        }
        text
    }
}

fn check_promotion(mv: Move, color: Color, piece: Piece) -> Result<(), ChessError> {
    let promotes = piece == Piece::Pawn && mv.to.rank() == color.pawn_promotion_rank();
    match (promotes, mv.promotion) {
        (true, None) => Err(ChessError::MissingPromotion { mv: mv.to_string() }),
        (true, Some(p)) if !p.is_promotion_target() => {
            Err(ChessError::InvalidPromotion { mv: mv.to_string() })
        }
        (false, Some(_)) => Err(ChessError::UnexpectedPromotion { mv: mv.to_string() }),
        _ => Ok(()),
    }
}
