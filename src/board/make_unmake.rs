use crate::zobrist::ZOBRIST;

use super::movegen::{castle_path, castle_side};
use super::state::Squares;
use super::{
    Board, CastlingRights, ChessError, Color, Move, MoveOutcome, Piece, PlayedMove, Square,
    UnmakeInfo,
};

/// Placement effects of one move.
pub(crate) struct Relocation {
    pub(crate) mover: (Color, Piece),
    pub(crate) placed: Piece,
    pub(crate) captured: Option<(Square, (Color, Piece))>,
    pub(crate) rook: Option<(Square, Square)>,
    pub(crate) is_en_passant: bool,
}

/// Move the piece on `mv.from`, remove whatever it captures (one rank behind
/// the destination for en passant), shift the rook on a castle and promote.
///
/// Returns `None` when `mv.from` is empty; the array is then untouched.
pub(crate) fn relocate(
    squares: &mut Squares,
    mv: Move,
    en_passant_target: Option<Square>,
) -> Option<Relocation> {
    let (color, piece) = squares[mv.from.as_index()].take()?;

    let is_en_passant = piece == Piece::Pawn
        && en_passant_target == Some(mv.to)
        && mv.from.file() != mv.to.file()
        && squares[mv.to.as_index()].is_none()
        && squares[Square(mv.from.rank(), mv.to.file()).as_index()]
            == Some((color.opponent(), Piece::Pawn));
    let captured_square = if is_en_passant {
        Square(mv.from.rank(), mv.to.file())
    } else {
        mv.to
    };
    let captured = squares[captured_square.as_index()]
        .take()
        .map(|victim| (captured_square, victim));

    let placed = match mv.promotion {
        Some(promo) if piece == Piece::Pawn => promo,
        _ => piece,
    };
    squares[mv.to.as_index()] = Some((color, placed));

    let rook = castle_side(color, piece, mv.from, mv.to).and_then(|kingside| {
        let path = castle_path(kingside);
        let rank = color.back_rank();
        let rook_from = Square(rank, path.rook_from);
        let rook_to = Square(rank, path.rook_to);
        let rook = squares[rook_from.as_index()].take()?;
        squares[rook_to.as_index()] = Some(rook);
        Some((rook_from, rook_to))
    });

    Some(Relocation {
        mover: (color, piece),
        placed,
        captured,
        rook,
        is_en_passant,
    })
}

/// Rights lost when a piece leaves or lands on `sq`: the king's home square
/// costs both rights of that color, a rook corner costs the matching one.
fn strip_rights(rights: &mut CastlingRights, sq: Square) {
    for (color, kingside) in CastlingRights::ORDERED {
        let rank = color.back_rank();
        if sq == Square(rank, castle_path(kingside).rook_from)
            || sq == Square(rank, super::movegen::KING_FILE)
        {
            rights.remove(color, kingside);
        }
    }
}

impl Board {
    /// Zobrist hash of the current position, computed from scratch.
    #[must_use]
    pub fn compute_hash(&self) -> u64 {
        let mut hash = self
            .pieces()
            .fold(0, |acc, (sq, color, piece)| acc ^ ZOBRIST.piece(color, piece, sq));

        if !self.white_to_move {
            hash ^= ZOBRIST.black_to_move_key;
        }
        hash ^= ZOBRIST.castling(self.castling_rights);
        hash ^= ZOBRIST.en_passant(self.en_passant_target);
        hash
    }

    /// Validate `mv` and, if it is legal, play it.
    ///
    /// A rejected move leaves the board untouched and returns its outcome.
    /// On [`MoveOutcome::Ok`] the move is appended to [`Board::moves`] with its
    /// check/mate flags and SAN text.
    pub fn apply(&mut self, mv: Move) -> Result<MoveOutcome, ChessError> {
        let outcome = self.validate(mv)?;
        if !outcome.is_ok() {
            rules_trace!("rejected {mv}: {outcome}");
            return Ok(outcome);
        }
        self.execute(mv)?;
        Ok(MoveOutcome::Ok)
    }

    /// Play a move that already passed validation.
    pub(crate) fn execute(&mut self, mv: Move) -> Result<(), ChessError> {
        let (color, piece) = self
            .piece_at(mv.from)
            .ok_or(ChessError::EmptySquare { square: mv.from })?;
        let san_body = self.san_body(mv, color, piece);

        let snapshot = UnmakeInfo {
            captured_piece_info: None,
            captured_square: None,
            previous_en_passant_target: self.en_passant_target,
            previous_castling_rights: self.castling_rights,
            previous_hash: self.hash,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
            previous_is_check: self.is_check,
            previous_is_checkmate: self.is_checkmate,
        };

        let mut hash = self.hash
            ^ ZOBRIST.castling(self.castling_rights)
            ^ ZOBRIST.en_passant(self.en_passant_target)
            ^ ZOBRIST.black_to_move_key;

        let reloc = relocate(&mut self.squares, mv, self.en_passant_target)
            .ok_or(ChessError::EmptySquare { square: mv.from })?;

        hash ^= ZOBRIST.piece(color, piece, mv.from);
        hash ^= ZOBRIST.piece(color, reloc.placed, mv.to);
        if let Some((sq, (victim_color, victim))) = reloc.captured {
            hash ^= ZOBRIST.piece(victim_color, victim, sq);
        }
        if let Some((rook_from, rook_to)) = reloc.rook {
            hash ^= ZOBRIST.piece(color, Piece::Rook, rook_from);
            hash ^= ZOBRIST.piece(color, Piece::Rook, rook_to);
        }

        strip_rights(&mut self.castling_rights, mv.from);
        strip_rights(&mut self.castling_rights, mv.to);

        let double_push = piece == Piece::Pawn && mv.from.rank().abs_diff(mv.to.rank()) == 2;
        self.en_passant_target = if double_push && self.en_passant_capturable(mv.to, color) {
            Some(Square((mv.from.rank() + mv.to.rank()) / 2, mv.from.file()))
        } else {
            None
        };

        hash ^= ZOBRIST.castling(self.castling_rights);
        hash ^= ZOBRIST.en_passant(self.en_passant_target);

        if piece == Piece::Pawn || reloc.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.white_to_move = !self.white_to_move;
        self.hash = hash;
        self.repetition_counts.increment(hash);
        self.refresh_status();

        let suffix = if self.is_checkmate {
            "#"
        } else if self.is_check {
            "+"
        } else {
            ""
        };
        let (mover_color, mover_piece) = reloc.mover;
        let played = PlayedMove {
            mv,
            color: mover_color,
            piece: mover_piece,
            is_check: self.is_check,
            is_checkmate: self.is_checkmate,
            is_capture: reloc.captured.is_some(),
            is_en_passant: reloc.is_en_passant,
            is_castling: reloc.rook.is_some(),
            san: format!("{san_body}{suffix}"),
            undo: UnmakeInfo {
                captured_piece_info: reloc.captured.map(|(_, victim)| victim),
                captured_square: reloc.captured.map(|(sq, _)| sq),
                ..snapshot
            },
        };
        rules_debug!("applied {} ({}) hash {:016x}", mv, played.san, hash);
        self.moves.push(played);
        Ok(())
    }

    /// Take back the most recent move. Returns `None` when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> Option<PlayedMove> {
        let played = self.moves.pop()?;
        let mv = played.mv;
        let info = &played.undo;

        self.repetition_counts.decrement(self.hash);

        self.remove_piece(mv.to);
        self.set_piece(mv.from, played.color, played.piece);
        if let (Some(sq), Some((color, piece))) = (info.captured_square, info.captured_piece_info)
        {
            self.set_piece(sq, color, piece);
        }
        if played.is_castling {
            let path = castle_path(mv.to.file() > mv.from.file());
            let rank = played.color.back_rank();
            if let Some((color, piece)) = self.remove_piece(Square(rank, path.rook_to)) {
                self.set_piece(Square(rank, path.rook_from), color, piece);
            }
        }

        self.white_to_move = played.color == Color::White;
        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.hash = info.previous_hash;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;
        self.is_check = info.previous_is_check;
        self.is_checkmate = info.previous_is_checkmate;

        rules_debug!("reverted {} ({})", mv, played.san);
        Some(played)
    }

    /// SAN text of `mv` in this position, or `None` if it is not legal here.
    #[must_use]
    pub fn move_to_san(&self, mv: Move) -> Option<String> {
        let mut scratch = self.clone();
        match scratch.apply(mv) {
            Ok(MoveOutcome::Ok) => scratch.moves.pop().map(|played| played.san),
            _ => None,
        }
    }
}
