#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::history::RepetitionTable;
use super::{CastlingRights, ChessError, Color, Move, Piece, Square};

/// Piece placement, indexed by `rank * 8 + file`.
pub(crate) type Squares = [Option<(Color, Piece)>; 64];

/// Pre-move snapshot kept with every played move so undo is exact.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnmakeInfo {
    pub(crate) captured_piece_info: Option<(Color, Piece)>,
    pub(crate) captured_square: Option<Square>,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_hash: u64,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
    pub(crate) previous_is_check: bool,
    pub(crate) previous_is_checkmate: bool,
}

/// A move as it was played: the request, the mover, the undo snapshot and the
/// flags derived after it was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayedMove {
    pub mv: Move,
    pub color: Color,
    pub piece: Piece,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_capture: bool,
    pub is_en_passant: bool,
    pub is_castling: bool,
    /// Standard Algebraic Notation including the `+`/`#` suffix.
    pub san: String,
    pub(crate) undo: UnmakeInfo,
}

impl PlayedMove {
    /// The captured piece and the square it stood on. For en passant that
    /// square is not the destination.
    #[must_use]
    pub fn captured(&self) -> Option<(Square, Color, Piece)> {
        match (self.undo.captured_square, self.undo.captured_piece_info) {
            (Some(sq), Some((color, piece))) => Some((sq, color, piece)),
            _ => None,
        }
    }

    /// Castling rights in force before the move.
    #[must_use]
    pub fn previous_castling_rights(&self) -> CastlingRights {
        self.undo.previous_castling_rights
    }

    /// Half-move clock before the move.
    #[must_use]
    pub fn previous_halfmove_clock(&self) -> u32 {
        self.undo.previous_halfmove_clock
    }
}

/// Full game state: placement, side to move, castling rights, en-passant target,
/// clocks, the played-move list and the derived check/mate flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: Squares,
    pub(crate) white_to_move: bool,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) hash: u64, // Zobrist hash
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) moves: Vec<PlayedMove>,
    pub(crate) is_check: bool,
    pub(crate) is_checkmate: bool,
    pub(crate) repetition_counts: RepetitionTable,
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (i, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, i), Color::White, *piece);
            board.set_piece(Square(7, i), Color::Black, *piece);
            board.set_piece(Square(1, i), Color::White, Piece::Pawn);
            board.set_piece(Square(6, i), Color::Black, Piece::Pawn);
        }

        board.castling_rights = CastlingRights::all();
        board.finish_setup();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; 64],
            white_to_move: true,
            en_passant_target: None,
            castling_rights: CastlingRights::none(),
            hash: 0,
            halfmove_clock: 0,
            fullmove_number: 1,
            moves: Vec::new(),
            is_check: false,
            is_checkmate: false,
            repetition_counts: RepetitionTable::new(),
        }
    }

    /// Hash, repetition entry and cached status for a freshly placed position.
    pub(crate) fn finish_setup(&mut self) {
        self.hash = self.compute_hash();
        self.repetition_counts = RepetitionTable::new();
        self.repetition_counts.set(self.hash, 1);
        self.refresh_status();
    }

    /// Recompute the cached check/checkmate flags for the side to move.
    pub(crate) fn refresh_status(&mut self) {
        self.is_check = self.is_in_check(self.side_to_move());
        self.is_checkmate = self.is_check && !self.has_legal_move();
    }

    /// Exactly one king per color.
    pub(crate) fn check_kings(&self) -> Result<(), ChessError> {
        for color in Color::BOTH {
            let count = self
                .squares
                .iter()
                .filter(|slot| **slot == Some((color, Piece::King)))
                .count();
            match count {
                0 => return Err(ChessError::MissingKing { color }),
                1 => {}
                _ => return Err(ChessError::TooManyKings { color, count }),
            }
        }
        Ok(())
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.as_index()] = Some((color, piece));
    }

    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.as_index()].take()
    }

    /// The piece on a square, `None` for empty or off-board squares.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        if sq.is_valid() {
            self.squares[sq.as_index()]
        } else {
            None
        }
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// All occupied squares, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|(c, p)| (Square::from_index(idx), c, p)))
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        find_king_in(&self.squares, color)
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Moves applied to this board, oldest first.
    #[must_use]
    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&PlayedMove> {
        self.moves.last()
    }

    /// Whether the side to move is in check.
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.is_check
    }

    /// Whether the side to move is checkmated.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_checkmate
    }

    /// Times the current position has occurred in this board's history.
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.repetition_counts.get(self.hash)
    }

    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }

    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    pub fn is_draw(&self) -> bool {
        self.is_fifty_move_draw() || self.is_threefold_repetition() || self.is_stalemate()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

pub(crate) fn find_king_in(squares: &Squares, color: Color) -> Option<Square> {
    squares
        .iter()
        .position(|slot| *slot == Some((color, Piece::King)))
        .map(Square::from_index)
}
