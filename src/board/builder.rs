//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//! The result goes through the same validation as [`Board::from_fields`].
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert!(!board.is_check());
//! ```

use super::{Board, CastlingRights, ChessError, Color, FenFields, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    fields: FenFields,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        let mut fields = FenFields::default();
        fields.placement = [[None; 8]; 8];
        BoardBuilder { fields }.no_castling_rights()
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            fields: FenFields::default(),
        }
    }

    /// Start from existing fields.
    #[must_use]
    pub fn from_fields(fields: FenFields) -> Self {
        BoardBuilder { fields }
    }

    /// Place a piece on the board, replacing whatever stood there. Off-board
    /// squares are ignored.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        if square.is_valid() {
            self.fields.placement[square.rank()][square.file()] = Some((color, piece));
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        if square.is_valid() {
            self.fields.placement[square.rank()][square.file()] = None;
        }
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.fields.white_to_move = matches!(color, Color::White);
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.fields.white_kingside = rights.has(Color::White, true);
        self.fields.white_queenside = rights.has(Color::White, false);
        self.fields.black_kingside = rights.has(Color::Black, true);
        self.fields.black_queenside = rights.has(Color::Black, false);
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(self, color: Color) -> Self {
        let mut rights = self.fields.castling_rights();
        rights.set(color, true);
        self.castling(rights)
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(self, color: Color) -> Self {
        let mut rights = self.fields.castling_rights();
        rights.set(color, false);
        self.castling(rights)
    }

    /// Disable all castling rights.
    #[must_use]
    pub fn no_castling_rights(self) -> Self {
        self.castling(CastlingRights::none())
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.fields.en_passant = Some(target);
        self
    }

    /// Set the halfmove clock (for 50-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.fields.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fields.fullmove_number = number;
        self
    }

    /// Build the board, checking that each side has exactly one king.
    pub fn build(self) -> Result<Board, ChessError> {
        Board::from_fields(self.fields)
    }
}
