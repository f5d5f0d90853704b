//! Standard Algebraic Notation (SAN) for played moves.
//!
//! SAN is the human-readable notation used in scoresheets and PGN move text.
//! Examples: "e4", "Nf3", "Bxc6+", "O-O", "e8=Q#". The body is built on the
//! pre-move board; the `+`/`#` suffix is added once the move has been played.
//!
//! # Examples
//! ```
//! use chess_rules::{Board, Move};
//!
//! let mut board = Board::new();
//! board.apply("g1f3".parse::<Move>().unwrap()).unwrap();
//! assert_eq!(board.last_move().unwrap().san, "Nf3");
//! ```

use super::movegen::castle_side;
use super::{Board, Color, Move, Piece};

impl Board {
    /// SAN text of a validated move without the check suffix.
    pub(crate) fn san_body(&self, mv: Move, color: Color, piece: Piece) -> String {
        if let Some(kingside) = castle_side(color, piece, mv.from, mv.to) {
            return if kingside { "O-O" } else { "O-O-O" }.to_string();
        }

        let is_capture = self.piece_at(mv.to).is_some()
            || (piece == Piece::Pawn && mv.from.file() != mv.to.file());

        let mut san = String::new();
        if piece == Piece::Pawn {
            if is_capture {
                // Pawn captures include the file
                san.push((b'a' + mv.from.file() as u8) as char);
            }
        } else {
            san.push(piece.to_char().to_ascii_uppercase());
            san.push_str(&self.disambiguation(mv));
        }

        if is_capture {
            san.push('x');
        }
        san.push_str(&mv.to.to_string());

        if let Some(promo) = mv.promotion {
            san.push('=');
            san.push(promo.to_char().to_ascii_uppercase());
        }
        san
    }
}
