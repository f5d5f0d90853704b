//! Chess board representation and move rules.
//!
//! Placement is a 64-slot array indexed by `rank * 8 + file`; destination
//! sets are `Bitboard` square sets. Supports full chess rules including
//! castling, en passant and promotion, with exact undo.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Move, MoveOutcome};
//!
//! let mut board = Board::new();
//! println!("Starting position has {} legal moves", board.legal_moves().len());
//! let outcome = board.apply("e2e5".parse::<Move>().unwrap()).unwrap();
//! assert_eq!(outcome, MoveOutcome::TargetInvalid);
//! ```

mod builder;
mod error;
mod fen;
mod history;
mod legality;
mod make_unmake;
mod movegen;
pub mod prelude;
mod san;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{ChessError, FenError, MoveParseError, SquareError};
pub use fen::{FenFields, STARTING_FEN};
pub use state::{Board, PlayedMove, UnmakeInfo};
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, Move, MoveOutcome, Piece, Square,
};

pub(crate) use types::{file_to_index, rank_to_index, PROMOTION_PIECES};
