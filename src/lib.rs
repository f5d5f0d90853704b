//! Chess rules engine.
//!
//! Validates and applies moves, keeps castling rights, en-passant target and
//! clocks current, undoes moves exactly, and explores variations through a
//! [`Game`] with a navigable cursor.
//!
//! ```
//! use chess_rules::{Board, Move, MoveOutcome};
//!
//! let mut board = Board::new();
//! for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     let mv: Move = text.parse().unwrap();
//!     assert_eq!(board.apply(mv).unwrap(), MoveOutcome::Ok);
//! }
//! assert!(board.is_checkmate());
//! ```

#[cfg(feature = "logging")]
macro_rules! rules_debug {
    ($($arg:tt)*) => (log::debug!($($arg)*))
}

#[cfg(not(feature = "logging"))]
macro_rules! rules_debug {
    ($($arg:tt)*) => {{
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(feature = "logging")]
macro_rules! rules_trace {
    ($($arg:tt)*) => (log::trace!($($arg)*))
}

#[cfg(not(feature = "logging"))]
macro_rules! rules_trace {
    ($($arg:tt)*) => {{
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}

pub mod board;
pub mod game;
mod zobrist;

pub use board::{
    Board, BoardBuilder, ChessError, Color, FenFields, Move, MoveOutcome, Piece, PlayedMove,
    Square,
};
pub use game::{Game, Node, Variation, VariationId};
