//! Core chess types.
//!
//! This module contains the value types the rules engine is built from:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (rank, file) coordinate with an off-board sentinel
//! - `Bitboard` - 64-bit square set used for destination sets
//! - `Move` and `MoveOutcome` - move requests and validation results
//! - `CastlingRights` - castling state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use moves::{Move, MoveOutcome};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
pub(crate) use square::{file_to_index, rank_to_index};
