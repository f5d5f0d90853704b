//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation node counts
//! - `draw.rs` - Fifty-move rule and repetition
//! - `make_unmake.rs` - Apply/undo correctness
//! - `edge_cases.rs` - Special moves and rejection outcomes
//! - `proptest.rs` - Property-based tests


use crate::board::{Board, Move, MoveOutcome};

/// Parse an engine-notation move, panicking on bad test input.
pub(super) fn mv(text: &str) -> Move {
    text.parse()
        .unwrap_or_else(|err| panic!("bad test move {text}: {err}"))
}

/// Apply a sequence of moves that must all be legal.
pub(super) fn play_all(board: &mut Board, moves: &[&str]) {
    for text in moves {
        let outcome = board.apply(mv(text)).unwrap();
        assert_eq!(outcome, MoveOutcome::Ok, "move {text} was rejected");
    }
}
