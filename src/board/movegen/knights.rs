use super::super::state::Squares;
use super::super::{Bitboard, Color, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(crate) fn knight_targets(squares: &Squares, from: Square, color: Color) -> Bitboard {
    super::step_targets(squares, from, color, &KNIGHT_OFFSETS)
}
