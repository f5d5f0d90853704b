//! Zobrist hashing for chess positions.
//!
//! One 64-bit key per (piece, color, square), one for Black to move, one per
//! castling right and one per en-passant file. Keys come from a fixed-seed
//! generator, so hashes are stable within and across runs of the same build.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{CastlingRights, Color, Piece, Square};

const ZOBRIST_SEED: u64 = 1_234_567_890;

pub(crate) struct ZobristKeys {
    // piece_keys[piece_type][color][square_index]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6],
    pub(crate) black_to_move_key: u64,
    // castling_keys[color][side] : 0=White, 1=Black; 0=Kingside, 1=Queenside
    pub(crate) castling_keys: [[u64; 2]; 2],
    // en_passant_keys[file_index] (only file matters for EP target)
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut castling_keys = [[0; 2]; 2];
        let mut en_passant_keys = [0; 8];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece.index()][color.index()][sq.as_index()]
    }

    /// XOR of the keys for every right held.
    pub(crate) fn castling(&self, rights: CastlingRights) -> u64 {
        CastlingRights::ORDERED
            .iter()
            .filter(|(color, kingside)| rights.has(*color, *kingside))
            .fold(0, |acc, (color, kingside)| {
                acc ^ self.castling_keys[color.index()][usize::from(!*kingside)]
            })
    }

    #[inline]
    pub(crate) fn en_passant(&self, target: Option<Square>) -> u64 {
        target.map_or(0, |sq| self.en_passant_keys[sq.file()])
    }
}

// Initialize Zobrist keys lazily and globally
pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
