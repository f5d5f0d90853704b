//! FEN fields and the FEN text codec.
//!
//! [`FenFields`] is the already-parsed form a position travels in: placement,
//! side to move, the four castling flags, en-passant target and both clocks.
//! The text form (`rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1`)
//! parses into and prints from it.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::FenError;
use super::{
    file_to_index, rank_to_index, Board, CastlingRights, ChessError, Color, Piece, Square,
};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A position as separate FEN fields.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FenFields {
    /// `placement[rank][file]`, rank 0 is White's back rank.
    pub placement: [[Option<(Color, Piece)>; 8]; 8],
    pub white_to_move: bool,
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl FenFields {
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        CastlingRights::from_flags(
            self.white_kingside,
            self.white_queenside,
            self.black_kingside,
            self.black_queenside,
        )
    }

    fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.white_kingside = rights.has(Color::White, true);
        self.white_queenside = rights.has(Color::White, false);
        self.black_kingside = rights.has(Color::Black, true);
        self.black_queenside = rights.has(Color::Black, false);
    }

    fn empty() -> Self {
        FenFields {
            placement: [[None; 8]; 8],
            white_to_move: true,
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl Default for FenFields {
    /// The standard starting position.
    fn default() -> Self {
        Board::new().to_fields()
    }
}

impl FromStr for FenFields {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        let mut fields = FenFields::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Parse piece placement
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as usize;
                    if file > 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file,
                        });
                    }
                    continue;
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                fields.placement[7 - rank_idx][file] = Some((color, piece));
                file += 1;
            }
            if file < 8 {
                return Err(FenError::TooFewFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        // Parse side to move
        fields.white_to_move = match parts[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Parse castling rights
        let mut rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => rights.set(Color::White, true),
                'Q' => rights.set(Color::White, false),
                'k' => rights.set(Color::Black, true),
                'q' => rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        fields.set_castling_rights(rights);

        // Parse en passant target
        fields.en_passant = if parts[3] == "-" {
            None
        } else {
            let chars: Vec<char> = parts[3].chars().collect();
            if chars.len() == 2
                && ('a'..='h').contains(&chars[0])
                && ('1'..='8').contains(&chars[1])
            {
                Some(Square(rank_to_index(chars[1]), file_to_index(chars[0])))
            } else {
                return Err(FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                });
            }
        };

        // Clocks are optional
        if let Some(text) = parts.get(4) {
            fields.halfmove_clock = parse_counter(text)?;
        }
        if let Some(text) = parts.get(5) {
            fields.fullmove_number = parse_counter(text)?;
        }

        Ok(fields)
    }
}

fn parse_counter(text: &str) -> Result<u32, FenError> {
    text.parse().map_err(|_| FenError::InvalidCounter {
        found: text.to_string(),
    })
}

impl fmt::Display for FenFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for slot in &self.placement[rank] {
                if let Some((color, piece)) = slot {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(*color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let rights = self.castling_rights();
        let mut castling: String = CastlingRights::ORDERED
            .iter()
            .zip(['K', 'Q', 'k', 'q'])
            .filter(|((color, kingside), _)| rights.has(*color, *kingside))
            .map(|(_, c)| c)
            .collect();
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        write!(
            f,
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl Board {
    /// Build a board from already-parsed fields.
    ///
    /// Fails unless each side has exactly one king. The en-passant square
    /// must sit behind a pawn of the side not to move that could just have
    /// double-pushed past it. Check and checkmate are computed here once and
    /// cached.
    pub fn from_fields(fields: FenFields) -> Result<Self, ChessError> {
        let mut board = Board::empty();
        for (rank, row) in fields.placement.iter().enumerate() {
            for (file, slot) in row.iter().enumerate() {
                if let Some((color, piece)) = slot {
                    board.set_piece(Square(rank, file), *color, *piece);
                }
            }
        }
        board.check_kings()?;

        if let Some(ep) = fields.en_passant {
            let mover = if fields.white_to_move {
                Color::White
            } else {
                Color::Black
            };
            if !board.en_passant_consistent(ep, mover) {
                let found = if ep.is_valid() {
                    ep.to_string()
                } else {
                    format!("({}, {})", ep.rank(), ep.file())
                };
                return Err(FenError::InvalidEnPassant { found }.into());
            }
        }

        board.white_to_move = fields.white_to_move;
        board.castling_rights = fields.castling_rights();
        board.en_passant_target = fields.en_passant;
        board.halfmove_clock = fields.halfmove_clock;
        board.fullmove_number = fields.fullmove_number;
        board.finish_setup();
        Ok(board)
    }

    /// `ep` lies on the pushed side's skip rank, is empty, has that side's
    /// pawn in front of it and an empty square behind it.
    fn en_passant_consistent(&self, ep: Square, mover: Color) -> bool {
        let pushed = mover.opponent();
        let dir = pushed.pawn_direction();
        if !ep.is_valid() || ep.rank() as isize != pushed.pawn_start_rank() as isize + dir {
            return false;
        }
        let (Some(pawn_sq), Some(origin)) = (ep.offset(dir, 0), ep.offset(-dir, 0)) else {
            return false;
        };
        self.is_empty(ep)
            && self.is_empty(origin)
            && self.piece_at(pawn_sq) == Some((pushed, Piece::Pawn))
    }

    /// The current position as FEN fields.
    #[must_use]
    pub fn to_fields(&self) -> FenFields {
        let mut fields = FenFields::empty();
        for (sq, color, piece) in self.pieces() {
            fields.placement[sq.rank()][sq.file()] = Some((color, piece));
        }
        fields.white_to_move = self.white_to_move;
        fields.set_castling_rights(self.castling_rights);
        fields.en_passant = self.en_passant_target;
        fields.halfmove_clock = self.halfmove_clock;
        fields.fullmove_number = self.fullmove_number;
        fields
    }

    /// Parse a board position from FEN notation.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let fields: FenFields = fen.parse()?;
        Board::from_fields(fields)
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        self.to_fields().to_string()
    }
}

impl FromStr for Board {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_round_trip() {
        let board = Board::from_fen(STARTING_FEN).unwrap();
        assert_eq!(board.to_fen(), STARTING_FEN);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_fields_round_trip() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 3 17";
        let fields: FenFields = fen.parse().unwrap();
        let board = Board::from_fields(fields.clone()).unwrap();
        assert_eq!(board.to_fields(), fields);
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_fen_black_to_move() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let board = Board::from_fen(fen).unwrap();
        assert!(!board.white_to_move());
        assert_eq!(board.en_passant_target(), Some(Square(2, 4)));
    }

    #[test]
    fn test_fen_error_too_few_parts() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w".parse::<FenFields>();
        assert!(matches!(result, Err(FenError::TooFewParts { found: 2 })));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result =
            "rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<FenFields>();
        assert!(matches!(result, Err(FenError::InvalidPiece { char: 'x' })));
    }

    #[test]
    fn test_fen_error_rank_shape() {
        let short = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1".parse::<FenFields>();
        assert!(matches!(short, Err(FenError::InvalidRank { rank: 7 })));

        let wide = "rnbqkbnr/pppppppp/8p/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<FenFields>();
        assert!(matches!(wide, Err(FenError::TooManyFiles { rank: 2, files: 9 })));

        let narrow = "rnbqkbnr/pppppppp/7/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<FenFields>();
        assert!(matches!(
            narrow,
            Err(FenError::TooFewFiles { rank: 2, files: 7 })
        ));
    }

    #[test]
    fn test_fen_error_invalid_side_castling_and_en_passant() {
        assert!(matches!(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1".parse::<FenFields>(),
            Err(FenError::InvalidSideToMove { .. })
        ));
        assert!(matches!(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1".parse::<FenFields>(),
            Err(FenError::InvalidCastling { char: 'X' })
        ));
        assert!(matches!(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1".parse::<FenFields>(),
            Err(FenError::InvalidEnPassant { .. })
        ));
    }

    #[test]
    fn test_en_passant_on_wrong_rank_is_rejected() {
        // e3 cannot be a target with White to move; d2xe3 would remove the knight on e2.
        assert!(matches!(
            Board::from_fen("4k3/8/8/8/8/8/3PN3/4K3 w - e3 0 1"),
            Err(ChessError::Fen(FenError::InvalidEnPassant { .. }))
        ));
        assert!(matches!(
            Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 b - d6 0 1"),
            Err(ChessError::Fen(FenError::InvalidEnPassant { .. }))
        ));
    }

    #[test]
    fn test_en_passant_without_pushed_pawn_is_rejected() {
        assert!(matches!(
            Board::from_fen("4k3/8/8/3P4/8/8/8/4K3 w - e6 0 1"),
            Err(ChessError::Fen(FenError::InvalidEnPassant { .. }))
        ));
        // A knight in front of the target is not a pushed pawn.
        assert!(matches!(
            Board::from_fen("4k3/8/8/3Pn3/8/8/8/4K3 w - e6 0 1"),
            Err(ChessError::Fen(FenError::InvalidEnPassant { .. }))
        ));
        // The king stands on e5.
        assert!(matches!(
            Board::from_fen("8/8/8/3Pk3/8/8/8/4K3 w - e6 0 1"),
            Err(ChessError::Fen(FenError::InvalidEnPassant { .. }))
        ));
        // Occupied target and occupied origin.
        assert!(matches!(
            Board::from_fen("4k3/8/4n3/3Pp3/8/8/8/4K3 w - e6 0 1"),
            Err(ChessError::Fen(FenError::InvalidEnPassant { .. }))
        ));
        assert!(matches!(
            Board::from_fen("4k3/4n3/8/3Pp3/8/8/8/4K3 w - e6 0 1"),
            Err(ChessError::Fen(FenError::InvalidEnPassant { .. }))
        ));
    }

    #[test]
    fn test_consistent_en_passant_is_accepted() {
        let board = Board::from_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1").unwrap();
        assert_eq!(board.en_passant_target(), Some(Square(5, 4)));
        let board = Board::from_fen("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1").unwrap();
        assert_eq!(board.en_passant_target(), Some(Square(2, 4)));
    }

    #[test]
    fn test_fen_error_invalid_counter() {
        let result = "8/8/8/8/8/8/8/K1k5 w - - x 1".parse::<FenFields>();
        assert!(matches!(result, Err(FenError::InvalidCounter { .. })));
    }

    #[test]
    fn test_fen_partial_castling() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
        let rights = board.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(rights.has(Color::Black, false));
    }

    #[test]
    fn test_clocks_default_when_missing() {
        let board = Board::from_fen("8/8/8/8/8/8/8/K1k5 w - -").unwrap();
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.fullmove_number(), 1);

        let board = Board::from_fen("8/8/8/8/8/8/8/K1k5 w - - 42 77").unwrap();
        assert_eq!(board.halfmove_clock(), 42);
        assert_eq!(board.fullmove_number(), 77);
    }

    #[test]
    fn test_king_count_is_enforced() {
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8/K7 w - - 0 1"),
            Err(ChessError::MissingKing {
                color: Color::Black
            })
        ));
        assert!(matches!(
            Board::from_fen("k7/8/8/8/8/8/8/K6K w - - 0 1"),
            Err(ChessError::TooManyKings {
                color: Color::White,
                count: 2
            })
        ));
    }

    #[test]
    fn test_format_error_wraps_into_chess_error() {
        let result: Result<Board, ChessError> = "not a fen".parse();
        assert!(matches!(result, Err(ChessError::Fen(FenError::TooFewParts { .. }))));
    }

    #[test]
    fn test_cached_status_on_construction() {
        let board = Board::from_fen("1k6/8/8/8/8/8/PPP5/1K3r2 w - - 0 1").unwrap();
        assert!(board.is_check());
        assert!(board.is_checkmate());
    }
}
