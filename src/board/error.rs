//! Error types for chess board operations.
//!
//! Rejected moves are not errors; they come back as
//! [`MoveOutcome`](super::MoveOutcome) values. The types here cover malformed
//! external data (FEN text, engine move strings, square names) and invariant
//! violations caused by the caller.

use std::fmt;

use super::{Color, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Invalid rank in position string
    InvalidRank { rank: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Too few files in a rank
    TooFewFiles { rank: usize, files: usize },
    /// Half-move clock or full-move number is not a number
    InvalidCounter { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "Invalid rank index {rank} in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "Invalid move counter '{found}' in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Invariant violations: the caller asked for something a valid position or
/// move request can never contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A pawn reached the last rank without a promotion type
    MissingPromotion { mv: String },
    /// Promotion to a pawn or a king
    InvalidPromotion { mv: String },
    /// A promotion type on a move that does not promote
    UnexpectedPromotion { mv: String },
    /// A side has no king
    MissingKing { color: Color },
    /// A side has more than one king
    TooManyKings { color: Color, count: usize },
    /// A piece was expected on a square that is empty
    EmptySquare { square: Square },
    /// A tree node that does not exist in the game
    UnknownNode { node: String },
    /// Malformed FEN input
    Fen(FenError),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::MissingPromotion { mv } => {
                write!(f, "Move '{mv}' reaches the last rank without a promotion piece")
            }
            ChessError::InvalidPromotion { mv } => {
                write!(f, "Move '{mv}' promotes to a pawn or king")
            }
            ChessError::UnexpectedPromotion { mv } => {
                write!(f, "Move '{mv}' carries a promotion piece but does not promote")
            }
            ChessError::MissingKing { color } => write!(f, "{color} has no king"),
            ChessError::TooManyKings { color, count } => {
                write!(f, "{color} has {count} kings, expected exactly one")
            }
            ChessError::EmptySquare { square } => {
                write!(f, "Expected a piece on {square}, found none")
            }
            ChessError::UnknownNode { node } => write!(f, "Unknown move tree node {node}"),
            ChessError::Fen(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ChessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChessError::Fen(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FenError> for ChessError {
    fn from(err: FenError) -> Self {
        ChessError::Fen(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_fen_error_too_few_parts() {
        let err = FenError::TooFewParts { found: 2 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_invalid_counter() {
        let err = FenError::InvalidCounter {
            found: "x1".to_string(),
        };
        assert!(err.to_string().contains("'x1'"));
    }

    #[test]
    fn test_move_error_invalid_square() {
        let err = MoveParseError::InvalidSquare {
            notation: "z9z9".to_string(),
        };
        assert!(err.to_string().contains("z9z9"));
    }

    #[test]
    fn test_square_error_rank_bounds() {
        let err = SquareError::RankOutOfBounds { rank: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_chess_error_messages() {
        let err = ChessError::MissingPromotion {
            mv: "e7e8".to_string(),
        };
        assert!(err.to_string().contains("e7e8"));

        let err = ChessError::TooManyKings {
            color: Color::Black,
            count: 2,
        };
        assert!(err.to_string().contains("Black"));
        assert!(err.to_string().contains('2'));

        let err = ChessError::EmptySquare {
            square: Square(3, 4),
        };
        assert!(err.to_string().contains("e4"));
    }

    #[test]
    fn test_fen_error_converts_with_source() {
        let err: ChessError = FenError::InvalidRank { rank: 9 }.into();
        assert!(matches!(err, ChessError::Fen(FenError::InvalidRank { rank: 9 })));
        assert!(err.source().is_some());
    }
}
