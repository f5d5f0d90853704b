use std::env;
use std::process::ExitCode;

use chess_rules::{Board, Move, MoveOutcome};

const USAGE: &str = "usage: position_status [--fen <fen>] <move1> <move2> ...";

fn main() -> ExitCode {
    let mut args = env::args().skip(1).peekable();

    let mut board = if args.peek().map(String::as_str) == Some("--fen") {
        args.next();
        let Some(fen) = args.next() else {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        };
        match Board::from_fen(&fen) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("invalid fen: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        Board::new()
    };

    for text in args {
        let mv: Move = match text.parse() {
            Ok(mv) => mv,
            Err(err) => {
                eprintln!("{text}: {err}");
                return ExitCode::FAILURE;
            }
        };
        match board.apply(mv) {
            Ok(MoveOutcome::Ok) => {}
            Ok(outcome) => {
                eprintln!("{text}: {outcome}");
                return ExitCode::FAILURE;
            }
            Err(err) => {
                eprintln!("{text}: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let legal_moves = board.legal_moves();
    println!("fen: {}", board.to_fen());
    println!("side_to_move: {}", board.side_to_move());
    println!("check: {}", board.is_check());
    println!("checkmate: {}", board.is_checkmate());
    println!("stalemate: {}", board.is_stalemate());
    println!("halfmove_clock: {}", board.halfmove_clock());
    println!("legal_moves: {}", legal_moves.len());
    for mv in legal_moves {
        let san = board.move_to_san(mv).unwrap_or_default();
        println!("{mv} {san}");
    }
    ExitCode::SUCCESS
}
