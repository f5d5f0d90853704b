//! Benchmarks for move generation, validation and apply/undo.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::{Board, Game, Move, Node};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn parse_line(line: &str) -> Vec<Move> {
    line.split_whitespace()
        .map(|text| text.parse().expect("valid move text"))
        .collect()
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);

    let mut board = Board::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    let mut kiwipete = Board::from_fen(KIWIPETE).expect("valid fen");
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let positions = [
        ("startpos", chess_rules::board::STARTING_FEN),
        ("middlegame", MIDDLEGAME),
        ("kiwipete", KIWIPETE),
    ];
    for (name, fen) in positions {
        let board = Board::from_fen(fen).expect("valid fen");
        group.bench_with_input(BenchmarkId::new("legal_moves", name), &board, |b, board| {
            b.iter(|| black_box(board.legal_moves()))
        });
    }

    group.finish();
}

fn bench_apply_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_undo");

    let mut board = Board::from_fen(MIDDLEGAME).expect("valid fen");
    let moves = board.legal_moves();
    group.bench_function("middlegame_all_moves", |b| {
        b.iter(|| {
            for &mv in &moves {
                board.apply(black_box(mv)).expect("valid promotion field");
                board.undo();
            }
        })
    });

    let board = Board::from_fen(KIWIPETE).expect("valid fen");
    let castle: Move = "e1g1".parse().expect("valid move text");
    group.bench_function("validate_castle", |b| {
        b.iter(|| board.validate(black_box(castle)))
    });

    group.finish();
}

fn bench_game_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("game");

    let mut game = Game::new();
    let main = parse_line("e2e4 e7e5 g1f3 b8c6 f1b5 a7a6 b5a4 g8f6 e1g1 f8e7 f1e1 b7b5");
    for &mv in &main {
        game.play(mv).expect("valid promotion field");
    }
    game.create_variation(4, &parse_line("f1c4 f8c5 c2c3 g8f6 d2d4 e5d4"))
        .expect("main line is long enough");
    let Node::Variation(id, last) = game.cursor() else {
        panic!("variation was not created");
    };

    group.bench_function("go_to_variation_end", |b| {
        b.iter(|| game.go_to(black_box(Node::Variation(id, last))))
    });
    group.bench_function("go_to_main_tip", |b| {
        b.iter(|| game.go_to(black_box(Node::MainLine(main.len() - 1))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_apply_undo,
    bench_game_navigation
);
criterion_main!(benches);
