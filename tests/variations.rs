use chess_rules::{ChessError, Game, Move, MoveOutcome, Node};

fn m(text: &str) -> Move {
    text.parse().expect("valid move text")
}

fn game_with_main(moves: &[&str]) -> Game {
    let mut game = Game::new();
    for text in moves {
        assert_eq!(game.play(m(text)).unwrap(), MoveOutcome::Ok);
    }
    game
}

#[test]
fn playing_at_the_tip_extends_the_main_line() {
    let game = game_with_main(&["e2e4", "e7e5", "g1f3"]);
    assert_eq!(game.cursor(), Node::MainLine(2));
    assert_eq!(game.main_line().count(), 3);
    assert_eq!(game.observer(), game.board());
    assert_eq!(game.variations().count(), 0);
}

#[test]
fn rejected_move_changes_nothing() {
    let mut game = game_with_main(&["e2e4"]);
    assert_eq!(game.play(m("e2e4")).unwrap(), MoveOutcome::PieceNotFound);
    assert_eq!(game.play(m("d2d4")).unwrap(), MoveOutcome::WrongColor);
    assert_eq!(game.cursor(), Node::MainLine(0));
    assert_eq!(game.variations().count(), 0);
}

#[test]
fn deviating_creates_a_variation() {
    let mut game = game_with_main(&["e2e4", "e7e5", "g1f3", "b8c6"]);
    game.go_to(Node::MainLine(1)).unwrap();
    assert_eq!(game.play(m("f1c4")).unwrap(), MoveOutcome::Ok);

    let Node::Variation(id, 0) = game.cursor() else {
        panic!("expected a new variation, got {}", game.cursor());
    };
    let variation = game.variation(id).unwrap();
    assert_eq!(variation.start_ply(), 2);
    assert_eq!(variation.parent(), None);
    assert_eq!(variation.moves(), &[m("f1c4")]);

    // The main line is untouched.
    assert_eq!(game.main_line().count(), 4);
    assert_eq!(game.board().moves()[2].mv, m("g1f3"));

    // Playing on from the variation's end extends it.
    assert_eq!(game.play(m("f8c5")).unwrap(), MoveOutcome::Ok);
    assert_eq!(game.cursor(), Node::Variation(id, 1));
    assert_eq!(game.variation(id).unwrap().moves().len(), 2);
    assert_eq!(game.variations_at(Node::MainLine(1)), vec![id]);
}

#[test]
fn replaying_recorded_moves_only_moves_the_cursor() {
    let mut game = game_with_main(&["e2e4", "e7e5", "g1f3"]);
    game.go_to_start();
    assert_eq!(game.play(m("e2e4")).unwrap(), MoveOutcome::Ok);
    assert_eq!(game.cursor(), Node::MainLine(0));

    game.play(m("c7c5")).unwrap();
    let Node::Variation(sicilian, 0) = game.cursor() else {
        panic!("expected a variation");
    };
    game.go_to(Node::MainLine(0)).unwrap();
    assert_eq!(game.play(m("c7c5")).unwrap(), MoveOutcome::Ok);
    assert_eq!(game.cursor(), Node::Variation(sicilian, 0));
    assert_eq!(game.variations().count(), 1);
}

#[test]
fn nested_variation_and_navigation() {
    let mut game = game_with_main(&["e2e4", "e7e5", "g1f3", "b8c6"]);
    game.create_variation(2, &[m("f1c4"), m("f8c5"), m("c2c3")])
        .unwrap();
    let Node::Variation(outer, 2) = game.cursor() else {
        panic!("expected the end of the variation");
    };

    // Branch off the variation's second move.
    game.go_to(Node::Variation(outer, 0)).unwrap();
    assert_eq!(game.play(m("g8f6")).unwrap(), MoveOutcome::Ok);
    let Node::Variation(inner, 0) = game.cursor() else {
        panic!("expected a nested variation");
    };
    let nested = game.variation(inner).unwrap();
    assert_eq!(nested.parent(), Some((outer, 1)));
    assert_eq!(nested.start_ply(), 2);

    let fen_before = game.observer().to_fen();
    assert!(game.backward());
    assert_eq!(game.cursor(), Node::Variation(outer, 0));
    assert!(game.forward().unwrap());
    assert_eq!(game.cursor(), Node::Variation(outer, 1));
    game.go_to(Node::Variation(inner, 0)).unwrap();
    assert_eq!(game.observer().to_fen(), fen_before);

    // Walking back from the nested line lands on the main line, then the start.
    while game.backward() {}
    assert_eq!(game.cursor(), Node::Start);
    assert_eq!(game.observer(), &chess_rules::Board::new());
}

#[test]
fn backward_and_forward_on_the_main_line() {
    let mut game = game_with_main(&["d2d4", "d7d5"]);
    assert!(game.backward());
    assert_eq!(game.cursor(), Node::MainLine(0));
    assert_eq!(game.observer().moves().len(), 1);
    assert!(game.forward().unwrap());
    assert!(!game.forward().unwrap());
    assert_eq!(game.observer(), game.board());

    game.go_to_start();
    assert!(!game.backward());
    assert_eq!(game.cursor(), Node::Start);
}

#[test]
fn go_to_unknown_node_is_an_error() {
    let mut game = game_with_main(&["e2e4"]);
    assert!(matches!(
        game.go_to(Node::MainLine(5)),
        Err(ChessError::UnknownNode { .. })
    ));
    assert!(matches!(
        game.create_variation(3, &[m("e7e5")]),
        Err(ChessError::UnknownNode { .. })
    ));
    assert_eq!(game.cursor(), Node::MainLine(0));
}

#[test]
fn create_variation_stops_at_first_rejection() {
    let mut game = game_with_main(&["e2e4", "e7e5"]);
    let outcome = game
        .create_variation(1, &[m("c7c5"), m("g1f3"), m("c7c5"), m("d7d6")])
        .unwrap();
    assert_eq!(outcome, MoveOutcome::PieceNotFound);
    let Node::Variation(id, 1) = game.cursor() else {
        panic!("expected the cursor after g1f3");
    };
    assert_eq!(game.variation(id).unwrap().moves(), &[m("c7c5"), m("g1f3")]);
}

#[test]
fn main_line_and_observer_stay_in_step_at_the_tip() {
    let mut game = game_with_main(&["e2e4", "e7e5"]);
    assert_eq!(game.push_main(m("g1f3")).unwrap(), MoveOutcome::Ok);
    assert_eq!(game.cursor(), Node::MainLine(2));
    assert_eq!(game.observer(), game.board());

    game.go_to(Node::MainLine(0)).unwrap();
    game.play(m("c7c5")).unwrap();
    game.go_to(Node::MainLine(2)).unwrap();
    assert_eq!(game.play(m("b8c6")).unwrap(), MoveOutcome::Ok);
    assert_eq!(game.cursor(), Node::MainLine(3));
    assert_eq!(game.observer().to_fen(), game.board().to_fen());
}

#[test]
fn push_main_leaves_a_browsing_cursor_alone() {
    let mut game = game_with_main(&["e2e4", "e7e5"]);
    game.go_to(Node::MainLine(0)).unwrap();
    assert_eq!(game.push_main(m("g1f3")).unwrap(), MoveOutcome::Ok);
    assert_eq!(game.cursor(), Node::MainLine(0));
    assert_eq!(game.main_line().count(), 3);

    game.go_to(Node::MainLine(2)).unwrap();
    assert_eq!(game.push_main(m("b8c6")).unwrap(), MoveOutcome::Ok);
    assert_eq!(game.cursor(), Node::MainLine(3));
    assert_eq!(game.observer(), game.board());
}

#[test]
fn undo_main_prunes_later_variations() {
    let mut game = game_with_main(&["e2e4", "e7e5", "g1f3"]);
    game.create_variation(1, &[m("c7c5")]).unwrap();
    game.create_variation(2, &[m("f1c4")]).unwrap();
    assert_eq!(game.variations().count(), 2);

    let undone = game.undo_main().unwrap();
    assert_eq!(undone.mv, m("g1f3"));
    assert_eq!(game.variations().count(), 1);
    assert_eq!(game.cursor(), Node::MainLine(1));
    assert_eq!(game.observer(), game.board());

    game.undo_main().unwrap();
    assert_eq!(game.variations().count(), 0);
    game.undo_main().unwrap();
    assert!(game.undo_main().is_none());
    assert_eq!(game.cursor(), Node::Start);
}

#[test]
fn game_from_fen() {
    let mut game = Game::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
    assert_eq!(game.play(m("e2e4")).unwrap(), MoveOutcome::Ok);
    game.go_to_start();
    assert_eq!(game.observer().to_fen(), "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
    assert_eq!(game.start_fields().to_string(), "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
    assert!(Game::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").is_err());
}
