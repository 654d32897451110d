use super::*;
use crate::uci::parse_uci_move;

fn play(game: &mut Game, uci: &str) {
    let mv = parse_uci_move(game.position(), uci).expect("legal move text");
    game.apply_move(mv).unwrap();
}

#[test]
fn test_apply_and_undo_restore_game() {
    let mut game = Game::new();
    let before = game.clone();
    for uci in ["e2e4", "e7e5", "g1f3", "b8c6"] {
        play(&mut game, uci);
    }
    assert_eq!(game.ply_count(), 4);
    for _ in 0..4 {
        game.undo_last_move().unwrap();
    }
    assert_eq!(game, before);
    assert_eq!(game.undo_last_move(), Err(RulesError::NothingToUndo));
}

#[test]
fn test_apply_rejects_illegal_move() {
    let mut game = Game::new();
    let before = game.clone();
    // e2e5 is not a pawn move from the start.
    let err = game.apply_move(Move::new(12, 36)).unwrap_err();
    assert!(matches!(err, RulesError::IllegalMove { .. }));
    assert_eq!(game, before);
}

#[test]
fn test_checkmate_outcome() {
    let game =
        Game::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
            .unwrap();
    assert!(game.is_checkmate());
    assert!(!game.is_draw());
    assert_eq!(
        game.outcome(),
        Some(Outcome::Checkmate {
            winner: Color::White
        })
    );
}

#[test]
fn test_stalemate_outcome() {
    let game = Game::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(game.is_stalemate());
    assert!(!game.is_checkmate());
    assert_eq!(game.outcome(), Some(Outcome::Draw(DrawReason::Stalemate)));
    assert!(game.legal_moves().is_empty());
}

#[test]
fn test_threefold_repetition_by_knight_shuffle() {
    let mut game = Game::new();
    for _ in 0..2 {
        for uci in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            assert!(!game.is_draw());
            play(&mut game, uci);
        }
    }
    assert_eq!(game.repetition_count(), 3);
    assert_eq!(
        game.draw_reason(),
        Some(DrawReason::ThreefoldRepetition)
    );
    // Taking a move back leaves the repetition behind.
    game.undo_last_move().unwrap();
    assert!(!game.is_draw());
}

#[test]
fn test_game_in_progress_has_no_outcome() {
    let game = Game::new();
    assert_eq!(game.outcome(), None);
    assert!(!game.is_game_over());
    assert_eq!(game.pieces().count(), 32);
}

#[test]
fn test_impossible_fens_never_reach_move_generation() {
    for fen in [
        "4k3/8/8/8/8/8/8/r3K2R b - - 0 1",
        "4k3/8/8/8/3PN3/8/8/4K3 w - e5 0 1",
        "P3k3/8/8/8/8/8/8/4K3 w - - 0 1",
    ] {
        assert!(matches!(Game::from_fen(fen), Err(RulesError::InvalidFen(_))), "{fen}");
    }
}

#[test]
fn test_en_passant_removes_only_the_pushed_pawn() {
    let mut game = Game::from_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1").unwrap();
    play(&mut game, "d5e6");
    assert_eq!(game.fen(), "4k3/8/4P3/8/8/8/8/4K3 b - - 0 1");
}
