//! Game-end classification through the public `Game` facade:
//! - Checkmate vs stalemate
//! - Fifty-move rule
//! - Threefold repetition
//! - Insufficient material

use chess_core::{Color, DrawReason, Game, Outcome, PieceKind, Position, parse_uci_move};

fn game(fen: &str) -> Game {
    Game::from_fen(fen).unwrap_or_else(|e| panic!("bad test FEN {fen}: {e}"))
}

fn play(game: &mut Game, moves: &[&str]) {
    for txt in moves {
        let mv = parse_uci_move(game.position(), txt)
            .unwrap_or_else(|| panic!("{txt} is not legal in {}", game.fen()));
        game.apply_move(mv).unwrap();
    }
}

// =============================================================================
// Stalemate
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    let g = game("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(g.legal_moves().is_empty());
    assert!(!g.is_check(), "stalemated king is not attacked");
    assert_eq!(g.outcome(), Some(Outcome::Draw(DrawReason::Stalemate)));
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    let g = game("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");
    assert!(g.is_stalemate());
    assert!(g.is_draw());
}

#[test]
fn test_checkmate_is_not_stalemate() {
    let g = game("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    assert!(g.legal_moves().is_empty());
    assert!(g.is_check());
    assert!(!g.is_stalemate());
    assert_eq!(
        g.outcome(),
        Some(Outcome::Checkmate {
            winner: Color::White
        })
    );
}

#[test]
fn test_check_is_not_checkmate() {
    let g = game("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2");
    assert!(g.is_check());
    assert!(!g.legal_moves().is_empty());
    assert_eq!(g.outcome(), None);
}

#[test]
fn test_fools_mate_played_out() {
    let mut g = Game::new();
    play(&mut g, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(g.is_checkmate());
    assert_eq!(
        g.outcome(),
        Some(Outcome::Checkmate {
            winner: Color::Black
        })
    );
}

// =============================================================================
// Fifty-move rule
// =============================================================================

#[test]
fn test_fifty_move_rule_at_100_halfmoves() {
    let g = game("8/8/8/4k3/8/4K3/8/7R w - - 100 60");
    assert!(g.position().is_fifty_move_draw());
    assert_eq!(g.draw_reason(), Some(DrawReason::FiftyMoveRule));
}

#[test]
fn test_fifty_move_rule_at_99_halfmoves() {
    let g = game("8/8/8/4k3/8/4K3/8/7R w - - 99 60");
    assert!(!g.position().is_fifty_move_draw());
    assert_eq!(g.outcome(), None);
}

#[test]
fn test_pawn_move_resets_halfmove_clock() {
    let mut g = game("8/8/8/4k3/8/3K4/4P3/8 w - - 99 60");
    let pawn_move = g
        .legal_moves()
        .into_iter()
        .find(|m| g.piece_at(m.from).is_some_and(|p| p.kind == PieceKind::Pawn))
        .expect("pawn on e2 can move");
    g.apply_move(pawn_move).unwrap();
    assert_eq!(g.position().halfmove_clock, 0);
    assert!(!g.is_draw());
}

#[test]
fn test_quiet_move_reaches_fifty_move_draw() {
    let mut g = game("8/8/8/4k3/8/4K3/8/7R w - - 99 60");
    play(&mut g, &["h1h2"]);
    assert_eq!(g.draw_reason(), Some(DrawReason::FiftyMoveRule));
}

// =============================================================================
// Insufficient material
// =============================================================================

#[test]
fn test_insufficient_material_cases() {
    let drawn = [
        ("8/8/8/4k3/8/4K3/8/8 w - - 0 1", "K vs K"),
        ("8/8/8/4k3/8/4KB2/8/8 w - - 0 1", "K+B vs K"),
        ("8/8/8/4k3/8/4K3/8/6N1 w - - 0 1", "K+N vs K"),
        ("8/8/4b3/4k3/8/4K3/8/8 w - - 0 1", "K vs K+B"),
        ("8/8/4n3/4k3/8/4K3/8/8 w - - 0 1", "K vs K+N"),
        // c1 and f8 are both dark squares
        ("5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1", "same-shade bishops"),
    ];
    for (fen, label) in drawn {
        let g = game(fen);
        assert!(g.position().is_insufficient_material(), "{label}");
        assert_eq!(
            g.outcome(),
            Some(Outcome::Draw(DrawReason::InsufficientMaterial)),
            "{label}"
        );
    }
}

#[test]
fn test_sufficient_material_cases() {
    let playable = [
        ("2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1", "opposite-shade bishops"),
        ("8/8/8/4k3/8/4K3/4P3/8 w - - 0 1", "K+P vs K"),
        ("8/8/8/4k3/8/4K3/8/4R3 w - - 0 1", "K+R vs K"),
        ("8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1", "K+Q vs K"),
        ("8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1", "K+N+N vs K"),
    ];
    for (fen, label) in playable {
        let g = game(fen);
        assert!(!g.position().is_insufficient_material(), "{label}");
        assert!(!g.is_draw(), "{label}");
    }
}

#[test]
fn test_capture_into_insufficient_material() {
    // Rxa8 leaves K+R vs K; Kxd2 leaves bare kings.
    let mut g = game("r3k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    play(&mut g, &["a1a8"]);
    assert!(!g.is_draw());
    let mut g = game("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1");
    play(&mut g, &["e1d2"]);
    assert_eq!(g.draw_reason(), Some(DrawReason::InsufficientMaterial));
}

// =============================================================================
// Position hashing and threefold repetition
// =============================================================================

#[test]
fn test_hash_distinguishes_side_castling_and_en_passant() {
    let hash = |fen: &str| Position::from_fen(fen).unwrap().position_hash();
    let base = hash("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert_eq!(base, Position::startpos().position_hash());
    assert_ne!(base, hash("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1"));
    assert_ne!(base, hash("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1"));
    assert_ne!(
        hash("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"),
        hash("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"),
    );
}

#[test]
fn test_hash_ignores_move_clocks() {
    let a = Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
        .unwrap();
    let b = Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 6 5")
        .unwrap();
    assert_eq!(a.position_hash(), b.position_hash());
}

#[test]
fn test_threefold_repetition_after_opening() {
    let mut g = Game::new();
    play(&mut g, &["e2e4", "e7e5", "g1f3", "b8c6"]);
    assert_eq!(g.repetition_count(), 1);

    play(&mut g, &["f3g1", "c6b8", "g1f3", "b8c6"]);
    assert_eq!(g.repetition_count(), 2);
    assert!(!g.is_draw());

    play(&mut g, &["f3g1", "c6b8", "g1f3", "b8c6"]);
    assert_eq!(g.repetition_count(), 3);
    assert_eq!(
        g.outcome(),
        Some(Outcome::Draw(DrawReason::ThreefoldRepetition))
    );
}
