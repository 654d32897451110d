use super::*;
use crate::eval::MATE_THRESHOLD;
use chess_core::move_to_uci;

fn options(depth: u8, ai_color: Color) -> SearchOptions {
    SearchOptions {
        depth,
        ai_color,
        ..SearchOptions::default()
    }
}

#[test]
fn test_defaults() {
    let opts = SearchOptions::default();
    assert_eq!(opts.depth, 3);
    assert_eq!(opts.ai_color, Color::Black);
    assert_eq!(opts.tie_break, TieBreak::First);
    assert!(opts.pruning);
}

#[test]
fn test_white_mates_in_one() {
    let game = Game::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    let choice = choose_move(&game, &options(2, Color::White)).unwrap().unwrap();
    assert_eq!(move_to_uci(choice.mv), "e1e8");
    assert!(choice.score >= MATE_THRESHOLD);
}

#[test]
fn test_black_mates_in_one() {
    let game = Game::from_fen("4q1k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1").unwrap();
    let choice = choose_move(&game, &options(1, Color::Black)).unwrap().unwrap();
    assert_eq!(move_to_uci(choice.mv), "e8e1");
    assert!(choice.score <= -MATE_THRESHOLD);
}

#[test]
fn test_black_takes_hanging_queen() {
    let game = Game::from_fen("4k3/p7/5n2/3Q4/8/8/8/4K3 b - - 0 1").unwrap();
    let choice = choose_move(&game, &options(2, Color::Black)).unwrap().unwrap();
    assert_eq!(move_to_uci(choice.mv), "f6d5");
    assert!(choice.score < -200);
}

#[test]
fn test_no_legal_moves_returns_none() {
    let stalemate = Game::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(choose_move(&stalemate, &SearchOptions::default()).unwrap(), None);
}

#[test]
fn test_depth_zero_is_clamped() {
    let game = Game::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    let choice = choose_move(&game, &options(0, Color::White)).unwrap().unwrap();
    assert_eq!(move_to_uci(choice.mv), "e1e8");
}

#[test]
fn test_first_tie_break_is_generation_order() {
    // Bare kings: every move draws, so all scores tie at zero.
    let game = Game::from_fen("8/8/8/4k3/8/8/8/K7 w - - 0 1").unwrap();
    let first = game.legal_moves()[0];
    let choice = choose_move(&game, &options(1, Color::White)).unwrap().unwrap();
    assert_eq!(choice.mv, first);
    assert_eq!(choice.score, 0);
}

#[test]
fn test_seeded_random_tie_break_is_reproducible() {
    let game = Game::from_fen("8/8/8/4k3/8/8/8/K7 w - - 0 1").unwrap();
    let opts = SearchOptions {
        depth: 1,
        ai_color: Color::White,
        tie_break: TieBreak::Random,
        seed: Some(7),
        ..SearchOptions::default()
    };
    let a = choose_move(&game, &opts).unwrap().unwrap();
    let b = choose_move(&game, &opts).unwrap().unwrap();
    assert_eq!(a, b);
    assert!(game.legal_moves().contains(&a.mv));
}

#[test]
fn test_tie_break_parse() {
    assert_eq!("first".parse::<TieBreak>().unwrap(), TieBreak::First);
    assert_eq!("Random".parse::<TieBreak>().unwrap(), TieBreak::Random);
    assert!("best".parse::<TieBreak>().is_err());
}
