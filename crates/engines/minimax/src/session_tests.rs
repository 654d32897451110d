use super::*;
use chess_core::{DrawReason, move_to_uci};

fn quick(depth: u8) -> SearchOptions {
    SearchOptions {
        depth,
        ..SearchOptions::default()
    }
}

fn session_at(fen: &str, depth: u8) -> GameSession {
    GameSession::from_game(Game::from_fen(fen).unwrap(), quick(depth))
}

#[test]
fn test_human_then_ai_turn() {
    let mut session = GameSession::new(quick(2));
    assert_eq!(session.human_color(), Color::White);
    assert!(session.is_human_turn());

    session.play_human_move("e2", "e4").unwrap();
    assert!(!session.is_human_turn());

    let report = session.play_ai_turn().unwrap();
    let reply = report.ai_move.expect("black has moves");
    assert_eq!(session.game().piece_at(reply.to).unwrap().color, Color::Black);
    assert_eq!(report.status, GameStatus::Playing);
    assert!(report.nodes > 0);
    assert_eq!(session.turn_state(), TurnState::Idle);
    assert_eq!(session.move_history().len(), 2);
    assert_eq!(session.move_history()[0], "e2-e4");
}

#[test]
fn test_rejects_out_of_turn_and_bad_input() {
    let mut session = GameSession::new(quick(1));
    assert_eq!(
        session.play_ai_turn().unwrap_err(),
        SessionError::NotYourTurn(Color::Black)
    );
    assert_eq!(
        session.play_human_move("e2", "z9").unwrap_err(),
        SessionError::InvalidSquare("z9".into())
    );
    assert!(matches!(
        session.play_human_move("e2", "e5").unwrap_err(),
        SessionError::Rules(RulesError::IllegalMove { .. })
    ));
    session.play_human_move("e2", "e4").unwrap();
    assert_eq!(
        session.play_human_move("d2", "d4").unwrap_err(),
        SessionError::NotYourTurn(Color::White)
    );
    assert_eq!(session.move_history(), ["e2-e4"]);
}

#[test]
fn test_human_checkmate_is_a_win() {
    let mut session = session_at("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1", 1);
    session.play_human_move("e1", "e8").unwrap();
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(
        session.outcome(),
        Some(Outcome::Checkmate {
            winner: Color::White
        })
    );

    let report = session.play_ai_turn().unwrap();
    assert_eq!(report.ai_move, None);
    assert_eq!(report.status, GameStatus::Won);

    let record = session.record();
    assert_eq!(record.points, WIN_POINTS);
    assert_eq!(record.moves, ["e1-e8"]);
    let json = record.to_json().unwrap();
    assert!(json.contains("\"points\": 100"));
    assert!(json.contains("\"status\": \"won\""));
}

#[test]
fn test_engine_checkmate_is_a_loss() {
    let mut session = session_at("4q1k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1", 2);
    let report = session.play_ai_turn().unwrap();
    assert_eq!(move_to_uci(report.ai_move.unwrap()), "e8e1");
    assert_eq!(report.status, GameStatus::Lost);
    assert_eq!(session.record().points, 0);
    assert_eq!(
        session.play_human_move("g1", "h1").unwrap_err(),
        SessionError::GameOver
    );
}

#[test]
fn test_stalemate_is_reported_as_draw() {
    let mut session = session_at("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1", 3);
    let report = session.play_ai_turn().unwrap();
    assert_eq!(report.ai_move, None);
    assert_eq!(report.status, GameStatus::Draw);
    assert_eq!(report.outcome, Some(Outcome::Draw(DrawReason::Stalemate)));
}

#[test]
fn test_promotion_defaults_to_queen() {
    let mut session = session_at("8/P6k/8/8/8/8/8/K7 w - - 0 1", 1);
    let mv = session.play_human_move("a7", "a8").unwrap();
    assert_eq!(mv.promo, Some(PieceKind::Queen));
}

#[test]
fn test_turn_state_transitions() {
    let mut session = GameSession::new(quick(1));
    assert!(matches!(
        session.finish_ai_turn(None),
        Err(SessionError::InvalidTransition {
            state: TurnState::Idle,
            ..
        })
    ));

    session.play_human_move("d2", "d4").unwrap();
    let snapshot = session.begin_ai_turn().unwrap();
    assert_eq!(session.turn_state(), TurnState::Searching);
    assert_eq!(&snapshot, session.game());
    assert!(matches!(
        session.play_human_move("e2", "e4"),
        Err(SessionError::InvalidTransition {
            state: TurnState::Searching,
            ..
        })
    ));

    session.cancel_ai_turn();
    assert_eq!(session.turn_state(), TurnState::Idle);
}

#[test]
fn test_background_search_round_trip() {
    let mut session = GameSession::new(quick(2));
    session.play_human_move("g1", "f3").unwrap();
    let before = session.game().clone();

    let snapshot = session.begin_ai_turn().unwrap();
    let handle = search_in_background(snapshot, session.options().clone());
    let choice = handle.join().unwrap().unwrap();
    assert_eq!(session.game(), &before, "live game frozen while searching");

    let report = session.finish_ai_turn(choice).unwrap();
    assert_eq!(report.ai_move, choice.map(|c| c.mv));
    assert_eq!(session.game().ply_count(), 2);
}

#[test]
fn test_reset_clears_game() {
    let mut session = GameSession::new(quick(1));
    session.play_human_move("e2", "e4").unwrap();
    session.play_ai_turn().unwrap();
    session.reset();
    assert_eq!(session.game(), &Game::new());
    assert!(session.move_history().is_empty());
    assert_eq!(session.status(), GameStatus::Playing);
}

#[test]
fn test_record_save_and_load() {
    let mut session = GameSession::new(quick(1));
    session.play_human_move("e2", "e4").unwrap();
    let record = session.record();
    assert_eq!(record.status, GameStatus::Playing);

    let path = std::env::temp_dir().join(format!("arcade-chess-record-{}.json", std::process::id()));
    record.save(&path).unwrap();
    let loaded = GameRecord::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, record);
}
