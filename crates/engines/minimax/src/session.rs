//! A human-vs-engine game.
//!
//! [`GameSession`] owns the authoritative [`Game`]. The engine only ever sees
//! a snapshot: each AI turn goes `Idle -> Searching -> MoveChosen -> Idle`,
//! and the chosen move is applied back to the live game in the last step.

use std::{fs::File, io::BufWriter, path::Path, thread::JoinHandle};

use chess_core::{Color, Game, Move, Outcome, PieceKind, RulesError, coord_to_sq, sq_to_coord};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    config::EngineConfig,
    error::SessionError,
    selector::{Choice, SearchOptions, choose_move},
};

/// Points awarded for beating the engine.
pub const WIN_POINTS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    /// A snapshot is being searched; the live game is frozen.
    Searching,
    /// The search finished and the move waits to be applied.
    MoveChosen(Move),
}

/// Result of the game as the human sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// `None` when the engine had no legal move
    pub ai_move: Option<Move>,
    pub score: Option<i32>,
    pub nodes: u64,
    pub status: GameStatus,
    pub outcome: Option<Outcome>,
}

/// Finished (or abandoned) game as it would be sent to a score store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub human_color: Color,
    pub moves: Vec<String>,
    pub status: GameStatus,
    pub final_fen: String,
    pub points: u32,
}

impl GameRecord {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }
}

pub struct GameSession {
    game: Game,
    options: SearchOptions,
    turn: TurnState,
    history: Vec<String>,
}

impl GameSession {
    /// New game from the start position. The human plays the side the
    /// engine does not.
    pub fn new(options: SearchOptions) -> Self {
        Self::from_game(Game::new(), options)
    }

    pub fn from_game(game: Game, options: SearchOptions) -> Self {
        Self {
            game,
            options,
            turn: TurnState::Idle,
            history: Vec::new(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.search_options())
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn ai_color(&self) -> Color {
        self.options.ai_color
    }

    pub fn human_color(&self) -> Color {
        self.options.ai_color.other()
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    /// Moves played through this session, as `from-to`.
    pub fn move_history(&self) -> &[String] {
        &self.history
    }

    pub fn is_human_turn(&self) -> bool {
        self.game.side_to_move() == self.human_color() && !self.game.is_game_over()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.game.outcome()
    }

    pub fn status(&self) -> GameStatus {
        match self.outcome() {
            None => GameStatus::Playing,
            Some(Outcome::Checkmate { winner }) if winner == self.human_color() => GameStatus::Won,
            Some(Outcome::Checkmate { .. }) => GameStatus::Lost,
            Some(Outcome::Draw(_)) => GameStatus::Draw,
        }
    }

    /// Plays the human's move given as two squares, e.g. `("e2", "e4")`.
    /// Pawns reaching the last rank become queens.
    pub fn play_human_move(&mut self, from: &str, to: &str) -> Result<Move, SessionError> {
        self.expect_idle("play a human move")?;
        if self.game.is_game_over() {
            return Err(SessionError::GameOver);
        }
        if self.game.side_to_move() != self.human_color() {
            return Err(SessionError::NotYourTurn(self.human_color()));
        }

        let from_sq = coord_to_sq(from).ok_or_else(|| SessionError::InvalidSquare(from.into()))?;
        let to_sq = coord_to_sq(to).ok_or_else(|| SessionError::InvalidSquare(to.into()))?;
        let mv = self
            .game
            .legal_moves()
            .into_iter()
            .find(|m| {
                m.from == from_sq
                    && m.to == to_sq
                    && m.promo.is_none_or(|p| p == PieceKind::Queen)
            })
            .ok_or_else(|| {
                warn!(from, to, fen = %self.game.fen(), "rejected human move");
                RulesError::IllegalMove {
                    mv: format!("{from}{to}"),
                    fen: self.game.fen(),
                }
            })?;

        self.commit(mv)?;
        Ok(mv)
    }

    /// Enters `Searching` and hands out the snapshot to search.
    pub fn begin_ai_turn(&mut self) -> Result<Game, SessionError> {
        self.expect_idle("start a search")?;
        if self.game.is_game_over() {
            return Err(SessionError::GameOver);
        }
        if self.game.side_to_move() != self.ai_color() {
            return Err(SessionError::NotYourTurn(self.ai_color()));
        }
        self.turn = TurnState::Searching;
        Ok(self.game.clone())
    }

    /// Leaves `Searching` with the search result and applies the move.
    pub fn finish_ai_turn(&mut self, choice: Option<Choice>) -> Result<TurnReport, SessionError> {
        if self.turn != TurnState::Searching {
            return Err(SessionError::InvalidTransition {
                state: self.turn,
                event: "finish a search",
            });
        }
        let Some(choice) = choice else {
            self.turn = TurnState::Idle;
            return Ok(self.report(None));
        };

        self.turn = TurnState::MoveChosen(choice.mv);
        let applied = self.commit(choice.mv);
        self.turn = TurnState::Idle;
        applied?;
        Ok(self.report(Some(choice)))
    }

    /// Abandons a search in progress, e.g. after its worker failed.
    pub fn cancel_ai_turn(&mut self) {
        if self.turn == TurnState::Searching {
            self.turn = TurnState::Idle;
        }
    }

    /// Searches and plays the engine's move on the calling thread.
    ///
    /// A game that is already decided is reported, not rejected, so the
    /// caller learns the outcome either way.
    pub fn play_ai_turn(&mut self) -> Result<TurnReport, SessionError> {
        self.expect_idle("start a search")?;
        if self.game.is_game_over() {
            return Ok(self.report(None));
        }

        let snapshot = self.begin_ai_turn()?;
        match choose_move(&snapshot, &self.options) {
            Ok(choice) => self.finish_ai_turn(choice),
            Err(e) => {
                self.cancel_ai_turn();
                Err(e.into())
            }
        }
    }

    /// Starts over from the initial position with the same settings.
    pub fn reset(&mut self) {
        self.game = Game::new();
        self.turn = TurnState::Idle;
        self.history.clear();
    }

    pub fn record(&self) -> GameRecord {
        let status = self.status();
        GameRecord {
            human_color: self.human_color(),
            moves: self.history.clone(),
            status,
            final_fen: self.game.fen(),
            points: if status == GameStatus::Won { WIN_POINTS } else { 0 },
        }
    }

    fn expect_idle(&self, event: &'static str) -> Result<(), SessionError> {
        match self.turn {
            TurnState::Idle => Ok(()),
            state => Err(SessionError::InvalidTransition { state, event }),
        }
    }

    fn commit(&mut self, mv: Move) -> Result<(), SessionError> {
        self.game.apply_move(mv)?;
        self.history
            .push(format!("{}-{}", sq_to_coord(mv.from), sq_to_coord(mv.to)));
        if let Some(outcome) = self.game.outcome() {
            info!(?outcome, status = ?self.status(), moves = self.history.len(), "game over");
        }
        Ok(())
    }

    fn report(&self, choice: Option<Choice>) -> TurnReport {
        TurnReport {
            ai_move: choice.map(|c| c.mv),
            score: choice.map(|c| c.score),
            nodes: choice.map_or(0, |c| c.nodes),
            status: self.status(),
            outcome: self.outcome(),
        }
    }
}

/// Runs [`choose_move`] for an owned snapshot on a worker thread.
///
/// The snapshot moves into the thread, so nothing else can observe or alias
/// it while the search runs. Join the handle for the result.
pub fn search_in_background(
    game: Game,
    options: SearchOptions,
) -> JoinHandle<Result<Option<Choice>, RulesError>> {
    std::thread::spawn(move || choose_move(&game, &options))
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
