//! Minimax Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a material and
//! piece-square evaluation. Scores are White-positive; Black minimizes.
//! The [`session`] module drives a human-vs-engine game around it.

pub mod config;
pub mod error;
pub mod eval;
pub mod search;
pub mod selector;
pub mod session;

use chess_core::{Engine, Game, RulesError, SearchResult};
use tracing::warn;

pub use config::EngineConfig;
pub use error::{ConfigError, SessionError};
pub use eval::{MATE_SCORE, MATE_THRESHOLD, SCORE_INFINITY, evaluate};
pub use search::{SearchStats, mate_distance, minimax, search};
pub use selector::{Choice, SearchOptions, TieBreak, choose_move};
pub use session::{GameRecord, GameSession, GameStatus, TurnReport, TurnState, search_in_background};

/// [`Engine`] front for the UCI binary. Always plays the side to move.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    options: SearchOptions,
    /// Node counter of the last search
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SearchOptions) -> Self {
        Self { options, nodes: 0 }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_options(config.search_options())
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Depth used when the caller has no preference.
    pub fn depth(&self) -> u8 {
        self.options.depth
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, game: &Game, depth: u8) -> Result<SearchResult, RulesError> {
        let options = SearchOptions {
            depth: depth.max(1),
            ai_color: game.side_to_move(),
            ..self.options.clone()
        };
        let choice = choose_move(game, &options)?;
        self.nodes = choice.map_or(0, |c| c.nodes);

        Ok(SearchResult {
            best_move: choice.map(|c| c.mv),
            score: choice.map_or_else(|| evaluate(game), |c| c.score),
            depth: options.depth,
            nodes: self.nodes,
        })
    }

    fn name(&self) -> &str {
        "Arcade Minimax 1.0"
    }

    fn author(&self) -> &str {
        "arcade-chess"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        let applied = match name.to_ascii_lowercase().as_str() {
            "depth" => value
                .parse::<u8>()
                .map(|d| self.options.depth = d.clamp(config::MIN_DEPTH, config::MAX_DEPTH))
                .is_ok(),
            "tiebreak" => value.parse().map(|t| self.options.tie_break = t).is_ok(),
            "seed" => value
                .parse::<u64>()
                .map(|s| self.options.seed = Some(s))
                .is_ok(),
            _ => return false,
        };
        if !applied {
            warn!(name, value, "ignoring bad option value");
        }
        applied
    }
}
