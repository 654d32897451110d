//! Root move selection.

use std::str::FromStr;

use chess_core::{Color, Game, Move, RulesError};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::ConfigError,
    eval::SCORE_INFINITY,
    search::Searcher,
};

/// How to pick among root moves that share the best score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// First in generation order. Deterministic.
    #[default]
    First,
    /// Uniform among the tied moves.
    Random,
}

impl FromStr for TieBreak {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first" => Ok(TieBreak::First),
            "random" => Ok(TieBreak::Random),
            other => Err(ConfigError::Invalid(format!("unknown tie-break '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Plies searched from the root, at least 1
    pub depth: u8,
    /// Side the engine plays; Black minimizes the score
    pub ai_color: Color,
    pub tie_break: TieBreak,
    /// Alpha-beta cutoffs; off runs the plain minimax reference
    pub pruning: bool,
    /// Seed for `TieBreak::Random`. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            depth: 3,
            ai_color: Color::Black,
            tie_break: TieBreak::First,
            pruning: true,
            seed: None,
        }
    }
}

/// The move picked at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub mv: Move,
    /// White-positive score of the position after `mv`
    pub score: i32,
    pub nodes: u64,
}

/// Picks a move for the side to move in `game`.
///
/// Each root move is scored with a fresh full window, so every root score is
/// exact and the result does not depend on `options.pruning`. The search runs
/// on a private copy; `game` is never touched.
///
/// Returns `Ok(None)` when there is no legal move. Use `Game::outcome` to
/// tell checkmate from stalemate.
pub fn choose_move(game: &Game, options: &SearchOptions) -> Result<Option<Choice>, RulesError> {
    let mut work = game.clone();
    let moves = work.legal_moves();
    if moves.is_empty() {
        debug!(fen = %game.fen(), "no legal moves at root");
        return Ok(None);
    }

    let depth = options.depth.max(1);
    let ai_maximizes = options.ai_color == Color::White;
    let mut searcher = Searcher::new(options.pruning);

    let mut scored = Vec::with_capacity(moves.len());
    for mv in moves {
        work.apply_move(mv)?;
        let score = searcher.score(
            &mut work,
            depth - 1,
            -SCORE_INFINITY,
            SCORE_INFINITY,
            !ai_maximizes,
            1,
        )?;
        work.undo_last_move()?;
        scored.push((mv, score));
    }

    let best = if ai_maximizes {
        scored.iter().map(|&(_, s)| s).max()
    } else {
        scored.iter().map(|&(_, s)| s).min()
    };
    let tied: Vec<(Move, i32)> = scored.into_iter().filter(|&(_, s)| Some(s) == best).collect();

    let picked = match options.tie_break {
        TieBreak::First => tied.first(),
        TieBreak::Random => {
            let mut rng = match options.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            tied.choose(&mut rng)
        }
    };
    let Some(&(mv, score)) = picked else {
        return Ok(None);
    };

    let nodes = searcher.stats().nodes;
    debug!(depth, nodes, %mv, score, tied = tied.len(), "move chosen");
    Ok(Some(Choice { mv, score, nodes }))
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod selector_tests;
