//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Scores stay White-positive at every node. White's nodes maximize, Black's
//! minimize, and the `maximizing` flag flips each ply. Moves are searched in
//! generation order.

use chess_core::{Game, Outcome, RulesError};

use crate::eval::{MATE_SCORE, MATE_THRESHOLD, SCORE_INFINITY, static_score, terminal_score};

/// Counters collected while walking the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, leaves included
    pub nodes: u64,
}

/// Tree walker shared by the pruned and the reference search.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    pruning: bool,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(pruning: bool) -> Self {
        Self {
            pruning,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Scores `game` looking `depth` plies ahead. `ply` is the distance from
    /// the search root and only affects mate scores.
    ///
    /// Every move applied to `game` is taken back before returning, so the
    /// game is unchanged on `Ok`.
    ///
    /// # Errors
    /// Fails if the rules engine rejects a generated move or an undo. That is
    /// a broken invariant and the game should be discarded.
    pub fn score(
        &mut self,
        game: &mut Game,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        ply: u32,
    ) -> Result<i32, RulesError> {
        self.stats.nodes += 1;

        let outcome = game.outcome();
        if depth == 0 || outcome.is_some() {
            return Ok(leaf_score(game, outcome, ply));
        }

        let mut best = if maximizing {
            -SCORE_INFINITY
        } else {
            SCORE_INFINITY
        };

        for mv in game.legal_moves() {
            game.apply_move(mv)?;
            let score = self.score(game, depth - 1, alpha, beta, !maximizing, ply + 1)?;
            game.undo_last_move()?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if self.pruning && beta <= alpha {
                break;
            }
        }

        Ok(best)
    }
}

/// Alpha-beta search of `game` to `depth` plies inside `(alpha, beta)`.
///
/// Returns the minimax score of the position, White-positive. A position
/// that is already decided scores immediately, whatever the depth.
///
/// Leaves score as [`crate::evaluate`] does, except that a checkmate found
/// `n` plies below the root scores `±(MATE_SCORE - n)` rather than the bare
/// `±MATE_SCORE`, so nearer mates are preferred. Only a root that is already
/// mated returns exactly `±MATE_SCORE`. [`mate_distance`] recovers `n`.
pub fn search(
    game: &mut Game,
    depth: u8,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> Result<i32, RulesError> {
    Searcher::new(true).score(game, depth, alpha, beta, maximizing, 0)
}

/// Full minimax without cutoffs. Same leaves and scores as [`search`] with
/// an infinite window; kept as the reference that pruning is checked against.
pub fn minimax(game: &mut Game, depth: u8, maximizing: bool) -> Result<i32, RulesError> {
    Searcher::new(false).score(game, depth, -SCORE_INFINITY, SCORE_INFINITY, maximizing, 0)
}

/// Plies until mate, if `score` is a mate score.
pub fn mate_distance(score: i32) -> Option<u32> {
    (score.abs() >= MATE_THRESHOLD).then(|| (MATE_SCORE - score.abs()) as u32)
}

fn leaf_score(game: &Game, outcome: Option<Outcome>, ply: u32) -> i32 {
    match terminal_score(outcome) {
        // Nearer mates score further from zero.
        Some(score) if score > 0 => score - ply as i32,
        Some(score) if score < 0 => score + ply as i32,
        Some(_) => 0,
        None => static_score(game.position()),
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
