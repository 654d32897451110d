use std::io::{self, BufRead, Write};

use anyhow::Context;
use chess_core::{Engine, Game, move_to_uci, perft_divide, set_position_from_uci};
use minimax_engine::{MinimaxEngine, config};
use tracing::{debug, warn};

fn main() -> anyhow::Result<()> {
    uci_engine::init_logging();
    let engine_config = uci_engine::load_config().context("loading engine config")?;

    // UCI engines communicate via stdin/stdout.
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut engine = MinimaxEngine::from_config(&engine_config);
    let mut game = Game::new();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            continue;
        };
        debug!(%line, "uci command");

        match command {
            "uci" => {
                writeln!(stdout, "id name {}", engine.name())?;
                writeln!(stdout, "id author {}", engine.author())?;
                writeln!(
                    stdout,
                    "option name Depth type spin default {} min {} max {}",
                    engine.depth(),
                    config::MIN_DEPTH,
                    config::MAX_DEPTH
                )?;
                writeln!(
                    stdout,
                    "option name TieBreak type combo default first var first var random"
                )?;
                writeln!(stdout, "option name Seed type string default <empty>")?;
                writeln!(stdout, "uciok")?;
            }
            "isready" => writeln!(stdout, "readyok")?,
            "setoption" => {
                // setoption name <id> value <x>
                let name_at = parts.iter().position(|&x| x == "name");
                let value_at = parts.iter().position(|&x| x == "value");
                if let (Some(n), Some(v)) = (name_at, value_at)
                    && n + 1 < v
                {
                    let name = parts[n + 1..v].join(" ");
                    let value = parts[v + 1..].join(" ");
                    if !engine.set_option(&name, &value) {
                        warn!(%name, %value, "unsupported option");
                    }
                }
            }
            "ucinewgame" => {
                engine.new_game();
                game = Game::new();
            }
            "position" => match set_position_from_uci(&parts[1..]) {
                Ok(g) => game = g,
                Err(e) => warn!(error = %e, "position rejected, keeping previous one"),
            },
            "go" => {
                if let Some(depth) = go_argument(&parts, "perft") {
                    let mut pos = game.position().clone();
                    let divide = perft_divide(&mut pos, depth);
                    for (mv, nodes) in &divide {
                        writeln!(stdout, "{mv}: {nodes}")?;
                    }
                    let total: u64 = divide.iter().map(|(_, n)| n).sum();
                    writeln!(stdout, "\nNodes searched: {total}")?;
                } else {
                    // Time controls are ignored; search is fixed depth.
                    let depth = go_argument(&parts, "depth").unwrap_or(engine.depth());
                    let result = engine.search(&game, depth)?;
                    writeln!(
                        stdout,
                        "info depth {} score {} nodes {}",
                        result.depth,
                        uci_engine::uci_score(result.score, game.side_to_move()),
                        result.nodes
                    )?;
                    match result.best_move {
                        Some(mv) => writeln!(stdout, "bestmove {}", move_to_uci(mv))?,
                        None => writeln!(stdout, "bestmove 0000")?, // no moves
                    }
                }
            }
            "d" => writeln!(stdout, "{}", game.fen())?,
            "quit" => break,
            _ => debug!(%command, "ignoring unknown command"),
        }
        stdout.flush()?;
    }
    Ok(())
}

/// Number following `key` in a `go` command.
fn go_argument(parts: &[&str], key: &str) -> Option<u8> {
    let at = parts.iter().position(|&x| x == key)?;
    parts.get(at + 1)?.parse().ok()
}
