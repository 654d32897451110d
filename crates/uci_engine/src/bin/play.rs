//! Terminal game against the engine.
//!
//! Usage: `play [record.json]`. Enter moves as `e2e4` or `e2-e4`; `new`
//! restarts, `history` lists the moves, `quit` leaves. The finished game's
//! record is printed as JSON and written to the given path, if any.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use chess_core::{Color, Game, Piece, PieceKind, sq};
use minimax_engine::{GameSession, GameStatus, SessionError};
use tracing::info;

fn main() -> anyhow::Result<()> {
    uci_engine::init_logging();
    let engine_config = uci_engine::load_config().context("loading engine config")?;
    let record_path = std::env::args().nth(1);

    let mut session = GameSession::from_config(&engine_config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(
        stdout,
        "You play {}. Depth {}.",
        session.human_color(),
        session.options().depth
    )?;

    let mut lines = stdin.lock().lines();
    loop {
        if session.status() != GameStatus::Playing {
            finish(&session, record_path.as_deref(), &mut stdout)?;
            break;
        }

        if !session.is_human_turn() {
            writeln!(stdout, "Thinking...")?;
            stdout.flush()?;
            let report = session.play_ai_turn()?;
            if let Some(mv) = report.ai_move {
                writeln!(stdout, "AI plays {mv}")?;
            }
            continue;
        }

        write!(stdout, "{}\n> ", render(session.game()))?;
        stdout.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading stdin")?;
        match line.trim() {
            "" => {}
            "quit" => break,
            "new" => session.reset(),
            "history" => writeln!(stdout, "{}", session.move_history().join(" "))?,
            text => match uci_engine::split_move_text(text) {
                None => writeln!(stdout, "Enter a move like e2e4")?,
                Some((from, to)) => match session.play_human_move(&from, &to) {
                    Ok(_) => {}
                    Err(e @ (SessionError::Rules(_) | SessionError::InvalidSquare(_))) => {
                        writeln!(stdout, "{e}")?
                    }
                    Err(e) => return Err(e.into()),
                },
            },
        }
    }
    Ok(())
}

fn finish(session: &GameSession, path: Option<&str>, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", render(session.game()))?;
    let message = match session.status() {
        GameStatus::Won => "Checkmate. You win!",
        GameStatus::Lost => "Checkmate. The AI wins.",
        GameStatus::Draw => "Draw.",
        GameStatus::Playing => "Game abandoned.",
    };
    writeln!(out, "{message}")?;

    let record = session.record();
    writeln!(out, "{}", record.to_json()?)?;
    if let Some(path) = path {
        record
            .save(path)
            .with_context(|| format!("saving game record to {path}"))?;
        info!(path, points = record.points, "game record saved");
    }
    Ok(())
}

fn symbol(pc: Piece) -> char {
    match (pc.color, pc.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

fn render(game: &Game) -> String {
    let mut out = String::new();
    for rank in (0..8).rev() {
        out.push_str(&format!("{} ", rank + 1));
        for file in 0..8 {
            let piece = sq(file, rank).and_then(|s| game.piece_at(s));
            out.push(piece.map_or('·', symbol));
            out.push(' ');
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h");
    out
}
