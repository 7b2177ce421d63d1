//! Checkers - plays a game from move lines.
//!
//! Reads one command per line from a script file or stdin, applies moves to
//! a [`Game`], and prints the resulting events either as text or as JSON
//! lines.

mod command;

use anyhow::Context;
use checkers_engine::{Game, GameConfig, GameEvent, MoveOutcome};
use clap::Parser;
use command::Command;
use serde_json::json;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::Level;

/// Checkers - plays moves read from a script or stdin.
#[derive(Parser)]
#[command(name = "checkers")]
#[command(about = "Plays checkers moves read from a script or stdin")]
struct Args {
    /// TOML file with the starting layout and first player
    #[arg(long)]
    config: Option<PathBuf>,

    /// File with one command per line; stdin when omitted
    #[arg(long)]
    script: Option<PathBuf>,

    /// Print events and boards as JSON lines
    #[arg(long)]
    json: bool,

    /// Log rule checks (-v) or everything (-vv) to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    let mut game = Game::with_config(&config)?;
    tracing::info!("Starting game, {} to move", game.turn());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mode = if args.json { Output::Json } else { Output::Text };

    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening script {}", path.display()))?;
            run(&mut game, BufReader::new(file), &mut out, mode)?;
        }
        None => run(&mut game, io::stdin().lock(), &mut out, mode)?,
    }

    print_board(&game, &mut out, mode)?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Text,
    Json,
}

/// Plays every command in `input` against `game`.
///
/// Bad lines and rejected moves are reported and skipped; only I/O failures
/// stop the run.
fn run<R: BufRead, W: Write>(
    game: &mut Game,
    input: R,
    out: &mut W,
    mode: Output,
) -> anyhow::Result<()> {
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!(line = index + 1, "{}", e);
                continue;
            }
        };

        match command {
            Command::Empty => {}
            Command::Quit => break,
            Command::Board => print_board(game, out, mode)?,
            Command::Forced => print_forced(game, out, mode)?,
            Command::Move { from, to } => {
                let Some(id) = game.select_piece_at(from) else {
                    let reason = format!("no {} piece can be picked up on {}", game.turn(), from);
                    print_rejection(out, mode, &reason)?;
                    continue;
                };
                match game.attempt_move(id, to) {
                    MoveOutcome::Accepted(_) => {
                        for event in game.drain_events() {
                            print_event(out, mode, &event)?;
                        }
                    }
                    MoveOutcome::Rejected(e) => print_rejection(out, mode, &e.to_string())?,
                }
            }
        }
    }
    Ok(())
}

fn print_event<W: Write>(out: &mut W, mode: Output, event: &GameEvent) -> anyhow::Result<()> {
    match mode {
        Output::Text => writeln!(out, "{}", event)?,
        Output::Json => writeln!(out, "{}", serde_json::to_string(event)?)?,
    }
    Ok(())
}

fn print_rejection<W: Write>(out: &mut W, mode: Output, reason: &str) -> anyhow::Result<()> {
    match mode {
        Output::Text => writeln!(out, "rejected: {}", reason)?,
        Output::Json => writeln!(out, "{}", json!({ "event": "rejected", "reason": reason }))?,
    }
    Ok(())
}

fn print_board<W: Write>(game: &Game, out: &mut W, mode: Output) -> anyhow::Result<()> {
    match mode {
        Output::Text => writeln!(out, "{}\n{} to move", game.board(), game.turn())?,
        Output::Json => {
            let board = json!({
                "event": "board",
                "turn": game.turn(),
                "layout": game.snapshot().to_string(),
            });
            writeln!(out, "{}", board)?
        }
    }
    Ok(())
}

fn print_forced<W: Write>(game: &Game, out: &mut W, mode: Output) -> anyhow::Result<()> {
    let forced = game.forced_moves(game.turn());
    for (id, landings) in forced.iter() {
        let Some(piece) = game.piece(id) else {
            continue;
        };
        match mode {
            Output::Text => {
                let cells: Vec<String> = landings.iter().map(ToString::to_string).collect();
                writeln!(out, "{} on {} must jump to {}", id, piece.cell(), cells.join(" or "))?
            }
            Output::Json => {
                let entry = json!({
                    "event": "forced",
                    "piece": id,
                    "from": piece.cell(),
                    "landings": landings,
                });
                writeln!(out, "{}", entry)?
            }
        }
    }
    Ok(())
}
