//! domino-grid: interactive grid-dominoes session over a line protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Diagnostics go to stderr through the logger.

use std::io::{self, BufRead};

use log::error;

use domino_grid::engine::Engine;
use domino_grid::logging;
use domino_grid::protocol::parser::{parse_command, Command};

/// Runs the main protocol loop, reading commands from stdin and writing
/// responses to stdout.
fn main() {
    let _logger = match logging::init("warn") {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("logger unavailable: {}", e);
            None
        }
    };

    if let Err(e) = run() {
        error!("output failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::IsReady => engine.handle_isready(&mut out)?,
            Command::NewGame => engine.new_game(),
            Command::SetOption { name, value } => engine.set_option(name, value),
            Command::Hand { tiles } => {
                engine.set_hand(tiles);
                engine.handle_hand(&mut out)?;
            }
            Command::Deal { total, specials } => engine.handle_deal(total, specials, &mut out)?,
            Command::Play {
                index,
                anchor,
                rotate,
            } => engine.handle_play(index, anchor, rotate, &mut out)?,
            Command::Show => engine.handle_show(&mut out)?,
            Command::Go => engine.handle_go(&mut out)?,
            Command::Quit => break,
        }
    }
    Ok(())
}
