//! Session command parser.
//!
//! Parses incoming protocol lines from raw text into structured `Command`
//! variants that the main loop can dispatch on.

use log::{debug, warn};

use crate::board::{Link, Orientation, Tile};
use crate::protocol::notation::parse_hand;

/// Where a `play` command attaches its tile. `link` is `None` when the
/// command leaves it to be inferred from the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub link: Option<Link>,
}

/// A parsed client-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Clear the hand and the board.
    NewGame,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Replace the hand and start from an empty board.
    Hand { tiles: Vec<Tile> },

    /// Deal a random hand of `total` tiles, `specials` of them special.
    Deal { total: usize, specials: usize },

    /// Play the hand tile at zero-based `index`. No anchor means the opening move.
    Play {
        index: usize,
        anchor: Option<Anchor>,
        rotate: bool,
    },

    /// Print the hand, the board and the score.
    Show,

    /// Search for the best arrangement of the current hand.
    Go,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    match tokens[0] {
        "isready" => Some(Command::IsReady),
        "newgame" => Some(Command::NewGame),
        "show" => Some(Command::Show),
        "go" => Some(Command::Go),
        "quit" => Some(Command::Quit),

        "setoption" => parse_setoption(&tokens),
        "hand" => parse_hand_command(&tokens),
        "deal" => parse_deal(&tokens),
        "play" => parse_play(&tokens),

        other => {
            debug!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                warn!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `hand <tile> [<tile> ...]`.
fn parse_hand_command(tokens: &[&str]) -> Option<Command> {
    match parse_hand(&tokens[1..].join(" ")) {
        Ok(tiles) => Some(Command::Hand { tiles }),
        Err(e) => {
            warn!("malformed hand: {}", e);
            None
        }
    }
}

/// Parses `deal <total> <specials>`.
fn parse_deal(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 3 {
        warn!("malformed deal: expected 'deal <total> <specials>'");
        return None;
    }
    match (tokens[1].parse::<usize>(), tokens[2].parse::<usize>()) {
        (Ok(total), Ok(specials)) => Some(Command::Deal { total, specials }),
        _ => {
            warn!("invalid deal counts: '{} {}'", tokens[1], tokens[2]);
            None
        }
    }
}

/// Parses `play <n> [<row> <col> <h|v> [l|r]] [rotate]`.
fn parse_play(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        warn!("malformed play: expected 'play <n> [<row> <col> <h|v> [l|r]] [rotate]'");
        return None;
    }
    let index = match tokens[1].parse::<usize>() {
        Ok(n) if n >= 1 => n - 1,
        _ => {
            warn!("invalid tile number: '{}'", tokens[1]);
            return None;
        }
    };

    let mut rest = &tokens[2..];
    let rotate = rest.last() == Some(&"rotate");
    if rotate {
        rest = &rest[..rest.len() - 1];
    }

    let anchor = match rest.len() {
        0 => None,
        3 | 4 => Some(parse_anchor(rest)?),
        _ => {
            warn!("malformed play: unexpected arguments '{}'", rest.join(" "));
            return None;
        }
    };

    Some(Command::Play {
        index,
        anchor,
        rotate,
    })
}

/// Parses `<row> <col> <h|v> [l|r]`.
fn parse_anchor(tokens: &[&str]) -> Option<Anchor> {
    let (row, col) = match (tokens[0].parse::<usize>(), tokens[1].parse::<usize>()) {
        (Ok(r), Ok(c)) => (r, c),
        _ => {
            warn!("invalid anchor coordinates: '{} {}'", tokens[0], tokens[1]);
            return None;
        }
    };
    let orientation = match single_char(tokens[2]).and_then(Orientation::from_protocol_char) {
        Some(o) => o,
        None => {
            warn!("invalid orientation: '{}'", tokens[2]);
            return None;
        }
    };
    let link = match tokens.get(3) {
        None => None,
        Some(t) => match single_char(t).and_then(Link::from_protocol_char) {
            Some(l) => Some(l),
            None => {
                warn!("invalid link side: '{}'", t);
                return None;
            }
        },
    };
    Some(Anchor {
        row,
        col,
        orientation,
        link,
    })
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
