//! Tile and board text notation.
//!
//! Tiles are written `left|right` (`3|5`, `12|21`) and a hand is a
//! space-separated list of tiles. Boards render one line per row with three
//! characters per cell: `[a|` `b] ` for a horizontal tile, `{a:` over `:b}`
//! for a vertical one, and blanks for empty cells.

use thiserror::Error;

use crate::board::{Board, Cell, Side, Tile, MAX_PIP};

/// Errors that can occur when parsing tile notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty input")]
    EmptyInput,

    #[error("tile '{0}' is missing the '|' separator")]
    MissingSeparator(String),

    #[error("invalid pip value '{0}'")]
    InvalidPip(String),

    #[error("'{0}' is neither a regular tile nor a special tile")]
    UnknownTile(String),
}

/// Parses a single tile such as `3|5` or `12|21`.
///
/// Regular pips may come in either order. Specials must be written exactly
/// as `0|0`, `11|11`, or `12|21`.
pub fn parse_tile(s: &str) -> Result<Tile, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NotationError::EmptyInput);
    }
    let (l, r) = s
        .split_once('|')
        .ok_or_else(|| NotationError::MissingSeparator(s.to_string()))?;
    let left = parse_pip(l)?;
    let right = parse_pip(r)?;
    let tile = Tile::new(left, right);

    let regular = (1..=MAX_PIP).contains(&left) && (1..=MAX_PIP).contains(&right);
    let special = tile
        .special()
        .is_some_and(|kind| kind.tile() == tile);
    if regular || special {
        Ok(tile)
    } else {
        Err(NotationError::UnknownTile(s.to_string()))
    }
}

fn parse_pip(s: &str) -> Result<u8, NotationError> {
    s.trim()
        .parse::<u8>()
        .map_err(|_| NotationError::InvalidPip(s.to_string()))
}

/// Parses a whitespace-separated list of tiles.
pub fn parse_hand(s: &str) -> Result<Vec<Tile>, NotationError> {
    let tiles = s
        .split_whitespace()
        .map(parse_tile)
        .collect::<Result<Vec<_>, _>>()?;
    if tiles.is_empty() {
        return Err(NotationError::EmptyInput);
    }
    Ok(tiles)
}

/// Formats a tile as `left|right`.
pub fn format_tile(tile: Tile) -> String {
    format!("{}|{}", tile.left, tile.right)
}

/// Formats a hand as space-separated tiles.
pub fn format_hand(hand: &[Tile]) -> String {
    hand.iter()
        .map(|&t| format_tile(t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a single cell as three characters.
fn render_cell(cell: Cell) -> String {
    match cell {
        Cell::Empty => "   ".to_string(),
        Cell::Occupied(h) => match h.side {
            Side::Left => format!("[{}|", h.value),
            Side::Right => format!("{}] ", h.value),
            Side::Top => format!("{{{}:", h.value),
            Side::Bottom => format!(":{}}}", h.value),
        },
    }
}

/// Renders the board row by row, trailing blanks trimmed.
pub fn render_board(board: &Board) -> Vec<String> {
    (0..board.rows())
        .map(|row| {
            let line: String = (0..board.cols())
                .map(|col| render_cell(board.get(row, col)))
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}
