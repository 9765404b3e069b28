//! Text protocol handling.
//!
//! Tile and hand notation, board rendering, and the command parser for the
//! interactive main loop.

pub mod notation;
pub mod parser;

pub use notation::{format_hand, format_tile, parse_hand, parse_tile, render_board, NotationError};
pub use parser::{parse_command, Anchor, Command};
