//! Engine state management.
//!
//! Holds the current hand, board, and engine options between protocol
//! commands, applies interactive moves, and runs the search for `go`.

use std::collections::HashMap;
use std::io::{self, Write};

use log::{debug, error, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::board::{Board, Link, Orientation, Side, Tile};
use crate::deal::{deal_hand, DealError};
use crate::movegen::{is_legal, Placement};
use crate::protocol::notation::{format_hand, format_tile, render_board};
use crate::protocol::parser::Anchor;
use crate::resolve::{apply_move, apply_opening};
use crate::search::{is_terminal, search_parallel};

/// Default number of search workers.
const DEFAULT_THREADS: usize = 1;

/// Reasons an interactive move is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayError {
    #[error("no tile {0} in hand")]
    NoSuchTile(usize),

    #[error("the opening tile must be a regular tile")]
    SpecialOpening,

    #[error("the board is empty, play the opening tile without an anchor")]
    NeedsOpening,

    #[error("the board already has tiles, give an anchor")]
    MissingAnchor,

    #[error("({0}, {1}) is not an occupied cell")]
    EmptyAnchor(usize, usize),

    #[error("link side at ({0}, {1}) is ambiguous, give l or r")]
    AmbiguousLink(usize, usize),

    #[error("{0} does not fit there")]
    DoesNotFit(String),
}

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub hand: Vec<Tile>,
    pub board: Board,
    pub options: HashMap<String, String>,
    rng: SmallRng,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates a new engine with an empty hand and board.
    pub fn new() -> Self {
        Engine {
            hand: Vec::new(),
            board: Board::new(),
            options: HashMap::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Clears the hand and the board. Options survive.
    pub fn new_game(&mut self) {
        self.hand.clear();
        self.board = Board::new();
    }

    /// Sets an engine option. Setting `Seed` reseeds the deal RNG.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        let value = value.unwrap_or_default();
        if name == "Seed" {
            match value.parse::<u64>() {
                Ok(0) => self.rng = SmallRng::from_entropy(),
                Ok(seed) => self.rng = SmallRng::seed_from_u64(seed),
                Err(_) => warn!("invalid Seed value: '{}'", value),
            }
        }
        self.options.insert(name, value);
    }

    /// Returns the configured worker count, or the default.
    fn threads(&self) -> usize {
        self.options
            .get("Threads")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&n| n >= 1)
            .unwrap_or(DEFAULT_THREADS)
    }

    /// Replaces the hand and starts over on an empty board.
    pub fn set_hand(&mut self, tiles: Vec<Tile>) {
        self.hand = tiles;
        self.board = Board::new();
    }

    /// Deals a random hand and starts over on an empty board.
    pub fn deal(&mut self, total: usize, specials: usize) -> Result<(), DealError> {
        let hand = deal_hand(total, specials, &mut self.rng)?;
        self.set_hand(hand);
        Ok(())
    }

    /// Plays the hand tile at `index` and returns the tile as laid down.
    ///
    /// Without an anchor this is the opening move. `rotate` swaps the pips
    /// of a regular tile first. On error nothing changes.
    pub fn play(
        &mut self,
        index: usize,
        anchor: Option<Anchor>,
        rotate: bool,
    ) -> Result<Tile, PlayError> {
        let held = *self
            .hand
            .get(index)
            .ok_or(PlayError::NoSuchTile(index + 1))?;
        let tile = if rotate && !held.is_special() {
            held.rotated()
        } else {
            held
        };

        let next = match anchor {
            None => {
                if !self.board.is_opening() {
                    return Err(PlayError::MissingAnchor);
                }
                if tile.is_special() {
                    return Err(PlayError::SpecialOpening);
                }
                apply_opening(&self.board, tile)
            }
            Some(anchor) => {
                if self.board.is_opening() {
                    return Err(PlayError::NeedsOpening);
                }
                let placement = self.placement(anchor)?;
                debug!(
                    "play {} at ({}, {}) {} {}",
                    format_tile(tile),
                    placement.row,
                    placement.col,
                    placement.orientation.protocol_char(),
                    placement.link.protocol_char()
                );
                if !is_legal(tile, &self.board, &placement) {
                    return Err(PlayError::DoesNotFit(format_tile(tile)));
                }
                apply_move(&self.board, tile, &placement)
            }
        };

        self.board = next;
        self.hand.remove(index);
        debug!(
            "played {} ({} left), score {}",
            format_tile(tile),
            self.hand.len(),
            self.board.score()
        );
        Ok(tile)
    }

    /// Resolves an anchor into a placement, inferring the link side when
    /// none was given.
    fn placement(&self, anchor: Anchor) -> Result<Placement, PlayError> {
        let Anchor {
            row,
            col,
            orientation,
            link,
        } = anchor;
        let half = self
            .board
            .get_offset(row, col, 0, 0)
            .and_then(|c| c.half())
            .ok_or(PlayError::EmptyAnchor(row, col))?;

        let link = match link {
            Some(link) => link,
            None => match (orientation, half.side) {
                (Orientation::Vertical, _) if col == 0 => Link::Left,
                (Orientation::Vertical, _) => Link::Right,
                (Orientation::Horizontal, Side::Left) => Link::Left,
                (Orientation::Horizontal, Side::Right) => Link::Right,
                (Orientation::Horizontal, Side::Top | Side::Bottom) => {
                    let occupied = |dc: isize| {
                        self.board
                            .get_offset(row, col, 0, dc)
                            .is_some_and(|c| !c.is_empty())
                    };
                    if occupied(1) {
                        Link::Left
                    } else if occupied(-1) {
                        Link::Right
                    } else {
                        return Err(PlayError::AmbiguousLink(row, col));
                    }
                }
            },
        };
        Ok(Placement::new(row, col, orientation, link))
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Writes the current hand.
    pub fn handle_hand<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "hand {}", format_hand(&self.hand))?;
        out.flush()
    }

    /// Handles the `deal` command.
    pub fn handle_deal<W: Write>(
        &mut self,
        total: usize,
        specials: usize,
        out: &mut W,
    ) -> io::Result<()> {
        match self.deal(total, specials) {
            Ok(()) => self.handle_hand(out),
            Err(e) => {
                warn!("deal: {}", e);
                Ok(())
            }
        }
    }

    /// Handles the `play` command: `played`, then `gameover` once nothing
    /// more can be played, or `illegal` with the reason.
    pub fn handle_play<W: Write>(
        &mut self,
        index: usize,
        anchor: Option<Anchor>,
        rotate: bool,
        out: &mut W,
    ) -> io::Result<()> {
        match self.play(index, anchor, rotate) {
            Ok(tile) => {
                writeln!(
                    out,
                    "played {} score {}",
                    format_tile(tile),
                    self.board.score()
                )?;
                if is_terminal(&self.hand, &self.board) {
                    writeln!(out, "gameover score {}", self.board.score())?;
                }
            }
            Err(e) => writeln!(out, "illegal {}", e)?,
        }
        out.flush()
    }

    /// Handles the `show` command.
    pub fn handle_show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "hand {}", format_hand(&self.hand))?;
        write_rows(&self.board, out)?;
        writeln!(out, "score {}", self.board.score())?;
        out.flush()
    }

    /// Handles the `go` command: searches from the current hand and board
    /// and prints the best arrangement.
    pub fn handle_go<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let result = match search_parallel(&self.hand, self.board.clone(), self.threads()) {
            Ok(r) => r,
            Err(e) => {
                error!("go: {}", e);
                return Ok(());
            }
        };

        writeln!(
            out,
            "info nodes {} terminals {} time {}",
            result.nodes,
            result.terminals,
            result.elapsed.as_millis()
        )?;
        match &result.board {
            Some(board) => {
                write_rows(board, out)?;
                writeln!(out, "bestscore {}", board.score())?;
            }
            None => writeln!(out, "bestscore none")?,
        }
        out.flush()
    }
}

fn write_rows<W: Write>(board: &Board, out: &mut W) -> io::Result<()> {
    for line in render_board(board) {
        if line.is_empty() {
            writeln!(out, "row")?;
        } else {
            writeln!(out, "row {}", line)?;
        }
    }
    Ok(())
}
