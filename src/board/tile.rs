//! Domino tiles and the special-tile kinds.
//!
//! Regular tiles carry pips in `1..=6` with `right >= left`. The three
//! special tiles are encoded with sentinel pip values and are told apart
//! by their `left` value alone.

use serde::{Deserialize, Serialize};

/// A domino tile as held in the hand: an ordered `(left, right)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub left: u8,
    pub right: u8,
}

/// The rule-bending tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Special {
    /// `0|0`: matches any anchor, and any tile matches it once placed.
    Wild,
    /// `11|11`: bumps every pip on the board, then mirrors its anchor.
    Increment,
    /// `12|21`: copies the tile it is attached to.
    Mirror,
}

impl Special {
    /// All special kinds, in dealing order.
    pub const ALL: [Special; 3] = [Special::Wild, Special::Increment, Special::Mirror];

    /// Returns the sentinel tile that encodes this kind.
    pub const fn tile(self) -> Tile {
        match self {
            Special::Wild => Tile::new(0, 0),
            Special::Increment => Tile::new(11, 11),
            Special::Mirror => Tile::new(12, 21),
        }
    }

    /// Classifies a `left` pip value.
    pub const fn from_left(left: u8) -> Option<Special> {
        match left {
            0 => Some(Special::Wild),
            11 => Some(Special::Increment),
            12 => Some(Special::Mirror),
            _ => None,
        }
    }
}

/// Highest pip on a regular tile.
pub const MAX_PIP: u8 = 6;

impl Tile {
    pub const fn new(left: u8, right: u8) -> Self {
        Tile { left, right }
    }

    /// Returns the same tile with its pips swapped.
    pub const fn rotated(self) -> Self {
        Tile {
            left: self.right,
            right: self.left,
        }
    }

    /// Returns the special kind of this tile, if any.
    pub const fn special(self) -> Option<Special> {
        Special::from_left(self.left)
    }

    pub const fn is_special(self) -> bool {
        self.special().is_some()
    }

    /// True for a well-formed regular tile (`1 <= left <= right <= 6`).
    pub const fn is_regular(self) -> bool {
        self.left >= 1 && self.left <= self.right && self.right <= MAX_PIP
    }

    /// Sum of both pips.
    pub const fn pips(self) -> u32 {
        self.left as u32 + self.right as u32
    }
}
