//! Grid cells and placement geometry.
//!
//! Each placed tile occupies two adjacent cells. A cell records the pip
//! value of its half and which half of the tile it is; the tile's
//! orientation follows from the half.

use serde::{Deserialize, Serialize};

/// Orientation of a placed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// Returns the single-character protocol abbreviation.
    pub const fn protocol_char(self) -> char {
        match self {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        }
    }

    /// Parses an orientation from its protocol abbreviation.
    pub fn from_protocol_char(c: char) -> Option<Orientation> {
        match c {
            'h' => Some(Orientation::Horizontal),
            'v' => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// Which half of a placed tile a cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub const fn orientation(self) -> Orientation {
        match self {
            Side::Left | Side::Right => Orientation::Horizontal,
            Side::Top | Side::Bottom => Orientation::Vertical,
        }
    }

    /// Returns `(row, col)` offsets from this half to the other half of its tile.
    pub const fn partner_offset(self) -> (isize, isize) {
        match self {
            Side::Left => (0, 1),
            Side::Right => (0, -1),
            Side::Top => (1, 0),
            Side::Bottom => (-1, 0),
        }
    }
}

/// Which end of a new tile touches its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Link {
    Left,
    Right,
}

impl Link {
    pub const ALL: [Link; 2] = [Link::Left, Link::Right];

    /// Returns the single-character protocol abbreviation.
    pub const fn protocol_char(self) -> char {
        match self {
            Link::Left => 'l',
            Link::Right => 'r',
        }
    }

    /// Parses a link side from its protocol abbreviation.
    pub fn from_protocol_char(c: char) -> Option<Link> {
        match c {
            'l' => Some(Link::Left),
            'r' => Some(Link::Right),
            _ => None,
        }
    }
}

/// An occupied cell: one half of a placed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Half {
    pub value: u8,
    pub side: Side,
}

impl Half {
    pub const fn new(value: u8, side: Side) -> Self {
        Half { value, side }
    }

    pub const fn orientation(self) -> Orientation {
        self.side.orientation()
    }
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Half),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub const fn half(self) -> Option<Half> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(h) => Some(h),
        }
    }

    pub const fn value(self) -> Option<u8> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(h) => Some(h.value),
        }
    }
}
