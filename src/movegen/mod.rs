//! Legal move generation.
//!
//! Enumerates every anchor, orientation, and link side at which a tile
//! may be attached to the current board, trying the rotated tile when the
//! unrotated one does not fit.

pub mod validate;

use crate::board::{Board, Link, Orientation, Tile};

pub use validate::{is_legal, legal_rotation};

/// Where and how a tile is attached: the anchor cell, the new tile's
/// orientation, and which end of it touches the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub link: Link,
}

impl Placement {
    pub const fn new(row: usize, col: usize, orientation: Orientation, link: Link) -> Self {
        Placement {
            row,
            col,
            orientation,
            link,
        }
    }
}

/// A legal move: the tile, already rotated as it will be placed, and its placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub tile: Tile,
    pub placement: Placement,
}

/// Orientation/link combinations, in the order they are explored per anchor.
pub const COMBINATIONS: [(Orientation, Link); 4] = [
    (Orientation::Horizontal, Link::Left),
    (Orientation::Vertical, Link::Left),
    (Orientation::Horizontal, Link::Right),
    (Orientation::Vertical, Link::Right),
];

/// Returns every legal move for `tile` on a board that already holds the
/// opening tile. Anchors are visited in row-major order.
pub fn legal_moves(tile: Tile, board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    for (row, col, _) in board.occupied() {
        for (orientation, link) in COMBINATIONS {
            let placement = Placement::new(row, col, orientation, link);
            if let Some(tile) = legal_rotation(tile, board, &placement) {
                moves.push(Move { tile, placement });
            }
        }
    }
    moves
}

/// Returns true if `tile` has at least one legal move on `board`.
pub fn has_legal_move(tile: Tile, board: &Board) -> bool {
    board.occupied().any(|(row, col, _)| {
        COMBINATIONS.iter().any(|&(orientation, link)| {
            legal_rotation(tile, board, &Placement::new(row, col, orientation, link)).is_some()
        })
    })
}
