//! Placement engine.
//!
//! Commits a validated move onto a grown copy of the board: works out how
//! much the grid must grow, resolves special tiles, opens room on the left
//! edge when needed, writes both halves, and updates the score.

use super::special::resolve_special;
use crate::board::{Board, Half, Link, Orientation, Side, Tile};
use crate::movegen::Placement;

/// Size of the grown copy and how far existing content shifts right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Growth {
    pub rows: usize,
    pub cols: usize,
    pub shift: usize,
}

/// Computes the growth a placement needs.
///
/// Horizontal tiles linked on the left of column 0 or 1 push the board
/// right by 2 or 1 columns; linked on the right they extend the board up to
/// two columns past the anchor. Interior placements fit in existing empty
/// cells. Vertical tiles always add one row and one edge column.
pub fn growth(board: &Board, placement: &Placement) -> Growth {
    let (rows, cols, col) = (board.rows(), board.cols(), placement.col);
    match (placement.orientation, placement.link) {
        (Orientation::Horizontal, Link::Left) => match col {
            0 => Growth { rows, cols: cols + 2, shift: 2 },
            1 => Growth { rows, cols: cols + 1, shift: 1 },
            _ => Growth { rows, cols, shift: 0 },
        },
        (Orientation::Horizontal, Link::Right) => Growth {
            rows,
            cols: cols.max(col + 3),
            shift: 0,
        },
        (Orientation::Vertical, Link::Left) => Growth {
            rows: rows + 1,
            cols: cols + 1,
            shift: 1,
        },
        (Orientation::Vertical, Link::Right) => Growth {
            rows: rows + 1,
            cols: cols + 1,
            shift: 0,
        },
    }
}

/// Returns the two cells `(first, second)` the new tile lands on, in the
/// grown and shifted board.
fn target_cells(placement: &Placement) -> [(usize, usize, Side); 2] {
    let Placement { row, col, .. } = *placement;
    match (placement.orientation, placement.link) {
        (Orientation::Horizontal, Link::Left) => {
            let c = col.saturating_sub(2);
            [(row, c, Side::Left), (row, c + 1, Side::Right)]
        }
        (Orientation::Horizontal, Link::Right) => {
            [(row, col + 1, Side::Left), (row, col + 2, Side::Right)]
        }
        (Orientation::Vertical, Link::Left) => [(row, 0, Side::Top), (row + 1, 0, Side::Bottom)],
        (Orientation::Vertical, Link::Right) => {
            [(row, col + 1, Side::Top), (row + 1, col + 1, Side::Bottom)]
        }
    }
}

/// Places `tile` as described by `placement` and returns the new board.
///
/// The move must already be legal for `tile` as given; `board` is left
/// untouched.
pub fn apply_move(board: &Board, tile: Tile, placement: &Placement) -> Board {
    let g = growth(board, placement);
    let mut next = board.grow(g.rows, g.cols);
    let tile = resolve_special(tile, &mut next, placement);
    if g.shift > 0 {
        next.shift_right(g.shift);
    }
    let [(r1, c1, s1), (r2, c2, s2)] = target_cells(placement);
    next.set(r1, c1, Half::new(tile.left, s1));
    next.set(r2, c2, Half::new(tile.right, s2));
    next.add_score(tile.pips());
    next
}

/// Places the opening tile horizontally at the origin.
pub fn apply_opening(board: &Board, tile: Tile) -> Board {
    assert!(board.is_opening(), "opening tile on a board that already has tiles");
    debug_assert!(!tile.is_special(), "the opening tile must be regular");
    let mut next = board.grow(board.rows(), board.cols().max(2));
    next.set(0, 0, Half::new(tile.left, Side::Left));
    next.set(0, 1, Half::new(tile.right, Side::Right));
    next.add_score(tile.pips());
    next
}
