//! Special-tile resolution.
//!
//! Runs on the grown board copy before the tile is committed, with the
//! anchor still at its pre-shift coordinates.

use crate::board::{Board, Link, Orientation, Special, Tile};
use crate::movegen::Placement;

/// Returns the pips `tile` will actually be placed with, applying any
/// board-wide effect of the special to `board`.
///
/// - `0|0` and regular tiles are returned unchanged.
/// - `11|11` bumps the board (6 becomes 1, other non-zero pips go up by
///   one) and then reads `v|v` where `v` is the anchor's new value.
/// - `12|21` copies the anchor's tile: it reads `partner|anchor` when laid
///   horizontally on the anchor's left, `anchor|partner` otherwise.
pub fn resolve_special(tile: Tile, board: &mut Board, placement: &Placement) -> Tile {
    let (row, col) = (placement.row, placement.col);
    match tile.special() {
        None | Some(Special::Wild) => tile,
        Some(Special::Increment) => {
            board.increment_pips();
            let v = anchor_value(board, row, col);
            Tile::new(v, v)
        }
        Some(Special::Mirror) => {
            let anchor = anchor_value(board, row, col);
            let (pr, pc) = board
                .partner(row, col)
                .unwrap_or_else(|| panic!("anchor ({}, {}) has no partner half", row, col));
            let partner = anchor_value(board, pr, pc);
            match (placement.orientation, placement.link) {
                (Orientation::Horizontal, Link::Left) => Tile::new(partner, anchor),
                _ => Tile::new(anchor, partner),
            }
        }
    }
}

fn anchor_value(board: &Board, row: usize, col: usize) -> u8 {
    board
        .get(row, col)
        .value()
        .unwrap_or_else(|| panic!("anchor ({}, {}) is empty", row, col))
}
