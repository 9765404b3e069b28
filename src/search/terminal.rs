//! Termination oracle.

use crate::board::{Board, Tile};
use crate::movegen::has_legal_move;

/// Returns true if no tile in `hand` can be played on `board`.
///
/// An empty hand is terminal. A board without its opening tile never is,
/// and neither is any hand holding a special, since specials always find
/// an edge to attach to. Otherwise the hand is terminal when no tile, in
/// either rotation, is legal at any anchor with any orientation and link.
pub fn is_terminal(hand: &[Tile], board: &Board) -> bool {
    if hand.is_empty() {
        return true;
    }
    if board.is_opening() {
        return false;
    }
    if hand.iter().any(|t| t.is_special()) {
        return false;
    }
    !hand.iter().any(|&t| has_legal_move(t, board))
}
