//! Move validation.
//!
//! Decides whether a tile may be attached to an anchor cell with a given
//! orientation and link side. Pure: the board is only read.

use super::Placement;
use crate::board::{Board, Link, Orientation, Side, Tile};

/// Returns true if `tile`, unrotated, may be placed as described by `placement`.
///
/// The anchor must be an occupied cell. The touching pip must equal the
/// anchor's value unless the anchor is a `0` or the tile is special. A
/// horizontal tile needs two free cells on the linked side or must sit at
/// (or one free cell short of) the board edge. A vertical tile may only hang
/// off the outermost column, below a horizontal half or a bottom half.
pub fn is_legal(tile: Tile, board: &Board, placement: &Placement) -> bool {
    let Placement {
        row,
        col,
        orientation,
        link,
    } = *placement;

    let anchor = match board.get(row, col).half() {
        Some(h) => h,
        None => return false,
    };

    let wild = anchor.value == 0 || tile.is_special();
    let touching = match (orientation, link) {
        (Orientation::Horizontal, Link::Left) => tile.right,
        (Orientation::Horizontal, Link::Right) => tile.left,
        // The top half sits beside the anchor on either side.
        (Orientation::Vertical, _) => tile.left,
    };
    if !wild && touching != anchor.value {
        return false;
    }

    let cols = board.cols();
    match (orientation, link) {
        (Orientation::Horizontal, Link::Left) => {
            col == 0
                || (col == 1 && board.is_free(row, 0))
                || (col >= 2 && board.is_free(row, col - 1) && board.is_free(row, col - 2))
        }
        (Orientation::Horizontal, Link::Right) => {
            col + 1 == cols
                || (col + 2 == cols && board.is_free(row, col + 1))
                || (board.is_free(row, col + 1) && board.is_free(row, col + 2))
        }
        (Orientation::Vertical, link) => {
            let on_edge = match link {
                Link::Left => col == 0,
                Link::Right => col + 1 == cols,
            };
            // The board only grows downward.
            on_edge && matches!(anchor.side, Side::Left | Side::Right | Side::Bottom)
        }
    }
}

/// Returns the tile as it would be placed: unrotated if that is legal,
/// rotated if only that is legal, `None` otherwise.
pub fn legal_rotation(tile: Tile, board: &Board, placement: &Placement) -> Option<Tile> {
    if is_legal(tile, board, placement) {
        return Some(tile);
    }
    let rotated = tile.rotated();
    is_legal(rotated, board, placement).then_some(rotated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{apply_move, apply_opening};

    fn opened(left: u8, right: u8) -> Board {
        apply_opening(&Board::new(), Tile::new(left, right))
    }

    fn at(row: usize, col: usize, orientation: Orientation, link: Link) -> Placement {
        Placement::new(row, col, orientation, link)
    }

    #[test]
    fn empty_anchor_is_never_legal() {
        let board = opened(3, 5).grow(2, 2);
        for o in Orientation::ALL {
            for l in Link::ALL {
                assert!(!is_legal(Tile::new(0, 0), &board, &at(1, 0, o, l)));
            }
        }
    }

    #[test]
    fn pip_must_match_on_the_touching_end() {
        let board = opened(3, 5);
        // Linking on the left: the tile's right pip touches the 3.
        assert!(is_legal(Tile::new(1, 3), &board, &at(0, 0, Orientation::Horizontal, Link::Left)));
        assert!(!is_legal(Tile::new(3, 1), &board, &at(0, 0, Orientation::Horizontal, Link::Left)));
        // Linking on the right: the tile's left pip touches the 5.
        assert!(is_legal(Tile::new(5, 2), &board, &at(0, 1, Orientation::Horizontal, Link::Right)));
        assert!(!is_legal(Tile::new(2, 5), &board, &at(0, 1, Orientation::Horizontal, Link::Right)));
    }

    #[test]
    fn specials_and_zero_anchor_match_anything() {
        let board = opened(3, 5);
        let p = at(0, 0, Orientation::Horizontal, Link::Left);
        for special in [Tile::new(0, 0), Tile::new(11, 11), Tile::new(12, 21)] {
            assert!(is_legal(special, &board, &p));
        }
        let board = apply_move(&board, Tile::new(0, 0), &at(0, 1, Orientation::Horizontal, Link::Right));
        assert!(is_legal(Tile::new(4, 6), &board, &at(0, 3, Orientation::Horizontal, Link::Right)));
    }

    #[test]
    fn horizontal_needs_room_on_the_linked_side() {
        let board = opened(3, 5);
        // The 3 is a left half: its right neighbour is taken.
        assert!(!is_legal(Tile::new(3, 3), &board, &at(0, 0, Orientation::Horizontal, Link::Right)));
        assert!(!is_legal(Tile::new(5, 5), &board, &at(0, 1, Orientation::Horizontal, Link::Left)));
    }

    #[test]
    fn horizontal_interior_needs_two_free_cells() {
        // [3|5][5|2] then link at the far 2 leaves no interior room on the left.
        let board = opened(3, 5);
        let board = apply_move(&board, Tile::new(5, 2), &at(0, 1, Orientation::Horizontal, Link::Right));
        assert_eq!(board.cols(), 4);
        assert!(!is_legal(Tile::new(2, 2), &board, &at(0, 3, Orientation::Horizontal, Link::Left)));
        assert!(is_legal(Tile::new(2, 2), &board, &at(0, 3, Orientation::Horizontal, Link::Right)));
    }

    #[test]
    fn vertical_only_on_outer_columns() {
        let board = opened(3, 5);
        let board = apply_move(&board, Tile::new(5, 2), &at(0, 1, Orientation::Horizontal, Link::Right));
        assert!(is_legal(Tile::new(3, 1), &board, &at(0, 0, Orientation::Vertical, Link::Left)));
        assert!(is_legal(Tile::new(2, 1), &board, &at(0, 3, Orientation::Vertical, Link::Right)));
        // Interior columns never take a vertical tile.
        assert!(!is_legal(Tile::new(5, 1), &board, &at(0, 1, Orientation::Vertical, Link::Right)));
        assert!(!is_legal(Tile::new(5, 1), &board, &at(0, 2, Orientation::Vertical, Link::Left)));
        // Wrong link side for the edge.
        assert!(!is_legal(Tile::new(3, 1), &board, &at(0, 0, Orientation::Vertical, Link::Right)));
    }

    #[test]
    fn vertical_never_grows_upward_from_a_top_half() {
        let board = opened(3, 5);
        let board = apply_move(&board, Tile::new(3, 4), &at(0, 0, Orientation::Vertical, Link::Left));
        // Column 0 now holds {3: over :4}.
        assert_eq!(board.get(0, 0).half().map(|h| h.side), Some(Side::Top));
        assert_eq!(board.get(1, 0).half().map(|h| h.side), Some(Side::Bottom));
        assert!(!is_legal(Tile::new(3, 6), &board, &at(0, 0, Orientation::Vertical, Link::Left)));
        assert!(is_legal(Tile::new(4, 6), &board, &at(1, 0, Orientation::Vertical, Link::Left)));
    }

    #[test]
    fn rotation_fallback() {
        let board = opened(3, 5);
        let p = at(0, 0, Orientation::Horizontal, Link::Left);
        assert_eq!(legal_rotation(Tile::new(1, 3), &board, &p), Some(Tile::new(1, 3)));
        assert_eq!(legal_rotation(Tile::new(3, 1), &board, &p), Some(Tile::new(1, 3)));
        assert_eq!(legal_rotation(Tile::new(4, 4), &board, &p), None);
    }
}
