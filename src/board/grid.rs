//! The playing field.
//!
//! A `Board` is a rectangular, row-major grid of cells plus the running
//! score. It only ever grows: placements that land past an edge work on a
//! larger copy, so a parent board is never touched by its children.

use super::cell::{Cell, Half, Side};

/// Grid of tile halves and the total of all pips on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    score: u32,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// The board every search starts from: one row, no columns, score 0.
    pub fn new() -> Self {
        Board::create(1, 0)
    }

    /// Creates an all-empty board of the given size.
    pub fn create(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            score: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// True until the opening tile has been placed.
    pub fn is_opening(&self) -> bool {
        self.score == 0
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) outside {}x{} board",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Returns the cell at `(row, col)`. Panics when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Returns the cell at a signed position, or `None` outside the grid.
    pub fn get_offset(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<Cell> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        if r < self.rows && c < self.cols {
            Some(self.get(r, c))
        } else {
            None
        }
    }

    /// True if `(row, col)` is inside the grid and empty.
    pub fn is_free(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.get(row, col).is_empty()
    }

    /// Writes one tile half. Used by the placement engine only.
    pub(crate) fn set(&mut self, row: usize, col: usize, half: Half) {
        let idx = self.index(row, col);
        debug_assert!(self.cells[idx].is_empty(), "overwriting ({}, {})", row, col);
        self.cells[idx] = Cell::Occupied(half);
    }

    pub(crate) fn add_score(&mut self, pips: u32) {
        self.score += pips;
    }

    /// Returns a copy of this board resized to `rows x cols`.
    ///
    /// Cells inside the old bounds are copied verbatim and the new ones are
    /// empty. Shrinking is not allowed.
    pub fn grow(&self, rows: usize, cols: usize) -> Board {
        assert!(
            rows >= self.rows && cols >= self.cols,
            "cannot shrink {}x{} board to {}x{}",
            self.rows,
            self.cols,
            rows,
            cols
        );
        let mut cells = vec![Cell::Empty; rows * cols];
        for r in 0..self.rows {
            let src = &self.cells[r * self.cols..(r + 1) * self.cols];
            cells[r * cols..r * cols + self.cols].copy_from_slice(src);
        }
        Board {
            rows,
            cols,
            cells,
            score: self.score,
        }
    }

    /// Moves every row's content `by` columns to the right, emptying the
    /// first `by` columns. The last `by` columns must be empty headroom.
    pub fn shift_right(&mut self, by: usize) {
        assert!(by == 1 || by == 2, "shift must be 1 or 2 columns, got {}", by);
        assert!(by <= self.cols, "shift by {} on {} columns", by, self.cols);
        for r in 0..self.rows {
            let row = &mut self.cells[r * self.cols..(r + 1) * self.cols];
            debug_assert!(row[row.len() - by..].iter().all(|c| c.is_empty()));
            row.rotate_right(by);
        }
    }

    /// Returns the coordinates of the other half of the tile at `(row, col)`.
    pub fn partner(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        let half = self.get(row, col).half()?;
        let (dr, dc) = half.side.partner_offset();
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < self.rows && c < self.cols).then_some((r, c))
    }

    /// Applies the `11|11` effect: every 6 becomes 1, every other non-zero
    /// pip goes up by one. Zeros keep their value. The score follows.
    pub(crate) fn increment_pips(&mut self) {
        for cell in self.cells.iter_mut() {
            if let Cell::Occupied(half) = cell {
                match half.value {
                    0 => {}
                    6 => {
                        half.value = 1;
                        self.score -= 5;
                    }
                    _ => {
                        half.value += 1;
                        self.score += 1;
                    }
                }
            }
        }
    }

    /// Iterates all occupied cells as `(row, col, half)` in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, Half)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.half().map(|h| (i / self.cols, i % self.cols, h))
        })
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Sum of all pip values currently on the grid.
    pub fn pip_total(&self) -> u32 {
        self.occupied().map(|(_, _, h)| h.value as u32).sum()
    }

    /// Checks that every occupied cell is paired with a matching half.
    pub fn pairs_are_consistent(&self) -> bool {
        self.occupied().all(|(r, c, h)| {
            let expected = match h.side {
                Side::Left => Side::Right,
                Side::Right => Side::Left,
                Side::Top => Side::Bottom,
                Side::Bottom => Side::Top,
            };
            self.partner(r, c)
                .and_then(|(pr, pc)| self.get(pr, pc).half())
                .is_some_and(|p| p.side == expected)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_pair(rows: usize, cols: usize, row: usize, col: usize, l: u8, r: u8) -> Board {
        let mut b = Board::create(rows, cols);
        b.set(row, col, Half::new(l, Side::Left));
        b.set(row, col + 1, Half::new(r, Side::Right));
        b.add_score(l as u32 + r as u32);
        b
    }

    #[test]
    fn new_board_is_empty_opening() {
        let b = Board::new();
        assert_eq!((b.rows(), b.cols(), b.score()), (1, 0, 0));
        assert!(b.is_opening());
        assert_eq!(b.occupied_count(), 0);
    }

    #[test]
    fn create_is_all_empty() {
        let b = Board::create(3, 4);
        assert_eq!(b.occupied_count(), 0);
        assert!(b.get(2, 3).is_empty());
    }

    #[test]
    fn grow_preserves_cells_and_empties_new_ones() {
        let b = with_pair(1, 2, 0, 0, 3, 5);
        let g = b.grow(2, 5);
        assert_eq!((g.rows(), g.cols()), (2, 5));
        assert_eq!(g.get(0, 0), b.get(0, 0));
        assert_eq!(g.get(0, 1), b.get(0, 1));
        for (r, c) in [(0, 2), (0, 4), (1, 0), (1, 4)] {
            assert!(g.get(r, c).is_empty());
        }
        assert_eq!(g.score(), 8);
        // The source is untouched.
        assert_eq!((b.rows(), b.cols()), (1, 2));
    }

    #[test]
    fn grow_to_same_size_is_a_copy() {
        let b = with_pair(2, 4, 1, 1, 2, 6);
        assert_eq!(b.grow(2, 4), b);
    }

    #[test]
    #[should_panic]
    fn grow_cannot_shrink() {
        Board::create(2, 2).grow(1, 2);
    }

    #[test]
    fn shift_right_opens_leading_columns() {
        let b = with_pair(1, 2, 0, 0, 3, 5).grow(2, 4);
        let mut s = b.clone();
        s.shift_right(2);
        assert!(s.get(0, 0).is_empty());
        assert!(s.get(0, 1).is_empty());
        assert_eq!(s.get(0, 2).value(), Some(3));
        assert_eq!(s.get(0, 3).value(), Some(5));

        let mut s1 = with_pair(1, 2, 0, 0, 3, 5).grow(1, 3);
        s1.shift_right(1);
        assert!(s1.get(0, 0).is_empty());
        assert_eq!(s1.get(0, 1).value(), Some(3));
    }

    #[test]
    fn partner_lookup() {
        let b = with_pair(1, 2, 0, 0, 3, 5);
        assert_eq!(b.partner(0, 0), Some((0, 1)));
        assert_eq!(b.partner(0, 1), Some((0, 0)));
        assert!(b.pairs_are_consistent());
    }

    #[test]
    fn increment_pips_turns_six_into_one() {
        let mut b = with_pair(1, 4, 0, 0, 2, 6);
        b.set(0, 2, Half::new(0, Side::Left));
        b.set(0, 3, Half::new(5, Side::Right));
        b.add_score(5);
        assert_eq!(b.score(), 13);

        b.increment_pips();
        let values: Vec<_> = (0..4).map(|c| b.get(0, c).value().unwrap()).collect();
        assert_eq!(values, vec![3, 1, 0, 6]);
        // +1 (2->3), -5 (6->1), 0 stays, +1 (5->6)
        assert_eq!(b.score(), 10);
        assert_eq!(b.score(), b.pip_total());
    }

    #[test]
    fn get_offset_handles_edges() {
        let b = with_pair(1, 2, 0, 0, 3, 5);
        assert_eq!(b.get_offset(0, 0, 0, -1), None);
        assert_eq!(b.get_offset(0, 1, 0, 1), None);
        assert_eq!(b.get_offset(0, 0, 0, 1).and_then(Cell::value), Some(5));
    }
}
