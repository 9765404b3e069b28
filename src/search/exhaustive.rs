//! Exhaustive best-arrangement search.
//!
//! Depth-first over every remaining tile, anchor, orientation, and link
//! side. Each branch works on its own board copy, so a node hands its
//! board to exactly one owner: the caller when terminal, a child when
//! expanding, or the drop at the end of a losing comparison.

use std::time::{Duration, Instant};

use log::debug;
use rayon::prelude::*;

use super::terminal::is_terminal;
use crate::board::{Board, Tile};
use crate::movegen::legal_moves;
use crate::resolve::{apply_move, apply_opening};

/// Errors raised when setting up a search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("failed to build search thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result of a search: the best terminal board and associated counters.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Highest-scoring terminal board, or `None` when no tile could be placed.
    pub board: Option<Board>,
    /// States visited, including the root.
    pub nodes: u64,
    /// Terminal boards compared against the running best.
    pub terminals: u64,
    pub elapsed: Duration,
}

impl SearchResult {
    pub fn score(&self) -> Option<u32> {
        self.board.as_ref().map(Board::score)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Counters {
    nodes: u64,
    terminals: u64,
}

impl Counters {
    fn absorb(&mut self, other: Counters) {
        self.nodes += other.nodes;
        self.terminals += other.terminals;
    }
}

/// Finds the highest-scoring terminal board reachable from `board` with `hand`.
///
/// Ties go to the board found first. Exponential in the hand size; meant
/// for hands of a handful of tiles.
pub fn search(hand: &[Tile], board: Board) -> SearchResult {
    let start = Instant::now();
    let mut counters = Counters::default();
    let best = search_node(hand, board, &mut counters);
    finish(hand, best, counters, start)
}

/// Same as [`search`], with the root's branches spread over `threads`
/// workers. Branch results are reduced in exploration order, so the
/// returned board is the one `search` would return.
pub fn search_parallel(
    hand: &[Tile],
    board: Board,
    threads: usize,
) -> Result<SearchResult, SearchError> {
    if threads <= 1 || is_terminal(hand, &board) {
        return Ok(search(hand, board));
    }
    let start = Instant::now();

    let mut roots: Vec<(Vec<Tile>, Board)> = Vec::new();
    for i in distinct_indices(hand) {
        let remaining = without(hand, i);
        for_each_child(hand[i], &board, |child| roots.push((remaining.clone(), child)));
    }
    drop(board);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;
    let results: Vec<(Option<Board>, Counters)> = pool.install(|| {
        roots
            .into_par_iter()
            .map(|(remaining, child)| {
                let mut counters = Counters::default();
                let best = search_node(&remaining, child, &mut counters);
                (best, counters)
            })
            .collect()
    });

    let mut counters = Counters {
        nodes: 1,
        terminals: 0,
    };
    let mut best = None;
    for (candidate, branch) in results {
        counters.absorb(branch);
        if let Some(candidate) = candidate {
            keep_best(&mut best, candidate);
        }
    }
    Ok(finish(hand, best, counters, start))
}

fn finish(hand: &[Tile], best: Option<Board>, counters: Counters, start: Instant) -> SearchResult {
    // A board with nothing on it is not an arrangement.
    let board = best.filter(|b| !b.is_opening());
    let elapsed = start.elapsed();
    debug!(
        "search: {} tiles, best {:?}, {} nodes, {} terminals in {:?}",
        hand.len(),
        board.as_ref().map(Board::score),
        counters.nodes,
        counters.terminals,
        elapsed
    );
    SearchResult {
        board,
        nodes: counters.nodes,
        terminals: counters.terminals,
        elapsed,
    }
}

fn search_node(hand: &[Tile], board: Board, counters: &mut Counters) -> Option<Board> {
    counters.nodes += 1;
    if is_terminal(hand, &board) {
        counters.terminals += 1;
        return Some(board);
    }

    let mut best = None;
    for i in distinct_indices(hand) {
        let remaining = without(hand, i);
        for_each_child(hand[i], &board, |child| {
            if let Some(candidate) = search_node(&remaining, child, counters) {
                keep_best(&mut best, candidate);
            }
        });
    }
    best
}

/// Calls `f` with every board reachable by playing `tile` once.
///
/// On an opening board the only move is a regular tile laid horizontally
/// at the origin.
fn for_each_child(tile: Tile, board: &Board, mut f: impl FnMut(Board)) {
    if board.is_opening() {
        if !tile.is_special() {
            f(apply_opening(board, tile));
        }
        return;
    }
    for mv in legal_moves(tile, board) {
        f(apply_move(board, mv.tile, &mv.placement));
    }
}

/// Indices of the first occurrence of each distinct tile in `hand`.
fn distinct_indices(hand: &[Tile]) -> impl Iterator<Item = usize> + '_ {
    (0..hand.len()).filter(move |&i| !hand[..i].contains(&hand[i]))
}

/// The hand with the tile at index `skip` removed, order preserved.
fn without(hand: &[Tile], skip: usize) -> Vec<Tile> {
    hand.iter()
        .enumerate()
        .filter(|&(i, _)| i != skip)
        .map(|(_, &t)| t)
        .collect()
}

fn keep_best(best: &mut Option<Board>, candidate: Board) {
    let better = match best {
        Some(b) => candidate.score() > b.score(),
        None => true,
    };
    if better {
        *best = Some(candidate);
    }
}
