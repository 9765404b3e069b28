//! Batch solving of randomly dealt hands.
//!
//! Deals a series of hands, runs the exhaustive search on each, and
//! records the best arrangement with its search counters as JSONL.

use std::io::Write;

use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::deal::{check_counts, deal_hand, DealError};
use crate::protocol::notation::{format_tile, render_board};
use crate::search::{search, SearchError};

/// Configuration for a batch run.
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Number of hands to deal and solve.
    pub hands: usize,
    /// Tiles per hand.
    pub tiles: usize,
    /// Special tiles per hand.
    pub specials: usize,
    /// Worker threads. Hands are solved concurrently when above 1.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-hand progress output.
    pub quiet: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        SolveConfig {
            hands: 10,
            tiles: 4,
            specials: 1,
            threads: 1,
            seed: 0,
            quiet: false,
        }
    }
}

/// Errors that stop a batch run before any hand is solved.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Deal(#[from] DealError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// One solved hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandRecord {
    pub hand_id: usize,
    /// Tiles as dealt, in `left|right` notation.
    pub hand: Vec<String>,
    /// Best score, or `None` when no tile could be placed.
    pub score: Option<u32>,
    /// Rendered best board, one string per row.
    pub rows: Vec<String>,
    pub nodes: u64,
    pub terminals: u64,
    pub elapsed_ms: u64,
}

fn hand_rng(config: &SolveConfig, hand_id: usize) -> SmallRng {
    if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed.wrapping_add(hand_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Deals and solves hand number `hand_id`.
pub fn solve_hand(config: &SolveConfig, hand_id: usize) -> Result<HandRecord, DealError> {
    let mut rng = hand_rng(config, hand_id);
    let hand = deal_hand(config.tiles, config.specials, &mut rng)?;
    let result = search(&hand, Board::new());

    let record = HandRecord {
        hand_id,
        hand: hand.iter().map(|&t| format_tile(t)).collect(),
        score: result.score(),
        rows: result.board.as_ref().map(render_board).unwrap_or_default(),
        nodes: result.nodes,
        terminals: result.terminals,
        elapsed_ms: result.elapsed.as_millis() as u64,
    };
    if !config.quiet {
        info!(
            "hand {}/{}: [{}] best {:?} ({} nodes, {}ms)",
            hand_id + 1,
            config.hands,
            record.hand.join(" "),
            record.score,
            record.nodes,
            record.elapsed_ms
        );
    }
    Ok(record)
}

/// Solves every hand in `config`, ordered by `hand_id`.
///
/// When `config.threads > 1`, hands are solved concurrently using rayon.
pub fn run_solve(config: &SolveConfig) -> Result<Vec<HandRecord>, SolveError> {
    check_counts(config.tiles, config.specials)?;

    if config.threads <= 1 {
        let records = (0..config.hands)
            .map(|i| solve_hand(config, i))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(records);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .map_err(SearchError::from)?;
    let records = pool.install(|| {
        (0..config.hands)
            .into_par_iter()
            .map(|i| solve_hand(config, i))
            .collect::<Result<Vec<_>, _>>()
    })?;
    Ok(records)
}

/// Writes records as JSONL (one JSON object per hand, one per line).
pub fn write_jsonl<W: Write>(records: &[HandRecord], out: &mut W) -> std::io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Logs a one-paragraph summary of a batch.
pub fn log_summary(records: &[HandRecord]) {
    if records.is_empty() {
        return;
    }
    let solved: Vec<u32> = records.iter().filter_map(|r| r.score).collect();
    let nodes: u64 = records.iter().map(|r| r.nodes).sum();
    let best = solved.iter().max().copied().unwrap_or(0);
    let mean = if solved.is_empty() {
        0.0
    } else {
        solved.iter().map(|&s| s as f64).sum::<f64>() / solved.len() as f64
    };
    info!(
        "{} hands, {} with a board, best {}, mean {:.1}, {} nodes total",
        records.len(),
        solved.len(),
        best,
        mean,
        nodes
    );
}
