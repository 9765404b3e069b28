//! Random hand generation.

use rand::Rng;
use thiserror::Error;

use crate::board::{Special, Tile, MAX_PIP};

/// Errors that can occur when dealing a hand.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DealError {
    #[error("a hand needs at least 2 tiles, got {0}")]
    TooFewTiles(usize),

    #[error("{specials} specials leave no regular tile in a hand of {total}")]
    NoRegularTile { total: usize, specials: usize },
}

/// Checks hand-size constraints without dealing.
pub fn check_counts(total: usize, specials: usize) -> Result<(), DealError> {
    if total < 2 {
        return Err(DealError::TooFewTiles(total));
    }
    if specials >= total {
        return Err(DealError::NoRegularTile { total, specials });
    }
    Ok(())
}

/// Deals `total` tiles, the last `specials` of which are special.
///
/// Regular tiles draw `left` from `1..=6` and `right` from `left..=6`.
/// Each special is one of the three kinds with equal probability.
pub fn deal_hand<R: Rng + ?Sized>(
    total: usize,
    specials: usize,
    rng: &mut R,
) -> Result<Vec<Tile>, DealError> {
    check_counts(total, specials)?;

    let mut hand = Vec::with_capacity(total);
    for _ in 0..total - specials {
        let left = rng.gen_range(1..=MAX_PIP);
        let right = rng.gen_range(left..=MAX_PIP);
        hand.push(Tile::new(left, right));
    }
    for _ in 0..specials {
        let kind = Special::ALL[rng.gen_range(0..Special::ALL.len())];
        hand.push(kind.tile());
    }
    Ok(hand)
}
