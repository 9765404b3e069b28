//! domino-grid engine library.
//!
//! Exposes the board representation, move validation and placement, the
//! exhaustive search, and the protocol modules for use by integration tests
//! and the binary entry points.

pub mod board;
pub mod deal;
pub mod engine;
pub mod logging;
pub mod movegen;
pub mod protocol;
pub mod resolve;
pub mod search;
pub mod solve;
