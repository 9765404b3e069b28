//! Move application.
//!
//! Resolves special tiles and commits placements onto grown board copies.

pub mod place;
pub mod special;

pub use place::{apply_move, apply_opening, growth, Growth};
pub use special::resolve_special;
