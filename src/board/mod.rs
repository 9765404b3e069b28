//! Board representation and tile types.
//!
//! Contains the core data structures for tiles, grid cells, and the
//! growable playing field.

pub mod cell;
pub mod grid;
pub mod tile;

pub use cell::{Cell, Half, Link, Orientation, Side};
pub use grid::Board;
pub use tile::{Special, Tile, MAX_PIP};
