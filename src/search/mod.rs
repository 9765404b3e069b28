//! Search and termination.
//!
//! Explores every ordering and placement of the hand to find the
//! highest-scoring terminal board.

pub mod exhaustive;
pub mod terminal;

pub use exhaustive::{search, search_parallel, SearchError, SearchResult};
pub use terminal::is_terminal;
