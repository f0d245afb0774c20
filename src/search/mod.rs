//! Solution search.
//!
//! Enumerates every move sequence from a starting board, counting games
//! played and collecting the sequences that leave a single peg.

pub mod backtrack;

pub use backtrack::{solve, SearchResult, SolutionSearch, SolveError};
