//! Triangle peg solitaire solver library.
//!
//! Exposes the board model, move generation, exhaustive solution search,
//! text notation, run reports, and command-line configuration for use by
//! integration tests, benchmarks, and the binary entry point.

pub mod board;
pub mod config;
pub mod movegen;
pub mod protocol;
pub mod report;
pub mod search;

pub use board::{Coordinate, GameState, Move};
pub use search::{solve, SearchResult, SolveError};
