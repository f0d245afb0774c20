//! Exhaustive backtracking search.
//!
//! Walks every move sequence from the initial state depth-first, in legal
//! move order, keeping the current path on a single mutable stack. Every
//! terminal state counts as one game played; terminal states with exactly one
//! peg also record a copy of the path as a solution.

use crate::board::{Coordinate, GameState, Move, MoveError, SetupError};

/// Errors that stop a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("cannot set up board: {0}")]
    Setup(#[from] SetupError),

    #[error("illegal move during search: {0}")]
    Move(#[from] MoveError),
}

/// Outcome of a complete search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Terminal states visited, wins and dead ends alike.
    pub games_played: u64,
    /// Every winning move sequence, in discovery order.
    pub solutions: Vec<Vec<Move>>,
    /// States visited, terminal or not, including the initial state.
    pub nodes: u64,
}

impl SearchResult {
    pub fn solutions_found(&self) -> usize {
        self.solutions.len()
    }
}

/// Backtracking driver. Owns the move stack and both accumulators for the
/// duration of one search.
#[derive(Debug, Default)]
pub struct SolutionSearch {
    path: Vec<Move>,
    result: SearchResult,
}

impl SolutionSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Searches the whole tree below `state` and returns the accumulated
    /// result. Stops at the first move that fails to apply.
    pub fn run(mut self, state: &GameState) -> Result<SearchResult, SolveError> {
        self.path.reserve(state.pegs_remaining());
        self.search(state)?;
        Ok(self.result)
    }

    fn search(&mut self, state: &GameState) -> Result<(), SolveError> {
        self.result.nodes += 1;

        if state.pegs_remaining() == 1 {
            self.result.solutions.push(self.path.clone());
            self.result.games_played += 1;
            return Ok(());
        }

        let legal = state.legal_moves();
        if legal.is_empty() {
            self.result.games_played += 1;
            return Ok(());
        }

        for mv in legal {
            let next = GameState::applying(state, mv)?;
            self.path.push(mv);
            self.search(&next)?;
            self.path.pop();
        }
        Ok(())
    }
}

/// Solves a `row_count`-row board that starts with only `empty_hole` empty.
pub fn solve(row_count: u32, empty_hole: Coordinate) -> Result<SearchResult, SolveError> {
    let initial = GameState::initial(row_count, empty_hole)?;
    SolutionSearch::new().run(&initial)
}
