//! Game state representation.
//!
//! A `GameState` is an immutable snapshot of which holes hold pegs. The board
//! is an equilateral triangle; a 5-row board looks like this:
//!
//! ```text
//! Row
//!   1     *
//!   2    * *
//!   3   * * *
//!   4  * * * *
//!   5 * * * * *
//! ```
//!
//! Applying a move never touches the source state. It builds a new one, so
//! every frame of the search can hold its own state without interference.

use std::fmt;

use crate::movegen;

use super::coordinate::Coordinate;
use super::jump::Move;

/// Why a move could not be applied to a state. Variants are listed in the
/// order the preconditions are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("move is not consistent with game state: 'from' hole {0} was unoccupied")]
    FromNotOccupied(Coordinate),

    #[error("move is not consistent with game state: jumped hole {0} was unoccupied")]
    JumpedNotOccupied(Coordinate),

    #[error("move is not consistent with game state: 'to' hole {0} was occupied")]
    ToAlreadyOccupied(Coordinate),

    #[error("move is not legal because the 'to' hole {0} does not exist")]
    ToOutOfBounds(Coordinate),
}

/// Why an initial state could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("a board needs at least one row")]
    NoRows,

    #[error("{0} rows requested, boards are limited to {max} rows", max = MAX_ROWS)]
    TooManyRows(u32),

    #[error("empty hole {hole} is not on a {row_count}-row board")]
    EmptyHoleOffBoard { hole: Coordinate, row_count: u32 },
}

/// Largest board `GameState::initial` will build.
pub const MAX_ROWS: u32 = 256;

/// Occupancy snapshot of a `row_count`-row board.
///
/// Occupied holes are kept in storage order: row-major for the initial
/// state, and after each move the landing hole goes to the end. Legal move
/// order, and therefore search order, follows this storage order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    row_count: u32,
    occupied: Vec<Coordinate>,
}

impl GameState {
    /// Creates a state with every hole filled except `empty_hole`. On a
    /// 5-row board, row 3 hole 2 is the traditional choice.
    pub fn initial(row_count: u32, empty_hole: Coordinate) -> Result<Self, SetupError> {
        if row_count == 0 {
            return Err(SetupError::NoRows);
        }
        if row_count > MAX_ROWS {
            return Err(SetupError::TooManyRows(row_count));
        }
        if !empty_hole.is_on_board(row_count) {
            return Err(SetupError::EmptyHoleOffBoard {
                hole: empty_hole,
                row_count,
            });
        }

        let mut occupied = Vec::with_capacity(hole_count(row_count));
        for row in 1..=row_count {
            for hole in 1..=row {
                let peg = Coordinate::new_unchecked(row, hole);
                if peg != empty_hole {
                    occupied.push(peg);
                }
            }
        }
        Ok(GameState { row_count, occupied })
    }

    /// Creates the state reached by playing `mv` on `prior`.
    ///
    /// Preconditions are checked in order (from occupied, jumped occupied,
    /// to empty, to on the board) and the first failure is returned.
    pub fn applying(prior: &GameState, mv: Move) -> Result<Self, MoveError> {
        let mut occupied = prior.occupied.clone();

        let from_idx = index_of(&occupied, mv.from).ok_or(MoveError::FromNotOccupied(mv.from))?;
        occupied.remove(from_idx);

        let jumped_idx =
            index_of(&occupied, mv.jumped).ok_or(MoveError::JumpedNotOccupied(mv.jumped))?;
        occupied.remove(jumped_idx);

        if occupied.contains(&mv.to) {
            return Err(MoveError::ToAlreadyOccupied(mv.to));
        }
        if !mv.to.is_on_board(prior.row_count) {
            return Err(MoveError::ToOutOfBounds(mv.to));
        }

        occupied.push(mv.to);
        Ok(GameState {
            row_count: prior.row_count,
            occupied,
        })
    }

    /// Shorthand for `GameState::applying(self, mv)`.
    pub fn apply(&self, mv: Move) -> Result<Self, MoveError> {
        GameState::applying(self, mv)
    }

    /// All moves playable from this state, grouped by origin hole in storage
    /// order and by direction within each hole.
    pub fn legal_moves(&self) -> Vec<Move> {
        movegen::legal_moves(self)
    }

    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    pub fn pegs_remaining(&self) -> usize {
        self.occupied.len()
    }

    pub fn is_occupied(&self, hole: Coordinate) -> bool {
        self.occupied.contains(&hole)
    }

    /// Occupied holes in storage order.
    pub fn occupied_holes(&self) -> &[Coordinate] {
        &self.occupied
    }
}

/// Total number of holes on a `row_count`-row triangle.
pub const fn hole_count(row_count: u32) -> usize {
    let n = row_count as usize;
    n * (n + 1) / 2
}

fn index_of(holes: &[Coordinate], target: Coordinate) -> Option<usize> {
    holes.iter().position(|&c| c == target)
}

/// Draws the board with `*` for pegs and `O` for empty holes, under a
/// `Game with N pegs:` header.
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game with {} pegs:", self.pegs_remaining())?;
        for row in 1..=self.row_count {
            let indent = (self.row_count - row) as usize;
            write!(f, "{:indent$}", "", indent = indent)?;
            for hole in 1..=row {
                let mark = if self.is_occupied(Coordinate::new_unchecked(row, hole)) {
                    '*'
                } else {
                    'O'
                };
                write!(f, " {}", mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
