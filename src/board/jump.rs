//! Jump moves.

use std::fmt;

use super::coordinate::Coordinate;

/// One jump: the peg at `from` leaps over `jumped` and lands in `to`.
///
/// No geometry or legality is checked here. Moves come out of move
/// generation already adjacent, and `GameState::applying` checks them
/// against occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coordinate,
    pub jumped: Coordinate,
    pub to: Coordinate,
}

impl Move {
    pub const fn new(from: Coordinate, jumped: Coordinate, to: Coordinate) -> Self {
        Move { from, jumped, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} -> {}", self.from, self.jumped, self.to)
    }
}
