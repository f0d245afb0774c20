//! Hole coordinates on a triangular board.
//!
//! Rows are numbered from 1 at the apex, and each row `r` holds `r` holes
//! numbered from 1 at the left edge.

use std::fmt;

use crate::movegen;

use super::jump::Move;

/// Returned when a (row, hole) pair does not name a hole of any triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: hole {hole} does not exist on row {row}")]
pub struct InvalidCoordinate {
    pub row: u32,
    pub hole: u32,
}

/// A single hole, identified by its 1-based row and 1-based position within
/// the row. Always satisfies `1 <= hole <= row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    row: u32,
    hole: u32,
}

impl Coordinate {
    /// Creates a coordinate, rejecting `hole < 1` and `hole > row`.
    pub fn new(row: u32, hole: u32) -> Result<Self, InvalidCoordinate> {
        if hole < 1 || hole > row {
            return Err(InvalidCoordinate { row, hole });
        }
        Ok(Coordinate { row, hole })
    }

    /// Builds a coordinate the caller has already bounds-checked.
    pub(crate) const fn new_unchecked(row: u32, hole: u32) -> Self {
        debug_assert!(hole >= 1 && hole <= row);
        Coordinate { row, hole }
    }

    pub const fn row(self) -> u32 {
        self.row
    }

    pub const fn hole(self) -> u32 {
        self.hole
    }

    /// Returns true if this hole exists on a board with `row_count` rows.
    pub const fn is_on_board(self, row_count: u32) -> bool {
        self.row <= row_count
    }

    /// Every jump that could start here on a `row_count`-row board,
    /// regardless of occupancy, in fixed direction order.
    pub fn possible_moves(self, row_count: u32) -> Vec<Move> {
        movegen::possible_moves(self, row_count)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}h{}", self.row, self.hole)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_every_hole_of_a_row() {
        for hole in 1..=5 {
            let c = Coordinate::new(5, hole).unwrap();
            assert_eq!(c.row(), 5);
            assert_eq!(c.hole(), hole);
        }
    }

    #[test]
    fn new_rejects_hole_past_row_end() {
        assert_eq!(
            Coordinate::new(2, 3),
            Err(InvalidCoordinate { row: 2, hole: 3 })
        );
    }

    #[test]
    fn new_rejects_hole_zero() {
        assert_eq!(
            Coordinate::new(2, 0),
            Err(InvalidCoordinate { row: 2, hole: 0 })
        );
    }

    #[test]
    fn new_rejects_row_zero() {
        assert!(Coordinate::new(0, 0).is_err());
        assert!(Coordinate::new(0, 1).is_err());
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Coordinate::new(3, 2).unwrap(), Coordinate::new(3, 2).unwrap());
        assert_ne!(Coordinate::new(3, 2).unwrap(), Coordinate::new(3, 1).unwrap());
        assert_ne!(Coordinate::new(3, 2).unwrap(), Coordinate::new(4, 2).unwrap());
    }

    #[test]
    fn on_board_depends_only_on_row() {
        let c = Coordinate::new(4, 4).unwrap();
        assert!(c.is_on_board(4));
        assert!(c.is_on_board(5));
        assert!(!c.is_on_board(3));
    }

    #[test]
    fn display_uses_row_hole_notation() {
        assert_eq!(Coordinate::new(3, 2).unwrap().to_string(), "r3h2");
        assert_eq!(Coordinate::new(12, 10).unwrap().to_string(), "r12h10");
    }

    #[test]
    fn error_message_names_the_hole() {
        let err = Coordinate::new(2, 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid coordinate: hole 3 does not exist on row 2"
        );
    }
}
