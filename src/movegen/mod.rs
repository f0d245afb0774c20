//! Move generation.
//!
//! Geometric jump candidates come from a fixed table of six directions.
//! Legal moves are the candidates whose jumped hole holds a peg and whose
//! landing hole is empty.
//!
//! Direction order is significant: it fixes the branch order of the search
//! and so the order in which solutions are found.

use crate::board::{Coordinate, GameState, Move};

/// The six directions a peg can jump along a triangular lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    UpRight,
    Left,
    Right,
    DownLeft,
    DownRight,
}

/// All directions, in generation order.
pub const ALL_DIRECTIONS: [Direction; 6] = [
    Direction::UpLeft,
    Direction::UpRight,
    Direction::Left,
    Direction::Right,
    Direction::DownLeft,
    Direction::DownRight,
];

impl Direction {
    /// Returns the jump from `origin` in this direction, or `None` when the
    /// jumped or landing hole would fall outside a `row_count`-row board.
    pub fn jump_from(self, origin: Coordinate, row_count: u32) -> Option<Move> {
        let (row, hole) = (origin.row(), origin.hole());
        // hole <= row holds for every coordinate, so this cannot underflow.
        let right_room = row - hole;
        let rows_below = row_count.saturating_sub(row);

        let (jumped, to) = match self {
            Direction::UpLeft if row >= 3 && hole >= 3 => ((row - 1, hole - 1), (row - 2, hole - 2)),
            Direction::UpRight if row >= 3 && right_room >= 2 => ((row - 1, hole), (row - 2, hole)),
            Direction::Left if hole >= 3 => ((row, hole - 1), (row, hole - 2)),
            Direction::Right if right_room >= 2 => ((row, hole + 1), (row, hole + 2)),
            Direction::DownLeft if rows_below >= 2 => ((row + 1, hole), (row + 2, hole)),
            Direction::DownRight if rows_below >= 2 => ((row + 1, hole + 1), (row + 2, hole + 2)),
            _ => return None,
        };

        Some(Move::new(
            origin,
            Coordinate::new_unchecked(jumped.0, jumped.1),
            Coordinate::new_unchecked(to.0, to.1),
        ))
    }
}

/// Every jump that could start at `origin` on a `row_count`-row board,
/// ignoring occupancy.
pub fn possible_moves(origin: Coordinate, row_count: u32) -> Vec<Move> {
    ALL_DIRECTIONS
        .iter()
        .filter_map(|dir| dir.jump_from(origin, row_count))
        .collect()
}

/// Every move playable in `state`, by origin in storage order and then by
/// direction.
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let row_count = state.row_count();
    let mut moves = Vec::new();

    for &origin in state.occupied_holes() {
        for dir in ALL_DIRECTIONS {
            if let Some(mv) = dir.jump_from(origin, row_count) {
                if state.is_occupied(mv.jumped) && !state.is_occupied(mv.to) {
                    moves.push(mv);
                }
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: u32, hole: u32) -> Coordinate {
        Coordinate::new(row, hole).unwrap()
    }

    fn mv(from: (u32, u32), jumped: (u32, u32), to: (u32, u32)) -> Move {
        Move::new(c(from.0, from.1), c(jumped.0, jumped.1), c(to.0, to.1))
    }

    #[test]
    fn apex_jumps_down_both_sides() {
        assert_eq!(
            c(1, 1).possible_moves(5),
            vec![mv((1, 1), (2, 1), (3, 1)), mv((1, 1), (2, 2), (3, 3))]
        );
    }

    #[test]
    fn apex_on_short_board_has_no_jumps() {
        assert!(c(1, 1).possible_moves(2).is_empty());
    }

    #[test]
    fn bottom_left_corner() {
        assert_eq!(
            c(5, 1).possible_moves(5),
            vec![mv((5, 1), (4, 1), (3, 1)), mv((5, 1), (5, 2), (5, 3))]
        );
    }

    #[test]
    fn bottom_right_corner() {
        assert_eq!(
            c(5, 5).possible_moves(5),
            vec![mv((5, 5), (4, 4), (3, 3)), mv((5, 5), (5, 4), (5, 3))]
        );
    }

    #[test]
    fn bottom_middle_in_direction_order() {
        assert_eq!(
            c(5, 3).possible_moves(5),
            vec![
                mv((5, 3), (4, 2), (3, 1)),
                mv((5, 3), (4, 3), (3, 3)),
                mv((5, 3), (5, 2), (5, 1)),
                mv((5, 3), (5, 4), (5, 5)),
            ]
        );
    }

    #[test]
    fn right_edge_middle() {
        assert_eq!(
            c(3, 3).possible_moves(5),
            vec![
                mv((3, 3), (2, 2), (1, 1)),
                mv((3, 3), (3, 2), (3, 1)),
                mv((3, 3), (4, 3), (5, 3)),
                mv((3, 3), (4, 4), (5, 5)),
            ]
        );
    }

    #[test]
    fn fourth_row_right_end() {
        assert_eq!(
            c(4, 4).possible_moves(5),
            vec![mv((4, 4), (3, 3), (2, 2)), mv((4, 4), (4, 3), (4, 2))]
        );
    }

    #[test]
    fn center_of_large_board_has_all_six() {
        let moves = c(5, 3).possible_moves(7);
        assert_eq!(moves.len(), 6);
        assert_eq!(moves[4], mv((5, 3), (6, 3), (7, 3)));
        assert_eq!(moves[5], mv((5, 3), (6, 4), (7, 5)));
    }

    #[test]
    fn row_past_board_size_only_jumps_up_or_sideways() {
        // Row 5 on a 3-row board: the downward guard must not underflow.
        let moves = c(5, 3).possible_moves(3);
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn possible_moves_stay_inside_triangle() {
        for row_count in 1..=8 {
            for row in 1..=row_count {
                for hole in 1..=row {
                    for m in c(row, hole).possible_moves(row_count) {
                        for h in [m.jumped, m.to] {
                            assert!(h.hole() >= 1 && h.hole() <= h.row(), "{} off lattice", h);
                            assert!(h.is_on_board(row_count), "{} below board", h);
                        }
                        assert_eq!(m.from, c(row, hole));
                    }
                }
            }
        }
    }

    #[test]
    fn standard_opening_has_two_legal_moves() {
        let state = GameState::initial(5, c(3, 2)).unwrap();
        assert_eq!(
            state.legal_moves(),
            vec![mv((5, 2), (4, 2), (3, 2)), mv((5, 4), (4, 3), (3, 2))]
        );
    }

    #[test]
    fn legal_moves_follow_storage_order() {
        let state = GameState::initial(5, c(3, 2)).unwrap();
        let next = state.apply(mv((5, 2), (4, 2), (3, 2))).unwrap();
        let legal = next.legal_moves();

        let origin_rank: Vec<usize> = legal
            .iter()
            .map(|m| next.occupied_holes().iter().position(|&h| h == m.from).unwrap())
            .collect();
        assert!(origin_rank.windows(2).all(|w| w[0] <= w[1]));
        assert!(legal.iter().all(|m| next.is_occupied(m.jumped)));
        assert!(legal.iter().all(|m| !next.is_occupied(m.to)));
    }

    #[test]
    fn legal_moves_is_repeatable() {
        let state = GameState::initial(5, c(1, 1)).unwrap();
        assert_eq!(state.legal_moves(), state.legal_moves());
    }
}
