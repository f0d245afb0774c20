//! Text formats.
//!
//! Hole and move notation used on the command line and in printed
//! solutions.

pub mod notation;

pub use notation::{
    format_solution, parse_coordinate, parse_move, parse_solution, NotationError,
};
