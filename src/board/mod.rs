//! Board representation and game-state types.
//!
//! Contains hole coordinates, jump moves, and the immutable occupancy
//! snapshot the solver walks over.

pub mod coordinate;
pub mod jump;
pub mod state;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use jump::Move;
pub use state::{hole_count, GameState, MoveError, SetupError, MAX_ROWS};
