//! Text notation for holes and moves.
//!
//! A hole is written `r{row}h{hole}` (e.g. `r3h2`); the short form
//! `{row},{hole}` is also accepted on input. A move is its three holes joined
//! by ` -> `, and a solution is its moves joined by ` ; `.

use thiserror::Error;

use crate::board::{Coordinate, InvalidCoordinate, Move};

/// Errors that can occur when parsing hole or move notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty input")]
    EmptyInput,

    #[error("malformed hole '{0}', expected r<row>h<hole> or <row>,<hole>")]
    MalformedHole(String),

    #[error("malformed move '{0}', expected <from> -> <jumped> -> <to>")]
    MalformedMove(String),

    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinate),
}

/// Parses a hole in `r3h2` or `3,2` form.
pub fn parse_coordinate(s: &str) -> Result<Coordinate, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NotationError::EmptyInput);
    }

    let malformed = || NotationError::MalformedHole(s.to_string());

    let (row, hole) = if let Some(rest) = s.strip_prefix('r') {
        rest.split_once('h').ok_or_else(malformed)?
    } else {
        s.split_once(',').ok_or_else(malformed)?
    };

    let row: u32 = row.trim().parse().map_err(|_| malformed())?;
    let hole: u32 = hole.trim().parse().map_err(|_| malformed())?;
    Ok(Coordinate::new(row, hole)?)
}

/// Parses a move written as `r5h2 -> r4h2 -> r3h2`.
pub fn parse_move(s: &str) -> Result<Move, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NotationError::EmptyInput);
    }

    let parts: Vec<&str> = s.split("->").collect();
    if parts.len() != 3 {
        return Err(NotationError::MalformedMove(s.to_string()));
    }
    Ok(Move::new(
        parse_coordinate(parts[0])?,
        parse_coordinate(parts[1])?,
        parse_coordinate(parts[2])?,
    ))
}

/// Parses a ` ; `-separated move sequence. An empty string is an empty
/// sequence.
pub fn parse_solution(s: &str) -> Result<Vec<Move>, NotationError> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(';').map(parse_move).collect()
}

/// Formats a move sequence as ` ; `-separated moves.
pub fn format_solution(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ; ")
}
