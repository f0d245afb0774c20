//! Run reports.
//!
//! A `Report` carries the three published numbers of a run (games played,
//! solutions found, elapsed milliseconds) plus the board it was run on. It is
//! written either as three human-readable lines or as one JSON object per
//! line for downstream aggregation.

use std::io::{self, Write};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::Coordinate;
use crate::search::SearchResult;

/// Summary of one solver run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub rows: u32,
    /// Starting empty hole in `r{row}h{hole}` notation.
    pub empty_hole: String,
    pub games_played: u64,
    pub solutions_found: usize,
    pub elapsed_ms: u64,
}

impl Report {
    pub fn new(rows: u32, empty_hole: Coordinate, result: &SearchResult, elapsed: Duration) -> Self {
        Report {
            rows,
            empty_hole: empty_hole.to_string(),
            games_played: result.games_played,
            solutions_found: result.solutions_found(),
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Writes the three-line summary:
    ///
    /// ```text
    /// Games played:    137846
    /// Solutions found:   1550
    /// Time elapsed:       412ms
    /// ```
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Games played:    {:6}", self.games_played)?;
        writeln!(out, "Solutions found: {:6}", self.solutions_found)?;
        writeln!(out, "Time elapsed:    {:6}ms", self.elapsed_ms)?;
        out.flush()
    }

    /// Writes the report as a single JSON line.
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)?;
        out.flush()
    }
}

/// Reads back reports written by `write_json`, one per non-blank line.
pub fn read_jsonl(input: &str) -> Result<Vec<Report>, serde_json::Error> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(serde_json::from_str)
        .collect()
}
