//! Command-line configuration for the solver binary.

use std::path::PathBuf;

use thiserror::Error;

use crate::board::Coordinate;
use crate::protocol::notation::{parse_coordinate, NotationError};

/// Errors from reading command-line arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid {flag} value: '{value}'")]
    InvalidValue { flag: String, value: String },

    #[error("invalid --empty value: {0}")]
    EmptyHole(#[from] NotationError),
}

/// Settings for one solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Number of rows on the board.
    pub rows: u32,
    /// The one hole left empty at the start.
    pub empty_hole: Coordinate,
    /// Print the starting board before searching.
    pub show_board: bool,
    /// How many solutions to print after the search.
    pub show_solutions: usize,
    /// Emit the report as JSON instead of text.
    pub json: bool,
    /// File to append the JSON report to.
    pub output: Option<PathBuf>,
    /// Suppress progress output on stderr.
    pub quiet: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            rows: 5,
            empty_hole: Coordinate::new_unchecked(3, 2),
            show_board: false,
            show_solutions: 0,
            json: false,
            output: None,
            quiet: false,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Solve(SolverConfig),
    Help,
}

/// Parses arguments (without the program name) into an invocation.
pub fn parse_args<I, S>(args: I) -> Result<Invocation, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = SolverConfig::default();
    let mut args = args.into_iter().map(Into::<String>::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--rows" => {
                let value = next_value(&mut args, &arg)?;
                config.rows = parse_number(&arg, &value)?;
                if config.rows == 0 {
                    return Err(ConfigError::InvalidValue { flag: arg.clone(), value });
                }
            }
            "--empty" => {
                let value = next_value(&mut args, &arg)?;
                config.empty_hole = parse_coordinate(&value)?;
            }
            "--solutions" => {
                let value = next_value(&mut args, &arg)?;
                config.show_solutions = parse_number(&arg, &value)?;
            }
            "--output" => {
                let value = next_value(&mut args, &arg)?;
                config.output = Some(PathBuf::from(value));
            }
            "--show-board" => config.show_board = true,
            "--json" => config.json = true,
            "--quiet" => config.quiet = true,
            "--help" | "-h" => return Ok(Invocation::Help),
            _ => return Err(ConfigError::UnknownArgument(arg.clone())),
        }
    }

    Ok(Invocation::Solve(config))
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, ConfigError> {
    args.next()
        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

/// Usage text for `--help` and argument errors.
pub const USAGE: &str = "\
Usage: triangle-solitaire [OPTIONS]

Options:
  --rows N          Number of board rows (default: 5)
  --empty HOLE      Starting empty hole, as r3h2 or 3,2 (default: r3h2)
  --show-board      Print the starting board to stderr
  --solutions N     Print the first N solutions (default: 0)
  --json            Print the report as JSON
  --output FILE     Append the JSON report to FILE
  --quiet           Suppress progress output
  --help            Show this help";
