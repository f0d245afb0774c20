//! triangle-solitaire -- exhaustive solver for triangular peg solitaire.
//!
//! Solves one board, then prints games played, solutions found and elapsed
//! time to stdout. Progress messages go to stderr.
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]

use std::env;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Instant;

use triangle_solitaire::board::GameState;
use triangle_solitaire::config::{parse_args, Invocation, SolverConfig, USAGE};
use triangle_solitaire::protocol::format_solution;
use triangle_solitaire::report::Report;
use triangle_solitaire::search::SolutionSearch;

fn main() {
    let config = match parse_args(env::args().skip(1)) {
        Ok(Invocation::Solve(config)) => config,
        Ok(Invocation::Help) => {
            println!("{}", USAGE);
            return;
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(config: &SolverConfig) -> Result<(), Box<dyn std::error::Error>> {
    let initial = GameState::initial(config.rows, config.empty_hole)?;

    if !config.quiet {
        eprintln!(
            "Solving {}-row board, {} pegs, empty hole {}",
            config.rows,
            initial.pegs_remaining(),
            config.empty_hole
        );
    }
    if config.show_board {
        eprint!("{}", initial);
    }

    let start = Instant::now();
    let result = SolutionSearch::new().run(&initial)?;
    let elapsed = start.elapsed();

    if !config.quiet {
        eprintln!(
            "Visited {} states in {:.3}s ({:.0} states/s)",
            result.nodes,
            elapsed.as_secs_f64(),
            result.nodes as f64 / elapsed.as_secs_f64().max(1e-9)
        );
    }

    let report = Report::new(config.rows, config.empty_hole, &result, elapsed);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (i, solution) in result.solutions.iter().take(config.show_solutions).enumerate() {
        let line = format!("Solution {}: {}", i + 1, format_solution(solution));
        // Keep stdout a single JSON object in --json mode.
        if config.json {
            eprintln!("{}", line);
        } else {
            writeln!(out, "{}", line)?;
        }
    }
    if config.json {
        report.write_json(&mut out)?;
    } else {
        report.write_text(&mut out)?;
    }

    if let Some(path) = &config.output {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        report.write_json(&mut BufWriter::new(file))?;
        if !config.quiet {
            eprintln!("Appended report to {}", path.display());
        }
    }

    Ok(())
}
