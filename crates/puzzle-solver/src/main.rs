//! CLI entry point for the puzzle solver.
//!
//! Usage:
//!   puzzle-solver solve <puzzle.json> [options]
//!   puzzle-solver solve --stdin [options]
//!
//! Options:
//!   --strategy <dfs|bfs>    Search strategy (default: the definition's, else bfs)
//!   --timeout <seconds>     Maximum search time (default: unbounded)
//!   --max-states <n>        Maximum states to expand (default: unbounded)
//!   --json                  Print a JSON report instead of the solution text
//!
//! Exit codes: 0 solved, 1 no solution found, 2 error.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use serde::{Deserialize, Serialize};

use puzzle_solver::{solve, AnyPuzzle, Puzzle, PuzzleDefinition, SearchStrategy, SolverConfig, SolverResult};

#[derive(Parser)]
#[command(name = "puzzle-solver")]
#[command(about = "Depth-first and breadth-first search over finite-state puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a solution to a puzzle definition
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Search strategy; overrides the definition's own
        #[arg(long, value_enum)]
        strategy: Option<SearchStrategy>,

        /// Maximum search time in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Maximum number of states to expand
        #[arg(long)]
        max_states: Option<usize>,

        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },
}

/// Output format for a search
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    strategy: SearchStrategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<usize>,
    states_expanded: usize,
    search_exhausted: bool,
    time_elapsed_ms: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    path: Vec<String>,
}

fn format_result<P: Puzzle>(result: &SolverResult<P>, strategy: SearchStrategy) -> SolveOutput {
    SolveOutput {
        solved: result.is_solved(),
        strategy,
        steps: result.solution.as_ref().map(|tree| tree.steps()),
        states_expanded: result.states_expanded,
        search_exhausted: result.search_exhausted,
        time_elapsed_ms: result.time_elapsed_ms,
        path: result
            .solution
            .iter()
            .flat_map(|tree| tree.states().map(|s| s.to_string()))
            .collect(),
    }
}

/// Run the search and print its outcome, returning whether it solved
fn run<P: Puzzle>(puzzle: P, strategy: SearchStrategy, config: &SolverConfig, json: bool) -> Result<bool> {
    info!("solving with {} search", strategy);
    let result = solve(puzzle, strategy, config);
    info!(
        "{} states expanded in {} ms",
        result.states_expanded, result.time_elapsed_ms
    );

    if json {
        let output = format_result(&result, strategy);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match &result.solution {
            Some(tree) => print!("{}", tree),
            None if result.search_exhausted => println!("No solution found."),
            None => println!("No solution found within the search limits."),
        }
    }
    Ok(result.is_solved())
}

fn execute(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Solve {
            file,
            stdin,
            strategy,
            timeout,
            max_states,
            json,
        } => {
            let json_content = if stdin {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("failed to read puzzle from stdin")?;
                buffer
            } else if let Some(path) = file {
                fs::read_to_string(&path).with_context(|| format!("failed to read {:?}", path))?
            } else {
                bail!("must provide either a file path or --stdin");
            };

            let definition =
                PuzzleDefinition::from_json(&json_content).context("failed to parse puzzle JSON")?;
            let strategy = strategy.or(definition.strategy).unwrap_or_default();
            let config = SolverConfig {
                timeout: timeout.map(Duration::from_secs),
                max_states,
            };

            match definition.build().context("invalid puzzle")? {
                AnyPuzzle::WordLadder(p) => run(p, strategy, &config, json),
                AnyPuzzle::SlidingTile(p) => run(p, strategy, &config, json),
                AnyPuzzle::PegSolitaire(p) => run(p, strategy, &config, json),
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match execute(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
