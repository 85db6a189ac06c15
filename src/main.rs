//! Sliding Puzzle Solver
//!
//! Reads N×N sliding-tile puzzles and prints a minimum-move solution path,
//! or reports that the puzzle cannot be solved. Unsolvable puzzles are
//! detected by solving the puzzle's twin alongside it.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use npuzzle::{loader, render, Board, Solver, SolverConfig};

/// Solves N×N sliding-tile puzzles with A* search.
#[derive(Parser)]
#[command(name = "npuzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve puzzles and print the minimum-move solution path.
    Solve {
        /// Puzzle files to solve; `-` reads from stdin.
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[command(flatten)]
        budget: BudgetArgs,
        /// Print only the summary line, not the boards on the path.
        #[arg(long)]
        moves_only: bool,
    },
    /// Show a puzzle's heuristics, twin and neighbors.
    Inspect {
        /// Puzzle file; `-` reads from stdin.
        file: PathBuf,
    },
}

/// Limits on the search.
#[derive(Args, Debug, Default)]
struct BudgetArgs {
    /// Never explore boards more than this many moves from the start.
    #[arg(long)]
    max_depth: Option<usize>,
    /// Stop after this many node expansions across both searches.
    #[arg(long)]
    max_expansions: Option<usize>,
    /// Cap the depth at the longest known optimal solution for the board size.
    #[arg(long, conflicts_with = "max_depth")]
    known_diameter: bool,
}

impl BudgetArgs {
    fn config(&self, dimension: usize) -> SolverConfig {
        let mut config = SolverConfig::default();
        if let Some(max_depth) = self.max_depth {
            config = config.with_max_depth(max_depth);
        }
        if let Some(max_expansions) = self.max_expansions {
            config = config.with_max_expansions(max_expansions);
        }
        if self.known_diameter {
            config = config.with_known_diameter(dimension);
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            files,
            budget,
            moves_only,
        } => {
            let show_names = files.len() > 1;
            for file in &files {
                if show_names {
                    println!("{}:", file.display());
                }
                run_solve(file, &budget, moves_only)?;
            }
        }
        Command::Inspect { file } => run_inspect(&file)?,
    }

    Ok(())
}

/// Loads a board from a file, or from stdin for `-`.
fn load(path: &Path) -> Result<Board> {
    let board = if path == Path::new("-") {
        loader::read_board_from(io::stdin().lock())
    } else {
        loader::read_board(path)
    };
    board.with_context(|| format!("failed to load puzzle from {}", path.display()))
}

/// Solves one puzzle file and prints the report.
fn run_solve(path: &Path, budget: &BudgetArgs, moves_only: bool) -> Result<()> {
    let board = load(path)?;
    let config = budget.config(board.dimension());
    let solver = Solver::with_config(board, config)
        .with_context(|| format!("cannot solve puzzle from {}", path.display()))?;

    info!(
        "{}: {:?} after {} expansions",
        path.display(),
        solver.outcome(),
        solver.stats().expanded()
    );

    if moves_only {
        println!("{}", render::format_summary(&solver));
    } else {
        print!("{}", render::format_report(&solver));
    }
    Ok(())
}

/// Prints heuristics, twin and neighbors of one puzzle file.
fn run_inspect(path: &Path) -> Result<()> {
    let board = load(path)?;
    print!("{}", format_inspection(&board));
    Ok(())
}

fn format_inspection(board: &Board) -> String {
    let mut output = board.to_string();
    output.push_str(&format!("hamming = {}\n", board.hamming()));
    output.push_str(&format!("manhattan = {}\n", board.manhattan()));
    output.push_str(&format!("goal = {}\n", board.is_goal()));
    output.push_str(&format!("\ntwin:\n{}\n", board.twin()));

    let neighbors = board.neighbors();
    output.push_str(&format!("neighbors ({}):\n", neighbors.len()));
    for neighbor in &neighbors {
        output.push_str(&format!("{neighbor}\n"));
    }
    output
}
