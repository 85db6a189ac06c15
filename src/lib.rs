//! Sliding Puzzle Solver Library
//!
//! Finds minimum-move solutions for N×N sliding-tile puzzles with a
//! dual-queue A* search, or proves that no solution exists.

pub mod board;
pub mod error;
pub mod loader;
pub mod node;
pub mod render;
pub mod solver;

pub use board::{Board, Successor, Tile};
pub use error::{ParseError, SolverError, ValidationError};
pub use solver::{Outcome, Solver, SolverConfig};
