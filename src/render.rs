//! Plain-text rendering of boards and solver results.

use std::fmt;

use crate::board::Board;
use crate::solver::{Outcome, Solver};

/// Width of one rendered cell, tile right-justified.
const CELL_WIDTH: usize = 5;

/// Renders the dimension on its own line, then one line per row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dimension();
        writeln!(f, "{n}")?;
        for row in self.tiles().chunks(n) {
            for tile in row {
                write!(f, "{:>width$}", tile, width = CELL_WIDTH)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// One-line summary of a solver run.
pub fn format_summary(solver: &Solver) -> String {
    match (solver.outcome(), solver.moves()) {
        (Outcome::Solved, Some(moves)) => format!("Minimum number of moves = {moves}"),
        (Outcome::Unsolvable, _) => "No solution possible".to_string(),
        _ => "No solution found within the search budget".to_string(),
    }
}

/// Summary line followed by every board on the solution path, each
/// separated by a blank line.
pub fn format_report(solver: &Solver) -> String {
    let mut output = format_summary(solver);
    output.push('\n');

    if let Some(path) = solver.solution() {
        for board in path {
            output.push_str(&format!("{board}\n"));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;

    #[test]
    fn test_board_display() {
        let board = Board::from_rows(&[[1u16, 2], [0, 3]]).unwrap();
        assert_eq!(board.to_string(), "2\n    1    2\n    0    3\n");
    }

    #[test]
    fn test_wide_labels_stay_aligned() {
        let board = Board::goal(4).unwrap();
        let rendered = board.to_string();
        let rows: Vec<&str> = rendered.lines().skip(1).collect();

        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.len() == 4 * CELL_WIDTH));
        assert_eq!(rows[3], "   13   14   15    0");
    }

    #[test]
    fn test_report_snapshot() {
        let initial = Board::from_rows(&[[1u16, 2, 3], [4, 0, 5], [7, 8, 6]]).unwrap();
        let solver = Solver::new(initial).unwrap();

        insta::assert_snapshot!(format_report(&solver));
    }

    #[test]
    fn test_report_separates_boards_with_blank_lines() {
        let initial = Board::from_rows(&[[1u16, 2], [0, 3]]).unwrap();
        let solver = Solver::new(initial).unwrap();

        assert_eq!(
            format_report(&solver),
            "Minimum number of moves = 1\n2\n    1    2\n    0    3\n\n2\n    1    2\n    3    0\n\n"
        );
    }

    #[test]
    fn test_unsolvable_summary() {
        let swapped = Board::from_rows(&[[2u16, 1, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
        let solver = Solver::new(swapped).unwrap();
        assert_eq!(format_report(&solver), "No solution possible\n");
    }

    #[test]
    fn test_budget_summary() {
        let initial = Board::from_rows(&[[0u16, 1, 3], [4, 2, 5], [7, 8, 6]]).unwrap();
        let config = SolverConfig::default().with_max_expansions(1);
        let solver = Solver::with_config(initial, config).unwrap();
        assert_eq!(
            format_summary(&solver),
            "No solution found within the search budget"
        );
    }
}
