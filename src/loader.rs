//! Reader for the text puzzle format.
//!
//! The first number is the dimension N, followed by N² tiles in row-major
//! order with `0` for the blank:
//!
//! ```text
//! 3
//!  0  1  3
//!  4  2  5
//!  7  8  6
//! ```
//!
//! Numbers may be separated by any whitespace. Line numbers are tracked only
//! for error messages.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::board::{Board, Tile};
use crate::error::{ParseError, MAX_DIMENSION};

/// Parses a board from text.
pub fn parse_board(input: &str) -> Result<Board, ParseError> {
    let mut tokens = input
        .lines()
        .enumerate()
        .flat_map(|(index, line)| line.split_whitespace().map(move |token| (index + 1, token)));

    let (line, token) = tokens.next().ok_or(ParseError::MissingDimension)?;
    let dimension: usize = parse_number(line, token)?;
    let expected = dimension
        .checked_mul(dimension)
        .ok_or_else(|| invalid_number(line, token))?;

    let mut tiles = Vec::with_capacity(expected.min(MAX_DIMENSION * MAX_DIMENSION));
    while tiles.len() < expected {
        let Some((line, token)) = tokens.next() else {
            return Err(ParseError::MissingTiles {
                expected,
                found: tiles.len(),
            });
        };
        tiles.push(parse_number::<Tile>(line, token)?);
    }

    if let Some((line, _)) = tokens.next() {
        return Err(ParseError::TrailingInput { line });
    }

    Ok(Board::from_tiles(dimension, tiles)?)
}

/// Reads and parses a board from a file.
pub fn read_board(path: impl AsRef<Path>) -> Result<Board, ParseError> {
    parse_board(&fs::read_to_string(path)?)
}

/// Reads and parses a board from any reader, such as stdin.
pub fn read_board_from(mut reader: impl Read) -> Result<Board, ParseError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_board(&input)
}

fn parse_number<T: FromStr>(line: usize, token: &str) -> Result<T, ParseError> {
    token.parse().map_err(|_| invalid_number(line, token))
}

fn invalid_number(line: usize, token: &str) -> ParseError {
    ParseError::InvalidNumber {
        line,
        token: token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_parses_standard_layout() {
        let board = parse_board("3\n 0  1  3\n 4  2  5\n 7  8  6\n").unwrap();
        let expected = Board::from_rows(&[[0u16, 1, 3], [4, 2, 5], [7, 8, 6]]).unwrap();
        assert_eq!(board, expected);
    }

    #[test]
    fn test_line_breaks_are_free_form() {
        let board = parse_board("\n2 1\n2\n\n 3 0").unwrap();
        assert_eq!(board, Board::goal(2).unwrap());
    }

    #[test]
    fn test_reports_missing_dimension() {
        assert!(matches!(
            parse_board("  \n\n"),
            Err(ParseError::MissingDimension)
        ));
    }

    #[test]
    fn test_reports_bad_token_with_line() {
        let err = parse_board("2\n1 2\n3 x\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidNumber { line: 3, ref token } if token == "x"
        ));

        // negative labels are not tiles
        assert!(matches!(
            parse_board("2\n1 -2\n3 0\n"),
            Err(ParseError::InvalidNumber { line: 2, .. })
        ));
    }

    #[test]
    fn test_reports_missing_and_trailing_tiles() {
        assert!(matches!(
            parse_board("3\n1 2 3\n4 5 6\n"),
            Err(ParseError::MissingTiles {
                expected: 9,
                found: 6
            })
        ));
        assert!(matches!(
            parse_board("2\n1 2\n3 0\n\n7\n"),
            Err(ParseError::TrailingInput { line: 5 })
        ));
    }

    #[test]
    fn test_reports_invalid_board() {
        assert!(matches!(
            parse_board("2\n1 1\n3 0\n"),
            Err(ParseError::Invalid(ValidationError::DuplicateTile { tile: 1 }))
        ));
        assert!(matches!(
            parse_board("0\n"),
            Err(ParseError::Invalid(ValidationError::Empty))
        ));
    }

    #[test]
    fn test_reads_from_file_and_reader() {
        let path = std::env::temp_dir().join(format!("npuzzle-loader-{}.txt", std::process::id()));
        fs::write(&path, "2\n1 2\n3 0\n").unwrap();

        let from_file = read_board(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(from_file, Board::goal(2).unwrap());

        let from_reader = read_board_from("2\n1 2\n0 3\n".as_bytes()).unwrap();
        assert_eq!(from_reader.blank_index(), 2);

        assert!(matches!(
            read_board(path.with_extension("missing")),
            Err(ParseError::Io(_))
        ));
    }
}
