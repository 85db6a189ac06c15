//! Sliding-puzzle state.
//!
//! A [`Board`] is an immutable N×N arrangement of tiles stored as a flat
//! row-major array, where `0` marks the blank. The goal arrangement places
//! tile `k` at flat index `k - 1` and the blank in the last cell.
//!
//! Hamming and Manhattan distances are computed lazily and memoized. Boards
//! produced by sliding a tile get both values derived in O(1) from the board
//! they came from, so a search never recomputes them from scratch.

use std::cell::OnceCell;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHashSet;

use crate::error::ValidationError;

/// A tile label. `0` is the blank.
pub type Tile = u16;

/// An immutable puzzle state.
///
/// Equality and hashing only look at the dimension and the tile sequence;
/// the memoized heuristics never take part.
#[derive(Clone, Debug)]
pub struct Board {
    dimension: usize,
    tiles: Box<[Tile]>,
    /// Flat index of the blank.
    blank: usize,
    hamming: OnceCell<usize>,
    manhattan: OnceCell<usize>,
}

/// A board one slide away from another, tagged when it undoes the previous slide.
#[derive(Clone, Debug)]
pub struct Successor {
    pub board: Board,
    /// Set when this board is the one two moves back, i.e. the slide
    /// moves the blank back to where it just came from.
    pub backtrack: bool,
}

impl Board {
    /// Builds a board from its rows.
    ///
    /// Every row must have as many tiles as there are rows, and the tiles
    /// must be a permutation of `0..N²`.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self, ValidationError> {
        let dimension = rows.len();
        if dimension == 0 {
            return Err(ValidationError::Empty);
        }

        let mut tiles = Vec::with_capacity(dimension * dimension);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != dimension {
                return Err(ValidationError::NotSquare {
                    row,
                    len: cells.len(),
                    dimension,
                });
            }
            tiles.extend_from_slice(cells);
        }

        Self::from_tiles(dimension, tiles)
    }

    /// Builds a board from a flat row-major tile sequence.
    pub fn from_tiles(dimension: usize, tiles: Vec<Tile>) -> Result<Self, ValidationError> {
        if tiles.is_empty() {
            return Err(ValidationError::Empty);
        }
        if dimension.checked_mul(dimension) != Some(tiles.len()) {
            return Err(ValidationError::TileCount {
                dimension,
                found: tiles.len(),
            });
        }

        let max = tiles.len() - 1;
        let mut seen: FxHashSet<Tile> = FxHashSet::default();
        let mut blank = 0;

        for (index, &tile) in tiles.iter().enumerate() {
            if tile as usize > max {
                return Err(ValidationError::TileOutOfRange { tile, max });
            }
            if !seen.insert(tile) {
                return Err(ValidationError::DuplicateTile { tile });
            }
            if tile == 0 {
                blank = index;
            }
        }

        // N² distinct labels in 0..N² is a permutation, so exactly one blank exists
        Ok(Self::with_blank(dimension, tiles.into_boxed_slice(), blank))
    }

    /// Returns the solved board of the given dimension.
    pub fn goal(dimension: usize) -> Result<Self, ValidationError> {
        if dimension == 0 {
            return Err(ValidationError::Empty);
        }
        let cells = dimension
            .checked_mul(dimension)
            .filter(|&cells| cells - 1 <= Tile::MAX as usize)
            .ok_or(ValidationError::DimensionTooLarge { dimension })?;

        let tiles: Box<[Tile]> = (1..cells)
            .map(|label| label as Tile)
            .chain(std::iter::once(0))
            .collect();

        Ok(Self::with_blank(dimension, tiles, cells - 1))
    }

    fn with_blank(dimension: usize, tiles: Box<[Tile]>, blank: usize) -> Self {
        Self {
            dimension,
            tiles,
            blank,
            hamming: OnceCell::new(),
            manhattan: OnceCell::new(),
        }
    }

    /// Board dimension N.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Flat row-major tiles.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at `(row, col)`.
    #[inline]
    pub fn tile(&self, row: usize, col: usize) -> Tile {
        self.tiles[row * self.dimension + col]
    }

    /// Flat index of the blank.
    #[inline]
    pub fn blank_index(&self) -> usize {
        self.blank
    }

    /// Number of tiles out of their goal position, blank excluded.
    pub fn hamming(&self) -> usize {
        *self.hamming.get_or_init(|| {
            self.tiles
                .iter()
                .enumerate()
                .filter(|&(index, &tile)| tile != 0 && tile as usize != index + 1)
                .count()
        })
    }

    /// Sum of the row and column offsets of every tile from its goal cell.
    pub fn manhattan(&self) -> usize {
        *self.manhattan.get_or_init(|| {
            let n = self.dimension;
            self.tiles
                .iter()
                .enumerate()
                .filter(|&(_, &tile)| tile != 0)
                .map(|(index, &tile)| {
                    let goal = tile as usize - 1;
                    (index / n).abs_diff(goal / n) + (index % n).abs_diff(goal % n)
                })
                .sum()
        })
    }

    /// Whether this is the goal arrangement.
    #[inline]
    pub fn is_goal(&self) -> bool {
        self.manhattan() == 0
    }

    /// All boards reachable by sliding one tile into the blank.
    ///
    /// Boards come in ascending `(manhattan, hamming)` order.
    pub fn neighbors(&self) -> Vec<Board> {
        self.successors(None)
            .into_iter()
            .map(|successor| successor.board)
            .collect()
    }

    /// Same boards and order as [`Board::neighbors`], each tagged as a
    /// backtrack when its blank lands on `came_from`.
    ///
    /// `came_from` is the blank index of the board this one was reached
    /// from. The tag never affects ordering or heuristic values.
    pub fn successors(&self, came_from: Option<usize>) -> Vec<Successor> {
        let mut boards: Vec<Board> = self
            .cells_next_to_blank()
            .map(|from| self.slide_from(from))
            .collect();
        boards.sort_by_key(|board| (board.manhattan(), board.hamming()));

        boards
            .into_iter()
            .map(|board| Successor {
                backtrack: came_from == Some(board.blank),
                board,
            })
            .collect()
    }

    /// A board with the first two non-blank tiles (row-major) swapped.
    ///
    /// The swap flips permutation parity, so exactly one of a board and its
    /// twin is solvable. A board with fewer than two tiles is its own twin.
    pub fn twin(&self) -> Board {
        let mut labelled = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(index, _)| index);

        let (Some(first), Some(second)) = (labelled.next(), labelled.next()) else {
            return self.clone();
        };

        let mut tiles = self.tiles.clone();
        tiles.swap(first, second);
        Self::with_blank(self.dimension, tiles, self.blank)
    }

    /// Flat indices of the cells orthogonally adjacent to the blank.
    fn cells_next_to_blank(&self) -> impl Iterator<Item = usize> {
        let n = self.dimension;
        let blank = self.blank;
        let (row, col) = (blank / n, blank % n);

        [
            (row > 0).then(|| blank - n),
            (row + 1 < n).then(|| blank + n),
            (col > 0).then(|| blank - 1),
            (col + 1 < n).then(|| blank + 1),
        ]
        .into_iter()
        .flatten()
    }

    /// Slides the tile at `from` into the blank.
    ///
    /// Only the moved tile's offset along the slide axis changes, so both
    /// heuristics are updated in O(1).
    fn slide_from(&self, from: usize) -> Board {
        let n = self.dimension;
        let to = self.blank;
        let goal = self.tiles[from] as usize - 1;

        let (before, after) = if from % n == to % n {
            ((from / n).abs_diff(goal / n), (to / n).abs_diff(goal / n))
        } else {
            ((from % n).abs_diff(goal % n), (to % n).abs_diff(goal % n))
        };
        let manhattan = self.manhattan() + after - before;
        let hamming = self.hamming() + usize::from(to != goal) - usize::from(from != goal);

        let mut tiles = self.tiles.clone();
        tiles.swap(from, to);

        Self {
            dimension: n,
            tiles,
            blank: from,
            hamming: OnceCell::from(hamming),
            manhattan: OnceCell::from(manhattan),
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dimension.hash(state);
        self.tiles.hash(state);
    }
}
