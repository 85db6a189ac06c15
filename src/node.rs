//! Search nodes and their expansion order.

use std::cmp::Ordering;
use std::rc::Rc;

use crate::board::Board;

/// A board reached after `moves` slides, linked back to the node it came from.
#[derive(Debug)]
pub struct SearchNode {
    pub board: Board,
    pub moves: usize,
    pub parent: Option<Rc<SearchNode>>,
}

impl SearchNode {
    /// A root node with no history.
    pub fn root(board: Board) -> Self {
        Self {
            board,
            moves: 0,
            parent: None,
        }
    }

    /// A node one slide further than `parent`.
    pub fn child(parent: &Rc<SearchNode>, board: Board) -> Self {
        Self {
            board,
            moves: parent.moves + 1,
            parent: Some(Rc::clone(parent)),
        }
    }

    /// A* priority: moves so far plus the Manhattan estimate of what remains.
    #[inline]
    pub fn priority(&self) -> usize {
        self.moves + self.board.manhattan()
    }

    /// Blank index of the parent board, if any.
    #[inline]
    pub fn came_from(&self) -> Option<usize> {
        self.parent.as_ref().map(|parent| parent.board.blank_index())
    }

    /// Boards from the root to this node, inclusive.
    pub fn path(&self) -> Vec<&Board> {
        let mut boards = Vec::with_capacity(self.moves + 1);
        let mut current = Some(self);

        while let Some(node) = current {
            boards.push(&node.board);
            current = node.parent.as_deref();
        }

        boards.reverse();
        boards
    }

    fn sort_key(&self) -> (usize, usize, usize) {
        (self.priority(), self.board.manhattan(), self.board.hamming())
    }
}

// Ordering compares expansion keys only, not boards. Two distinct boards with
// the same key are interchangeable to the queue.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}
