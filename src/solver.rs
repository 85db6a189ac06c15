//! Dual-queue A* solver.
//!
//! Two searches run in lockstep, one from the input board and one from its
//! twin. Exactly one of the two boards is solvable, so whichever search pops
//! a goal first settles the question:
//! - main search reaches the goal: the board is solved, and optimally, since
//!   Manhattan distance is admissible and consistent
//! - twin search reaches the goal: the board is unsolvable
//!
//! Key details:
//! - Nodes share history through `Rc` parent links; nothing is copied back
//! - Successors that just undo the previous slide are skipped
//! - An optional depth cap and expansion budget end the run with
//!   [`Outcome::BudgetExceeded`], which is never confused with unsolvable

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::rc::Rc;

use log::{debug, trace};

use crate::board::Board;
use crate::error::{SolverError, MAX_DIMENSION, MIN_DIMENSION};
use crate::node::SearchNode;

/// Largest optimal solution length over all solvable boards, where known.
///
/// Capping the depth at this value never cuts off an optimal solution.
pub fn known_diameter(dimension: usize) -> Option<usize> {
    match dimension {
        2 => Some(6),
        3 => Some(31),
        4 => Some(80),
        _ => None,
    }
}

/// Limits on how much work a solver run may do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Nodes deeper than this many moves are never enqueued.
    pub max_depth: Option<usize>,
    /// The run stops once both searches together have expanded this many nodes.
    pub max_expansions: Option<usize>,
}

impl SolverConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Caps the depth at [`known_diameter`] when one exists for `dimension`,
    /// leaving the config unchanged otherwise.
    pub fn with_known_diameter(self, dimension: usize) -> Self {
        match known_diameter(dimension) {
            Some(diameter) => self.with_max_depth(diameter),
            None => self,
        }
    }
}

/// Terminal state of a solver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    Unsolvable,
    /// The depth cap or expansion budget ran out before either search
    /// reached a goal. Says nothing about solvability.
    BudgetExceeded,
}

/// Work done by one of the two searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize,
    pub enqueued: usize,
}

/// Work done by both searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    pub main: SearchStats,
    pub twin: SearchStats,
}

impl SolverStats {
    pub fn expanded(&self) -> usize {
        self.main.expanded + self.twin.expanded
    }
}

/// One best-first search over boards, advanced a node at a time.
struct Search {
    queue: BinaryHeap<Reverse<Rc<SearchNode>>>,
    stats: SearchStats,
    max_depth: Option<usize>,
}

impl Search {
    fn new(root: Board, max_depth: Option<usize>) -> Self {
        let mut search = Self {
            queue: BinaryHeap::new(),
            stats: SearchStats::default(),
            max_depth,
        };
        search.push(SearchNode::root(root));
        search
    }

    fn push(&mut self, node: SearchNode) {
        self.queue.push(Reverse(Rc::new(node)));
        self.stats.enqueued += 1;
    }

    /// Removes the node with the smallest expansion key.
    fn pop(&mut self) -> Option<Rc<SearchNode>> {
        self.queue.pop().map(|Reverse(node)| node)
    }

    /// Enqueues the successors of `node`.
    ///
    /// The successor that returns to the parent board is only enqueued when
    /// nothing else was.
    fn expand(&mut self, node: &Rc<SearchNode>) {
        self.stats.expanded += 1;

        if self.max_depth.is_some_and(|max| node.moves >= max) {
            return;
        }

        let parent_manhattan = node.board.manhattan();
        let mut enqueued = 0;
        let mut backtrack = None;

        for successor in node.board.successors(node.came_from()) {
            // a single slide always moves Manhattan distance by one
            if successor.board.manhattan() == parent_manhattan {
                continue;
            }
            if successor.backtrack {
                backtrack = Some(successor.board);
                continue;
            }
            self.push(SearchNode::child(node, successor.board));
            enqueued += 1;
        }

        if enqueued == 0 {
            if let Some(board) = backtrack {
                self.push(SearchNode::child(node, board));
            }
        }
    }
}

/// Runs both searches until one pops a goal or the budget runs out.
///
/// Returns the outcome and, when solved, the goal node of the main search.
fn run(
    main: &mut Search,
    twin: &mut Search,
    max_expansions: Option<usize>,
) -> (Outcome, Option<Rc<SearchNode>>) {
    loop {
        let main_node = main.pop();
        let twin_node = twin.pop();

        if main_node.is_none() && twin_node.is_none() {
            // only reachable with a depth cap
            return (Outcome::BudgetExceeded, None);
        }

        if let Some(node) = main_node.as_ref().filter(|node| node.board.is_goal()) {
            return (Outcome::Solved, Some(Rc::clone(node)));
        }
        if twin_node.as_ref().is_some_and(|node| node.board.is_goal()) {
            return (Outcome::Unsolvable, None);
        }

        let expanded = main.stats.expanded + twin.stats.expanded;
        if max_expansions.is_some_and(|limit| expanded >= limit) {
            return (Outcome::BudgetExceeded, None);
        }

        for (search, node) in [(&mut *main, main_node), (&mut *twin, twin_node)] {
            if let Some(node) = node {
                trace!(
                    "expanding node at depth {} (f = {}, manhattan = {})",
                    node.moves,
                    node.priority(),
                    node.board.manhattan()
                );
                search.expand(&node);
            }
        }
    }
}

/// A finished solver run over one board.
///
/// The whole search happens in [`Solver::new`] or [`Solver::with_config`];
/// the accessors only read the result.
#[derive(Debug)]
pub struct Solver {
    config: SolverConfig,
    outcome: Outcome,
    goal: Option<Rc<SearchNode>>,
    stats: SolverStats,
}

impl Solver {
    /// Solves `initial` without any budget.
    pub fn new(initial: Board) -> Result<Self, SolverError> {
        Self::with_config(initial, SolverConfig::default())
    }

    /// Solves `initial` within the limits of `config`.
    ///
    /// Fails with [`SolverError::InvalidSize`] before searching when the
    /// dimension is outside `2..128`.
    pub fn with_config(initial: Board, config: SolverConfig) -> Result<Self, SolverError> {
        let dimension = initial.dimension();
        if !(MIN_DIMENSION..MAX_DIMENSION).contains(&dimension) {
            return Err(SolverError::InvalidSize { dimension });
        }

        debug!(
            "solving {dimension}x{dimension} board (manhattan = {}, hamming = {}, config = {:?})",
            initial.manhattan(),
            initial.hamming(),
            config
        );

        let twin_board = initial.twin();
        let mut main = Search::new(initial, config.max_depth);
        let mut twin = Search::new(twin_board, config.max_depth);

        let (outcome, goal) = run(&mut main, &mut twin, config.max_expansions);
        let stats = SolverStats {
            main: main.stats,
            twin: twin.stats,
        };

        debug!(
            "search finished: {:?} after {} expansions ({} main, {} twin), {} nodes enqueued",
            outcome,
            stats.expanded(),
            stats.main.expanded,
            stats.twin.expanded,
            stats.main.enqueued + stats.twin.enqueued
        );

        Ok(Self {
            config,
            outcome,
            goal,
            stats,
        })
    }

    /// Whether the input board was solved.
    pub fn is_solvable(&self) -> bool {
        self.outcome == Outcome::Solved
    }

    /// Minimum number of moves, or `None` when no solution was found.
    pub fn moves(&self) -> Option<usize> {
        self.goal.as_ref().map(|node| node.moves)
    }

    /// Boards from the input to the goal inclusive, or `None` when no
    /// solution was found.
    pub fn solution(&self) -> Option<Vec<&Board>> {
        self.goal.as_deref().map(SearchNode::path)
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn stats(&self) -> SolverStats {
        self.stats
    }

    pub fn config(&self) -> SolverConfig {
        self.config
    }
}
