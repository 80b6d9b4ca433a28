use std::collections::HashSet;

use tilepath_core::Cell;

use crate::distance::manhattan;
use crate::queue::PriorityQueue;
use crate::traits::Obstacles;

/// Parent index of the origin node.
const ROOT: usize = usize::MAX;

/// Bounds placed on a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    /// Give up with "no path" once this many cells have been expanded.
    /// `None` searches until the frontier is exhausted.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    /// No bound on the number of expansions.
    pub const UNBOUNDED: Self = Self {
        max_expansions: None,
    };

    /// Stop after `n` expansions.
    pub const fn max_expansions(n: usize) -> Self {
        Self {
            max_expansions: Some(n),
        }
    }
}

/// One entry of the search tree. `parent` indexes the arena, [`ROOT`] for the
/// origin; `cost` is the number of steps from the origin.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    cell: Cell,
    parent: usize,
    cost: u64,
}

/// Reusable A* search context over an unbounded 4-connected grid.
///
/// The context owns the node arena, the frontier and the visited set so that
/// repeated queries reuse their allocations. Every query starts from a clean
/// state; nothing carries over between calls.
#[derive(Debug, Default)]
pub struct GridSearch {
    nodes: Vec<SearchNode>,
    frontier: PriorityQueue<usize, u64>,
    visited: HashSet<Cell>,
    expanded: usize,
}

impl GridSearch {
    /// Create an empty search context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cells expanded by the most recent query.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Compute a shortest 4-connected path from `origin` to `target`.
    ///
    /// Returns the full path (including both endpoints) or `None` if the
    /// target is blocked or cannot be reached. Every step costs 1 and the
    /// heuristic is the Manhattan distance, so the first time the target
    /// leaves the frontier it does so along a shortest path.
    ///
    /// The origin is not tested up front; like every other node it is
    /// discarded when popped if it is blocked.
    pub fn find_path<O: Obstacles + ?Sized>(
        &mut self,
        obstacles: &O,
        origin: Cell,
        target: Cell,
    ) -> Option<Vec<Cell>> {
        self.find_path_with_limits(obstacles, origin, target, SearchLimits::UNBOUNDED)
    }

    /// Like [`find_path`](Self::find_path), but returns `None` once more than
    /// `limits.max_expansions` cells would be expanded.
    pub fn find_path_with_limits<O: Obstacles + ?Sized>(
        &mut self,
        obstacles: &O,
        origin: Cell,
        target: Cell,
        limits: SearchLimits,
    ) -> Option<Vec<Cell>> {
        self.reset();

        if obstacles.is_blocked(target) {
            log::trace!("find_path {origin} -> {target}: target is blocked");
            return None;
        }

        self.push(origin, ROOT, 0, target);

        let found = loop {
            let Some((ni, _)) = self.frontier.try_pop() else {
                break None;
            };
            let SearchNode { cell, cost, .. } = self.nodes[ni];

            // Obstacles are discovered lazily; the frontier is never filtered.
            if obstacles.is_blocked(cell) {
                continue;
            }
            // Stale duplicate of an already finalised cell.
            if !self.visited.insert(cell) {
                continue;
            }

            if limits.max_expansions.is_some_and(|max| self.expanded >= max) {
                log::trace!(
                    "find_path {origin} -> {target}: gave up after {} expansions",
                    self.expanded
                );
                break None;
            }
            self.expanded += 1;

            if cell == target {
                break Some(ni);
            }

            for next in cell.neighbors_4() {
                self.push(next, ni, cost.saturating_add(1), target);
            }
        };

        let path = found.map(|ni| self.reconstruct(ni));
        match &path {
            Some(p) => log::debug!(
                "find_path {origin} -> {target}: {} steps, {} expanded",
                p.len() - 1,
                self.expanded
            ),
            None => log::debug!(
                "find_path {origin} -> {target}: no path, {} expanded",
                self.expanded
            ),
        }
        path
    }

    fn reset(&mut self) {
        self.nodes.clear();
        self.frontier.clear();
        self.visited.clear();
        self.expanded = 0;
    }

    fn push(&mut self, cell: Cell, parent: usize, cost: u64, target: Cell) {
        let idx = self.nodes.len();
        self.nodes.push(SearchNode { cell, parent, cost });
        self.frontier.push(idx, cost.saturating_add(manhattan(cell, target)));
    }

    /// Walk parent links back to the root and reverse.
    fn reconstruct(&self, mut ni: usize) -> Vec<Cell> {
        let mut path = Vec::with_capacity(self.nodes[ni].cost as usize + 1);
        while ni != ROOT {
            let node = &self.nodes[ni];
            path.push(node.cell);
            ni = node.parent;
        }
        path.reverse();
        path
    }
}

/// Compute a shortest 4-connected path with a fresh [`GridSearch`].
///
/// See [`GridSearch::find_path`].
pub fn find_path<O: Obstacles + ?Sized>(
    obstacles: &O,
    origin: Cell,
    target: Cell,
) -> Option<Vec<Cell>> {
    GridSearch::new().find_path(obstacles, origin, target)
}
