//! Breadth-first and depth-first search over a built maze.
//!
//! Both strategies share one worklist loop; BFS appends newly discovered
//! cells at the tail of the deque, DFS at the head, and both pop from the
//! head. Because the maze is a spanning tree, either strategy terminates
//! at the goal and reconstructs the unique simple path to it.

use crate::error::MazeError;
use crate::grid::Cell;
use crate::maze::Maze;
use std::collections::{HashMap, HashSet, VecDeque};

/// How the frontier is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Queue worklist; visits cells in distance order from the start.
    Bfs,
    /// Stack worklist; dives down one corridor before backtracking.
    Dfs,
}

/// The outcome of one search.
///
/// Holds the order cells were processed in (for incremental reveal by a
/// caller) and the reconstructed path, listed from the goal back to the
/// start, both endpoints included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    strategy: Strategy,
    visited: Vec<Cell>,
    path: Vec<Cell>,
}

impl SearchResult {
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Cells in the order the search processed them, goal last.
    #[inline]
    pub fn visited(&self) -> &[Cell] {
        &self.visited
    }

    /// The found path, goal first, start last.
    #[inline]
    pub fn path(&self) -> &[Cell] {
        &self.path
    }
}

/// Search the maze from `start` to `goal` with the given strategy.
///
/// Fails with [MazeError::OutOfBounds] if either endpoint lies outside
/// the grid, and with [MazeError::InvariantViolation] if the worklist
/// empties before the goal is reached; the latter cannot happen on a
/// spanning-tree maze and signals a corrupted one.
pub fn search(
    maze: &Maze,
    start: Cell,
    goal: Cell,
    strategy: Strategy,
) -> Result<SearchResult, MazeError> {
    maze.grid().cell_at(start.x, start.y)?;
    maze.grid().cell_at(goal.x, goal.y)?;

    let mut worklist = VecDeque::new();
    let mut seen = HashSet::new();
    let mut came_from: HashMap<Cell, Cell> = HashMap::new();
    let mut visited = Vec::new();

    worklist.push_back(start);

    while let Some(next) = worklist.pop_front() {
        if !seen.insert(next) {
            continue;
        }
        visited.push(next);

        if next == goal {
            let path = reconstruct(&came_from, start, goal)?;
            return Ok(SearchResult {
                strategy,
                visited,
                path,
            });
        }

        for neighbor in maze.neighbors(next) {
            if seen.contains(&neighbor) {
                continue;
            }
            match strategy {
                Strategy::Bfs => worklist.push_back(neighbor),
                Strategy::Dfs => worklist.push_front(neighbor),
            }
            // first discovery wins; a later rediscovery must not repoint it
            came_from.entry(neighbor).or_insert(next);
        }
    }

    Err(MazeError::InvariantViolation(format!(
        "search exhausted its worklist without reaching {goal} from {start}"
    )))
}

/// Walk came-from pointers from the goal back to the start.
fn reconstruct(
    came_from: &HashMap<Cell, Cell>,
    start: Cell,
    goal: Cell,
) -> Result<Vec<Cell>, MazeError> {
    let mut path = Vec::new();
    let mut curr = goal;

    while curr != start {
        path.push(curr);
        curr = match came_from.get(&curr) {
            Some(prev) => *prev,
            None => {
                return Err(MazeError::InvariantViolation(format!(
                    "came-from chain broken at {curr} while walking back to {start}"
                )))
            }
        };
    }
    path.push(start);

    Ok(path)
}
