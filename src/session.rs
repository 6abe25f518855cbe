//! A live game session: one maze, one player, one search at a time.
//!
//! [Session] is the bundle a presentation layer drives: it owns the maze,
//! the player's manual-traversal state, and the most recent
//! [SearchResult]. Rebuilding replaces the whole bundle; nothing from the
//! old maze survives into the new one.

use crate::error::MazeError;
use crate::grid::Cell;
use crate::maze::{build_maze_with_rng, Maze};
use crate::search::{search, SearchResult, Strategy};
use rand::{rngs::StdRng, RngCore, SeedableRng};

/// The four manual movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Where the player is and has been.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    current: Cell,
    visited: Vec<Cell>,
    solved: bool,
}

impl Player {
    fn at(start: Cell) -> Self {
        Player {
            current: start,
            visited: vec![start],
            solved: false,
        }
    }

    /// The cell the player currently occupies.
    #[inline]
    pub fn current(&self) -> Cell {
        self.current
    }

    /// Every cell entered so far, in order, starting with the start cell.
    #[inline]
    pub fn visited(&self) -> &[Cell] {
        &self.visited
    }

    /// Whether the player has reached the goal. Once set, it stays set
    /// until the maze is rebuilt.
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.solved
    }
}

/// One maze, one player, and the most recent search, owned together.
///
/// The start cell is the top-left corner and the goal the bottom-right
/// one.
#[derive(Debug)]
pub struct Session {
    maze: Maze,
    player: Player,
    last_search: Option<SearchResult>,
}

impl Session {
    /// Start a session over a freshly built maze, seeded from entropy.
    pub fn new(width: u32, height: u32) -> Result<Self, MazeError> {
        Self::new_with_rng(width, height, &mut StdRng::from_entropy())
    }

    /// Start a session over a maze built from the provided seed.
    pub fn new_from_seed(width: u32, height: u32, seed: [u8; 32]) -> Result<Self, MazeError> {
        Self::new_with_rng(width, height, &mut StdRng::from_seed(seed))
    }

    /// Start a session over a maze built with the provided Rng.
    pub fn new_with_rng<R: RngCore>(
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        let maze = build_maze_with_rng(width, height, rng)?;
        let start = maze.grid().cell_at(0, 0)?;

        Ok(Session {
            maze,
            player: Player::at(start),
            last_search: None,
        })
    }

    #[inline]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    #[inline]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The most recent search, if one has been run since the last rebuild.
    #[inline]
    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }

    /// The top-left corner, where the player begins.
    #[inline]
    pub fn start(&self) -> Cell {
        Cell::new(0, 0)
    }

    /// The bottom-right corner, which ends the maze.
    #[inline]
    pub fn goal(&self) -> Cell {
        Cell::new(self.maze.width() - 1, self.maze.height() - 1)
    }

    /// Replace the maze with a freshly built one of the same dimensions.
    ///
    /// The player is reset to the start cell and any stored search result
    /// is discarded.
    pub fn rebuild(&mut self) -> Result<(), MazeError> {
        self.rebuild_with_rng(&mut StdRng::from_entropy())
    }

    /// Rebuild from the provided seed.
    pub fn rebuild_from_seed(&mut self, seed: [u8; 32]) -> Result<(), MazeError> {
        self.rebuild_with_rng(&mut StdRng::from_seed(seed))
    }

    /// Rebuild with the provided Rng.
    pub fn rebuild_with_rng<R: RngCore>(&mut self, rng: &mut R) -> Result<(), MazeError> {
        *self = Session::new_with_rng(self.maze.width(), self.maze.height(), rng)?;
        Ok(())
    }

    /// Run a search from the start cell to the goal cell, storing and
    /// returning its result. A previously stored result is replaced.
    pub fn run_search(&mut self, strategy: Strategy) -> Result<&SearchResult, MazeError> {
        let result = search(&self.maze, self.start(), self.goal(), strategy)?;
        Ok(self.last_search.insert(result))
    }

    /// Attempt to move the player one cell in the given direction.
    ///
    /// The move succeeds only if the target cell exists and a wired maze
    /// edge joins it to the current cell; a grid-adjacent cell behind a
    /// wall is rejected. On success the player advances, the visited
    /// sequence grows, and reaching the goal marks the session solved.
    /// On failure nothing changes and `false` is returned.
    pub fn attempt_move(&mut self, direction: Direction) -> bool {
        let target = match self.neighbor_toward(direction) {
            Some(cell) => cell,
            None => return false,
        };
        if !self.maze.connects(self.player.current, target) {
            return false;
        }

        self.player.current = target;
        self.player.visited.push(target);
        if target == self.goal() {
            self.player.solved = true;
        }
        true
    }

    /// Resolve a direction to the neighboring grid cell, if it exists.
    fn neighbor_toward(&self, direction: Direction) -> Option<Cell> {
        let Cell { x, y } = self.player.current;
        match direction {
            Direction::Up => (y > 0).then(|| Cell::new(x, y - 1)),
            Direction::Down => (y + 1 < self.maze.height()).then(|| Cell::new(x, y + 1)),
            Direction::Left => (x > 0).then(|| Cell::new(x - 1, y)),
            Direction::Right => (x + 1 < self.maze.width()).then(|| Cell::new(x + 1, y)),
        }
    }

    /// The status line the original game shows under the board.
    pub fn status_message(&self) -> &'static str {
        if self.player.solved {
            "the maze has been solved"
        } else {
            "the maze has not been solved"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::maze::Edge;

    // session over the hand-wired 2x2 corner maze:
    // (0,0)-(1,0) and (1,0)-(1,1) are passages, (0,1) is walled off
    fn corner_session() -> Session {
        let grid = Grid::new(2, 2).unwrap();
        let edges = vec![
            Edge::new(Cell::new(0, 0), Cell::new(1, 0), 10),
            Edge::new(Cell::new(1, 0), Cell::new(1, 1), 20),
        ];
        let maze = Maze::assemble(grid, edges);
        let start = maze.grid().cell_at(0, 0).unwrap();

        Session {
            maze,
            player: Player::at(start),
            last_search: None,
        }
    }

    #[test]
    fn new_session_starts_at_the_top_left() {
        let session = Session::new_from_seed(6, 4, [17; 32]).unwrap();

        assert_eq!(session.player().current(), Cell::new(0, 0));
        assert_eq!(session.player().visited(), &[Cell::new(0, 0)]);
        assert!(!session.player().is_solved());
        assert!(session.last_search().is_none());
        assert_eq!(session.goal(), Cell::new(5, 3));
    }

    #[test]
    fn moving_through_a_wall_changes_nothing() {
        let mut session = corner_session();

        // (0,1) is grid-adjacent but not wired
        assert!(!session.attempt_move(Direction::Down));
        assert_eq!(session.player().current(), Cell::new(0, 0));
        assert_eq!(session.player().visited(), &[Cell::new(0, 0)]);
    }

    #[test]
    fn moving_off_the_grid_changes_nothing() {
        let mut session = corner_session();

        assert!(!session.attempt_move(Direction::Up));
        assert!(!session.attempt_move(Direction::Left));
        assert_eq!(session.player().visited(), &[Cell::new(0, 0)]);
    }

    #[test]
    fn moving_along_passages_reaches_the_goal() {
        let mut session = corner_session();

        assert!(session.attempt_move(Direction::Right));
        assert_eq!(session.player().current(), Cell::new(1, 0));
        assert!(!session.player().is_solved());

        assert!(session.attempt_move(Direction::Down));
        assert_eq!(session.player().current(), Cell::new(1, 1));
        assert!(session.player().is_solved());
        assert_eq!(
            session.player().visited(),
            &[Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)]
        );
    }

    #[test]
    fn solved_stays_set_after_further_moves() {
        let mut session = corner_session();
        session.attempt_move(Direction::Right);
        session.attempt_move(Direction::Down);
        assert!(session.player().is_solved());

        // walking back out does not unsolve the maze
        assert!(session.attempt_move(Direction::Up));
        assert!(session.player().is_solved());
        assert_eq!(session.status_message(), "the maze has been solved");
    }

    #[test]
    fn a_single_row_session_is_solvable_by_walking_right() {
        // a 3x1 grid has only one spanning tree, so the walk is forced
        let mut session = Session::new_from_seed(3, 1, [5; 32]).unwrap();

        assert!(session.attempt_move(Direction::Right));
        assert!(session.attempt_move(Direction::Right));
        assert!(session.player().is_solved());
    }

    #[test]
    fn run_search_stores_and_replaces_the_result() {
        let mut session = Session::new_from_seed(10, 8, [23; 32]).unwrap();

        let path_len = session.run_search(Strategy::Bfs).unwrap().path().len();
        assert!(path_len >= 2);
        assert_eq!(
            session.last_search().unwrap().strategy(),
            Strategy::Bfs
        );

        session.run_search(Strategy::Dfs).unwrap();
        assert_eq!(
            session.last_search().unwrap().strategy(),
            Strategy::Dfs
        );
        // the tree path is unique, so its length is unchanged
        assert_eq!(session.last_search().unwrap().path().len(), path_len);
    }

    #[test]
    fn rebuild_resets_player_and_search() {
        let mut session = Session::new_from_seed(3, 1, [5; 32]).unwrap();
        session.attempt_move(Direction::Right);
        session.attempt_move(Direction::Right);
        session.run_search(Strategy::Bfs).unwrap();
        assert!(session.player().is_solved());

        session.rebuild_from_seed([6; 32]).unwrap();

        assert_eq!(session.player().current(), Cell::new(0, 0));
        assert_eq!(session.player().visited(), &[Cell::new(0, 0)]);
        assert!(!session.player().is_solved());
        assert!(session.last_search().is_none());
        assert_eq!(session.status_message(), "the maze has not been solved");
    }

    #[test]
    fn rebuild_keeps_dimensions() {
        let mut session = Session::new_from_seed(7, 5, [9; 32]).unwrap();
        session.rebuild_from_seed([10; 32]).unwrap();

        assert_eq!(session.maze().width(), 7);
        assert_eq!(session.maze().height(), 5);
        assert_eq!(session.goal(), Cell::new(6, 4));
    }
}
