//! Perfect-maze generation and traversal over rectangular grids.
//!
//! A maze is a spanning tree over the grid graph, built with Kruskal's
//! algorithm over randomly weighted candidate edges, so exactly one
//! simple path connects any two cells. The tree can then be explored by
//! [BFS or DFS](Strategy) to find the path between two cells, or walked
//! manually one cell at a time through a [Session].
//!
//! # Examples
//!
//! ## Building and solving
//!
//! ```sh
//! # # # # # # #
//! # . . . # . #
//! # # # . # . #
//! # . . . . . #
//! # # # # # # #
//! ```
//!
//! ```
//! use maze_weave::{build_maze_from_seed, search, Strategy};
//!
//! let maze = build_maze_from_seed(8, 6, [7; 32]).unwrap();
//!
//! // a spanning tree over 48 cells always has 47 passages
//! assert_eq!(maze.edges().len(), 47);
//!
//! let start = maze.grid().cell_at(0, 0).unwrap();
//! let goal = maze.grid().cell_at(7, 5).unwrap();
//!
//! let found = search(&maze, start, goal, Strategy::Bfs).unwrap();
//!
//! // the path runs from the goal back to the start, both included
//! assert_eq!(found.path().first().copied(), Some(goal));
//! assert_eq!(found.path().last().copied(), Some(start));
//! ```
//!
//! ## Manual traversal
//!
//! ```
//! use maze_weave::{Direction, Session};
//!
//! let mut session = Session::new_from_seed(3, 1, [5; 32]).unwrap();
//!
//! // a 1-row maze is a straight corridor; walking right solves it
//! assert!(session.attempt_move(Direction::Right));
//! assert!(session.attempt_move(Direction::Right));
//! assert!(session.player().is_solved());
//!
//! // walls and the grid border are ordinary refusals, not errors
//! assert!(!session.attempt_move(Direction::Up));
//! ```

pub mod dsu;
pub mod error;
pub mod grid;
pub mod maze;
pub mod search;
pub mod session;

pub use dsu::DisjointSets;
pub use error::MazeError;
pub use grid::{Cell, Grid};
pub use maze::{build_maze, build_maze_from_seed, build_maze_with_rng, candidate_edges, Edge, Maze};
pub use search::{search, SearchResult, Strategy};
pub use session::{Direction, Player, Session};
