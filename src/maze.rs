//! Maze construction via Kruskal's algorithm.
//!
//! A maze over a `w x h` [Grid] is a spanning tree of the grid graph:
//! exactly `w * h - 1` edges, connected, acyclic, so exactly one simple
//! path exists between any two cells. The tree is found by enumerating
//! every axis-adjacent cell pair with a random weight, sorting ascending,
//! and greedily accepting edges whose endpoints are not yet connected.
//!
//! # Examples
//!
//! ```
//! use maze_weave::build_maze_from_seed;
//!
//! let maze = build_maze_from_seed(10, 10, [21; 32]).unwrap();
//!
//! // a spanning tree over 100 cells always has 99 edges
//! assert_eq!(maze.edges().len(), 99);
//!
//! // every cell touches at least one passage
//! for cell in maze.grid().cells() {
//!     assert!(maze.neighbors(cell).count() >= 1);
//! }
//! ```

use crate::dsu::DisjointSets;
use crate::error::MazeError;
use crate::grid::{Cell, Grid};
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

/// Edge weights are drawn uniformly from `0..WEIGHT_SPAN`.
const WEIGHT_SPAN: u32 = 100;

/// An unordered connection between two grid-adjacent cells.
///
/// Endpoints are stored in ascending order, so each adjacent pair has
/// exactly one representation and no self-loop can be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    a: Cell,
    b: Cell,
    weight: u32,
}

impl Edge {
    pub(crate) fn new(a: Cell, b: Cell, weight: u32) -> Self {
        debug_assert_ne!(a, b);
        if b < a {
            Edge { a: b, b: a, weight }
        } else {
            Edge { a, b, weight }
        }
    }

    /// Both endpoints, in ascending order.
    #[inline]
    pub fn endpoints(&self) -> (Cell, Cell) {
        (self.a, self.b)
    }

    #[inline]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Given one endpoint, return the other.
    #[inline]
    pub fn other(&self, cell: Cell) -> Cell {
        if cell == self.a {
            self.b
        } else {
            self.a
        }
    }

    #[inline]
    pub fn touches(&self, cell: Cell) -> bool {
        cell == self.a || cell == self.b
    }
}

/// Enumerate every candidate edge of the grid, weighted by `rng`.
///
/// One edge per right-neighbor pair and one per down-neighbor pair, so
/// each adjacency appears exactly once: `w * (h - 1) + h * (w - 1)` edges
/// in total. The order of the returned edges carries no meaning; callers
/// sort by weight before use.
pub fn candidate_edges<R: RngCore>(grid: &Grid, rng: &mut R) -> Vec<Edge> {
    let (w, h) = (grid.width(), grid.height());
    let count = (w * (h - 1) + h * (w - 1)) as usize;
    let mut edges = Vec::with_capacity(count);

    for cell in grid.cells() {
        if cell.x + 1 < w {
            let right = Cell::new(cell.x + 1, cell.y);
            edges.push(Edge::new(cell, right, rng.gen_range(0..WEIGHT_SPAN)));
        }
        if cell.y + 1 < h {
            let down = Cell::new(cell.x, cell.y + 1);
            edges.push(Edge::new(cell, down, rng.gen_range(0..WEIGHT_SPAN)));
        }
    }

    edges
}

/// Build a maze of the given width and height.
///
/// Seeded from entropy; see [build_maze_from_seed] and
/// [build_maze_with_rng] for deterministic construction.
pub fn build_maze(width: u32, height: u32) -> Result<Maze, MazeError> {
    build_maze_with_rng(width, height, &mut StdRng::from_entropy())
}

/// Build a maze of the given width and height with the provided seed.
///
/// Uses [StdRng] with the provided seed; the same seed always produces
/// the same maze.
pub fn build_maze_from_seed(width: u32, height: u32, seed: [u8; 32]) -> Result<Maze, MazeError> {
    build_maze_with_rng(width, height, &mut StdRng::from_seed(seed))
}

/// Build a maze of the given width and height with the provided Rng.
///
/// Runs Kruskal's algorithm: candidate edges are sorted ascending by
/// weight (ties in arbitrary order), and each is accepted iff its
/// endpoints are not yet connected. Accepting stops at `w * h - 1`
/// edges, which is always reached because the grid graph is connected.
///
/// Fails with [MazeError::InvalidDimension] if either side is zero.
pub fn build_maze_with_rng<R: RngCore>(
    width: u32,
    height: u32,
    rng: &mut R,
) -> Result<Maze, MazeError> {
    let grid = Grid::new(width, height)?;

    let mut candidates = candidate_edges(&grid, rng);
    candidates.sort_unstable_by_key(Edge::weight);

    let mut sets = DisjointSets::new(grid.len());
    let mut tree = Vec::with_capacity(grid.len() - 1);

    for edge in candidates {
        if tree.len() == grid.len() - 1 {
            break;
        }

        let (a, b) = edge.endpoints();
        if sets.union(grid.index_of(a), grid.index_of(b)) {
            tree.push(edge);
        }
    }

    Ok(Maze::assemble(grid, tree))
}

/// A grid together with its selected tree of connecting edges.
///
/// Owns the edge set and the per-cell adjacency wired from it; each edge
/// appears in exactly its two endpoints' adjacency lists.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<Edge>>,
}

impl Maze {
    pub(crate) fn assemble(grid: Grid, edges: Vec<Edge>) -> Self {
        let mut maze = Maze {
            grid,
            edges,
            adjacency: vec![Vec::new(); grid.len()],
        };
        maze.wire();
        maze
    }

    // Adjacency is cleared before filling, so re-wiring can never
    // duplicate entries.
    fn wire(&mut self) {
        for list in &mut self.adjacency {
            list.clear();
        }
        for edge in &self.edges {
            let (a, b) = edge.endpoints();
            let (ia, ib) = (self.grid.index_of(a), self.grid.index_of(b));
            self.adjacency[ia].push(*edge);
            self.adjacency[ib].push(*edge);
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// The selected tree edges, in acceptance order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges incident to the given cell. Empty for cells outside the grid.
    pub fn edges_at(&self, cell: Cell) -> &[Edge] {
        if !self.grid.contains(cell) {
            return &[];
        }
        &self.adjacency[self.grid.index_of(cell)]
    }

    /// Cells reachable from `cell` over one wired edge.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.edges_at(cell).iter().map(move |edge| edge.other(cell))
    }

    /// Whether a wired edge joins the two cells.
    ///
    /// Grid-adjacent cells with no wired edge between them are separated
    /// by a wall, and this returns `false` for them.
    pub fn connects(&self, a: Cell, b: Cell) -> bool {
        self.edges_at(a).iter().any(|edge| edge.other(a) == b)
    }

    /// Render the maze as ascii art, `#` for walls and spaces for
    /// passages, on a `(2w + 1) x (2h + 1)` character grid.
    pub fn to_string_art(&self) -> String {
        let (gw, gh) = (2 * self.width() + 1, 2 * self.height() + 1);
        let mut art = String::with_capacity((gw as usize + 1) * gh as usize);

        for gy in 0..gh {
            for gx in 0..gw {
                let open = match (gx % 2 == 1, gy % 2 == 1) {
                    // cell position
                    (true, true) => true,
                    // wall slot between horizontal neighbors
                    (false, true) if gx > 0 && gx < gw - 1 => {
                        let (x, y) = (gx / 2, gy / 2);
                        self.connects(Cell::new(x - 1, y), Cell::new(x, y))
                    }
                    // wall slot between vertical neighbors
                    (true, false) if gy > 0 && gy < gh - 1 => {
                        let (x, y) = (gx / 2, gy / 2);
                        self.connects(Cell::new(x, y - 1), Cell::new(x, y))
                    }
                    _ => false,
                };
                art.push(if open { ' ' } else { '#' });
            }
            art.push('\n');
        }

        art
    }
}
