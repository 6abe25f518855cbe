//! Error types for maze construction, lookup, and search.

use thiserror::Error;

/// Errors produced by grid construction, cell lookup, and graph search.
///
/// Refused moves and wall bumps are not errors; those are ordinary `bool`
/// results on [Session::attempt_move](crate::session::Session::attempt_move).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Width or height was zero at construction.
    #[error("invalid dimension: {width}x{height} (both sides must be at least 1)")]
    InvalidDimension {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// Coordinate lookup outside the grid.
    #[error("out of bounds: ({x}, {y}) on a {width}x{height} grid")]
    OutOfBounds {
        /// Requested column.
        x: u32,
        /// Requested row.
        y: u32,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },

    /// A search exhausted its worklist without reaching a goal that a
    /// spanning-tree maze guarantees reachable. The maze is corrupted.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
