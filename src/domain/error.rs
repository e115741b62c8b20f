//! Error types for the simulation engine.

use thiserror::Error;

/// Errors surfaced by engine construction and direct cell addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifeError {
    /// Requested grid has zero rows or zero columns.
    #[error("invalid grid dimensions: {rows}x{columns} (both must be at least 1)")]
    InvalidDimensions { rows: usize, columns: usize },

    /// Coordinate lies outside the grid.
    #[error("cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

pub type Result<T> = std::result::Result<T, LifeError>;
