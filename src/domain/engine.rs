//! The simulation engine: authoritative cell state for one toroidal grid.
//!
//! Two grid buffers are kept for the engine's whole lifetime. `step` reads
//! only from the current buffer, writes every cell of the scratch buffer,
//! then swaps the two. Grid storage is never reallocated after construction.

use log::{debug, trace};
use rand::Rng;

use super::{Cell, CellChange, Grid, LifeError, error::Result};

/// Conway's Game of Life on a fixed-size torus with change tracking.
#[derive(Clone, Debug)]
pub struct Engine {
    current: Grid,
    scratch: Grid,
    generation: u64,
    changes: Vec<CellChange>,
}

impl Engine {
    /// Create an engine with every cell dead at generation 0.
    ///
    /// Zero rows or zero columns is rejected with `InvalidDimensions`, as is
    /// any size whose cell count cannot be addressed.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        let addressable = rows
            .checked_mul(columns)
            .is_some_and(|cells| cells > 0 && cells <= isize::MAX as usize);
        if !addressable {
            return Err(LifeError::InvalidDimensions { rows, columns });
        }
        debug!("creating {rows}x{columns} engine");
        Ok(Self {
            current: Grid::new(rows, columns),
            scratch: Grid::new(rows, columns),
            generation: 0,
            changes: Vec::new(),
        })
    }

    pub const fn rows(&self) -> usize {
        self.current.dimensions().0
    }

    pub const fn columns(&self) -> usize {
        self.current.dimensions().1
    }

    /// Number of steps since construction or the last clear/randomize
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells in the current generation
    pub fn population(&self) -> usize {
        self.current.population()
    }

    fn out_of_bounds(&self, row: usize, column: usize) -> LifeError {
        LifeError::OutOfBounds {
            row,
            column,
            rows: self.rows(),
            columns: self.columns(),
        }
    }

    /// Current state of a cell. Coordinates are never wrapped.
    pub fn is_alive(&self, row: usize, column: usize) -> Result<bool> {
        self.current
            .get(row, column)
            .map(Cell::is_alive)
            .ok_or_else(|| self.out_of_bounds(row, column))
    }

    /// Flip one cell in place. Out-of-range coordinates are a no-op.
    ///
    /// Neither the generation counter nor the pending change list is touched.
    pub fn toggle_cell(&mut self, row: usize, column: usize) {
        self.current.toggle(row, column);
    }

    /// Set one cell to an explicit state, for seeding known configurations.
    pub fn set_cell(&mut self, row: usize, column: usize, alive: bool) -> Result<()> {
        if !self.current.contains(row, column) {
            return Err(self.out_of_bounds(row, column));
        }
        self.current.set(row, column, Cell::from_alive(alive));
        Ok(())
    }

    /// Reseed every cell from a fresh random source; 1 in 5 cells comes alive.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Reseed every cell from `rng`; 1 in 5 cells comes alive.
    ///
    /// Generation resets to 0 and no change records are produced, so callers
    /// must repaint from `all_cells`.
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) {
        let (rows, columns) = self.current.dimensions();
        for row in 0..rows {
            for column in 0..columns {
                let alive = rng.random_range(0..5) == 0;
                self.current.set(row, column, Cell::from_alive(alive));
            }
        }
        self.generation = 0;
        self.changes.clear();
        debug!(
            "randomized {rows}x{columns} grid, {} live cells",
            self.current.population()
        );
    }

    /// Kill every cell in both buffers and reset the generation counter.
    pub fn clear(&mut self) {
        self.current.fill(Cell::Dead);
        self.scratch.fill(Cell::Dead);
        self.generation = 0;
        self.changes.clear();
        debug!("cleared {}x{} grid", self.rows(), self.columns());
    }

    /// Advance one generation.
    ///
    /// Returns `false` when no cell changed, i.e. the configuration is stable.
    /// The generation counter increments either way.
    pub fn step(&mut self) -> bool {
        self.changes.clear();
        let (rows, columns) = self.current.dimensions();

        for row in 0..rows {
            for column in 0..columns {
                let cell = self.current.at(row, column);
                let next = cell.evolve(self.current.count_live_neighbors(row, column));
                self.scratch.set(row, column, next);
                if next != cell {
                    self.changes
                        .push(CellChange::new(row, column, next.is_alive()));
                }
            }
        }

        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
        trace!(
            "generation {}: {} cells changed",
            self.generation,
            self.changes.len()
        );

        !self.changes.is_empty()
    }

    /// Every cell with its current state, row-major. Each call re-enumerates.
    pub fn all_cells(&self) -> impl Iterator<Item = CellChange> + '_ {
        self.current.iter_cells()
    }

    /// Drain the changes found by the most recent `step`, in scan order.
    ///
    /// A second call before the next step returns an empty list.
    pub fn take_changed_cells(&mut self) -> Vec<CellChange> {
        std::mem::take(&mut self.changes)
    }
}
