use super::{Cell, CellChange};

/// Grid is a fixed-size, row-major buffer of cells on a torus.
/// Dimensions are validated by the owning `Engine`; a `Grid` is never empty.
#[derive(Clone, Debug)]
pub(crate) struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub(crate) fn new(rows: usize, columns: usize) -> Self {
        debug_assert!(rows > 0 && columns > 0);
        Self {
            rows,
            columns,
            cells: vec![Cell::Dead; rows * columns],
        }
    }

    /// Get grid dimensions as (rows, columns)
    pub(crate) const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub(crate) const fn contains(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// Get cell at position (with bounds checking, no wrapping)
    pub(crate) fn get(&self, row: usize, column: usize) -> Option<Cell> {
        self.contains(row, column)
            .then(|| self.cells[self.index(row, column)])
    }

    /// Cell at a position the caller has already bounds-checked
    #[inline]
    pub(crate) fn at(&self, row: usize, column: usize) -> Cell {
        self.cells[self.index(row, column)]
    }

    /// Set cell at position; out-of-range coordinates are ignored
    pub(crate) fn set(&mut self, row: usize, column: usize, cell: Cell) {
        if self.contains(row, column) {
            let idx = self.index(row, column);
            self.cells[idx] = cell;
        }
    }

    /// Flip a cell; returns the new state, or None when out of range
    pub(crate) fn toggle(&mut self, row: usize, column: usize) -> Option<Cell> {
        if !self.contains(row, column) {
            return None;
        }
        let idx = self.index(row, column);
        self.cells[idx] = self.cells[idx].toggle();
        Some(self.cells[idx])
    }

    /// Overwrite every cell with the same state
    pub(crate) fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus).
    ///
    /// Offsets of -1 are expressed as `len - 1` so the arithmetic stays in
    /// `usize` and never underflows.
    pub(crate) fn count_live_neighbors(&self, row: usize, column: usize) -> u8 {
        let (rows, columns) = (self.rows, self.columns);
        let row_offsets = [rows - 1, 0, 1];
        let column_offsets = [columns - 1, 0, 1];

        row_offsets
            .iter()
            .enumerate()
            .flat_map(|(ri, &dr)| {
                column_offsets
                    .iter()
                    .enumerate()
                    .map(move |(ci, &dc)| (ri, ci, dr, dc))
            })
            .filter(|&(ri, ci, _, _)| ri != 1 || ci != 1)
            .map(|(_, _, dr, dc)| self.at((row + dr) % rows, (column + dc) % columns))
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Number of live cells
    pub(crate) fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row-major
    pub(crate) fn iter_cells(&self) -> impl Iterator<Item = CellChange> + '_ {
        self.cells.iter().enumerate().map(|(idx, cell)| {
            CellChange::new(idx / self.columns, idx % self.columns, cell.is_alive())
        })
    }
}
