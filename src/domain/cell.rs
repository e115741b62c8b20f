/// Cell represents the fundamental unit in Conway's Game of Life.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Cell {
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub(crate) const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub(crate) const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Flip between alive and dead
    pub(crate) const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases keep or become dead
    pub(crate) const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// A single cell's position and state, handed out to callers for repainting.
///
/// Produced by the engine both for full enumerations and for the per-step
/// change list; in the latter case `is_alive` is the state the cell
/// transitioned *into*.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct CellChange {
    pub row: usize,
    pub column: usize,
    pub is_alive: bool,
}

impl CellChange {
    pub const fn new(row: usize, column: usize, is_alive: bool) -> Self {
        Self { row, column, is_alive }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive.evolve(0), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.evolve(2), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert_eq!(Cell::Alive.evolve(n), Cell::Dead, "{n} neighbors");
        }
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Cell::Dead.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_dead_stays_dead_without_three() {
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(Cell::Dead.evolve(n), Cell::Dead, "{n} neighbors");
        }
    }

    #[test]
    fn test_toggle_and_from_alive() {
        assert_eq!(Cell::Dead.toggle(), Cell::Alive);
        assert_eq!(Cell::Alive.toggle(), Cell::Dead);
        assert_eq!(Cell::from_alive(true), Cell::Alive);
        assert!(!Cell::from_alive(false).is_alive());
    }
}
