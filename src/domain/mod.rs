mod cell;
mod engine;
mod error;
mod grid;

pub use cell::CellChange;
pub(crate) use cell::Cell;
pub use engine::Engine;
pub use error::{LifeError, Result};
pub(crate) use grid::Grid;
