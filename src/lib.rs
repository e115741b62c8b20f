// Domain layer - Core simulation engine
pub mod domain;

// Application layer - Driver state around the engine
pub mod application;

// Re-exports for convenience
pub use domain::{CellChange, Engine, LifeError};
pub use application::{PlayState, Repaint, Session, SessionConfig};
