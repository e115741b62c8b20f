mod config;
mod session;

pub use config::{SessionConfig, DEFAULT_CELL_SIZE, MAX_STEP_INTERVAL_MS, MIN_STEP_INTERVAL_MS};
pub use session::{PlayState, Repaint, Session};
