use crate::domain::{LifeError, Result};

/// Pixel size of one cell when deriving grid dimensions from a surface.
pub const DEFAULT_CELL_SIZE: u32 = 40;

/// Chosen bounds for the playback interval between generations.
pub const MIN_STEP_INTERVAL_MS: u64 = 10;
pub const MAX_STEP_INTERVAL_MS: u64 = 2000;

/// Startup settings for a `Session`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub rows: usize,
    pub columns: usize,
    pub step_interval_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            columns: 40,
            step_interval_ms: 100,
        }
    }
}

impl SessionConfig {
    /// Fit as many whole cells as possible onto a drawing surface.
    /// Each axis gets at least one cell, however small the surface.
    pub fn for_surface(width_px: u32, height_px: u32, cell_size_px: u32) -> Result<Self> {
        if cell_size_px == 0 {
            return Err(LifeError::InvalidDimensions {
                rows: 0,
                columns: 0,
            });
        }
        Ok(Self {
            rows: (height_px / cell_size_px).max(1) as usize,
            columns: (width_px / cell_size_px).max(1) as usize,
            ..Self::default()
        })
    }

    /// Builder-style override of the playback interval (clamped)
    pub fn with_step_interval_ms(mut self, ms: u64) -> Self {
        self.step_interval_ms = ms.clamp(MIN_STEP_INTERVAL_MS, MAX_STEP_INTERVAL_MS);
        self
    }
}
