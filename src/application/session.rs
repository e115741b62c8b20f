use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;

use super::config::{MAX_STEP_INTERVAL_MS, MIN_STEP_INTERVAL_MS, SessionConfig};
use crate::domain::{CellChange, Engine, Result};

/// Playback status of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Paused,
    Running,
    /// The last step changed nothing; playback stopped on its own.
    Stable,
}

/// What a front-end has to redraw after a session operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Repaint {
    /// Every cell, row-major (after clear, randomize, resize).
    Full(Vec<CellChange>),
    /// Only the cells that changed in the last generation.
    Partial(Vec<CellChange>),
    /// A single edited cell.
    Single(CellChange),
}

/// Session orchestrates playback around an `Engine`.
/// It owns the running state and step cadence; drawing is left to the caller.
pub struct Session {
    engine: Engine,
    state: PlayState,
    step_interval: Duration,
    update_timer: Duration,
    last_step_time: Duration,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self> {
        let engine = Engine::new(config.rows, config.columns)?;
        let step_interval_ms = config
            .step_interval_ms
            .clamp(MIN_STEP_INTERVAL_MS, MAX_STEP_INTERVAL_MS);
        Ok(Self {
            engine,
            state: PlayState::Paused,
            step_interval: Duration::from_millis(step_interval_ms),
            update_timer: Duration::ZERO,
            last_step_time: Duration::ZERO,
        })
    }

    /// Read-only view of the engine for queries such as `is_alive`
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn generation(&self) -> u64 {
        self.engine.generation()
    }

    pub fn play_state(&self) -> PlayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlayState::Running
    }

    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    /// Wall time spent inside the most recent step
    pub fn last_step_time(&self) -> Duration {
        self.last_step_time
    }

    /// Toggle play/pause; a stable board can be restarted
    pub fn toggle_running(&mut self) {
        self.state = match self.state {
            PlayState::Running => PlayState::Paused,
            PlayState::Paused | PlayState::Stable => PlayState::Running,
        };
        self.update_timer = Duration::ZERO;
    }

    pub fn pause(&mut self) {
        self.state = PlayState::Paused;
    }

    /// Change the playback interval, clamped to the supported range
    pub fn set_speed(&mut self, step_interval_ms: u64) {
        let ms = step_interval_ms.clamp(MIN_STEP_INTERVAL_MS, MAX_STEP_INTERVAL_MS);
        self.step_interval = Duration::from_millis(ms);
    }

    /// Advance playback by `delta` of wall time.
    ///
    /// Steps at most once per call, once a full interval has accumulated.
    /// Time past the interval carries over, capped at one interval.
    /// Returns the cells to redraw, or `None` when nothing is due or the
    /// board just became stable.
    pub fn tick(&mut self, delta: Duration) -> Option<Repaint> {
        if !self.is_running() {
            return None;
        }

        self.update_timer += delta;
        if self.update_timer < self.step_interval {
            return None;
        }
        self.update_timer -= self.step_interval;
        // Coarse deltas must not queue up a backlog of steps.
        self.update_timer = self.update_timer.min(self.step_interval);

        self.advance().then(|| Repaint::Partial(self.engine.take_changed_cells()))
    }

    /// Run exactly one generation regardless of playback state.
    pub fn step_once(&mut self) -> Repaint {
        self.advance();
        Repaint::Partial(self.engine.take_changed_cells())
    }

    fn advance(&mut self) -> bool {
        let start = Instant::now();
        let changed = self.engine.step();
        self.last_step_time = start.elapsed();

        if !changed {
            self.state = PlayState::Stable;
            info!("stable configuration reached at generation {}", self.generation());
        }
        changed
    }

    /// Clear grid, reset generation counter and stop playback
    pub fn clear(&mut self) -> Repaint {
        self.engine.clear();
        self.state = PlayState::Paused;
        self.full_repaint()
    }

    /// Randomize grid, reset generation counter and stop playback
    pub fn randomize(&mut self) -> Repaint {
        self.randomize_with(&mut rand::rng())
    }

    /// Same as `randomize`, drawing from the given RNG
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) -> Repaint {
        self.engine.randomize_with(rng);
        self.state = PlayState::Paused;
        self.full_repaint()
    }

    /// Flip one cell; `None` while running or when the coordinate is off the grid
    pub fn toggle_cell(&mut self, row: usize, column: usize) -> Option<Repaint> {
        if self.is_running() {
            return None;
        }
        self.engine.toggle_cell(row, column);
        let is_alive = self.engine.is_alive(row, column).ok()?;
        if self.state == PlayState::Stable {
            self.state = PlayState::Paused;
        }
        Some(Repaint::Single(CellChange::new(row, column, is_alive)))
    }

    /// Replace the engine with a fresh one of the new size, dropping all state
    pub fn resize(&mut self, rows: usize, columns: usize) -> Result<Repaint> {
        self.engine = Engine::new(rows, columns)?;
        self.state = PlayState::Paused;
        self.update_timer = Duration::ZERO;
        info!("resized to {rows}x{columns}");
        Ok(self.full_repaint())
    }

    /// Every cell, for a complete redraw
    pub fn full_repaint(&self) -> Repaint {
        debug!("full repaint at generation {}", self.generation());
        Repaint::Full(self.engine.all_cells().collect())
    }
}
