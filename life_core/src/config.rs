// config.rs - Run configuration for a simulation and its driver

use std::time::Duration;

use crate::engine::BoundaryMode;
use crate::error::{LifeError, Result};
use crate::patterns;

/// Everything needed to set up a run.
///
/// The defaults reproduce the original animation: a 128x128 uniform random
/// board, reference edge handling, 100 frames at 100 ms apiece.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    /// Seed for the initial grid; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Fill probability. `None` means a uniform draw over {0, 1}.
    pub density: Option<f64>,
    pub boundary: BoundaryMode,
    /// Frames to render; `None` runs until interrupted.
    pub frames: Option<u64>,
    pub interval: Duration,
    /// Start from a named pattern, centred, instead of random noise.
    pub pattern: Option<String>,
    /// Generations remembered for cycle detection (0 disables it).
    pub history_len: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 128,
            cols: 128,
            seed: None,
            density: None,
            boundary: BoundaryMode::Reference,
            frames: Some(100),
            interval: Duration::from_millis(100),
            pattern: None,
            history_len: 10,
        }
    }
}

impl SimulationConfig {
    /// Reject configurations that could not produce a starting grid.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LifeError::InvalidDimension { rows: self.rows, cols: self.cols });
        }
        if let Some(density) = self.density {
            if !(0.0..=1.0).contains(&density) {
                return Err(LifeError::InvalidDensity(density));
            }
        }
        if let Some(name) = &self.pattern {
            let pattern = patterns::find(name)?;
            if pattern.centred_origin(self.rows, self.cols).is_none() {
                return Err(LifeError::OutOfBounds {
                    row: pattern.height() - 1,
                    col: pattern.width() - 1,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
        }
        Ok(())
    }
}
