// simulation.rs - Driver-owned simulation state

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::SimulationConfig;
use crate::engine::{BoundaryMode, LifeEngine};
use crate::error::Result;
use crate::grid::Grid;
use crate::initializer;
use crate::patterns;

pub const DEFAULT_HISTORY: usize = 10;

/// What a single call to [`Simulation::advance`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub generation: u64,
    pub population: usize,
    /// The new grid matches one of the recently seen generations.
    pub cycle_detected: bool,
}

/// One running simulation: the grid, the engine stepping it, and the
/// bookkeeping a driver needs between frames.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    engine: LifeEngine,
    generation: u64,
    history: VecDeque<u64>,
    history_len: usize,
}

impl Simulation {
    pub fn new(grid: Grid, mode: BoundaryMode) -> Self {
        Self::with_history(grid, mode, DEFAULT_HISTORY)
    }

    /// Remember the last `history_len` generations for cycle detection.
    pub fn with_history(grid: Grid, mode: BoundaryMode, history_len: usize) -> Self {
        let mut sim = Self {
            grid,
            engine: LifeEngine::new(mode),
            generation: 0,
            history: VecDeque::with_capacity(history_len),
            history_len,
        };
        sim.remember();
        sim
    }

    /// Build the starting grid described by `config`.
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        let grid = match &config.pattern {
            Some(name) => {
                let pattern = patterns::find(name)?;
                let origin = pattern.centred_origin(config.rows, config.cols).unwrap_or((0, 0));
                Grid::from_pattern(config.rows, config.cols, pattern, origin)?
            }
            None => {
                let mut rng = match config.seed {
                    Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                    None => ChaCha8Rng::from_entropy(),
                };
                match config.density {
                    Some(density) => initializer::initialize_with_density(config.rows, config.cols, density, &mut rng)?,
                    None => initializer::initialize(config.rows, config.cols, &mut rng)?,
                }
            }
        };
        tracing::debug!(
            rows = config.rows,
            cols = config.cols,
            boundary = %config.boundary,
            population = grid.population(),
            "built starting grid"
        );
        Ok(Self::with_history(grid, config.boundary, config.history_len))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn mode(&self) -> BoundaryMode {
        self.engine.mode()
    }

    /// Step once and report on the new generation.
    pub fn advance(&mut self) -> StepOutcome {
        self.engine.step_in_place(&mut self.grid);
        self.generation += 1;

        let cycle_detected = self.remember();
        if cycle_detected {
            tracing::debug!(generation = self.generation, "grid repeats a recent generation");
        }
        StepOutcome {
            generation: self.generation,
            population: self.grid.population(),
            cycle_detected,
        }
    }

    /// Advance up to `generations` times, stopping early on a cycle.
    pub fn run(&mut self, generations: u64) -> StepOutcome {
        let mut outcome = self.outcome();
        for _ in 0..generations {
            outcome = self.advance();
            if outcome.cycle_detected {
                break;
            }
        }
        outcome
    }

    /// Start over from `grid` at generation 0.
    pub fn reset(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 0;
        self.history.clear();
        self.remember();
    }

    fn outcome(&self) -> StepOutcome {
        StepOutcome {
            generation: self.generation,
            population: self.grid.population(),
            cycle_detected: false,
        }
    }

    /// Record the current grid; true if it was already in the window.
    fn remember(&mut self) -> bool {
        if self.history_len == 0 {
            return false;
        }
        let hash = hash_grid(&self.grid);
        let seen = self.history.contains(&hash);
        if self.history.len() == self.history_len {
            self.history.pop_front();
        }
        self.history.push_back(hash);
        seen
    }
}

fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}
