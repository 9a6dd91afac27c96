// initializer.rs - Random starting grids

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{LifeError, Result};
use crate::grid::{ALIVE, DEAD, Grid};

/// A `rows x cols` grid with every cell drawn independently and uniformly
/// from {0, 1}.
///
/// Entropy comes from `rng`; pass a seeded generator for reproducible runs.
/// Dimensions are checked before any entropy is consumed.
pub fn initialize<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Grid> {
    let mut grid = Grid::new(rows, cols)?;
    for cell in grid.cells_mut() {
        *cell = rng.gen_range(DEAD..=ALIVE);
    }
    Ok(grid)
}

/// [`initialize`] with a `ChaCha8Rng` seeded from `seed`.
pub fn initialize_seeded(rows: usize, cols: usize, seed: u64) -> Result<Grid> {
    initialize(rows, cols, &mut ChaCha8Rng::seed_from_u64(seed))
}

/// Each cell alive with probability `density`.
pub fn initialize_with_density<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    density: f64,
    rng: &mut R,
) -> Result<Grid> {
    if !(0.0..=1.0).contains(&density) {
        return Err(LifeError::InvalidDensity(density));
    }
    let mut grid = Grid::new(rows, cols)?;
    for cell in grid.cells_mut() {
        *cell = if rng.gen_bool(density) { ALIVE } else { DEAD };
    }
    Ok(grid)
}
