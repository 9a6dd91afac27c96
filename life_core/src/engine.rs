// engine.rs - Neighbour counting and the generation transition

use std::fmt;
use std::str::FromStr;

use crate::error::{LifeError, Result};
use crate::grid::{ALIVE, DEAD, Grid, NeighbourGrid};

/// The eight Moore-neighbourhood offsets as `(d_row, d_col)`.
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// How cells at the edge of the grid see (and are seen by) the rest.
///
/// `Reference` reproduces the original program bit for bit: the outer ring
/// always reports zero neighbours, and the last row and last column are
/// never updated. The other two modes are the textbook variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BoundaryMode {
    /// Border counts forced to 0; last row and column frozen.
    #[default]
    Reference,
    /// Out-of-range neighbours read as dead; every cell updated.
    ZeroPadded,
    /// Both axes wrap around; every cell updated.
    Toroidal,
}

impl BoundaryMode {
    pub const ALL: [BoundaryMode; 3] = [Self::Reference, Self::ZeroPadded, Self::Toroidal];

    pub fn name(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::ZeroPadded => "zero-padded",
            Self::Toroidal => "toroidal",
        }
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundaryMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown boundary mode '{s}' (expected reference, zero-padded or toroidal)"))
    }
}

/// Applies Conway's rules to a [`Grid`] under a chosen [`BoundaryMode`].
///
/// The engine holds no grid state of its own; callers own the grid and
/// pass it in each generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifeEngine {
    mode: BoundaryMode,
}

impl LifeEngine {
    pub fn new(mode: BoundaryMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> BoundaryMode {
        self.mode
    }

    /// Live-neighbour count for every cell of `grid`.
    pub fn count_neighbours(&self, grid: &Grid) -> NeighbourGrid {
        let mut neighbours = NeighbourGrid::for_grid(grid);
        self.fill_counts(grid, neighbours.counts_mut());
        neighbours
    }

    /// Like [`count_neighbours`](Self::count_neighbours), reusing `out`.
    pub fn count_neighbours_into(&self, grid: &Grid, out: &mut NeighbourGrid) -> Result<()> {
        check_shape(grid, out)?;
        let counts = out.counts_mut();
        counts.fill(0);
        self.fill_counts(grid, counts);
        Ok(())
    }

    /// Apply the transition rule to `grid` using precomputed `neighbours`.
    ///
    /// Every count is read from `neighbours`, never from `grid`, so updating
    /// one cell cannot influence another within the same generation.
    pub fn apply_transition(&self, grid: &mut Grid, neighbours: &NeighbourGrid) -> Result<()> {
        check_shape(grid, neighbours)?;
        self.transition(grid, neighbours);
        Ok(())
    }

    /// Advance `grid` one generation in place.
    pub fn step_in_place(&self, grid: &mut Grid) {
        let neighbours = self.count_neighbours(grid);
        self.transition(grid, &neighbours);
        tracing::trace!(rows = grid.row_count(), cols = grid.col_count(), mode = %self.mode, "stepped grid");
    }

    /// The next generation of `grid`; `grid` itself is left untouched.
    pub fn step(&self, grid: &Grid) -> Grid {
        let mut next = grid.clone();
        self.step_in_place(&mut next);
        next
    }

    fn transition(&self, grid: &mut Grid, neighbours: &NeighbourGrid) {
        let (rows, cols) = grid.shape();
        let (row_end, col_end) = self.update_region(rows, cols);
        let counts = neighbours.as_slice();
        let cells = grid.cells_mut();

        for row in 0..row_end {
            for col in 0..col_end {
                let i = row * cols + col;
                cells[i] = next_state(cells[i], counts[i]);
            }
        }
    }

    /// Exclusive `(row, col)` upper bounds of the cells a step may change.
    fn update_region(&self, rows: usize, cols: usize) -> (usize, usize) {
        match self.mode {
            BoundaryMode::Reference => (rows - 1, cols - 1),
            BoundaryMode::ZeroPadded | BoundaryMode::Toroidal => (rows, cols),
        }
    }

    fn fill_counts(&self, grid: &Grid, counts: &mut [u8]) {
        let (rows, cols) = grid.shape();
        let cells = grid.as_slice();

        match self.mode {
            BoundaryMode::Reference => {
                // Only the interior is counted; the outer ring keeps its 0.
                for row in 1..rows.saturating_sub(1) {
                    for col in 1..cols.saturating_sub(1) {
                        counts[row * cols + col] = NEIGHBOURS
                            .iter()
                            .map(|&(dr, dc)| {
                                let r = row.wrapping_add_signed(dr);
                                let c = col.wrapping_add_signed(dc);
                                cells[r * cols + c]
                            })
                            .sum();
                    }
                }
            }
            BoundaryMode::ZeroPadded => {
                for row in 0..rows {
                    for col in 0..cols {
                        counts[row * cols + col] = NEIGHBOURS
                            .iter()
                            .filter_map(|&(dr, dc)| {
                                let r = row.checked_add_signed(dr).filter(|&r| r < rows)?;
                                let c = col.checked_add_signed(dc).filter(|&c| c < cols)?;
                                Some(cells[r * cols + c])
                            })
                            .sum();
                    }
                }
            }
            BoundaryMode::Toroidal => {
                for row in 0..rows {
                    for col in 0..cols {
                        counts[row * cols + col] = NEIGHBOURS
                            .iter()
                            .map(|&(dr, dc)| {
                                let r = wrap(row, dr, rows);
                                let c = wrap(col, dc, cols);
                                cells[r * cols + c]
                            })
                            .sum();
                    }
                }
            }
        }
    }
}

/// Neighbour counts under [`BoundaryMode::Reference`].
pub fn count_neighbours(grid: &Grid) -> NeighbourGrid {
    LifeEngine::default().count_neighbours(grid)
}

/// One generation under [`BoundaryMode::Reference`].
pub fn step(grid: &Grid) -> Grid {
    LifeEngine::default().step(grid)
}

fn next_state(cell: u8, count: u8) -> u8 {
    match (cell, count) {
        (ALIVE, 2) | (ALIVE, 3) => ALIVE, // Survival
        (ALIVE, _) => DEAD,               // Under- or over-population
        (DEAD, 3) => ALIVE,               // Birth
        (state, _) => state,              // Stays dead
    }
}

fn wrap(index: usize, delta: isize, len: usize) -> usize {
    (index + len).wrapping_add_signed(delta) % len
}

fn check_shape(grid: &Grid, neighbours: &NeighbourGrid) -> Result<()> {
    if grid.shape() != neighbours.shape() {
        return Err(LifeError::ShapeMismatch {
            expected: grid.shape(),
            found: neighbours.shape(),
        });
    }
    Ok(())
}
