// grid.rs - Grid types for the bounded Game of Life

use std::fmt;

use crate::error::{LifeError, Result};

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

/// A fixed-size `rows x cols` board of cells, each `DEAD` (0) or `ALIVE` (1).
///
/// Cells live in one row-major buffer. The shape is set at construction and
/// never changes; there is no wraparound, every coordinate must satisfy
/// `row < rows` and `col < cols`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// An all-dead grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        check_dimensions(rows, cols)?;
        Ok(Self { rows, cols, cells: vec![DEAD; rows * cols] })
    }

    /// Build a grid from nested rows of 0/1 values.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        check_dimensions(height, width)?;

        let mut cells = Vec::with_capacity(height * width);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(LifeError::RaggedRows { row, expected: width, found: values.len() });
            }
            for (col, &value) in values.iter().enumerate() {
                if value > ALIVE {
                    return Err(LifeError::InvalidCell { row, col, value });
                }
                cells.push(value);
            }
        }
        Ok(Self { rows: height, cols: width, cells })
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Cell value at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.in_bounds(row, col).then(|| self.cells[row * self.cols + col])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(ALIVE)
    }

    /// Set a single cell alive or dead.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        if !self.in_bounds(row, col) {
            return Err(self.out_of_bounds(row, col));
        }
        self.cells[row * self.cols + col] = if alive { ALIVE } else { DEAD };
        Ok(())
    }

    /// Flip a single cell.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<()> {
        let alive = self.is_alive(row, col);
        self.set(row, col, !alive)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&v| v == ALIVE).count()
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }

    /// Row-major view of all cells.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.cols)
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    pub(crate) fn out_of_bounds(&self, row: usize, col: usize) -> LifeError {
        LifeError::OutOfBounds { row, col, rows: self.rows, cols: self.cols }
    }

    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            for &cell in row {
                let ch = if cell == ALIVE { '█' } else { '·' };
                write!(f, "{ch}")?;
            }
            if r + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Per-cell live-neighbour counts (0..=8), same shape as the grid they
/// were computed from. Recomputed every step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighbourGrid {
    rows: usize,
    cols: usize,
    counts: Vec<u8>,
}

impl NeighbourGrid {
    /// An all-zero neighbour grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        check_dimensions(rows, cols)?;
        Ok(Self::zeros(rows, cols))
    }

    /// An all-zero neighbour grid shaped like `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::zeros(grid.rows, grid.cols)
    }

    /// Build from nested rows of counts, e.g. to feed `apply_transition`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        check_dimensions(height, width)?;

        let mut counts = Vec::with_capacity(height * width);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(LifeError::RaggedRows { row, expected: width, found: values.len() });
            }
            counts.extend_from_slice(values);
        }
        Ok(Self { rows: height, cols: width, counts })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        (row < self.rows && col < self.cols).then(|| self.counts[row * self.cols + col])
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.counts
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.counts.chunks_exact(self.cols)
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }

    pub(crate) fn counts_mut(&mut self) -> &mut [u8] {
        &mut self.counts
    }

    fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, counts: vec![0; rows * cols] }
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(LifeError::InvalidDimension { rows, cols });
    }
    Ok(())
}
