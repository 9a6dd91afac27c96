// patterns.rs - Named seed patterns

use crate::error::{LifeError, Result};
use crate::grid::Grid;

/// A named arrangement of live cells.
///
/// `cells` are `(row, col)` offsets from the pattern's top-left corner.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

pub const LWSS: Pattern = Pattern {
    name: "LWSS",
    cells: &[(0, 1), (0, 4), (1, 0), (2, 0), (2, 4), (3, 0), (3, 1), (3, 2), (3, 3)],
};

pub const PULSAR: Pattern = Pattern {
    name: "Pulsar",
    cells: &[
        // Top half
        (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
        (2, 0), (2, 5), (2, 7), (2, 12),
        (3, 0), (3, 5), (3, 7), (3, 12),
        (4, 0), (4, 5), (4, 7), (4, 12),
        (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
        // Bottom half (mirrored)
        (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
        (8, 0), (8, 5), (8, 7), (8, 12),
        (9, 0), (9, 5), (9, 7), (9, 12),
        (10, 0), (10, 5), (10, 7), (10, 12),
        (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
    ],
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER, TOAD, BEACON, GLIDER, R_PENTOMINO, LWSS, PULSAR];

/// Look a pattern up by name, ignoring case.
pub fn find(name: &str) -> Result<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))
}

impl Pattern {
    /// Rows spanned by the pattern.
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0)
    }

    /// Columns spanned by the pattern.
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0)
    }

    /// Top-left origin that centres the pattern in a `rows x cols` grid, if
    /// it fits at all.
    pub fn centred_origin(&self, rows: usize, cols: usize) -> Option<(usize, usize)> {
        let row = rows.checked_sub(self.height())? / 2;
        let col = cols.checked_sub(self.width())? / 2;
        Some((row, col))
    }

    /// Set the pattern's cells alive with its top-left corner at `origin`.
    ///
    /// Nothing is written unless every cell lands inside the grid.
    pub fn place(&self, grid: &mut Grid, origin: (usize, usize)) -> Result<()> {
        let (rows, cols) = grid.shape();
        let (row, col) = (origin.0.saturating_add(self.height()), origin.1.saturating_add(self.width()));
        if row > rows || col > cols {
            return Err(grid.out_of_bounds(row - 1, col - 1));
        }
        for &(r, c) in self.cells {
            grid.set(origin.0 + r, origin.1 + c, true)?;
        }
        tracing::debug!(pattern = self.name, ?origin, "placed pattern");
        Ok(())
    }
}

impl Grid {
    /// An otherwise dead grid holding `pattern` at `origin`.
    pub fn from_pattern(rows: usize, cols: usize, pattern: &Pattern, origin: (usize, usize)) -> Result<Self> {
        let mut grid = Grid::new(rows, cols)?;
        pattern.place(&mut grid, origin)?;
        Ok(grid)
    }
}
