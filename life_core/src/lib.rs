//! Conway's Game of Life on a fixed-size, bounded grid.
//!
//! The default [`BoundaryMode::Reference`] keeps two edge quirks intact: the
//! outer ring of cells always counts zero neighbours, and the last row and
//! last column are never updated. [`BoundaryMode::ZeroPadded`] and
//! [`BoundaryMode::Toroidal`] give the textbook behaviour instead.
//!
//! ```
//! use life_core::{count_neighbours, initialize_seeded, step};
//!
//! let grid = initialize_seeded(32, 32, 7)?;
//! let neighbours = count_neighbours(&grid);
//! assert_eq!(neighbours.shape(), grid.shape());
//!
//! let next = step(&grid);
//! assert_eq!(next.shape(), (32, 32));
//! # Ok::<(), life_core::LifeError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod initializer;
pub mod patterns;
pub mod simulation;

pub use config::SimulationConfig;
pub use engine::{BoundaryMode, LifeEngine, count_neighbours, step};
pub use error::{LifeError, Result};
pub use grid::{ALIVE, DEAD, Grid, NeighbourGrid};
pub use initializer::{initialize, initialize_seeded, initialize_with_density};
pub use patterns::Pattern;
pub use simulation::{Simulation, StepOutcome};
