//! Random maze generation.
//!
//! The random source is always passed in, so a seeded RNG reproduces the
//! same maze.

use rand::{Rng, RngExt};

use crate::cell::Cell;
use crate::config::{ConfigError, MazeConfig};
use crate::grid::Grid;
use crate::maze::Maze;

/// Maze generator driven by a caller-supplied RNG.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Reset every cell of `grid`: blocked with probability `sparseness`,
    /// empty otherwise.
    ///
    /// Returns the number of blocked cells.
    pub fn scatter(&mut self, grid: &mut Grid, sparseness: f64) -> usize {
        let rng = &mut self.rng;
        grid.map_cells(|_, _| {
            let r: f64 = rng.random();
            if r < sparseness {
                Cell::Blocked
            } else {
                Cell::Empty
            }
        });
        grid.count(Cell::Blocked)
    }

    /// Build a maze from `config`: scatter blocked cells, then place the
    /// start and goal (which are never blocked).
    pub fn generate(&mut self, config: &MazeConfig) -> Result<Maze, ConfigError> {
        config.validate()?;
        let mut grid = Grid::new(config.rows, config.columns);
        self.scatter(&mut grid, config.sparseness);
        Ok(Maze::from_parts(grid, config.start, config.goal()))
    }
}
