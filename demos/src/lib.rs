//! Maze-solving demo shared by the `maze` binary and its tests.
//!
//! Demonstrates: seeded maze generation, depth-first, breadth-first and A*
//! search over the same maze, and drawing the found path onto the grid.

use std::error::Error;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use statespace_maze::{Maze, MazeConfig};
use statespace_search::{Outcome, Search, SearchLimits, Strategy};

/// Everything the demo can be told from a JSON file.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub maze: MazeConfig,
    pub limits: SearchLimits,
    pub strategies: Vec<Strategy>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            maze: MazeConfig {
                rows: 7,
                columns: 10,
                sparseness: 0.3,
                ..MazeConfig::default()
            },
            limits: SearchLimits::default(),
            strategies: Strategy::ALL.to_vec(),
        }
    }
}

impl DemoConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Read a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&text)?)
    }
}

/// Generate the configured maze and write one solution per strategy to `out`.
pub fn run(config: &DemoConfig, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let mut maze = Maze::generate(&config.maze)?;
    let search = Search::with_limits(config.limits);
    log::info!(
        "solving {}x{} maze from {} to {}",
        maze.grid().rows(),
        maze.grid().columns(),
        maze.start(),
        maze.goal()
    );

    for &strategy in &config.strategies {
        let outcome = maze.solve(&search, strategy)?;
        writeln!(out, "{strategy} search solution")?;
        write_outcome(&mut maze, &outcome, out)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Draw a search result onto `maze`, print it, then clear the drawing.
pub fn write_outcome(
    maze: &mut Maze,
    outcome: &Outcome<statespace_maze::Location>,
    out: &mut impl Write,
) -> std::io::Result<()> {
    match outcome {
        Outcome::Found(sol) => {
            let path = sol.path();
            maze.mark(&path);
            writeln!(out, "{maze}")?;
            writeln!(
                out,
                "{} steps, {} nodes expanded",
                path.len() - 1,
                sol.stats().expanded
            )?;
            maze.clear();
        }
        Outcome::Exhausted(_) => {
            writeln!(out, "{maze}")?;
            writeln!(out, "Unsolvable")?;
        }
        Outcome::Truncated(stats) => {
            writeln!(out, "{maze}")?;
            writeln!(out, "Gave up after {} expansions", stats.expanded)?;
        }
    }
    Ok(())
}
