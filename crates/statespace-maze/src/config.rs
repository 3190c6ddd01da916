//! Maze generation settings.

use std::fmt;

use crate::geom::Location;

/// Parameters for [`crate::Maze::generate`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    pub rows: i32,
    pub columns: i32,
    pub start: Location,
    /// Defaults to the bottom-right corner.
    pub goal: Option<Location>,
    /// Probability (0.0–1.0) that any one cell is blocked.
    pub sparseness: f64,
    /// Seed for reproducible mazes. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 10,
            start: Location::ORIGIN,
            goal: None,
            sparseness: 0.2,
            seed: None,
        }
    }
}

impl MazeConfig {
    /// Largest number of cells a generated maze may have.
    pub const MAX_CELLS: usize = 1 << 24;

    /// The configured goal, or the bottom-right corner.
    pub fn goal(&self) -> Location {
        self.goal.unwrap_or(Location::new(self.rows - 1, self.columns - 1))
    }

    /// Check that the settings describe a buildable maze.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows <= 0 || self.columns <= 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                columns: self.columns,
            });
        }
        let too_large = self
            .rows
            .checked_mul(self.columns)
            .is_none_or(|n| n as usize > Self::MAX_CELLS);
        if too_large {
            return Err(ConfigError::TooLarge {
                rows: self.rows,
                columns: self.columns,
            });
        }
        let in_grid = |loc: Location| {
            loc.row >= 0 && loc.row < self.rows && loc.col >= 0 && loc.col < self.columns
        };
        if !in_grid(self.start) {
            return Err(ConfigError::OutOfBounds {
                what: "start",
                loc: self.start,
            });
        }
        let goal = self.goal();
        if !in_grid(goal) {
            return Err(ConfigError::OutOfBounds { what: "goal", loc: goal });
        }
        if goal == self.start {
            return Err(ConfigError::StartIsGoal(goal));
        }
        if !(0.0..=1.0).contains(&self.sparseness) {
            return Err(ConfigError::Sparseness(self.sparseness));
        }
        Ok(())
    }
}

/// Invalid [`MazeConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptyGrid { rows: i32, columns: i32 },
    TooLarge { rows: i32, columns: i32 },
    OutOfBounds { what: &'static str, loc: Location },
    StartIsGoal(Location),
    Sparseness(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, columns } => {
                write!(f, "maze must have at least one cell, got {rows}x{columns}")
            }
            Self::TooLarge { rows, columns } => write!(
                f,
                "maze of {rows}x{columns} exceeds {} cells",
                MazeConfig::MAX_CELLS
            ),
            Self::OutOfBounds { what, loc } => write!(f, "{what} {loc} is outside the maze"),
            Self::StartIsGoal(loc) => write!(f, "start and goal are both {loc}"),
            Self::Sparseness(s) => write!(f, "sparseness must be within [0, 1], got {s}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid_with_corner_goal() {
        let cfg = MazeConfig::default();
        assert_eq!(cfg.goal(), Location::new(9, 9));
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_settings() {
        let empty = MazeConfig {
            rows: 0,
            ..MazeConfig::default()
        };
        assert_eq!(
            empty.validate(),
            Err(ConfigError::EmptyGrid { rows: 0, columns: 10 })
        );

        let outside = MazeConfig {
            goal: Some(Location::new(10, 0)),
            ..MazeConfig::default()
        };
        assert!(matches!(
            outside.validate(),
            Err(ConfigError::OutOfBounds { what: "goal", .. })
        ));

        let same = MazeConfig {
            rows: 1,
            columns: 1,
            ..MazeConfig::default()
        };
        assert_eq!(same.validate(), Err(ConfigError::StartIsGoal(Location::ORIGIN)));

        let dense = MazeConfig {
            sparseness: 1.5,
            ..MazeConfig::default()
        };
        assert_eq!(dense.validate(), Err(ConfigError::Sparseness(1.5)));
    }

    #[test]
    fn rejects_oversized_grid() {
        let huge = MazeConfig {
            rows: 65_536,
            columns: 65_536,
            ..MazeConfig::default()
        };
        let err = ConfigError::TooLarge {
            rows: 65_536,
            columns: 65_536,
        };
        assert_eq!(huge.validate(), Err(err.clone()));
        assert_eq!(crate::Maze::open(&huge).unwrap_err(), err);

        // Fits in i32 but is over the cell cap.
        let wide = MazeConfig {
            rows: 1 << 12,
            columns: (1 << 12) + 1,
            ..MazeConfig::default()
        };
        assert!(matches!(wide.validate(), Err(ConfigError::TooLarge { .. })));

        let at_cap = MazeConfig {
            rows: 1 << 12,
            columns: 1 << 12,
            ..MazeConfig::default()
        };
        assert_eq!(at_cap.validate(), Ok(()));
    }

    #[test]
    fn error_messages() {
        let err = ConfigError::OutOfBounds {
            what: "start",
            loc: Location::new(-1, 2),
        };
        assert_eq!(err.to_string(), "start (-1, 2) is outside the maze");
    }
}
