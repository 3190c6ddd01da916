//! The maze: a grid with a start and a goal, exposed as a search space.

use std::fmt;
use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;
use statespace_search::{
    InformedSpace, Outcome, Search, SearchError, Space, Strategy, WeightedSpace,
};

use crate::cell::Cell;
use crate::config::{ConfigError, MazeConfig};
use crate::distance::{euclidean, euclidean_distance};
use crate::geom::Location;
use crate::grid::Grid;
use crate::mapgen::MazeGen;

/// A rectangular maze. Walkers move up, down, left or right onto any cell
/// that is inside the grid and not blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Location,
    goal: Location,
}

impl Maze {
    pub(crate) fn from_parts(mut grid: Grid, start: Location, goal: Location) -> Self {
        grid.set(start, Cell::Start);
        grid.set(goal, Cell::Goal);
        Self { grid, start, goal }
    }

    /// A maze with no blocked cells.
    pub fn open(config: &MazeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.columns);
        Ok(Self::from_parts(grid, config.start, config.goal()))
    }

    /// A randomly blocked maze, seeded from `config.seed` when present.
    pub fn generate(config: &MazeConfig) -> Result<Self, ConfigError> {
        match config.seed {
            Some(seed) => MazeGen::new(StdRng::seed_from_u64(seed)).generate(config),
            None => MazeGen::new(rand::rng()).generate(config),
        }
    }

    pub fn start(&self) -> Location {
        self.start
    }

    pub fn goal(&self) -> Location {
        self.goal
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Block a cell. Start, goal and out-of-grid locations are left alone;
    /// returns whether the cell changed.
    pub fn block(&mut self, loc: Location) -> bool {
        match self.grid.at(loc) {
            Some(Cell::Empty | Cell::Path) => {
                self.grid.set(loc, Cell::Blocked);
                true
            }
            _ => false,
        }
    }

    /// Whether `loc` is inside the grid and not blocked.
    pub fn is_accessible(&self, loc: Location) -> bool {
        self.grid.at(loc).is_some_and(Cell::is_open)
    }

    pub fn is_goal(&self, loc: Location) -> bool {
        loc == self.goal
    }

    /// Accessible orthogonal neighbours of `loc`, in the order up, down,
    /// left, right.
    pub fn successors(&self, loc: Location) -> Vec<Location> {
        loc.neighbors_4()
            .into_iter()
            .filter(|&n| self.is_accessible(n))
            .collect()
    }

    /// Euclidean-distance heuristic toward this maze's goal.
    pub fn heuristic(&self) -> impl Fn(&Location) -> f64 + use<> {
        euclidean_distance(self.goal)
    }

    /// Draw `path` onto the grid, leaving the start and goal cells as they are.
    pub fn mark(&mut self, path: &[Location]) {
        for &loc in path {
            if loc != self.start && loc != self.goal && self.is_accessible(loc) {
                self.grid.set(loc, Cell::Path);
            }
        }
    }

    /// Remove every path mark.
    pub fn clear(&mut self) {
        self.grid
            .map_cells(|_, c| if c == Cell::Path { Cell::Empty } else { c });
    }

    /// Search from the start to the goal with `strategy`.
    pub fn solve(
        &self,
        search: &Search,
        strategy: Strategy,
    ) -> Result<Outcome<Location>, SearchError> {
        search.run(strategy, self, self.start)
    }
}

impl Space for Maze {
    type State = Location;

    fn is_goal(&self, state: &Location) -> bool {
        Maze::is_goal(self, *state)
    }

    fn successors(&self, state: &Location, buf: &mut Vec<Location>) {
        buf.extend(
            state
                .neighbors_4()
                .into_iter()
                .filter(|&n| self.is_accessible(n)),
        );
    }
}

impl WeightedSpace for Maze {}

impl InformedSpace for Maze {
    fn estimate(&self, state: &Location) -> f64 {
        euclidean(*state, self.goal)
    }
}

/// Renders one line per row, without a trailing newline.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.grid.rows() {
            if row > 0 {
                f.write_str("\n")?;
            }
            for cell in self.grid.row(row) {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

/// Failure to parse a rendered maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseMazeError {
    Empty,
    TooLarge { rows: usize, columns: usize },
    UnknownCell { ch: char, loc: Location },
    Ragged { row: i32, expected: usize, found: usize },
    MissingStart,
    MissingGoal,
    DuplicateStart(Location),
    DuplicateGoal(Location),
}

impl fmt::Display for ParseMazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("maze has no cells"),
            Self::TooLarge { rows, columns } => {
                write!(f, "maze of {rows}x{columns} does not fit in i32 coordinates")
            }
            Self::UnknownCell { ch, loc } => write!(f, "unknown cell {ch:?} at {loc}"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::MissingStart => f.write_str("maze has no start cell 'S'"),
            Self::MissingGoal => f.write_str("maze has no goal cell 'G'"),
            Self::DuplicateStart(loc) => write!(f, "second start cell at {loc}"),
            Self::DuplicateGoal(loc) => write!(f, "second goal cell at {loc}"),
        }
    }
}

impl std::error::Error for ParseMazeError {}

/// Parses the [`fmt::Display`] form: one line per row, one character per
/// cell, exactly one `S` and one `G`.
impl FromStr for Maze {
    type Err = ParseMazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        let columns = lines.first().map_or(0, |l| l.chars().count());
        if columns == 0 {
            return Err(ParseMazeError::Empty);
        }

        let (rows, width) = dimensions(lines.len(), columns)?;
        let mut grid = Grid::new(rows, width);
        let mut start = None;
        let mut goal = None;
        for (row, line) in (0..rows).zip(&lines) {
            let found = line.chars().count();
            if found != columns {
                return Err(ParseMazeError::Ragged {
                    row,
                    expected: columns,
                    found,
                });
            }
            for (col, ch) in (0..width).zip(line.chars()) {
                let loc = Location::new(row, col);
                let cell = Cell::from_char(ch).ok_or(ParseMazeError::UnknownCell { ch, loc })?;
                match cell {
                    Cell::Start if start.is_some() => {
                        return Err(ParseMazeError::DuplicateStart(loc));
                    }
                    Cell::Goal if goal.is_some() => {
                        return Err(ParseMazeError::DuplicateGoal(loc));
                    }
                    Cell::Start => start = Some(loc),
                    Cell::Goal => goal = Some(loc),
                    _ => {}
                }
                grid.set(loc, cell);
            }
        }

        let start = start.ok_or(ParseMazeError::MissingStart)?;
        let goal = goal.ok_or(ParseMazeError::MissingGoal)?;
        Ok(Self::from_parts(grid, start, goal))
    }
}

/// Convert parsed row and column counts to grid dimensions.
fn dimensions(rows: usize, columns: usize) -> Result<(i32, i32), ParseMazeError> {
    match (i32::try_from(rows), i32::try_from(columns)) {
        (Ok(r), Ok(c)) => Ok((r, c)),
        _ => Err(ParseMazeError::TooLarge { rows, columns }),
    }
}
