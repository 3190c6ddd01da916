//! Grid mazes as a client of `statespace-search`.
//!
//! A [`Maze`] supplies everything the search engine needs: the state is a
//! [`Location`], the goal test compares against the goal cell, successors are
//! the accessible up/down/left/right neighbours, and the A* heuristic is the
//! Euclidean distance to the goal.
//!
//! Mazes come from a [`MazeConfig`] ([`Maze::generate`], [`MazeGen`]) or from
//! their rendered text form (`"S  X\n  XG".parse::<Maze>()`).

pub mod cell;
pub mod config;
pub mod distance;
pub mod geom;
pub mod grid;
pub mod mapgen;
pub mod maze;

pub use cell::Cell;
pub use config::{ConfigError, MazeConfig};
pub use distance::{euclidean, euclidean_distance, manhattan, manhattan_distance};
pub use geom::Location;
pub use grid::Grid;
pub use mapgen::MazeGen;
pub use maze::{Maze, ParseMazeError};
