//! Generic state-space search.
//!
//! This crate searches an implicit graph described by a start state, a goal
//! test and a successor function:
//!
//! - **Depth-first** search ([`Search::depth_first`], [`dfs`])
//! - **Breadth-first** search ([`Search::breadth_first`], [`bfs`])
//! - **A\*** best-first search ([`Search::astar`], [`astar`], [`astar_weighted`])
//!
//! Depth-first and breadth-first search share one expansion loop and differ
//! only in their [`Frontier`] discipline. Found goals come back as a
//! [`Solution`], which owns the [`NodeArena`] of the search and rebuilds the
//! start-to-goal path on request ([`Solution::path`], [`to_path`]).
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Space`] | DFS, BFS |
//! | [`WeightedSpace`] : [`Space`] | edge costs (unit by default) |
//! | [`InformedSpace`] : [`WeightedSpace`] | A* |
//!
//! Closure-based callers can use the free functions, or wrap closures in
//! [`FnSpace`], [`FnWeightedSpace`] and [`Informed`].

mod astar;
mod config;
mod engine;
mod error;
mod frontier;
mod node;
mod path;
mod traits;

pub use astar::{astar, astar_weighted};
pub use config::{SearchLimits, Strategy};
pub use engine::{Outcome, Search, SearchStats, Solution, bfs, dfs};
pub use error::SearchError;
pub use frontier::{Discipline, Frontier, PriorityQueue, Queue, Ranked, Stack};
pub use node::{Node, NodeArena, NodeId};
pub use path::to_path;
pub use traits::{FnSpace, FnWeightedSpace, Informed, InformedSpace, Space, WeightedSpace};
