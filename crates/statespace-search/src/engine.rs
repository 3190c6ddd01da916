use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::config::{SearchLimits, Strategy};
use crate::frontier::{Discipline, Frontier, Queue, Stack};
use crate::node::{Node, NodeArena, NodeId};
use crate::traits::{FnSpace, Space};

/// Counters collected during one search call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and passed to the successor function.
    pub expanded: usize,
    /// Nodes pushed onto the frontier, excluding the root.
    pub generated: usize,
    /// High-water mark of the frontier size.
    pub max_frontier: usize,
}

impl SearchStats {
    #[inline]
    pub(crate) fn record_frontier(&mut self, len: usize) {
        self.max_frontier = self.max_frontier.max(len);
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expanded {}, generated {}, max frontier {}",
            self.expanded, self.generated, self.max_frontier
        )
    }
}

/// A goal node together with the search tree that reached it.
#[derive(Clone, Debug)]
pub struct Solution<S> {
    pub(crate) arena: NodeArena<S>,
    pub(crate) goal: NodeId,
    pub(crate) stats: SearchStats,
}

impl<S> Solution<S> {
    /// The terminal node, whose state satisfies the goal test.
    pub fn node(&self) -> &Node<S> {
        &self.arena[self.goal]
    }

    pub fn goal_id(&self) -> NodeId {
        self.goal
    }

    pub fn state(&self) -> &S {
        self.node().state()
    }

    /// Accumulated path cost. Always zero for depth-first and breadth-first
    /// search; use [`Solution::depth`] for the edge count.
    pub fn cost(&self) -> f64 {
        self.node().cost()
    }

    /// Number of edges from the initial state to the goal.
    pub fn depth(&self) -> u32 {
        self.node().depth()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Every node created by the search, not only those on the path.
    pub fn nodes(&self) -> &NodeArena<S> {
        &self.arena
    }
}

/// How a search call ended.
#[derive(Clone, Debug)]
pub enum Outcome<S> {
    /// A goal state was reached.
    Found(Solution<S>),
    /// The frontier emptied: no goal is reachable from the initial state.
    Exhausted(SearchStats),
    /// [`SearchLimits::max_expansions`] was reached before a goal.
    Truncated(SearchStats),
}

impl<S> Outcome<S> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn solution(&self) -> Option<&Solution<S>> {
        match self {
            Self::Found(sol) => Some(sol),
            _ => None,
        }
    }

    /// Convert to the goal node, treating both exhaustion and truncation as
    /// "no path".
    pub fn into_solution(self) -> Option<Solution<S>> {
        match self {
            Self::Found(sol) => Some(sol),
            _ => None,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            Self::Found(sol) => &sol.stats,
            Self::Exhausted(stats) | Self::Truncated(stats) => stats,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::Exhausted(_) => "exhausted",
            Self::Truncated(_) => "truncated",
        }
    }
}

/// Entry point for all three algorithms.
///
/// A `Search` holds only configuration. Every call owns its own frontier,
/// explored set and node arena, so independent searches share nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Search {
    limits: SearchLimits,
}

impl Search {
    /// An unbounded search.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SearchLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Depth-first search: stack frontier, each state pushed at most once.
    pub fn depth_first<Sp: Space>(&self, space: &Sp, initial: Sp::State) -> Outcome<Sp::State> {
        self.uninformed(space, initial, Discipline::Lifo)
    }

    /// Breadth-first search: queue frontier, each state pushed at most once.
    ///
    /// The first goal found is reachable in the fewest edges.
    pub fn breadth_first<Sp: Space>(&self, space: &Sp, initial: Sp::State) -> Outcome<Sp::State> {
        self.uninformed(space, initial, Discipline::Fifo)
    }

    /// Run the shared uninformed loop with the frontier chosen by `discipline`.
    pub fn uninformed<Sp: Space>(
        &self,
        space: &Sp,
        initial: Sp::State,
        discipline: Discipline,
    ) -> Outcome<Sp::State> {
        match discipline {
            Discipline::Lifo => {
                self.expand_uninformed(space, initial, Stack::new(), Strategy::DepthFirst)
            }
            Discipline::Fifo => {
                self.expand_uninformed(space, initial, Queue::new(), Strategy::BreadthFirst)
            }
        }
    }

    fn expand_uninformed<Sp: Space, F: Frontier<NodeId>>(
        &self,
        space: &Sp,
        initial: Sp::State,
        mut frontier: F,
        strategy: Strategy,
    ) -> Outcome<Sp::State> {
        log::debug!("{strategy} search started, limits {:?}", self.limits);

        let mut arena = NodeArena::new();
        let mut stats = SearchStats::default();
        // States are marked when pushed, not when popped, so a state is
        // never pending twice.
        let mut explored: HashSet<Sp::State> = HashSet::new();
        explored.insert(initial.clone());
        frontier.push(arena.push_root(initial, 0.0));
        stats.record_frontier(frontier.len());

        let mut buf = Vec::new();
        let outcome = 'search: loop {
            let Some(current) = frontier.pop() else {
                break 'search Outcome::Exhausted(stats);
            };

            if space.is_goal(arena[current].state()) {
                break 'search Outcome::Found(Solution {
                    arena,
                    goal: current,
                    stats,
                });
            }
            if !self.limits.allows(stats.expanded) {
                break 'search Outcome::Truncated(stats);
            }

            stats.expanded += 1;
            buf.clear();
            space.successors(arena[current].state(), &mut buf);
            log::trace!(
                "expanding {current} at depth {}: {} successors",
                arena[current].depth(),
                buf.len()
            );

            for child in buf.drain(..) {
                if !explored.insert(child.clone()) {
                    continue;
                }
                frontier.push(arena.push_child(current, child, 0.0, 0.0));
                stats.generated += 1;
            }
            stats.record_frontier(frontier.len());
        };

        log::debug!("{strategy} search {}: {}", outcome.label(), outcome.stats());
        outcome
    }
}

/// Depth-first search from `initial` using closures for the goal test and
/// successor function.
///
/// Returns `None` when no goal is reachable.
pub fn dfs<S, G, F, I>(initial: S, goal_test: G, successors: F) -> Option<Solution<S>>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let space: FnSpace<S, G, F> = FnSpace::new(goal_test, successors);
    Search::new().depth_first(&space, initial).into_solution()
}

/// Breadth-first search from `initial` using closures for the goal test and
/// successor function.
///
/// Returns `None` when no goal is reachable. A returned path has the minimum
/// number of edges.
pub fn bfs<S, G, F, I>(initial: S, goal_test: G, successors: F) -> Option<Solution<S>>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let space: FnSpace<S, G, F> = FnSpace::new(goal_test, successors);
    Search::new().breadth_first(&space, initial).into_solution()
}
