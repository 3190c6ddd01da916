use std::collections::HashMap;
use std::hash::Hash;

use crate::config::Strategy;
use crate::engine::{Outcome, Search, SearchStats, Solution};
use crate::error::{SearchError, check_edge_cost, check_heuristic};
use crate::frontier::{Frontier, PriorityQueue, Ranked};
use crate::node::NodeArena;
use crate::traits::{FnSpace, FnWeightedSpace, Informed, InformedSpace};

impl Search {
    /// A* search ordered by `cost + heuristic`.
    ///
    /// Instead of an explored set, A* keeps the best cost found so far for
    /// every discovered state; a state is pushed again whenever a cheaper
    /// route to it turns up. With an admissible heuristic the returned path
    /// has minimum total cost.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] as soon as the space reports a negative or
    /// non-finite heuristic or edge cost.
    pub fn astar<Sp: InformedSpace>(
        &self,
        space: &Sp,
        initial: Sp::State,
    ) -> Result<Outcome<Sp::State>, SearchError> {
        log::debug!("{} search started, limits {:?}", Strategy::AStar, self.limits());

        let mut arena = NodeArena::new();
        let mut stats = SearchStats::default();
        let mut frontier = PriorityQueue::new();
        let mut best: HashMap<Sp::State, f64> = HashMap::new();
        let mut seq: u64 = 0;

        let h = check_heuristic(space.estimate(&initial))?;
        best.insert(initial.clone(), 0.0);
        let root = arena.push_root(initial, h);
        frontier.push(Ranked {
            score: h,
            seq,
            id: root,
        });
        seq += 1;
        stats.record_frontier(frontier.len());

        let mut buf = Vec::new();
        let outcome = 'search: loop {
            let Some(Ranked { id: current, .. }) = frontier.pop() else {
                break 'search Outcome::Exhausted(stats);
            };

            let node = &arena[current];
            // Skip entries superseded by a cheaper route to the same state.
            if best.get(node.state()).is_some_and(|&b| node.cost() > b) {
                continue;
            }
            if space.is_goal(node.state()) {
                break 'search Outcome::Found(Solution {
                    arena,
                    goal: current,
                    stats,
                });
            }
            if !self.limits().allows(stats.expanded) {
                break 'search Outcome::Truncated(stats);
            }

            stats.expanded += 1;
            let cost = node.cost();
            buf.clear();
            space.weighted_successors(node.state(), &mut buf);
            log::trace!(
                "expanding {current} at cost {cost}, score {}: {} successors",
                node.score(),
                buf.len()
            );

            for (child, edge) in buf.drain(..) {
                let new_cost = cost + check_edge_cost(edge)?;
                if best.get(&child).is_some_and(|&b| new_cost >= b) {
                    continue;
                }
                let h = check_heuristic(space.estimate(&child))?;
                best.insert(child.clone(), new_cost);
                let id = arena.push_child(current, child, new_cost, h);
                frontier.push(Ranked {
                    score: new_cost + h,
                    seq,
                    id,
                });
                seq += 1;
                stats.generated += 1;
            }
            stats.record_frontier(frontier.len());
        };

        log::debug!(
            "{} search {}: {}",
            Strategy::AStar,
            outcome.label(),
            outcome.stats()
        );
        Ok(outcome)
    }

    /// Run the algorithm named by `strategy`.
    ///
    /// # Errors
    ///
    /// Only [`Strategy::AStar`] can fail; see [`Search::astar`].
    pub fn run<Sp: InformedSpace>(
        &self,
        strategy: Strategy,
        space: &Sp,
        initial: Sp::State,
    ) -> Result<Outcome<Sp::State>, SearchError> {
        match strategy {
            Strategy::DepthFirst => Ok(self.depth_first(space, initial)),
            Strategy::BreadthFirst => Ok(self.breadth_first(space, initial)),
            Strategy::AStar => self.astar(space, initial),
        }
    }
}

/// A* from `initial` with unit edge costs, using closures for the goal test,
/// successor function and heuristic.
///
/// Returns `Ok(None)` when no goal is reachable.
///
/// # Errors
///
/// Returns [`SearchError::InvalidHeuristic`] if `heuristic` yields a negative
/// or non-finite value.
pub fn astar<S, G, F, I, H>(
    initial: S,
    goal_test: G,
    successors: F,
    heuristic: H,
) -> Result<Option<Solution<S>>, SearchError>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
    H: Fn(&S) -> f64,
{
    let space = Informed::new(FnSpace::<S, G, F>::new(goal_test, successors), heuristic);
    Ok(Search::new().astar(&space, initial)?.into_solution())
}

/// A* from `initial` where `successors` yields `(state, edge cost)` pairs.
///
/// # Errors
///
/// Returns [`SearchError`] if a heuristic value or edge cost is negative or
/// non-finite.
pub fn astar_weighted<S, G, F, I, H>(
    initial: S,
    goal_test: G,
    successors: F,
    heuristic: H,
) -> Result<Option<Solution<S>>, SearchError>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> I,
    I: IntoIterator<Item = (S, f64)>,
    H: Fn(&S) -> f64,
{
    let space = Informed::new(
        FnWeightedSpace::<S, G, F>::new(goal_test, successors),
        heuristic,
    );
    Ok(Search::new().astar(&space, initial)?.into_solution())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchLimits;
    use crate::{bfs, to_path};

    type Cell = (i32, i32);

    /// 4-connected open grid of the given size.
    fn open_grid(w: i32, h: i32) -> impl Fn(&Cell) -> Vec<Cell> {
        move |&(x, y): &Cell| {
            [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
                .into_iter()
                .filter(|&(nx, ny)| nx >= 0 && ny >= 0 && nx < w && ny < h)
                .collect::<Vec<_>>()
        }
    }

    fn manhattan(goal: Cell) -> impl Fn(&Cell) -> f64 {
        move |&(x, y): &Cell| f64::from((x - goal.0).abs() + (y - goal.1).abs())
    }

    #[test]
    fn finds_optimal_path_on_open_grid() {
        let goal = (4, 3);
        let sol = astar((0, 0), |c| *c == goal, open_grid(5, 5), manhattan(goal))
            .unwrap()
            .unwrap();
        assert_eq!(sol.cost(), 7.0);
        assert_eq!(sol.depth(), 7);
        let path = sol.path();
        assert_eq!(path.first(), Some(&(0, 0)));
        assert_eq!(path.last(), Some(&goal));
    }

    #[test]
    fn zero_heuristic_matches_breadth_first_length() {
        let goal = (3, 2);
        let successors = open_grid(4, 4);
        let a = astar((0, 0), |c| *c == goal, &successors, |_| 0.0)
            .unwrap()
            .unwrap();
        let b = bfs((0, 0), |c| *c == goal, &successors).unwrap();
        assert_eq!(a.path().len(), b.path().len());
        assert_eq!(a.cost(), f64::from(b.depth()));
    }

    #[test]
    fn weighted_edges_prefer_cheaper_longer_route() {
        // s -> g costs 10; s -> a -> b -> g costs 3.
        let edges = |s: &char| -> Vec<(char, f64)> {
            match s {
                's' => vec![('g', 10.0), ('a', 1.0)],
                'a' => vec![('b', 1.0)],
                'b' => vec![('g', 1.0)],
                _ => vec![],
            }
        };
        let sol = astar_weighted('s', |s| *s == 'g', edges, |_| 0.0)
            .unwrap()
            .unwrap();
        assert_eq!(sol.path(), vec!['s', 'a', 'b', 'g']);
        assert_eq!(sol.cost(), 3.0);
    }

    #[test]
    fn relaxation_repushes_cheaper_route() {
        // 'c' is first discovered from 's' at cost 5, later via 'b' at cost 2.
        let edges = |s: &char| -> Vec<(char, f64)> {
            match s {
                's' => vec![('c', 5.0), ('b', 1.0)],
                'b' => vec![('c', 1.0)],
                'c' => vec![('g', 1.0)],
                _ => vec![],
            }
        };
        let sol = astar_weighted('s', |s| *s == 'g', edges, |_| 0.0)
            .unwrap()
            .unwrap();
        assert_eq!(sol.path(), vec!['s', 'b', 'c', 'g']);
        assert_eq!(sol.cost(), 3.0);
        // Both nodes for 'c' live in the arena.
        let c_nodes = sol.nodes().iter().filter(|(_, n)| *n.state() == 'c').count();
        assert_eq!(c_nodes, 2);
    }

    #[test]
    fn superseded_entry_is_skipped_when_popped() {
        // 'c' is pushed at cost 2, then at 1.5 via 'b'. The 2.0 entry pops
        // before the goal (6.5) and must not be expanded again.
        let edges = |s: &char| -> Vec<(char, f64)> {
            match s {
                's' => vec![('c', 2.0), ('b', 1.0)],
                'b' => vec![('c', 0.5)],
                'c' => vec![('g', 5.0)],
                _ => vec![],
            }
        };
        let sol = astar_weighted('s', |s| *s == 'g', edges, |_| 0.0)
            .unwrap()
            .unwrap();
        assert_eq!(sol.path(), vec!['s', 'b', 'c', 'g']);
        assert_eq!(sol.cost(), 6.5);
        // s, b and c are each expanded exactly once.
        assert_eq!(sol.stats().expanded, 3);
        assert_eq!(sol.stats().generated, 4);

        let stale = sol
            .nodes()
            .iter()
            .find(|(_, n)| *n.state() == 'c' && n.cost() == 2.0)
            .map(|(id, _)| id)
            .unwrap();
        assert!(sol.nodes().iter().all(|(_, n)| n.parent() != Some(stale)));
    }

    #[test]
    fn unreachable_goal_is_none() {
        let short_chain = |s: &u8| if *s < 3 { vec![s + 1] } else { vec![] };
        let result = astar(0u8, |s| *s == 9, short_chain, |_| 1.0);
        let sol = result.unwrap();
        assert!(sol.is_none());
        assert!(to_path(sol.as_ref()).is_empty());
    }

    #[test]
    fn rejects_negative_heuristic() {
        let err = astar(0u8, |s| *s == 2, |s| vec![s + 1], |s| 1.0 - f64::from(*s))
            .unwrap_err();
        assert_eq!(err, SearchError::InvalidHeuristic { value: -1.0 });
    }

    #[test]
    fn rejects_nan_edge_cost() {
        let err = astar_weighted(0u8, |s| *s == 2, |s| vec![(s + 1, f64::NAN)], |_| 0.0)
            .unwrap_err();
        assert!(matches!(err, SearchError::InvalidEdgeCost { .. }));
    }

    #[test]
    fn run_dispatches_on_strategy() {
        let goal = (2, 2);
        let space = Informed::new(
            FnSpace::<Cell, _, _>::new(move |c: &Cell| *c == goal, open_grid(3, 3)),
            manhattan(goal),
        );
        for strategy in Strategy::ALL {
            let outcome = Search::new().run(strategy, &space, (0, 0)).unwrap();
            let sol = outcome.solution().unwrap();
            assert_eq!(sol.state(), &goal, "{strategy}");
        }
    }

    #[test]
    fn expansion_limit_truncates() {
        let space = Informed::new(
            FnSpace::<u32, _, _>::new(|s: &u32| *s == 100, |s: &u32| vec![s + 1]),
            |_: &u32| 0.0,
        );
        let outcome = Search::with_limits(SearchLimits::expansions(5))
            .astar(&space, 0)
            .unwrap();
        assert_eq!(outcome.label(), "truncated");
        assert!(matches!(outcome, Outcome::Truncated(stats) if stats.expanded == 5));
    }
}
