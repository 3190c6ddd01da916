use std::hash::Hash;
use std::marker::PhantomData;

/// Minimal search interface: a goal test and successor enumeration.
pub trait Space {
    /// One configuration of the problem. Used as a key in explored sets.
    type State: Clone + Eq + Hash;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Append successors of `state` into `buf`. The caller clears `buf` before
    /// calling. Order determines which solution depth-first search finds.
    fn successors(&self, state: &Self::State, buf: &mut Vec<Self::State>);
}

/// Space with weighted edges.
///
/// The default implementation gives every successor a unit cost of `1.0`.
pub trait WeightedSpace: Space {
    /// Append `(successor, edge cost)` pairs of `state` into `buf`. The caller
    /// clears `buf` before calling. Costs must be finite and non-negative.
    fn weighted_successors(&self, state: &Self::State, buf: &mut Vec<(Self::State, f64)>) {
        let mut plain = Vec::new();
        self.successors(state, &mut plain);
        buf.extend(plain.into_iter().map(|s| (s, 1.0)));
    }
}

/// Weighted space with a heuristic, as required by A*.
pub trait InformedSpace: WeightedSpace {
    /// Estimated remaining cost from `state` to the nearest goal.
    ///
    /// Must be finite and non-negative. Must never overestimate the true
    /// remaining cost (admissible) for A* to return a cheapest path; this is
    /// not checked.
    fn estimate(&self, state: &Self::State) -> f64;
}

// ---------------------------------------------------------------------------
// Closure adapters
// ---------------------------------------------------------------------------

/// A [`Space`] built from a goal-test closure and a successor closure.
///
/// Edges have unit cost.
pub struct FnSpace<S, G, F> {
    goal_test: G,
    successors: F,
    _state: PhantomData<fn(&S)>,
}

impl<S, G, F> FnSpace<S, G, F> {
    pub fn new(goal_test: G, successors: F) -> Self {
        Self {
            goal_test,
            successors,
            _state: PhantomData,
        }
    }
}

impl<S, G, F, I> Space for FnSpace<S, G, F>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    type State = S;

    fn is_goal(&self, state: &S) -> bool {
        (self.goal_test)(state)
    }

    fn successors(&self, state: &S, buf: &mut Vec<S>) {
        buf.extend((self.successors)(state));
    }
}

impl<S, G, F, I> WeightedSpace for FnSpace<S, G, F>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
}

/// A [`WeightedSpace`] whose successor closure yields `(state, cost)` pairs.
pub struct FnWeightedSpace<S, G, F> {
    goal_test: G,
    successors: F,
    _state: PhantomData<fn(&S)>,
}

impl<S, G, F> FnWeightedSpace<S, G, F> {
    pub fn new(goal_test: G, successors: F) -> Self {
        Self {
            goal_test,
            successors,
            _state: PhantomData,
        }
    }
}

impl<S, G, F, I> Space for FnWeightedSpace<S, G, F>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> I,
    I: IntoIterator<Item = (S, f64)>,
{
    type State = S;

    fn is_goal(&self, state: &S) -> bool {
        (self.goal_test)(state)
    }

    fn successors(&self, state: &S, buf: &mut Vec<S>) {
        buf.extend((self.successors)(state).into_iter().map(|(s, _)| s));
    }
}

impl<S, G, F, I> WeightedSpace for FnWeightedSpace<S, G, F>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> I,
    I: IntoIterator<Item = (S, f64)>,
{
    fn weighted_successors(&self, state: &S, buf: &mut Vec<(S, f64)>) {
        buf.extend((self.successors)(state));
    }
}

/// Attaches a heuristic closure to any [`WeightedSpace`].
pub struct Informed<W, H> {
    space: W,
    heuristic: H,
}

impl<W, H> Informed<W, H> {
    pub fn new(space: W, heuristic: H) -> Self {
        Self { space, heuristic }
    }
}

impl<W: Space, H> Space for Informed<W, H> {
    type State = W::State;

    fn is_goal(&self, state: &W::State) -> bool {
        self.space.is_goal(state)
    }

    fn successors(&self, state: &W::State, buf: &mut Vec<W::State>) {
        self.space.successors(state, buf);
    }
}

impl<W: WeightedSpace, H> WeightedSpace for Informed<W, H> {
    fn weighted_successors(&self, state: &W::State, buf: &mut Vec<(W::State, f64)>) {
        self.space.weighted_successors(state, buf);
    }
}

impl<W, H> InformedSpace for Informed<W, H>
where
    W: WeightedSpace,
    H: Fn(&W::State) -> f64,
{
    fn estimate(&self, state: &W::State) -> f64 {
        (self.heuristic)(state)
    }
}
