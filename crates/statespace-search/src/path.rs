use crate::engine::Solution;
use crate::node::{NodeArena, NodeId};

impl<S: Clone> NodeArena<S> {
    /// States from the root to `id`, inclusive.
    ///
    /// The result has one more element than the node's depth.
    pub fn path_to(&self, id: NodeId) -> Vec<S> {
        let mut path = Vec::with_capacity(self[id].depth() as usize + 1);
        let mut cursor = Some(id);
        while let Some(ci) = cursor {
            let node = &self[ci];
            path.push(node.state().clone());
            cursor = node.parent();
        }
        path.reverse();
        path
    }
}

impl<S> NodeArena<S> {
    /// Like [`NodeArena::path_to`], but moves the states out instead of
    /// cloning them. Nodes off the path are dropped.
    pub fn into_path_to(self, id: NodeId) -> Vec<S> {
        let mut chain = Vec::with_capacity(self[id].depth() as usize + 1);
        let mut cursor = Some(id);
        while let Some(ci) = cursor {
            chain.push(ci.index());
            cursor = self[ci].parent();
        }
        let mut slots: Vec<Option<S>> = self.into_states().map(Some).collect();
        chain.iter().rev().filter_map(|&i| slots[i].take()).collect()
    }
}

impl<S: Clone> Solution<S> {
    /// States from the initial state to the goal, inclusive.
    pub fn path(&self) -> Vec<S> {
        self.arena.path_to(self.goal)
    }
}

impl<S> Solution<S> {
    /// Like [`Solution::path`], consuming the solution without cloning any
    /// state.
    pub fn into_path(self) -> Vec<S> {
        self.arena.into_path_to(self.goal)
    }
}

/// Path for an optional search result: empty when no goal was reached.
pub fn to_path<S: Clone>(solution: Option<&Solution<S>>) -> Vec<S> {
    solution.map(Solution::path).unwrap_or_default()
}
