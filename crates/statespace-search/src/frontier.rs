//! Pending-node containers with the three pop disciplines.
//!
//! - [`Stack`]: last in, first out. Drives depth-first search.
//! - [`Queue`]: first in, first out. Drives breadth-first search.
//! - [`PriorityQueue`]: smallest first. Drives A* over [`Ranked`] entries.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use crate::node::NodeId;

/// Ordered container of pending entries.
///
/// `push` and `pop` are the only mutating operations. `pop` returns `None`
/// when the container is empty.
pub trait Frontier<T> {
    fn push(&mut self, item: T);

    fn pop(&mut self) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which uninformed frontier a search uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Discipline {
    /// Stack order (depth-first).
    Lifo,
    /// Queue order (breadth-first).
    Fifo,
}

// ---------------------------------------------------------------------------
// Stack
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

// ---------------------------------------------------------------------------
// Queue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

// ---------------------------------------------------------------------------
// PriorityQueue
// ---------------------------------------------------------------------------

/// Min-first priority queue.
///
/// `BinaryHeap` is a max-heap, so entries are wrapped in `Reverse`.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Frontier<T> for PriorityQueue<T> {
    fn push(&mut self, item: T) {
        self.heap.push(Reverse(item));
    }

    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(item)| item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// A* frontier entry: a node handle keyed by `cost + heuristic`.
///
/// Ordering is `(score, seq)`: lower score first, then older insertion.
/// Scores are compared with [`f64::total_cmp`].
#[derive(Debug, Clone, Copy)]
pub struct Ranked {
    pub score: f64,
    pub seq: u64,
    pub id: NodeId,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then(self.seq.cmp(&other.seq))
    }
}
