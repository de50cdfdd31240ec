//! Containers of discovered-but-unexpanded search nodes.
//!
//! The removal policy is what distinguishes one search from another:
//! [`StackFrontier`] hands back the newest node (depth-first),
//! [`QueueFrontier`] the oldest (breadth-first). Neither rejects a state
//! that is already queued; the search's explored set keeps a duplicate from
//! being expanded twice.

use std::collections::VecDeque;

use maze_core::Pos;

use crate::error::SearchError;
use crate::node::NodeId;

/// A queued node: its id and a copy of its state for membership tests.
pub type Entry = (NodeId, Pos);

/// Frontier interface used by [`Search::run`](crate::Search::run).
pub trait Frontier {
    /// Queue a node.
    fn add(&mut self, node: NodeId, state: Pos);

    /// Take the next node according to the frontier's policy.
    fn remove(&mut self) -> Result<Entry, SearchError>;

    /// Whether some queued node has the given state.
    fn contains_state(&self, state: Pos) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every queued node.
    fn clear(&mut self);
}

/// Last-in-first-out frontier.
#[derive(Debug, Clone, Default)]
pub struct StackFrontier {
    entries: Vec<Entry>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: NodeId, state: Pos) {
        self.entries.push((node, state));
    }

    fn remove(&mut self) -> Result<Entry, SearchError> {
        self.entries.pop().ok_or(SearchError::EmptyFrontier)
    }

    fn contains_state(&self, state: Pos) -> bool {
        self.entries.iter().any(|&(_, s)| s == state)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// First-in-first-out frontier.
#[derive(Debug, Clone, Default)]
pub struct QueueFrontier {
    entries: VecDeque<Entry>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: NodeId, state: Pos) {
        self.entries.push_back((node, state));
    }

    fn remove(&mut self) -> Result<Entry, SearchError> {
        self.entries.pop_front().ok_or(SearchError::EmptyFrontier)
    }

    fn contains_state(&self, state: Pos) -> bool {
        self.entries.iter().any(|&(_, s)| s == state)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeArena, SearchNode};

    fn ids(n: i32) -> (NodeArena, Vec<Entry>) {
        let mut arena = NodeArena::new();
        let entries = (0..n)
            .map(|i| {
                let p = Pos::new(0, i);
                (arena.push(SearchNode::root(p)), p)
            })
            .collect();
        (arena, entries)
    }

    #[test]
    fn stack_is_lifo() {
        let (_arena, entries) = ids(3);
        let mut f = StackFrontier::new();
        for &(id, p) in &entries {
            f.add(id, p);
        }
        assert_eq!(f.remove(), Ok(entries[2]));
        assert_eq!(f.remove(), Ok(entries[1]));
        assert_eq!(f.remove(), Ok(entries[0]));
        assert!(f.is_empty());
    }

    #[test]
    fn queue_is_fifo() {
        let (_arena, entries) = ids(3);
        let mut f = QueueFrontier::new();
        for &(id, p) in &entries {
            f.add(id, p);
        }
        assert_eq!(f.remove(), Ok(entries[0]));
        assert_eq!(f.remove(), Ok(entries[1]));
        assert_eq!(f.remove(), Ok(entries[2]));
        assert!(f.is_empty());
    }

    #[test]
    fn remove_from_empty_fails() {
        assert_eq!(StackFrontier::new().remove(), Err(SearchError::EmptyFrontier));
        assert_eq!(QueueFrontier::new().remove(), Err(SearchError::EmptyFrontier));
    }

    #[test]
    fn contains_state_tracks_queue() {
        let (_arena, entries) = ids(2);
        let mut f = StackFrontier::new();
        f.add(entries[0].0, entries[0].1);
        assert!(f.contains_state(Pos::new(0, 0)));
        assert!(!f.contains_state(Pos::new(0, 1)));
        f.remove().unwrap();
        assert!(!f.contains_state(Pos::new(0, 0)));
    }

    #[test]
    fn duplicate_states_are_kept() {
        let (_arena, entries) = ids(2);
        let mut f = QueueFrontier::new();
        f.add(entries[0].0, Pos::new(5, 5));
        f.add(entries[1].0, Pos::new(5, 5));
        assert_eq!(f.len(), 2);
        f.remove().unwrap();
        assert!(f.contains_state(Pos::new(5, 5)));
        f.clear();
        assert!(f.is_empty());
    }
}
