use indexmap::IndexSet;
use maze_core::{Action, Pos};

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::node::{NodeArena, Path, SearchNode};
use crate::traits::Pather;

/// Exhaustive frontier search from one position to another.
///
/// `Search` owns the node arena, the explored set and a neighbor scratch
/// buffer, so repeated runs reuse their allocations. The results of the
/// last run stay readable until the next one starts.
#[derive(Debug, Default)]
pub struct Search {
    nodes: NodeArena,
    explored: IndexSet<Pos>,
    num_explored: usize,
    nbuf: Vec<(Action, Pos)>,
}

impl Search {
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            explored: IndexSet::new(),
            num_explored: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Search for `goal` starting at `start`, expanding nodes in the order
    /// `frontier` hands them out.
    ///
    /// A removed node whose state is the goal ends the search and its route
    /// is returned. Any other removal counts as one exploration: the state
    /// is marked explored and its neighbors that are neither queued nor
    /// explored are added to the frontier. An exhausted frontier yields
    /// [`SearchError::NoSolution`].
    ///
    /// The frontier is cleared before the search begins.
    pub fn run<P: Pather, F: Frontier>(
        &mut self,
        pather: &P,
        frontier: &mut F,
        start: Pos,
        goal: Pos,
    ) -> Result<Path, SearchError> {
        self.nodes.clear();
        self.explored.clear();
        self.num_explored = 0;
        frontier.clear();

        log::debug!("search: {start} -> {goal}");

        let root = self.nodes.push(SearchNode::root(start));
        frontier.add(root, start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let result = loop {
            if frontier.is_empty() {
                break Err(SearchError::NoSolution);
            }
            let (id, state) = match frontier.remove() {
                Ok(entry) => entry,
                Err(e) => break Err(e),
            };
            if state == goal {
                break Ok(self.nodes.path_to(id));
            }

            self.num_explored += 1;
            self.explored.insert(state);
            log::trace!("expand {state} (#{})", self.num_explored);

            nbuf.clear();
            pather.neighbors(state, &mut nbuf);
            for &(action, next) in nbuf.iter() {
                if frontier.contains_state(next) || self.explored.contains(&next) {
                    continue;
                }
                let child = self.nodes.push(SearchNode::child(next, id, action));
                frontier.add(child, next);
            }
        };

        self.nbuf = nbuf;

        match &result {
            Ok(path) => log::debug!(
                "search: reached goal in {} moves, {} states explored",
                path.len(),
                self.num_explored
            ),
            Err(e) => log::debug!("search: {e} after {} states explored", self.num_explored),
        }
        result
    }

    /// Positions expanded by the last run, in expansion order. The goal is
    /// never included.
    pub fn explored(&self) -> &IndexSet<Pos> {
        &self.explored
    }

    /// Move the explored set out, leaving an empty one behind.
    pub fn take_explored(&mut self) -> IndexSet<Pos> {
        std::mem::take(&mut self.explored)
    }

    /// Number of non-goal nodes removed from the frontier during the last
    /// run. A state queued twice is counted each time it is removed.
    pub fn num_explored(&self) -> usize {
        self.num_explored
    }

    /// Number of nodes created during the last run, including the root.
    pub fn nodes_created(&self) -> usize {
        self.nodes.len()
    }
}
