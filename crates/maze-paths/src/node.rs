use maze_core::{Action, Pos};

/// Index of a [`SearchNode`] inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A discovered position together with the move and predecessor that
/// produced it. The start node has neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub state: Pos,
    pub parent: Option<NodeId>,
    pub action: Option<Action>,
}

impl SearchNode {
    /// The root node of a search.
    pub fn root(state: Pos) -> Self {
        Self {
            state,
            parent: None,
            action: None,
        }
    }

    /// A node reached from `parent` by `action`.
    pub fn child(state: Pos, parent: NodeId, action: Action) -> Self {
        Self {
            state,
            parent: Some(parent),
            action: Some(action),
        }
    }
}

/// An ordered route: the moves taken from the start and the cell each move
/// lands on. The start cell itself is not part of `cells`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub actions: Vec<Action>,
    pub cells: Vec<Pos>,
}

impl Path {
    /// Number of moves.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the path has no moves (start and goal coincide).
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Last cell of the path, if any.
    pub fn end(&self) -> Option<Pos> {
        self.cells.last().copied()
    }

    /// Iterate over `(action, cell)` pairs from start to goal.
    pub fn steps(&self) -> impl Iterator<Item = (Action, Pos)> + '_ {
        self.actions.iter().copied().zip(self.cells.iter().copied())
    }
}

/// Append-only storage for search nodes. Parents are referenced by index,
/// so a node can only point at one created before it.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node and return its id.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        debug_assert!(node.parent.is_none_or(|p| p.0 < self.nodes.len()));
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Look up a node. Ids are only minted by [`push`](Self::push), so a
    /// stale id from a cleared arena is the only way to miss.
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node, keeping the allocation.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Reconstruct the route ending at `id` by walking parent links back to
    /// the root. The root's own state is excluded.
    pub fn path_to(&self, id: NodeId) -> Path {
        let mut actions = Vec::new();
        let mut cells = Vec::new();
        let mut cur = self.get(id);
        while let Some(node) = cur {
            let (Some(parent), Some(action)) = (node.parent, node.action) else {
                break;
            };
            actions.push(action);
            cells.push(node.state);
            cur = self.get(parent);
        }
        actions.reverse();
        cells.reverse();
        Path { actions, cells }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let path = Path {
            actions: vec![Action::Down, Action::Right],
            cells: vec![Pos::new(1, 0), Pos::new(1, 1)],
        };
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }
}
