use maze_core::{Action, Pos};

/// Minimal search interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the passable neighbors of `p`, each tagged with the move that
    /// reaches it, into `buf`. The caller clears `buf` before calling.
    ///
    /// The order of appended neighbors decides which path a search finds.
    fn neighbors(&self, p: Pos, buf: &mut Vec<(Action, Pos)>);
}
