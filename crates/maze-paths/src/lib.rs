//! Frontier-based search over maze grids.
//!
//! A search starts from a single root node and repeatedly takes a node out
//! of a [`Frontier`], marks its state explored and queues its unseen
//! neighbors, until it removes the goal or runs out of nodes. The frontier's
//! removal policy picks the traversal:
//!
//! - [`StackFrontier`] — depth-first; finds *a* path, not necessarily the
//!   shortest
//! - [`QueueFrontier`] — breadth-first; finds a path with the fewest moves
//!
//! Nodes live in a [`NodeArena`] and link to their predecessor by index,
//! which is all [`NodeArena::path_to`] needs to rebuild the route.

mod error;
mod frontier;
mod node;
mod search;
mod traits;

pub use error::SearchError;
pub use frontier::{Entry, Frontier, QueueFrontier, StackFrontier};
pub use node::{NodeArena, NodeId, Path, SearchNode};
pub use search::Search;
pub use traits::Pather;
