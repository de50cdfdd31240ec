//! **maze-core** — geometry and storage shared by the maze crates.
//!
//! Provides the (row, column) [`Pos`], the four orthogonal [`Action`]s, the
//! rectangular [`Bounds`] of a maze and a flat [`Grid`] container.

pub mod geom;
pub mod grid;

pub use geom::{Action, Bounds, BoundsIter, Pos};
pub use grid::Grid;
