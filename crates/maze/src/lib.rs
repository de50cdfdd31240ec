//! Text mazes: parse, solve, render.
//!
//! A maze is written one row per line. `'A'` marks the start and `'B'` the
//! goal (exactly one of each), a space is open floor and any other
//! character is a wall. Lines shorter than the longest one are padded with
//! open floor.
//!
//! ```
//! use maze::{Maze, render_text};
//!
//! let mut m = Maze::parse("#####\n#A  #\n# # #\n#  B#\n#####").unwrap();
//! m.solve().unwrap();
//! assert_eq!(m.solution().unwrap().end(), Some(m.goal()));
//! println!("{}", render_text(&m));
//! ```

pub mod error;
pub mod maze;
pub mod render;

pub use error::MazeError;
pub use maze::{GOAL, Maze, OPEN, START, SolveState, Strategy};
pub use maze_core::{Action, Bounds, Grid, Pos};
pub use maze_paths::{Path, SearchError};
pub use render::{CellKind, cell_kinds, render_text};
