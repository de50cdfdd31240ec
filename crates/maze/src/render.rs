//! Cell classification and plain-text rendering of a maze.

use std::collections::HashSet;

use maze_core::{Grid, Pos};

use crate::maze::{GOAL, Maze, START};

/// Glyph drawn for wall cells.
pub const WALL_GLYPH: char = '\u{2588}';
/// Glyph drawn for cells on the solution path.
pub const PATH_GLYPH: char = '*';

/// What a cell shows once a maze has been (or failed to be) solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Wall,
    Start,
    Goal,
    /// On the solution path.
    Path,
    /// Expanded by the search but not on the path.
    Explored,
    Open,
}

impl CellKind {
    /// Text glyph. Explored cells draw as open floor.
    pub fn glyph(self) -> char {
        match self {
            CellKind::Wall => WALL_GLYPH,
            CellKind::Start => START,
            CellKind::Goal => GOAL,
            CellKind::Path => PATH_GLYPH,
            CellKind::Explored | CellKind::Open => ' ',
        }
    }
}

/// Classify every cell. Earlier kinds win: wall, start, goal, path,
/// explored, open.
pub fn cell_kinds(maze: &Maze) -> Grid<CellKind> {
    let path: HashSet<Pos> = maze
        .solution()
        .map(|s| s.cells.iter().copied().collect())
        .unwrap_or_default();
    let explored = maze.explored();

    Grid::from_fn(maze.height(), maze.width(), |p| {
        if maze.is_wall(p) {
            CellKind::Wall
        } else if p == maze.start() {
            CellKind::Start
        } else if p == maze.goal() {
            CellKind::Goal
        } else if path.contains(&p) {
            CellKind::Path
        } else if explored.contains(&p) {
            CellKind::Explored
        } else {
            CellKind::Open
        }
    })
}

/// Render one character per cell, rows joined by `'\n'`.
pub fn render_text(maze: &Maze) -> String {
    let kinds = cell_kinds(maze);
    let mut out = String::with_capacity(maze.bounds().len() * 2);
    for (i, row) in kinds.rows().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.extend(row.iter().map(|k| k.glyph()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "#####\n#A  #\n# # #\n#  B#\n#####";

    #[test]
    fn unsolved_render_shows_layout() {
        let m = Maze::parse(SMALL).unwrap();
        let text = render_text(&m);
        assert_eq!(text, "█████\n█A  █\n█ █ █\n█  B█\n█████");
    }

    #[test]
    fn solved_render_marks_path() {
        let mut m = Maze::parse(SMALL).unwrap();
        m.solve().unwrap();
        let text = render_text(&m);
        assert_eq!(text, "█████\n█A**█\n█ █*█\n█  B█\n█████");
    }

    #[test]
    fn ragged_rows_render_padded() {
        let m = Maze::parse("A#\n#  B").unwrap();
        assert_eq!(render_text(&m), "A█  \n█  B");
    }

    #[test]
    fn kinds_follow_precedence() {
        let mut m = Maze::parse(SMALL).unwrap();
        m.solve().unwrap();
        let kinds = cell_kinds(&m);
        assert_eq!(kinds.at(Pos::new(0, 0)), Some(&CellKind::Wall));
        assert_eq!(kinds.at(Pos::new(1, 1)), Some(&CellKind::Start));
        assert_eq!(kinds.at(Pos::new(3, 3)), Some(&CellKind::Goal));
        assert_eq!(kinds.at(Pos::new(1, 2)), Some(&CellKind::Path));
        assert_eq!(kinds.at(Pos::new(3, 1)), Some(&CellKind::Open));
    }

    #[test]
    fn failed_solve_marks_explored() {
        let mut m = Maze::parse("A  #B").unwrap();
        assert!(m.solve().is_err());
        let kinds = cell_kinds(&m);
        assert_eq!(kinds.at(Pos::new(0, 1)), Some(&CellKind::Explored));
        assert_eq!(kinds.at(Pos::new(0, 2)), Some(&CellKind::Explored));
        assert_eq!(render_text(&m), "A  █B");
    }
}
