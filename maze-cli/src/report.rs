//! JSON report of a solved maze.

use maze::{Action, Maze, Pos, Strategy};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub height: i32,
    pub width: i32,
    pub strategy: Strategy,
    pub start: Pos,
    pub goal: Pos,
    pub num_explored: usize,
    pub actions: &'a [Action],
    pub cells: &'a [Pos],
    pub explored: Vec<Pos>,
}

impl<'a> Report<'a> {
    pub fn new(maze: &'a Maze, strategy: Strategy) -> Self {
        let (actions, cells) = match maze.solution() {
            Some(path) => (path.actions.as_slice(), path.cells.as_slice()),
            None => (&[][..], &[][..]),
        };
        Self {
            height: maze.height(),
            width: maze.width(),
            strategy,
            start: maze.start(),
            goal: maze.goal(),
            num_explored: maze.num_explored(),
            actions,
            cells,
            explored: maze.explored().iter().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_maze_report() {
        let mut m = Maze::parse("AB").unwrap();
        m.solve().unwrap();
        let json = serde_json::to_value(Report::new(&m, Strategy::DepthFirst)).unwrap();
        assert_eq!(json["actions"], serde_json::json!(["right"]));
        assert_eq!(json["cells"], serde_json::json!([{"row": 0, "col": 1}]));
        assert_eq!(json["num_explored"], 1);
        assert_eq!(json["strategy"], "depth-first");
        assert_eq!(json["explored"], serde_json::json!([{"row": 0, "col": 0}]));
    }
}
