//! The maze: a wall map with one start and one goal, parsed from text and
//! solved in place.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use maze_core::{Action, Bounds, Grid, Pos};
use maze_paths::{Path, Pather, QueueFrontier, Search, StackFrontier};

use crate::error::MazeError;

/// Character marking the start cell.
pub const START: char = 'A';
/// Character marking the goal cell.
pub const GOAL: char = 'B';
/// Character marking open floor. Every other character is a wall.
pub const OPEN: char = ' ';

/// Frontier policy used by [`Maze::solve_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Stack order: expand the most recently discovered cell first.
    #[default]
    DepthFirst,
    /// Queue order: expand the earliest discovered cell first.
    BreadthFirst,
}

impl Strategy {
    /// Short name, `"dfs"` or `"bfs"`.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
        }
    }

    /// Look a strategy up by its short name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "dfs" => Some(Strategy::DepthFirst),
            "bfs" => Some(Strategy::BreadthFirst),
            _ => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a maze is in its single-use lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SolveState {
    /// Freshly parsed; `solve` has not been called.
    #[default]
    Unsolved,
    /// A path to the goal was found.
    Solved,
    /// The search exhausted every reachable cell.
    Unsolvable,
}

/// A parsed maze and, once solved, the search results.
#[derive(Debug, Clone)]
pub struct Maze {
    walls: Grid<bool>,
    start: Pos,
    goal: Pos,
    state: SolveState,
    explored: IndexSet<Pos>,
    num_explored: usize,
    solution: Option<Path>,
}

impl Maze {
    /// Parse a maze from text.
    ///
    /// The text must hold exactly one [`START`] and exactly one [`GOAL`].
    /// Height is the number of lines and width the length of the longest
    /// one; shorter lines are padded with open floor.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let starts = text.matches(START).count();
        if starts != 1 {
            return Err(MazeError::StartCount(starts));
        }
        let goals = text.matches(GOAL).count();
        if goals != 1 {
            return Err(MazeError::GoalCount(goals));
        }

        let lines: Vec<Vec<char>> = split_lines(text)
            .into_iter()
            .map(|l| l.chars().collect())
            .collect();
        let height = lines.len() as i32;
        let width = lines.iter().map(Vec::len).max().unwrap_or(0) as i32;

        let mut start = None;
        let mut goal = None;
        let walls = Grid::from_fn(height, width, |p| {
            match lines[p.row as usize].get(p.col as usize) {
                Some(&START) => {
                    start = Some(p);
                    false
                }
                Some(&GOAL) => {
                    goal = Some(p);
                    false
                }
                Some(&OPEN) | None => false,
                Some(_) => true,
            }
        });

        // Both markers were counted above, so each sits on some line.
        let start = start.ok_or(MazeError::StartCount(0))?;
        let goal = goal.ok_or(MazeError::GoalCount(0))?;

        log::debug!("parsed {height}x{width} maze, start {start}, goal {goal}");

        Ok(Self {
            walls,
            start,
            goal,
            state: SolveState::Unsolved,
            explored: IndexSet::new(),
            num_explored: 0,
            solution: None,
        })
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.walls.height()
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.walls.width()
    }

    pub fn bounds(&self) -> Bounds {
        self.walls.bounds()
    }

    /// The wall map; `true` marks an impassable cell.
    pub fn walls(&self) -> &Grid<bool> {
        &self.walls
    }

    /// Whether `p` is a wall. Positions outside the maze count as walls.
    pub fn is_wall(&self, p: Pos) -> bool {
        self.walls.at(p).copied().unwrap_or(true)
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    pub fn state(&self) -> SolveState {
        self.state
    }

    /// Cells expanded by the search, in expansion order. Empty until
    /// `solve` has run; kept after a failed solve too.
    pub fn explored(&self) -> &IndexSet<Pos> {
        &self.explored
    }

    /// Number of cells the search expanded. Taking the goal off the
    /// frontier is not counted, so an adjacent goal reports 1.
    pub fn num_explored(&self) -> usize {
        self.num_explored
    }

    /// The path found by `solve`, excluding the start cell.
    pub fn solution(&self) -> Option<&Path> {
        self.solution.as_ref()
    }

    /// Passable orthogonal neighbors of `p`, in up, down, left, right order.
    pub fn neighbors(&self, p: Pos) -> Vec<(Action, Pos)> {
        let mut buf = Vec::with_capacity(4);
        Pather::neighbors(self, p, &mut buf);
        buf
    }

    /// Solve depth-first. See [`solve_with`](Self::solve_with).
    pub fn solve(&mut self) -> Result<(), MazeError> {
        self.solve_with(Strategy::DepthFirst)
    }

    /// Search from start to goal, recording the explored cells and, on
    /// success, the solution.
    ///
    /// A maze can be solved once. Any later call returns
    /// [`MazeError::AlreadySolved`] and changes nothing.
    pub fn solve_with(&mut self, strategy: Strategy) -> Result<(), MazeError> {
        if self.state != SolveState::Unsolved {
            return Err(MazeError::AlreadySolved);
        }

        log::debug!("solving {}x{} maze ({strategy})", self.height(), self.width());

        let mut search = Search::new();
        let result = match strategy {
            Strategy::DepthFirst => {
                search.run(&*self, &mut StackFrontier::new(), self.start, self.goal)
            }
            Strategy::BreadthFirst => {
                search.run(&*self, &mut QueueFrontier::new(), self.start, self.goal)
            }
        };

        self.num_explored = search.num_explored();
        self.explored = search.take_explored();

        match result {
            Ok(path) => {
                self.solution = Some(path);
                self.state = SolveState::Solved;
                Ok(())
            }
            Err(e) => {
                self.state = SolveState::Unsolvable;
                Err(e.into())
            }
        }
    }
}

/// Characters that end a line: `\n`, `\r`, vertical tab, form feed, the
/// file/group/record separators, NEL and the Unicode line and paragraph
/// separators.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

fn is_line_break(c: char) -> bool {
    LINE_BREAKS.contains(&c)
}

/// Split `text` into lines on any of [`LINE_BREAKS`], treating
/// `\r\n` as one break. A break at the very end does not start a new line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let Some(i) = rest.find(is_line_break) else {
            lines.push(rest);
            break;
        };
        lines.push(&rest[..i]);
        let tail = &rest[i..];
        let sep = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[sep..];
    }
    lines
}

impl Pather for Maze {
    fn neighbors(&self, p: Pos, buf: &mut Vec<(Action, Pos)>) {
        for action in Action::ALL {
            let n = p.step(action);
            if !self.is_wall(n) {
                buf.push((action, n));
            }
        }
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn strategy_round_trip() {
        let json = serde_json::to_string(&Strategy::BreadthFirst).unwrap();
        assert_eq!(json, "\"breadth-first\"");
        let back: Strategy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Strategy::BreadthFirst);
    }
}
