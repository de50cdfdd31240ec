use maze_paths::SearchError;
use std::fmt;

/// Errors raised while building or solving a [`Maze`](crate::Maze).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// The text did not contain exactly one `'A'`; holds the count found.
    StartCount(usize),
    /// The text did not contain exactly one `'B'`; holds the count found.
    GoalCount(usize),
    /// The search failed.
    Search(SearchError),
    /// `solve` was called on a maze that has already been solved.
    AlreadySolved,
}

impl MazeError {
    /// Whether the error was raised while parsing the maze text.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::StartCount(_) | Self::GoalCount(_))
    }

    /// Whether the search exhausted the maze without reaching the goal.
    pub fn is_no_solution(&self) -> bool {
        matches!(self, Self::Search(SearchError::NoSolution))
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartCount(n) => {
                write!(f, "maze must have exactly one start point (found {n})")
            }
            Self::GoalCount(n) => write!(f, "maze must have exactly one goal (found {n})"),
            Self::Search(e) => fmt::Display::fmt(e, f),
            Self::AlreadySolved => write!(f, "maze has already been solved"),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SearchError> for MazeError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
