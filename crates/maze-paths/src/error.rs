use std::fmt;

/// Ways a frontier search can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier ran dry before the goal was reached.
    NoSolution,
    /// A node was removed from an empty frontier.
    EmptyFrontier,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSolution => write!(f, "no solution"),
            Self::EmptyFrontier => write!(f, "empty frontier"),
        }
    }
}

impl std::error::Error for SearchError {}
