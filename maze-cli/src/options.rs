//! Command-line options.
//! `maze-solve <FILE> [-s dfs|bfs] [-f text|color|json]`

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, Command};
use maze::Strategy;

/// How the result is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Plain glyphs and a summary line.
    #[default]
    Text,
    /// Colored cells painted with crossterm.
    Color,
    /// A JSON report.
    Json,
}

fn make_options_parser() -> Command {
    Command::new("maze-solve")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solve a text maze: 'A' start, 'B' goal, ' ' floor, anything else wall")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("Path to the maze text file")
                .required(true),
        )
        .arg(
            Arg::new("strategy")
                .short('s')
                .long("strategy")
                .help("Frontier policy")
                .default_value("dfs")
                .value_parser(["dfs", "bfs"]),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format")
                .default_value("text")
                .value_parser(["text", "color", "json"]),
        )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub path: PathBuf,
    pub strategy: Strategy,
    pub format: Format,
}

impl Options {
    /// Parse options from a full argument list, binary name first.
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(args)?;

        let path = matches
            .get_one::<String>("file")
            .map(PathBuf::from)
            .unwrap_or_default();
        let strategy = matches
            .get_one::<String>("strategy")
            .and_then(|s| Strategy::from_name(s))
            .unwrap_or_default();
        let format = match matches.get_one::<String>("format").map(String::as_str) {
            Some("color") => Format::Color,
            Some("json") => Format::Json,
            _ => Format::Text,
        };

        Ok(Options {
            path,
            strategy,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = Options::parse_from_args(["maze-solve", "maze.txt"]).unwrap();
        assert_eq!(o.path, PathBuf::from("maze.txt"));
        assert_eq!(o.strategy, Strategy::DepthFirst);
        assert_eq!(o.format, Format::Text);
    }

    #[test]
    fn explicit_flags() {
        let o = Options::parse_from_args(["maze-solve", "-s", "bfs", "--format", "json", "m.txt"])
            .unwrap();
        assert_eq!(o.strategy, Strategy::BreadthFirst);
        assert_eq!(o.format, Format::Json);
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(Options::parse_from_args(["maze-solve", "-s", "astar", "m.txt"]).is_err());
    }

    #[test]
    fn file_is_required() {
        assert!(Options::parse_from_args(["maze-solve"]).is_err());
    }
}
