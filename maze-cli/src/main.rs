//! `maze-solve` — solve a text maze from the command line.
//!
//! Run: cargo run -- demos/maze2.txt --format color
//!
//! Set `MAZE_LOG=debug` to see search diagnostics on stderr.

mod options;
mod paint;
mod report;

use std::error::Error;
use std::fs;
use std::io::{self, Write};

use maze::{Maze, render_text};

use options::{Format, Options};
use report::Report;

fn run(options: &Options) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(&options.path)
        .map_err(|e| format!("cannot read {}: {e}", options.path.display()))?;
    let mut maze = Maze::parse(&text)?;
    maze.solve_with(options.strategy)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match options.format {
        Format::Text => {
            writeln!(out, "{}", render_text(&maze))?;
            if let Some(path) = maze.solution() {
                writeln!(out, "Moves: {}", path.len())?;
            }
            writeln!(out, "States explored: {}", maze.num_explored())?;
        }
        Format::Color => {
            paint::paint(&mut out, &maze)?;
            writeln!(out, "States explored: {}", maze.num_explored())?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &Report::new(&maze, options.strategy))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn main() {
    if std::env::var("MAZE_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MAZE_LOG")
            .write_style("MAZE_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let options = match Options::parse_from_args(std::env::args_os()) {
        Ok(o) => o,
        Err(e) => e.exit(),
    };
    log::debug!("options: {options:?}");

    if let Err(e) = run(&options) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
