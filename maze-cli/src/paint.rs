//! Colored terminal output via crossterm.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use maze::{CellKind, Maze, cell_kinds};

/// Background color for each kind of cell.
fn kind_color(kind: CellKind) -> CtColor {
    let (r, g, b) = match kind {
        CellKind::Wall => (0x2d, 0x37, 0x48),
        CellKind::Start => (0xef, 0x44, 0x44),
        CellKind::Goal => (0x10, 0xb9, 0x81),
        CellKind::Path => (0xfb, 0xbf, 0x24),
        CellKind::Explored => (0x60, 0xa5, 0xfa),
        CellKind::Open => (0xff, 0xff, 0xff),
    };
    CtColor::Rgb { r, g, b }
}

/// Two-column label for a cell, so cells come out roughly square.
fn label(kind: CellKind) -> &'static str {
    match kind {
        CellKind::Start => "A ",
        CellKind::Goal => "B ",
        _ => "  ",
    }
}

/// Paint every cell as a colored block followed by a legend line.
pub fn paint<W: Write>(out: &mut W, maze: &Maze) -> io::Result<()> {
    let kinds = cell_kinds(maze);
    queue!(out, SetForegroundColor(CtColor::Black))?;
    for row in kinds.rows() {
        for &kind in row {
            queue!(out, SetBackgroundColor(kind_color(kind)), Print(label(kind)))?;
        }
        queue!(out, ResetColor, Print("\n"), SetForegroundColor(CtColor::Black))?;
    }
    queue!(out, ResetColor)?;

    for (kind, name) in [
        (CellKind::Start, "start"),
        (CellKind::Goal, "goal"),
        (CellKind::Path, "path"),
        (CellKind::Explored, "explored"),
    ] {
        queue!(
            out,
            SetBackgroundColor(kind_color(kind)),
            Print("  "),
            ResetColor,
            Print(format!(" {name}  "))
        )?;
    }
    queue!(out, Print("\n"))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paints_walls_and_path() {
        let mut m = Maze::parse("#####\n#A  #\n# # #\n#  B#\n#####").unwrap();
        m.solve().unwrap();
        let mut buf = Vec::new();
        paint(&mut buf, &m).unwrap();
        let s = String::from_utf8(buf).unwrap();
        // wall and path backgrounds
        assert!(s.contains("48;2;45;55;72"));
        assert!(s.contains("48;2;251;191;36"));
        assert!(s.contains("A "));
        assert!(s.contains("explored"));
        // five maze rows plus the legend
        assert_eq!(s.matches('\n').count(), 6);
    }
}
