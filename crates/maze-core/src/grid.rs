//! A flat, row-major grid for map representation.
//!
//! [`Grid`] owns its cells outright. A maze's wall map is a `Grid<bool>`
//! where `true` marks an impassable cell.

use crate::geom::{Bounds, Pos};

/// A 2D grid of `T` values stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    bounds: Bounds,
}

impl<T: Clone> Grid<T> {
    /// Create a new grid with every cell set to `fill`.
    pub fn new(height: i32, width: i32, fill: T) -> Self {
        let bounds = Bounds::new(height, width);
        Self {
            cells: vec![fill; bounds.len()],
            bounds,
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid by calling `f` once per position, in row-major order.
    pub fn from_fn(height: i32, width: i32, mut f: impl FnMut(Pos) -> T) -> Self {
        let bounds = Bounds::new(height, width);
        let cells = bounds.iter().map(&mut f).collect();
        Self { cells, bounds }
    }

    /// Returns the bounding rectangle.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    /// Whether the grid contains the given position.
    pub fn contains(&self, p: Pos) -> bool {
        self.bounds.contains(p)
    }

    /// Get the cell at a position, or `None` if out of bounds.
    pub fn at(&self, p: Pos) -> Option<&T> {
        self.bounds.index(p).map(|i| &self.cells[i])
    }

    /// Set the cell at a position. Returns `false` (and does nothing) if
    /// the position is out of bounds.
    pub fn set(&mut self, p: Pos, value: T) -> bool {
        match self.bounds.index(p) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Iterate over the rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() panics on a zero chunk size.
        let w = (self.bounds.width as usize).max(1);
        self.cells.chunks(w)
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Pos, &T) -> bool) -> usize {
        self.iter().filter(|(p, c)| f(*p, c)).count()
    }

    /// Iterate over `(Pos, &T)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> {
        self.bounds.iter().zip(self.cells.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_size() {
        let g = Grid::new(5, 10, false);
        assert_eq!(g.height(), 5);
        assert_eq!(g.width(), 10);
        assert_eq!(g.bounds().len(), 50);
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(4, 4, 0);
        let p = Pos::new(3, 2);
        assert!(g.set(p, 42));
        assert_eq!(g.at(p), Some(&42));
        assert_eq!(g.at(Pos::new(0, 0)), Some(&0));
        assert_eq!(g.at(Pos::new(10, 10)), None);
        assert!(!g.set(Pos::new(-1, 0), 7));
    }

    #[test]
    fn from_fn_is_row_major() {
        let g = Grid::from_fn(2, 3, |p| p.row * 10 + p.col);
        let rows: Vec<Vec<i32>> = g.rows().map(|r| r.to_vec()).collect();
        assert_eq!(rows, vec![vec![0, 1, 2], vec![10, 11, 12]]);
    }

    #[test]
    fn count_walls() {
        let mut g = Grid::new(3, 3, true);
        g.set(Pos::new(1, 1), false);
        assert_eq!(g.count_fn(|_, &w| w), 8);
        assert_eq!(g.count_fn(|p, _| p.row == 0), 3);
    }

    #[test]
    fn iter_pairs() {
        let mut g = Grid::new(2, 3, 'x');
        g.set(Pos::new(0, 1), 'y');
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (Pos::new(0, 1), &'y'));
    }
}
