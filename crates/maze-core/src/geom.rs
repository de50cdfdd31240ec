//! Geometry primitives: [`Pos`], [`Action`] and [`Bounds`].
//!
//! Positions are addressed as (row, column) with rows growing down, the way
//! a maze reads on the page.

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A grid cell, identified by its row and column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The position one move away in direction `action`.
    ///
    /// The result is not bounds-checked.
    #[inline]
    pub const fn step(self, action: Action) -> Self {
        let (drow, dcol) = action.delta();
        self.shift(drow, dcol)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// A single orthogonal move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Every move, in the order neighbors are generated: up, down, left, right.
    ///
    /// Search results depend on this order.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// (drow, dcol) offset of the move.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }

    /// Lowercase label: `"up"`, `"down"`, `"left"` or `"right"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The half-open rectangle `[0, height) × [0, width)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub height: i32,
    pub width: i32,
}

impl Bounds {
    /// Create new bounds. Negative dimensions are clamped to zero.
    #[inline]
    pub fn new(height: i32, width: i32) -> Self {
        Self {
            height: height.max(0),
            width: width.max(0),
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.height as usize) * (self.width as usize)
    }

    /// Whether the bounds contain no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.height <= 0 || self.width <= 0
    }

    /// Whether `p` lies inside the bounds.
    #[inline]
    pub fn contains(self, p: Pos) -> bool {
        p.row >= 0 && p.row < self.height && p.col >= 0 && p.col < self.width
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.width as usize + p.col as usize)
    }

    /// Row-major iterator over every position.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: Pos::ZERO,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Pos;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// Row-major iterator over the positions of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Pos,
}

impl Iterator for BoundsIter {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.height {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.bounds.width {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.height {
            return (0, Some(0));
        }
        let w = self.bounds.width as usize;
        let remaining_in_row = (self.bounds.width - self.cur.col) as usize;
        let remaining_rows = (self.bounds.height - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_ordering_is_row_major() {
        let mut v = vec![Pos::new(1, 0), Pos::new(0, 2), Pos::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Pos::new(0, 1), Pos::new(0, 2), Pos::new(1, 0)]);
    }

    #[test]
    fn pos_display() {
        assert_eq!(Pos::new(3, 4).to_string(), "(3, 4)");
    }

    #[test]
    fn step_follows_action_delta() {
        let p = Pos::new(2, 2);
        assert_eq!(p.step(Action::Up), Pos::new(1, 2));
        assert_eq!(p.step(Action::Down), Pos::new(3, 2));
        assert_eq!(p.step(Action::Left), Pos::new(2, 1));
        assert_eq!(p.step(Action::Right), Pos::new(2, 3));
    }

    #[test]
    fn action_order_and_labels() {
        let labels: Vec<_> = Action::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(labels, ["up", "down", "left", "right"]);
        assert_eq!(Action::Left.to_string(), "left");
    }

    #[test]
    fn bounds_contains() {
        let b = Bounds::new(2, 3);
        assert!(b.contains(Pos::new(0, 0)));
        assert!(b.contains(Pos::new(1, 2)));
        assert!(!b.contains(Pos::new(2, 0)));
        assert!(!b.contains(Pos::new(0, 3)));
        assert!(!b.contains(Pos::new(-1, 0)));
        assert!(!b.contains(Pos::new(0, -1)));
    }

    #[test]
    fn bounds_index() {
        let b = Bounds::new(2, 3);
        assert_eq!(b.index(Pos::new(0, 0)), Some(0));
        assert_eq!(b.index(Pos::new(1, 2)), Some(5));
        assert_eq!(b.index(Pos::new(2, 2)), None);
    }

    #[test]
    fn bounds_iter_row_major() {
        let b = Bounds::new(2, 3);
        let it = b.iter();
        assert_eq!(it.len(), 6);
        let pts: Vec<_> = it.collect();
        assert_eq!(pts[0], Pos::new(0, 0));
        assert_eq!(pts[3], Pos::new(1, 0));
        assert_eq!(pts[5], Pos::new(1, 2));
    }

    #[test]
    fn empty_bounds_iter() {
        let b = Bounds::new(0, 4);
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert_eq!(b.iter().count(), 0);
        assert_eq!(Bounds::new(-3, 2), Bounds::new(0, 2));
    }
}
