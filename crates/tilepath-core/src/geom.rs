//! Grid primitives: [`Cell`] and [`Range`].

use std::fmt;

use crate::position::Position;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// An integer grid coordinate. X grows right, Y grows up (world coordinates).
///
/// Cells are plain values: identity is `(x, y)` equality, which makes them
/// usable as set and map keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };
    /// One step towards +y.
    pub const UP: Self = Self { x: 0, y: 1 };
    /// One step towards -y.
    pub const DOWN: Self = Self { x: 0, y: -1 };
    /// One step towards -x.
    pub const LEFT: Self = Self { x: -1, y: 0 };
    /// One step towards +x.
    pub const RIGHT: Self = Self { x: 1, y: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `self + step`, or `None` if either coordinate leaves the `i32` range.
    #[inline]
    pub fn checked_add(self, step: Cell) -> Option<Cell> {
        Some(Self::new(
            self.x.checked_add(step.x)?,
            self.y.checked_add(step.y)?,
        ))
    }

    /// The cardinal neighbours, always in the order up, down, left, right.
    ///
    /// Neighbours that would fall outside the `i32` coordinate space are
    /// skipped, so cells on the edge of the grid have fewer than four.
    #[inline]
    pub fn neighbors_4(self) -> impl Iterator<Item = Cell> {
        [Self::UP, Self::DOWN, Self::LEFT, Self::RIGHT]
            .into_iter()
            .filter_map(move |step| self.checked_add(step))
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        matches!(
            (self.x.abs_diff(other.x), self.y.abs_diff(other.y)),
            (0, 1) | (1, 0)
        )
    }

    /// The geometric center of the cell, `(x + 0.5, y + 0.5)`, at height `z`.
    #[inline]
    pub fn center(self, z: f32) -> Position {
        Position::new(self.x as f32 + 0.5, self.y as f32 + 0.5, z)
    }
}

// --- trait impls for Cell ---

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}


// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle of cells \[min, max). `min` is inclusive, `max` is
/// exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Cell,
    pub max: Cell,
}

impl Range {
    /// Create a new range from two corners and auto-canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Cell::new(x0.min(x1), y0.min(y1)),
            max: Cell::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Width of the range.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the range.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `c` is inside the half-open range.
    #[inline]
    pub fn contains(self, c: Cell) -> bool {
        c.x >= self.min.x && c.x < self.max.x && c.y >= self.min.y && c.y < self.max.y
    }

    /// Flat row-major index of `c` relative to `min`, or `None` outside.
    #[inline]
    pub fn index(self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        let x = (c.x - self.min.x) as usize;
        let y = (c.y - self.min.y) as usize;
        Some(y * self.width() as usize + x)
    }

    /// Row-major iterator over every cell in the range, lowest `y` first.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Cell,
}

impl Iterator for RangeIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let c = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn neighbors_are_up_down_left_right() {
        let n: Vec<Cell> = Cell::new(5, 5).neighbors_4().collect();
        assert_eq!(
            n,
            vec![
                Cell::new(5, 6),
                Cell::new(5, 4),
                Cell::new(4, 5),
                Cell::new(6, 5),
            ]
        );
        assert!(n.iter().all(|&c| c.is_adjacent(Cell::new(5, 5))));
    }

    #[test]
    fn neighbors_stop_at_the_edge_of_the_coordinate_space() {
        let corner = Cell::new(i32::MAX, i32::MIN);
        let n: Vec<Cell> = corner.neighbors_4().collect();
        assert_eq!(
            n,
            vec![Cell::new(i32::MAX, i32::MIN + 1), Cell::new(i32::MAX - 1, i32::MIN)]
        );
        assert_eq!(Cell::new(i32::MIN, 0).checked_add(Cell::LEFT), None);
        assert_eq!(Cell::new(0, i32::MAX).checked_add(Cell::UP), None);
    }

    #[test]
    fn adjacency_rejects_diagonals_and_self() {
        let c = Cell::new(0, 0);
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Cell::new(1, 1)));
        assert!(!c.is_adjacent(Cell::new(2, 0)));
        assert!(!Cell::new(i32::MIN, 0).is_adjacent(Cell::new(i32::MAX, 0)));
        assert!(Cell::new(i32::MAX, 0).is_adjacent(Cell::new(i32::MAX, 1)));
    }

    #[test]
    fn center_is_offset_by_half() {
        let p = Cell::new(-2, 3).center(7.0);
        assert_eq!(p, Position::new(-1.5, 3.5, 7.0));
    }

    #[test]
    fn cells_work_as_set_keys() {
        let mut set = HashSet::new();
        set.insert(Cell::new(1, 1));
        assert!(set.contains(&Cell::new(1, 1)));
        assert!(!set.contains(&Cell::new(1, 2)));
    }

    #[test]
    fn range_basics() {
        let r = Range::new(0, 0, 3, 2);
        assert_eq!((r.width(), r.height()), (3, 2));
        assert_eq!(r.len(), 6);
        assert!(!r.is_empty());
        assert!(r.contains(Cell::new(0, 0)));
        assert!(r.contains(Cell::new(2, 1)));
        assert!(!r.contains(Cell::new(3, 0)));
        assert!(!r.contains(Cell::new(0, 2)));
    }

    #[test]
    fn range_auto_canonicalize() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, Cell::new(0, 0));
        assert_eq!(r.max, Cell::new(3, 2));
    }

    #[test]
    fn range_index_matches_iter_order() {
        let r = Range::new(-1, -1, 2, 1);
        for (i, c) in r.iter().enumerate() {
            assert_eq!(r.index(c), Some(i));
        }
        assert_eq!(r.index(Cell::new(2, 0)), None);
    }

    #[test]
    fn range_iter_count() {
        let r = Range::new(0, 0, 3, 2);
        let cells: Vec<_> = r.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[5], Cell::new(2, 1));
    }

    #[test]
    fn empty_range_iter() {
        let r = Range::new(0, 0, 0, 0);
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 0);
    }
}
