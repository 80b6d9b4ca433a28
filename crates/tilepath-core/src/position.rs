//! Continuous world-space positions.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

use crate::geom::Cell;

/// A point in continuous world space.
///
/// Grid searches only look at `x` and `y`; `z` is carried along untouched so
/// callers keep their own coordinate frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    /// Origin (0, 0, 0).
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new position.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The same position with `z` replaced.
    #[inline]
    pub const fn with_z(self, z: f32) -> Self {
        Self { z, ..self }
    }

    /// The cell containing this position: `x` and `y` are floored, so a
    /// position belongs to the cell whose lower-left corner is below it.
    #[inline]
    pub fn to_cell(self) -> Cell {
        Cell::new(self.x.floor() as i32, self.y.floor() as i32)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or [`Position::ZERO`] for a
    /// zero-length vector.
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self::new(self.x / len, self.y / len, self.z / len)
        } else {
            Self::ZERO
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Position {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Position {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_cell_floors_towards_negative_infinity() {
        assert_eq!(Position::new(0.0, 0.0, 0.0).to_cell(), Cell::new(0, 0));
        assert_eq!(Position::new(2.99, 1.01, 5.0).to_cell(), Cell::new(2, 1));
        assert_eq!(Position::new(-0.25, -1.0, 0.0).to_cell(), Cell::new(-1, -1));
        assert_eq!(Position::new(-1.5, 3.0, 0.0).to_cell(), Cell::new(-2, 3));
    }

    #[test]
    fn center_round_trips_through_to_cell() {
        for c in [Cell::new(0, 0), Cell::new(-4, 9), Cell::new(12, -1)] {
            assert_eq!(c.center(1.0).to_cell(), c);
        }
    }

    #[test]
    fn vector_math() {
        let a = Position::new(1.0, 2.0, 3.0);
        let b = Position::new(4.0, 6.0, 3.0);
        assert_eq!(b - a, Position::new(3.0, 4.0, 0.0));
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.dot(b), 4.0 + 12.0 + 9.0);
        let mut c = a;
        c += b;
        assert_eq!(c, Position::new(5.0, 8.0, 6.0));
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = Position::new(3.0, 0.0, 4.0).normalized();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert_eq!(Position::ZERO.normalized(), Position::ZERO);
    }

    #[test]
    fn with_z_keeps_xy() {
        let p = Position::new(1.5, 2.5, 0.0).with_z(-3.0);
        assert_eq!(p, Position::new(1.5, 2.5, -3.0));
    }
}
