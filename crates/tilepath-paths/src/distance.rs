use tilepath_core::Cell;

/// Manhattan (L1) distance between two cells.
///
/// Admissible and consistent for 4-connected grids with unit step cost.
/// Exact for any pair of cells, including opposite corners of the `i32`
/// coordinate space.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> u64 {
    u64::from(a.x.abs_diff(b.x)) + u64::from(a.y.abs_diff(b.y))
}
