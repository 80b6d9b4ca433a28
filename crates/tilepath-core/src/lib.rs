//! **tilepath-core** — coordinate types shared by the *tilepath* crates.
//!
//! The grid convention is fixed: cell `(x, y)` occupies the continuous square
//! `[x, x + 1) × [y, y + 1)` and its center is `(x + 0.5, y + 0.5)`. The `y`
//! axis grows **up**.

pub mod geom;
pub mod position;

pub use geom::{Cell, Range, RangeIter};
pub use position::Position;
