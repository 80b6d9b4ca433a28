//! Grid pathfinding for agents moving continuously over a tile grid.
//!
//! - [`PriorityQueue`]: binary-heap minimum-priority queue with a
//!   caller-chosen total order.
//! - [`GridSearch`] / [`find_path`]: obstacle-aware A\* over 4-connected
//!   cells with unit step cost and a Manhattan heuristic.
//! - [`get_path`]: quantizes world positions to cells, searches, and projects
//!   the result back to a point path anchored at the agent's true position.
//!
//! Obstacles are supplied through the [`Obstacles`] trait, which any
//! `Fn(Cell) -> bool` closure implements. "No path" is an ordinary `None`.

mod astar;
mod distance;
mod projector;
mod queue;
mod traits;

pub use astar::{GridSearch, SearchLimits, find_path};
pub use distance::manhattan;
pub use projector::{cell_to_world_center, get_path, project_path, world_to_cell};
pub use queue::{NaturalOrder, PriorityQueue};
pub use traits::Obstacles;
