//! Bridges continuous world positions and grid searches.

use tilepath_core::{Cell, Position};

use crate::astar::{GridSearch, SearchLimits};
use crate::traits::Obstacles;

/// The cell containing `position` (`x` and `y` floored).
#[inline]
pub fn world_to_cell(position: Position) -> Cell {
    position.to_cell()
}

/// The center of `cell` at height `z`.
#[inline]
pub fn cell_to_world_center(cell: Cell, z: f32) -> Position {
    cell.center(z)
}

/// Turn a cell path into a movement-ready point path for an agent standing
/// at `origin`.
///
/// Every cell maps to its center at `origin.z`. The first point is always
/// the center of the origin's own cell; if the agent already stands past it
/// in the direction of the second point, that point is dropped so the agent
/// does not step back before moving on.
pub fn project_path(cells: &[Cell], origin: Position) -> Vec<Position> {
    let mut points: Vec<Position> = cells.iter().map(|&c| c.center(origin.z)).collect();
    if points.len() >= 2 {
        let ahead = (origin - points[0]).dot(points[1] - points[0]);
        if ahead > 0.0 {
            points.remove(0);
        }
    }
    points
}

impl GridSearch {
    /// Shortest point path from the world position `origin` to the world
    /// position `target`, or `None` if the target cell cannot be reached.
    ///
    /// Only `x` and `y` are searched; every point carries `origin.z`.
    pub fn get_path<O: Obstacles + ?Sized>(
        &mut self,
        obstacles: &O,
        origin: Position,
        target: Position,
    ) -> Option<Vec<Position>> {
        self.get_path_with_limits(obstacles, origin, target, SearchLimits::UNBOUNDED)
    }

    /// [`get_path`](Self::get_path) with a bounded search.
    pub fn get_path_with_limits<O: Obstacles + ?Sized>(
        &mut self,
        obstacles: &O,
        origin: Position,
        target: Position,
        limits: SearchLimits,
    ) -> Option<Vec<Position>> {
        let cells = self.find_path_with_limits(
            obstacles,
            world_to_cell(origin),
            world_to_cell(target),
            limits,
        )?;
        Some(project_path(&cells, origin))
    }
}

/// [`GridSearch::get_path`] with a fresh search context.
pub fn get_path<O: Obstacles + ?Sized>(
    obstacles: &O,
    origin: Position,
    target: Position,
) -> Option<Vec<Position>> {
    GridSearch::new().get_path(obstacles, origin, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(_: Cell) -> bool {
        false
    }

    #[test]
    fn conversions() {
        assert_eq!(world_to_cell(Position::new(1.7, -0.2, 9.0)), Cell::new(1, -1));
        assert_eq!(
            cell_to_world_center(Cell::new(1, -1), 9.0),
            Position::new(1.5, -0.5, 9.0)
        );
    }

    #[test]
    fn drops_first_point_when_already_past_it() {
        // Standing at x = 0.8 in cell (0, 0), heading right.
        let origin = Position::new(0.8, 0.5, 0.0);
        let path = get_path(&open, origin, Position::new(2.5, 0.5, 0.0)).unwrap();
        assert_eq!(
            path,
            vec![Position::new(1.5, 0.5, 0.0), Position::new(2.5, 0.5, 0.0)]
        );
    }

    #[test]
    fn keeps_first_point_when_behind_it() {
        let origin = Position::new(0.2, 0.5, 0.0);
        let path = get_path(&open, origin, Position::new(2.5, 0.5, 0.0)).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], Position::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn keeps_first_point_when_exactly_on_center() {
        let origin = Position::new(0.5, 0.5, 0.0);
        let path = get_path(&open, origin, Position::new(0.5, 2.5, 0.0)).unwrap();
        assert_eq!(path[0], origin);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn carries_origin_z() {
        let origin = Position::new(0.5, 0.5, -4.0);
        let target = Position::new(1.5, 0.5, 100.0);
        let path = get_path(&open, origin, target).unwrap();
        assert!(path.iter().all(|p| p.z == -4.0));
    }

    #[test]
    fn same_cell_yields_single_center() {
        let origin = Position::new(3.9, 3.1, 1.0);
        let path = get_path(&open, origin, Position::new(3.2, 3.8, 1.0)).unwrap();
        assert_eq!(path, vec![Position::new(3.5, 3.5, 1.0)]);
    }

    #[test]
    fn unreachable_target_is_none() {
        let blocked = |c: Cell| c == Cell::new(4, 4);
        assert_eq!(
            get_path(&blocked, Position::ZERO, Position::new(4.5, 4.5, 0.0)),
            None
        );
    }

    #[test]
    fn project_path_on_empty_input() {
        assert!(project_path(&[], Position::ZERO).is_empty());
    }
}
