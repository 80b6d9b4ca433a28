//! Click-to-move controller.

use tilepath_core::Position;
use tilepath_paths::{GridSearch, Obstacles, SearchLimits};

use crate::follower::{FollowStatus, FollowerConfig, PathFollower};

/// An agent that walks to requested world positions around obstacles.
///
/// The agent owns its position, a [`PathFollower`] and a reusable
/// [`GridSearch`]. [`move_to`](Self::move_to) plans a path from the current
/// position; [`update`](Self::update) advances along it.
#[derive(Debug)]
pub struct Agent {
    position: Position,
    follower: PathFollower,
    search: GridSearch,
    limits: SearchLimits,
}

impl Agent {
    /// Create an idle agent at `position`.
    pub fn new(position: Position, config: FollowerConfig) -> Self {
        Self {
            position,
            follower: PathFollower::new(config),
            search: GridSearch::new(),
            limits: SearchLimits::UNBOUNDED,
        }
    }

    /// Bound every search this agent runs.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Teleport to `position`, abandoning any path.
    pub fn set_position(&mut self, position: Position) {
        self.follower.stop_following_path();
        self.position = position;
    }

    /// The underlying follower.
    pub fn follower(&self) -> &PathFollower {
        &self.follower
    }

    /// Whether the agent is walking a path.
    pub fn is_moving(&self) -> bool {
        self.follower.is_following_path()
    }

    /// Plan a path to `target` and start walking it.
    ///
    /// The target's `z` is ignored; the agent stays in its own plane. If no
    /// path exists the agent stops where it is and `false` is returned.
    pub fn move_to<O: Obstacles + ?Sized>(&mut self, obstacles: &O, target: Position) -> bool {
        let target = target.with_z(self.position.z);
        let path = self
            .search
            .get_path_with_limits(obstacles, self.position, target, self.limits);
        if path.is_none() {
            log::debug!("no path from {} to {}", self.position, target);
        }
        let found = path.is_some();
        self.follower.start_following_path(path);
        found
    }

    /// Stop walking.
    pub fn stop(&mut self) {
        self.follower.stop_following_path();
    }

    /// Advance along the current path by `elapsed` seconds.
    pub fn update(&mut self, elapsed: f32) -> FollowStatus {
        self.follower.tick(&mut self.position, elapsed)
    }
}
