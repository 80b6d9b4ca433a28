//! Constant-speed waypoint follower.
//!
//! The follower is either idle (no path) or following a path with a cursor
//! on the next waypoint to reach. Each [`tick`](PathFollower::tick) spends
//! `speed * elapsed` units of distance: every waypoint that fits in the
//! budget is reached exactly, in order, and whatever is left moves the
//! position in a straight line towards the next one.

use tilepath_core::Position;

/// Configuration for path following.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FollowerConfig {
    /// Travel speed in world units per second.
    pub speed: f32,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self { speed: 5.0 }
    }
}

/// Result of a single [`PathFollower::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowStatus {
    /// No path was being followed; nothing moved.
    Idle,
    /// Still following after this tick.
    Moving,
    /// The last waypoint was reached during this tick; the follower is now
    /// idle.
    Arrived,
}

/// Follows a sequence of points at constant speed.
#[derive(Clone, Debug, Default)]
pub struct PathFollower {
    config: FollowerConfig,
    /// `None` while idle.
    path: Option<Vec<Position>>,
    /// Next waypoint to reach. Always `<= path.len()` while following.
    index: usize,
}

impl PathFollower {
    /// Create an idle follower.
    pub fn new(config: FollowerConfig) -> Self {
        Self {
            config,
            path: None,
            index: 0,
        }
    }

    /// Travel speed in world units per second.
    pub fn speed(&self) -> f32 {
        self.config.speed
    }

    /// Change the travel speed; takes effect on the next tick.
    pub fn set_speed(&mut self, speed: f32) {
        self.config.speed = speed;
    }

    /// Start following `path` from its first point, replacing any current
    /// path. `None` is the same as [`stop_following_path`](Self::stop_following_path).
    ///
    /// An empty path is accepted and completes on the next tick.
    pub fn start_following_path(&mut self, path: Option<Vec<Position>>) {
        match path {
            Some(points) => {
                log::debug!("following path of {} points", points.len());
                self.path = Some(points);
                self.index = 0;
            }
            None => self.stop_following_path(),
        }
    }

    /// Stop following, discarding progress. Does nothing when idle.
    pub fn stop_following_path(&mut self) {
        if self.path.take().is_some() {
            log::debug!("stopped following path at waypoint {}", self.index);
        }
        self.index = 0;
    }

    /// Whether a path is being followed.
    pub fn is_following_path(&self) -> bool {
        self.path.is_some()
    }

    /// The path being followed, if any.
    pub fn path(&self) -> Option<&[Position]> {
        self.path.as_deref()
    }

    /// Index of the next waypoint to reach (0 while idle).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Waypoints not reached yet (empty while idle).
    pub fn remaining(&self) -> &[Position] {
        match &self.path {
            Some(path) => &path[self.index..],
            None => &[],
        }
    }

    /// Advance `position` along the path by `speed * elapsed`.
    ///
    /// Any number of waypoints may be reached within one tick. Distance left
    /// over once the final waypoint is reached is discarded. Negative
    /// `elapsed` is treated as zero. Ticking an idle follower is a no-op.
    pub fn tick(&mut self, position: &mut Position, elapsed: f32) -> FollowStatus {
        let Some(path) = self.path.as_deref() else {
            return FollowStatus::Idle;
        };

        let mut budget = (self.config.speed * elapsed).max(0.0);
        let mut pos = *position;
        let mut index = self.index;

        let arrived = loop {
            let Some(&target) = path.get(index) else {
                break true;
            };
            let to_target = target - pos;
            let distance = to_target.length();
            if distance > budget {
                pos += to_target.normalized() * budget;
                break false;
            }
            pos = target;
            budget -= distance;
            index += 1;
        };

        *position = pos;
        if arrived {
            log::debug!("path complete at {pos}");
            self.path = None;
            self.index = 0;
            FollowStatus::Arrived
        } else {
            self.index = index;
            FollowStatus::Moving
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = FollowerConfig { speed: 7.5 };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: FollowerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
