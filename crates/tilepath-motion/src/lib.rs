//! Runtime motion along grid paths.
//!
//! [`PathFollower`] advances a position along an ordered list of waypoints
//! at constant speed, one tick at a time. [`Agent`] ties a position, a
//! follower and a [`GridSearch`](tilepath_paths::GridSearch) together into a
//! click-to-move controller.

pub mod agent;
pub mod follower;

pub use agent::Agent;
pub use follower::{FollowStatus, FollowerConfig, PathFollower};
