//! Concrete obstacle maps for tilepath.
//!
//! [`TileMap`] is a bounded rectangle of open/blocked tiles that implements
//! [`Obstacles`](tilepath_paths::Obstacles). Everything outside the rectangle
//! is blocked, so searches over a `TileMap` always terminate.

pub mod tilemap;

pub use tilemap::{MapError, Tile, TileMap};
