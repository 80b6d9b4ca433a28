//! Shared scenario runner for the demo binaries.
//!
//! Loads a map, places an agent, "clicks" a target and ticks the agent at a
//! fixed rate until it arrives or the tick budget runs out.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tilepath_core::{Cell, Position};
use tilepath_map::{Tile, TileMap};
use tilepath_motion::{Agent, FollowStatus, FollowerConfig};
use tilepath_paths::SearchLimits;

/// Map used when no `--map` file is given.
pub const BUILTIN_MAP: &str = "\
####################
#........#.........#
#.######.#.#######.#
#.#......#.#.....#.#
#.#.######.#.###.#.#
#.#........#...#...#
#.##########.#.###.#
#............#.....#
####################";

/// Command-line configuration for the `walk` demo.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Headless click-to-move demo", long_about = None)]
pub struct Config {
    /// ASCII map file ('#' blocked, '.' open, first line on top). A small
    /// built-in maze is used when omitted.
    #[arg(long)]
    pub map: Option<PathBuf>,

    /// Start position as "X,Y". Defaults to the center of the lowest open cell.
    #[arg(long, value_parser = parse_xy)]
    pub from: Option<Position>,

    /// Target position as "X,Y". Defaults to the center of the highest open cell.
    #[arg(long, value_parser = parse_xy)]
    pub to: Option<Position>,

    /// Agent speed in cells per second.
    #[arg(long, default_value_t = 5.0)]
    pub speed: f32,

    /// Seconds per tick.
    #[arg(long, default_value_t = 0.05)]
    pub dt: f32,

    #[arg(long, default_value_t = 10_000)]
    pub max_ticks: usize,

    /// Give up planning after this many expanded cells.
    #[arg(long)]
    pub max_expansions: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map: None,
            from: None,
            to: None,
            speed: 5.0,
            dt: 0.05,
            max_ticks: 10_000,
            max_expansions: None,
        }
    }
}

fn parse_xy(s: &str) -> Result<Position, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x {x:?}: {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y {y:?}: {e}"))?;
    Ok(Position::new(x, y, 0.0))
}

/// Load the configured map file, or the built-in maze.
pub fn load_map(config: &Config) -> Result<TileMap, Box<dyn Error>> {
    let map = match &config.map {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("reading {}: {e}", path.display()))?;
            TileMap::parse(&text)?
        }
        None => TileMap::parse(BUILTIN_MAP)?,
    };
    log::info!(
        "loaded {}x{} map, {} open cells",
        map.width(),
        map.height(),
        map.count(Tile::Open)
    );
    Ok(map)
}

/// Outcome of a demo run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of points in the planned path, `None` if planning failed.
    pub path_len: Option<usize>,
    pub ticks: usize,
    pub arrived: bool,
    pub final_position: Position,
    /// Distance actually travelled.
    pub travelled: f32,
}

fn first_open(map: &TileMap) -> Option<Cell> {
    map.iter().find(|&(_, t)| t == Tile::Open).map(|(c, _)| c)
}

fn last_open(map: &TileMap) -> Option<Cell> {
    map.iter().filter(|&(_, t)| t == Tile::Open).map(|(c, _)| c).last()
}

/// Run the configured scenario on `map`.
pub fn run(config: &Config, map: &TileMap) -> Summary {
    let start = config
        .from
        .or_else(|| first_open(map).map(|c| c.center(0.0)))
        .unwrap_or(Position::ZERO);
    let target = config
        .to
        .or_else(|| last_open(map).map(|c| c.center(0.0)))
        .unwrap_or(Position::ZERO);

    let limits = SearchLimits {
        max_expansions: config.max_expansions,
    };
    let mut agent =
        Agent::new(start, FollowerConfig { speed: config.speed }).with_limits(limits);

    let mut summary = Summary {
        path_len: None,
        ticks: 0,
        arrived: false,
        final_position: start,
        travelled: 0.0,
    };

    log::info!("agent at {start}, clicking {target}");
    if !agent.move_to(map, target) {
        log::info!("no path from {start} to {target}");
        log::info!("\n{}", map.render(&[(start.to_cell(), 'S'), (target.to_cell(), 'G')]));
        return summary;
    }

    let path = agent.follower().path().unwrap_or_default();
    summary.path_len = Some(path.len());
    let mut marks: Vec<(Cell, char)> = path.iter().map(|p| (p.to_cell(), '*')).collect();
    marks.push((start.to_cell(), 'S'));
    marks.push((target.to_cell(), 'G'));
    log::info!("planned {} waypoints\n{}", path.len(), map.render(&marks));

    while summary.ticks < config.max_ticks {
        let before = agent.position();
        let status = agent.update(config.dt);
        summary.ticks += 1;
        summary.travelled += before.distance(agent.position());
        log::debug!("tick {:>5}: {}", summary.ticks, agent.position());
        if status != FollowStatus::Moving {
            summary.arrived = status == FollowStatus::Arrived;
            break;
        }
    }
    summary.final_position = agent.position();

    if summary.arrived {
        log::info!(
            "arrived at {} after {} ticks ({:.2}s), travelled {:.2}",
            summary.final_position,
            summary.ticks,
            summary.ticks as f32 * config.dt,
            summary.travelled
        );
    } else {
        log::info!(
            "stopped at {} after {} ticks without arriving",
            summary.final_position,
            summary.ticks
        );
    }
    summary
}
