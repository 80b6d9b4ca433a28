//! A bounded grid of open and blocked tiles.
//!
//! Maps can be written as ASCII art: `'#'` is blocked, `'.'` is open, one
//! line per row. The first line is the **top** row, i.e. the highest `y`,
//! since world `y` grows up.

use std::fmt;
use std::str::FromStr;

use tilepath_core::{Cell, Range};
use tilepath_paths::Obstacles;

const BLOCKED_CHAR: char = '#';
const OPEN_CHAR: char = '.';

/// A map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Open,
    Blocked,
}

impl Tile {
    fn to_char(self) -> char {
        match self {
            Self::Open => OPEN_CHAR,
            Self::Blocked => BLOCKED_CHAR,
        }
    }
}

/// A rectangle of [`Tile`]s. Cells outside [`range`](Self::range) are
/// blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    range: Range,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Create an open map covering `[0, width) × [0, height)`.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_range(Range::new(0, 0, width, height))
    }

    /// Create an open map covering `range`.
    pub fn with_range(range: Range) -> Self {
        Self {
            range,
            tiles: vec![Tile::Open; range.len()],
        }
    }

    /// The cells covered by the map.
    pub fn range(&self) -> Range {
        self.range
    }

    /// Width of the map.
    pub fn width(&self) -> i32 {
        self.range.width()
    }

    /// Height of the map.
    pub fn height(&self) -> i32 {
        self.range.height()
    }

    /// Whether `cell` is inside the map.
    pub fn contains(&self, cell: Cell) -> bool {
        self.range.contains(cell)
    }

    /// The tile at `cell`, or `None` outside the map.
    pub fn get(&self, cell: Cell) -> Option<Tile> {
        self.range.index(cell).map(|i| self.tiles[i])
    }

    /// Set the tile at `cell`. Does nothing outside the map.
    pub fn set(&mut self, cell: Cell, tile: Tile) {
        if let Some(i) = self.range.index(cell) {
            self.tiles[i] = tile;
        }
    }

    /// Whether `cell` is blocked. Cells outside the map are blocked.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.get(cell).is_none_or(|t| t == Tile::Blocked)
    }

    /// Number of tiles equal to `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Iterate over `(Cell, Tile)` pairs, lowest `y` first.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Tile)> + '_ {
        self.range.iter().zip(self.tiles.iter().copied())
    }

    /// Parse an ASCII map whose bottom-left cell is `(0, 0)`.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        let lines: Vec<&str> = s.lines().collect();
        let Some(first) = lines.first() else {
            return Err(MapError::Empty);
        };
        let width = first.chars().count();
        if width == 0 {
            return Err(MapError::Empty);
        }
        let height = lines.len();
        let mut map = Self::new(width as i32, height as i32);

        for (line, text) in lines.iter().enumerate() {
            let found = text.chars().count();
            if found != width {
                return Err(MapError::InconsistentWidth {
                    line,
                    expected: width,
                    found,
                });
            }
            let y = (height - 1 - line) as i32;
            for (column, ch) in text.chars().enumerate() {
                let tile = match ch {
                    BLOCKED_CHAR => Tile::Blocked,
                    OPEN_CHAR => Tile::Open,
                    _ => return Err(MapError::InvalidTile { ch, line, column }),
                };
                map.set(Cell::new(column as i32, y), tile);
            }
        }
        Ok(map)
    }

    /// Render the map as ASCII art, top row first, with `marks` drawn over
    /// the tiles. Later marks win; marks outside the map are ignored.
    pub fn render(&self, marks: &[(Cell, char)]) -> String {
        let mut rows: Vec<Vec<char>> = (0..self.height())
            .map(|_| Vec::with_capacity(self.width() as usize))
            .collect();
        for (cell, tile) in self.iter() {
            rows[(cell.y - self.range.min.y) as usize].push(tile.to_char());
        }
        for &(cell, ch) in marks {
            if self.contains(cell) {
                let row = (cell.y - self.range.min.y) as usize;
                let col = (cell.x - self.range.min.x) as usize;
                rows[row][col] = ch;
            }
        }
        let lines: Vec<String> = rows.iter().rev().map(|r| r.iter().collect()).collect();
        lines.join("\n")
    }
}

impl Obstacles for TileMap {
    #[inline]
    fn is_blocked(&self, cell: Cell) -> bool {
        TileMap::is_blocked(self, cell)
    }
}

impl FromStr for TileMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, MapError> {
        Self::parse(s)
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}

/// Errors that can occur when parsing an ASCII map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The text contains no tiles.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `'#'` or `'.'` was found.
    InvalidTile {
        ch: char,
        line: usize,
        column: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no tiles"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {} is {found} tiles wide, expected {expected}",
                line + 1
            ),
            Self::InvalidTile { ch, line, column } => write!(
                f,
                "map contains invalid tile \u{201c}{ch}\u{201d} at line {}, column {}",
                line + 1,
                column + 1
            ),
        }
    }
}

impl std::error::Error for MapError {}
