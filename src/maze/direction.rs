//! Cardinal directions used for carving, searching and player movement

use std::fmt;

/// One of the four grid directions
///
/// North is towards row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards decreasing `y`
    North,
    /// Towards increasing `x`
    East,
    /// Towards increasing `y`
    South,
    /// Towards decreasing `x`
    West,
}

impl Direction {
    /// All directions, clockwise from north
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Unit step `(dx, dy)`
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    /// Map a movement key to a direction
    ///
    /// Accepts WASD in either case and arrow names with or without the
    /// `Arrow` prefix (`ArrowUp`, `up`, ...).
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        let name = key
            .strip_prefix("Arrow")
            .or_else(|| key.strip_prefix("arrow"))
            .unwrap_or(key);

        match name.to_ascii_lowercase().as_str() {
            "w" | "up" => Some(Self::North),
            "d" | "right" => Some(Self::East),
            "s" | "down" => Some(Self::South),
            "a" | "left" => Some(Self::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}
