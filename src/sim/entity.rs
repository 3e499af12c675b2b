//! Positional units placed on the board

use serde::{Deserialize, Serialize};
use std::fmt;

/// Board cell coordinate (cells, not pixels)
///
/// Signed so a step off the left/top edge is still representable and can be
/// rejected by the grid instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell in the given heading
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// What occupies a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    SnakeBody,
    Food,
    Obstacle,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::SnakeBody, EntityKind::Food, EntityKind::Obstacle];

    /// Fill style used by renderers
    pub fn style(&self) -> &'static str {
        match self {
            EntityKind::SnakeBody => "white",
            EntityKind::Food => "blue",
            EntityKind::Obstacle => "red",
        }
    }

    /// Single-character glyph for text output
    pub fn glyph(&self) -> char {
        match self {
            EntityKind::SnakeBody => 'o',
            EntityKind::Food => '*',
            EntityKind::Obstacle => '#',
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::SnakeBody => "snake",
            EntityKind::Food => "food",
            EntityKind::Obstacle => "obstacle",
        };
        f.write_str(name)
    }
}

/// A placed entity. Never mutated: a moving snake places a new head instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub pos: Coord,
    pub kind: EntityKind,
}

impl Entity {
    pub const fn new(pos: Coord, kind: EntityKind) -> Self {
        Self { pos, kind }
    }

    pub const fn snake(pos: Coord) -> Self {
        Self::new(pos, EntityKind::SnakeBody)
    }

    pub const fn food(pos: Coord) -> Self {
        Self::new(pos, EntityKind::Food)
    }

    pub const fn obstacle(pos: Coord) -> Self {
        Self::new(pos, EntityKind::Obstacle)
    }
}

/// Direction of travel (screen coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    Left,
    Up,
    Right,
    Down,
}

impl Heading {
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Heading::Left => (-1, 0),
            Heading::Up => (0, -1),
            Heading::Right => (1, 0),
            Heading::Down => (0, 1),
        }
    }

    pub fn reverse(&self) -> Heading {
        match self {
            Heading::Left => Heading::Right,
            Heading::Up => Heading::Down,
            Heading::Right => Heading::Left,
            Heading::Down => Heading::Up,
        }
    }

    /// Map a DOM arrow key code (37-40) to a heading
    pub fn from_key_code(code: u32) -> Option<Heading> {
        match code {
            37 => Some(Heading::Left),
            38 => Some(Heading::Up),
            39 => Some(Heading::Right),
            40 => Some(Heading::Down),
            _ => None,
        }
    }
}
