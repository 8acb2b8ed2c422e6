//! # Game Module
//!
//! Core game state: catalogue data, cards, the board, participants and the
//! movement rules that bind them together.
//!
//! - Static catalogue of rooms, weapons, identities and doors
//! - Cards and the secret envelope
//! - Board cell classification and room transitions
//! - Participant state and per-turn movement validation
//! - Turn scheduling, accusations and snapshots

pub mod board;
pub mod cards;
pub mod catalogue;
pub mod movement;
pub mod participant;
pub mod snapshot;
pub mod turns;
pub mod world;

pub use board::*;
pub use cards::*;
pub use catalogue::*;
pub use movement::*;
pub use participant::*;
pub use snapshot::*;
pub use turns::*;
pub use world::*;

use serde::{Deserialize, Serialize};

/// Represents a cell coordinate on the board.
///
/// # Examples
///
/// ```
/// use cluedo::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
///
/// let adjacent = pos.cardinal_adjacent_positions();
/// assert_eq!(adjacent.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbour one step away in `direction`.
    pub fn step(self, direction: Direction) -> Position {
        self + direction.to_delta()
    }

    /// Returns the 4 cardinal neighbours in [`Direction::cardinal`] order.
    pub fn cardinal_adjacent_positions(self) -> [Position; 4] {
        Direction::cardinal().map(|direction| self.step(direction))
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orthogonal directions a token can walk in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    East,
    West,
    South,
    North,
}

impl Direction {
    /// Converts a direction to a position delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use cluedo::{Direction, Position};
    ///
    /// let delta = Direction::North.to_delta();
    /// assert_eq!(delta, Position::new(0, -1));
    /// ```
    pub const fn to_delta(self) -> Position {
        match self {
            Direction::East => Position::new(1, 0),
            Direction::West => Position::new(-1, 0),
            Direction::South => Position::new(0, 1),
            Direction::North => Position::new(0, -1),
        }
    }

    /// Converts a position delta to a direction.
    ///
    /// Returns None if the delta is not a single orthogonal step.
    pub fn from_delta(delta: Position) -> Option<Direction> {
        match (delta.x, delta.y) {
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            (0, 1) => Some(Direction::South),
            (0, -1) => Some(Direction::North),
            _ => None,
        }
    }

    /// Returns the 4 directions in candidate order: east, west, south, north.
    pub const fn cardinal() -> [Direction; 4] {
        [
            Direction::East,
            Direction::West,
            Direction::South,
            Direction::North,
        ]
    }

    /// Slot of this direction in a candidate array.
    pub const fn index(self) -> usize {
        match self {
            Direction::East => 0,
            Direction::West => 1,
            Direction::South => 2,
            Direction::North => 3,
        }
    }
}
