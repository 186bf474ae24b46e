use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::ops::{Add, Neg, Sub};

use crate::search::State;

#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vec2D {
    pub x: i16,
    pub y: i16,
}

pub const fn v2(x: i16, y: i16) -> Vec2D {
    Vec2D { x, y }
}

impl Vec2D {
    pub const fn new(x: i16, y: i16) -> Vec2D {
        Vec2D { x, y }
    }

    pub fn apply(self, d: Direction) -> Vec2D {
        self + d.into()
    }

    /// Length in the L1 norm.
    pub fn manhattan(&self) -> u64 {
        self.x.unsigned_abs() as u64 + self.y.unsigned_abs() as u64
    }

    /// Manhattan distance between two grid positions.
    pub fn distance(self, other: Vec2D) -> u64 {
        (self - other).manhattan()
    }

    pub fn within(self, width: usize, height: usize) -> bool {
        0 <= self.x && self.x < width as i16 && 0 <= self.y && self.y < height as i16
    }
}

impl From<(i16, i16)> for Vec2D {
    fn from(val: (i16, i16)) -> Self {
        Vec2D::new(val.0, val.1)
    }
}

impl From<Direction> for Vec2D {
    fn from(d: Direction) -> Self {
        match d {
            Direction::North => Vec2D::new(0, 1),
            Direction::South => Vec2D::new(0, -1),
            Direction::East => Vec2D::new(1, 0),
            Direction::West => Vec2D::new(-1, 0),
            Direction::Stop => Vec2D::new(0, 0),
        }
    }
}

impl Add for Vec2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Vec2D {
    type Output = Vec2D;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Moves available on the grid. `Stop` keeps the agent in place.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// All moves in the order they are offered as legal actions.
    pub fn iter() -> impl Iterator<Item = Direction> {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
            Direction::Stop,
        ]
        .iter()
        .copied()
    }

    pub fn invert(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Stop => Direction::Stop,
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Stop
    }
}

/// Board features of a state that the composite evaluation reads.
///
/// Positions are grid coordinates; all distances are measured from
/// [`Board::position`], the position of the maximizing agent.
pub trait Board: State {
    /// Position of the maximizing agent.
    fn position(&self) -> Vec2D;
    /// Rewards that are still on the board.
    fn rewards(&self) -> Vec<Vec2D>;
    /// Number of rewards already consumed.
    fn consumed(&self) -> usize;
    /// Positions of all adversaries.
    fn adversaries(&self) -> Vec<Vec2D>;
    /// Remaining vulnerable moves of each adversary, 0 if not vulnerable.
    fn vulnerability(&self) -> Vec<u32>;
    /// Number of power-ups that are still on the board.
    fn power_ups(&self) -> usize;
}
