//! Grid coordinates and movement directions
//!
//! The field is a square torus: leaving one edge re-enters from the opposite one.

use serde::{Deserialize, Serialize};

/// A grid cell (x grows right, y grows down, like canvas pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbour one step in `direction`, wrapped onto a grid of side `grid_size`
    pub fn step(self, direction: Direction, grid_size: i32) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: wrap(self.x + dx, grid_size),
            y: wrap(self.y + dy, grid_size),
        }
    }

    /// True if both coordinates lie in [0, grid_size)
    pub fn in_bounds(self, grid_size: i32) -> bool {
        (0..grid_size).contains(&self.x) && (0..grid_size).contains(&self.y)
    }
}

/// Wrap a single coordinate into [0, grid_size)
///
/// Values at or past the far edge re-enter at 0; negative values re-enter
/// at the last column/row. `rem_euclid` covers both (and any larger jump).
#[inline]
pub fn wrap(coord: i32, grid_size: i32) -> i32 {
    coord.rem_euclid(grid_size)
}

/// One of the four unit moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit vector (dx, dy)
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}
