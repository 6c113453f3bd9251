//! Coordinate work in two dimensions.
//!
//! Grids are addressed by row and column, with row 0 at the top
//! and column 0 on the left.

use std::cmp;
use std::fmt;
use std::ops::RangeInclusive;

use crate::Position;

pub mod map;
pub mod path;
pub mod targets;

/// A movement direction in two dimensions.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Left,
    Direction::Right,
    Direction::Down,
];

impl Direction {
    /// Enumertates all directions of movement in "reading order",
    /// i.e. such that the resulting points are in reading order
    /// from the current position.
    pub fn all() -> impl Iterator<Item = Self> {
        DIRECTIONS.iter().cloned()
    }

    /// Single letter label for this direction.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "U",
            Direction::Down => "D",
            Direction::Left => "L",
            Direction::Right => "R",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A location on a grid.
///
/// Points are plain values: two points are equal
/// when both coordinates match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: Position,
    pub col: Position,
}

impl Point {
    /// Build a new point from coordinates.
    pub fn new(row: Position, col: Position) -> Self {
        Self { row, col }
    }

    /// Returns a point at (0, 0)
    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Step in a given direction.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.row - 1, self.col),
            Direction::Down => Self::new(self.row + 1, self.col),
            Direction::Left => Self::new(self.row, self.col - 1),
            Direction::Right => Self::new(self.row, self.col + 1),
        }
    }

    /// Iterate over all adjacent points, along with the direction
    /// which leads to each of them.
    pub fn adjacent(self) -> impl Iterator<Item = (Direction, Self)> {
        Direction::all().map(move |d| (d, self.step(d)))
    }

    /// Check if a point is adjacent.
    pub fn is_adjacent(&self, point: &Point) -> bool {
        self.manhattan_distance(*point) == 1
    }

    /// Manhattan distance between two points is the distance along
    /// each coordinate
    pub fn manhattan_distance(self, other: Point) -> usize {
        ((self.row - other.row).abs() + (self.col - other.col).abs()) as usize
    }
}

impl cmp::Ord for Point {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl cmp::PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl From<(usize, usize)> for Point {
    fn from(coordinates: (usize, usize)) -> Self {
        Self::new(coordinates.0 as Position, coordinates.1 as Position)
    }
}

/// A rectangle which encloses points and is aligned
/// with the coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    left: Position,
    right: Position,
    top: Position,
    bottom: Position,
}

impl BoundingBox {
    /// Create a bounding box which covers no points.
    pub fn empty() -> Self {
        Self {
            left: Position::max_value(),
            right: Position::min_value(),
            top: Position::max_value(),
            bottom: Position::min_value(),
        }
    }

    /// Modify this bounding box to include a given point.
    pub fn include(&mut self, point: Point) -> bool {
        let mut updated = false;
        if point.col < self.left {
            self.left = point.col;
            updated = true;
        }
        if point.col > self.right {
            self.right = point.col;
            updated = true;
        }
        if point.row < self.top {
            self.top = point.row;
            updated = true;
        }
        if point.row > self.bottom {
            self.bottom = point.row;
            updated = true;
        }
        updated
    }

    /// Rows covered by this box.
    pub fn vertical(&self) -> RangeInclusive<Position> {
        self.top..=self.bottom
    }

    /// Columns covered by this box.
    pub fn horizontal(&self) -> RangeInclusive<Position> {
        self.left..=self.right
    }
}
