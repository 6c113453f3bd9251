//! Path data structures
//!
//! A path is a sequence of steps in a 2D geometry.

use std::ops::Deref;

use thiserror::Error;

use super::Point;

/// Error returned for invalid paths
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// A new step added to this path was not adjecent to the
    /// previous step.
    #[error("{0} is not adjacent to the end of the path {1}")]
    NotAdjacentSequence(Point, Point),
}

type PathResult<T> = Result<T, PathError>;

/// A sequence of steps in a 2D geometry.
///
/// Paths always contain their origin, so they are never empty.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Path {
    steps: Vec<Point>,
}

impl Path {
    /// Construct a new path which starts from this point.
    pub fn new(origin: Point) -> Self {
        Path {
            steps: vec![origin],
        }
    }

    /// Extend this path by stepping to a particular point.
    pub fn push(&mut self, point: Point) -> PathResult<()> {
        if !point.is_adjacent(self.destination()) {
            return Err(PathError::NotAdjacentSequence(point, *self.destination()));
        }

        self.steps.push(point);
        Ok(())
    }

    /// Iterate over the points in this path.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.steps.iter()
    }

    /// Where this path ends
    pub fn destination(&self) -> &Point {
        &self.steps[self.steps.len() - 1]
    }

    /// Does this path pass through the given point?
    pub fn visits(&self, point: &Point) -> bool {
        self.steps.contains(point)
    }
}

impl Deref for Path {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
