//! Sets of destination points for grid searches.

use std::collections::BTreeSet;
use std::iter::FromIterator;

use searcher::SearchHeuristic;

use super::Point;

/// A set of points which a search is trying to reach.
///
/// The search estimate is the Manhattan distance to the nearest
/// target. That never overestimates on a grid with four-way moves
/// where every step costs at least one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Targets {
    points: BTreeSet<Point>,
}

impl Targets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, point: Point) -> bool {
        self.points.insert(point)
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Manhattan distance to the closest target.
    ///
    /// Returns `None` when there are no targets.
    pub fn nearest_distance(&self, point: Point) -> Option<usize> {
        self.points
            .iter()
            .map(|t| t.manhattan_distance(point))
            .min()
    }
}

impl FromIterator<Point> for Targets {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl SearchHeuristic<Point> for Targets {
    fn is_destination(&self, state: &Point) -> bool {
        self.contains(state)
    }

    fn estimate(&self, state: &Point) -> usize {
        self.nearest_distance(*state).unwrap_or(0)
    }
}
