//! Trait to define a map suitable for pathfinding
//! on a 2D coordinate grid.
use std::fmt;

use super::{Direction, Point};

/// Defines a map of locations on a coordinate grid.
///
/// The storage of the map is left to the implementing
/// structure, this trait simply requires a map to
/// return whether a given location is traversable.
///
/// Maps assume that traversal happens one square at
/// a time in 2-D space.
pub trait Map: Sized + fmt::Debug {
    /// Can the sprite step on this location on the path?
    fn is_traversable(&self, location: Point) -> bool;

    /// Steps which are possible from this location, in reading order.
    ///
    /// Nothing can be reached from a location which is not
    /// itself traversable.
    fn neighbors(&self, location: Point) -> Vec<(Direction, Point)> {
        if !self.is_traversable(location) {
            return Vec::new();
        }
        location
            .adjacent()
            .filter(|(_, p)| self.is_traversable(*p))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod helpers {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::super::Point;
    use super::Map;

    #[derive(Debug, Default, Clone)]
    pub(crate) struct SimpleMap {
        spaces: HashSet<Point>,
    }

    impl FromStr for SimpleMap {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let mut map = SimpleMap::default();
            for (row, line) in s.lines().enumerate() {
                for (col, c) in line.trim().chars().enumerate() {
                    match c {
                        '.' => {
                            map.spaces.insert((row, col).into());
                        }
                        '#' => {}
                        _ => return Err(format!("Unexpected map character: {}", c)),
                    };
                }
            }
            Ok(map)
        }
    }

    impl Map for SimpleMap {
        fn is_traversable(&self, location: Point) -> bool {
            self.spaces.contains(&location)
        }
    }
}
