//! Grid mazes with an initial cell, keys and goals.
//!
//! Mazes are written one row per line:
//!
//! | char | meaning |
//! |---|---|
//! | `X` | wall |
//! | `.` | floor |
//! | `I` | the initial cell (exactly one) |
//! | `K` | a key |
//! | `G` | a goal |
//! | `M` | mud, costs 3 to enter |
//! | `1`-`9` | floor which costs that much to enter |
//!
//! Whitespace around each line and blank lines are ignored.

use std::collections::BTreeMap;
use std::convert::{TryFrom, TryInto};
use std::fmt;
use std::str::FromStr;

use geometry::coord2d::map::Map;
use geometry::coord2d::path::{Path, PathError};
use geometry::coord2d::targets::Targets;
use geometry::coord2d::{BoundingBox, Direction, Point};
use searcher::SearchProblem;
use thiserror::Error;

/// A position in the maze.
pub type MazeState = Point;

/// Error produced when building or walking a maze.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("Unexpected character {0:?} at {1}")]
    UnexpectedTile(char, Point),

    #[error("Maze has no initial state")]
    MissingInitial,

    #[error("Maze has more than one initial state: {0} and {1}")]
    MultipleInitial(Point, Point),

    #[error("{0} is not a traversable location")]
    NotTraversable(Point),

    #[error("Can't step {0} from {1}")]
    BlockedStep(Direction, Point),

    #[error("Broken trace: {0}")]
    Trace(#[from] PathError),
}

type Result<T> = std::result::Result<T, MazeError>;

/// The ground in a single traversable cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Tile {
    Floor,
    Mud,
    Weighted(u8),
}

impl Tile {
    /// What it costs to step onto this tile.
    pub fn cost(self) -> usize {
        match self {
            Tile::Floor => 1,
            Tile::Mud => 3,
            Tile::Weighted(n) => n as usize,
        }
    }

    fn symbol(self) -> char {
        match self {
            Tile::Floor => '.',
            Tile::Mud => 'M',
            Tile::Weighted(n) => (b'0' + n) as char,
        }
    }
}

/// Markers which can sit on top of a floor tile.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Marker {
    Initial,
    Key,
    Goal,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Cell {
    Wall,
    Ground(Tile, Option<Marker>),
}

impl TryFrom<char> for Cell {
    type Error = char;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            'X' => Ok(Cell::Wall),
            '.' => Ok(Cell::Ground(Tile::Floor, None)),
            'I' => Ok(Cell::Ground(Tile::Floor, Some(Marker::Initial))),
            'K' => Ok(Cell::Ground(Tile::Floor, Some(Marker::Key))),
            'G' => Ok(Cell::Ground(Tile::Floor, Some(Marker::Goal))),
            'M' => Ok(Cell::Ground(Tile::Mud, None)),
            c @ '1'..='9' => Ok(Cell::Ground(Tile::Weighted(c as u8 - b'0'), None)),
            c => Err(c),
        }
    }
}

/// A maze problem: where the search starts, which cells
/// hold keys and goals, and what each step costs.
#[derive(Debug, Clone)]
pub struct MazeProblem {
    tiles: BTreeMap<Point, Tile>,
    initial: MazeState,
    keys: Targets,
    goals: Targets,
    bounds: BoundingBox,
}

impl FromStr for MazeProblem {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        let mut tiles = BTreeMap::new();
        let mut bounds = BoundingBox::empty();
        let mut initial = None;
        let mut keys = Targets::new();
        let mut goals = Targets::new();

        let lines = s.lines().map(str::trim).filter(|l| !l.is_empty());
        for (row, line) in lines.enumerate() {
            for (col, c) in line.chars().enumerate() {
                let point: Point = (row, col).into();
                bounds.include(point);

                let cell: Cell = c
                    .try_into()
                    .map_err(|c| MazeError::UnexpectedTile(c, point))?;

                let (tile, marker) = match cell {
                    Cell::Wall => continue,
                    Cell::Ground(tile, marker) => (tile, marker),
                };
                tiles.insert(point, tile);

                match marker {
                    Some(Marker::Initial) => {
                        if let Some(first) = initial {
                            return Err(MazeError::MultipleInitial(first, point));
                        }
                        initial = Some(point);
                    }
                    Some(Marker::Key) => {
                        keys.insert(point);
                    }
                    Some(Marker::Goal) => {
                        goals.insert(point);
                    }
                    None => {}
                }
            }
        }

        Ok(MazeProblem {
            tiles,
            initial: initial.ok_or(MazeError::MissingInitial)?,
            keys,
            goals,
            bounds,
        })
    }
}

impl MazeProblem {
    /// Where every route starts.
    pub fn initial_state(&self) -> MazeState {
        self.initial
    }

    /// Cells which hold a key.
    pub fn key_states(&self) -> &Targets {
        &self.keys
    }

    /// Cells which hold a goal.
    pub fn goal_states(&self) -> &Targets {
        &self.goals
    }

    pub fn is_key(&self, state: MazeState) -> bool {
        self.keys.contains(&state)
    }

    pub fn is_goal(&self, state: MazeState) -> bool {
        self.goals.contains(&state)
    }

    /// Mark another cell as holding a key.
    ///
    /// Keys may share a cell with the initial state or with a goal.
    pub fn add_key(&mut self, state: MazeState) -> Result<bool> {
        self.check_traversable(state)?;
        Ok(self.keys.insert(state))
    }

    /// Mark another cell as holding a goal.
    pub fn add_goal(&mut self, state: MazeState) -> Result<bool> {
        self.check_traversable(state)?;
        Ok(self.goals.insert(state))
    }

    fn check_traversable(&self, state: MazeState) -> Result<()> {
        if self.is_traversable(state) {
            Ok(())
        } else {
            Err(MazeError::NotTraversable(state))
        }
    }

    /// The ground at this location, or `None` for walls and
    /// anything outside the maze.
    pub fn get(&self, location: Point) -> Option<Tile> {
        self.tiles.get(&location).copied()
    }

    /// Steps available from this state, in reading order,
    /// each labeled by its direction.
    pub fn transitions(&self, state: MazeState) -> Vec<(Direction, MazeState)> {
        self.neighbors(state)
    }

    /// The cost of arriving in this state.
    ///
    /// Walls can't be entered, so they report no cost.
    pub fn cost(&self, state: MazeState) -> usize {
        self.get(state).map(Tile::cost).unwrap_or(0)
    }

    /// Follow a sequence of actions from the initial state,
    /// returning every cell visited along the way.
    pub fn replay(&self, actions: &[Direction]) -> Result<Path> {
        let mut path = Path::new(self.initial);
        for &action in actions {
            let here = *path.destination();
            let next = self
                .transitions(here)
                .into_iter()
                .find(|(d, _)| *d == action)
                .map(|(_, next)| next)
                .ok_or(MazeError::BlockedStep(action, here))?;
            path.push(next)?;
        }
        Ok(path)
    }

    /// Total cost of walking a path, not counting its origin.
    pub fn path_cost(&self, path: &Path) -> usize {
        path.iter().skip(1).map(|p| self.cost(*p)).sum()
    }

    /// Draw the maze, marking cells visited by the path with `*`.
    ///
    /// The initial state, keys and goals keep their letters.
    pub fn render(&self, path: &Path) -> String {
        let mut out = String::new();
        for row in self.bounds.vertical() {
            for col in self.bounds.horizontal() {
                let point = Point::new(row, col);
                out.push(self.symbol(point, path.visits(&point)));
            }
            out.push('\n');
        }
        out
    }

    fn symbol(&self, point: Point, visited: bool) -> char {
        let tile = match self.get(point) {
            Some(t) => t,
            None => return 'X',
        };

        if point == self.initial {
            'I'
        } else if self.is_key(point) {
            'K'
        } else if self.is_goal(point) {
            'G'
        } else if visited {
            '*'
        } else {
            tile.symbol()
        }
    }
}

impl fmt::Display for MazeProblem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render(&Path::new(self.initial)))
    }
}

impl Map for MazeProblem {
    fn is_traversable(&self, location: Point) -> bool {
        self.tiles.contains_key(&location)
    }
}

impl SearchProblem for MazeProblem {
    type State = MazeState;
    type Action = Direction;

    fn transitions(&self, state: &MazeState) -> Vec<(Direction, MazeState)> {
        MazeProblem::transitions(self, *state)
    }

    fn cost(&self, state: &MazeState) -> usize {
        MazeProblem::cost(self, *state)
    }
}
