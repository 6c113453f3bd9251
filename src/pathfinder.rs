//! Routes which pick up a key before heading for a goal.
//!
//! A route is found in two searches: one from the initial state to the
//! nearest key, then one from that key to the nearest goal. Searching for
//! keys and goals at once would stop at whichever came first.

use std::fmt;

use geometry::coord2d::targets::Targets;
use geometry::coord2d::Direction;
use log::debug;
use searcher::{astar, SearchOptions, SearchResult, Solution};
use thiserror::Error;

use crate::maze::{MazeProblem, MazeState};

/// A route through a maze, via a key, to a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    actions: Vec<Direction>,
    to_key: usize,
    key: MazeState,
    goal: MazeState,
    cost: usize,
}

impl Route {
    /// Every action on the route, in order.
    pub fn actions(&self) -> &[Direction] {
        &self.actions
    }

    /// The actions leading to the key, and then those leading on to the goal.
    pub fn stages(&self) -> (&[Direction], &[Direction]) {
        self.actions.split_at(self.to_key)
    }

    /// The key collected along the way.
    pub fn key(&self) -> MazeState {
        self.key
    }

    /// The goal the route ends at.
    pub fn goal(&self) -> MazeState {
        self.goal
    }

    /// Total cost of both stages.
    pub fn cost(&self) -> usize {
        self.cost
    }
}

/// The reason a maze has no route.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Unsolvable {
    #[error("maze has no keys")]
    NoKeys,

    #[error("maze has no goals")]
    NoGoals,

    #[error("no key can be reached from {0}")]
    KeyUnreachable(MazeState),

    #[error("no goal can be reached from the key at {0}")]
    GoalUnreachable(MazeState),
}

#[derive(Debug, Clone, Copy)]
enum Stage {
    Key,
    Goal,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Stage::Key => f.write_str("key"),
            Stage::Goal => f.write_str("goal"),
        }
    }
}

/// Finds routes through a single maze.
#[derive(Debug, Clone)]
pub struct Pathfinder<'m> {
    maze: &'m MazeProblem,
    options: SearchOptions,
}

impl<'m> Pathfinder<'m> {
    pub fn new(maze: &'m MazeProblem) -> Self {
        Self {
            maze,
            options: SearchOptions::default(),
        }
    }

    /// Configure each of the two searches.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    fn stage(
        &self,
        stage: Stage,
        origin: MazeState,
        targets: &Targets,
    ) -> SearchResult<Option<Solution<Direction, MazeState>>> {
        debug!(
            "Searching for a {} from {} ({} candidates)",
            stage,
            origin,
            targets.len()
        );
        let solution = astar::build(self.maze, origin, targets)
            .with_options(self.options.clone())
            .run()?;
        if let Some(s) = &solution {
            debug!(
                "Found {} at {} with cost {} in {} steps",
                stage,
                s.terminal(),
                s.cost(),
                s.actions().len()
            );
        }
        Ok(solution)
    }

    /// Find the cheapest route, explaining why there is none
    /// when the maze can't be solved.
    pub fn attempt(&self) -> SearchResult<Result<Route, Unsolvable>> {
        let keys = self.maze.key_states();
        let goals = self.maze.goal_states();

        if keys.is_empty() {
            return Ok(Err(Unsolvable::NoKeys));
        }
        if goals.is_empty() {
            return Ok(Err(Unsolvable::NoGoals));
        }

        let initial = self.maze.initial_state();
        let to_key = match self.stage(Stage::Key, initial, keys)? {
            Some(s) => s,
            None => return Ok(Err(Unsolvable::KeyUnreachable(initial))),
        };

        let key = *to_key.terminal();
        let to_goal = match self.stage(Stage::Goal, key, goals)? {
            Some(s) => s,
            None => return Ok(Err(Unsolvable::GoalUnreachable(key))),
        };

        let cost = to_key.cost() + to_goal.cost();
        let goal = *to_goal.terminal();
        let steps = to_key.actions().len();

        let mut actions = to_key.into_actions();
        actions.extend(to_goal.into_actions());

        Ok(Ok(Route {
            actions,
            to_key: steps,
            key,
            goal,
            cost,
        }))
    }

    /// Find the cheapest route, or `None` when the maze can't be solved.
    pub fn solve(&self) -> SearchResult<Option<Route>> {
        Ok(self.attempt()?.ok())
    }
}

/// Find the cheapest route through a maze, via a key, to a goal.
pub fn solve(maze: &MazeProblem) -> SearchResult<Option<Route>> {
    Pathfinder::new(maze).solve()
}

#[cfg(test)]
mod test {
    use geometry::coord2d::Point;
    use searcher::SearchError;

    use super::*;
    use geometry::coord2d::Direction::{Down as D, Left as L, Right as R, Up as U};

    fn maze(text: &str) -> MazeProblem {
        text.parse().unwrap()
    }

    /// Replays a route and checks it visits the key and ends at the goal.
    fn check_route(maze: &MazeProblem, route: &Route) {
        let (to_key, _) = route.stages();
        let path = maze.replay(route.actions()).unwrap();

        assert!(maze.is_key(route.key()));
        assert!(maze.is_goal(route.goal()));
        assert_eq!(path[to_key.len()], route.key());
        assert_eq!(path.destination(), &route.goal());
        assert_eq!(maze.path_cost(&path), route.cost());
    }

    #[test]
    fn open_grid() {
        let maze = maze(include_str!("../mazes/open.txt"));
        let route = solve(&maze).unwrap().unwrap();

        assert_eq!(route.actions().len(), 8);
        assert_eq!(route.actions(), &[R, R, R, R, D, D, D, D]);
        assert_eq!(route.key(), Point::new(0, 4));
        assert_eq!(route.goal(), Point::new(4, 4));
        assert_eq!(route.cost(), 8);

        let path = maze.replay(route.actions()).unwrap();
        assert!(path.visits(&Point::new(0, 4)));
        assert_eq!(path.destination(), &Point::new(4, 4));
        check_route(&maze, &route);
    }

    #[test]
    fn manhattan_length_without_walls() {
        let cases = [
            ("I....\n.....\n..K..\n.....\n....G", 4, 4),
            ("G....\n.....\n.....\n.....\nK...I", 4, 4),
            ("....G\n.I...\n.....\n.....\nK....", 4, 8),
            ("..I..\n.....\nG...K", 4, 4),
        ];

        for (text, to_key, to_goal) in cases.iter() {
            let maze = maze(text);
            let route = solve(&maze).unwrap().unwrap();
            let (first, second) = route.stages();

            assert_eq!(
                first.len(),
                maze.initial_state().manhattan_distance(route.key())
            );
            assert_eq!(first.len(), *to_key, "{}", text);
            assert_eq!(second.len(), *to_goal, "{}", text);
            check_route(&maze, &route);
        }
    }

    #[test]
    fn cost_beats_hop_count() {
        let maze = maze(
            "
            I9K
            .X.
            ...
            G..
            ",
        );
        let route = solve(&maze).unwrap().unwrap();
        let (to_key, to_goal) = route.stages();

        // Around the wall costs 6, straight through the 9 would cost 10.
        assert_eq!(to_key, &[D, D, R, R, U, U]);
        assert_eq!(to_goal.len(), 5);
        assert_eq!(route.cost(), 6 + 5);
        check_route(&maze, &route);
    }

    #[test]
    fn expensive_only_route() {
        let maze = maze(
            "
            I5K.
            XXX.
            G...
            ",
        );
        let route = solve(&maze).unwrap().unwrap();
        let (to_key, to_goal) = route.stages();

        assert_eq!(to_key, &[R, R]);
        assert_eq!(to_goal, &[R, D, D, L, L, L]);
        assert_eq!(route.cost(), 5 + 1 + 6);
        check_route(&maze, &route);
    }

    #[test]
    fn mud() {
        let maze = maze(include_str!("../mazes/mud.txt"));
        let route = solve(&maze).unwrap().unwrap();

        assert_eq!(route.cost(), 14);
        check_route(&maze, &route);
    }

    #[test]
    fn nearest_key() {
        let maze = maze(include_str!("../mazes/keys.txt"));
        let route = solve(&maze).unwrap().unwrap();

        assert_eq!(route.key(), Point::new(1, 1));
        assert_eq!(route.goal(), Point::new(5, 7));
        assert_eq!(route.cost(), 4 + 10);
        check_route(&maze, &route);
    }

    #[test]
    fn no_keys_or_goals() {
        let keyless = maze("I...G");
        assert_eq!(solve(&keyless).unwrap(), None);
        assert_eq!(
            Pathfinder::new(&keyless).attempt().unwrap(),
            Err(Unsolvable::NoKeys)
        );

        let goalless = maze("I...K");
        assert_eq!(solve(&goalless).unwrap(), None);
        assert_eq!(
            Pathfinder::new(&goalless).attempt().unwrap(),
            Err(Unsolvable::NoGoals)
        );

        assert_eq!(solve(&maze("I")).unwrap(), None);
    }

    #[test]
    fn unreachable() {
        let blocked = maze(include_str!("../mazes/unsolvable.txt"));
        assert_eq!(solve(&blocked).unwrap(), None);
        assert_eq!(
            Pathfinder::new(&blocked).attempt().unwrap(),
            Err(Unsolvable::KeyUnreachable(Point::new(1, 1)))
        );

        let stranded = maze("I.KXG");
        assert_eq!(solve(&stranded).unwrap(), None);
        assert_eq!(
            Pathfinder::new(&stranded).attempt().unwrap(),
            Err(Unsolvable::GoalUnreachable(Point::new(0, 2)))
        );
    }

    #[test]
    fn start_on_key_and_goal() {
        let mut maze = maze("I..");
        maze.add_key(maze.initial_state()).unwrap();
        maze.add_goal(maze.initial_state()).unwrap();

        let route = solve(&maze).unwrap().unwrap();
        assert!(route.actions().is_empty());
        assert_eq!(route.key(), maze.initial_state());
        assert_eq!(route.goal(), maze.initial_state());
        assert_eq!(route.cost(), 0);
    }

    #[test]
    fn start_on_key() {
        let mut maze = maze("G.I.G.");
        maze.add_key(maze.initial_state()).unwrap();

        let route = solve(&maze).unwrap().unwrap();
        let (to_key, to_goal) = route.stages();
        assert!(to_key.is_empty());
        assert_eq!(to_goal, &[L, L]);
        check_route(&maze, &route);
    }

    #[test]
    fn idempotent() {
        let maze = maze(include_str!("../mazes/keys.txt"));
        let first = solve(&maze).unwrap();
        let second = solve(&maze).unwrap();
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn step_limit() {
        let maze = maze(include_str!("../mazes/open.txt"));

        let limited = Pathfinder::new(&maze).with_options(SearchOptions::with_limit(2));
        assert_eq!(limited.solve(), Err(SearchError::StepLimitExhausted(2)));

        let roomy = Pathfinder::new(&maze).with_options(SearchOptions::with_limit(25));
        assert!(roomy.solve().unwrap().is_some());
    }
}
