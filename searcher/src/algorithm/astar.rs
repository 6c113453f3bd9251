//! A* search towards the nearest of a set of destinations.

use std::collections::HashSet;

use log::{debug, trace};

use super::queue::Frontier;
use super::tree::SearchTree;
use super::{SearchOptions, Solution, StepLimit};
use crate::errors::Result;
use crate::traits::{SearchHeuristic, SearchProblem};

/// Result of a search which ran to completion.
pub type Outcome<P> =
    Option<Solution<<P as SearchProblem>::Action, <P as SearchProblem>::State>>;

/// Best-first search, ordered by path cost plus heuristic estimate.
///
/// Each state is expanded at most once. The frontier may hold
/// several entries for the same state, only the first one popped
/// is expanded and the rest are dropped when they surface.
#[derive(Debug)]
pub struct AStarSearch<'p, P, D>
where
    P: SearchProblem,
{
    problem: &'p P,
    destinations: &'p D,
    origin: P::State,
    options: SearchOptions,
}

impl<'p, P, D> AStarSearch<'p, P, D>
where
    P: SearchProblem,
    D: SearchHeuristic<P::State>,
{
    fn new(problem: &'p P, origin: P::State, destinations: &'p D) -> Self {
        Self {
            problem,
            destinations,
            origin,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a step limit for this search.
    ///
    /// When this many states have been expanded,
    /// the search will return an error.
    pub fn set_limit(&mut self, limit: usize) {
        self.options.limit = Some(limit);
    }

    /// Run the search to completion.
    ///
    /// Returns `Ok(None)` when every reachable state has been
    /// expanded without finding a destination.
    pub fn run(self) -> Result<Outcome<P>> {
        let mut counter = self.options.limit.map(StepLimit::new);

        let estimate = self.destinations.estimate(&self.origin);
        let (mut tree, root) = SearchTree::new(self.origin.clone(), estimate);
        let mut frontier = Frontier::default();
        frontier.push(root, estimate, 0);

        let mut settled: HashSet<P::State> = HashSet::new();
        let mut n: usize = 0;

        while let Some(id) = frontier.pop() {
            n += 1;
            if n % 10_000 == 0 {
                debug!(
                    "Q{} S{} N{} popped {}",
                    frontier.len(),
                    settled.len(),
                    tree.len(),
                    n
                );
            }

            let (state, path_cost) = {
                let node = tree.get(id);
                (node.state.clone(), node.path_cost)
            };

            // Stale entry, a cheaper copy of this state was already expanded.
            if settled.contains(&state) {
                continue;
            }

            if let Some(c) = counter.as_mut() {
                c.increment()?;
            }
            settled.insert(state.clone());

            if self.destinations.is_destination(&state) {
                debug!(
                    "Reached {:?} at cost {} after expanding {} states ({} pushed)",
                    state,
                    path_cost,
                    settled.len(),
                    frontier.pushed()
                );
                let actions = tree.actions(id);
                return Ok(Some(Solution::new(
                    actions,
                    state,
                    path_cost,
                    settled.len(),
                )));
            }

            trace!(
                "Expanding {:?} g={} h={}",
                state,
                path_cost,
                tree.get(id).heuristic
            );

            for (action, next) in self.problem.transitions(&state) {
                if settled.contains(&next) {
                    continue;
                }
                let cost = path_cost + self.problem.cost(&next);
                let heuristic = self.destinations.estimate(&next);
                let child = tree.insert(id, action, next, cost, heuristic);
                frontier.push(child, tree.get(child).priority(), cost);
            }
        }

        debug!(
            "Search exhausted after expanding {} states from {:?}",
            settled.len(),
            self.origin
        );
        Ok(None)
    }
}

/// Build an A* searcher, which can be configured before running.
pub fn build<'p, P, D>(
    problem: &'p P,
    origin: P::State,
    destinations: &'p D,
) -> AStarSearch<'p, P, D>
where
    P: SearchProblem,
    D: SearchHeuristic<P::State>,
{
    AStarSearch::new(problem, origin, destinations)
}

/// Find the cheapest path from `origin` to any of the `destinations`.
pub fn run<P, D>(problem: &P, origin: P::State, destinations: &D) -> Result<Outcome<P>>
where
    P: SearchProblem,
    D: SearchHeuristic<P::State>,
{
    build(problem, origin, destinations).run()
}
