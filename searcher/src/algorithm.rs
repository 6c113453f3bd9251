//! Provides the building blocks for search algorithms

use std::default::Default;

use crate::errors::{Result, SearchError};

pub mod astar;
pub(crate) mod queue;
pub(crate) mod tree;

/// Configuration shared by search algorithms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of states to expand before giving up.
    pub limit: Option<usize>,
}

impl SearchOptions {
    /// Options which stop a search after `limit` expansions.
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }
}

#[derive(Debug)]
pub(crate) struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    pub(crate) fn increment(&mut self) -> Result<()> {
        self.current += 1;

        if self.current > self.maximum {
            Err(SearchError::StepLimitExhausted(self.maximum))
        } else {
            Ok(())
        }
    }
}

/// The outcome of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<A, S> {
    actions: Vec<A>,
    terminal: S,
    cost: usize,
    expanded: usize,
}

impl<A, S> Solution<A, S> {
    pub(crate) fn new(actions: Vec<A>, terminal: S, cost: usize, expanded: usize) -> Self {
        Self {
            actions,
            terminal,
            cost,
            expanded,
        }
    }

    /// Actions which lead from the origin to the terminal state.
    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    /// Take ownership of the actions.
    pub fn into_actions(self) -> Vec<A> {
        self.actions
    }

    /// The destination which the search actually reached.
    pub fn terminal(&self) -> &S {
        &self.terminal
    }

    /// Total cost of the path.
    pub fn cost(&self) -> usize {
        self.cost
    }

    /// Number of states expanded while searching.
    pub fn expanded(&self) -> usize {
        self.expanded
    }
}
