//! Priority frontier for best-first searches.

use std::cmp::{Ord, Ordering, PartialOrd, Reverse};
use std::collections::BinaryHeap;

use super::tree::NodeId;

/// Ordering used to pick the next node to expand.
///
/// Lowest priority (f) first, then lowest path cost (g),
/// then whichever entry was pushed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrontierKey {
    pub(crate) priority: usize,
    pub(crate) path_cost: usize,
    pub(crate) sequence: u64,
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.path_cost.cmp(&other.path_cost))
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Entry {
    key: FrontierKey,
    node: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-queue of search tree nodes.
///
/// The same state may be pushed many times with different costs.
/// Stale entries are skipped by the search when they are popped.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    queue: BinaryHeap<Reverse<Entry>>,
    sequence: u64,
}

impl Frontier {
    pub(crate) fn push(&mut self, node: NodeId, priority: usize, path_cost: usize) {
        let key = FrontierKey {
            priority,
            path_cost,
            sequence: self.sequence,
        };
        self.sequence += 1;
        self.queue.push(Reverse(Entry { key, node }));
    }

    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|Reverse(e)| e.node)
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    /// Number of entries ever pushed.
    pub(crate) fn pushed(&self) -> u64 {
        self.sequence
    }
}

#[cfg(test)]
mod test {
    use super::super::tree::SearchTree;
    use super::*;

    fn nodes(n: usize) -> Vec<NodeId> {
        let (mut tree, root) = SearchTree::new(0usize, 0);
        let mut ids = vec![root];
        for i in 1..n {
            ids.push(tree.insert(root, (), i, 0, 0));
        }
        ids
    }

    #[test]
    fn lowest_priority_first() {
        let ids = nodes(3);
        let mut frontier = Frontier::default();
        frontier.push(ids[0], 10, 0);
        frontier.push(ids[1], 5, 0);
        frontier.push(ids[2], 15, 0);

        assert_eq!(frontier.pop(), Some(ids[1]));
        assert_eq!(frontier.pop(), Some(ids[0]));
        assert_eq!(frontier.pop(), Some(ids[2]));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn ties_prefer_cheaper_then_older() {
        let ids = nodes(4);
        let mut frontier = Frontier::default();
        frontier.push(ids[0], 6, 4);
        frontier.push(ids[1], 6, 2);
        frontier.push(ids[2], 6, 4);
        frontier.push(ids[3], 6, 2);

        assert_eq!(frontier.len(), 4);
        assert_eq!(frontier.pushed(), 4);
        let order: Vec<_> = std::iter::from_fn(|| frontier.pop()).collect();
        assert_eq!(order, vec![ids[1], ids[3], ids[0], ids[2]]);
    }

    #[test]
    fn key_ordering() {
        let a = FrontierKey {
            priority: 1,
            path_cost: 9,
            sequence: 9,
        };
        let b = FrontierKey {
            priority: 2,
            path_cost: 0,
            sequence: 0,
        };
        assert!(a < b);
    }
}
