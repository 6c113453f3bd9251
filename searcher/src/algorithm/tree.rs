//! Arena storage for the search tree built by a single search.

/// Index of a node within a [SearchTree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(usize);

/// One node in the search tree.
///
/// Nodes are never changed once they are added to the tree.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode<A, S> {
    pub(crate) state: S,
    pub(crate) action: Option<A>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) path_cost: usize,
    pub(crate) heuristic: usize,
}

impl<A, S> SearchNode<A, S> {
    /// Priority of this node (f = g + h).
    pub(crate) fn priority(&self) -> usize {
        self.path_cost + self.heuristic
    }
}

/// A tree of search nodes which only links backwards, from
/// each child to its parent.
#[derive(Debug)]
pub(crate) struct SearchTree<A, S> {
    nodes: Vec<SearchNode<A, S>>,
}

impl<A, S> SearchTree<A, S>
where
    A: Clone,
{
    /// Start a tree from a single root.
    pub(crate) fn new(state: S, heuristic: usize) -> (Self, NodeId) {
        let root = SearchNode {
            state,
            action: None,
            parent: None,
            path_cost: 0,
            heuristic,
        };
        (Self { nodes: vec![root] }, NodeId(0))
    }

    /// Add a child below an existing node.
    pub(crate) fn insert(
        &mut self,
        parent: NodeId,
        action: A,
        state: S,
        path_cost: usize,
        heuristic: usize,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            state,
            action: Some(action),
            parent: Some(parent),
            path_cost,
            heuristic,
        });
        id
    }

    pub(crate) fn get(&self, id: NodeId) -> &SearchNode<A, S> {
        &self.nodes[id.0]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Actions which lead from the root to this node, in order.
    pub(crate) fn actions(&self, id: NodeId) -> Vec<A> {
        let mut actions = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current.map(|i| self.get(i)) {
            if let Some(action) = &node.action {
                actions.push(action.clone());
            }
            current = node.parent;
        }
        actions.reverse();
        actions
    }
}
