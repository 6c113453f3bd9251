use std::fmt::Debug;
use std::hash::Hash;

/// Provides the state space which a search explores.
///
/// A problem describes which moves are available from
/// each state, and what it costs to arrive in a state.
/// Problems are only ever read by the search algorithms,
/// so a single problem can back many searches.
pub trait SearchProblem {
    /// A position in the state space.
    type State: Debug + Clone + Eq + Hash;

    /// The label for a move between two states.
    type Action: Debug + Clone;

    /// Moves available from this state, along with the state
    /// each move leads to.
    ///
    /// No action should appear twice. Actions which are not
    /// available should be left out entirely. The order of the
    /// returned moves is the order in which they are explored,
    /// so it should be stable between calls.
    fn transitions(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)>;

    /// The cost of arriving in this state.
    fn cost(&self, state: &Self::State) -> usize;
}

/// An interface for the set of states a search is trying to reach.
///
/// The estimate must never exceed the true remaining cost to the
/// nearest destination, otherwise searches lose their guarantee of
/// returning the cheapest path.
pub trait SearchHeuristic<S> {
    /// Is this state one of the destinations?
    fn is_destination(&self, state: &S) -> bool;

    /// Best guess of the remaining cost to reach a destination.
    fn estimate(&self, state: &S) -> usize;
}
