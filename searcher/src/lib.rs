//! Generalized search algorithms, especially useful for graph traversal.
//!
//! To use these search algorithms, implement [SearchProblem] to describe
//! the state space, and [SearchHeuristic] to describe where the search
//! should end up.

pub mod algorithm;
mod errors;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use traits::SearchHeuristic;
pub use traits::SearchProblem;

pub use algorithm::astar;
pub use algorithm::SearchOptions;
pub use algorithm::Solution;
