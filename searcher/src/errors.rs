use thiserror::Error;

/// Error produced when a search is stopped before it could finish.
///
/// Running out of candidates is not an error: searches report that
/// as `None`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
