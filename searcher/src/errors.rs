use std::collections::TryReserveError;
use thiserror::Error;

/// Error produced when a search cannot run to completion.
///
/// Exhausting the frontier without reaching a goal is not an error, see
/// [crate::Solution::failure].
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search ran out of memory after expanding {expanded} nodes")]
    ResourceExhausted {
        expanded: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
