//! Failure taxonomy shared by every fallible operation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A search or lookup found no matching element.
    #[error("no matching element found")]
    NotFound,
    /// A documented input precondition was violated.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// An index or offset lies beyond the structure's bounds.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
    /// Topological ordering requested on a cyclic directed graph.
    #[error("directed graph contains a cycle")]
    CycleDetected,
    /// A negative-weight cycle makes shortest-path distances undefined.
    #[error("negative-weight cycle reachable from source")]
    NegativeCycleDetected,
}

pub type Result<T> = std::result::Result<T, Error>;
