//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised while validating an instance or running a pass over it.
///
/// Infeasible nodes and exhausted selection iterators are not errors: they
/// simply shrink the result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The instance is structurally unusable (missing depot, bad fleet size,
    /// negative budget, non-dense ids, ...).
    #[error("malformed instance: {0}")]
    MalformedInstance(String),
    /// A routing pass was started from a node that is not a source.
    #[error("node {0} is not a source")]
    NotASource(usize),
    /// A node id is out of range or does not have the expected role.
    #[error("node {0} is unknown or not visitable")]
    UnknownNode(usize),
    /// An edge needed by PJS carries no finite savings value for the source.
    #[error("edge {edge} has no savings value for source {source_id}")]
    MissingSavings {
        /// Index of the edge in the problem edge set.
        edge: usize,
        /// Source node id.
        source_id: usize,
    },
    /// A tuning parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
