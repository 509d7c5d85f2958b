//!
//! Errors of the max flow solver
//!
use thiserror::Error;

/// Failure of building a network or of solving it.
///
/// All variants are fatal; no partial flow is returned alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaxFlowError {
    /// An edge endpoint or a terminal is outside `[0, node_count)`
    #[error("node {node} is out of range (node count is {node_count})")]
    InvalidNodeReference { node: usize, node_count: usize },
    /// An edge has a negative capacity
    #[error("edge {edge} has a negative capacity")]
    InvalidCapacity { edge: usize },
    /// Source and sink are the same node
    #[error("source and sink are the same node ({node})")]
    DegenerateTerminals { node: usize },
    /// A capacity sum or a flow value does not fit in the capacity type
    #[error("capacity overflow: flow values are not representable in the capacity type")]
    CapacityOverflow,
}
