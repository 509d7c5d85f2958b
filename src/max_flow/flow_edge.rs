//!
//! FlowEdge trait definition
//!
use super::CapacityLike;

/// Edge of a max flow network
///
/// * `capacity()`: capacity `u(e)`, upper limit of the flow
///
/// Any edge weight implementing this trait can be turned into a residue network.
pub trait FlowEdge<F: CapacityLike> {
    /// Capacity of the edge, Upper limit of the flow
    fn capacity(&self) -> F;
}
