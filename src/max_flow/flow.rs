//! Flow definitions
//! - Flow
//! - validity checks of a flow on a FlowNetwork
use super::{CapacityLike, FlowNetwork};
use itertools::Itertools;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef; // for EdgeReference.id()
use petgraph::Direction;
use std::ops::Index;

/// Flow definitions
///
/// Flow f is a mapping of f(e) to each edge e, stored densely by edge index.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Flow<F: CapacityLike>(Vec<F>);

impl<F: CapacityLike> Flow<F> {
    pub fn from_vec(vec: Vec<F>) -> Flow<F> {
        Flow(vec)
    }
    pub fn get(&self, e: EdgeIndex) -> Option<F> {
        self.0.get(e.index()).copied()
    }
    /// `(edge, flow)` in the edge order
    pub fn iter(&self) -> impl Iterator<Item = (EdgeIndex, F)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &f)| (EdgeIndex::new(i), f))
    }
}

impl<F: CapacityLike> Index<EdgeIndex> for Flow<F> {
    type Output = F;
    fn index(&self, e: EdgeIndex) -> &F {
        &self.0[e.index()]
    }
}

impl<F: CapacityLike> std::fmt::Display for Flow<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.iter()
                .map(|(e, v)| format!("e{}={}", e.index(), v))
                .join(",")
        )
    }
}

///
/// Check if the flow is valid, i.e. it satisfies
/// - flows of all edges are defined
/// - capacity constraint
/// - flow constraint (except on source and sink)
///
pub fn is_valid_flow<F: CapacityLike>(flow: &Flow<F>, network: &FlowNetwork<F>) -> bool {
    is_defined_for_all_edges(flow, network)
        && is_in_capacity(flow, network)
        && is_satisfying_flow_constraint(flow, network)
}

///
/// Check if the flow contains all edges
///
pub fn is_defined_for_all_edges<F: CapacityLike>(flow: &Flow<F>, network: &FlowNetwork<F>) -> bool {
    flow.0.len() == network.edge_count()
}

///
/// For each edge, the flow must satisfy `0 <= flow <= capacity`.
/// This function checks it
///
pub fn is_in_capacity<F: CapacityLike>(flow: &Flow<F>, network: &FlowNetwork<F>) -> bool {
    network.graph().edge_indices().all(|e| match flow.get(e) {
        Some(f) => !f.is_negative() && f <= network.capacity(e),
        None => false,
    })
}

///
/// For each node other than source and sink,
/// (the sum of out-going flows) should be equal to (the sum of in-coming flows).
///
pub fn is_satisfying_flow_constraint<F: CapacityLike>(
    flow: &Flow<F>,
    network: &FlowNetwork<F>,
) -> bool {
    network
        .graph()
        .node_indices()
        .filter(|&v| v != network.source() && v != network.sink())
        .all(|v| in_flow(flow, network, v) == out_flow(flow, network, v))
}

///
/// Net amount leaving the source, i.e. the value of the flow.
///
/// Returns `None` if the sums are not representable.
///
pub fn flow_value<F: CapacityLike>(flow: &Flow<F>, network: &FlowNetwork<F>) -> Option<F> {
    let out = sum_directed(flow, network, network.source(), Direction::Outgoing)?;
    let inc = sum_directed(flow, network, network.source(), Direction::Incoming)?;
    out.checked_sub(inc)
}

fn in_flow<F: CapacityLike>(flow: &Flow<F>, network: &FlowNetwork<F>, v: NodeIndex) -> Option<F> {
    sum_directed(flow, network, v, Direction::Incoming)
}

fn out_flow<F: CapacityLike>(flow: &Flow<F>, network: &FlowNetwork<F>, v: NodeIndex) -> Option<F> {
    sum_directed(flow, network, v, Direction::Outgoing)
}

fn sum_directed<F: CapacityLike>(
    flow: &Flow<F>,
    network: &FlowNetwork<F>,
    v: NodeIndex,
    direction: Direction,
) -> Option<F> {
    network
        .graph()
        .edges_directed(v, direction)
        .try_fold(F::zero(), |acc, er| acc.checked_add(flow.get(er.id())?))
}

//
// tests
//
#[cfg(test)]
mod tests {
    use super::super::mocks::mock_chain_network;
    use super::*;

    #[test]
    fn flow_valid_tests() {
        // 0 -5-> 1 -5-> 2 -5-> 3
        let g = mock_chain_network();

        // this is valid flow
        let f1 = Flow::from_vec(vec![5, 5, 5]);
        assert!(is_defined_for_all_edges(&f1, &g));
        assert!(is_in_capacity(&f1, &g));
        assert!(is_satisfying_flow_constraint(&f1, &g));
        assert!(is_valid_flow(&f1, &g));
        assert_eq!(flow_value(&f1, &g), Some(5));

        // this flow overs the capacity
        let f2 = Flow::from_vec(vec![100, 100, 100]);
        assert!(is_defined_for_all_edges(&f2, &g));
        assert!(!is_in_capacity(&f2, &g));
        assert!(is_satisfying_flow_constraint(&f2, &g));
        assert!(!is_valid_flow(&f2, &g));

        // this is a flow which not satisfies the flow constraint
        let f3 = Flow::from_vec(vec![1, 5, 1]);
        assert!(is_defined_for_all_edges(&f3, &g));
        assert!(is_in_capacity(&f3, &g));
        assert!(!is_satisfying_flow_constraint(&f3, &g));
        assert!(!is_valid_flow(&f3, &g));

        // this is a partial flow
        let f4 = Flow::from_vec(vec![1]);
        assert!(!is_defined_for_all_edges(&f4, &g));
        assert!(!is_valid_flow(&f4, &g));

        // negative values are never valid
        let f5 = Flow::from_vec(vec![-1, -1, -1]);
        assert!(!is_in_capacity(&f5, &g));
    }

    #[test]
    fn flow_display_and_index() {
        let f = Flow::from_vec(vec![3i64, 0, 7]);
        assert_eq!(f.to_string(), "e0=3,e1=0,e2=7");
        assert_eq!(f[EdgeIndex::new(2)], 7);
        assert_eq!(f.get(EdgeIndex::new(3)), None);
    }
}
