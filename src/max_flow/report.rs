//!
//! Flow report: what a max flow computation tells its callers
//!
use super::flow::Flow;
use super::residue::ResidueNetwork;
use super::{CapacityLike, FlowNetwork};
use petgraph::graph::{EdgeIndex, NodeIndex};
use std::collections::BTreeSet;

/// Result of a max flow computation
///
/// * `total_value`: value of the maximum flow
/// * `edge_flows`: flow of each edge, in the edge order of the FlowNetwork
/// * `saturated_edges`: edges whose flow equals their capacity
/// * `min_cut_source_side`: nodes reachable from source in the final residue network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowReport<F: CapacityLike> {
    total_value: F,
    edge_flows: Flow<F>,
    saturated_edges: BTreeSet<EdgeIndex>,
    min_cut_source_side: BTreeSet<NodeIndex>,
}

impl<F: CapacityLike> FlowReport<F> {
    ///
    /// Read the flow off a terminal residue network.
    ///
    /// The flow of each original edge is the count of its own Down edge,
    /// so parallel edges never share their flow. No further augmentation happens here.
    ///
    pub fn extract(
        network: &FlowNetwork<F>,
        rn: &ResidueNetwork<F>,
        total_value: F,
    ) -> FlowReport<F> {
        let edge_flows = rn.flows();
        let saturated_edges = edge_flows
            .iter()
            .filter(|&(e, f)| f == network.capacity(e))
            .map(|(e, _)| e)
            .collect();
        let min_cut_source_side = rn.reachable_from(network.source()).into_iter().collect();

        FlowReport {
            total_value,
            edge_flows,
            saturated_edges,
            min_cut_source_side,
        }
    }

    pub fn total_value(&self) -> F {
        self.total_value
    }
    pub fn edge_flows(&self) -> &Flow<F> {
        &self.edge_flows
    }
    pub fn saturated_edges(&self) -> &BTreeSet<EdgeIndex> {
        &self.saturated_edges
    }
    pub fn min_cut_source_side(&self) -> &BTreeSet<NodeIndex> {
        &self.min_cut_source_side
    }
    /// flow of the edge `e`
    pub fn flow(&self, e: EdgeIndex) -> F {
        self.edge_flows[e]
    }
    pub fn is_saturated(&self, e: EdgeIndex) -> bool {
        self.saturated_edges.contains(&e)
    }

    ///
    /// Edges with positive flow, in the edge order
    ///
    pub fn active_edges(&self) -> impl Iterator<Item = (EdgeIndex, F)> + '_ {
        self.edge_flows.iter().filter(|(_, f)| f.is_positive())
    }

    ///
    /// Edges going from the source side of the min cut to the sink side
    ///
    pub fn min_cut_edges<'a>(
        &'a self,
        network: &'a FlowNetwork<F>,
    ) -> impl Iterator<Item = EdgeIndex> + 'a {
        network.graph().edge_indices().filter(move |&e| {
            let (v, w) = network.endpoints(e);
            self.min_cut_source_side.contains(&v) && !self.min_cut_source_side.contains(&w)
        })
    }

    ///
    /// Total capacity of the min cut edges.
    ///
    /// Equals `total_value` for a report produced by a solver.
    /// `None` if the sum is not representable.
    ///
    pub fn min_cut_capacity(&self, network: &FlowNetwork<F>) -> Option<F> {
        self.min_cut_edges(network)
            .try_fold(F::zero(), |acc, e| acc.checked_add(network.capacity(e)))
    }
}

//
// tests
//
#[cfg(test)]
mod tests {
    use super::super::dinic::Dinic;
    use super::super::mocks::*;
    use super::*;

    fn ei(i: usize) -> EdgeIndex {
        EdgeIndex::new(i)
    }

    #[test]
    fn extract_from_untouched_network() {
        let g = mock_parallel_network();
        let rn = ResidueNetwork::from_network(g.graph());
        let r = FlowReport::extract(&g, &rn, 0);
        assert_eq!(r.total_value(), 0);
        assert_eq!(r.edge_flows(), &Flow::from_vec(vec![0, 0]));
        assert!(r.saturated_edges().is_empty());
        assert_eq!(r.min_cut_source_side().len(), 2);
        assert_eq!(r.active_edges().count(), 0);
    }

    #[test]
    fn extraction_is_idempotent() {
        let g = mock_clrs_network();
        let mut rn = ResidueNetwork::from_network(g.graph());
        let (total, _) = Dinic::run(&mut rn, g.source(), g.sink()).unwrap();
        let r1 = FlowReport::extract(&g, &rn, total);
        let r2 = FlowReport::extract(&g, &rn, total);
        assert_eq!(r1, r2);
    }

    #[test]
    fn min_cut_of_bottleneck_network() {
        let g = mock_bottleneck_network();
        let mut rn = ResidueNetwork::from_network(g.graph());
        let (total, _) = Dinic::run(&mut rn, g.source(), g.sink()).unwrap();
        let r = FlowReport::extract(&g, &rn, total);

        let side: Vec<usize> = r.min_cut_source_side().iter().map(|v| v.index()).collect();
        assert_eq!(side, vec![0, 1, 2, 3, 4]);
        assert_eq!(r.min_cut_edges(&g).collect::<Vec<_>>(), vec![ei(7)]);
        assert_eq!(r.min_cut_capacity(&g), Some(4));
        assert!(r.min_cut_edges(&g).all(|e| r.is_saturated(e)));
    }

    #[test]
    fn zero_capacity_edge_counts_as_saturated() {
        let g = FlowNetwork::build(3, &[(0, 1, 0i64), (0, 2, 2)], 0, 2).unwrap();
        let mut rn = ResidueNetwork::from_network(g.graph());
        let (total, _) = Dinic::run(&mut rn, g.source(), g.sink()).unwrap();
        let r = FlowReport::extract(&g, &rn, total);
        assert_eq!(total, 2);
        assert!(r.is_saturated(ei(0)));
        assert!(r.is_saturated(ei(1)));
        assert_eq!(r.active_edges().collect::<Vec<_>>(), vec![(ei(1), 2)]);
    }
}
