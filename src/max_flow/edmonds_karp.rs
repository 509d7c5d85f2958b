//!
//! Edmonds-Karp: augment along one shortest path per BFS.
//!
//! Slower than Dinic (`O(VE^2)`), kept as an independent solver behind the
//! same `MaxFlowSolver` interface.
//!
use super::residue::ResidueNetwork;
use super::{CapacityLike, FlowNetwork, FlowReport, MaxFlowError, MaxFlowSolver};
use petgraph::graph::{EdgeIndex, NodeIndex};
use std::collections::VecDeque;

#[derive(Debug, Copy, Clone, Default)]
pub struct EdmondsKarp;

impl EdmondsKarp {
    ///
    /// Augment along shortest paths until sink is unreachable.
    /// Returns the value of the flow. `source` and `sink` must be distinct.
    ///
    pub fn run<F: CapacityLike>(
        rn: &mut ResidueNetwork<F>,
        source: NodeIndex,
        sink: NodeIndex,
    ) -> Result<F, MaxFlowError> {
        debug_assert_ne!(source, sink);
        let mut total = F::zero();
        while let Some(path) = shortest_path(rn, source, sink) {
            let bottleneck = path
                .iter()
                .map(|&re| rn.count(re))
                .min()
                .unwrap_or_default();
            for &re in path.iter() {
                rn.push(re, bottleneck)?;
            }
            total = total
                .checked_add(bottleneck)
                .ok_or(MaxFlowError::CapacityOverflow)?;
        }
        Ok(total)
    }
}

impl<F: CapacityLike> MaxFlowSolver<F> for EdmondsKarp {
    fn solve(&self, network: &FlowNetwork<F>) -> Result<FlowReport<F>, MaxFlowError> {
        let mut rn = ResidueNetwork::from_network(network.graph());
        let total = EdmondsKarp::run(&mut rn, network.source(), network.sink())?;
        log::info!("edmonds-karp: max flow {}", total);
        Ok(FlowReport::extract(network, &rn, total))
    }
}

///
/// BFS over residue edges of positive count, returning the residue edges of a
/// shortest source-sink path.
///
fn shortest_path<F: CapacityLike>(
    rn: &ResidueNetwork<F>,
    source: NodeIndex,
    sink: NodeIndex,
) -> Option<Vec<EdgeIndex>> {
    let mut parent: Vec<Option<EdgeIndex>> = vec![None; rn.node_count()];
    let mut visited = vec![false; rn.node_count()];
    let mut queue = VecDeque::new();
    visited[source.index()] = true;
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        if v == sink {
            break;
        }
        for &re in rn.arcs_from(v) {
            let w = rn.head(re);
            if rn.count(re).is_positive() && !visited[w.index()] {
                visited[w.index()] = true;
                parent[w.index()] = Some(re);
                queue.push_back(w);
            }
        }
    }

    if !visited[sink.index()] {
        return None;
    }
    let mut path = Vec::new();
    let mut v = sink;
    while let Some(re) = parent[v.index()] {
        path.push(re);
        v = rn.tail(re);
    }
    path.reverse();
    Some(path)
}
