pub mod base;
pub mod capacity;
pub mod dinic;
pub mod edmonds_karp;
pub mod error;
pub mod flow;
pub mod flow_edge;
pub mod instance;
pub mod mocks;
pub mod report;
pub mod residue;
pub mod utils;

pub use base::{FlowNetwork, MaxFlowEdge};
pub use capacity::CapacityLike;
pub use dinic::{Dinic, SolveStats};
pub use edmonds_karp::EdmondsKarp;
pub use error::MaxFlowError;
pub use flow::Flow;
pub use flow_edge::FlowEdge;
pub use report::FlowReport;

use flow::is_valid_flow;
use utils::draw;

///
/// A max flow algorithm: consumes a FlowNetwork and produces a FlowReport.
///
/// Implementations must not keep state between calls.
///
pub trait MaxFlowSolver<F: CapacityLike> {
    fn solve(&self, network: &FlowNetwork<F>) -> Result<FlowReport<F>, MaxFlowError>;
}

//
// public functions
//

///
/// Find the maximum flow on the FlowNetwork with Dinic's algorithm
///
pub fn max_flow<F: CapacityLike>(network: &FlowNetwork<F>) -> Result<FlowReport<F>, MaxFlowError> {
    draw(network.graph());
    let report = Dinic.solve(network)?;
    log::debug!("flow: {}", report.edge_flows());
    debug_assert!(is_valid_flow(report.edge_flows(), network));
    Ok(report)
}

///
/// Validate `(node_count, edges, source, sink)` and find the maximum flow.
///
pub fn max_flow_from_edges<F: CapacityLike>(
    node_count: usize,
    edges: &[(usize, usize, F)],
    source: usize,
    sink: usize,
) -> Result<FlowReport<F>, MaxFlowError> {
    let network = FlowNetwork::build(node_count, edges, source, sink)?;
    max_flow(&network)
}
