//!
//! utils
//!
use super::{CapacityLike, FlowNetwork, FlowReport};
use itertools::Itertools;
use petgraph::dot::{Config, Dot};
use petgraph::graph::Graph;
use petgraph::EdgeType;

///
/// Dump the graph in dot format to the trace log
///
pub fn draw<'a, N: 'a, E: 'a, Ty, Ix>(graph: &'a Graph<N, E, Ty, Ix>)
where
    E: std::fmt::Debug,
    N: std::fmt::Debug,
    Ty: EdgeType,
    Ix: petgraph::graph::IndexType,
{
    log::trace!("{:?}", Dot::with_config(graph, &[Config::NodeIndexLabel]));
}

///
/// Human readable summary of a max flow report.
///
/// Lists the edges carrying flow (or every edge with `all_edges`),
/// marking the saturated ones.
///
pub struct ReportView<'a, F: CapacityLike> {
    pub network: &'a FlowNetwork<F>,
    pub report: &'a FlowReport<F>,
    pub all_edges: bool,
}

impl<F: CapacityLike> std::fmt::Display for ReportView<'_, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (network, report) = (self.network, self.report);
        writeln!(f, "nodes  : {}", network.node_count())?;
        writeln!(f, "edges  : {}", network.edge_count())?;
        writeln!(f, "source : {}", network.source().index())?;
        writeln!(f, "sink   : {}", network.sink().index())?;
        writeln!(f)?;
        writeln!(f, "max flow: {}", report.total_value())?;
        writeln!(f)?;

        let edges: Vec<_> = if self.all_edges {
            report.edge_flows().iter().collect()
        } else {
            report.active_edges().collect()
        };
        if edges.is_empty() {
            writeln!(f, "no edge carries flow")?;
        } else {
            writeln!(f, "edges carrying flow:")?;
            for (e, flow) in edges {
                let (v, w) = network.endpoints(e);
                let mark = if report.is_saturated(e) {
                    " (saturated)"
                } else {
                    ""
                };
                writeln!(
                    f,
                    "{:>3} -> {:>3} | cap = {:>4} | flow = {:>4}{}",
                    v.index(),
                    w.index(),
                    network.capacity(e),
                    flow,
                    mark
                )?;
            }
        }
        writeln!(f)?;
        writeln!(
            f,
            "min cut source side: {{{}}}",
            report
                .min_cut_source_side()
                .iter()
                .map(|v| v.index())
                .join(", ")
        )
    }
}

pub fn format_report<F: CapacityLike>(
    network: &FlowNetwork<F>,
    report: &FlowReport<F>,
    all_edges: bool,
) -> String {
    ReportView {
        network,
        report,
        all_edges,
    }
    .to_string()
}
