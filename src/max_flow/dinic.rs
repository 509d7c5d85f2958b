//!
//! Dinic's blocking flow algorithm
//!
//! Each phase
//! 1. LevelBuild: label nodes with their BFS distance from source in the residue network.
//!    If sink is unlabeled, the current flow is maximum (Terminal).
//! 2. BlockingFlow: push flow along shortest augmenting paths found by DFS on
//!    admissible edges (`level(w) == level(v) + 1`) until none is left.
//!
//! The source-sink distance strictly increases in every phase, so there are at most `n - 1` phases.
//!
use super::residue::ResidueNetwork;
use super::{CapacityLike, FlowNetwork, FlowReport, MaxFlowError, MaxFlowSolver};
use petgraph::graph::{EdgeIndex, NodeIndex};

/// Statistics of a single solver run
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// number of blocking flow phases
    pub phases: usize,
    /// number of augmenting paths pushed in total
    pub augmenting_paths: usize,
}

/// Dinic max flow solver
///
/// It holds no state; every `solve` works on its own residue network.
#[derive(Debug, Copy, Clone, Default)]
pub struct Dinic;

enum Phase {
    LevelBuild,
    BlockingFlow(Vec<Option<usize>>),
    Terminal,
}

impl Dinic {
    ///
    /// Run phases on the residue network until no augmenting path remains.
    ///
    /// Returns the value of the flow pushed from `source` to `sink`, which must be
    /// distinct (`FlowNetwork::build` guarantees it).
    /// On error the residue network is left in an unspecified state.
    ///
    pub fn run<F: CapacityLike>(
        rn: &mut ResidueNetwork<F>,
        source: NodeIndex,
        sink: NodeIndex,
    ) -> Result<(F, SolveStats), MaxFlowError> {
        debug_assert_ne!(source, sink);

        let mut total = F::zero();
        let mut stats = SolveStats::default();
        let mut phase = Phase::LevelBuild;

        loop {
            phase = match phase {
                Phase::LevelBuild => {
                    let level = rn.distances_from(source);
                    match level[sink.index()] {
                        Some(d) => {
                            stats.phases += 1;
                            log::debug!("phase {}: sink at distance {}", stats.phases, d);
                            Phase::BlockingFlow(level)
                        }
                        None => Phase::Terminal,
                    }
                }
                Phase::BlockingFlow(mut level) => {
                    let pushed = blocking_flow(rn, &mut level, source, sink, &mut stats)?;
                    total = total
                        .checked_add(pushed)
                        .ok_or(MaxFlowError::CapacityOverflow)?;
                    log::debug!("phase {}: pushed {} (total {})", stats.phases, pushed, total);
                    Phase::LevelBuild
                }
                Phase::Terminal => break,
            };
        }

        Ok((total, stats))
    }
}

impl<F: CapacityLike> MaxFlowSolver<F> for Dinic {
    fn solve(&self, network: &FlowNetwork<F>) -> Result<FlowReport<F>, MaxFlowError> {
        let mut rn = ResidueNetwork::from_network(network.graph());
        let (total, stats) = Dinic::run(&mut rn, network.source(), network.sink())?;
        log::info!(
            "dinic: max flow {} in {} phases ({} augmenting paths)",
            total,
            stats.phases,
            stats.augmenting_paths
        );
        Ok(FlowReport::extract(network, &rn, total))
    }
}

///
/// Find a blocking flow in the level graph `level`.
///
/// The DFS keeps the current path in `path` and a current-edge pointer for
/// each node. Edges that became saturated and nodes that turned out to be
/// dead ends are never visited again in this phase.
///
fn blocking_flow<F: CapacityLike>(
    rn: &mut ResidueNetwork<F>,
    level: &mut [Option<usize>],
    source: NodeIndex,
    sink: NodeIndex,
    stats: &mut SolveStats,
) -> Result<F, MaxFlowError> {
    let mut current = vec![0; rn.node_count()];
    let mut path: Vec<EdgeIndex> = Vec::new();
    let mut pushed = F::zero();
    let mut v = source;

    loop {
        if v == sink {
            debug_assert!(rn.is_path(&path));
            let bottleneck = path
                .iter()
                .map(|&re| rn.count(re))
                .min()
                .unwrap_or_default();
            for &re in path.iter() {
                rn.push(re, bottleneck)?;
            }
            pushed = pushed
                .checked_add(bottleneck)
                .ok_or(MaxFlowError::CapacityOverflow)?;
            stats.augmenting_paths += 1;
            log::trace!("augment {} along {}", bottleneck, rn.format_path(&path));

            // retreat to the tail of the first saturated edge
            let k = path
                .iter()
                .position(|&re| !rn.count(re).is_positive())
                .unwrap_or(0);
            v = match path.get(k) {
                Some(&re) => rn.tail(re),
                None => source,
            };
            path.truncate(k);
            continue;
        }

        match next_admissible(rn, level, &mut current, v) {
            Some(re) => {
                path.push(re);
                v = rn.head(re);
            }
            None => {
                // dead end: remove v from the level graph
                level[v.index()] = None;
                match path.pop() {
                    Some(re) => {
                        v = rn.tail(re);
                        current[v.index()] += 1;
                    }
                    None => break,
                }
            }
        }
    }

    Ok(pushed)
}

///
/// Advance the current-edge pointer of `v` to its next admissible edge.
///
fn next_admissible<F: CapacityLike>(
    rn: &ResidueNetwork<F>,
    level: &[Option<usize>],
    current: &mut [usize],
    v: NodeIndex,
) -> Option<EdgeIndex> {
    let lv = level[v.index()]?;
    let arcs = rn.arcs_from(v);
    while let Some(&re) = arcs.get(current[v.index()]) {
        if rn.count(re).is_positive() && level[rn.head(re).index()] == Some(lv + 1) {
            return Some(re);
        }
        current[v.index()] += 1;
    }
    None
}

//
// tests
//
#[cfg(test)]
mod tests {
    use super::super::flow::{flow_value, is_valid_flow};
    use super::super::mocks::*;
    use super::*;

    fn ei(i: usize) -> EdgeIndex {
        EdgeIndex::new(i)
    }

    fn solve(network: &FlowNetwork<i64>) -> FlowReport<i64> {
        Dinic.solve(network).unwrap()
    }

    #[test]
    fn scenario_single_bottleneck_into_sink() {
        let g = mock_bottleneck_network();
        let r = solve(&g);
        assert_eq!(r.total_value(), 4);
        // (4, 5, 4) is saturated and (2, 4) is the only way into node 4
        assert!(r.is_saturated(ei(7)));
        assert_eq!(r.flow(ei(7)), 4);
        assert_eq!(r.flow(ei(5)), 4);
        assert!(is_valid_flow(r.edge_flows(), &g));
        assert_eq!(flow_value(r.edge_flows(), &g), Some(4));
    }

    #[test]
    fn scenario_disconnected() {
        let g = mock_disconnected_network();
        let r = solve(&g);
        assert_eq!(r.total_value(), 0);
        assert!(r.edge_flows().iter().all(|(_, f)| f == 0));
        let side: Vec<usize> = r.min_cut_source_side().iter().map(|v| v.index()).collect();
        assert_eq!(side, vec![0, 1]);
    }

    #[test]
    fn scenario_parallel_edges() {
        let g = mock_parallel_network();
        let r = solve(&g);
        assert_eq!(r.total_value(), 7);
        assert_eq!(r.flow(ei(0)), 3);
        assert_eq!(r.flow(ei(1)), 4);
        assert!(r.is_saturated(ei(0)));
        assert!(r.is_saturated(ei(1)));
    }

    #[test]
    fn scenario_self_loop_ignored() {
        let g = mock_self_loop_network();
        let r = solve(&g);
        assert_eq!(r.total_value(), 5);
        assert_eq!(r.flow(ei(0)), 0);
        assert!(!r.is_saturated(ei(0)));
        assert_eq!(r.flow(ei(1)), 5);
    }

    #[test]
    fn classic_network() {
        // CLRS figure 26.1, max flow is 23
        let g = mock_clrs_network();
        let r = solve(&g);
        assert_eq!(r.total_value(), 23);
        assert!(is_valid_flow(r.edge_flows(), &g));
        assert_eq!(r.min_cut_capacity(&g), Some(23));
    }

    #[test]
    fn antiparallel_edges_are_not_cancelled() {
        // 0 -> 1 -> 2 with an unrelated 1 -> 0 edge
        let g = FlowNetwork::build(3, &[(0, 1, 5i64), (1, 0, 3), (1, 2, 4)], 0, 2).unwrap();
        let r = solve(&g);
        assert_eq!(r.total_value(), 4);
        assert_eq!(r.flow(ei(0)), 4);
        assert_eq!(r.flow(ei(1)), 0);
        assert_eq!(r.flow(ei(2)), 4);
    }

    #[test]
    fn flow_is_rerouted_through_reverse_edges() {
        // the first phase pushes along 0-1-2-5, which blocks 3-2-5.
        // the second phase undoes 1-2 via 0-3-2-1-4-6-5.
        let g = FlowNetwork::build(
            7,
            &[
                (0, 1, 1i64),
                (1, 2, 1),
                (2, 5, 1),
                (0, 3, 1),
                (3, 2, 1),
                (1, 4, 1),
                (4, 6, 1),
                (6, 5, 1),
            ],
            0,
            5,
        )
        .unwrap();
        let mut rn = ResidueNetwork::from_network(g.graph());
        let (total, stats) = Dinic::run(&mut rn, g.source(), g.sink()).unwrap();
        assert_eq!(total, 2);
        assert_eq!(stats.phases, 2);
        let flow = rn.flows();
        assert_eq!(flow[ei(1)], 0);
        assert_eq!(flow[ei(4)], 1);
        assert_eq!(flow[ei(5)], 1);

        let r = FlowReport::extract(&g, &rn, total);
        assert!(is_valid_flow(r.edge_flows(), &g));
        assert!(!r.is_saturated(ei(1)));
    }

    #[test]
    fn phases_are_bounded_by_node_count() {
        let g = mock_clrs_network();
        let mut rn = ResidueNetwork::from_network(g.graph());
        let (total, stats) = Dinic::run(&mut rn, g.source(), g.sink()).unwrap();
        assert_eq!(total, 23);
        assert!(stats.phases >= 1);
        assert!(stats.phases < g.node_count());
        assert!(stats.augmenting_paths >= stats.phases);
    }

    #[test]
    fn unsigned_capacities() {
        let g = FlowNetwork::build(3, &[(0, 1, 7usize), (1, 2, 3), (0, 2, 2)], 0, 2).unwrap();
        let r = Dinic.solve(&g).unwrap();
        assert_eq!(r.total_value(), 5);
    }

    #[test]
    fn near_limit_capacities_do_not_overflow() {
        let g = FlowNetwork::build(3, &[(0, 1, i32::MAX), (1, 2, i32::MAX)], 0, 2).unwrap();
        let r = Dinic.solve(&g).unwrap();
        assert_eq!(r.total_value(), i32::MAX);

        // the source can send more than i32::MAX, but the flow into sink is small
        let g = FlowNetwork::build(3, &[(0, 1, i32::MAX), (0, 2, 1), (1, 2, 4)], 0, 2).unwrap();
        let r = Dinic.solve(&g).unwrap();
        assert_eq!(r.total_value(), 5);
        assert_eq!(r.flow(ei(0)), 4);

        let g = FlowNetwork::build(3, &[(0, 1, i32::MAX), (0, 1, 1), (1, 2, 5)], 0, 2).unwrap();
        assert_eq!(Dinic.solve(&g).unwrap().total_value(), 5);
    }

    #[test]
    fn unrepresentable_flow_value_is_an_error() {
        // two parallel edges into sink, each at the limit
        let g = FlowNetwork::build(2, &[(0, 1, i32::MAX), (0, 1, i32::MAX)], 0, 1).unwrap();
        assert_eq!(Dinic.solve(&g).unwrap_err(), MaxFlowError::CapacityOverflow);
    }
}
