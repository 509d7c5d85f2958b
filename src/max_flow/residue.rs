//! Residue graph related definitions
//! - ResidueEdge
//! - ResidueDirection
//! - ResidueNetwork
//!
//! Each edge `e` of the FlowNetwork has its own pair of residue edges:
//! the Up edge `2e` and the Down edge `2e+1`. The partner of a residue edge is
//! found by index (`pair`), never by looking up a node pair, so parallel and
//! antiparallel edges of the FlowNetwork never share residual capacity.
//!
use super::flow::Flow;
use super::{CapacityLike, FlowEdge, MaxFlowError};
use itertools::Itertools; // for tuple_windows and join
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use std::collections::VecDeque;

// basic definitions

/// Edge attributes used in ResidueGraph
#[derive(Debug, Copy, Clone)]
pub struct ResidueEdge<F: CapacityLike> {
    /// The movable amount of the flow (residual capacity)
    pub count: F,
    /// Original edge index of the source graph
    pub target: EdgeIndex,
    /// +1 or -1
    pub direction: ResidueDirection,
}

impl<F: CapacityLike> ResidueEdge<F> {
    pub fn new(count: F, target: EdgeIndex, direction: ResidueDirection) -> ResidueEdge<F> {
        ResidueEdge {
            count,
            target,
            direction,
        }
    }
}

/// Residue direction enum
/// residue edge has two types
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResidueDirection {
    /// Up edge: it can increase(+1) flow
    Up,
    /// Down edge: it can decrease(-1) flow
    Down,
}

impl std::fmt::Display for ResidueDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ResidueDirection::Up => write!(f, "+"),
            ResidueDirection::Down => write!(f, "-"),
        }
    }
}

/// ResidueGraph definition
pub type ResidueGraph<F> = DiGraph<(), ResidueEdge<F>>;

/// Residue network of a FlowNetwork
///
/// * `graph`: residue edges, `2e` (Up) and `2e+1` (Down) for each original edge `e`
/// * `adjacency`: residue edges leaving each node, in the original edge order
///
/// Invariant: `graph[2e].count + graph[2e+1].count` stays equal to the capacity
/// of `e` used for solving (zero for self-loops).
#[derive(Debug, Clone)]
pub struct ResidueNetwork<F: CapacityLike> {
    graph: ResidueGraph<F>,
    adjacency: Vec<Vec<EdgeIndex>>,
}

/// Up residue edge of the original edge `e`
pub fn up_edge(e: EdgeIndex) -> EdgeIndex {
    EdgeIndex::new(2 * e.index())
}

/// Down residue edge of the original edge `e`
pub fn down_edge(e: EdgeIndex) -> EdgeIndex {
    EdgeIndex::new(2 * e.index() + 1)
}

/// The other residue edge of the same original edge
pub fn pair(re: EdgeIndex) -> EdgeIndex {
    EdgeIndex::new(re.index() ^ 1)
}

//
// conversion functions
//

impl<F: CapacityLike> ResidueNetwork<F> {
    ///
    /// Convert FlowNetwork with zero flow into ResidueNetwork.
    ///
    /// FlowNetwork
    /// ```text
    /// v -> w
    ///  e = u
    /// ```
    ///
    /// into ResidueNetwork
    /// ```text
    /// v -> w
    ///  2e   = (u, +)
    /// w -> v
    ///  2e+1 = (0, -)
    /// ```
    ///
    /// Self-loop `v -> v` gets `u = 0` so that it never carries flow.
    ///
    pub fn from_network<N, E: FlowEdge<F>>(graph: &DiGraph<N, E>) -> ResidueNetwork<F> {
        let mut rg: ResidueGraph<F> =
            ResidueGraph::with_capacity(graph.node_count(), 2 * graph.edge_count());
        for _ in graph.node_indices() {
            rg.add_node(());
        }
        let mut adjacency = vec![Vec::new(); graph.node_count()];

        for (i, edge) in graph.raw_edges().iter().enumerate() {
            let e = EdgeIndex::new(i);
            let (v, w) = (edge.source(), edge.target());
            let capacity = if v == w {
                log::debug!("ignoring self-loop e{} on node {}", i, v.index());
                F::zero()
            } else {
                edge.weight.capacity()
            };

            let up = rg.add_edge(v, w, ResidueEdge::new(capacity, e, ResidueDirection::Up));
            let down = rg.add_edge(w, v, ResidueEdge::new(F::zero(), e, ResidueDirection::Down));
            debug_assert_eq!(up, up_edge(e));
            debug_assert_eq!(down, down_edge(e));
            adjacency[v.index()].push(up);
            adjacency[w.index()].push(down);
        }

        ResidueNetwork {
            graph: rg,
            adjacency,
        }
    }

    /// underlying petgraph DiGraph
    pub fn graph(&self) -> &ResidueGraph<F> {
        &self.graph
    }
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
    /// Residue edges leaving node `v`, in the original edge order
    pub fn arcs_from(&self, v: NodeIndex) -> &[EdgeIndex] {
        &self.adjacency[v.index()]
    }
    /// Residual capacity of the residue edge
    pub fn count(&self, re: EdgeIndex) -> F {
        self.graph[re].count
    }
    pub fn tail(&self, re: EdgeIndex) -> NodeIndex {
        self.graph.raw_edges()[re.index()].source()
    }
    pub fn head(&self, re: EdgeIndex) -> NodeIndex {
        self.graph.raw_edges()[re.index()].target()
    }

    ///
    /// Move `amount` of flow along the residue edge:
    /// its count decreases and the count of its pair increases.
    ///
    pub fn push(&mut self, re: EdgeIndex, amount: F) -> Result<(), MaxFlowError> {
        let count = self.graph[re].count;
        debug_assert!(amount <= count, "pushing more than the residual capacity");
        self.graph[re].count = count
            .checked_sub(amount)
            .ok_or(MaxFlowError::CapacityOverflow)?;
        let p = pair(re);
        self.graph[p].count = self.graph[p]
            .count
            .checked_add(amount)
            .ok_or(MaxFlowError::CapacityOverflow)?;
        Ok(())
    }

    ///
    /// Convert the residue network into the flow on the original edges.
    ///
    /// The count of a Down edge is the amount of flow that can be sent back,
    /// that is the flow of its `target` edge.
    ///
    pub fn flows(&self) -> Flow<F> {
        let mut flow = vec![F::zero(); self.graph.edge_count() / 2];
        for ew in self.graph.edge_weights() {
            if ew.direction == ResidueDirection::Down {
                flow[ew.target.index()] = ew.count;
            }
        }
        Flow::from_vec(flow)
    }

    ///
    /// Human readable form of a residue path, such as `e0+,e3-,e5+`
    ///
    pub fn format_path(&self, path: &[EdgeIndex]) -> String {
        path.iter()
            .map(|&re| {
                let ew = &self.graph[re];
                format!("e{}{}", ew.target.index(), ew.direction)
            })
            .join(",")
    }

    ///
    /// Breadth-first distances from `source` over residue edges of positive count.
    ///
    /// Unreachable nodes are `None`.
    ///
    pub fn distances_from(&self, source: NodeIndex) -> Vec<Option<usize>> {
        let mut dist = vec![None; self.node_count()];
        let mut queue = VecDeque::new();
        dist[source.index()] = Some(0);
        queue.push_back(source);
        while let Some(v) = queue.pop_front() {
            let d = dist[v.index()].unwrap_or_default();
            for &re in self.arcs_from(v) {
                let w = self.head(re);
                if self.count(re).is_positive() && dist[w.index()].is_none() {
                    dist[w.index()] = Some(d + 1);
                    queue.push_back(w);
                }
            }
        }
        dist
    }

    ///
    /// Nodes reachable from `source` via residue edges of positive count.
    ///
    pub fn reachable_from(&self, source: NodeIndex) -> Vec<NodeIndex> {
        self.distances_from(source)
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_some())
            .map(|(i, _)| NodeIndex::new(i))
            .collect()
    }

    ///
    /// Check if the residue edges form a path (head of each edge is the tail of the next)
    ///
    pub fn is_path(&self, edges: &[EdgeIndex]) -> bool {
        edges
            .iter()
            .tuple_windows()
            .all(|(&a, &b)| self.head(a) == self.tail(b))
    }
}
