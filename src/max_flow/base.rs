//! # `FlowNetwork`
//!
//! Validated max flow problem instance.
//!
//! `FlowNetwork` is a DiGraph whose edge is `MaxFlowEdge`, together with the
//! source and sink nodes. Edge `i` of the input list becomes `EdgeIndex::new(i)`,
//! so every result can be attributed to the caller's edge order.
//!
use super::{CapacityLike, FlowEdge, MaxFlowError};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};

/// Edge attributes used in FlowNetwork.
///
/// It has
/// * Capacity u(e)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MaxFlowEdge<F: CapacityLike> {
    /// capacity (upper limit of flow) of the edge u(e)
    pub capacity: F,
}

impl<F: CapacityLike> MaxFlowEdge<F> {
    pub fn new(capacity: F) -> MaxFlowEdge<F> {
        MaxFlowEdge { capacity }
    }
}

impl<F: CapacityLike> FlowEdge<F> for MaxFlowEdge<F> {
    fn capacity(&self) -> F {
        self.capacity
    }
}

pub type MaxFlowGraph<F> = DiGraph<(), MaxFlowEdge<F>>;

/// Max flow problem instance
///
/// Invariants (checked in `build`)
/// * source and sink are distinct valid nodes
/// * every edge endpoint is a valid node
/// * every capacity is non-negative
///
/// There is no mutable access after construction.
#[derive(Debug, Clone)]
pub struct FlowNetwork<F: CapacityLike> {
    graph: MaxFlowGraph<F>,
    source: NodeIndex,
    sink: NodeIndex,
}

impl<F: CapacityLike> FlowNetwork<F> {
    ///
    /// Validate and store a network of `node_count` nodes.
    ///
    /// `edges` is a list of `(from, to, capacity)`.
    /// Parallel edges and self-loops are accepted as they are.
    ///
    pub fn build(
        node_count: usize,
        edges: &[(usize, usize, F)],
        source: usize,
        sink: usize,
    ) -> Result<FlowNetwork<F>, MaxFlowError> {
        let check_node = |node: usize| {
            if node < node_count {
                Ok(())
            } else {
                Err(MaxFlowError::InvalidNodeReference { node, node_count })
            }
        };
        check_node(source)?;
        check_node(sink)?;
        if source == sink {
            return Err(MaxFlowError::DegenerateTerminals { node: source });
        }

        let mut graph = MaxFlowGraph::with_capacity(node_count, edges.len());
        for _ in 0..node_count {
            graph.add_node(());
        }
        for (i, &(from, to, capacity)) in edges.iter().enumerate() {
            check_node(from)?;
            check_node(to)?;
            if capacity.is_negative() {
                return Err(MaxFlowError::InvalidCapacity { edge: i });
            }
            graph.add_edge(
                NodeIndex::new(from),
                NodeIndex::new(to),
                MaxFlowEdge::new(capacity),
            );
        }

        Ok(FlowNetwork {
            graph,
            source: NodeIndex::new(source),
            sink: NodeIndex::new(sink),
        })
    }

    /// underlying petgraph DiGraph (read only)
    pub fn graph(&self) -> &MaxFlowGraph<F> {
        &self.graph
    }
    pub fn source(&self) -> NodeIndex {
        self.source
    }
    pub fn sink(&self) -> NodeIndex {
        self.sink
    }
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
    /// capacity of the edge as declared by the caller
    pub fn capacity(&self, e: EdgeIndex) -> F {
        self.graph[e].capacity
    }
    /// `(from, to)` of the edge
    pub fn endpoints(&self, e: EdgeIndex) -> (NodeIndex, NodeIndex) {
        let edge = &self.graph.raw_edges()[e.index()];
        (edge.source(), edge.target())
    }
    pub fn is_self_loop(&self, e: EdgeIndex) -> bool {
        let (v, w) = self.endpoints(e);
        v == w
    }
}
