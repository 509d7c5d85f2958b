use super::base::FlowNetwork;

//
// mock network generation functions
//
// They are built from literal edge lists that are known to be valid,
// so `build` never fails here.
//

fn network(node_count: usize, edges: &[(usize, usize, i64)], s: usize, t: usize) -> FlowNetwork<i64> {
    match FlowNetwork::build(node_count, edges, s, t) {
        Ok(network) => network,
        Err(err) => panic!("invalid mock network: {}", err),
    }
}

/// 0 -5-> 1 -5-> 2 -5-> 3
pub fn mock_chain_network() -> FlowNetwork<i64> {
    network(4, &[(0, 1, 5), (1, 2, 5), (2, 3, 5)], 0, 3)
}

/// sink has only one incoming edge `(4, 5, 4)`, so the max flow is 4
pub fn mock_bottleneck_network() -> FlowNetwork<i64> {
    network(
        6,
        &[
            (0, 1, 16),
            (0, 2, 13),
            (1, 2, 10),
            (1, 3, 12),
            (2, 1, 4),
            (2, 4, 14),
            (3, 2, 9),
            (4, 5, 4),
        ],
        0,
        5,
    )
}

/// sink 2 is isolated
pub fn mock_disconnected_network() -> FlowNetwork<i64> {
    network(3, &[(0, 1, 5)], 0, 2)
}

/// two parallel edges 0 -> 1 of capacity 3 and 4
pub fn mock_parallel_network() -> FlowNetwork<i64> {
    network(2, &[(0, 1, 3), (0, 1, 4)], 0, 1)
}

/// self-loop on the source besides the edge 0 -> 1
pub fn mock_self_loop_network() -> FlowNetwork<i64> {
    network(2, &[(0, 0, 10), (0, 1, 5)], 0, 1)
}

/// network cited from Introduction to Algorithms (CLRS) figure 26.1, max flow is 23
pub fn mock_clrs_network() -> FlowNetwork<i64> {
    network(
        6,
        &[
            (0, 1, 16),
            (0, 2, 13),
            (1, 3, 12),
            (2, 1, 4),
            (2, 4, 14),
            (3, 2, 9),
            (3, 5, 20),
            (4, 3, 7),
            (4, 5, 4),
        ],
        0,
        5,
    )
}
