//!
//! rustmaxflow solves [maximum flow problem](https://en.wikipedia.org/wiki/Maximum_flow_problem)
//! of integer capacity with Dinic's blocking flow algorithm,
//! and reports the flow of each edge together with a minimum cut.
//!
pub mod max_flow;

use max_flow::instance::InstanceError;
use max_flow::MaxFlowError;
use thiserror::Error;

/// Any failure between reading an instance and printing its report
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Instance(#[from] InstanceError),
    #[error(transparent)]
    MaxFlow(#[from] MaxFlowError),
}
