//!
//! Text instance loader
//!
//! ```text
//! # comment
//! n m s t
//! u v cap    (m lines)
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.
//! Only the shape of the text is checked here; node ranges and capacities are
//! validated by `FlowNetwork::build`.
//!
use super::{FlowNetwork, MaxFlowError};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("failed to read instance: {0}")]
    Io(#[from] std::io::Error),
    #[error("instance has no data lines")]
    Empty,
    #[error("line {line}: invalid header, expected `n m s t`")]
    InvalidHeader { line: usize },
    #[error("expected {expected} edges, but found {found}")]
    EdgeCountMismatch { expected: usize, found: usize },
    #[error("line {line}: invalid edge, expected `u v cap`")]
    InvalidEdgeLine { line: usize },
    #[error("line {line}: `{token}` is not a valid integer")]
    InvalidInteger { line: usize, token: String },
}

/// Parsed max flow instance, as written in the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub node_count: usize,
    /// number of edges declared in the header
    pub edge_count: usize,
    pub source: usize,
    pub sink: usize,
    /// `(u, v, capacity)`
    pub edges: Vec<(usize, usize, i64)>,
}

impl Instance {
    ///
    /// Validate the instance as a FlowNetwork
    ///
    pub fn to_network(&self) -> Result<FlowNetwork<i64>, MaxFlowError> {
        FlowNetwork::build(self.node_count, &self.edges, self.source, self.sink)
    }
}

fn parse_token<T: std::str::FromStr>(line: usize, token: &str) -> Result<T, InstanceError> {
    token.parse().map_err(|_| InstanceError::InvalidInteger {
        line,
        token: token.to_string(),
    })
}

///
/// Parse an instance from its text.
///
/// Line numbers in errors are 1-based and count skipped lines too.
///
pub fn parse_instance(text: &str) -> Result<Instance, InstanceError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, raw)| (i + 1, raw.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(i, line)| (i, line.split_whitespace().collect::<Vec<_>>()));

    let (header_line, header) = lines.next().ok_or(InstanceError::Empty)?;
    let [n, m, s, t] = header[..] else {
        return Err(InstanceError::InvalidHeader { line: header_line });
    };
    let node_count = parse_token(header_line, n)?;
    let edge_count = parse_token(header_line, m)?;
    let source = parse_token(header_line, s)?;
    let sink = parse_token(header_line, t)?;

    let body: Vec<_> = lines.collect();
    if body.len() != edge_count {
        return Err(InstanceError::EdgeCountMismatch {
            expected: edge_count,
            found: body.len(),
        });
    }

    let edges = body
        .iter()
        .map(|(line, parts)| match parts[..] {
            [u, v, cap] => Ok((
                parse_token(*line, u)?,
                parse_token(*line, v)?,
                parse_token(*line, cap)?,
            )),
            _ => Err(InstanceError::InvalidEdgeLine { line: *line }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "parsed instance: n={} m={} s={} t={}",
        node_count,
        edge_count,
        source,
        sink
    );

    Ok(Instance {
        node_count,
        edge_count,
        source,
        sink,
        edges,
    })
}

///
/// Read and parse an instance file.
///
pub fn read_instance<P: AsRef<Path>>(path: P) -> Result<Instance, InstanceError> {
    let text = std::fs::read_to_string(path)?;
    parse_instance(&text)
}
