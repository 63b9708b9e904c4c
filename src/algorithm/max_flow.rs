//! Maximum flow via Edmonds-Karp augmenting paths.
//!
//! The solver copies the capacity matrix into a local residual matrix, then
//! repeatedly finds a shortest augmenting path from source to sink with a
//! breadth-first search over strictly positive residual entries. Each found
//! path is saturated at its bottleneck: the bottleneck is subtracted from the
//! forward residual entries and added to the reverse ones, and accumulated
//! into the running total. The loop ends when the sink becomes unreachable,
//! at which point the residual matrix is dropped; only the aggregate flow
//! value is returned.
//!
//! An unreachable sink — including `source == sink` — is a valid terminal
//! state with flow 0, not an error.
//!
//! Residuals are widened to `u64` internally so reverse-edge additions can
//! never overflow the `u32` capacity domain.

use std::collections::VecDeque;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data_structures::graph::DenseGraph;

/// Flow-solver failures.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Source or sink index does not name a node of the graph.
    #[error("node index {index} out of range for graph of {node_count} nodes")]
    NodeOutOfRange { index: usize, node_count: usize },
}

/// Aggregate result of a max-flow computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowResult {
    /// Maximum achievable flow from source to sink.
    pub flow: u64,
}

/// Computes the maximum flow from `source` to `sink` over the capacity
/// matrix.
///
/// Runs O(N^2) breadth-first searches of O(N^2) each on the dense residual
/// matrix, well within budget for N <= 16.
pub fn max_flow(graph: &DenseGraph, source: usize, sink: usize) -> Result<FlowResult, FlowError> {
    let n = graph.node_count();
    for index in [source, sink] {
        if index >= n {
            return Err(FlowError::NodeOutOfRange {
                index,
                node_count: n,
            });
        }
    }

    if source == sink {
        return Ok(FlowResult { flow: 0 });
    }

    let mut residual: Vec<Vec<u64>> = (0..n)
        .map(|i| (0..n).map(|j| u64::from(graph.capacity(i, j))).collect())
        .collect();

    let mut flow = 0u64;

    while let Some(path) = augmenting_path(&residual, source, sink) {
        let bottleneck = match path.windows(2).map(|w| residual[w[0]][w[1]]).min() {
            Some(bottleneck) => bottleneck,
            None => break,
        };

        for w in path.windows(2) {
            residual[w[0]][w[1]] -= bottleneck;
            residual[w[1]][w[0]] += bottleneck;
        }

        flow += bottleneck;
        debug!("max_flow: augmented along {:?} by {}, total {}", path, bottleneck, flow);
    }

    Ok(FlowResult { flow })
}

/// Shortest augmenting path from `source` to `sink`, or `None` when the sink
/// is unreachable through positive residual entries.
fn augmenting_path(residual: &[Vec<u64>], source: usize, sink: usize) -> Option<Vec<usize>> {
    let n = residual.len();
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();

    visited[source] = true;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for v in 0..n {
            if visited[v] || residual[u][v] == 0 {
                continue;
            }
            visited[v] = true;
            parent[v] = Some(u);

            if v == sink {
                let mut path = vec![sink];
                let mut node = sink;
                while let Some(prev) = parent[node] {
                    path.push(prev);
                    node = prev;
                }
                path.reverse();
                return Some(path);
            }

            queue.push_back(v);
        }
    }

    None
}
