//! Minimum spanning tree construction with Kruskal's algorithm.
//!
//! Candidate edges are all unordered pairs `(i, j)`, `i < j`, whose distance
//! matrix entry is nonzero. A zero entry means "no edge": the input format
//! this crate was built around encodes absent connections as zeros, so a
//! genuine zero-weight edge cannot be represented and is invisible to this
//! builder. The tour solver does not share that convention.
//!
//! Candidates are sorted by weight with a stable sort, so equal-weight edges
//! keep their enumeration order and the result is deterministic. Edges are
//! then accepted greedily whenever their endpoints lie in different
//! union-find components, until N-1 edges form the tree.
//!
//! # Complexity
//!
//! O(E log E) for the sort plus near-constant amortized union-find
//! operations; E <= N(N-1)/2 with N <= 16.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data_structures::graph::DenseGraph;

/// Spanning-tree construction failures.
#[derive(Debug, Error)]
pub enum MstError {
    /// Fewer than N-1 edges could be accepted: the graph has no spanning
    /// tree. Structural property of the input; retrying cannot help.
    #[error("graph is not connected; no spanning tree exists")]
    Disconnected,
}

/// Undirected tree edge with `source < target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstEdge {
    pub source: usize,
    pub target: usize,
    pub weight: u32,
}

/// A minimum spanning tree: exactly N-1 edges and their total weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstResult {
    /// Accepted edges, in acceptance order.
    pub edges: Vec<MstEdge>,
    /// Sum of the accepted edge weights.
    pub total_weight: u64,
}

/// Union-find with path compression and union by rank.
///
/// Amortized O(α(n)) per operation. Working state of a single
/// [`minimum_spanning_tree`] call; never outlives it.
#[derive(Debug)]
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Root of the set containing `x`, compressing the path on the way.
    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `false` if they were already in the same set, in which case
    /// the edge `(x, y)` would close a cycle.
    fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }

    #[cfg(test)]
    fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}

/// Computes a minimum-weight spanning tree of the distance matrix.
///
/// Returns the N-1 accepted edges and their total weight, or
/// [`MstError::Disconnected`] when the nonzero-distance edges cannot connect
/// all nodes. A single-node graph has zero candidate edges and is reported
/// as disconnected, matching the input format's expectations.
pub fn minimum_spanning_tree(graph: &DenseGraph) -> Result<MstResult, MstError> {
    let n = graph.node_count();

    let mut candidates = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let weight = graph.distance(i, j);
            if weight != 0 {
                candidates.push(MstEdge {
                    source: i,
                    target: j,
                    weight,
                });
            }
        }
    }

    if candidates.is_empty() {
        return Err(MstError::Disconnected);
    }

    // Stable: equal weights keep enumeration order.
    candidates.sort_by_key(|edge| edge.weight);

    let mut forest = UnionFind::new(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight = 0u64;

    for edge in candidates {
        if edges.len() == n - 1 {
            break;
        }
        if forest.union(edge.source, edge.target) {
            debug!(
                "mst: accepted edge ({}, {}) weight {}",
                edge.source, edge.target, edge.weight
            );
            total_weight += u64::from(edge.weight);
            edges.push(edge);
        }
    }

    if edges.len() != n - 1 {
        return Err(MstError::Disconnected);
    }

    Ok(MstResult {
        edges,
        total_weight,
    })
}
