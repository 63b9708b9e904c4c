//! Dense graph storage shared by all solvers.
//!
//! The graph is a read-only value holding two independent N x N matrices over
//! one node set — `distance` for the spanning-tree and tour solvers,
//! `capacity` for the flow solver — plus a coordinate pair per node that is
//! reported back to callers verbatim.
//!
//! Shape validation happens exactly once, in [`DenseGraph::new`]. After
//! construction the graph is immutable and safe to share across solvers; each
//! solver owns its own working state and only borrows the graph.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum supported node count.
///
/// The tour solver allocates a `2^N x N` table, so the bound is a hard
/// tractability limit rather than a tuning knob.
pub const MAX_NODES: usize = 16;

/// Construction-time validation failures.
///
/// These are programming or data-shape errors on the caller's side; once a
/// `DenseGraph` exists, its invariants hold for the rest of its life.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node count {0} outside supported range 1..={max}", max = MAX_NODES)]
    NodeCountOutOfRange(usize),

    #[error("{matrix} matrix is not {expected}x{expected}")]
    NotSquare {
        matrix: &'static str,
        expected: usize,
    },

    #[error("expected {expected} coordinate pairs, found {found}")]
    CoordinateCountMismatch { expected: usize, found: usize },
}

/// Immutable dense graph over at most [`MAX_NODES`] nodes.
///
/// Nodes are identified by index `0..node_count`. Distances and capacities
/// are non-negative by construction (`u32`); a distance of `0` is treated as
/// "no edge" by the spanning-tree builder, while the tour solver treats it as
/// a legitimate zero-cost edge. See the module docs of [`crate::algorithm::mst`]
/// for the rationale behind that asymmetry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseGraph {
    node_count: usize,
    distance: Vec<Vec<u32>>,
    capacity: Vec<Vec<u32>>,
    coordinates: Vec<(i64, i64)>,
}

impl DenseGraph {
    /// Builds a graph from its two matrices and coordinate list.
    ///
    /// The node count is taken from the outer length of `distance`; both
    /// matrices must be square of that size and the coordinate list must
    /// match it. Fails with [`GraphError`] otherwise.
    pub fn new(
        distance: Vec<Vec<u32>>,
        capacity: Vec<Vec<u32>>,
        coordinates: Vec<(i64, i64)>,
    ) -> Result<Self, GraphError> {
        let node_count = distance.len();
        if node_count < 1 || node_count > MAX_NODES {
            return Err(GraphError::NodeCountOutOfRange(node_count));
        }

        check_square("distance", &distance, node_count)?;
        if capacity.len() != node_count {
            return Err(GraphError::NotSquare {
                matrix: "capacity",
                expected: node_count,
            });
        }
        check_square("capacity", &capacity, node_count)?;

        if coordinates.len() != node_count {
            return Err(GraphError::CoordinateCountMismatch {
                expected: node_count,
                found: coordinates.len(),
            });
        }

        Ok(Self {
            node_count,
            distance,
            capacity,
            coordinates,
        })
    }

    /// Number of nodes N.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Distance matrix entry `[i][j]`.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> u32 {
        self.distance[i][j]
    }

    /// Capacity matrix entry `[i][j]`.
    #[inline]
    pub fn capacity(&self, i: usize, j: usize) -> u32 {
        self.capacity[i][j]
    }

    /// Node coordinates, pass-through for the caller's reporting layer.
    ///
    /// No geometric computation in this crate consumes these.
    #[inline]
    pub fn coordinates(&self) -> &[(i64, i64)] {
        &self.coordinates
    }
}

fn check_square(name: &'static str, matrix: &[Vec<u32>], expected: usize) -> Result<(), GraphError> {
    if matrix.iter().any(|row| row.len() != expected) {
        return Err(GraphError::NotSquare {
            matrix: name,
            expected,
        });
    }
    Ok(())
}
