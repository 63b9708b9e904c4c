//! graphopt — exact combinatorial optimization on small dense graphs
//!
//! This crate solves three classic graph-optimization problems exactly, over
//! a single shared representation: a dense distance matrix, a dense capacity
//! matrix, and a coordinate list for the same set of at most 16 nodes.
//!
//! - [`minimum_spanning_tree`] — Kruskal's algorithm with a union-find
//!   structure (path compression + union by rank)
//! - [`exact_tour`] — minimum-cost Hamiltonian cycle via Held-Karp bitmask
//!   dynamic programming
//! - [`max_flow`] — Edmonds-Karp augmenting paths over a residual matrix
//!
//! The three solvers are mutually independent: each consumes the read-only
//! [`DenseGraph`], builds its own working state, and discards it on return.
//! A failure in one (for example [`MstError::Disconnected`]) says nothing
//! about the others.
//!
//! # Node count bound
//!
//! The tour solver's state space is `2^N x N`, which is only tractable for
//! small N. [`DenseGraph::new`] therefore validates `1 <= N <= MAX_NODES`
//! (16) once at construction; all solvers inherit the bound.
//!
//! # Example
//!
//! ```
//! use graphopt::{DenseGraph, minimum_spanning_tree, exact_tour, max_flow};
//!
//! let distance = vec![
//!     vec![0, 10, 15, 20],
//!     vec![10, 0, 35, 25],
//!     vec![15, 35, 0, 30],
//!     vec![20, 25, 30, 0],
//! ];
//! let capacity = vec![
//!     vec![0, 10, 10, 0],
//!     vec![0, 0, 0, 10],
//!     vec![0, 0, 0, 10],
//!     vec![0, 0, 0, 0],
//! ];
//! let coordinates = vec![(0, 0), (10, 0), (0, 10), (10, 10)];
//! let graph = DenseGraph::new(distance, capacity, coordinates)?;
//!
//! let mst = minimum_spanning_tree(&graph)?;
//! assert_eq!(mst.total_weight, 45);
//!
//! let tour = exact_tour(&graph)?;
//! assert_eq!(tour.cost, 80);
//!
//! let flow = max_flow(&graph, 0, 3)?;
//! assert_eq!(flow.flow, 20);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod algorithm;
pub mod data_structures;

pub use crate::algorithm::max_flow::{max_flow, FlowError, FlowResult};
pub use crate::algorithm::mst::{minimum_spanning_tree, MstEdge, MstError, MstResult};
pub use crate::algorithm::tour::{exact_tour, TourError, TourResult};
pub use crate::data_structures::graph::{DenseGraph, GraphError, MAX_NODES};
