//! Exact solvers over the dense graph store.
//!
//! Each submodule is an independent solver with its own error type and
//! call-local working state. All three borrow the same read-only
//! [`crate::data_structures::graph::DenseGraph`]; none consumes another's
//! output, so callers are free to run any subset and to report per-solver
//! failures independently.

pub mod max_flow;
pub mod mst;
pub mod tour;

pub use self::max_flow::{max_flow, FlowError, FlowResult};
pub use self::mst::{minimum_spanning_tree, MstEdge, MstError, MstResult};
pub use self::tour::{exact_tour, TourError, TourResult};
