//! Shared data structures for the exact solvers.

pub mod graph;

pub use self::graph::{DenseGraph, GraphError, MAX_NODES};
