//! Exact minimum-cost Hamiltonian cycle via Held-Karp bitmask DP.
//!
//! State is the pair (mask of visited nodes, current node), with node 0 fixed
//! as the start. `table[mask][pos]` holds the minimum cost to visit every
//! remaining node and return to 0, given that the nodes in `mask` (which
//! always includes node 0) have been visited and the solver currently sits at
//! `pos`. The base case is the full mask, where the only cost left is the
//! closing edge back to the start.
//!
//! The table is filled iteratively over masks in decreasing numeric order:
//! every dependency of `(mask, pos)` has a strictly larger mask, so it has
//! already been computed. This gives `2^N x N` states of O(N) work each —
//! O(2^N * N^2) time, O(2^N * N) space — which is the reason the node count
//! is capped at 16 at graph construction.
//!
//! Entries are `Option<u64>`, so an unfilled state is distinguishable from a
//! legitimately zero-cost one. Zero distances are ordinary zero-cost edges
//! here, unlike in the spanning-tree builder.
//!
//! Path reconstruction walks forward from (bit 0, node 0), at each step
//! choosing the unvisited city minimizing `distance[pos][city] +
//! table[mask | bit(city)][city]` with strict less-than and cities scanned in
//! increasing index — the same relation and tie-break the fill uses, so the
//! reconstructed path's literal edge sum equals the reported minimum cost.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data_structures::graph::DenseGraph;

/// Tour-solver failures.
#[derive(Debug, Error)]
pub enum TourError {
    /// Reconstruction could not extend the path. Under the crate's input
    /// invariants every state is computed, so this indicates an internal
    /// consistency fault rather than bad input.
    #[error("no valid tour: path reconstruction found no finite extension")]
    NoValidTour,
}

/// An optimal closed tour from node 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourResult {
    /// Minimum total cost of the cycle.
    pub cost: u64,
    /// Visiting order; starts and ends at node 0, length N + 1.
    pub path: Vec<usize>,
}

/// Computes the minimum-cost Hamiltonian cycle starting and ending at node 0.
pub fn exact_tour(graph: &DenseGraph) -> Result<TourResult, TourError> {
    let n = graph.node_count();
    let full: usize = (1 << n) - 1;

    debug!("tour: filling {} x {} state table", 1usize << n, n);

    // table[mask][pos]: cost to finish the tour from (mask, pos). Only masks
    // containing the start bit are ever reachable or filled.
    let mut table: Vec<Vec<Option<u64>>> = vec![vec![None; n]; 1 << n];

    for mask in (1..=full).rev() {
        if mask & 1 == 0 {
            continue;
        }
        for pos in 0..n {
            if mask & (1 << pos) == 0 {
                continue;
            }

            let cost = if mask == full {
                u64::from(graph.distance(pos, 0))
            } else {
                let mut best: Option<u64> = None;
                for city in 0..n {
                    if mask & (1 << city) != 0 {
                        continue;
                    }
                    let tail = match table[mask | (1 << city)][city] {
                        Some(tail) => tail,
                        None => continue,
                    };
                    let candidate = u64::from(graph.distance(pos, city)) + tail;
                    if best.map_or(true, |b| candidate < b) {
                        best = Some(candidate);
                    }
                }
                best.ok_or(TourError::NoValidTour)?
            };

            table[mask][pos] = Some(cost);
        }
    }

    let cost = table[1][0].ok_or(TourError::NoValidTour)?;

    // Forward walk reusing the fill's relation and tie-break exactly.
    let mut path = Vec::with_capacity(n + 1);
    path.push(0);
    let mut mask: usize = 1;
    let mut pos = 0;

    while mask != full {
        let mut best: Option<(u64, usize)> = None;
        for city in 0..n {
            if mask & (1 << city) != 0 {
                continue;
            }
            let tail = match table[mask | (1 << city)][city] {
                Some(tail) => tail,
                None => continue,
            };
            let candidate = u64::from(graph.distance(pos, city)) + tail;
            if best.map_or(true, |(b, _)| candidate < b) {
                best = Some((candidate, city));
            }
        }

        let (_, city) = best.ok_or(TourError::NoValidTour)?;
        mask |= 1 << city;
        pos = city;
        path.push(city);
    }

    path.push(0);

    Ok(TourResult { cost, path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::graph::DenseGraph;

    fn graph_from_distance(distance: Vec<Vec<u32>>) -> DenseGraph {
        let n = distance.len();
        DenseGraph::new(distance, vec![vec![0; n]; n], vec![(0, 0); n]).unwrap()
    }

    fn path_cost(graph: &DenseGraph, path: &[usize]) -> u64 {
        path.windows(2)
            .map(|w| u64::from(graph.distance(w[0], w[1])))
            .sum()
    }

    #[test]
    fn four_node_reference_tour() {
        let graph = graph_from_distance(vec![
            vec![0, 10, 15, 20],
            vec![10, 0, 35, 25],
            vec![15, 35, 0, 30],
            vec![20, 25, 30, 0],
        ]);

        let result = exact_tour(&graph).unwrap();
        assert_eq!(result.cost, 80);
        // Two optimal routes tie at 80; the lower-index first city wins.
        assert_eq!(result.path, vec![0, 1, 3, 2, 0]);
        assert_eq!(path_cost(&graph, &result.path), result.cost);
    }

    #[test]
    fn single_node_tour_is_trivial() {
        let graph = graph_from_distance(vec![vec![0]]);
        let result = exact_tour(&graph).unwrap();
        assert_eq!(result.cost, 0);
        assert_eq!(result.path, vec![0, 0]);
    }

    #[test]
    fn two_node_tour_uses_both_directions() {
        let graph = graph_from_distance(vec![vec![0, 5], vec![7, 0]]);
        let result = exact_tour(&graph).unwrap();
        assert_eq!(result.cost, 12);
        assert_eq!(result.path, vec![0, 1, 0]);
    }

    #[test]
    fn asymmetric_distances_are_respected() {
        // Going 0 -> 1 -> 2 -> 0 costs 1 + 1 + 1; the reverse costs 10 each.
        let graph = graph_from_distance(vec![
            vec![0, 1, 10],
            vec![10, 0, 1],
            vec![1, 10, 0],
        ]);

        let result = exact_tour(&graph).unwrap();
        assert_eq!(result.cost, 3);
        assert_eq!(result.path, vec![0, 1, 2, 0]);
    }

    #[test]
    fn zero_distance_is_a_real_edge() {
        // Unlike the spanning-tree builder, a zero entry is a free hop.
        let graph = graph_from_distance(vec![
            vec![0, 0, 9],
            vec![9, 0, 0],
            vec![0, 9, 0],
        ]);

        let result = exact_tour(&graph).unwrap();
        assert_eq!(result.cost, 0);
        assert_eq!(result.path, vec![0, 1, 2, 0]);
    }

    #[test]
    fn path_is_a_permutation_closing_at_start() {
        let graph = graph_from_distance(vec![
            vec![0, 3, 9, 4, 6],
            vec![3, 0, 2, 8, 7],
            vec![9, 2, 0, 5, 1],
            vec![4, 8, 5, 0, 3],
            vec![6, 7, 1, 3, 0],
        ]);

        let result = exact_tour(&graph).unwrap();
        assert_eq!(result.path.len(), 6);
        assert_eq!(result.path[0], 0);
        assert_eq!(*result.path.last().unwrap(), 0);

        let mut visited = result.path[..5].to_vec();
        visited.sort_unstable();
        assert_eq!(visited, vec![0, 1, 2, 3, 4]);

        assert_eq!(path_cost(&graph, &result.path), result.cost);
    }
}
