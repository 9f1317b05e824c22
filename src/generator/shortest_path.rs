/*
shortest_path.rs

Copyright 2025 Hervé Quatremain

This file is part of Pathfinder Quest.

Pathfinder Quest is free software: you can redistribute it and/or modify it
under the terms of the GNU General Public License as published by the Free
Software Foundation, either version 3 of the License, or (at your option) any
later version.

Pathfinder Quest is distributed in the hope that it will be useful, but
WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
details.

You should have received a copy of the GNU General Public License along with
Pathfinder Quest. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Compute the minimum-weight path between two nodes (Dijkstra's algorithm).

use log::debug;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt;

use super::graph::WeightedGraph;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum ShortestPathError {
    /// The two nodes are not connected.
    NoPath(usize, usize),

    /// The node is not part of the graph.
    UnknownNode(usize),

    /// The starting and ending nodes are the same node.
    SameNode(usize),
}

impl fmt::Display for ShortestPathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShortestPathError::NoPath(s, e) => write!(f, "no path from node {s} to node {e}"),
            ShortestPathError::UnknownNode(n) => write!(f, "node {n} is not in the graph"),
            ShortestPathError::SameNode(n) => {
                write!(f, "node {n} is both the starting and the ending node")
            }
        }
    }
}

impl Error for ShortestPathError {}

/// Minimum-weight path between two nodes.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Solution {
    /// Nodes from the starting node to the ending node, both included.
    pub path: Vec<usize>,

    /// Sum of the weights of the edges along the path.
    pub weight: u32,
}

impl Solution {
    /// Whether the edge between the two nodes is part of the path, in any direction.
    pub fn contains_edge(&self, n1: usize, n2: usize) -> bool {
        self.path
            .windows(2)
            .any(|w| (w[0] == n1 && w[1] == n2) || (w[0] == n2 && w[1] == n1))
    }
}

/// Compute the minimum-weight path from `start` to `end`.
///
/// When several paths have the same weight, the nodes with the lowest IDs are explored first,
/// so that the same graph always gives the same solution.
///
/// # Errors
///
/// The method returns an error if a node is not in the graph, if the two nodes are the same,
/// or if the nodes are not connected.
pub fn solve(graph: &WeightedGraph, start: usize, end: usize) -> Result<Solution, ShortestPathError> {
    for n in [start, end] {
        if n >= graph.num_nodes() {
            return Err(ShortestPathError::UnknownNode(n));
        }
    }
    if start == end {
        return Err(ShortestPathError::SameNode(start));
    }

    let mut distance: Vec<Option<u32>> = vec![None; graph.num_nodes()];
    let mut previous: Vec<Option<usize>> = vec![None; graph.num_nodes()];
    let mut done: Vec<bool> = vec![false; graph.num_nodes()];
    let mut queue: BinaryHeap<Reverse<(u32, usize)>> = BinaryHeap::new();

    distance[start] = Some(0);
    queue.push(Reverse((0, start)));

    while let Some(Reverse((dist, node))) = queue.pop() {
        if done[node] {
            continue;
        }
        done[node] = true;
        if node == end {
            break;
        }

        let mut neighbors: Vec<(usize, u32)> = graph.neighbors(node).to_vec();
        neighbors.sort_unstable();
        for (next, weight) in neighbors {
            if done[next] {
                continue;
            }
            let d: u32 = dist + weight;
            if distance[next].is_none_or(|current| d < current) {
                distance[next] = Some(d);
                previous[next] = Some(node);
                queue.push(Reverse((d, next)));
            }
        }
    }

    let Some(weight) = distance[end] else {
        debug!("No path from {start} to {end}");
        return Err(ShortestPathError::NoPath(start, end));
    };

    // Walk back from the end node
    let mut path: Vec<usize> = vec![end];
    let mut node: usize = end;
    while let Some(p) = previous[node] {
        path.push(p);
        node = p;
    }
    path.reverse();

    debug!("Shortest path from {start} to {end}: {path:?} (weight {weight})");
    Ok(Solution { path, weight })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::level_graph::LevelGraph;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn lighter_detour_wins_over_direct_edge() {
        let mut g = WeightedGraph::new(3);
        g.add_edge(0, 1, 3).unwrap();
        g.add_edge(1, 2, 4).unwrap();
        g.add_edge(0, 2, 10).unwrap();

        let s = solve(&g, 0, 2).unwrap();
        assert_eq!(s.path, vec![0, 1, 2]);
        assert_eq!(s.weight, 7);
        assert!(s.contains_edge(2, 1));
        assert!(!s.contains_edge(0, 2));
    }

    #[test]
    fn ties_are_deterministic() {
        // Two paths of weight 4: 0-1-3 and 0-2-3
        let mut g = WeightedGraph::new(4);
        g.add_edge(0, 2, 2).unwrap();
        g.add_edge(2, 3, 2).unwrap();
        g.add_edge(0, 1, 2).unwrap();
        g.add_edge(1, 3, 2).unwrap();

        let s = solve(&g, 0, 3).unwrap();
        assert_eq!(s.weight, 4);
        assert_eq!(s.path, vec![0, 1, 3]);
        assert_eq!(solve(&g, 0, 3).unwrap(), s);
    }

    #[test]
    fn disconnected_nodes_are_reported() {
        let mut g = WeightedGraph::new(4);
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(2, 3, 1).unwrap();
        assert_eq!(solve(&g, 0, 3), Err(ShortestPathError::NoPath(0, 3)));
        assert_eq!(solve(&g, 0, 9), Err(ShortestPathError::UnknownNode(9)));
    }

    #[test]
    fn start_and_end_must_differ() {
        let mut g = WeightedGraph::new(3);
        g.add_edge(0, 1, 3).unwrap();
        g.add_edge(1, 2, 4).unwrap();
        assert_eq!(solve(&g, 1, 1), Err(ShortestPathError::SameNode(1)));
    }

    #[test]
    fn generated_graphs_always_have_a_path() {
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let g = LevelGraph::new(1 + (seed % 4) as u32).generate(&mut rng);
            for start in g.nodes() {
                for end in g.nodes().filter(|n| *n != start) {
                    let s = solve(&g, start, end).unwrap();
                    assert_eq!(s.path.first(), Some(&start));
                    assert_eq!(s.path.last(), Some(&end));
                    let total: u32 = s
                        .path
                        .windows(2)
                        .map(|w| g.weight(w[0], w[1]).unwrap())
                        .sum();
                    assert_eq!(total, s.weight);
                }
            }
        }
    }
}
