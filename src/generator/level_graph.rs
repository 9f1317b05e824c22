/*
level_graph.rs

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

//! Generate a random connected graph for a level.
//!
//! The graph is built in two steps:
//!
//! * A spanning tree over all the nodes (the backbone) ensures that the graph is connected.
//!   The tree is extracted from the complete graph with Kruskal's algorithm, using random
//!   priorities that are then discarded.
//! * Extra edges between nodes that are not connected yet give the player several routes to
//!   choose from.
//!
//! All the edges receive a random weight between [`MIN_WEIGHT`] and [`MAX_WEIGHT`].

use log::{debug, error};
use rand::Rng;
use rand::seq::SliceRandom;

use super::graph::{GraphError, MAX_WEIGHT, MIN_WEIGHT, WeightedGraph};

/// Base number of nodes. Each level adds [`NODES_PER_LEVEL`] nodes.
const BASE_NODES: usize = 5;

/// Number of nodes added with each level.
const NODES_PER_LEVEL: usize = 2;

/// Maximum number of nodes so that the graph stays readable.
const MAX_NODES: usize = 10;

/// Number of extra edges per node.
const EXTRA_EDGES_PER_NODE: f32 = 1.0;

/// Number of nodes in the graph for the given level.
pub fn node_count(level: u32) -> usize {
    (BASE_NODES + level as usize * NODES_PER_LEVEL).min(MAX_NODES)
}

/// Disjoint-set forest used to build the spanning tree.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
        }
    }

    fn find(&mut self, mut n: usize) -> usize {
        while self.parent[n] != n {
            self.parent[n] = self.parent[self.parent[n]];
            n = self.parent[n];
        }
        n
    }

    /// Merge the sets of the two nodes. Return `false` if they were already in the same set.
    fn union(&mut self, n1: usize, n2: usize) -> bool {
        let r1: usize = self.find(n1);
        let r2: usize = self.find(n2);
        if r1 == r2 {
            return false;
        }
        self.parent[r1] = r2;
        true
    }
}

/// [`LevelGraph`] object.
pub struct LevelGraph {
    /// Level the graph is generated for.
    pub level: u32,

    /// Number of nodes in the graph.
    pub num_nodes: usize,
}

impl LevelGraph {
    /// Create the object.
    ///
    /// The level must be 1 or more.
    pub fn new(level: u32) -> Self {
        debug_assert!(level >= 1, "levels start at 1");
        Self {
            level,
            num_nodes: node_count(level),
        }
    }

    /// Generate and return a random connected graph.
    ///
    /// The random generator is only used for the duration of the call: passing a seeded
    /// generator produces the same graph every time.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> WeightedGraph {
        let mut graph: WeightedGraph = WeightedGraph::new(self.num_nodes);

        // The nodes are all in range, so adding edges cannot fail
        if let Err(e) = self.add_backbone(&mut graph, rng) {
            error!("Cannot build the backbone of the level graph: {e}");
            debug_assert!(false, "{e}");
        }
        if let Err(e) = self.add_extra_edges(&mut graph, rng) {
            error!("Cannot add the extra edges to the level graph: {e}");
            debug_assert!(false, "{e}");
        }

        debug_assert!(graph.is_connected(), "the backbone connects all the nodes");
        debug!(
            "Level {}: {} nodes, {} edges",
            self.level,
            self.num_nodes,
            graph.edges().len()
        );
        graph.debug();
        graph
    }

    /// Add the `num_nodes - 1` edges of a random spanning tree.
    fn add_backbone<R: Rng + ?Sized>(
        &self,
        graph: &mut WeightedGraph,
        rng: &mut R,
    ) -> Result<(), GraphError> {
        // Edges of the complete graph with a random priority used only to select the tree
        let mut candidates: Vec<(u32, usize, usize)> = Vec::new();
        for n1 in 0..self.num_nodes {
            for n2 in (n1 + 1)..self.num_nodes {
                candidates.push((rng.random(), n1, n2));
            }
        }
        candidates.sort_unstable();

        let mut sets: DisjointSet = DisjointSet::new(self.num_nodes);
        let mut added: usize = 0;
        for (_, n1, n2) in candidates {
            if added + 1 >= self.num_nodes {
                break;
            }
            if sets.union(n1, n2) {
                let weight: u32 = rng.random_range(MIN_WEIGHT..=MAX_WEIGHT);
                debug!("Backbone edge {n1}-{n2} weight {weight}");
                graph.add_edge(n1, n2, weight)?;
                added += 1;
            }
        }
        Ok(())
    }

    /// Add random edges between nodes that are not adjacent yet.
    fn add_extra_edges<R: Rng + ?Sized>(
        &self,
        graph: &mut WeightedGraph,
        rng: &mut R,
    ) -> Result<(), GraphError> {
        let extra_edges: usize = (self.num_nodes as f32 * EXTRA_EDGES_PER_NODE) as usize;

        let mut possible_edges: Vec<(usize, usize)> = Vec::new();
        for n1 in 0..self.num_nodes {
            for n2 in (n1 + 1)..self.num_nodes {
                if !graph.has_edge(n1, n2) {
                    possible_edges.push((n1, n2));
                }
            }
        }
        possible_edges.shuffle(rng);

        for (n1, n2) in possible_edges.into_iter().take(extra_edges) {
            let weight: u32 = rng.random_range(MIN_WEIGHT..=MAX_WEIGHT);
            debug!("Extra edge {n1}-{n2} weight {weight}");
            graph.add_edge(n1, n2, weight)?;
        }
        Ok(())
    }
}
