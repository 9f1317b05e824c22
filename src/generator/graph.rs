/*
graph.rs

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

//! Weighted undirected graph of a level.

use log::debug;
use serde::Serialize;
use std::error::Error;
use std::fmt;

/// Smallest edge weight.
pub const MIN_WEIGHT: u32 = 1;

/// Largest edge weight.
pub const MAX_WEIGHT: u32 = 10;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GraphError {
    /// No edge between the two nodes.
    EdgeNotFound(usize, usize),

    /// The node is not part of the graph.
    UnknownNode(usize),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GraphError::EdgeNotFound(a, b) => write!(f, "no edge between nodes {a} and {b}"),
            GraphError::UnknownNode(n) => write!(f, "node {n} is not in the graph"),
        }
    }
}

impl Error for GraphError {}

/// Undirected weighted edge.
///
/// The node with the lowest ID is always stored in [`Edge::a`].
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub weight: u32,
}

impl Edge {
    /// Whether the edge connects the two given nodes, in any order.
    pub fn connects(&self, n1: usize, n2: usize) -> bool {
        (self.a == n1 && self.b == n2) || (self.a == n2 && self.b == n1)
    }
}

/// Simple weighted graph. Nodes are the integers in `0..num_nodes`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WeightedGraph {
    /// Number of nodes.
    num_nodes: usize,

    /// Edges in insertion order. This order is used for rendering.
    edges: Vec<Edge>,

    /// For each node, the adjacent nodes and the weight of the connecting edge.
    #[serde(skip)]
    adjacent: Vec<Vec<(usize, u32)>>,
}

impl WeightedGraph {
    /// Create a graph with `num_nodes` nodes and no edge.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            edges: Vec::new(),
            adjacent: vec![Vec::new(); num_nodes],
        }
    }

    /// Add an edge between two distinct nodes.
    ///
    /// # Errors
    ///
    /// The method returns an error if one of the nodes is not in the graph.
    /// Adding an edge between nodes that are already connected, or from a node to itself, is
    /// ignored: the graph stays simple.
    pub fn add_edge(&mut self, n1: usize, n2: usize, weight: u32) -> Result<(), GraphError> {
        for n in [n1, n2] {
            if n >= self.num_nodes {
                return Err(GraphError::UnknownNode(n));
            }
        }
        if n1 == n2 || self.has_edge(n1, n2) {
            debug!("Edge {n1}-{n2} ignored");
            return Ok(());
        }
        self.edges.push(Edge {
            a: n1.min(n2),
            b: n1.max(n2),
            weight,
        });
        self.adjacent[n1].push((n2, weight));
        self.adjacent[n2].push((n1, weight));
        Ok(())
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Iterate over the nodes.
    pub fn nodes(&self) -> std::ops::Range<usize> {
        0..self.num_nodes
    }

    /// Return the edges, always in the same order for a given graph.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Whether an edge exists between the two nodes.
    pub fn has_edge(&self, n1: usize, n2: usize) -> bool {
        self.weight(n1, n2).is_ok()
    }

    /// Weight of the edge between the two nodes.
    ///
    /// # Errors
    ///
    /// Return [`GraphError::EdgeNotFound`] when the nodes are not adjacent.
    pub fn weight(&self, n1: usize, n2: usize) -> Result<u32, GraphError> {
        self.adjacent
            .get(n1)
            .and_then(|a| a.iter().find(|(n, _)| *n == n2))
            .map(|(_, w)| *w)
            .ok_or(GraphError::EdgeNotFound(n1, n2))
    }

    /// Adjacent nodes of the given node, with the weights of the connecting edges.
    pub fn neighbors(&self, node: usize) -> &[(usize, u32)] {
        match self.adjacent.get(node) {
            Some(a) => a,
            None => &[],
        }
    }

    /// Whether all the nodes can be reached from node 0.
    pub fn is_connected(&self) -> bool {
        if self.num_nodes == 0 {
            return true;
        }
        let mut visited: Vec<bool> = vec![false; self.num_nodes];
        let mut stack: Vec<usize> = vec![0];
        visited[0] = true;
        let mut count: usize = 1;

        while let Some(n) = stack.pop() {
            for (m, _) in &self.adjacent[n] {
                if !visited[*m] {
                    visited[*m] = true;
                    count += 1;
                    stack.push(*m);
                }
            }
        }
        count == self.num_nodes
    }

    /// Print the graph.
    pub fn debug(&self) {
        let mut s: String = String::new();

        for (n1, a) in self.adjacent.iter().enumerate() {
            s.clear();
            s.push_str(&format!("{n1:>3} -->"));
            for (n2, w) in a {
                s.push_str(&format!(" {n2}({w})"));
            }
            debug!("{s}");
        }
    }
}
