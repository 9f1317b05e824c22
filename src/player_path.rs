/*
player_path.rs

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

//! Manage the path that the player is building.
//!
//! The module manages the selected nodes, the traversed edges with the running weight, as well
//! as the undo and redo lists.
//! The path always starts with the starting node of the level, so it is never empty once a
//! round has started.

use log::debug;
use serde::Serialize;

use crate::generator::graph::{Edge, WeightedGraph};

/// Manage the path that the player selected.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlayerPath {
    /// Selected nodes, starting with the starting node of the level.
    path: Vec<usize>,

    /// Traversed edges. Edge `i` connects `path[i]` and `path[i + 1]`. The list is kept so that
    /// the presentation layer can highlight the edges without looking them up.
    edges: Vec<Edge>,

    /// Sum of the weights of the traversed edges.
    weight: u32,

    /// Edges removed by undo operations, most recent last.
    redo_op: Vec<Edge>,
}

impl PlayerPath {
    /// Create a [`PlayerPath`] object that starts at the given node.
    pub fn new(start: usize) -> Self {
        Self {
            path: vec![start],
            edges: Vec::new(),
            weight: 0,
            redo_op: Vec::new(),
        }
    }

    /// Restart the path from the given node.
    pub fn reset(&mut self, start: usize) {
        self.path.clear();
        self.path.push(start);
        self.edges.clear();
        self.weight = 0;
        self.redo_op.clear();
    }

    /// Return the selected nodes.
    pub fn get(&self) -> &[usize] {
        &self.path
    }

    /// Return the traversed edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Return the sum of the weights of the traversed edges.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Return the last selected node.
    pub fn last(&self) -> usize {
        // The starting node is never removed
        self.path[self.path.len() - 1]
    }

    /// Append the edge and its end node to the path.
    fn push(&mut self, edge: Edge) {
        let last: usize = self.last();
        self.path.push(if edge.a == last { edge.b } else { edge.a });
        self.weight += edge.weight;
        self.edges.push(edge);
    }

    /// Try to extend the path to the given node.
    ///
    /// The move is accepted only if the node is adjacent to the last selected node.
    /// Return `false` and leave the path untouched otherwise.
    pub fn try_extend(&mut self, graph: &WeightedGraph, node: usize) -> bool {
        let last: usize = self.last();
        let Ok(weight) = graph.weight(last, node) else {
            debug!("Move {last}-{node} rejected: no such edge");
            return false;
        };
        self.push(Edge {
            a: last.min(node),
            b: last.max(node),
            weight,
        });
        self.redo_op.clear();
        debug!("Move {last}-{node} accepted: path weight = {}", self.weight);
        true
    }

    /// Remove the last selected node.
    ///
    /// When only the starting node remains, the method does nothing.
    pub fn undo(&mut self) {
        if self.path.len() <= 1 {
            // Keep the starting node, but make sure no stale weight remains
            self.edges.clear();
            self.weight = 0;
            return;
        }
        self.path.pop();
        if let Some(edge) = self.edges.pop() {
            self.weight -= edge.weight;
            self.redo_op.push(edge);
        }
        debug!("Undo: path weight = {}", self.weight);
    }

    /// Redo the last undo operation.
    pub fn redo(&mut self) {
        if let Some(edge) = self.redo_op.pop() {
            self.push(edge);
            debug!("Redo: path weight = {}", self.weight);
        }
    }

    /// Return the length of the redo list.
    pub fn redo_len(&self) -> usize {
        self.redo_op.len()
    }
}
