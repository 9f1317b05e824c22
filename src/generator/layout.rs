/*
layout.rs

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

//! Position the nodes of a graph on the canvas.

use std::f64::consts::PI;

use super::graph::WeightedGraph;

/// Compute the display coordinates of the nodes.
///
/// The returned vector is indexed by node ID and has one position per node.
pub trait LayoutProvider {
    fn layout(&self, graph: &WeightedGraph, width: u32, height: u32) -> Vec<(i32, i32)>;
}

/// Place the nodes on a circle centered on the canvas.
#[derive(Debug, Clone, Copy)]
pub struct CircularLayout {
    /// Space to keep between the circle and the canvas borders.
    pub padding: u32,
}

impl Default for CircularLayout {
    fn default() -> Self {
        Self { padding: 100 }
    }
}

impl LayoutProvider for CircularLayout {
    fn layout(&self, graph: &WeightedGraph, width: u32, height: u32) -> Vec<(i32, i32)> {
        let n: usize = graph.num_nodes();
        let radius: f64 = (f64::from(width.min(height)) / 2.0 - f64::from(self.padding)).max(0.0);
        let cx: f64 = f64::from(width) / 2.0;
        let cy: f64 = f64::from(height) / 2.0;

        graph
            .nodes()
            .map(|node| {
                let angle: f64 = 2.0 * PI * node as f64 / n as f64;
                (
                    (angle.cos() * radius + cx) as i32,
                    (angle.sin() * radius + cy) as i32,
                )
            })
            .collect()
    }
}
