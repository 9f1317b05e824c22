/*
generator.rs

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

//! Generate level graphs and their solutions.
//!
//! A level is a [`graph::WeightedGraph`] object: a connected graph with random weights between
//! 1 and 10 on the edges.
//! You create that graph by creating a [`level_graph::LevelGraph`] object for the level and by
//! using its [`level_graph::LevelGraph::generate`] method.
//! The number of nodes grows with the level, up to ten nodes.
//!
//! Once the starting and ending nodes are chosen, [`shortest_path::solve`] computes the
//! [`shortest_path::Solution`]: the path with the lowest total weight.
//! The player's path is compared with that solution when the player finishes the level.
//!
//! The [`layout::LayoutProvider`] trait positions the nodes for display.
//! [`layout::CircularLayout`] places them on a circle.

pub mod graph;
pub mod layout;
pub mod level_graph;
pub mod shortest_path;
