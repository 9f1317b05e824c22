/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! A [`Game`] object owns everything about the current round: the graph, the starting and
//! ending nodes, the node positions, the solution, and the path that the player is building.
//! The presentation layer reads that state and calls [`Game::start`], [`Game::try_extend`],
//! [`Game::undo`], [`Game::redo`], [`Game::toggle_solution`], and [`Game::evaluate`].

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use serde::Serialize;
use strum_macros::Display;

use crate::generator::graph::WeightedGraph;
use crate::generator::layout::LayoutProvider;
use crate::generator::level_graph::LevelGraph;
use crate::generator::shortest_path::{self, ShortestPathError, Solution};
use crate::player_path::PlayerPath;

/// Points earned for each level won.
const POINTS_PER_WIN: u32 = 10;

/// The player wins if the weight of their path is within this distance of the solution.
const WIN_TOLERANCE: u32 = 1;

/// Number of graphs to generate before giving up when no path exists between the nodes.
const MAX_GENERATE_ATTEMPTS: usize = 3;

/// Result of a round.
#[derive(Debug, Copy, Clone, PartialEq, Display)]
pub enum Outcome {
    #[strum(to_string = "You won!")]
    Won,
    #[strum(to_string = "You lost!")]
    Lost,
}

/// Description of the current level, for developers.
#[derive(Serialize, Debug)]
pub struct LevelSnapshot<'a> {
    pub level: u32,
    pub graph: &'a WeightedGraph,
    pub start: usize,
    pub end: usize,
    pub positions: &'a [(i32, i32)],
    pub solution: &'a Solution,
}

/// Manage the status of the game in progress.
pub struct Game {
    /// Current level. Starts at 1 and increases each time the player wins.
    pub level: u32,

    /// Score. Increases each time the player wins.
    pub score: u32,

    /// Graph of the current level.
    graph: WeightedGraph,

    /// Node where the player's path starts.
    start: usize,

    /// Node that the player must reach.
    end: usize,

    /// Position of each node on the canvas.
    positions: Vec<(i32, i32)>,

    /// Minimum-weight path from [`Game::start`] to [`Game::end`].
    solution: Solution,

    /// Path that the player is building.
    player_path: PlayerPath,

    /// Whether the player asked to see the solution.
    show_solution: bool,

    /// Number of rounds played on the current graph.
    attempts: u32,

    /// Random generator for the graphs and the starting and ending nodes.
    rng: StdRng,

    /// Positions the nodes of new graphs.
    layout: Box<dyn LayoutProvider>,

    /// Canvas dimensions given to the layout.
    width: u32,
    height: u32,
}

impl Game {
    /// Create a [`Game`] object.
    ///
    /// When `seed` is provided, the same sequence of levels is generated for each game.
    /// Call [`Game::start`] before playing.
    pub fn new(
        layout: Box<dyn LayoutProvider>,
        width: u32,
        height: u32,
        seed: Option<u64>,
    ) -> Self {
        let rng: StdRng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            level: 1,
            score: 0,
            graph: WeightedGraph::new(0),
            start: 0,
            end: 0,
            positions: Vec::new(),
            solution: Solution {
                path: Vec::new(),
                weight: 0,
            },
            player_path: PlayerPath::new(0),
            show_solution: false,
            attempts: 0,
            rng,
            layout,
            width,
            height,
        }
    }

    /// Start a round at the given level.
    ///
    /// With `regenerate` set, a new graph, new starting and ending nodes, and a new solution
    /// are produced. Otherwise the current graph is kept so that the player can retry it.
    /// In both cases the player's path restarts from the starting node.
    ///
    /// # Errors
    ///
    /// The method returns an error if no generated graph connects its starting and ending
    /// nodes. The round cannot be played in that case.
    pub fn start(&mut self, level: u32, regenerate: bool) -> Result<(), ShortestPathError> {
        if regenerate || self.graph.num_nodes() < 2 {
            self.generate(level)?;
        }
        self.level = level;
        self.attempts += 1;
        self.player_path.reset(self.start);
        self.show_solution = false;
        info!(
            "Level {} (attempt {}): from node {} to node {}",
            self.level, self.attempts, self.start, self.end
        );
        Ok(())
    }

    /// Generate a new graph for the given level and choose the starting and ending nodes.
    ///
    /// The current graph is kept if no usable graph can be generated.
    fn generate(&mut self, level: u32) -> Result<(), ShortestPathError> {
        let level_graph: LevelGraph = LevelGraph::new(level);

        for attempt in 1..=MAX_GENERATE_ATTEMPTS {
            let graph: WeightedGraph = level_graph.generate(&mut self.rng);
            let nodes: index::IndexVec = index::sample(&mut self.rng, graph.num_nodes(), 2);
            match self.set_graph(graph, nodes.index(0), nodes.index(1)) {
                Ok(()) => return Ok(()),
                Err(e) if attempt < MAX_GENERATE_ATTEMPTS => {
                    warn!("Generated graph rejected (attempt {attempt}): {e}");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Provide the graph to play and its starting and ending nodes.
    ///
    /// The nodes are positioned and the solution is computed. The player's path is reset.
    ///
    /// # Errors
    ///
    /// The method returns an error, and keeps the current graph, if the nodes are the same or
    /// are not connected.
    pub fn set_graph(
        &mut self,
        graph: WeightedGraph,
        start: usize,
        end: usize,
    ) -> Result<(), ShortestPathError> {
        let solution: Solution = shortest_path::solve(&graph, start, end)?;
        debug!("Solution: {:?} (weight {})", solution.path, solution.weight);

        self.positions = self.layout.layout(&graph, self.width, self.height);
        self.graph = graph;
        self.start = start;
        self.end = end;
        self.solution = solution;
        self.attempts = 0;
        self.player_path.reset(start);
        self.show_solution = false;
        Ok(())
    }

    /// Try to extend the player's path to the given node.
    ///
    /// Return `false` if the node is not adjacent to the last node of the path. This is not an
    /// error: the move is simply ignored.
    pub fn try_extend(&mut self, node: usize) -> bool {
        self.player_path.try_extend(&self.graph, node)
    }

    /// Remove the last node of the player's path.
    pub fn undo(&mut self) {
        self.player_path.undo();
    }

    /// Put back the last node removed by [`Game::undo`].
    pub fn redo(&mut self) {
        self.player_path.redo();
    }

    /// Show or hide the solution. This has no effect on the score.
    pub fn toggle_solution(&mut self) {
        self.show_solution = !self.show_solution;
    }

    /// Whether the solution is shown.
    pub fn is_solution_shown(&self) -> bool {
        self.show_solution
    }

    /// Compare the player's path with the solution.
    ///
    /// A win increases the score and the level. The round is not restarted: call
    /// [`Game::start`] to play the next level (win) or to retry the graph (loss).
    pub fn evaluate(&mut self) -> Outcome {
        let player_weight: u32 = self.player_path.weight();
        let outcome: Outcome = if player_weight.abs_diff(self.solution.weight) <= WIN_TOLERANCE {
            self.score += POINTS_PER_WIN;
            self.level += 1;
            Outcome::Won
        } else {
            Outcome::Lost
        };
        info!(
            "Path weight {} / best {}: {outcome} (score {}, level {})",
            player_weight, self.solution.weight, self.score, self.level
        );
        outcome
    }

    /// Return the graph of the current level.
    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    /// Return the starting node.
    pub fn start_node(&self) -> usize {
        self.start
    }

    /// Return the ending node.
    pub fn end_node(&self) -> usize {
        self.end
    }

    /// Return the position of each node, indexed by node ID.
    pub fn positions(&self) -> &[(i32, i32)] {
        &self.positions
    }

    /// Return the player's path.
    pub fn player_path(&self) -> &PlayerPath {
        &self.player_path
    }

    /// Return the solution, but only when the player asked to see it.
    pub fn solution(&self) -> Option<&Solution> {
        if self.show_solution {
            Some(&self.solution)
        } else {
            None
        }
    }

    /// Whether the player's path ends on the ending node.
    pub fn reached_end(&self) -> bool {
        self.player_path.last() == self.end
    }

    /// Number of rounds played on the current graph.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Return a description of the current level.
    pub fn snapshot(&self) -> LevelSnapshot<'_> {
        LevelSnapshot {
            level: self.level,
            graph: self.graph(),
            start: self.start,
            end: self.end,
            positions: self.positions(),
            solution: &self.solution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::layout::CircularLayout;
    use crate::generator::level_graph::node_count;

    fn new_game(seed: u64) -> Game {
        Game::new(Box::new(CircularLayout::default()), 800, 600, Some(seed))
    }

    /// Game on the three-node graph: 0-1 (3), 1-2 (4), 0-2 (10). The best path weight is 7.
    fn scenario_game() -> Game {
        let mut g = WeightedGraph::new(3);
        g.add_edge(0, 1, 3).unwrap();
        g.add_edge(1, 2, 4).unwrap();
        g.add_edge(0, 2, 10).unwrap();
        let mut game = new_game(1);
        game.set_graph(g, 0, 2).unwrap();
        game.start(1, false).unwrap();
        game
    }

    #[test]
    fn start_generates_a_playable_level() {
        for seed in 0..20 {
            let mut game = new_game(seed);
            game.start(2, true).unwrap();
            assert_eq!(game.graph().num_nodes(), node_count(2));
            assert_ne!(game.start_node(), game.end_node());
            assert_eq!(game.player_path().get(), &[game.start_node()]);
            assert_eq!(game.positions().len(), node_count(2));
            assert_eq!(game.attempts(), 1);

            game.toggle_solution();
            let s = game.solution().unwrap();
            assert_eq!(s.path.first(), Some(&game.start_node()));
            assert_eq!(s.path.last(), Some(&game.end_node()));
        }
    }

    #[test]
    fn solution_is_hidden_by_default() {
        let mut game = scenario_game();
        assert!(game.solution().is_none());
        game.toggle_solution();
        assert_eq!(game.solution().unwrap().path, vec![0, 1, 2]);
        assert_eq!(game.solution().unwrap().weight, 7);
        game.toggle_solution();
        assert!(!game.is_solution_shown());
    }

    #[test]
    fn exact_weight_wins() {
        let mut game = scenario_game();
        assert!(game.try_extend(1));
        assert!(game.try_extend(2));
        assert!(game.reached_end());
        assert_eq!(game.evaluate(), Outcome::Won);
        assert_eq!(game.score, 10);
        assert_eq!(game.level, 2);

        // Only the score and the level change until the next round starts
        assert_eq!(game.player_path().get(), &[0, 1, 2]);
        assert_eq!(game.player_path().weight(), 7);
        assert_eq!(game.graph().num_nodes(), 3);
        assert_eq!(game.graph().edges().len(), 3);
        assert_eq!((game.start_node(), game.end_node()), (0, 2));
        assert_eq!(game.attempts(), 1);
        game.toggle_solution();
        let solution = game.solution().unwrap();
        assert_eq!(solution.path, vec![0, 1, 2]);
        assert_eq!(solution.weight, 7);
    }

    #[test]
    fn two_units_over_loses() {
        // 0-1 (3), 1-0 (3), 0-1 (3)
        let mut game = scenario_game();
        assert!(game.try_extend(1));
        assert!(game.try_extend(0));
        assert!(game.try_extend(1));
        assert_eq!(game.player_path().weight(), 9);
        assert_eq!(game.evaluate(), Outcome::Lost);
        assert_eq!(game.score, 0);
        assert_eq!(game.level, 1);
    }

    #[test]
    fn one_unit_over_still_wins() {
        let mut g = WeightedGraph::new(4);
        g.add_edge(0, 1, 3).unwrap();
        g.add_edge(1, 2, 4).unwrap();
        g.add_edge(0, 3, 4).unwrap();
        g.add_edge(3, 2, 4).unwrap();
        let mut game = new_game(3);
        game.set_graph(g, 0, 2).unwrap();
        game.start(1, false).unwrap();

        assert!(game.try_extend(3));
        assert!(game.try_extend(2));
        assert_eq!(game.player_path().weight(), 8);
        assert_eq!(game.evaluate(), Outcome::Won);
    }

    #[test]
    fn retry_keeps_the_graph() {
        let mut game = new_game(11);
        game.start(1, true).unwrap();
        let graph = game.graph().clone();
        let (start, end) = (game.start_node(), game.end_node());
        game.toggle_solution();
        let solution = game.solution().unwrap().clone();

        let next = game.graph().neighbors(start)[0].0;
        assert!(game.try_extend(next));
        game.start(1, false).unwrap();

        assert_eq!(game.graph(), &graph);
        assert_eq!((game.start_node(), game.end_node()), (start, end));
        assert_eq!(game.player_path().get(), &[start]);
        assert_eq!(game.player_path().weight(), 0);
        assert!(!game.is_solution_shown());
        assert_eq!(game.attempts(), 2);
        game.toggle_solution();
        assert_eq!(game.solution(), Some(&solution));
    }

    #[test]
    fn win_then_regenerate_next_level() {
        let mut game = new_game(5);
        game.start(1, true).unwrap();
        game.toggle_solution();
        let path = game.solution().unwrap().path.clone();
        for node in &path[1..] {
            assert!(game.try_extend(*node));
        }
        assert_eq!(game.evaluate(), Outcome::Won);
        game.start(game.level, true).unwrap();
        assert_eq!(game.level, 2);
        assert_eq!(game.graph().num_nodes(), node_count(2));
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn disconnected_graph_is_rejected() {
        let mut g = WeightedGraph::new(4);
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(2, 3, 1).unwrap();
        let mut game = scenario_game();
        assert_eq!(game.set_graph(g, 0, 3), Err(ShortestPathError::NoPath(0, 3)));
        assert_eq!(game.graph().num_nodes(), 3);
    }

    #[test]
    fn same_start_and_end_is_rejected() {
        let mut g = WeightedGraph::new(4);
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(1, 2, 1).unwrap();
        g.add_edge(2, 3, 1).unwrap();
        let mut game = scenario_game();
        assert!(game.try_extend(1));
        assert_eq!(game.set_graph(g, 1, 1), Err(ShortestPathError::SameNode(1)));

        // The previous round is untouched
        assert_eq!(game.graph().num_nodes(), 3);
        assert_eq!((game.start_node(), game.end_node()), (0, 2));
        assert_eq!(game.player_path().get(), &[0, 1]);
        game.toggle_solution();
        assert_eq!(game.solution().unwrap().path, vec![0, 1, 2]);
    }

    #[test]
    fn start_sets_the_level_of_the_generated_graph() {
        let mut game = new_game(21);
        game.start(1, true).unwrap();
        assert_eq!(game.level, 1);
        assert_eq!(game.graph().num_nodes(), node_count(1));

        game.start(3, true).unwrap();
        assert_eq!(game.level, 3);
        assert_eq!(game.graph().num_nodes(), node_count(3));
        assert_eq!(game.attempts(), 1);
        assert_ne!(game.start_node(), game.end_node());

        // A retry keeps the graph and the level
        game.start(3, false).unwrap();
        assert_eq!(game.level, 3);
        assert_eq!(game.graph().num_nodes(), node_count(3));
        assert_eq!(game.attempts(), 2);
    }

    #[test]
    fn undo_and_rejected_moves_through_the_game() {
        let mut game = scenario_game();
        assert!(game.try_extend(2));
        assert!(!game.try_extend(2));
        game.undo();
        game.undo();
        assert_eq!(game.player_path().get(), &[0]);
        game.redo();
        assert_eq!(game.player_path().get(), &[0, 2]);
        assert_eq!(game.player_path().weight(), 10);
        assert_eq!(Outcome::Lost.to_string(), "You lost!");
    }
}
