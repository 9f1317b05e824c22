/*
terminal.rs

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

//! Play the game in a terminal.
//!
//! The player types one command per line:
//!
//! ```text
//! <node>  add the node to the path
//! u       undo the last node
//! r       redo the last undone node
//! s       show or hide the solution
//! f       finish the path and compare it with the solution
//! h       display the help
//! q       quit
//! ```

use log::debug;
use std::io::{self, BufRead, Write};

use crate::game::{Game, Outcome};

const HELP: &str = "Commands:
  <node>  add the node to your path
  u       undo the last node
  r       redo the last undone node
  s       show or hide the solution
  f       finish and compare your path with the best one
  h       display this help
  q       quit";

/// Commands that the player can type.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Command {
    Node(usize),
    Undo,
    Redo,
    Solution,
    Finish,
    Help,
    Quit,
}

/// Parse a line of input. Return None for unknown commands.
fn parse_command(line: &str) -> Option<Command> {
    let line: &str = line.trim();
    if let Ok(node) = line.parse::<usize>() {
        return Some(Command::Node(node));
    }
    match line.to_lowercase().as_str() {
        "u" | "undo" => Some(Command::Undo),
        "r" | "redo" => Some(Command::Redo),
        "s" | "solution" => Some(Command::Solution),
        "f" | "finish" => Some(Command::Finish),
        "h" | "help" | "?" => Some(Command::Help),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Format a list of nodes as `a -> b -> c`.
fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(|n| n.to_string())
        .collect::<Vec<String>>()
        .join(" -> ")
}

/// Print the graph, the player's path, and the solution if requested.
fn draw<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    let graph = game.graph();
    let player_path = game.player_path();
    let solution = game.solution();

    writeln!(out)?;
    writeln!(
        out,
        "Level {}  Score {}  Attempt {}",
        game.level,
        game.score,
        game.attempts()
    )?;
    writeln!(
        out,
        "Find the lightest path from node {} to node {}",
        game.start_node(),
        game.end_node()
    )?;

    for edge in graph.edges() {
        let mut mark: String = String::new();
        if solution.is_some_and(|s| s.contains_edge(edge.a, edge.b)) {
            mark.push_str(" [solution]");
        }
        if player_path.edges().contains(edge) {
            mark.push_str(" [path]");
        }
        writeln!(out, "  {:>2} - {:<2} weight {:>2}{mark}", edge.a, edge.b, edge.weight)?;
    }

    writeln!(
        out,
        "Your path: {}  (weight {})",
        format_path(player_path.get()),
        player_path.weight()
    )?;
    if let Some(s) = solution {
        writeln!(out, "Solution:  {}  (weight {})", format_path(&s.path), s.weight)?;
    }
    if game.is_solution_shown() {
        writeln!(out, "Type s to hide the solution")?;
    }
    if player_path.redo_len() > 0 {
        writeln!(out, "Type r to put back {} node(s)", player_path.redo_len())?;
    }
    if game.reached_end() {
        writeln!(out, "You reached node {}. Type f to finish.", game.end_node())?;
    }
    Ok(())
}

/// Run the game loop until the player quits or the input ends.
///
/// The game must have been started with [`Game::start`].
pub fn play<R: BufRead, W: Write>(game: &mut Game, input: R, out: &mut W) -> io::Result<()> {
    writeln!(out, "{HELP}")?;
    draw(game, out)?;

    for line in input.lines() {
        let line: String = line?;
        let Some(command) = parse_command(&line) else {
            writeln!(out, "Unknown command. Type h for help.")?;
            continue;
        };
        debug!("Command: {command:?}");

        match command {
            Command::Node(node) => {
                if !game.try_extend(node) {
                    writeln!(
                        out,
                        "Node {node} is not connected to node {}",
                        game.player_path().last()
                    )?;
                    continue;
                }
            }
            Command::Undo => game.undo(),
            Command::Redo => game.redo(),
            Command::Solution => game.toggle_solution(),
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Quit => return Ok(()),
            Command::Finish => {
                let outcome: Outcome = game.evaluate();
                writeln!(out, "{outcome} Score: {}", game.score)?;
                // A win moves to a new graph, a loss retries the same one
                game.start(game.level, outcome == Outcome::Won)
                    .map_err(io::Error::other)?;
            }
        }
        draw(game, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::graph::WeightedGraph;
    use crate::generator::layout::CircularLayout;
    use std::io::Cursor;

    fn scenario_game() -> Game {
        let mut g = WeightedGraph::new(3);
        g.add_edge(0, 1, 3).unwrap();
        g.add_edge(1, 2, 4).unwrap();
        g.add_edge(0, 2, 10).unwrap();
        let mut game = Game::new(Box::new(CircularLayout::default()), 800, 600, Some(9));
        game.set_graph(g, 0, 2).unwrap();
        game.start(1, false).unwrap();
        game
    }

    fn run(game: &mut Game, script: &str) -> String {
        let mut out: Vec<u8> = Vec::new();
        play(game, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn commands_are_parsed() {
        assert_eq!(parse_command(" 4 "), Some(Command::Node(4)));
        assert_eq!(parse_command("U"), Some(Command::Undo));
        assert_eq!(parse_command("redo"), Some(Command::Redo));
        assert_eq!(parse_command("s"), Some(Command::Solution));
        assert_eq!(parse_command("f"), Some(Command::Finish));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("jump"), None);
        assert_eq!(parse_command("-1"), None);
    }

    #[test]
    fn winning_moves_to_the_next_level() {
        let mut game = scenario_game();
        let out = run(&mut game, "1\n2\nf\nq\nnot read\n");
        assert!(out.contains("You won! Score: 10"));
        assert_eq!(game.level, 2);
        assert_eq!(game.graph().num_nodes(), 9);
    }

    #[test]
    fn losing_retries_the_same_graph() {
        let mut game = scenario_game();
        let out = run(&mut game, "2\nf\n");
        assert!(out.contains("You lost! Score: 0"));
        assert_eq!(game.level, 1);
        assert_eq!(game.graph().num_nodes(), 3);
        assert_eq!(game.player_path().get(), &[0]);
        assert_eq!(game.attempts(), 2);
    }

    #[test]
    fn rejected_moves_and_solution_display() {
        let mut game = scenario_game();
        let out = run(&mut game, "1\n1\nbogus\ns\n");
        assert!(out.contains("Node 1 is not connected to node 1"));
        assert!(out.contains("Unknown command"));
        assert!(out.contains("Solution:  0 -> 1 -> 2  (weight 7)"));
        assert!(out.contains("Your path: 0 -> 1  (weight 3)"));
        assert_eq!(game.player_path().get(), &[0, 1]);
    }
}
