/*
cli_options.rs

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

//! Process command-line options.
//!
//! Without options, the game starts at level 1 with random graphs.
//! Some options are intended for developers tuning the level generator.
//!
//! # Examples
//!
//! Replay the same sequence of graphs, starting at level 3:
//!
//! ```
//! $ pathfinder-quest --seed 1234 --level 3
//! ```
//!
//! Print two generated levels, with their solution and node positions, in JSON format:
//!
//! ```
//! $ pathfinder-quest --generate 2 --level 1 --seed 7
//! [
//!   {
//!     "level": 1,
//!     "graph": {
//!       "num_nodes": 7,
//!       "edges": [
//!         {
//!           "a": 2,
//!           "b": 5,
//!           "weight": 8
//!         },
//! ...
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::ops::ControlFlow;

use crate::config::COPYRIGHT_NOTICE;
use crate::game::Game;
use crate::generator::layout::CircularLayout;

/// Find the lightest path between two nodes of a random graph.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Starting level
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    level: u32,

    /// Seed for the random generator, to replay the same graphs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Canvas width used to position the nodes
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Canvas height used to position the nodes
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Space between the nodes and the canvas borders
    #[arg(long, default_value_t = 100)]
    padding: u32,

    /// Print the given number of generated levels in JSON format and exit
    #[arg(short, long)]
    generate: Option<usize>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Game parameters collected from the command line.
pub struct Settings {
    pub level: u32,
    pub seed: Option<u64>,
    pub width: u32,
    pub height: u32,
    pub padding: u32,
}

impl Settings {
    /// Create a [`Game`] object configured with these settings.
    pub fn new_game(&self) -> Game {
        Game::new(
            Box::new(CircularLayout {
                padding: self.padding,
            }),
            self.width,
            self.height,
            self.seed,
        )
    }
}

/// Parse and process command-line options.
///
/// Return the exit code when the options have been fully processed (`--generate`), or the
/// settings to start a game.
pub fn parse() -> ControlFlow<u8, Settings> {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let settings: Settings = Settings {
        level: args.level,
        seed: args.seed,
        width: args.width,
        height: args.height,
        padding: args.padding,
    };
    debug!(
        "Starting level {}, seed {:?}, canvas {}x{}",
        settings.level, settings.seed, settings.width, settings.height
    );

    //
    // Generate levels for developers
    //
    if let Some(count) = args.generate {
        return ControlFlow::Break(print_levels(&settings, count));
    }

    ControlFlow::Continue(settings)
}

/// Print the given number of generated levels in JSON format and return the exit code.
fn print_levels(settings: &Settings, count: usize) -> u8 {
    let mut game: Game = settings.new_game();
    let mut levels: Vec<serde_json::Value> = Vec::with_capacity(count);

    for i in 0..count {
        debug!("Generating level {i}");
        if let Err(error) = game.start(settings.level, true) {
            eprintln!("Cannot generate a level: {error}");
            return 1;
        }
        match serde_json::to_value(game.snapshot()) {
            Ok(v) => levels.push(v),
            Err(error) => {
                eprintln!("Cannot serialize the level: {error}");
                return 1;
            }
        }
    }

    match serde_json::to_string_pretty(&levels) {
        Ok(s) => {
            println!("{s}");
            0
        }
        Err(error) => {
            eprintln!("Cannot serialize the levels: {error}");
            1
        }
    }
}
