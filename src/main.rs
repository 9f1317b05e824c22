/*
main.rs

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

mod cli_options;
mod config;
mod game;
mod generator;
mod player_path;
mod terminal;

use std::io;
use std::ops::ControlFlow;
use std::process::ExitCode;

use crate::cli_options::Settings;
use crate::game::Game;

fn main() -> ExitCode {
    let settings: Settings = match cli_options::parse() {
        ControlFlow::Break(ret) => return ExitCode::from(ret),
        ControlFlow::Continue(s) => s,
    };

    let mut game: Game = settings.new_game();
    if let Err(error) = game.start(settings.level, true) {
        eprintln!("Cannot start the game: {error}");
        return ExitCode::FAILURE;
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let ret: io::Result<()> = terminal::play(&mut game, stdin.lock(), &mut stdout);

    // Scores are not kept after the session
    println!("Final score: {} (level {})", game.score, game.level);

    match ret {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
