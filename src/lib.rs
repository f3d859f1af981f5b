/*
lib.rs

Copyright 2025 The Colorgraph Authors

This file is part of Colorgraph.

Colorgraph is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Colorgraph is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Colorgraph. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Graph coloring puzzle.
//!
//! The player assigns colors to the nodes of a generated graph so that no two connected nodes
//! share a color.
//!
//! * [`generator`] builds the levels: node placement and random edges.
//! * [`game::PuzzleEngine`] holds the colors of the loaded level, and reports conflicts and
//!   completion.
//! * [`loader::LevelLoader`] keeps the generated levels for the session.
//! * [`stopwatch::Stopwatch`] measures the time to solve a level.
//! * [`saver`] exports and imports levels as JSON files.
//!
//! The objects are created by the caller and passed explicitly; there is no global state.

pub mod adjacency;
pub mod config;
pub mod error;
pub mod game;
pub mod generator;
pub mod loader;
pub mod saver;
pub mod stopwatch;

pub use error::GameError;
pub use game::{ColorOutcome, GameStatus, PuzzleEngine};
pub use generator::level::{Color, Edge, LevelData, Node, NodeId};
pub use generator::random_level::LevelGenerator;
pub use loader::LevelLoader;
