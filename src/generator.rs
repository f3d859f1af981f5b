/*
generator.rs

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

//! Generate random levels.
//!
//! A level is a [`level::LevelData`] object: a list of [`level::Node`] objects with their
//! position on the canvas, and a list of [`level::Edge`] objects between them.
//!
//! You create a level by creating a [`random_level::LevelGenerator`] object and by using its
//! [`random_level::LevelGenerator::generate`] method with the level number.
//! The generation goes through the following steps:
//!
//! * The level number gives the number of nodes and the degree bounds
//!   (see [`difficulty::LevelConfig`]).
//!
//! * A node placement pattern is randomly selected among the patterns of the level tier, and
//!   the nodes are placed on the canvas (see [`patterns::Pattern`]).
//!
//! * The nodes that are too close to each other are pushed apart (see [`overlap::separate`]).
//!
//! * Random edges are created between the nodes, in two passes (see [`edges`]).
//!   The first pass tries to give every node the minimum number of edges, and the second pass
//!   adds more edges without exceeding the maximum.

pub mod difficulty;
pub mod edges;
pub mod level;
pub mod overlap;
pub mod patterns;
pub mod random_level;
