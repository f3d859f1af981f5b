/*
level.rs

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

//! Level representation: nodes, edges, and colors.
//!
//! A level is serialized as a JSON document with the node list followed by the edge list:
//!
//! ```json
//! {
//!   "nodes": [{"id": "n1", "x": 120.0, "y": 340.0}, {"id": "n2", "x": 410.0, "y": 95.0}],
//!   "edges": [{"from": "n1", "to": "n2"}]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::GameError;

/// Node identifier, such as `n12`.
pub type NodeId = String;

/// Colors offered to the player.
pub const PALETTE: [&str; 4] = ["#FF0000", "#00FF00", "#0000FF", "#FFD700"];

/// Build the identifier of the node at the given position in the generation order.
pub fn node_id(index: usize) -> NodeId {
    format!("n{}", index + 1)
}

/// A colorable point in the puzzle graph.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

impl Node {
    /// Create a [`Node`] object.
    pub fn new(id: &str, x: f64, y: f64) -> Self {
        Self {
            id: String::from(id),
            x,
            y,
        }
    }
}

/// Adjacency constraint between two nodes. The direction is not significant.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    /// Create an [`Edge`] object.
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: String::from(from),
            to: String::from(to),
        }
    }

    /// Whether the edge connects the given node.
    pub fn touches(&self, id: &str) -> bool {
        self.from == id || self.to == id
    }

    /// Return the other end of the edge, or None if the edge does not touch the node.
    pub fn other(&self, id: &str) -> Option<&str> {
        if self.from == id {
            Some(&self.to)
        } else if self.to == id {
            Some(&self.from)
        } else {
            None
        }
    }

    /// Order-independent representation of the edge.
    pub fn key(&self) -> (NodeId, NodeId) {
        if self.from <= self.to {
            (self.from.clone(), self.to.clone())
        } else {
            (self.to.clone(), self.from.clone())
        }
    }
}

/// Edges are unordered pairs: `a-b` equals `b-a`.
impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

/// Color assigned to a node.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Create a [`Color`] object from a CSS-like color string.
    pub fn new(color: &str) -> Self {
        Self(String::from(color))
    }

    /// Return the color string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the colors of the default palette.
    pub fn palette() -> Vec<Color> {
        PALETTE.iter().map(|c| Color::new(c)).collect()
    }
}

impl From<&str> for Color {
    fn from(color: &str) -> Self {
        Color::new(color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A generated graph: the nodes in generation order and the edges between them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LevelData {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl LevelData {
    /// Create a [`LevelData`] object.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Whether the node is part of the level.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Return the node with the given identifier.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Number of edges that touch the given node.
    pub fn degree(&self, id: &str) -> usize {
        self.edges.iter().filter(|e| e.touches(id)).count()
    }

    /// Whether an edge already connects the two nodes, in any direction.
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edges
            .iter()
            .any(|e| (e.from == a && e.to == b) || (e.from == b && e.to == a))
    }

    /// Verify the structure of the level.
    ///
    /// # Errors
    ///
    /// Return [`GameError::MalformedLevelData`] if a node ID is duplicated, or if an edge is a
    /// loop, is duplicated, or references a missing node.
    pub fn validate(&self) -> Result<(), GameError> {
        let mut ids: HashSet<&str> = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if node.id.is_empty() {
                return Err(GameError::MalformedLevelData(String::from(
                    "node with an empty identifier",
                )));
            }
            if !ids.insert(&node.id) {
                return Err(GameError::MalformedLevelData(format!(
                    "duplicated node {}",
                    node.id
                )));
            }
            if !node.x.is_finite() || !node.y.is_finite() {
                return Err(GameError::MalformedLevelData(format!(
                    "node {} has invalid coordinates",
                    node.id
                )));
            }
        }

        let mut pairs: HashSet<(NodeId, NodeId)> = HashSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            for end in [&edge.from, &edge.to] {
                if !ids.contains(end.as_str()) {
                    return Err(GameError::MalformedLevelData(format!(
                        "edge {}-{} references the missing node {end}",
                        edge.from, edge.to
                    )));
                }
            }
            if edge.from == edge.to {
                return Err(GameError::MalformedLevelData(format!(
                    "edge {}-{} connects a node to itself",
                    edge.from, edge.to
                )));
            }
            if !pairs.insert(edge.key()) {
                return Err(GameError::MalformedLevelData(format!(
                    "edge {}-{} is duplicated",
                    edge.from, edge.to
                )));
            }
        }
        Ok(())
    }

    /// Serialize the level in JSON format.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse and verify a level in JSON format.
    ///
    /// # Errors
    ///
    /// Return [`GameError::MalformedLevelData`] if the document cannot be parsed or if the level
    /// structure is wrong.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let level: LevelData = serde_json::from_str(json)
            .map_err(|e| GameError::MalformedLevelData(e.to_string()))?;
        level.validate()?;
        Ok(level)
    }
}
