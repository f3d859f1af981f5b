/*
game.rs

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

//! Manage the status of a level in progress.
//!
//! The [`PuzzleEngine`] object owns the loaded level and the colors that the player assigned
//! to its nodes.
//! The only way to change the colors is [`PuzzleEngine::color_node`], which reports the
//! conflicts with the adjacent nodes and whether the level is solved.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::adjacency::Adjacency;
use crate::error::GameError;
use crate::generator::level::{Color, LevelData, NodeId};

/// Status of the level.
///
/// `Unstarted` until the first color is set, then `InProgress` or `Complete` after each
/// coloring. Loading a level goes back to `Unstarted`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Unstarted,
    InProgress,
    Complete,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameStatus::Unstarted => write!(f, "unstarted"),
            GameStatus::InProgress => write!(f, "in-progress"),
            GameStatus::Complete => write!(f, "complete"),
        }
    }
}

/// Result of coloring a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorOutcome {
    /// Adjacent nodes that have the same color as the colored node.
    pub conflicts: BTreeSet<NodeId>,

    /// Whether all the nodes are colored without any conflict.
    pub complete: bool,

    /// Status after the coloring.
    pub status: GameStatus,
}

/// Manage the coloring of the loaded level.
#[derive(Debug, Default)]
pub struct PuzzleEngine {
    /// Loaded level.
    level: LevelData,

    /// Neighbors of each node of the level.
    adjacency: Adjacency,

    /// Colors set by the player. Nodes without an entry are not colored yet.
    coloring: HashMap<NodeId, Color>,

    /// Identifier of the selected node.
    selected: Option<NodeId>,

    /// Level status.
    status: GameStatus,
}

impl PuzzleEngine {
    /// Create a [`PuzzleEngine`] object without any level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a level. The colors and the selection are cleared.
    ///
    /// # Errors
    ///
    /// Return [`GameError::MalformedLevelData`] if the level structure is wrong. In that case the
    /// previous level stays loaded, with its colors.
    pub fn load(&mut self, level: LevelData) -> Result<(), GameError> {
        if let Err(e) = level.validate() {
            warn!("Level rejected: {e}");
            return Err(e);
        }
        self.adjacency = Adjacency::new(&level);
        self.level = level;
        self.coloring.clear();
        self.selected = None;
        self.status = GameStatus::Unstarted;
        info!(
            "Level loaded: {} nodes, {} edges",
            self.level.nodes.len(),
            self.level.edges.len()
        );
        Ok(())
    }

    /// Return the loaded level.
    pub fn level(&self) -> &LevelData {
        &self.level
    }

    /// Return the level status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Select a node, or clear the selection if the node is already selected.
    /// Unknown nodes are ignored.
    pub fn select(&mut self, id: &str) {
        if !self.adjacency.contains(id) {
            debug!("Ignoring the selection of the unknown node {id}");
            return;
        }
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(String::from(id));
        }
    }

    /// Get the identifier of the selected node.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Return the color of the node, or None if the node is not colored.
    pub fn color_of(&self, id: &str) -> Option<&Color> {
        self.coloring.get(id)
    }

    /// Return all the colors set so far.
    pub fn coloring(&self) -> &HashMap<NodeId, Color> {
        &self.coloring
    }

    /// Return the nodes connected to the given node.
    ///
    /// # Errors
    ///
    /// Return [`GameError::UnknownNodeReference`] if the node is not part of the level.
    pub fn neighbors(&self, id: &str) -> Result<&BTreeSet<NodeId>, GameError> {
        self.adjacency
            .neighbors(id)
            .ok_or_else(|| GameError::UnknownNodeReference(String::from(id)))
    }

    /// Set the color of a node, replacing any previous color.
    ///
    /// Return the adjacent nodes that now have the same color, and whether the level is solved.
    ///
    /// # Errors
    ///
    /// Return [`GameError::UnknownNodeReference`] if the node is not part of the level. In that
    /// case nothing is modified.
    pub fn color_node(&mut self, id: &str, color: Color) -> Result<ColorOutcome, GameError> {
        if !self.adjacency.contains(id) {
            return Err(GameError::UnknownNodeReference(String::from(id)));
        }

        debug!("Node {id} colored with {color}");
        self.coloring.insert(String::from(id), color);

        let conflicts: BTreeSet<NodeId> = self.conflicts_for(id);
        for c in &conflicts {
            debug!("Conflict between {id} and {c}");
        }

        let complete: bool = self.is_complete();
        let status: GameStatus = if complete {
            GameStatus::Complete
        } else {
            GameStatus::InProgress
        };
        if status == GameStatus::Complete && self.status != GameStatus::Complete {
            info!("Level complete");
        }
        self.status = status;

        Ok(ColorOutcome {
            conflicts,
            complete,
            status,
        })
    }

    /// Return the adjacent nodes that have the same color as the given node.
    ///
    /// The set is empty when the node is not colored, or is not part of the level.
    pub fn conflicts_for(&self, id: &str) -> BTreeSet<NodeId> {
        let (Some(color), Some(neighbors)) = (self.coloring.get(id), self.adjacency.neighbors(id))
        else {
            return BTreeSet::new();
        };
        neighbors
            .iter()
            .filter(|n| self.coloring.get(n.as_str()) == Some(color))
            .cloned()
            .collect()
    }

    /// Whether two connected nodes have the same color.
    pub fn has_conflicts(&self) -> bool {
        self.level.edges.iter().any(|e| {
            match (self.coloring.get(&e.from), self.coloring.get(&e.to)) {
                (Some(c1), Some(c2)) => c1 == c2,
                _ => false,
            }
        })
    }

    /// Return all the nodes involved in a conflict.
    pub fn conflicting_nodes(&self) -> BTreeSet<NodeId> {
        let mut nodes: BTreeSet<NodeId> = BTreeSet::new();
        for e in &self.level.edges {
            if let (Some(c1), Some(c2)) = (self.coloring.get(&e.from), self.coloring.get(&e.to))
                && c1 == c2
            {
                nodes.insert(e.from.clone());
                nodes.insert(e.to.clone());
            }
        }
        nodes
    }

    /// Number of colored nodes.
    pub fn colored_count(&self) -> usize {
        self.coloring.len()
    }

    /// Whether all the nodes are colored and no connected nodes share a color.
    pub fn is_complete(&self) -> bool {
        self.level
            .nodes
            .iter()
            .all(|n| self.coloring.contains_key(&n.id))
            && !self.has_conflicts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::level::{Edge, Node};

    /// Nodes A, B, C with the edges A-B and B-C.
    fn chain() -> LevelData {
        LevelData::new(
            vec![
                Node::new("A", 100.0, 100.0),
                Node::new("B", 300.0, 100.0),
                Node::new("C", 500.0, 100.0),
            ],
            vec![Edge::new("A", "B"), Edge::new("B", "C")],
        )
    }

    fn engine() -> PuzzleEngine {
        let mut engine = PuzzleEngine::new();
        engine.load(chain()).unwrap();
        engine
    }

    #[test]
    fn chain_scenario() {
        let mut engine = engine();
        assert_eq!(engine.status(), GameStatus::Unstarted);

        let outcome = engine.color_node("A", Color::new("red")).unwrap();
        assert!(outcome.conflicts.is_empty());
        assert_eq!(outcome.status, GameStatus::InProgress);

        let outcome = engine.color_node("B", Color::new("red")).unwrap();
        assert_eq!(outcome.conflicts, BTreeSet::from([String::from("A")]));
        assert!(engine.has_conflicts());

        let outcome = engine.color_node("B", Color::new("blue")).unwrap();
        assert!(outcome.conflicts.is_empty());
        assert!(!outcome.complete);

        let outcome = engine.color_node("C", Color::new("red")).unwrap();
        assert!(outcome.conflicts.is_empty());
        assert!(outcome.complete);
        assert_eq!(engine.status(), GameStatus::Complete);
    }

    #[test]
    fn completion_can_be_lost() {
        let mut engine = engine();
        engine.color_node("A", Color::new("red")).unwrap();
        engine.color_node("B", Color::new("blue")).unwrap();
        engine.color_node("C", Color::new("red")).unwrap();
        assert_eq!(engine.status(), GameStatus::Complete);

        let outcome = engine.color_node("C", Color::new("blue")).unwrap();
        assert_eq!(outcome.conflicts, BTreeSet::from([String::from("B")]));
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert_eq!(
            engine.conflicting_nodes(),
            BTreeSet::from([String::from("B"), String::from("C")])
        );
    }

    #[test]
    fn selection_toggles() {
        let mut engine = engine();
        engine.select("A");
        assert_eq!(engine.selected(), Some("A"));
        engine.select("A");
        assert_eq!(engine.selected(), None);

        engine.select("A");
        engine.select("B");
        assert_eq!(engine.selected(), Some("B"));

        engine.select("Z");
        assert_eq!(engine.selected(), Some("B"));
    }

    #[test]
    fn unknown_node() {
        let mut engine = engine();
        engine.color_node("A", Color::new("red")).unwrap();

        let err = engine.color_node("Z", Color::new("red")).unwrap_err();
        assert_eq!(err, GameError::UnknownNodeReference(String::from("Z")));
        assert_eq!(engine.colored_count(), 1);
        assert_eq!(engine.color_of("A"), Some(&Color::new("red")));
        assert!(engine.neighbors("Z").is_err());
        assert!(engine.conflicts_for("Z").is_empty());
    }

    #[test]
    fn uncolored_node_has_no_conflict() {
        let mut engine = engine();
        engine.color_node("A", Color::new("red")).unwrap();
        assert!(engine.conflicts_for("B").is_empty());
    }

    #[test]
    fn load_resets_state() {
        let mut engine = engine();
        engine.select("B");
        engine.color_node("A", Color::new("red")).unwrap();

        engine.load(chain()).unwrap();
        assert_eq!(engine.status(), GameStatus::Unstarted);
        assert_eq!(engine.selected(), None);
        assert!(engine.coloring().is_empty());
    }

    #[test]
    fn malformed_level_keeps_previous_state() {
        let mut engine = engine();
        engine.color_node("A", Color::new("red")).unwrap();

        let mut bad = chain();
        bad.edges.push(Edge::new("C", "D"));
        assert!(matches!(
            engine.load(bad),
            Err(GameError::MalformedLevelData(_))
        ));
        assert_eq!(engine.level(), &chain());
        assert_eq!(engine.color_of("A"), Some(&Color::new("red")));
        assert_eq!(engine.status(), GameStatus::InProgress);
    }

    #[test]
    fn empty_engine() {
        let mut engine = PuzzleEngine::new();
        assert!(engine.is_complete());
        assert!(engine.color_node("n1", Color::new("red")).is_err());
    }
}
