/*
adjacency.rs

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

//! Adjacency index of a level.
//!
//! The index is built once when a level is loaded so that looking up the neighbors of a node
//! does not require scanning the edge list.

use std::collections::{BTreeSet, HashMap};

use crate::generator::level::{LevelData, NodeId};

/// For each node, the set of the nodes connected to it.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    neighbors: HashMap<NodeId, BTreeSet<NodeId>>,
}

impl Adjacency {
    /// Build the index for the given level.
    ///
    /// Every node of the level gets an entry, even isolated nodes.
    pub fn new(level: &LevelData) -> Self {
        let mut neighbors: HashMap<NodeId, BTreeSet<NodeId>> = level
            .nodes
            .iter()
            .map(|n| (n.id.clone(), BTreeSet::new()))
            .collect();

        for edge in &level.edges {
            neighbors
                .entry(edge.from.clone())
                .or_default()
                .insert(edge.to.clone());
            neighbors
                .entry(edge.to.clone())
                .or_default()
                .insert(edge.from.clone());
        }
        Self { neighbors }
    }

    /// Whether the node is indexed.
    pub fn contains(&self, id: &str) -> bool {
        self.neighbors.contains_key(id)
    }

    /// Return the neighbors of the node, or None for an unknown node.
    pub fn neighbors(&self, id: &str) -> Option<&BTreeSet<NodeId>> {
        self.neighbors.get(id)
    }

    /// Whether the two nodes are connected.
    pub fn is_adjacent(&self, id1: &str, id2: &str) -> bool {
        self.neighbors.get(id1).is_some_and(|n| n.contains(id2))
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::level::{Edge, Node};

    #[test]
    fn index() {
        let level = LevelData::new(
            vec![
                Node::new("a", 0.0, 0.0),
                Node::new("b", 0.0, 0.0),
                Node::new("c", 0.0, 0.0),
                Node::new("d", 0.0, 0.0),
            ],
            vec![Edge::new("a", "b"), Edge::new("c", "b")],
        );
        let adjacency = Adjacency::new(&level);

        assert_eq!(adjacency.len(), 4);
        assert!(adjacency.is_adjacent("b", "a"));
        assert!(adjacency.is_adjacent("b", "c"));
        assert!(!adjacency.is_adjacent("a", "c"));
        assert_eq!(
            adjacency.neighbors("b").unwrap().iter().collect::<Vec<_>>(),
            ["a", "c"]
        );
        assert!(adjacency.neighbors("d").unwrap().is_empty());
        assert!(adjacency.neighbors("z").is_none());
    }
}
