/*
edges.rs

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

//! Random edges between the nodes of a level.
//!
//! Edges are generated in two passes:
//!
//! 1. Each node, in generation order, gets edges until it reaches the minimum degree.
//! 2. Each node that is still below the maximum degree gets a random number of additional edges.
//!
//! A partner is eligible when it is not the node itself, when it is below the maximum degree,
//! and when the two nodes are not already connected.
//! The minimum degree is a best effort: a node stays below the minimum when there is no eligible
//! partner left.

use log::{Level, debug, log_enabled};
use rand::Rng;
use std::collections::HashMap;

use super::difficulty::LevelConfig;
use super::level::{Edge, Node};

/// Edges between nodes, stored by node index.
#[derive(Debug, Clone)]
pub struct Edges {
    /// For each node index, the list of the adjacent node indexes.
    edges: HashMap<usize, Vec<usize>>,

    /// Created edges, in creation order.
    order: Vec<(usize, usize)>,

    /// Number of nodes.
    num_nodes: usize,

    /// Maximum degree for a node.
    max_degree: usize,
}

impl Edges {
    /// Create the object for `num_nodes` nodes that cannot have more than `max_degree` edges.
    pub fn new(num_nodes: usize, max_degree: usize) -> Self {
        Self {
            edges: HashMap::with_capacity(num_nodes),
            order: Vec::new(),
            num_nodes,
            max_degree,
        }
    }

    /// Remove all the edges from the object.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.order.clear();
    }

    /// Number of edges of the given node.
    pub fn degree(&self, node: usize) -> usize {
        self.edges.get(&node).map_or(0, |a| a.len())
    }

    /// Whether the two nodes are connected.
    pub fn is_connected(&self, node1: usize, node2: usize) -> bool {
        self.edges
            .get(&node1)
            .is_some_and(|a| a.contains(&node2))
    }

    /// Connect two nodes.
    pub fn connect(&mut self, node1: usize, node2: usize) {
        self.edges.entry(node1).or_default().push(node2);
        self.edges.entry(node2).or_default().push(node1);
        self.order.push((node1, node2));
    }

    /// Return the nodes that the given node can be connected to.
    pub fn eligible_partners(&self, node: usize) -> Vec<usize> {
        (0..self.num_nodes)
            .filter(|&p| {
                p != node && self.degree(p) < self.max_degree && !self.is_connected(node, p)
            })
            .collect()
    }

    /// Connect the node to `count` random partners, picked from `partners`.
    ///
    /// Return the number of edges created, which is lower than `count` when there are not
    /// enough partners.
    fn connect_random<R: Rng>(
        &mut self,
        node: usize,
        mut partners: Vec<usize>,
        count: usize,
        rng: &mut R,
    ) -> usize {
        let count: usize = count.min(partners.len());
        for _ in 0..count {
            let p: usize = partners.swap_remove(rng.random_range(0..partners.len()));
            debug!("    Edge {node}-{p}");
            self.connect(node, p);
        }
        count
    }

    /// First pass: bring every node to the minimum degree when possible.
    pub fn satisfy_minimum<R: Rng>(&mut self, min_degree: usize, rng: &mut R) {
        for node in 0..self.num_nodes {
            let degree: usize = self.degree(node);
            if degree >= min_degree {
                continue;
            }
            let partners: Vec<usize> = self.eligible_partners(node);
            let created: usize = self.connect_random(node, partners, min_degree - degree, rng);
            if degree + created < min_degree {
                debug!(
                    "Node {node} stays below the minimum degree ({} < {min_degree})",
                    degree + created
                );
            }
        }
    }

    /// Second pass: add a random number of edges to the nodes below the maximum degree.
    pub fn fill_toward_maximum<R: Rng>(&mut self, rng: &mut R) {
        for node in 0..self.num_nodes {
            let degree: usize = self.degree(node);
            if degree >= self.max_degree {
                continue;
            }
            let partners: Vec<usize> = self.eligible_partners(node);
            let additional: usize = rng.random_range(0..=self.max_degree - degree);
            self.connect_random(node, partners, additional, rng);
        }
    }

    /// Nodes that are below the minimum degree although an eligible partner still exists.
    /// After [`Edges::satisfy_minimum`], the list is always empty.
    pub fn unsatisfied(&self, min_degree: usize) -> Vec<usize> {
        (0..self.num_nodes)
            .filter(|&n| self.degree(n) < min_degree && !self.eligible_partners(n).is_empty())
            .collect()
    }

    /// Nodes below the minimum degree.
    pub fn below_minimum(&self, min_degree: usize) -> Vec<usize> {
        (0..self.num_nodes)
            .filter(|&n| self.degree(n) < min_degree)
            .collect()
    }

    /// Convert the edges to [`Edge`] objects, in creation order.
    pub fn to_edges(&self, nodes: &[Node]) -> Vec<Edge> {
        self.order
            .iter()
            .map(|&(a, b)| Edge::new(&nodes[a].id, &nodes[b].id))
            .collect()
    }

    /// Print the edges.
    pub fn debug(&self) {
        let mut s: String = String::new();
        let mut v: Vec<_> = self.edges.iter().collect();

        v.sort_by_key(|a| a.0);
        for (n1, e) in v {
            s.clear();
            s.push_str(&format!("{n1:>3} ({}) -->", e.len()));
            for n2 in e {
                s.push_str(&format!(" {n2}"));
            }
            debug!("{s}");
        }
    }
}

/// Generate the edges of a level.
pub fn generate<R: Rng>(nodes: &[Node], config: &LevelConfig, rng: &mut R) -> Edges {
    let mut edges: Edges = Edges::new(nodes.len(), config.max_edges_per_node);

    debug!(
        "Generating edges: degree {}-{} for {} nodes",
        config.min_edges_per_node,
        config.max_edges_per_node,
        nodes.len()
    );
    edges.satisfy_minimum(config.min_edges_per_node, rng);
    edges.fill_toward_maximum(rng);

    if log_enabled!(Level::Debug) {
        edges.debug();
    }
    edges
}
