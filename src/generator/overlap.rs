/*
overlap.rs

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

//! Push overlapping nodes apart.

use log::debug;

use super::level::Node;
use crate::config::GeneratorConfig;

/// Result of the separation process.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Separation {
    /// Number of passes over the node pairs.
    pub passes: usize,

    /// Number of pairs still closer than the minimum distance after the last pass.
    /// Residual overlaps are tolerated.
    pub residual: usize,
}

/// Distance between two nodes.
pub fn distance(a: &Node, b: &Node) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Number of node pairs closer than `min_distance`.
pub fn close_pairs(nodes: &[Node], min_distance: f64) -> usize {
    let mut count: usize = 0;
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            if distance(&nodes[i], &nodes[j]) < min_distance {
                count += 1;
            }
        }
    }
    count
}

/// Separate the nodes that are closer than the minimum distance.
///
/// Each pass moves both nodes of every close pair away from each other, along the line that
/// connects them, by half the missing distance. Positions are rounded and kept inside the canvas.
/// The process stops after a pass without close pairs, or after
/// `node_position_max_attempts` passes.
pub fn separate(nodes: &mut [Node], config: &GeneratorConfig) -> Separation {
    let min_distance: f64 = config.min_node_distance;
    let mut passes: usize = 0;

    while passes < config.node_position_max_attempts {
        passes += 1;
        let mut overlapping: bool = false;

        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let dx: f64 = nodes[j].x - nodes[i].x;
                let dy: f64 = nodes[j].y - nodes[i].y;
                let d: f64 = dx.hypot(dy);
                if d >= min_distance {
                    continue;
                }
                overlapping = true;

                // atan2(0, 0) is 0: stacked nodes are separated horizontally
                let angle: f64 = dy.atan2(dx);
                let adjustment: f64 = (min_distance - d) / 2.0;
                let (cos, sin) = (angle.cos(), angle.sin());

                nodes[i].x = config.clamp(nodes[i].x - cos * adjustment).round();
                nodes[i].y = config.clamp(nodes[i].y - sin * adjustment).round();
                nodes[j].x = config.clamp(nodes[j].x + cos * adjustment).round();
                nodes[j].y = config.clamp(nodes[j].y + sin * adjustment).round();
            }
        }

        if !overlapping {
            break;
        }
    }

    let residual: usize = close_pairs(nodes, min_distance);
    debug!("Node separation: {passes} passes, {residual} pairs still too close");
    Separation { passes, residual }
}
