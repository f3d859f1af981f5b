/*
patterns.rs

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

//! Initial node placement.
//!
//! The pattern only governs where the nodes are placed. Edges are generated independently of
//! the pattern (see [`super::edges`]).

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use strum_macros::FromRepr;

use super::difficulty::Tier;
use super::level::{Node, node_id};
use crate::config::GeneratorConfig;

/// Jitter, in canvas units, around the cluster centers of the [`Pattern::Scattered`] pattern.
const CLUSTER_OFFSET: f64 = 120.0;

/// Golden angle, in degrees, for the spiral part of [`Pattern::ComplexRandom`].
const GOLDEN_ANGLE_DEG: f64 = 137.5;

/// Node placement strategies.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Pattern {
    SimpleRandom,
    SimpleCircular,
    SimpleScattered,
    Scattered,
    Asymmetric,
    Clustered,
    ComplexRandom,
    MultiCluster,
    Dynamic,
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &str = match self {
            Pattern::SimpleRandom => "simple-random",
            Pattern::SimpleCircular => "simple-circular",
            Pattern::SimpleScattered => "simple-scattered",
            Pattern::Scattered => "scattered",
            Pattern::Asymmetric => "asymmetric",
            Pattern::Clustered => "clustered",
            Pattern::ComplexRandom => "complex-random",
            Pattern::MultiCluster => "multi-cluster",
            Pattern::Dynamic => "dynamic",
        };
        f.pad(name)
    }
}

impl Pattern {
    /// Return the patterns that can be used for the given tier.
    pub fn candidates(tier: Tier) -> &'static [Pattern] {
        match tier {
            Tier::Beginner => &[
                Pattern::SimpleRandom,
                Pattern::SimpleCircular,
                Pattern::SimpleScattered,
            ],
            Tier::Intermediate => &[Pattern::Scattered, Pattern::Asymmetric, Pattern::Clustered],
            Tier::Advanced => &[
                Pattern::ComplexRandom,
                Pattern::MultiCluster,
                Pattern::Dynamic,
            ],
        }
    }

    /// Return all the patterns.
    pub fn all() -> Vec<Pattern> {
        (0u8..).map_while(Pattern::from_repr).collect()
    }

    /// Return the tier that uses the pattern.
    pub fn tier(&self) -> Tier {
        (0u8..)
            .map_while(Tier::from_repr)
            .find(|t| Self::candidates(*t).contains(self))
            .unwrap_or(Tier::Advanced)
    }

    /// Randomly select a pattern among the candidates of the tier.
    pub fn choose<R: Rng>(tier: Tier, rng: &mut R) -> Self {
        let candidates: &[Pattern] = Self::candidates(tier);
        // The candidate lists are never empty
        *candidates.choose(rng).unwrap_or(&Pattern::SimpleRandom)
    }

    /// Place `count` nodes according to the pattern.
    ///
    /// Coordinates are rounded and kept inside the padded canvas.
    /// Nodes are not yet separated: see [`super::overlap::separate`].
    pub fn place<R: Rng>(
        &self,
        count: usize,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Vec<Node> {
        debug!("Placing {count} nodes with the {self} pattern");
        let positions: Vec<(f64, f64)> = match self {
            Pattern::SimpleRandom => uniform(count, config, rng),
            Pattern::SimpleCircular => circular(count, config, rng),
            Pattern::Scattered => scattered(count, config, rng),
            Pattern::Asymmetric => asymmetric(count, config, rng),
            Pattern::ComplexRandom => spiral_hybrid(count, config, rng),
            Pattern::SimpleScattered
            | Pattern::Clustered
            | Pattern::MultiCluster
            | Pattern::Dynamic => sectors(count, config, rng),
        };

        positions
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| Node {
                id: node_id(i),
                x: config.clamp(x).round(),
                y: config.clamp(y).round(),
            })
            .collect()
    }
}

/// Uniform random position in the padded canvas.
fn random_point<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> (f64, f64) {
    let size: f64 = config.usable_size();
    (
        config.margin + rng.random::<f64>() * size,
        config.margin + rng.random::<f64>() * size,
    )
}

fn uniform<R: Rng>(count: usize, config: &GeneratorConfig, rng: &mut R) -> Vec<(f64, f64)> {
    (0..count).map(|_| random_point(config, rng)).collect()
}

/// Nodes on a circle, with some angular and radial jitter.
fn circular<R: Rng>(
    count: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<(f64, f64)> {
    let center: f64 = config.canvas_size / 2.0;
    let radius: f64 = config.usable_size() * 0.4;

    (0..count)
        .map(|i| {
            let base_angle: f64 = i as f64 * 2.0 * PI / count as f64;
            let jitter: f64 = (rng.random::<f64>() - 0.5) * PI / 6.0;
            let r: f64 = radius + (rng.random::<f64>() - 0.5) * radius * 0.3;
            (
                center + r * (base_angle + jitter).cos(),
                center + r * (base_angle + jitter).sin(),
            )
        })
        .collect()
}

/// Two nodes around each cluster center, the remaining nodes anywhere.
fn scattered<R: Rng>(
    count: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<(f64, f64)> {
    let size: f64 = config.usable_size();
    let cluster_count: usize = count / 3;
    if cluster_count == 0 {
        return uniform(count, config, rng);
    }

    let centers: Vec<(f64, f64)> = (0..cluster_count)
        .map(|i| {
            (
                config.margin + size * (i + 1) as f64 / (cluster_count + 1) as f64,
                config.margin + rng.random::<f64>() * size,
            )
        })
        .collect();

    (0..count)
        .map(|i| {
            if i < cluster_count * 2 {
                let (cx, cy) = centers[i % cluster_count];
                (
                    config.clamp(cx + (rng.random::<f64>() - 0.5) * CLUSTER_OFFSET),
                    config.clamp(cy + (rng.random::<f64>() - 0.5) * CLUSTER_OFFSET),
                )
            } else {
                random_point(config, rng)
            }
        })
        .collect()
}

/// Nodes spread over the four quadrants around the center, in turn.
fn asymmetric<R: Rng>(
    count: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<(f64, f64)> {
    const QUADRANTS: [(f64, f64); 4] = [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)];
    let center: f64 = config.canvas_size / 2.0;
    let max_radius: f64 = config.usable_size() * 0.4;

    (0..count)
        .map(|i| {
            let (qx, qy) = QUADRANTS[i % QUADRANTS.len()];
            let r: f64 = rng.random::<f64>() * max_radius + max_radius * 0.2;
            let angle: f64 = rng.random::<f64>() * PI / 2.0;
            (center + qx * r * angle.cos(), center + qy * r * angle.sin())
        })
        .collect()
}

/// Golden-angle spiral for one node out of three, a diagonal for the next one, and a random
/// position for the last one.
fn spiral_hybrid<R: Rng>(
    count: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<(f64, f64)> {
    let center: f64 = config.canvas_size / 2.0;
    let size: f64 = config.usable_size();

    (0..count)
        .map(|i| match i % 3 {
            0 => {
                let angle: f64 = (i as f64 * GOLDEN_ANGLE_DEG).to_radians();
                let r: f64 = (i as f64).sqrt() * size * 0.15;
                (center + r * angle.cos(), center + r * angle.sin())
            }
            1 => {
                let d: f64 = config.margin + i as f64 * size / count as f64;
                (d, d)
            }
            _ => random_point(config, rng),
        })
        .collect()
}

/// Grid of sectors, one node per sector at a random position inside the sector.
fn sectors<R: Rng>(count: usize, config: &GeneratorConfig, rng: &mut R) -> Vec<(f64, f64)> {
    let sectors: usize = ((count as f64).sqrt().ceil() as usize).max(1);
    let sector_size: f64 = config.usable_size() / sectors as f64;

    (0..count)
        .map(|i| {
            let sx: usize = i % sectors;
            let sy: usize = i / sectors;
            (
                config.margin + sx as f64 * sector_size + rng.random::<f64>() * sector_size,
                config.margin + sy as f64 * sector_size + rng.random::<f64>() * sector_size,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const ALL: [Pattern; 9] = [
        Pattern::SimpleRandom,
        Pattern::SimpleCircular,
        Pattern::SimpleScattered,
        Pattern::Scattered,
        Pattern::Asymmetric,
        Pattern::Clustered,
        Pattern::ComplexRandom,
        Pattern::MultiCluster,
        Pattern::Dynamic,
    ];

    #[test]
    fn positions_stay_in_canvas() {
        let config = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        for pattern in ALL {
            for count in [6, 17, 40] {
                let nodes = pattern.place(count, &config, &mut rng);
                assert_eq!(nodes.len(), count, "{pattern}");
                for node in &nodes {
                    assert!(node.x >= 100.0 && node.x <= 1100.0, "{pattern}: {node:?}");
                    assert!(node.y >= 100.0 && node.y <= 1100.0, "{pattern}: {node:?}");
                    assert_eq!(node.x, node.x.round());
                }
            }
        }
    }

    #[test]
    fn ids_follow_generation_order() {
        let config = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let nodes = Pattern::Dynamic.place(4, &config, &mut rng);
        let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["n1", "n2", "n3", "n4"]);
    }

    #[test]
    fn choice_depends_on_tier() {
        let mut rng = StdRng::seed_from_u64(3);
        for tier in [Tier::Beginner, Tier::Intermediate, Tier::Advanced] {
            for _ in 0..20 {
                let pattern = Pattern::choose(tier, &mut rng);
                assert!(Pattern::candidates(tier).contains(&pattern));
            }
        }
    }

    #[test]
    fn circle_is_centered() {
        let config = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let nodes = Pattern::SimpleCircular.place(12, &config, &mut rng);
        for node in nodes {
            let d = ((node.x - 600.0).powi(2) + (node.y - 600.0).powi(2)).sqrt();
            // radius 400 with +/-15% jitter, plus rounding
            assert!((338.0..=462.0).contains(&d), "{d}");
        }
    }

    #[test]
    fn names() {
        assert_eq!(Pattern::MultiCluster.to_string(), "multi-cluster");
        assert_eq!(
            serde_json::to_string(&Pattern::ComplexRandom).unwrap(),
            "\"complex-random\""
        );
        assert_eq!(Pattern::from_repr(0), Some(Pattern::SimpleRandom));
    }

    #[test]
    fn every_pattern_has_a_tier() {
        let all = Pattern::all();
        assert_eq!(all.len(), 9);
        assert_eq!(Pattern::Asymmetric.tier(), Tier::Intermediate);
        assert_eq!(Pattern::Dynamic.tier(), Tier::Advanced);
        for pattern in all {
            assert!(Pattern::candidates(pattern.tier()).contains(&pattern));
        }
    }
}
