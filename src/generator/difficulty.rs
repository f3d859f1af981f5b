/*
difficulty.rs

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

//! Derive the level parameters from the level number.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use crate::config::GeneratorConfig;

/// Difficulty tier. The tier selects the candidate node placement patterns.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

impl Tier {
    /// Return the tier of the given level.
    pub fn for_level(level_number: u32) -> Self {
        match level_number {
            0..=3 => Tier::Beginner,
            4..=8 => Tier::Intermediate,
            _ => Tier::Advanced,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Tier::Beginner => write!(f, "beginner"),
            Tier::Intermediate => write!(f, "intermediate"),
            Tier::Advanced => write!(f, "advanced"),
        }
    }
}

/// Parameters of a level.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct LevelConfig {
    /// Level number, after clamping.
    pub level_number: u32,

    /// Number of nodes to place.
    pub node_count: usize,

    /// Target minimum degree for each node.
    pub min_edges_per_node: usize,

    /// Maximum degree for each node.
    pub max_edges_per_node: usize,

    /// Difficulty tier.
    pub tier: Tier,
}

/// Keep the level number in the `[1, max_levels]` range.
pub fn clamp_level(level_number: u32, config: &GeneratorConfig) -> u32 {
    let clamped: u32 = level_number.clamp(1, config.max_levels.max(1));
    if clamped != level_number {
        warn!(
            "Level {level_number} is out of the 1-{} range: using level {clamped}",
            config.max_levels
        );
    }
    clamped
}

impl LevelConfig {
    /// Compute the parameters of the given level.
    ///
    /// The node count grows linearly from `min_nodes` (first level) to `max_nodes` (last level).
    /// The degree bounds increase by one every `edges_min_level_step` and `edges_max_level_step`
    /// levels, up to their cap.
    pub fn for_level(level_number: u32, config: &GeneratorConfig) -> Self {
        let n: u32 = clamp_level(level_number, config);

        let span: f64 = (config.max_levels.max(2) - 1) as f64;
        let node_count: usize = (config.min_nodes as f64
            + config.max_nodes.saturating_sub(config.min_nodes) as f64 * (n - 1) as f64 / span)
            .round() as usize;

        let min_edges_per_node: usize = (config.base_min_edges
            + n.checked_div(config.edges_min_level_step).unwrap_or(0) as usize)
            .min(config.max_min_edges);
        let max_edges_per_node: usize = (config.base_max_edges
            + n.checked_div(config.edges_max_level_step).unwrap_or(0) as usize)
            .min(config.max_max_edges);

        Self {
            level_number: n,
            node_count: node_count.max(config.min_nodes),
            min_edges_per_node,
            max_edges_per_node: max_edges_per_node.max(min_edges_per_node),
            tier: Tier::for_level(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_levels() {
        let config = GeneratorConfig::default();

        let first = LevelConfig::for_level(1, &config);
        assert_eq!(first.node_count, 6);
        assert_eq!(first.min_edges_per_node, 2);
        assert_eq!(first.max_edges_per_node, 3);
        assert_eq!(first.tier, Tier::Beginner);

        let last = LevelConfig::for_level(100, &config);
        assert_eq!(last.node_count, 40);
        assert_eq!(last.min_edges_per_node, 4);
        assert_eq!(last.max_edges_per_node, 7);
        assert_eq!(last.tier, Tier::Advanced);
    }

    #[test]
    fn steps() {
        let config = GeneratorConfig::default();
        assert_eq!(LevelConfig::for_level(24, &config).min_edges_per_node, 2);
        assert_eq!(LevelConfig::for_level(25, &config).min_edges_per_node, 3);
        assert_eq!(LevelConfig::for_level(19, &config).max_edges_per_node, 3);
        assert_eq!(LevelConfig::for_level(20, &config).max_edges_per_node, 4);
        assert_eq!(LevelConfig::for_level(50, &config).node_count, 23);
    }

    #[test]
    fn out_of_range_levels_are_clamped() {
        let config = GeneratorConfig::default();
        assert_eq!(
            LevelConfig::for_level(0, &config),
            LevelConfig::for_level(1, &config)
        );
        assert_eq!(
            LevelConfig::for_level(5000, &config),
            LevelConfig::for_level(100, &config)
        );
    }

    #[test]
    fn monotonic() {
        let config = GeneratorConfig::default();
        let mut previous = LevelConfig::for_level(1, &config);
        for n in 2..=config.max_levels {
            let current = LevelConfig::for_level(n, &config);
            assert!(current.node_count >= previous.node_count);
            assert!(current.min_edges_per_node >= previous.min_edges_per_node);
            assert!(current.max_edges_per_node >= previous.max_edges_per_node);
            assert!(current.min_edges_per_node <= current.max_edges_per_node);
            previous = current;
        }
    }

    #[test]
    fn tiers() {
        assert_eq!(Tier::for_level(3), Tier::Beginner);
        assert_eq!(Tier::for_level(4), Tier::Intermediate);
        assert_eq!(Tier::for_level(8), Tier::Intermediate);
        assert_eq!(Tier::for_level(9), Tier::Advanced);
        assert_eq!(Tier::from_repr(1), Some(Tier::Intermediate));
    }

    #[test]
    fn zero_level_step_keeps_the_base_degrees() {
        let config = GeneratorConfig {
            edges_min_level_step: 0,
            edges_max_level_step: 0,
            ..Default::default()
        };
        let c = LevelConfig::for_level(60, &config);
        assert_eq!((c.min_edges_per_node, c.max_edges_per_node), (2, 3));
    }
}
