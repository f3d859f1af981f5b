/*
random_level.rs

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

//! Generate a random level.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

use super::difficulty::LevelConfig;
use super::edges;
use super::level::{LevelData, Node};
use super::overlap;
use super::patterns::Pattern;
use crate::config::GeneratorConfig;
use crate::error::GameError;

/// Details about the last generated level.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Parameters derived from the level number.
    pub level_config: LevelConfig,

    /// Node placement pattern.
    pub pattern: Pattern,

    /// Passes used to push overlapping nodes apart.
    pub separation_passes: usize,

    /// Node pairs still closer than the minimum distance.
    pub residual_overlaps: usize,

    /// Identifiers of the nodes below the minimum degree (no eligible partner was left).
    pub below_minimum: Vec<String>,

    /// Duration in seconds it took to generate the level.
    pub duration: f32,
}

/// [`LevelGenerator`] object.
pub struct LevelGenerator {
    /// Generation parameters.
    config: GeneratorConfig,

    /// Random number generator. Seed it to reproduce the same levels.
    rng: StdRng,

    /// Report for the last generated level.
    last_report: Option<GenerationReport>,
}

impl Default for LevelGenerator {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: StdRng::from_os_rng(),
            last_report: None,
        }
    }
}

impl LevelGenerator {
    /// Create the object with a random seed.
    ///
    /// # Errors
    ///
    /// Return [`GameError::Config`] if the configuration is not valid.
    pub fn new(config: GeneratorConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::from_os_rng(),
            last_report: None,
        })
    }

    /// Create the object with the given seed. Two generators with the same seed and
    /// configuration produce the same sequence of levels.
    ///
    /// # Errors
    ///
    /// Return [`GameError::Config`] if the configuration is not valid.
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            last_report: None,
        })
    }

    /// Return the generation parameters.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Return the report for the last generated level.
    pub fn last_report(&self) -> Option<&GenerationReport> {
        self.last_report.as_ref()
    }

    /// Generate and return a random level.
    ///
    /// Level numbers outside the `[1, max_levels]` range are clamped.
    /// Generation never fails. The minimum degree is a best effort.
    pub fn generate(&mut self, level_number: u32) -> LevelData {
        let start: Instant = Instant::now();
        let level_config: LevelConfig = LevelConfig::for_level(level_number, &self.config);
        let pattern: Pattern = Pattern::choose(level_config.tier, &mut self.rng);

        debug!(
            "Level {}: {} nodes, degree {}-{}, {} pattern",
            level_config.level_number,
            level_config.node_count,
            level_config.min_edges_per_node,
            level_config.max_edges_per_node,
            pattern
        );

        let mut nodes: Vec<Node> =
            pattern.place(level_config.node_count, &self.config, &mut self.rng);
        let separation: overlap::Separation = overlap::separate(&mut nodes, &self.config);

        let edges: edges::Edges = edges::generate(&nodes, &level_config, &mut self.rng);
        let below_minimum: Vec<String> = edges
            .below_minimum(level_config.min_edges_per_node)
            .into_iter()
            .map(|i| nodes[i].id.clone())
            .collect();
        let edge_list = edges.to_edges(&nodes);

        self.last_report = Some(GenerationReport {
            level_config,
            pattern,
            separation_passes: separation.passes,
            residual_overlaps: separation.residual,
            below_minimum,
            duration: start.elapsed().as_secs_f32(),
        });

        LevelData::new(nodes, edge_list)
    }
}
