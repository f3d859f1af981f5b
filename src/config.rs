/*
config.rs

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

//! Generator configuration.
//!
//! [`GeneratorConfig::default`] is the canonical configuration.
//! A JSON file can override some or all of the values (see [`GeneratorConfig::from_file`]).
//!
//! ```json
//! { "canvas_size": 800, "margin": 60, "max_levels": 50 }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::GameError;

pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 The Colorgraph Authors

License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Parameters that drive level generation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Width and height of the square game area.
    pub canvas_size: f64,

    /// Padding on each side of the game area. Nodes always stay within
    /// `[margin, canvas_size - margin]`.
    pub margin: f64,

    /// Number of nodes for the first level.
    pub min_nodes: usize,

    /// Number of nodes for the last level.
    pub max_nodes: usize,

    /// Minimum distance between two node centers.
    pub min_node_distance: f64,

    /// Number of passes for pushing overlapping nodes apart.
    pub node_position_max_attempts: usize,

    /// Minimum number of edges per node for the first levels.
    pub base_min_edges: usize,

    /// Maximum number of edges per node for the first levels.
    pub base_max_edges: usize,

    /// Cap for the minimum number of edges per node.
    pub max_min_edges: usize,

    /// Cap for the maximum number of edges per node.
    pub max_max_edges: usize,

    /// The minimum number of edges per node increases every `edges_min_level_step` levels.
    pub edges_min_level_step: u32,

    /// The maximum number of edges per node increases every `edges_max_level_step` levels.
    pub edges_max_level_step: u32,

    /// Number of levels in the game.
    pub max_levels: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            canvas_size: 1200.0,
            margin: 100.0,
            min_nodes: 6,
            max_nodes: 40,
            min_node_distance: 100.0,
            node_position_max_attempts: 150,
            base_min_edges: 2,
            base_max_edges: 3,
            max_min_edges: 4,
            max_max_edges: 7,
            edges_min_level_step: 25,
            edges_max_level_step: 20,
            max_levels: 100,
        }
    }
}

impl GeneratorConfig {
    /// Load the configuration from a JSON file. Missing fields take their default value.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        debug!("Loading generator configuration from {path:?}");
        let reader: BufReader<File> = BufReader::new(File::open(path)?);
        let config: GeneratorConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Verify that the configuration can produce levels.
    ///
    /// # Errors
    ///
    /// Return [`GameError::Config`] when the usable area is empty, when a minimum exceeds its
    /// maximum, or when a level step is zero.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.margin < 0.0 || self.usable_size() <= 0.0 {
            return Err(GameError::Config(format!(
                "margin {} leaves no room in a {} canvas",
                self.margin, self.canvas_size
            )));
        }
        if self.min_nodes == 0 || self.min_nodes > self.max_nodes {
            return Err(GameError::Config(format!(
                "node count range {}-{} is not valid",
                self.min_nodes, self.max_nodes
            )));
        }
        if self.base_min_edges > self.base_max_edges || self.max_min_edges > self.max_max_edges {
            return Err(GameError::Config(String::from(
                "minimum edges per node cannot exceed maximum edges per node",
            )));
        }
        if self.edges_min_level_step == 0 || self.edges_max_level_step == 0 {
            return Err(GameError::Config(String::from("level steps must be positive")));
        }
        if self.max_levels == 0 {
            return Err(GameError::Config(String::from("at least one level is required")));
        }
        if self.min_node_distance < 0.0 {
            return Err(GameError::Config(String::from(
                "minimum node distance cannot be negative",
            )));
        }
        Ok(())
    }

    /// Width (and height) of the area where nodes are placed.
    pub fn usable_size(&self) -> f64 {
        self.canvas_size - 2.0 * self.margin
    }

    /// Smallest coordinate a node can have.
    pub fn min_coordinate(&self) -> f64 {
        self.margin
    }

    /// Largest coordinate a node can have.
    pub fn max_coordinate(&self) -> f64 {
        self.canvas_size - self.margin
    }

    /// Keep a coordinate inside the padded canvas.
    pub fn clamp(&self, v: f64) -> f64 {
        v.max(self.min_coordinate()).min(self.max_coordinate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn clamp_with_an_empty_area() {
        let config = GeneratorConfig {
            margin: 700.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.clamp(600.0), 500.0);
    }

    #[test]
    fn notice_names_the_project() {
        assert!(COPYRIGHT_NOTICE.starts_with("Copyright 2025 The Colorgraph Authors"));
    }

    #[test]
    fn default_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.usable_size(), 1000.0);
        assert_eq!(config.clamp(20.0), 100.0);
        assert_eq!(config.clamp(1150.0), 1100.0);
        assert_eq!(config.clamp(500.0), 500.0);
    }

    #[test]
    fn invalid_configurations() {
        let config = GeneratorConfig {
            margin: 600.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GameError::Config(_))));

        let config = GeneratorConfig {
            min_nodes: 50,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            edges_max_level_step: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "canvas_size": 800, "margin": 50, "max_levels": 30 }}"#).unwrap();

        let config = GeneratorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.canvas_size, 800.0);
        assert_eq!(config.margin, 50.0);
        assert_eq!(config.max_levels, 30);
        assert_eq!(config.min_nodes, 6);
        assert_eq!(config.max_max_edges, 7);
    }

    #[test]
    fn rejected_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "min_nodes": 0 }}"#).unwrap();
        assert!(GeneratorConfig::from_file(file.path()).is_err());
    }
}
