/*
generator_properties.rs

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

use std::collections::BTreeSet;

use colorgraph::config::GeneratorConfig;
use colorgraph::generator::difficulty::LevelConfig;
use colorgraph::saver::level::SaverLevel;
use colorgraph::{LevelData, LevelGenerator, LevelLoader};
use proptest::prelude::*;

fn edge_set(level: &LevelData) -> BTreeSet<(String, String)> {
    level.edges.iter().map(|e| e.key()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_levels_are_well_formed(level_number in 1u32..=100, seed in any::<u64>()) {
        let config = GeneratorConfig::default();
        let expected = LevelConfig::for_level(level_number, &config);
        let mut generator = LevelGenerator::with_seed(config.clone(), seed).unwrap();
        let level = generator.generate(level_number);

        prop_assert_eq!(level.nodes.len(), expected.node_count);
        prop_assert!(level.validate().is_ok());

        let ids: BTreeSet<&str> = level.nodes.iter().map(|n| n.id.as_str()).collect();
        prop_assert_eq!(ids.len(), level.nodes.len());

        for node in &level.nodes {
            prop_assert!(node.x >= config.min_coordinate() && node.x <= config.max_coordinate());
            prop_assert!(node.y >= config.min_coordinate() && node.y <= config.max_coordinate());
        }

        // No duplicate pairs, in either direction
        prop_assert_eq!(edge_set(&level).len(), level.edges.len());

        let max: usize = expected.max_edges_per_node;
        let min: usize = expected.min_edges_per_node;
        for node in &level.nodes {
            let degree: usize = level.degree(&node.id);
            prop_assert!(degree <= max);

            // A node below the minimum has no eligible partner left
            if degree < min {
                for other in level.nodes.iter().filter(|o| o.id != node.id) {
                    prop_assert!(
                        level.degree(&other.id) >= max || level.has_edge(&node.id, &other.id)
                    );
                }
            }
        }

        let report = generator.last_report().unwrap();
        let below: BTreeSet<&str> = level
            .nodes
            .iter()
            .filter(|n| level.degree(&n.id) < min)
            .map(|n| n.id.as_str())
            .collect();
        let reported: BTreeSet<&str> = report.below_minimum.iter().map(String::as_str).collect();
        prop_assert_eq!(below, reported);
    }
}

#[test]
fn json_round_trip_keeps_the_graph() {
    let mut generator = LevelGenerator::with_seed(GeneratorConfig::default(), 11).unwrap();
    let level = generator.generate(42);

    let parsed = LevelData::from_json(&level.to_json().unwrap()).unwrap();
    assert_eq!(parsed.nodes, level.nodes);
    assert_eq!(edge_set(&parsed), edge_set(&level));
}

#[test]
fn saved_levels_match_the_session_levels() {
    let dir = tempfile::tempdir().unwrap();
    let saver = SaverLevel::new(dir.path().to_path_buf());
    let mut loader = LevelLoader::new(LevelGenerator::with_seed(GeneratorConfig::default(), 8).unwrap());

    for n in loader.level_numbers().take(5) {
        let level = loader.load(n).clone();
        saver.save_level(n, &level).unwrap();
    }
    for n in 1..=5 {
        let saved = saver.get_level(n).unwrap().unwrap();
        assert_eq!(&saved, loader.load(n));
    }
    assert!(saver.get_level(6).unwrap().is_none());
}

#[test]
fn difficulty_grows_with_the_level() {
    let config = GeneratorConfig::default();
    let first = LevelConfig::for_level(1, &config);
    let last = LevelConfig::for_level(100, &config);

    assert_eq!(first.node_count, 6);
    assert_eq!(last.node_count, 40);
    assert_eq!((first.min_edges_per_node, first.max_edges_per_node), (2, 3));
    assert_eq!((last.min_edges_per_node, last.max_edges_per_node), (4, 7));
}

#[test]
fn custom_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"min_nodes": 4, "max_nodes": 10, "max_levels": 10}"#).unwrap();

    let config = GeneratorConfig::from_file(&path).unwrap();
    assert_eq!(config.canvas_size, 1200.0);

    let mut generator = LevelGenerator::with_seed(config, 1).unwrap();
    assert_eq!(generator.generate(10).nodes.len(), 10);
    assert_eq!(generator.generate(99).nodes.len(), 10);
}
