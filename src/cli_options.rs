/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers tuning the level generator.
//! In command-line mode, Colorgraph can list the level parameters, generate levels and export
//! them as JSON files, verify a level file, and replay color moves against a level.
//!
//! # Examples
//!
//! List the levels:
//!
//! ```
//! $ colorgraph --ls
//! Level   1:   6 nodes, 2-3 edges per node, beginner
//! Level   2:   6 nodes, 2-3 edges per node, beginner
//! ...
//! ```
//!
//! Generate five levels, starting at level 20, and save them in the `/tmp/levels` directory:
//!
//! ```
//! $ colorgraph -l 20 -c 5 -o /tmp/levels --seed 42 -s
//! ```
//!
//! Replay some moves:
//!
//! ```
//! $ colorgraph --play /tmp/levels/level-20.json --moves 'n1=#FF0000,n2=#00FF00'
//! n1 = #FF0000: no conflict, in-progress
//! n2 = #00FF00: no conflict, in-progress
//! ```

use clap::Parser;
use log::{debug, info};
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use colorgraph::config::{COPYRIGHT_NOTICE, GeneratorConfig};
use colorgraph::error::parse_level_number;
use colorgraph::game::{ColorOutcome, GameStatus, PuzzleEngine};
use colorgraph::generator::difficulty::{LevelConfig, clamp_level};
use colorgraph::generator::level::{Color, LevelData};
use colorgraph::generator::patterns::Pattern;
use colorgraph::generator::random_level::{GenerationReport, LevelGenerator};
use colorgraph::loader::LevelLoader;
use colorgraph::saver::level::{SaverLevel, read_level};
use colorgraph::stopwatch::{Stopwatch, format_elapsed};

/// Generate and verify Colorgraph levels.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the levels
    #[arg(long, default_value_t = false)]
    ls: bool,

    /// Number of the first level to generate
    #[arg(short, long, value_parser = parse_level_number, allow_negative_numbers = true, group = "generate")]
    level: Option<u32>,

    /// Number of levels to generate
    #[arg(short, long, default_value_t = 1, requires = "generate")]
    count: u32,

    /// Directory where to save the generated levels, instead of printing them
    #[arg(short, long, value_name = "DIR", requires = "generate")]
    output: Option<PathBuf>,

    /// Print some statistics after generating the levels
    #[arg(short, long, default_value_t = false, requires = "generate")]
    summary: bool,

    /// Seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with the generator parameters
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verify a level file
    #[arg(long, value_name = "FILE")]
    check: Option<PathBuf>,

    /// Level file to replay moves against
    #[arg(long, value_name = "FILE")]
    play: Option<PathBuf>,

    /// Comma separated list of moves, such as n1=#FF0000,n2=#00FF00
    #[arg(short, long, value_delimiter = ',', requires = "play")]
    moves: Vec<String>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let config: GeneratorConfig = match &args.config {
        Some(path) => match GeneratorConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Cannot read the configuration from {}: {e}", path.display());
                return 1;
            }
        },
        None => GeneratorConfig::default(),
    };

    if args.ls {
        list_levels(&config);
        return 0;
    }
    if let Some(path) = &args.check {
        return check_level(path);
    }
    if let Some(path) = &args.play {
        return play_level(path, &args.moves);
    }

    let Some(level_number) = args.level else {
        eprintln!("Nothing to do. Use --help to list the options.");
        return 2;
    };

    let generator: LevelGenerator = match match args.seed {
        Some(seed) => LevelGenerator::with_seed(config, seed),
        None => LevelGenerator::new(config),
    } {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };
    generate_levels(generator, level_number, &args)
}

/// Print the parameters of every level.
fn list_levels(config: &GeneratorConfig) {
    for n in 1..=config.max_levels {
        let c: LevelConfig = LevelConfig::for_level(n, config);
        println!(
            "Level {n:>3}: {:>3} nodes, {}-{} edges per node, {}",
            c.node_count, c.min_edges_per_node, c.max_edges_per_node, c.tier
        );
    }
    println!();
    for pattern in Pattern::all() {
        println!("{pattern:>16}: {}", pattern.tier());
    }
}

/// Verify a level file and print the degree of each node.
fn check_level(path: &Path) -> u8 {
    let level: LevelData = match read_level(path) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("{}: {e}", path.display());
            return 1;
        }
    };

    println!(
        "{}: {} nodes, {} edges",
        path.display(),
        level.nodes.len(),
        level.edges.len()
    );
    let mut isolated: usize = 0;
    for node in &level.nodes {
        let degree: usize = level.degree(&node.id);
        if degree == 0 {
            isolated += 1;
        }
        println!("{:>5} ({:>6.1}, {:>6.1}): degree {degree}", node.id, node.x, node.y);
    }
    if isolated > 0 {
        println!("{isolated} isolated node(s)");
    }
    0
}

/// Replay the moves against the level file.
fn play_level(path: &Path, moves: &[String]) -> u8 {
    let level: LevelData = match read_level(path) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("{}: {e}", path.display());
            return 1;
        }
    };

    let mut engine = PuzzleEngine::new();
    if let Err(e) = engine.load(level) {
        eprintln!("{}: {e}", path.display());
        return 1;
    }
    let mut stopwatch = Stopwatch::new();

    for m in moves {
        let Some((id, color)) = m.split_once('=') else {
            eprintln!("Wrong move {m:?}. The expected format is <node>=<color>");
            return 1;
        };
        let (id, color) = (id.trim(), color.trim());

        // Same sequence as a player: select, then color
        engine.select(id);
        let outcome: ColorOutcome = match engine.color_node(id, Color::new(color)) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("{e}");
                return 1;
            }
        };
        engine.clear_selection();
        stopwatch.observe(outcome.status);

        if outcome.conflicts.is_empty() {
            println!("{id} = {color}: no conflict, {}", outcome.status);
        } else {
            let conflicts: Vec<&str> = outcome.conflicts.iter().map(String::as_str).collect();
            println!(
                "{id} = {color}: conflicts with {}, {}",
                conflicts.join(" "),
                outcome.status
            );
        }
    }

    println!(
        "Status: {} ({}/{} nodes colored, {} in conflict)",
        engine.status(),
        engine.colored_count(),
        engine.level().nodes.len(),
        engine.conflicting_nodes().len()
    );
    println!("Time: {}", format_elapsed(stopwatch.elapsed()));
    if let Some(finished_at) = stopwatch.finished_at() {
        println!("Solved at {}", finished_at.format("%Y-%m-%d %H:%M:%S"));
    }
    if engine.status() == GameStatus::Complete { 0 } else { 3 }
}

/// Generate the levels and print them or save them.
fn generate_levels(generator: LevelGenerator, level_number: u32, args: &Args) -> u8 {
    let max_levels: u32 = generator.config().max_levels;
    let first: u32 = clamp_level(level_number, generator.config());
    let last: u32 = first.saturating_add(args.count.max(1) - 1).min(max_levels);
    let saver: Option<SaverLevel> = args.output.clone().map(SaverLevel::new);
    if let Some(dir) = &args.output
        && let Err(e) = std::fs::create_dir_all(dir)
    {
        eprintln!("Cannot create {}: {e}", dir.display());
        return 1;
    }

    let mut loader = LevelLoader::new(generator);
    let mut reports: Vec<GenerationReport> = Vec::new();

    for n in first..=last {
        debug!("Iteration {n}");
        let level: LevelData = loader.load(n).clone();
        if let Some(report) = loader.generator().last_report() {
            reports.push(report.clone());
        }

        match &saver {
            Some(s) => match s.save_level(n, &level) {
                Ok(path) => info!("Level {n} saved in {}", path.display()),
                Err(e) => {
                    eprintln!("Cannot save level {n}: {e}");
                    return 1;
                }
            },
            None => match level.to_json() {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Cannot serialize level {n}: {e}");
                    return 1;
                }
            },
        }
    }

    if args.summary {
        print_summary(&reports);
    }
    0
}

/// Print statistics about the generated levels.
fn print_summary(reports: &[GenerationReport]) {
    if reports.is_empty() {
        return;
    }
    let count: f32 = reports.len() as f32;
    let total: f32 = reports.iter().map(|r| r.duration).sum();
    let max: f32 = reports.iter().map(|r| r.duration).fold(0.0, f32::max);
    let passes: usize = reports.iter().map(|r| r.separation_passes).sum();
    let overlaps: usize = reports.iter().map(|r| r.residual_overlaps).sum();
    let below: usize = reports.iter().map(|r| r.below_minimum.len()).sum();

    let mut patterns: HashMap<String, usize> = HashMap::new();
    for r in reports {
        *patterns.entry(r.pattern.to_string()).or_insert(0) += 1;
    }
    let mut patterns: Vec<(String, usize)> = patterns.into_iter().collect();
    patterns.sort();

    println!(
        "
            levels = {}
        total time = {}s
      average time = {}s
          max time = {}s
   average passes = {}
 residual overlaps = {}
nodes below minimum = {}",
        reports.len(),
        total,
        total / count,
        max,
        passes as f32 / count,
        overlaps,
        below
    );
    for (pattern, n) in patterns {
        println!("{pattern:>18} = {n}");
    }
}
