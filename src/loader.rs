/*
loader.rs

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

//! Provide the levels of a session.
//!
//! A level is generated the first time it is requested, and then kept for the rest of the
//! session: generating it again would give the player a different graph.

use log::{debug, warn};
use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::generator::difficulty::clamp_level;
use crate::generator::level::LevelData;
use crate::generator::random_level::LevelGenerator;

/// Level cache and level index provider.
pub struct LevelLoader {
    /// Generator for the levels not yet in the cache.
    generator: LevelGenerator,

    /// Generated levels, indexed by level number.
    levels: HashMap<u32, LevelData>,
}

impl LevelLoader {
    /// Create a [`LevelLoader`] object.
    pub fn new(generator: LevelGenerator) -> Self {
        Self {
            generator,
            levels: HashMap::new(),
        }
    }

    /// Return the level numbers that the player can choose from.
    pub fn level_numbers(&self) -> RangeInclusive<u32> {
        1..=self.generator.config().max_levels
    }

    /// Return the generator.
    pub fn generator(&self) -> &LevelGenerator {
        &self.generator
    }

    /// Return the level, generating it on the first request.
    pub fn load(&mut self, level_number: u32) -> &LevelData {
        let n: u32 = clamp_level(level_number, self.generator.config());
        let generator: &mut LevelGenerator = &mut self.generator;
        self.levels.entry(n).or_insert_with(|| {
            debug!("Generating level {n}");
            generator.generate(n)
        })
    }

    /// Deferred version of [`LevelLoader::load`].
    ///
    /// The level is available from the returned channel, so that the caller can chain the
    /// loading after other asynchronous setup.
    pub fn load_deferred(&mut self, level_number: u32) -> async_channel::Receiver<LevelData> {
        let (sender, receiver) = async_channel::bounded::<LevelData>(1);
        let level: LevelData = self.load(level_number).clone();
        if let Err(e) = sender.send_blocking(level) {
            warn!("Cannot deliver level {level_number}: {e}");
        }
        receiver
    }

    /// Whether the level has already been generated.
    /// Out of range level numbers share the cache entry of the clamped level.
    pub fn is_cached(&self, level_number: u32) -> bool {
        let n: u32 = clamp_level(level_number, self.generator.config());
        self.levels.contains_key(&n)
    }

    /// Number of generated levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether no level has been generated yet.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;

    fn loader() -> LevelLoader {
        LevelLoader::new(LevelGenerator::with_seed(GeneratorConfig::default(), 77).unwrap())
    }

    #[test]
    fn levels_are_cached() {
        let mut loader = loader();
        assert!(loader.is_empty());

        let first: LevelData = loader.load(5).clone();
        assert!(loader.is_cached(5));
        assert_eq!(loader.load(5), &first);
        assert_eq!(loader.len(), 1);
    }

    #[test]
    fn level_index() {
        let loader = loader();
        let numbers: Vec<u32> = loader.level_numbers().collect();
        assert_eq!(numbers.len(), 100);
        assert_eq!(numbers[0], 1);
        assert_eq!(numbers[99], 100);
    }

    #[test]
    fn out_of_range_shares_the_clamped_level() {
        let mut loader = loader();
        let last: LevelData = loader.load(100).clone();
        assert!(loader.is_cached(250));
        assert_eq!(loader.load(250), &last);
        assert_eq!(loader.len(), 1);

        assert!(!loader.is_cached(0));
        loader.load(0);
        assert!(loader.is_cached(1));
    }

    #[test]
    fn deferred() {
        let mut loader = loader();
        let receiver = loader.load_deferred(3);
        let level = receiver.recv_blocking().unwrap();
        assert_eq!(loader.load(3), &level);
    }
}
