/*
level.rs

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

//! Export and import levels.
//!
//! The saved object is a serialization of the [`LevelData`] object in JSON format by using
//! [`serde`]. The node list comes first, followed by the edge list, both in their original
//! order.
//! Only the level is saved, never the player's progress.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::generator::level::LevelData;

/// Object to save and restore levels in a directory.
pub struct SaverLevel {
    /// Absolute path to the directory where the levels are stored.
    data_dir: PathBuf,
}

impl SaverLevel {
    /// Create a [`SaverLevel`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the levels must be saved.
    pub fn new(data_dir: PathBuf) -> Self {
        debug!("Level directory: {data_dir:?}");
        Self { data_dir }
    }

    /// Return the path of the file for the given level number.
    pub fn level_file(&self, level_number: u32) -> PathBuf {
        self.data_dir.join(format!("level-{level_number}.json"))
    }

    /// Retrieve the level with the given number.
    ///
    /// Return the [`LevelData`] object or None if the level has not been saved.
    pub fn get_level(&self, level_number: u32) -> Result<Option<LevelData>, Box<dyn Error>> {
        let path: PathBuf = self.level_file(level_number);
        match read_level(&path) {
            Ok(level) => Ok(Some(level)),
            Err(error) => {
                let not_found: bool = error
                    .downcast_ref::<std::io::Error>()
                    .is_some_and(|e| e.kind() == ErrorKind::NotFound);
                if not_found { Ok(None) } else { Err(error) }
            }
        }
    }

    /// Save the provided [`LevelData`] object and return the path of the file.
    pub fn save_level(
        &self,
        level_number: u32,
        level: &LevelData,
    ) -> Result<PathBuf, Box<dyn Error>> {
        let path: PathBuf = self.level_file(level_number);
        write_level(&path, level)?;
        Ok(path)
    }
}

/// Read and verify a level file.
///
/// # Errors
///
/// Return the I/O error, the JSON parsing error, or a
/// [`crate::error::GameError::MalformedLevelData`] error if the level structure is wrong.
pub fn read_level(path: &Path) -> Result<LevelData, Box<dyn Error>> {
    let file: File = File::open(path)?;
    let reader: BufReader<File> = BufReader::new(file);
    let level: LevelData = serde_json::from_reader(reader)?;
    level.validate()?;
    debug!(
        "Level read from {path:?}: {} nodes, {} edges",
        level.nodes.len(),
        level.edges.len()
    );
    Ok(level)
}

/// Write a level file.
pub fn write_level(path: &Path, level: &LevelData) -> Result<(), Box<dyn Error>> {
    let file: File = File::create(path)?;
    let mut writer: BufWriter<File> = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, level)?;
    writer.flush()?;
    debug!("Level written to {path:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::generator::level::{Edge, Node};

    fn level() -> LevelData {
        LevelData::new(
            vec![Node::new("n1", 100.0, 200.0), Node::new("n2", 300.0, 400.0)],
            vec![Edge::new("n1", "n2")],
        )
    }

    #[test]
    fn save_and_get() {
        let dir = tempfile::tempdir().unwrap();
        let saver = SaverLevel::new(dir.path().to_path_buf());

        assert!(saver.get_level(4).unwrap().is_none());

        let path = saver.save_level(4, &level()).unwrap();
        assert!(path.ends_with("level-4.json"));
        assert_eq!(saver.get_level(4).unwrap(), Some(level()));
    }

    #[test]
    fn malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"nodes": [{"id": "n1", "x": 1, "y": 1}], "edges": [{"from": "n1", "to": "n1"}]}"#,
        )
        .unwrap();

        let error = read_level(&path).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<GameError>(),
            Some(GameError::MalformedLevelData(_))
        ));
    }
}
