/*
error.rs

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

//! Errors reported by the puzzle engine, the level parser, and the configuration loader.
//!
//! Generating a level has no error path: out of range level numbers are clamped.

use thiserror::Error;

/// Type of errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The level argument is not a level number at all.
    ///
    /// Numeric values outside the supported range are clamped instead.
    #[error("Invalid level number: {0}")]
    InvalidLevelNumber(String),

    /// The node is not part of the loaded level.
    /// The operation is rejected and the game state is not modified.
    #[error("Unknown node: {0}")]
    UnknownNodeReference(String),

    /// The level is structurally wrong (edge to a missing node, duplicated node ID...).
    /// The level is not loaded and the previous level stays active.
    #[error("Malformed level: {0}")]
    MalformedLevelData(String),

    /// The generator configuration is not usable.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Parse a level number provided as a string (command line, level selector value).
///
/// Numbers below 1 give the first level. The upper bound is clamped by the generator.
///
/// # Errors
///
/// Return [`GameError::InvalidLevelNumber`] if the value is not an integer.
pub fn parse_level_number(value: &str) -> Result<u32, GameError> {
    let n: i64 = value
        .trim()
        .parse::<i64>()
        .map_err(|_| GameError::InvalidLevelNumber(value.to_string()))?;
    Ok(u32::try_from(n.max(1)).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_number_parsing() {
        assert_eq!(parse_level_number(" 12 "), Ok(12));
        assert_eq!(parse_level_number("0"), Ok(1));
        assert_eq!(parse_level_number("-3"), Ok(1));
        assert_eq!(parse_level_number("99999999999"), Ok(u32::MAX));
        assert_eq!(
            parse_level_number("twelve"),
            Err(GameError::InvalidLevelNumber(String::from("twelve")))
        );
        assert!(parse_level_number("2.5").is_err());
    }

    #[test]
    fn messages() {
        let e = GameError::UnknownNodeReference(String::from("n42"));
        assert_eq!(e.to_string(), "Unknown node: n42");
    }
}
