/*
stopwatch.rs

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

//! Measure how long the player takes to solve a level.
//!
//! The stopwatch observes the [`GameStatus`] transitions: it starts with the first colored node
//! and freezes when the level is solved for the first time.
//! It never gates the game.

use chrono::{DateTime, Local};
use log::debug;
use std::time::{Duration, Instant};

use crate::game::GameStatus;

/// Stopwatch for the level in progress.
#[derive(Debug, Default, Clone)]
pub struct Stopwatch {
    /// Time when the player colored the first node.
    start_time: Option<Instant>,

    /// Duration when the level got solved.
    final_duration: Option<Duration>,

    /// Wall-clock time when the level got solved.
    finished_at: Option<DateTime<Local>>,
}

impl Stopwatch {
    /// Create a [`Stopwatch`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the stopwatch, when a new level is loaded.
    pub fn reset(&mut self) {
        self.start_time = None;
        self.final_duration = None;
        self.finished_at = None;
    }

    /// Process the status of the level after a player action.
    pub fn observe(&mut self, status: GameStatus) {
        match status {
            GameStatus::Unstarted => self.reset(),
            GameStatus::InProgress => self.start(),
            GameStatus::Complete => {
                // Solving the level with the very first action also starts the stopwatch
                self.start();
                self.stop();
            }
        }
    }

    /// Start the stopwatch, if not already started.
    fn start(&mut self) {
        if self.start_time.is_none() {
            debug!("Stopwatch started");
            self.start_time = Some(Instant::now());
        }
    }

    /// Freeze the stopwatch, if not already frozen.
    fn stop(&mut self) {
        if self.final_duration.is_some() {
            return;
        }
        if let Some(start) = self.start_time {
            let d: Duration = start.elapsed();
            debug!("Stopwatch stopped: {}", format_elapsed(d));
            self.final_duration = Some(d);
            self.finished_at = Some(Local::now());
        }
    }

    /// Whether the stopwatch is counting.
    pub fn is_running(&self) -> bool {
        self.start_time.is_some() && self.final_duration.is_none()
    }

    /// Whether the stopwatch has been frozen.
    pub fn is_stopped(&self) -> bool {
        self.final_duration.is_some()
    }

    /// Return the elapsed time, or the final time when the level is solved.
    pub fn elapsed(&self) -> Duration {
        match (self.final_duration, self.start_time) {
            (Some(d), _) => d,
            (None, Some(start)) => start.elapsed(),
            (None, None) => Duration::ZERO,
        }
    }

    /// Return the time when the level was solved.
    pub fn finished_at(&self) -> Option<DateTime<Local>> {
        self.finished_at
    }
}

/// Format a duration with hundredths of a second: `s.cc`, `m:ss.cc`, or `h:mm:ss.cc`.
pub fn format_elapsed(duration: Duration) -> String {
    let millis: u128 = duration.as_millis();
    let hours: u128 = millis / 3_600_000;
    let minutes: u128 = (millis % 3_600_000) / 60_000;
    let seconds: u128 = (millis % 60_000) / 1000;
    let hundredths: u128 = (millis % 1000) / 10;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}.{hundredths:02}")
    } else if minutes > 0 {
        format!("{minutes}:{seconds:02}.{hundredths:02}")
    } else {
        format!("{seconds}.{hundredths:02}")
    }
}
