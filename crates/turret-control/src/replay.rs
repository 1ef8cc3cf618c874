//! Replay file format and playback cursor.
//!
//! ```json
//! { "version": "1.0", "duration": 1.2,
//!   "events": [ { "timestamp": 0.1, "type": "fire", "data": { ... } } ] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use turret_core::constants::REPLAY_FORMAT_VERSION;

use crate::error::ReplayError;
use crate::recorder::ReplayEvent;

/// On-disk replay document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayFile {
    pub version: String,
    /// Timestamp of the last event, in seconds.
    pub duration: f64,
    pub events: Vec<ReplayEvent>,
}

impl ReplayFile {
    /// Build a replay from captured events. Fails on an empty session.
    pub fn from_events(events: Vec<ReplayEvent>) -> Result<Self, ReplayError> {
        let duration = events
            .last()
            .map(|e| e.timestamp)
            .ok_or(ReplayError::EmptyRecording)?;
        Ok(Self {
            version: REPLAY_FORMAT_VERSION.to_string(),
            duration,
            events,
        })
    }

    /// Serialize as pretty JSON, creating parent directories as needed.
    pub fn write_to(&self, path: &Path) -> Result<(), ReplayError> {
        let io_err = |source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(io_err)
    }

    /// Read and version-check a replay file. Unknown versions fail closed.
    pub fn read_from(path: &Path) -> Result<Self, ReplayError> {
        let json = fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let malformed = |source| ReplayError::Malformed {
            path: path.to_path_buf(),
            source,
        };
        let value: Value = serde_json::from_str(&json).map_err(malformed)?;
        match value.get("version").and_then(Value::as_str) {
            Some(REPLAY_FORMAT_VERSION) => {}
            other => {
                return Err(ReplayError::UnsupportedVersion {
                    found: other.unwrap_or("<missing>").to_string(),
                    expected: REPLAY_FORMAT_VERSION,
                })
            }
        }
        serde_json::from_value(value).map_err(malformed)
    }
}

/// `<dir>/replay_YYYYMMDD_HHMMSS.json` for the current local time.
pub fn default_replay_path(dir: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("replay_{stamp}.json"))
}

/// Monotonic cursor over a loaded replay.
///
/// The caller owns the playback clock; the player only tracks which events
/// have already been handed out.
#[derive(Debug, Clone, Default)]
pub struct ReplayPlayer {
    replay: Option<ReplayFile>,
    cursor: usize,
}

impl ReplayPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a replay from disk and rewind to the start.
    pub fn load(&mut self, path: &Path) -> Result<(), ReplayError> {
        let replay = ReplayFile::read_from(path)?;
        info!(
            "Replay loaded: {} ({:.1}s, {} events)",
            path.display(),
            replay.duration,
            replay.events.len()
        );
        self.open(replay);
        Ok(())
    }

    /// Play an in-memory replay from the start.
    pub fn open(&mut self, replay: ReplayFile) {
        self.replay = Some(replay);
        self.cursor = 0;
    }

    /// All not-yet-returned events with `timestamp <= current_time`, in order.
    /// `None` when nothing is due.
    pub fn next_events(&mut self, current_time: f64) -> Option<&[ReplayEvent]> {
        let replay = self.replay.as_ref()?;
        let start = self.cursor;
        let due = replay.events[start..]
            .iter()
            .take_while(|e| e.timestamp <= current_time)
            .count();
        if due == 0 {
            return None;
        }
        self.cursor += due;
        Some(&replay.events[start..self.cursor])
    }

    /// True when every event has been returned, or nothing is loaded.
    pub fn is_finished(&self) -> bool {
        self.replay
            .as_ref()
            .map_or(true, |r| self.cursor >= r.events.len())
    }

    /// Rewind the cursor. The playback clock is the caller's to reset.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Duration of the loaded replay, 0 when nothing is loaded.
    pub fn duration(&self) -> f64 {
        self.replay.as_ref().map_or(0.0, |r| r.duration)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.replay.as_ref().map_or(0, |r| r.events.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
