//! Mission event recorder.
//!
//! Append-only log of domain events, timestamped relative to the start of
//! the recording session. `Idle -> Recording -> Idle`; stopping keeps the
//! buffer so it can still be saved.

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::{RecorderError, ReplayError};
use crate::replay::{self, ReplayFile};

/// Key-value payload attached to a replay event.
pub type EventData = Map<String, Value>;

/// A timestamped, typed record of a domain occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayEvent {
    /// Seconds since the recording started.
    pub timestamp: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub data: EventData,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum RecorderState {
    #[default]
    Idle,
    Recording,
}

/// Records events during a session and persists them as a replay file.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    state: RecorderState,
    started_at: Option<Instant>,
    events: Vec<ReplayEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_recording(&self) -> bool {
        self.state == RecorderState::Recording
    }

    /// Events captured in the current (or last) session.
    pub fn events(&self) -> &[ReplayEvent] {
        &self.events
    }

    /// Clear the buffer and begin a new session at `now`.
    pub fn start_recording(&mut self, now: Instant) -> Result<(), RecorderError> {
        if self.is_recording() {
            warn!("Mission recording already active, start ignored");
            return Err(RecorderError::AlreadyRecording);
        }
        self.events.clear();
        self.started_at = Some(now);
        self.state = RecorderState::Recording;
        info!("Mission recording started");
        Ok(())
    }

    /// Append an event stamped `now - start`. Returns false when not recording.
    ///
    /// Timestamps never decrease within a session, even if `now` is earlier
    /// than a previously recorded instant.
    pub fn record_event(&mut self, now: Instant, kind: &str, data: EventData) -> bool {
        let Some(started_at) = self.started_at.filter(|_| self.is_recording()) else {
            return false;
        };
        let elapsed = now.saturating_duration_since(started_at).as_secs_f64();
        let floor = self.events.last().map_or(0.0, |e| e.timestamp);
        self.events.push(ReplayEvent {
            timestamp: elapsed.max(floor),
            kind: kind.to_string(),
            data,
        });
        debug!("Recorded {kind} event at {:.3}s", elapsed.max(floor));
        true
    }

    /// End the session. Returns the number of events captured.
    pub fn stop_recording(&mut self) -> Result<usize, RecorderError> {
        if !self.is_recording() {
            return Err(RecorderError::NotRecording);
        }
        self.state = RecorderState::Idle;
        info!(
            "Mission recording stopped - {} events captured",
            self.events.len()
        );
        Ok(self.events.len())
    }

    /// Write the captured events to `path`, or to a timestamped file under
    /// `default_dir` when no path is given. Returns the path written.
    pub fn save_replay(
        &self,
        path: Option<&Path>,
        default_dir: &Path,
    ) -> Result<PathBuf, ReplayError> {
        let file = ReplayFile::from_events(self.events.clone())?;
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => replay::default_replay_path(default_dir),
        };
        file.write_to(&path)?;
        info!("Replay saved: {}", path.display());
        Ok(path)
    }
}
