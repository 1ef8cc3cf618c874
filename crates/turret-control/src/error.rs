//! Recoverable error types for recording, replay files and configuration.
//!
//! Fire denials are not errors; see `turret_core::verdict::FireVerdict`.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while saving or loading a replay file.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// Nothing was captured during the session.
    #[error("nothing to save: no events were recorded")]
    EmptyRecording,
    /// Reading or writing the file failed.
    #[error("replay I/O failed for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file declares a format version this reader does not accept.
    #[error("unsupported replay version {found:?} (expected {expected:?})")]
    UnsupportedVersion {
        found: String,
        expected: &'static str,
    },
    /// The file is not valid replay JSON.
    #[error("malformed replay file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize replay: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Refusals from the event recorder state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecorderError {
    #[error("mission recording is already active")]
    AlreadyRecording,
    #[error("no mission recording is active")]
    NotRecording,
}

/// Failures while loading the station configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}
