//! Station configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides. Files are JSON.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use turret_core::constants::*;
use turret_core::types::{AngularSector, Orientation};

use crate::error::ConfigError;

/// Configuration for starting a new station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    /// RNG seed for determinism. Same seed = same briefings and hit/miss draws.
    pub seed: u64,
    /// Sector protected during an engagement.
    pub safe_sector: AngularSector,
    /// Delay between entering Engagement mode and the briefing arriving.
    pub acquisition_delay_ms: u64,
    /// Directory for replays saved without an explicit path.
    pub replay_dir: PathBuf,
    /// Commanded orientation at power-up.
    pub initial_orientation: Orientation,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            safe_sector: AngularSector::default_safe_sector(),
            acquisition_delay_ms: BRIEFING_ACQUISITION_DELAY_MS,
            replay_dir: PathBuf::from(DEFAULT_REPLAY_DIR),
            initial_orientation: Orientation::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl StationConfig {
    /// Load and validate a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: StationConfig =
            serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the station cannot operate with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sector = self.safe_sector;
        if !sector.is_within_travel() {
            return Err(ConfigError::Invalid(format!(
                "safe sector {sector} is outside {PAN_MIN_DEG}°-{PAN_MAX_DEG}°"
            )));
        }
        if sector.is_inverted() {
            return Err(ConfigError::Invalid(format!(
                "safe sector {sector} has start > end and would protect nothing"
            )));
        }
        let o = self.initial_orientation;
        if !o.is_finite() || o.clamped() != o {
            return Err(ConfigError::Invalid(format!(
                "initial orientation pan {}° tilt {}° is outside travel limits",
                o.pan, o.tilt
            )));
        }
        Ok(())
    }

    pub fn acquisition_delay(&self) -> Duration {
        Duration::from_millis(self.acquisition_delay_ms)
    }
}
