//! Operator commands sent from the front-end to the control thread.
//!
//! Every state change in the station is the result of exactly one of these.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible operator and collaborator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    // --- Mode control ---
    /// Enter the given operating mode.
    EnterMode { mode: OperatingMode },

    // --- Fire control ---
    /// Attempt a discharge through the authorization gate.
    Fire { trigger: FireTrigger },

    // --- System run state ---
    /// Start the system (camera, tracking, fire authority).
    StartSystem,
    /// Stop the system.
    StopSystem,
    /// Immediate stop with critical alert.
    EmergencyStop,

    // --- Orientation ---
    /// Operator slider input (degrees). Only honored with manual orientation control.
    SetOrientation { pan: f64, tilt: f64 },
    /// Tracker feed (degrees). Only honored with autonomous targeting active.
    TrackTarget { pan: f64, tilt: f64 },

    // --- No-fire zone ---
    /// Operator-confirmed no-fire sector (degrees, inclusive).
    SetNoFireZone { start: f64, end: f64 },
    /// Remove the no-fire sector.
    ClearNoFireZone,

    // --- Mission recording ---
    /// Begin capturing replay events.
    StartRecording,
    /// Stop capturing and save the replay to the default location.
    StopRecording,
    /// Save the captured replay, optionally to an explicit path.
    SaveReplay { path: Option<String> },

    // --- Voice ---
    /// A recognised voice/keyboard token.
    Voice { token: VoiceToken },
}
