//! Effects emitted by the control thread for UI, audio and notification layers.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{AngularSector, Capabilities, EngagementBriefing, Orientation};
use crate::verdict::FireVerdict;

/// Everything the presentation layer may react to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Effect {
    // --- Mode ---
    /// A different mode became active.
    ModeChanged {
        from: OperatingMode,
        to: OperatingMode,
        capabilities: Capabilities,
    },
    /// The active mode was selected again; nothing changed.
    ModeReaffirmed { mode: OperatingMode },

    // --- Briefing ---
    /// Sensor acquisition started; a briefing will follow after the delay.
    BriefingScheduled { epoch: u64, delay_ms: u64 },
    /// A fresh briefing is now in force.
    BriefingApplied { briefing: EngagementBriefing },
    /// A late briefing arrived after the mode changed and was dropped.
    BriefingDiscarded { epoch: u64 },

    // --- System ---
    SystemStateChanged { running: bool },
    EmergencyStop,

    // --- Orientation ---
    OrientationChanged { orientation: Orientation },
    /// A command was not applicable in the current state.
    CommandRejected { reason: String },

    // --- Fire ---
    /// The trigger is not reachable in the current mode; no verdict was computed.
    FireControlUnavailable {
        trigger: FireTrigger,
        mode: OperatingMode,
    },
    /// Result of the authorization gate.
    FireVerdict {
        verdict: FireVerdict,
        trigger: FireTrigger,
        orientation: Orientation,
    },
    /// An authorized shot was discharged.
    Fired {
        shot_number: u32,
        orientation: Orientation,
        hit: bool,
    },

    // --- No-fire zone ---
    NoFireZoneSet { zone: AngularSector },
    NoFireZoneCleared,

    // --- Recording ---
    RecordingStarted,
    RecordingRefused { reason: String },
    RecordingStopped { events: usize },
    ReplaySaved { path: String },
    ReplayFailed { reason: String },
}

/// Operator-facing notification derived from an effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
}

impl Alert {
    pub fn new(level: AlertLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

impl Effect {
    /// The notification an operator should see for this effect, if any.
    pub fn alert(&self) -> Option<Alert> {
        let alert = match self {
            Effect::ModeChanged { to, .. } => Alert::new(AlertLevel::Info, format!("{to} mode active")),
            Effect::ModeReaffirmed { .. } => return None,
            Effect::BriefingScheduled { .. } => {
                Alert::new(AlertLevel::Info, "Engagement mode: briefing acquisition started")
            }
            Effect::BriefingApplied { briefing } => Alert::new(
                AlertLevel::Warning,
                format!(
                    "Zone: {} | Targets: {} | Safe sector {} - do not fire",
                    briefing.designated_zone,
                    briefing.target_summary(),
                    briefing.safe_sector
                ),
            ),
            Effect::BriefingDiscarded { .. } => return None,
            Effect::SystemStateChanged { running: true } => {
                Alert::new(AlertLevel::Success, "System started")
            }
            Effect::SystemStateChanged { running: false } => {
                Alert::new(AlertLevel::Warning, "System stopped")
            }
            Effect::EmergencyStop => Alert::new(AlertLevel::Critical, "EMERGENCY STOP"),
            Effect::OrientationChanged { .. } => return None,
            Effect::CommandRejected { reason } => Alert::new(AlertLevel::Warning, reason.clone()),
            Effect::FireControlUnavailable { trigger, mode } => Alert::new(
                AlertLevel::Warning,
                format!("{} is not available in {mode} mode", trigger.as_str()),
            ),
            Effect::FireVerdict { verdict, .. } => match verdict {
                FireVerdict::Authorized => return None,
                FireVerdict::DeniedSafeSectorViolation { .. } => {
                    Alert::new(AlertLevel::Critical, verdict.to_string())
                }
                FireVerdict::DeniedSystemNotRunning | FireVerdict::DeniedNoFireZone { .. } => {
                    Alert::new(AlertLevel::Warning, verdict.to_string())
                }
            },
            Effect::Fired { hit, .. } => Alert::new(
                AlertLevel::Info,
                format!("Fire! Hit: {}", if *hit { "yes" } else { "no" }),
            ),
            Effect::NoFireZoneSet { zone } => {
                Alert::new(AlertLevel::Success, format!("No-fire zone set: {zone}"))
            }
            Effect::NoFireZoneCleared => Alert::new(AlertLevel::Info, "No-fire zone cleared"),
            Effect::RecordingStarted => Alert::new(AlertLevel::Info, "Mission recording started"),
            Effect::RecordingRefused { reason } => Alert::new(AlertLevel::Warning, reason.clone()),
            Effect::RecordingStopped { events } => Alert::new(
                AlertLevel::Info,
                format!("Mission recording stopped ({events} events)"),
            ),
            Effect::ReplaySaved { path } => {
                Alert::new(AlertLevel::Success, format!("Mission saved: {path}"))
            }
            Effect::ReplayFailed { reason } => Alert::new(AlertLevel::Warning, reason.clone()),
        };
        Some(alert)
    }
}
