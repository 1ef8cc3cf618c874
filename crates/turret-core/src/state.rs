//! Station snapshot: the complete visible state handed to the front-end.

use serde::{Deserialize, Serialize};

use crate::enums::OperatingMode;
use crate::types::{AngularSector, Capabilities, EngagementBriefing, Orientation};

/// Complete station state, rebuilt after every dispatched command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationSnapshot {
    pub mode: OperatingMode,
    pub capabilities: Capabilities,
    pub system_running: bool,
    pub orientation: Orientation,
    pub no_fire_zone: Option<AngularSector>,
    /// Briefing in force (Engagement mode only).
    pub briefing: Option<EngagementBriefing>,
    /// Acquisition is in flight and a briefing is still expected.
    pub briefing_pending: bool,
    pub score: ScoreView,
    pub recording: RecordingView,
}

/// Running fire counters for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub shots_fired: u32,
    pub hits: u32,
    pub denials: u32,
}

/// Mission recorder status for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordingView {
    pub active: bool,
    pub events: usize,
}
