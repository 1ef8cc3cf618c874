//! Fundamental angular and station value types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{DesignatedZone, TargetColor, TargetShape};

/// Inclusive angular range on the 0-360 degree circle.
///
/// Containment is a literal `start <= angle <= end` comparison. A sector with
/// `start > end` (e.g. 350 -> 10) is representable but contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularSector {
    pub start: f64,
    pub end: f64,
}

impl AngularSector {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The engagement safe sector.
    pub fn default_safe_sector() -> Self {
        Self::new(SAFE_SECTOR_START_DEG, SAFE_SECTOR_END_DEG)
    }

    /// True iff `start <= angle <= end`. No wrap-around, no normalization.
    pub fn contains(&self, angle: f64) -> bool {
        self.start <= angle && angle <= self.end
    }

    /// True when the sector can never contain any angle.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Both bounds finite and inside the pan travel range.
    pub fn is_within_travel(&self) -> bool {
        let in_range = |deg: f64| (PAN_MIN_DEG..=PAN_MAX_DEG).contains(&deg);
        in_range(self.start) && in_range(self.end)
    }
}

impl fmt::Display for AngularSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°-{}°", self.start, self.end)
    }
}

/// Commanded turret orientation (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub pan: f64,
    pub tilt: f64,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            pan: INITIAL_PAN_DEG,
            tilt: INITIAL_TILT_DEG,
        }
    }
}

impl Orientation {
    pub fn new(pan: f64, tilt: f64) -> Self {
        Self { pan, tilt }
    }

    /// False when either axis is NaN or infinite. Clamping cannot repair those.
    pub fn is_finite(&self) -> bool {
        self.pan.is_finite() && self.tilt.is_finite()
    }

    /// Clamp to the mechanical travel limits. Callers reject non-finite input
    /// first; `f64::clamp` passes NaN through.
    pub fn clamped(self) -> Self {
        Self {
            pan: self.pan.clamp(PAN_MIN_DEG, PAN_MAX_DEG),
            tilt: self.tilt.clamp(TILT_MIN_DEG, TILT_MAX_DEG),
        }
    }
}

/// Control surfaces and authorities enabled by the active mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Pan/tilt sliders accept operator input.
    pub manual_orientation: bool,
    /// Default fire button is shown (also gates the voice "fire" command).
    pub fire_control_visible: bool,
    /// External tracker drives the orientation.
    pub autonomous_targeting: bool,
    /// Tracker may fire without an operator action.
    pub auto_fire: bool,
    /// Gated engagement-shot control is reachable.
    pub engagement_fire: bool,
}

/// One target balloon in a briefing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDescriptor {
    pub color: TargetColor,
    pub shape: TargetShape,
}

impl fmt::Display for TargetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color.as_str(), self.shape.as_str())
    }
}

/// Engagement mission descriptor, valid only while Engagement mode is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementBriefing {
    pub designated_zone: DesignatedZone,
    pub targets: Vec<TargetDescriptor>,
    /// Fixed configuration constant, independent of the random draw.
    pub safe_sector: AngularSector,
}

impl EngagementBriefing {
    /// Comma-separated target list, e.g. `red circle, blue square`.
    pub fn target_summary(&self) -> String {
        self.targets
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
