//! Fire-authorization verdicts.
//!
//! A denial is a normal outcome, not an error: each variant names the rule
//! that blocked the shot and carries the numbers the operator needs to see.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::AngularSector;

/// Outcome of a single fire-authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verdict")]
pub enum FireVerdict {
    Authorized,
    /// The station has not been started.
    DeniedSystemNotRunning,
    /// Engagement mode and the turret points into the protected sector.
    DeniedSafeSectorViolation { pan: f64, sector: AngularSector },
    /// The turret points into the operator-configured no-fire zone.
    DeniedNoFireZone { pan: f64, zone: AngularSector },
}

impl FireVerdict {
    pub fn is_authorized(&self) -> bool {
        matches!(self, FireVerdict::Authorized)
    }

    /// Stable tag used in replay payloads.
    pub fn reason_code(&self) -> &'static str {
        match self {
            FireVerdict::Authorized => "authorized",
            FireVerdict::DeniedSystemNotRunning => "system_not_running",
            FireVerdict::DeniedSafeSectorViolation { .. } => "safe_sector_violation",
            FireVerdict::DeniedNoFireZone { .. } => "no_fire_zone",
        }
    }

    /// The sector whose bounds were violated, if any.
    pub fn violated_sector(&self) -> Option<AngularSector> {
        match self {
            FireVerdict::DeniedSafeSectorViolation { sector, .. } => Some(*sector),
            FireVerdict::DeniedNoFireZone { zone, .. } => Some(*zone),
            FireVerdict::Authorized | FireVerdict::DeniedSystemNotRunning => None,
        }
    }
}

impl fmt::Display for FireVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireVerdict::Authorized => f.write_str("fire authorized"),
            FireVerdict::DeniedSystemNotRunning => {
                f.write_str("fire denied: system is not running, start the system first")
            }
            FireVerdict::DeniedSafeSectorViolation { pan, sector } => write!(
                f,
                "fire denied: pan {pan}° is inside the engagement safe sector {sector}"
            ),
            FireVerdict::DeniedNoFireZone { pan, zone } => {
                write!(f, "fire denied: pan {pan}° is inside the no-fire zone {zone}")
            }
        }
    }
}
