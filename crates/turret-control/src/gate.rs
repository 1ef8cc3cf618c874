//! Fire-authorization gate.
//!
//! Pure decision procedure, evaluated synchronously on every fire attempt.
//! Rules are checked in a fixed order and the first match wins:
//!
//! 1. system not running
//! 2. Engagement mode and pan inside the safe sector
//! 3. pan inside the no-fire zone
//! 4. authorized

use turret_core::enums::OperatingMode;
use turret_core::types::{AngularSector, EngagementBriefing};
use turret_core::verdict::FireVerdict;

/// Decide whether a discharge is currently permitted.
///
/// In Engagement mode the briefing's safe sector applies; while acquisition is
/// still in flight and no briefing exists yet, `standing_safe_sector` applies
/// in its place.
pub fn authorize(
    system_running: bool,
    mode: OperatingMode,
    pan: f64,
    no_fire_zone: Option<AngularSector>,
    briefing: Option<&EngagementBriefing>,
    standing_safe_sector: AngularSector,
) -> FireVerdict {
    if !system_running {
        return FireVerdict::DeniedSystemNotRunning;
    }

    if mode == OperatingMode::Engagement {
        let sector = briefing.map_or(standing_safe_sector, |b| b.safe_sector);
        if sector.contains(pan) {
            return FireVerdict::DeniedSafeSectorViolation { pan, sector };
        }
    }

    if let Some(zone) = no_fire_zone {
        if zone.contains(pan) {
            return FireVerdict::DeniedNoFireZone { pan, zone };
        }
    }

    FireVerdict::Authorized
}
