//! Operator-configured no-fire sector.

use tracing::warn;

use turret_core::types::AngularSector;

/// Holds zero or one no-fire sector. `None` means no restriction beyond the
/// mode and briefing rules.
#[derive(Debug, Clone, Default)]
pub struct NoFireZoneRegistry {
    zone: Option<AngularSector>,
}

impl NoFireZoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active zone wholesale. Returns the previous zone.
    pub fn set(&mut self, zone: AngularSector) -> Option<AngularSector> {
        if zone.is_inverted() {
            warn!(
                "No-fire zone {zone} has start > end and will never match; wrap-around sectors are not supported"
            );
        }
        self.zone.replace(zone)
    }

    /// Remove the active zone. Returns what was removed.
    pub fn clear(&mut self) -> Option<AngularSector> {
        self.zone.take()
    }

    pub fn zone(&self) -> Option<AngularSector> {
        self.zone
    }
}
