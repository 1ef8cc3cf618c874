//! Engagement briefing generation and the acquisition-delay scheduler.

use std::time::{Duration, Instant};

use turret_core::constants::{BRIEFING_MAX_TARGETS, BRIEFING_MIN_TARGETS};
use turret_core::enums::{DesignatedZone, TargetColor, TargetShape};
use turret_core::types::{AngularSector, EngagementBriefing, TargetDescriptor};

use crate::random::RandomSource;

/// Draw a fresh briefing: zone uniform over {A, B}, 2-4 targets drawn with
/// replacement, and the fixed safe sector attached.
pub fn generate(rng: &mut dyn RandomSource, safe_sector: AngularSector) -> EngagementBriefing {
    let designated_zone = DesignatedZone::ALL[rng.index(DesignatedZone::ALL.len())];
    let count = rng.between(BRIEFING_MIN_TARGETS, BRIEFING_MAX_TARGETS);
    let targets = (0..count)
        .map(|_| TargetDescriptor {
            color: TargetColor::ALL[rng.index(TargetColor::ALL.len())],
            shape: TargetShape::ALL[rng.index(TargetShape::ALL.len())],
        })
        .collect();
    EngagementBriefing {
        designated_zone,
        targets,
        safe_sector,
    }
}

/// A briefing acquisition in flight, keyed by the mode epoch that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingBriefing {
    pub epoch: u64,
    pub due_at: Instant,
}

/// One-shot timers for briefing acquisition.
///
/// Timers are never cancelled. A timer that fires after its epoch has been
/// superseded is handed back anyway, and the caller discards it.
#[derive(Debug, Clone)]
pub struct BriefingScheduler {
    delay: Duration,
    pending: Vec<PendingBriefing>,
}

impl BriefingScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Vec::new(),
        }
    }

    /// Start an acquisition for `epoch`. Returns when it will complete.
    pub fn schedule(&mut self, epoch: u64, now: Instant) -> Instant {
        let due_at = now + self.delay;
        self.pending.push(PendingBriefing { epoch, due_at });
        due_at
    }

    /// Remove and return every timer due at `now`, oldest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<PendingBriefing> {
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due_at <= now);
        self.pending = waiting;
        due
    }

    /// Earliest outstanding deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due_at).min()
    }

    /// True while a timer for `epoch` is outstanding.
    pub fn is_pending(&self, epoch: u64) -> bool {
        self.pending.iter().any(|p| p.epoch == epoch)
    }
}
