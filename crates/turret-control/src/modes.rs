//! Operating-mode state machine.
//!
//! Any mode may be entered from any other by explicit command. Every
//! effective transition bumps the mode epoch, which is what invalidates
//! work scheduled under an earlier mode (see `briefing::BriefingScheduler`).

use turret_core::enums::OperatingMode;
use turret_core::types::Capabilities;

/// Control surfaces enabled by each mode.
pub fn capabilities_for(mode: OperatingMode) -> Capabilities {
    match mode {
        OperatingMode::Manual => Capabilities {
            manual_orientation: true,
            fire_control_visible: true,
            autonomous_targeting: false,
            auto_fire: false,
            engagement_fire: false,
        },
        // Tracking only; the operator still pulls the trigger.
        OperatingMode::SemiAutonomous => Capabilities {
            manual_orientation: false,
            fire_control_visible: true,
            autonomous_targeting: true,
            auto_fire: false,
            engagement_fire: false,
        },
        OperatingMode::Autonomous => Capabilities {
            manual_orientation: false,
            fire_control_visible: false,
            autonomous_targeting: true,
            auto_fire: true,
            engagement_fire: false,
        },
        OperatingMode::Engagement => Capabilities {
            manual_orientation: false,
            fire_control_visible: false,
            autonomous_targeting: false,
            auto_fire: false,
            engagement_fire: true,
        },
    }
}

/// Result of an "enter mode" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeTransition {
    Changed {
        from: OperatingMode,
        to: OperatingMode,
        epoch: u64,
    },
    /// The requested mode was already active.
    Reaffirmed { mode: OperatingMode },
}

/// Finite state machine over the four operating modes. Starts in Manual.
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    mode: OperatingMode,
    epoch: u64,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> OperatingMode {
        self.mode
    }

    /// Number of effective transitions so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn capabilities(&self) -> Capabilities {
        capabilities_for(self.mode)
    }

    /// Enter `mode`. Re-entering the active mode changes nothing.
    pub fn enter(&mut self, mode: OperatingMode) -> ModeTransition {
        if mode == self.mode {
            return ModeTransition::Reaffirmed { mode };
        }
        let from = self.mode;
        self.mode = mode;
        self.epoch += 1;
        ModeTransition::Changed {
            from,
            to: mode,
            epoch: self.epoch,
        }
    }

    /// True if `epoch` is still the current one and the station is in `mode`.
    pub fn is_current(&self, epoch: u64, mode: OperatingMode) -> bool {
        self.epoch == epoch && self.mode == mode
    }
}
