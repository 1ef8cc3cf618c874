//! Voice and keyboard command routing.
//!
//! Recognised phrases (Turkish and English) and keyboard shortcuts map onto a
//! closed token vocabulary; tokens map onto station commands. Anything
//! outside the vocabulary is ignored.

use std::collections::HashMap;

use tracing::{debug, info};

use turret_core::commands::Command;
use turret_core::enums::{FireTrigger, OperatingMode, VoiceToken};

const PHRASES: &[(&str, VoiceToken)] = &[
    ("ateş", VoiceToken::Fire),
    ("ateş et", VoiceToken::Fire),
    ("fire", VoiceToken::Fire),
    ("dur", VoiceToken::Stop),
    ("durdur", VoiceToken::Stop),
    ("stop", VoiceToken::Stop),
    ("başlat", VoiceToken::Start),
    ("start", VoiceToken::Start),
    ("manuel", VoiceToken::Manual),
    ("manual", VoiceToken::Manual),
    ("otonom", VoiceToken::Auto),
    ("auto", VoiceToken::Auto),
    ("yarı otonom", VoiceToken::SemiAuto),
    ("semi auto", VoiceToken::SemiAuto),
    ("acil", VoiceToken::Emergency),
    ("acil durdur", VoiceToken::Emergency),
    ("emergency", VoiceToken::Emergency),
];

const KEYS: &[(&str, VoiceToken)] = &[
    ("f", VoiceToken::Fire),
    ("s", VoiceToken::Stop),
    ("r", VoiceToken::Start),
    ("m", VoiceToken::Manual),
    ("a", VoiceToken::Auto),
    ("y", VoiceToken::SemiAuto),
    ("esc", VoiceToken::Emergency),
];

/// Maps spoken phrases and shortcut keys to tokens, and tokens to commands.
#[derive(Debug, Clone)]
pub struct VoiceCommandRouter {
    phrases: HashMap<&'static str, VoiceToken>,
    keys: HashMap<&'static str, VoiceToken>,
    listening: bool,
}

impl Default for VoiceCommandRouter {
    fn default() -> Self {
        Self {
            phrases: PHRASES.iter().copied().collect(),
            keys: KEYS.iter().copied().collect(),
            listening: true,
        }
    }
}

impl VoiceCommandRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn start_listening(&mut self) {
        self.listening = true;
        info!("Voice commands active (F/S/R/M/A/Y/ESC)");
    }

    pub fn stop_listening(&mut self) {
        self.listening = false;
        info!("Voice commands disabled");
    }

    /// Token for a recognised phrase (case-insensitive, trimmed).
    pub fn recognize(&self, text: &str) -> Option<VoiceToken> {
        if !self.listening {
            return None;
        }
        let phrase = text.trim().to_lowercase();
        let token = self.phrases.get(phrase.as_str()).copied();
        match token {
            Some(token) => info!("Voice command detected: '{phrase}' -> {}", token.as_str()),
            None => debug!("Unrecognised voice input '{phrase}' ignored"),
        }
        token
    }

    /// Token for a keyboard shortcut simulating a voice command.
    pub fn key(&self, key: &str) -> Option<VoiceToken> {
        if !self.listening {
            return None;
        }
        self.keys.get(key.trim().to_lowercase().as_str()).copied()
    }

    /// The intent a token stands for.
    ///
    /// `Stop`/`Start` are only meaningful when the system is in the opposite
    /// state; the station drops them otherwise.
    pub fn route(token: VoiceToken) -> Command {
        match token {
            VoiceToken::Fire => Command::Fire {
                trigger: FireTrigger::Voice,
            },
            VoiceToken::Stop => Command::StopSystem,
            VoiceToken::Start => Command::StartSystem,
            VoiceToken::Manual => Command::EnterMode {
                mode: OperatingMode::Manual,
            },
            VoiceToken::Auto => Command::EnterMode {
                mode: OperatingMode::Autonomous,
            },
            VoiceToken::SemiAuto => Command::EnterMode {
                mode: OperatingMode::SemiAutonomous,
            },
            VoiceToken::Emergency => Command::EmergencyStop,
        }
    }
}
