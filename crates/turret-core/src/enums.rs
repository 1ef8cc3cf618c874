//! Enumeration types used throughout the station.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Station operating mode. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatingMode {
    /// Operator slews the turret and fires by hand.
    #[default]
    Manual,
    /// Tracker slews the turret, operator fires.
    SemiAutonomous,
    /// Tracker slews the turret and fires on its own authority.
    Autonomous,
    /// Briefed engagement with a protected safe sector.
    Engagement,
}

impl OperatingMode {
    pub const ALL: [OperatingMode; 4] = [
        OperatingMode::Manual,
        OperatingMode::SemiAutonomous,
        OperatingMode::Autonomous,
        OperatingMode::Engagement,
    ];

    /// Stable tag used in replay payloads and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingMode::Manual => "manual",
            OperatingMode::SemiAutonomous => "semi_autonomous",
            OperatingMode::Autonomous => "autonomous",
            OperatingMode::Engagement => "engagement",
        }
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OperatingMode::Manual => "MANUAL",
            OperatingMode::SemiAutonomous => "SEMI-AUTONOMOUS",
            OperatingMode::Autonomous => "AUTONOMOUS",
            OperatingMode::Engagement => "ENGAGEMENT",
        };
        f.write_str(label)
    }
}

/// Zone label read from the engagement briefing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignatedZone {
    A,
    B,
}

impl DesignatedZone {
    pub const ALL: [DesignatedZone; 2] = [DesignatedZone::A, DesignatedZone::B];
}

impl fmt::Display for DesignatedZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesignatedZone::A => f.write_str("A"),
            DesignatedZone::B => f.write_str("B"),
        }
    }
}

/// Target balloon color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl TargetColor {
    pub const ALL: [TargetColor; 4] = [
        TargetColor::Red,
        TargetColor::Blue,
        TargetColor::Green,
        TargetColor::Yellow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetColor::Red => "red",
            TargetColor::Blue => "blue",
            TargetColor::Green => "green",
            TargetColor::Yellow => "yellow",
        }
    }
}

/// Target balloon shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetShape {
    Circle,
    Triangle,
    Square,
}

impl TargetShape {
    pub const ALL: [TargetShape; 3] = [TargetShape::Circle, TargetShape::Triangle, TargetShape::Square];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetShape::Circle => "circle",
            TargetShape::Triangle => "triangle",
            TargetShape::Square => "square",
        }
    }
}

/// Which control surface originated a fire attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FireTrigger {
    /// Default fire button (Manual and SemiAutonomous).
    FireButton,
    /// Gated engagement shot (Engagement only).
    EngagementButton,
    /// Spoken or keyboard-simulated "fire" command.
    Voice,
    /// Tracker-initiated shot (Autonomous only).
    AutoTarget,
}

impl FireTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            FireTrigger::FireButton => "fire_button",
            FireTrigger::EngagementButton => "engagement_button",
            FireTrigger::Voice => "voice",
            FireTrigger::AutoTarget => "auto_target",
        }
    }
}

/// Token emitted by the voice/keyboard command source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceToken {
    Fire,
    Stop,
    Start,
    Manual,
    Auto,
    SemiAuto,
    Emergency,
}

impl VoiceToken {
    /// Parse a wire token (`fire`, `semi_auto`, ...). Unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "fire" => Some(VoiceToken::Fire),
            "stop" => Some(VoiceToken::Stop),
            "start" => Some(VoiceToken::Start),
            "manual" => Some(VoiceToken::Manual),
            "auto" => Some(VoiceToken::Auto),
            "semi_auto" => Some(VoiceToken::SemiAuto),
            "emergency" => Some(VoiceToken::Emergency),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceToken::Fire => "fire",
            VoiceToken::Stop => "stop",
            VoiceToken::Start => "start",
            VoiceToken::Manual => "manual",
            VoiceToken::Auto => "auto",
            VoiceToken::SemiAuto => "semi_auto",
            VoiceToken::Emergency => "emergency",
        }
    }
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Success,
    Warning,
    Critical,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Info => "INFO",
            AlertLevel::Success => "OK",
            AlertLevel::Warning => "WARN",
            AlertLevel::Critical => "CRIT",
        }
    }
}
