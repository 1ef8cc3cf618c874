//! Tests for the shared vocabulary: sectors, verdict messages, and wire formats.

use proptest::prelude::*;

use crate::commands::Command;
use crate::enums::*;
use crate::events::Effect;
use crate::state::StationSnapshot;
use crate::types::{AngularSector, Orientation};
use crate::verdict::FireVerdict;

// ---- AngularSector ----

#[test]
fn test_sector_bounds_are_inclusive() {
    let sector = AngularSector::new(150.0, 210.0);
    assert!(sector.contains(150.0));
    assert!(sector.contains(180.0));
    assert!(sector.contains(210.0));
    assert!(!sector.contains(149.9));
    assert!(!sector.contains(210.1));
}

#[test]
fn test_wrapping_sector_contains_nothing() {
    // 350 -> 10 is accepted but never matches under the literal compare.
    let sector = AngularSector::new(350.0, 10.0);
    assert!(sector.is_inverted());
    for angle in [0.0, 5.0, 10.0, 180.0, 350.0, 355.0, 360.0] {
        assert!(!sector.contains(angle), "inverted sector matched {angle}");
    }
}

#[test]
fn test_sector_display_shows_bounds() {
    assert_eq!(AngularSector::default_safe_sector().to_string(), "150°-210°");
}

proptest! {
    #[test]
    fn prop_contains_matches_inclusive_compare(
        start in 0.0f64..360.0,
        width in 0.0f64..360.0,
        angle in -30.0f64..390.0,
    ) {
        let end = (start + width).min(359.999);
        let sector = AngularSector::new(start, end);
        prop_assert_eq!(sector.contains(angle), start <= angle && angle <= end);
    }
}

// ---- Orientation ----

#[test]
fn test_orientation_defaults_and_clamp() {
    let o = Orientation::default();
    assert_eq!(o.pan, 180.0);
    assert_eq!(o.tilt, 30.0);

    let clamped = Orientation::new(400.0, -5.0).clamped();
    assert_eq!(clamped.pan, 360.0);
    assert_eq!(clamped.tilt, 0.0);

    let clamped = Orientation::new(-1.0, 75.0).clamped();
    assert_eq!(clamped.pan, 0.0);
    assert_eq!(clamped.tilt, 60.0);
}

#[test]
fn test_non_finite_angles_detected() {
    assert!(Orientation::default().is_finite());
    assert!(!Orientation::new(f64::NAN, 30.0).is_finite());
    assert!(!Orientation::new(180.0, f64::INFINITY).is_finite());

    assert!(AngularSector::new(0.0, 360.0).is_within_travel());
    assert!(AngularSector::new(350.0, 10.0).is_within_travel());
    assert!(!AngularSector::new(f64::NAN, 30.0).is_within_travel());
    assert!(!AngularSector::new(-500.0, 9e9).is_within_travel());
    assert!(!AngularSector::new(0.0, 360.5).is_within_travel());
}

// ---- Verdicts ----

#[test]
fn test_denials_name_the_violated_bounds() {
    let safe = FireVerdict::DeniedSafeSectorViolation {
        pan: 180.0,
        sector: AngularSector::new(150.0, 210.0),
    };
    let msg = safe.to_string();
    assert!(msg.contains("safe sector"));
    assert!(msg.contains("150°-210°"));
    assert!(msg.contains("180°"));

    let zone = FireVerdict::DeniedNoFireZone {
        pan: 15.0,
        zone: AngularSector::new(0.0, 30.0),
    };
    assert!(zone.to_string().contains("no-fire zone 0°-30°"));
    assert_eq!(zone.violated_sector(), Some(AngularSector::new(0.0, 30.0)));

    assert!(FireVerdict::DeniedSystemNotRunning
        .to_string()
        .contains("not running"));
    assert_eq!(FireVerdict::DeniedSystemNotRunning.violated_sector(), None);
}

#[test]
fn test_reason_codes_are_distinct() {
    let verdicts = [
        FireVerdict::Authorized,
        FireVerdict::DeniedSystemNotRunning,
        FireVerdict::DeniedSafeSectorViolation {
            pan: 0.0,
            sector: AngularSector::new(0.0, 1.0),
        },
        FireVerdict::DeniedNoFireZone {
            pan: 0.0,
            zone: AngularSector::new(0.0, 1.0),
        },
    ];
    let mut codes: Vec<_> = verdicts.iter().map(|v| v.reason_code()).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), 4);
    assert!(verdicts[0].is_authorized());
    assert!(!verdicts[1].is_authorized());
}

// ---- Wire formats ----

#[test]
fn test_command_wire_format_is_tagged() {
    let cmd = Command::EnterMode {
        mode: OperatingMode::SemiAutonomous,
    };
    let json = serde_json::to_string(&cmd).unwrap();
    assert_eq!(json, r#"{"type":"EnterMode","mode":"semi_autonomous"}"#);

    let parsed: Command =
        serde_json::from_str(r#"{"type":"Fire","trigger":"engagement_button"}"#).unwrap();
    assert_eq!(
        parsed,
        Command::Fire {
            trigger: FireTrigger::EngagementButton
        }
    );

    let parsed: Command = serde_json::from_str(r#"{"type":"SaveReplay","path":null}"#).unwrap();
    assert_eq!(parsed, Command::SaveReplay { path: None });
}

#[test]
fn test_verdict_serializes_with_bounds() {
    let effect = Effect::FireVerdict {
        verdict: FireVerdict::DeniedNoFireZone {
            pan: 15.0,
            zone: AngularSector::new(0.0, 30.0),
        },
        trigger: FireTrigger::FireButton,
        orientation: Orientation::new(15.0, 30.0),
    };
    let value = serde_json::to_value(&effect).unwrap();
    assert_eq!(value["type"], "FireVerdict");
    assert_eq!(value["verdict"]["verdict"], "DeniedNoFireZone");
    assert_eq!(value["verdict"]["zone"]["end"], 30.0);
}

#[test]
fn test_snapshot_default_is_manual_and_stopped() {
    let snap = StationSnapshot::default();
    assert_eq!(snap.mode, OperatingMode::Manual);
    assert!(!snap.system_running);
    assert!(snap.no_fire_zone.is_none());
    assert!(snap.briefing.is_none());
    let json = serde_json::to_string(&snap).unwrap();
    assert!(json.contains("\"mode\":\"manual\""));
}

#[test]
fn test_voice_token_parsing() {
    for token in [
        VoiceToken::Fire,
        VoiceToken::Stop,
        VoiceToken::Start,
        VoiceToken::Manual,
        VoiceToken::Auto,
        VoiceToken::SemiAuto,
        VoiceToken::Emergency,
    ] {
        assert_eq!(VoiceToken::from_token(token.as_str()), Some(token));
    }
    assert_eq!(VoiceToken::from_token("engage"), None);
    assert_eq!(VoiceToken::from_token(""), None);
}

// ---- Alerts ----

#[test]
fn test_alert_levels_follow_severity() {
    let safe = Effect::FireVerdict {
        verdict: FireVerdict::DeniedSafeSectorViolation {
            pan: 180.0,
            sector: AngularSector::default_safe_sector(),
        },
        trigger: FireTrigger::EngagementButton,
        orientation: Orientation::default(),
    };
    assert_eq!(safe.alert().unwrap().level, AlertLevel::Critical);

    let authorized = Effect::FireVerdict {
        verdict: FireVerdict::Authorized,
        trigger: FireTrigger::FireButton,
        orientation: Orientation::default(),
    };
    assert!(authorized.alert().is_none());

    assert_eq!(Effect::EmergencyStop.alert().unwrap().level, AlertLevel::Critical);
    assert!(Effect::ModeReaffirmed {
        mode: OperatingMode::Manual
    }
    .alert()
    .is_none());
}
