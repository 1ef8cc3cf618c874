use std::sync::mpsc;
use std::time::{Duration, Instant};

use turret_control::StationConfig;
use turret_core::commands::Command;
use turret_core::enums::{FireTrigger, OperatingMode, VoiceToken};
use turret_core::events::Effect;
use turret_core::verdict::FireVerdict;

use crate::console::{Console, ConsoleInput, ParseError};
use crate::ipc::{self, StationError};
use crate::state::{AppState, LoopCommand};

fn fast_config(dir: &std::path::Path) -> StationConfig {
    StationConfig {
        acquisition_delay_ms: 50,
        replay_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

/// Receive effects until one matches or the deadline passes.
fn wait_for(
    rx: &mpsc::Receiver<Effect>,
    timeout: Duration,
    pred: impl Fn(&Effect) -> bool,
) -> Option<Effect> {
    let deadline = Instant::now() + timeout;
    while let Some(left) = deadline.checked_duration_since(Instant::now()) {
        match rx.recv_timeout(left) {
            Ok(effect) if pred(&effect) => return Some(effect),
            Ok(_) => continue,
            Err(_) => return None,
        }
    }
    None
}

// ---- Channels and state ----

#[test]
fn test_command_channel_round_trip() {
    let (tx, rx) = mpsc::channel::<LoopCommand>();

    tx.send(LoopCommand::Dispatch(Command::StartSystem)).unwrap();
    tx.send(LoopCommand::Dispatch(Command::Fire {
        trigger: FireTrigger::FireButton,
    }))
    .unwrap();
    tx.send(LoopCommand::Shutdown).unwrap();

    let commands: Vec<_> = rx.try_iter().collect();
    assert_eq!(commands.len(), 3);
    assert!(matches!(
        commands[0],
        LoopCommand::Dispatch(Command::StartSystem)
    ));
    assert!(matches!(
        commands[1],
        LoopCommand::Dispatch(Command::Fire { .. })
    ));
    assert!(matches!(commands[2], LoopCommand::Shutdown));
}

#[test]
fn test_app_state_creation() {
    let state = AppState::new();
    assert!(state.command_tx.lock().unwrap().is_none());
    assert!(state.loop_handle.lock().unwrap().is_none());
    assert!(state.latest_snapshot.lock().unwrap().is_none());
}

#[test]
fn test_send_before_start_fails() {
    let state = AppState::new();
    assert!(matches!(
        ipc::send_command(&state, Command::StartSystem),
        Err(StationError::NotStarted)
    ));
    // Shutdown of a never-started station is a no-op.
    ipc::shutdown(&state).unwrap();
}

// ---- Control loop ----

#[test]
fn test_control_loop_delivers_briefing_and_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new();
    let (effects_tx, effects_rx) = mpsc::channel();
    ipc::start_station(&state, fast_config(dir.path()), effects_tx).unwrap();

    let snapshot = ipc::get_snapshot(&state).unwrap();
    assert!(snapshot.is_none() || snapshot.unwrap().mode == OperatingMode::Manual);

    ipc::send_command(
        &state,
        Command::EnterMode {
            mode: OperatingMode::Engagement,
        },
    )
    .unwrap();

    let applied = wait_for(&effects_rx, Duration::from_secs(5), |e| {
        matches!(e, Effect::BriefingApplied { .. })
    });
    assert!(applied.is_some(), "briefing never arrived");

    let snapshot = ipc::get_snapshot(&state).unwrap().unwrap();
    assert_eq!(snapshot.mode, OperatingMode::Engagement);
    assert!(snapshot.briefing.is_some());
    assert!(!snapshot.briefing_pending);

    ipc::shutdown(&state).unwrap();
    // The loop dropped its sender on exit.
    assert!(wait_for(&effects_rx, Duration::from_secs(1), |_| true).is_none());
}

#[test]
fn test_control_loop_serializes_fire_requests() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new();
    let (effects_tx, effects_rx) = mpsc::channel();
    ipc::start_station(&state, fast_config(dir.path()), effects_tx).unwrap();

    ipc::send_command(
        &state,
        Command::Fire {
            trigger: FireTrigger::FireButton,
        },
    )
    .unwrap();
    ipc::send_command(&state, Command::StartSystem).unwrap();
    ipc::send_command(
        &state,
        Command::Voice {
            token: VoiceToken::Fire,
        },
    )
    .unwrap();

    let mut verdicts = Vec::new();
    while verdicts.len() < 2 {
        match wait_for(&effects_rx, Duration::from_secs(5), |e| {
            matches!(e, Effect::FireVerdict { .. })
        }) {
            Some(Effect::FireVerdict { verdict, .. }) => verdicts.push(verdict),
            _ => panic!("missing verdicts: {verdicts:?}"),
        }
    }
    assert_eq!(
        verdicts,
        vec![FireVerdict::DeniedSystemNotRunning, FireVerdict::Authorized]
    );

    assert!(matches!(
        ipc::start_station(&state, fast_config(dir.path()), mpsc::channel().0),
        Err(StationError::AlreadyRunning)
    ));
    ipc::shutdown(&state).unwrap();
    assert!(matches!(
        ipc::send_command(&state, Command::StartSystem),
        Err(StationError::NotStarted)
    ));
}

// ---- Console ----

#[test]
fn test_console_parses_core_commands() {
    let mut console = Console::new();
    assert_eq!(console.parse("   "), Ok(ConsoleInput::Empty));
    assert_eq!(console.parse("quit"), Ok(ConsoleInput::Quit));
    assert_eq!(console.parse("status"), Ok(ConsoleInput::Status));
    assert_eq!(
        console.parse("mode semi"),
        Ok(ConsoleInput::Command(Command::EnterMode {
            mode: OperatingMode::SemiAutonomous
        }))
    );
    assert_eq!(
        console.parse("engage"),
        Ok(ConsoleInput::Command(Command::Fire {
            trigger: FireTrigger::EngagementButton
        }))
    );
    assert_eq!(
        console.parse("pan 90 12.5"),
        Ok(ConsoleInput::Command(Command::SetOrientation {
            pan: 90.0,
            tilt: 12.5
        }))
    );
    assert_eq!(
        console.parse("nofire"),
        Ok(ConsoleInput::Command(Command::SetNoFireZone {
            start: 0.0,
            end: 30.0
        }))
    );
    assert_eq!(
        console.parse("nofire 40° 80"),
        Ok(ConsoleInput::Command(Command::SetNoFireZone {
            start: 40.0,
            end: 80.0
        }))
    );
    assert_eq!(
        console.parse("nofire clear"),
        Ok(ConsoleInput::Command(Command::ClearNoFireZone))
    );
    assert_eq!(
        console.parse("save out/run.json"),
        Ok(ConsoleInput::Command(Command::SaveReplay {
            path: Some("out/run.json".to_string())
        }))
    );
}

#[test]
fn test_console_rejects_bad_input() {
    let mut console = Console::new();
    assert_eq!(
        console.parse("launch"),
        Err(ParseError::UnknownCommand("launch".to_string()))
    );
    assert_eq!(
        console.parse("mode turbo"),
        Err(ParseError::UnknownMode("turbo".to_string()))
    );
    assert_eq!(console.parse("pan 90"), Err(ParseError::MissingArgument("pan")));
    for line in ["pan nan 30", "pan 90 inf", "nofire -inf 30", "track NaN 10"] {
        assert!(
            matches!(console.parse(line), Err(ParseError::BadNumber { .. })),
            "{line} parsed"
        );
    }
    assert_eq!(
        console.parse("track north 10"),
        Err(ParseError::BadNumber {
            value: "north".to_string()
        })
    );
}

#[test]
fn test_console_voice_and_mute() {
    let mut console = Console::new();
    assert_eq!(
        console.parse("say ateş et"),
        Ok(ConsoleInput::Command(Command::Voice {
            token: VoiceToken::Fire
        }))
    );
    assert_eq!(
        console.parse("key esc"),
        Ok(ConsoleInput::Command(Command::Voice {
            token: VoiceToken::Emergency
        }))
    );
    assert_eq!(
        console.parse("say hello there"),
        Err(ParseError::Unrecognised("hello there".to_string()))
    );

    assert_eq!(console.parse("listen off"), Ok(ConsoleInput::Empty));
    assert!(!console.router().is_listening());
    assert_eq!(console.parse("say fire"), Err(ParseError::Muted));
    console.parse("listen on").unwrap();
    assert!(console.parse("key y").is_ok());
}
