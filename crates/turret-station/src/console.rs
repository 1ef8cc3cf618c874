//! Line-oriented operator console.
//!
//! Each input line becomes one `ConsoleInput`. Spoken phrases and shortcut
//! keys go through the `VoiceCommandRouter`, so `say ateş` and `key f` reach
//! the station exactly as a recognised voice command would.

use thiserror::Error;

use turret_control::voice::VoiceCommandRouter;
use turret_core::commands::Command;
use turret_core::constants::{DEFAULT_NO_FIRE_END_DEG, DEFAULT_NO_FIRE_START_DEG};
use turret_core::enums::{FireTrigger, OperatingMode};

pub const HELP: &str = "\
commands:
  mode <manual|semi|auto|engagement>   switch operating mode
  start | stop | estop                 system run state / emergency stop
  fire                                 default fire button
  engage                               engagement fire control
  pan <deg> <tilt>                     manual orientation
  track <deg> <tilt>                   tracker feed (semi/auto)
  nofire [<start> <end>] | nofire clear
  rec start | rec stop                 mission recording (stop saves)
  save [path]                          save the last recording
  say <phrase> | key <k>               voice command / shortcut
  listen on|off                        enable or mute voice input
  status | help | quit";

/// One parsed console line.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleInput {
    Command(Command),
    Status,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),
    #[error("'{0}' needs more arguments")]
    MissingArgument(&'static str),
    #[error("'{value}' is not a number of degrees")]
    BadNumber { value: String },
    #[error("unknown mode '{0}'")]
    UnknownMode(String),
    #[error("voice input not recognised: '{0}'")]
    Unrecognised(String),
    #[error("voice input is muted")]
    Muted,
}

/// Parses console lines, holding the voice router's listening state.
#[derive(Debug, Default)]
pub struct Console {
    router: VoiceCommandRouter,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn router(&self) -> &VoiceCommandRouter {
        &self.router
    }

    pub fn parse(&mut self, line: &str) -> Result<ConsoleInput, ParseError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(ConsoleInput::Empty);
        };
        let rest: Vec<&str> = words.collect();

        let command = match verb.to_lowercase().as_str() {
            "quit" | "exit" => return Ok(ConsoleInput::Quit),
            "status" => return Ok(ConsoleInput::Status),
            "help" | "?" => return Ok(ConsoleInput::Help),
            "mode" => Command::EnterMode {
                mode: parse_mode(rest.first().ok_or(ParseError::MissingArgument("mode"))?)?,
            },
            "start" => Command::StartSystem,
            "stop" => Command::StopSystem,
            "estop" => Command::EmergencyStop,
            "fire" => Command::Fire {
                trigger: FireTrigger::FireButton,
            },
            "engage" => Command::Fire {
                trigger: FireTrigger::EngagementButton,
            },
            "pan" => {
                let (pan, tilt) = two_degrees(&rest, "pan")?;
                Command::SetOrientation { pan, tilt }
            }
            "track" => {
                let (pan, tilt) = two_degrees(&rest, "track")?;
                Command::TrackTarget { pan, tilt }
            }
            "nofire" => match rest.as_slice() {
                [] => Command::SetNoFireZone {
                    start: DEFAULT_NO_FIRE_START_DEG,
                    end: DEFAULT_NO_FIRE_END_DEG,
                },
                ["clear"] => Command::ClearNoFireZone,
                _ => {
                    let (start, end) = two_degrees(&rest, "nofire")?;
                    Command::SetNoFireZone { start, end }
                }
            },
            "rec" => match rest.first().copied() {
                Some("start") => Command::StartRecording,
                Some("stop") => Command::StopRecording,
                _ => return Err(ParseError::MissingArgument("rec")),
            },
            "save" => Command::SaveReplay {
                path: rest.first().map(|p| p.to_string()),
            },
            "say" => {
                let phrase = rest.join(" ");
                if !self.router.is_listening() {
                    return Err(ParseError::Muted);
                }
                let token = self
                    .router
                    .recognize(&phrase)
                    .ok_or(ParseError::Unrecognised(phrase))?;
                Command::Voice { token }
            }
            "key" => {
                let key = rest.first().ok_or(ParseError::MissingArgument("key"))?;
                if !self.router.is_listening() {
                    return Err(ParseError::Muted);
                }
                let token = self
                    .router
                    .key(key)
                    .ok_or_else(|| ParseError::Unrecognised(key.to_string()))?;
                Command::Voice { token }
            }
            "listen" => {
                match rest.first().copied() {
                    Some("on") => self.router.start_listening(),
                    Some("off") => self.router.stop_listening(),
                    _ => return Err(ParseError::MissingArgument("listen")),
                }
                return Ok(ConsoleInput::Empty);
            }
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };
        Ok(ConsoleInput::Command(command))
    }
}

fn parse_mode(word: &str) -> Result<OperatingMode, ParseError> {
    match word.to_lowercase().as_str() {
        "manual" => Ok(OperatingMode::Manual),
        "semi" | "semi_autonomous" | "semi-autonomous" => Ok(OperatingMode::SemiAutonomous),
        "auto" | "autonomous" => Ok(OperatingMode::Autonomous),
        "engagement" | "engage" => Ok(OperatingMode::Engagement),
        _ => Err(ParseError::UnknownMode(word.to_string())),
    }
}

fn degrees(word: &str) -> Result<f64, ParseError> {
    word.trim_end_matches('°')
        .parse::<f64>()
        .ok()
        .filter(|deg| deg.is_finite())
        .ok_or_else(|| ParseError::BadNumber {
            value: word.to_string(),
        })
}

fn two_degrees(args: &[&str], verb: &'static str) -> Result<(f64, f64), ParseError> {
    match args {
        [a, b, ..] => Ok((degrees(a)?, degrees(b)?)),
        _ => Err(ParseError::MissingArgument(verb)),
    }
}
