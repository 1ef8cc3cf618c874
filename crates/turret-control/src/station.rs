//! Fire-control station. The single owner of all control state.
//!
//! `FireControlStation` owns the mode controller, no-fire registry, briefing
//! scheduler, recorder and random source. It is driven by `dispatch` (one
//! operator command) and `advance` (timers), both of which return the effects
//! the presentation layer should react to. Completely headless and confined
//! to one thread, enabling deterministic testing.

use std::path::Path;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use tracing::{debug, error, info, warn};

use turret_core::commands::Command;
use turret_core::constants::*;
use turret_core::enums::{FireTrigger, OperatingMode, VoiceToken};
use turret_core::events::Effect;
use turret_core::state::{RecordingView, ScoreView, StationSnapshot};
use turret_core::types::{AngularSector, Capabilities, EngagementBriefing, Orientation};
use turret_core::verdict::FireVerdict;

use crate::briefing::{self, BriefingScheduler};
use crate::config::StationConfig;
use crate::gate;
use crate::modes::{ModeController, ModeTransition};
use crate::no_fire::NoFireZoneRegistry;
use crate::random::RandomSource;
use crate::recorder::{EventData, EventRecorder};
use crate::voice::VoiceCommandRouter;

/// The station. Owns every piece of control state.
pub struct FireControlStation {
    config: StationConfig,
    modes: ModeController,
    no_fire: NoFireZoneRegistry,
    briefing: Option<EngagementBriefing>,
    scheduler: BriefingScheduler,
    system_running: bool,
    orientation: Orientation,
    score: ScoreView,
    recorder: EventRecorder,
    rng: Box<dyn RandomSource + Send>,
}

impl FireControlStation {
    /// Create a station seeded from the config.
    pub fn new(config: StationConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_random(config, Box::new(rng))
    }

    /// Create a station with an explicit random source.
    pub fn with_random(config: StationConfig, rng: Box<dyn RandomSource + Send>) -> Self {
        Self {
            modes: ModeController::new(),
            no_fire: NoFireZoneRegistry::new(),
            briefing: None,
            scheduler: BriefingScheduler::new(config.acquisition_delay()),
            system_running: false,
            orientation: config.initial_orientation,
            score: ScoreView::default(),
            recorder: EventRecorder::new(),
            rng,
            config,
        }
    }

    // --- Queries ---

    pub fn mode(&self) -> OperatingMode {
        self.modes.mode()
    }

    pub fn capabilities(&self) -> Capabilities {
        self.modes.capabilities()
    }

    pub fn is_running(&self) -> bool {
        self.system_running
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn no_fire_zone(&self) -> Option<AngularSector> {
        self.no_fire.zone()
    }

    pub fn briefing(&self) -> Option<&EngagementBriefing> {
        self.briefing.as_ref()
    }

    pub fn score(&self) -> ScoreView {
        self.score
    }

    pub fn recorder(&self) -> &EventRecorder {
        &self.recorder
    }

    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    /// Earliest instant at which `advance` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Complete visible state for the front-end.
    pub fn snapshot(&self) -> StationSnapshot {
        StationSnapshot {
            mode: self.mode(),
            capabilities: self.capabilities(),
            system_running: self.system_running,
            orientation: self.orientation,
            no_fire_zone: self.no_fire.zone(),
            briefing: self.briefing.clone(),
            briefing_pending: self.mode() == OperatingMode::Engagement
                && self.scheduler.is_pending(self.modes.epoch()),
            score: self.score,
            recording: RecordingView {
                active: self.recorder.is_recording(),
                events: self.recorder.events().len(),
            },
        }
    }

    // --- Entry points ---

    /// Apply one command at `now`. Timers due at `now` fire first.
    pub fn dispatch(&mut self, command: Command, now: Instant) -> Vec<Effect> {
        let mut effects = self.advance(now);
        self.handle_command(command, now, &mut effects);
        effects
    }

    /// Fire every timer due at `now`.
    pub fn advance(&mut self, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        for pending in self.scheduler.take_due(now) {
            if !self.modes.is_current(pending.epoch, OperatingMode::Engagement) {
                debug!(
                    "Discarding stale briefing from mode epoch {} (now {})",
                    pending.epoch,
                    self.modes.epoch()
                );
                effects.push(Effect::BriefingDiscarded {
                    epoch: pending.epoch,
                });
                continue;
            }
            let briefing = briefing::generate(self.rng.as_mut(), self.config.safe_sector);
            info!("Briefing acquired: zone {}", briefing.designated_zone);
            info!("Target balloons: {}", briefing.target_summary());
            self.record(
                now,
                EVENT_BRIEFING,
                json!({
                    "zone": briefing.designated_zone.to_string(),
                    "targets": briefing.targets,
                    "safe_sector": briefing.safe_sector,
                }),
            );
            self.briefing = Some(briefing.clone());
            effects.push(Effect::BriefingApplied { briefing });
        }
        effects
    }

    // --- Command handling ---

    fn handle_command(&mut self, command: Command, now: Instant, effects: &mut Vec<Effect>) {
        match command {
            Command::EnterMode { mode } => self.enter_mode(mode, now, effects),
            Command::Fire { trigger } => self.fire(trigger, now, effects),
            Command::StartSystem => self.set_running(true, now, effects),
            Command::StopSystem => self.set_running(false, now, effects),
            Command::EmergencyStop => {
                self.system_running = false;
                error!("EMERGENCY STOP ACTIVE");
                self.record(now, EVENT_EMERGENCY_STOP, json!({}));
                effects.push(Effect::EmergencyStop);
            }
            Command::SetOrientation { pan, tilt } => {
                if !self.capabilities().manual_orientation {
                    effects.push(Effect::CommandRejected {
                        reason: format!("manual orientation is disabled in {} mode", self.mode()),
                    });
                    return;
                }
                self.slew(Orientation::new(pan, tilt), effects);
            }
            Command::TrackTarget { pan, tilt } => self.track_target(pan, tilt, now, effects),
            Command::SetNoFireZone { start, end } => {
                let zone = AngularSector::new(start, end);
                if !zone.is_within_travel() {
                    warn!("No-fire zone {zone} rejected: outside {PAN_MIN_DEG}°-{PAN_MAX_DEG}°");
                    effects.push(Effect::CommandRejected {
                        reason: format!(
                            "no-fire zone {zone} must lie within {PAN_MIN_DEG}°-{PAN_MAX_DEG}°"
                        ),
                    });
                    return;
                }
                self.no_fire.set(zone);
                info!("No-fire zone set: {zone}");
                self.record(now, EVENT_NO_FIRE_ZONE, json!({ "start": start, "end": end }));
                effects.push(Effect::NoFireZoneSet { zone });
            }
            Command::ClearNoFireZone => {
                if let Some(zone) = self.no_fire.clear() {
                    info!("No-fire zone {zone} cleared");
                    self.record(now, EVENT_NO_FIRE_ZONE, json!({ "cleared": true }));
                    effects.push(Effect::NoFireZoneCleared);
                }
            }
            Command::StartRecording => match self.recorder.start_recording(now) {
                Ok(()) => effects.push(Effect::RecordingStarted),
                Err(e) => effects.push(Effect::RecordingRefused {
                    reason: e.to_string(),
                }),
            },
            Command::StopRecording => match self.recorder.stop_recording() {
                Ok(events) => {
                    effects.push(Effect::RecordingStopped { events });
                    self.save_replay(None, effects);
                }
                Err(e) => effects.push(Effect::RecordingRefused {
                    reason: e.to_string(),
                }),
            },
            Command::SaveReplay { path } => self.save_replay(path.as_deref().map(Path::new), effects),
            Command::Voice { token } => self.handle_voice(token, now, effects),
        }
    }

    fn enter_mode(&mut self, mode: OperatingMode, now: Instant, effects: &mut Vec<Effect>) {
        match self.modes.enter(mode) {
            ModeTransition::Reaffirmed { mode } => {
                debug!("{mode} mode already active");
                effects.push(Effect::ModeReaffirmed { mode });
            }
            ModeTransition::Changed { from, to, epoch } => {
                if from == OperatingMode::Engagement && self.briefing.take().is_some() {
                    debug!("Engagement briefing invalidated");
                }
                info!("{to} mode active");
                self.record(
                    now,
                    EVENT_MODE_CHANGE,
                    json!({ "from": from.as_str(), "to": to.as_str() }),
                );
                effects.push(Effect::ModeChanged {
                    from,
                    to,
                    capabilities: self.capabilities(),
                });
                if to == OperatingMode::Engagement {
                    self.scheduler.schedule(epoch, now);
                    info!("Engagement mode: briefing acquisition started");
                    effects.push(Effect::BriefingScheduled {
                        epoch,
                        delay_ms: self.config.acquisition_delay_ms,
                    });
                }
            }
        }
    }

    fn set_running(&mut self, running: bool, now: Instant, effects: &mut Vec<Effect>) {
        if self.system_running == running {
            debug!("System already {}", if running { "running" } else { "stopped" });
            return;
        }
        self.system_running = running;
        if running {
            info!("System STARTED");
        } else {
            info!("System STOPPED");
        }
        self.record(now, EVENT_SYSTEM, json!({ "running": running }));
        effects.push(Effect::SystemStateChanged { running });
    }

    /// Move to `requested`, clamped. Returns false and leaves the orientation
    /// untouched when either axis is not a finite number.
    fn slew(&mut self, requested: Orientation, effects: &mut Vec<Effect>) -> bool {
        if !requested.is_finite() {
            warn!(
                "Orientation pan {}° tilt {}° rejected",
                requested.pan, requested.tilt
            );
            effects.push(Effect::CommandRejected {
                reason: format!(
                    "orientation pan {} tilt {} is not a finite angle",
                    requested.pan, requested.tilt
                ),
            });
            return false;
        }
        let orientation = requested.clamped();
        if orientation != self.orientation {
            debug!("Pan: {}°, Tilt: {}°", orientation.pan, orientation.tilt);
            self.orientation = orientation;
            effects.push(Effect::OrientationChanged { orientation });
        }
        true
    }

    fn track_target(&mut self, pan: f64, tilt: f64, now: Instant, effects: &mut Vec<Effect>) {
        let caps = self.capabilities();
        if !caps.autonomous_targeting || !self.system_running {
            effects.push(Effect::CommandRejected {
                reason: format!(
                    "tracker feed ignored: autonomous targeting is not active in {} mode",
                    self.mode()
                ),
            });
            return;
        }
        if !self.slew(Orientation::new(pan, tilt), effects) {
            return;
        }
        if caps.auto_fire {
            self.fire(FireTrigger::AutoTarget, now, effects);
        }
    }

    fn trigger_available(&self, trigger: FireTrigger) -> bool {
        let caps = self.capabilities();
        match trigger {
            FireTrigger::FireButton | FireTrigger::Voice => caps.fire_control_visible,
            FireTrigger::EngagementButton => caps.engagement_fire,
            FireTrigger::AutoTarget => caps.auto_fire,
        }
    }

    fn fire(&mut self, trigger: FireTrigger, now: Instant, effects: &mut Vec<Effect>) {
        let mode = self.mode();
        if !self.trigger_available(trigger) {
            debug!("{} ignored: not available in {mode} mode", trigger.as_str());
            effects.push(Effect::FireControlUnavailable { trigger, mode });
            return;
        }

        let orientation = self.orientation;
        let verdict = gate::authorize(
            self.system_running,
            mode,
            orientation.pan,
            self.no_fire.zone(),
            self.briefing.as_ref(),
            self.config.safe_sector,
        );
        effects.push(Effect::FireVerdict {
            verdict,
            trigger,
            orientation,
        });

        if verdict.is_authorized() {
            self.score.shots_fired += 1;
            let hit = self.rng.coin();
            if hit {
                self.score.hits += 1;
            }
            info!(
                "FIRE! (Pan: {}°, Tilt: {}°, hit: {hit})",
                orientation.pan, orientation.tilt
            );
            self.record(
                now,
                EVENT_FIRE,
                json!({
                    "pan": orientation.pan,
                    "tilt": orientation.tilt,
                    "hit": hit,
                    "mode": mode.as_str(),
                }),
            );
            effects.push(Effect::Fired {
                shot_number: self.score.shots_fired,
                orientation,
                hit,
            });
            return;
        }

        self.score.denials += 1;
        match verdict {
            FireVerdict::DeniedSafeSectorViolation { pan, sector } => {
                error!("SAFE SECTOR FIRE ATTEMPT: pan {pan}° inside {sector}");
            }
            _ => warn!("Fire denied: {verdict}"),
        }
        let mut data = json!({
            "pan": orientation.pan,
            "tilt": orientation.tilt,
            "reason": verdict.reason_code(),
            "mode": mode.as_str(),
        });
        if let Some(sector) = verdict.violated_sector() {
            data["sector"] = json!(sector);
        }
        self.record(now, EVENT_FIRE_DENIED, data);
    }

    fn handle_voice(&mut self, token: VoiceToken, now: Instant, effects: &mut Vec<Effect>) {
        info!("Voice command: {}", token.as_str());
        match token {
            // Only meaningful against the opposite run state.
            VoiceToken::Stop if !self.system_running => {}
            VoiceToken::Start if self.system_running => {}
            // Voice fire acts as the default fire button and is silently
            // dropped when that button is hidden.
            VoiceToken::Fire if !self.capabilities().fire_control_visible => {}
            _ => {
                let command = VoiceCommandRouter::route(token);
                self.handle_command(command, now, effects);
            }
        }
    }

    fn save_replay(&mut self, path: Option<&Path>, effects: &mut Vec<Effect>) {
        match self.recorder.save_replay(path, &self.config.replay_dir) {
            Ok(path) => effects.push(Effect::ReplaySaved {
                path: path.display().to_string(),
            }),
            Err(e) => {
                warn!("Replay not saved: {e}");
                effects.push(Effect::ReplayFailed {
                    reason: e.to_string(),
                });
            }
        }
    }

    fn record(&mut self, now: Instant, kind: &str, data: serde_json::Value) {
        let data: EventData = match data {
            serde_json::Value::Object(map) => map,
            other => {
                let mut map = EventData::new();
                map.insert("value".to_string(), other);
                map
            }
        };
        self.recorder.record_event(now, kind, data);
    }
}
