//! Control-loop thread. Owns the `FireControlStation` and serializes every
//! command and timer onto one thread.
//!
//! The station is created inside the thread so nothing else can touch it.
//! Commands arrive via `mpsc`; the loop waits for the next command or the
//! next briefing deadline, whichever comes first. Effects are forwarded to
//! the presentation side and the latest snapshot is stored for polling.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use turret_control::{FireControlStation, StationConfig};
use turret_core::events::Effect;
use turret_core::state::StationSnapshot;

use crate::state::LoopCommand;

/// Upper bound on how long the loop blocks with no timer outstanding.
pub const IDLE_POLL: Duration = Duration::from_millis(250);

/// Spawns the control loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_control_loop(
    config: StationConfig,
    effects_tx: mpsc::Sender<Effect>,
    latest_snapshot: Arc<Mutex<Option<StationSnapshot>>>,
) -> io::Result<(mpsc::Sender<LoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("turret-control-loop".into())
        .spawn(move || {
            let station = FireControlStation::new(config);
            run_control_loop(station, cmd_rx, &effects_tx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The control loop. Runs until Shutdown or channel disconnect.
fn run_control_loop(
    mut station: FireControlStation,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    effects_tx: &mpsc::Sender<Effect>,
    latest_snapshot: &Mutex<Option<StationSnapshot>>,
) {
    publish(&station, latest_snapshot);
    info!("Control loop started in {} mode", station.mode());

    loop {
        // 1. Wait for a command or the next briefing deadline
        let effects = match cmd_rx.recv_timeout(wait_time(&station, Instant::now())) {
            Ok(LoopCommand::Dispatch(cmd)) => {
                debug!("Dispatching {cmd:?}");
                station.dispatch(cmd, Instant::now())
            }
            Ok(LoopCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => station.advance(Instant::now()),
        };

        if effects.is_empty() {
            continue;
        }

        // 2. Store latest snapshot before anyone reacts to the effects
        publish(&station, latest_snapshot);

        // 3. Forward effects; a closed receiver only means nobody is watching
        for effect in effects {
            let _ = effects_tx.send(effect);
        }
    }

    info!("Control loop stopped");
}

/// How long to block before the station next has timer work.
fn wait_time(station: &FireControlStation, now: Instant) -> Duration {
    station
        .next_deadline()
        .map_or(IDLE_POLL, |deadline| {
            deadline.saturating_duration_since(now).min(IDLE_POLL)
        })
}

fn publish(station: &FireControlStation, latest_snapshot: &Mutex<Option<StationSnapshot>>) {
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(station.snapshot());
    }
}
