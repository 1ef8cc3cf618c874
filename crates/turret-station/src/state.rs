//! State shared between the operator console and the control-loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use turret_core::commands::Command;
use turret_core::state::StationSnapshot;

/// Messages sent from the console to the control-loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// An operator command to forward to the station.
    Dispatch(Command),
    /// Shut down the control loop gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in a `Mutex` so the state stays `Sync`
/// - `Mutex<Option<...>>` holds what does not exist before `start_station`
/// - the latest snapshot is an `Arc` shared with the control loop
pub struct AppState {
    /// Channel to the control loop. `None` until the station is started.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Control-loop thread, joined on shutdown.
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
    /// Latest snapshot for synchronous `get_snapshot` queries.
    /// Updated by the control loop after every batch of effects.
    pub latest_snapshot: Arc<Mutex<Option<StationSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            loop_handle: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
