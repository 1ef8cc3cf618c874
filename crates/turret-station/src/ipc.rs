//! Front-end facing handlers.
//!
//! These bridge the console to the control-loop thread via channels. Every
//! handler takes the shared `AppState`; none of them touch the station
//! directly.

use std::sync::mpsc;

use thiserror::Error;

use turret_control::StationConfig;
use turret_core::commands::Command;
use turret_core::events::Effect;
use turret_core::state::StationSnapshot;

use crate::control_loop;
use crate::state::{AppState, LoopCommand};

#[derive(Debug, Error)]
pub enum StationError {
    #[error("station already running")]
    AlreadyRunning,
    #[error("station not started")]
    NotStarted,
    #[error("control loop is gone")]
    Disconnected,
    #[error("shared state lock poisoned")]
    Poisoned,
    #[error("failed to spawn control loop: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Start the station. Spawns the control loop if not already running.
pub fn start_station(
    state: &AppState,
    config: StationConfig,
    effects_tx: mpsc::Sender<Effect>,
) -> Result<(), StationError> {
    let mut tx_lock = state
        .command_tx
        .lock()
        .map_err(|_| StationError::Poisoned)?;
    if tx_lock.is_some() {
        return Err(StationError::AlreadyRunning);
    }

    let (cmd_tx, handle) =
        control_loop::spawn_control_loop(config, effects_tx, state.latest_snapshot.clone())?;

    *tx_lock = Some(cmd_tx);
    *state
        .loop_handle
        .lock()
        .map_err(|_| StationError::Poisoned)? = Some(handle);
    Ok(())
}

/// Send an operator command to the station.
pub fn send_command(state: &AppState, command: Command) -> Result<(), StationError> {
    let tx_lock = state
        .command_tx
        .lock()
        .map_err(|_| StationError::Poisoned)?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(LoopCommand::Dispatch(command))
            .map_err(|_| StationError::Disconnected),
        None => Err(StationError::NotStarted),
    }
}

/// Get the latest snapshot synchronously.
pub fn get_snapshot(state: &AppState) -> Result<Option<StationSnapshot>, StationError> {
    let lock = state
        .latest_snapshot
        .lock()
        .map_err(|_| StationError::Poisoned)?;
    Ok(lock.clone())
}

/// Stop the control loop and wait for it to exit. No-op if never started.
pub fn shutdown(state: &AppState) -> Result<(), StationError> {
    let tx = state
        .command_tx
        .lock()
        .map_err(|_| StationError::Poisoned)?
        .take();
    if let Some(tx) = tx {
        // The loop also exits on disconnect, so a failed send is fine.
        let _ = tx.send(LoopCommand::Shutdown);
    }
    let handle = state
        .loop_handle
        .lock()
        .map_err(|_| StationError::Poisoned)?
        .take();
    if let Some(handle) = handle {
        handle.join().map_err(|_| StationError::Disconnected)?;
    }
    Ok(())
}
