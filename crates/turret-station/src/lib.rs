//! Turret fire-control station front-end.
//!
//! Runs the control core on its own thread and exposes it to an operator
//! console through channel-backed handlers.

pub mod console;
pub mod control_loop;
pub mod ipc;
pub mod state;

pub use turret_core as core;

#[cfg(test)]
mod tests;
