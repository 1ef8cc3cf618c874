//! Control core for the turret fire-control station.
//!
//! Owns the operating-mode state machine, the fire-authorization gate,
//! engagement briefings and the mission recorder, behind a single
//! `FireControlStation::dispatch` entry point.

pub mod briefing;
pub mod config;
pub mod error;
pub mod gate;
pub mod modes;
pub mod no_fire;
pub mod random;
pub mod recorder;
pub mod replay;
pub mod station;
pub mod voice;

pub use config::StationConfig;
pub use station::FireControlStation;
pub use turret_core as core;
