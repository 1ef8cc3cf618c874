//! Core types and definitions for the turret fire-control station.
//!
//! This crate defines the vocabulary shared across all other crates:
//! operating modes, sectors, commands, effects, snapshots, and constants.
//! It has no dependency on any runtime, thread or I/O layer.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
pub mod verdict;

#[cfg(test)]
mod tests;
