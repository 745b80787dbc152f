//! Core types and definitions for the rockfall simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity enums, geometry, commands, events, state snapshots and constants.
//! It has no simulation logic and no dependency on any runtime framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
