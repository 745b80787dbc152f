//! Headless rockfall driver.
//!
//! Runs the simulation on its own thread at the fixed tick rate, forwards
//! player commands over a channel and publishes the latest snapshot.

pub mod autopilot;
pub mod config;
pub mod game_loop;
pub mod state;

pub use rockfall_core as core;
