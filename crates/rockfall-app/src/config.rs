//! Runtime settings for the headless driver, read from the environment.

use std::{env, fs, time::Duration};

use tracing::warn;

use rockfall_core::constants::TICK_RATE;
use rockfall_sim::SimConfig;

/// How often the driver polls the latest snapshot.
pub const POLL_INTERVAL: Duration = Duration::from_millis(1000 / TICK_RATE as u64);

/// Ticks between progress log lines.
pub const REPORT_INTERVAL_TICKS: u64 = TICK_RATE as u64;

pub fn seed() -> Option<u64> {
    env::var("ROCKFALL_SEED").ok().and_then(|v| v.parse().ok())
}

/// Ticks to run before shutting down (0 runs until interrupted).
pub fn run_ticks() -> u64 {
    env::var("ROCKFALL_RUN_TICKS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1800)
}

/// Ticks between autopilot shots.
pub fn fire_every() -> u64 {
    env::var("ROCKFALL_FIRE_EVERY")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|&ticks| ticks > 0)
        .unwrap_or(12)
}

/// Simulation config from the JSON file named by `ROCKFALL_CONFIG`, with
/// `ROCKFALL_SEED` applied on top. Falls back to defaults.
pub fn sim_config() -> SimConfig {
    let mut config = env::var("ROCKFALL_CONFIG")
        .ok()
        .and_then(|path| load_sim_config(&path))
        .unwrap_or_default();
    if let Some(seed) = seed() {
        config.seed = seed;
    }
    config
}

fn load_sim_config(path: &str) -> Option<SimConfig> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) => {
            warn!(path, %error, "could not read sim config, using defaults");
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(config) => Some(config),
        Err(error) => {
            warn!(path, %error, "invalid sim config, using defaults");
            None
        }
    }
}
