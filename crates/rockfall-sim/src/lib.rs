//! Simulation engine for rockfall.
//!
//! Owns the entity registry, runs the fixed-tick update/collision pass,
//! paces asteroid waves, and produces GameStateSnapshots for a renderer.

pub mod engine;
pub mod entities;
pub mod registry;
pub mod timer;
pub mod wave;

pub use engine::{SimConfig, SimulationEngine};
pub use registry::{EntityId, Registry};
pub use rockfall_core as core;
pub use timer::Timer;
pub use wave::{WaveConfig, WaveDirector};
