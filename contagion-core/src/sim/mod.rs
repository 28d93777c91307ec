//! The SIRDS simulation engine: health states, randomness, transitions,
//! and per-step aggregate reporting.

pub mod engine;
pub mod report;
pub mod rng;
pub mod state;

pub use engine::{EpidemicSimulator, SimulationError};
pub use report::{RunSummary, StepRecord};
pub use rng::{DeterministicRng, FixedRandomSource, RandomSource, ScriptedRandomSource};
pub use state::HealthState;
