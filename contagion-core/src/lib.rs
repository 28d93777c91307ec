//! Contagion Core - SIRDS epidemic simulation over contact networks
//!
//! This crate provides the fundamental building blocks for discrete-time
//! stochastic epidemic simulation: contact graph representation, seeded
//! randomness, the per-step transition engine, and aggregate reporting.

pub mod config;
pub mod graph;
pub mod sim;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::{ContagionConfig, GraphConfig, ParameterError, RunConfig, SimulationParameters};
pub use graph::{ContactNetwork, NetworkError, NodeId};
pub use sim::{
    DeterministicRng, EpidemicSimulator, HealthState, RandomSource, RunSummary, SimulationError,
    StepRecord,
};

/// Core errors that can bubble up from any Contagion subsystem.
///
/// High-level error types representing failures in core functionality.
#[derive(Debug, thiserror::Error)]
pub enum ContagionError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Parameter error: {0}")]
    Parameters(#[from] ParameterError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ContagionError>;
