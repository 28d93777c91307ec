//! Centralized configuration for Contagion.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase. Defaults carry the
//! reference configuration so a bare `ContagionConfig::default()` runs the
//! standard scenario.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by configuration validation.
///
/// Produced before a simulation is assembled; never mid-run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// Probability value outside the closed unit interval
    #[error("{name} must lie in [0, 1], got {value}")]
    ProbabilityOutOfRange {
        /// Name of the offending parameter
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Deceased and recovered outcomes together claim more than the full
    /// probability mass, leaving no interval for staying infected
    #[error("p_deceased + p_recover must not exceed 1, got {p_deceased} + {p_recover}")]
    OutcomeMassExceeded {
        /// Configured probability of death per step
        p_deceased: f64,
        /// Configured probability of recovery per step
        p_recover: f64,
    },
}

/// Central configuration for a simulation run.
///
/// Groups related settings into logical sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContagionConfig {
    pub graph: GraphConfig,
    pub parameters: SimulationParameters,
    pub run: RunConfig,
}

impl ContagionConfig {
    /// Validates every section before any simulation state is built.
    ///
    /// # Errors
    ///
    /// - `ParameterError::ProbabilityOutOfRange` - Any probability outside [0, 1]
    /// - `ParameterError::OutcomeMassExceeded` - `p_deceased + p_recover > 1`
    pub fn validate(&self) -> Result<(), ParameterError> {
        self.graph.validate()?;
        self.parameters.validate()
    }
}

/// Contact-network generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Number of individuals in the population
    pub node_count: usize,
    /// Independent probability of a contact edge between any two individuals
    pub edge_probability: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            node_count: 200,
            edge_probability: 0.1,
        }
    }
}

impl GraphConfig {
    /// Validates the edge probability.
    ///
    /// # Errors
    ///
    /// - `ParameterError::ProbabilityOutOfRange` - `edge_probability` outside [0, 1]
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_probability("edge_probability", self.edge_probability)
    }
}

/// Per-step transition probabilities of the SIRDS model.
///
/// Valid state transitions: S → I, I → R, I → D, R → S. Deceased is
/// absorbing. All four values are per-step probabilities in [0, 1], and
/// `p_deceased + p_recover` must not exceed 1 (the remaining mass is
/// "stays infected").
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Per-infected-neighbor transmission probability
    pub p_infect: f64,
    /// Probability an infected individual recovers in a given step
    pub p_recover: f64,
    /// Probability an infected individual dies in a given step
    pub p_deceased: f64,
    /// Probability a recovered individual becomes susceptible again
    pub p_reinfect: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            p_infect: 0.25,
            p_recover: 0.1,
            p_deceased: 0.02,
            p_reinfect: 0.05,
        }
    }
}

impl SimulationParameters {
    /// Validates all four probabilities and the infected-outcome partition.
    ///
    /// # Errors
    ///
    /// - `ParameterError::ProbabilityOutOfRange` - Any probability outside [0, 1]
    /// - `ParameterError::OutcomeMassExceeded` - `p_deceased + p_recover > 1`
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_probability("p_infect", self.p_infect)?;
        check_probability("p_recover", self.p_recover)?;
        check_probability("p_deceased", self.p_deceased)?;
        check_probability("p_reinfect", self.p_reinfect)?;

        if self.p_deceased + self.p_recover > 1.0 {
            return Err(ParameterError::OutcomeMassExceeded {
                p_deceased: self.p_deceased,
                p_recover: self.p_recover,
            });
        }

        Ok(())
    }

    /// Probability that a susceptible individual with `infected_neighbors`
    /// infected contacts is infected this step.
    ///
    /// Each infected neighbor is an independent Bernoulli(`p_infect`)
    /// transmission trial; this is the chance that at least one succeeds,
    /// `1 - (1 - p_infect)^k`. Approaches but never reaches 1 for large k.
    pub fn infection_probability(&self, infected_neighbors: usize) -> f64 {
        1.0 - (1.0 - self.p_infect).powf(infected_neighbors as f64)
    }
}

/// Run-length and reproducibility settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of synchronized time steps to simulate
    pub steps: usize,
    /// RNG seed; `None` means derive one from entropy and report it
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps: 30,
            seed: None,
        }
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ParameterError::ProbabilityOutOfRange { name, value })
    }
}
