//! Per-node health states of the SIRDS model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Health state of a single individual at one time step.
///
/// Valid transitions: S → I, I → R, I → D, R → S. `Deceased` is absorbing:
/// once assigned, the individual never changes state again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthState {
    Susceptible,
    Infected,
    Recovered,
    Deceased,
}

impl HealthState {
    pub fn is_susceptible(self) -> bool {
        matches!(self, Self::Susceptible)
    }

    pub fn is_infected(self) -> bool {
        matches!(self, Self::Infected)
    }

    pub fn is_recovered(self) -> bool {
        matches!(self, Self::Recovered)
    }

    /// Whether this state admits no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Deceased)
    }

    /// Single-letter code used in console reports.
    pub fn code(self) -> char {
        match self {
            Self::Susceptible => 'S',
            Self::Infected => 'I',
            Self::Recovered => 'R',
            Self::Deceased => 'D',
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
