//! Per-step aggregates and end-of-run summaries.

use serde::{Deserialize, Serialize};

use super::state::HealthState;

/// Aggregate state counts after one simulation step.
///
/// Append-only: one record per step, never mutated after creation. The
/// four counts always sum to the population size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Zero-based step index
    pub step: usize,
    /// Individuals currently susceptible
    pub susceptible: usize,
    /// Individuals currently infected
    pub infected: usize,
    /// Individuals currently recovered
    pub recovered: usize,
    /// Individuals deceased so far
    pub deceased: usize,
}

impl StepRecord {
    /// Tallies a full state snapshot into one record for `step`.
    pub fn tally(step: usize, states: &[HealthState]) -> Self {
        let mut record = Self {
            step,
            susceptible: 0,
            infected: 0,
            recovered: 0,
            deceased: 0,
        };

        for state in states {
            match state {
                HealthState::Susceptible => record.susceptible += 1,
                HealthState::Infected => record.infected += 1,
                HealthState::Recovered => record.recovered += 1,
                HealthState::Deceased => record.deceased += 1,
            }
        }

        record
    }

    /// Total population covered by this record.
    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.recovered + self.deceased
    }

    /// Renders the record as one console report line.
    pub fn console_line(&self) -> String {
        format!(
            "t = {:5} | S = {:5}; I = {:5}; R = {:5}; D = {:5}",
            self.step, self.susceptible, self.infected, self.recovered, self.deceased
        )
    }
}

/// Digest of a completed simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Population size
    pub node_count: usize,
    /// Steps executed
    pub steps: usize,
    /// Counts after the final step
    pub final_counts: StepRecord,
    /// Highest infected count observed
    pub peak_infected: usize,
    /// Step at which the infected count peaked
    pub peak_infected_step: usize,
    /// First step with zero infected individuals, if the infection died out
    pub extinct_at: Option<usize>,
}

impl RunSummary {
    /// Builds a summary over an ordered run history.
    ///
    /// `fallback` stands in for the final counts when no steps were run.
    pub fn from_history(node_count: usize, history: &[StepRecord], fallback: StepRecord) -> Self {
        let final_counts = history.last().copied().unwrap_or(fallback);
        let peak = history
            .iter()
            .max_by_key(|record| record.infected)
            .copied()
            .unwrap_or(fallback);

        Self {
            node_count,
            steps: history.len(),
            final_counts,
            peak_infected: peak.infected,
            peak_infected_step: peak.step,
            extinct_at: history
                .iter()
                .find(|record| record.infected == 0)
                .map(|record| record.step),
        }
    }

    /// Generates human-readable summary.
    pub fn render(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Run summary\n");
        summary.push_str(&format!("  Population: {}\n", self.node_count));
        summary.push_str(&format!("  Steps: {}\n", self.steps));
        summary.push_str(&format!(
            "  Final counts: S = {}; I = {}; R = {}; D = {}\n",
            self.final_counts.susceptible,
            self.final_counts.infected,
            self.final_counts.recovered,
            self.final_counts.deceased
        ));
        summary.push_str(&format!(
            "  Peak infected: {} (step {})\n",
            self.peak_infected, self.peak_infected_step
        ));

        match self.extinct_at {
            Some(step) => summary.push_str(&format!("  Infection died out at step {step}\n")),
            None => summary.push_str("  Infection still active at end of run\n"),
        }

        summary
    }
}
