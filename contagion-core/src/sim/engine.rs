//! Core SIRDS transition engine.

use thiserror::Error;
use tracing::{debug, info};

use crate::config::SimulationParameters;
use crate::graph::{ContactNetwork, NetworkError, NodeId};

use super::report::{RunSummary, StepRecord};
use super::rng::RandomSource;
use super::state::HealthState;

/// Errors raised while assembling a simulation.
///
/// Once construction succeeds, stepping has no failure modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Contact graph has no nodes, so no initial infection can be seeded
    #[error("contact graph is empty")]
    EmptyGraph,
}

/// Discrete-time SIRDS simulator over a fixed contact network.
///
/// Owns the current per-node snapshot and the aggregate history. Each call
/// to [`step`](Self::step) computes the entire next snapshot from the
/// current one — no node ever observes another node's same-step transition
/// — then swaps it in and appends one [`StepRecord`] to the history.
pub struct EpidemicSimulator<R: RandomSource> {
    network: ContactNetwork,
    parameters: SimulationParameters,
    rng: R,
    states: Vec<HealthState>,
    history: Vec<StepRecord>,
}

impl<R: RandomSource> EpidemicSimulator<R> {
    /// Creates a simulator with patient zero drawn uniformly from all nodes.
    ///
    /// Every other node starts susceptible. Parameters are expected to have
    /// passed [`SimulationParameters::validate`] beforehand.
    ///
    /// # Errors
    ///
    /// - `SimulationError::EmptyGraph` - The graph has zero nodes
    pub fn new(
        network: ContactNetwork,
        parameters: SimulationParameters,
        mut rng: R,
    ) -> Result<Self, SimulationError> {
        if network.is_empty() {
            return Err(SimulationError::EmptyGraph);
        }

        let patient_zero = NodeId::new(rng.pick_index(network.node_count()));
        Ok(Self::seeded(network, parameters, rng, patient_zero))
    }

    /// Creates a simulator with a caller-chosen patient zero.
    ///
    /// # Errors
    ///
    /// - `NetworkError::UnknownNode` - `patient_zero` is not in the graph
    pub fn with_patient_zero(
        network: ContactNetwork,
        parameters: SimulationParameters,
        rng: R,
        patient_zero: NodeId,
    ) -> Result<Self, NetworkError> {
        if !network.contains(patient_zero) {
            return Err(NetworkError::UnknownNode { node: patient_zero });
        }

        Ok(Self::seeded(network, parameters, rng, patient_zero))
    }

    fn seeded(
        network: ContactNetwork,
        parameters: SimulationParameters,
        rng: R,
        patient_zero: NodeId,
    ) -> Self {
        let mut states = vec![HealthState::Susceptible; network.node_count()];
        states[patient_zero.index()] = HealthState::Infected;

        info!(
            %patient_zero,
            nodes = network.node_count(),
            edges = network.edge_count(),
            "seeded initial infection"
        );

        Self {
            network,
            parameters,
            rng,
            states,
            history: Vec::new(),
        }
    }

    /// Advances the simulation by one synchronized step.
    ///
    /// Every node's next state is decided against the snapshot taken at the
    /// start of the step:
    ///
    /// - Susceptible with k > 0 infected neighbors: one draw, infected with
    ///   probability `1 - (1 - p_infect)^k`; no draw when k = 0.
    /// - Infected: one draw `r`; deceased if `r < p_deceased`, else
    ///   recovered if `r < p_deceased + p_recover`, else still infected.
    /// - Recovered: one draw, susceptible again with probability
    ///   `p_reinfect`.
    /// - Deceased: absorbing, no draw.
    ///
    /// Nodes are visited in ascending id order, so a seeded run consumes
    /// draws in a reproducible sequence.
    pub fn step(&mut self) -> StepRecord {
        let mut next = self.states.clone();

        for node in self.network.nodes() {
            let index = node.index();
            let current = self.states[index];

            match current {
                HealthState::Susceptible => {
                    let infected_neighbors = self.infected_neighbor_count(node);
                    if infected_neighbors > 0 {
                        let pressure = self.parameters.infection_probability(infected_neighbors);
                        if self.rng.next_unit() < pressure {
                            next[index] = HealthState::Infected;
                        }
                    }
                }
                HealthState::Infected => {
                    let draw = self.rng.next_unit();
                    if draw < self.parameters.p_deceased {
                        next[index] = HealthState::Deceased;
                    } else if draw < self.parameters.p_deceased + self.parameters.p_recover {
                        next[index] = HealthState::Recovered;
                    }
                }
                HealthState::Recovered => {
                    if self.rng.next_unit() < self.parameters.p_reinfect {
                        next[index] = HealthState::Susceptible;
                    }
                }
                HealthState::Deceased => {}
            }
        }

        self.states = next;

        let record = StepRecord::tally(self.history.len(), &self.states);
        debug!(
            step = record.step,
            susceptible = record.susceptible,
            infected = record.infected,
            recovered = record.recovered,
            deceased = record.deceased,
            "step complete"
        );
        self.history.push(record);
        record
    }

    /// Runs exactly `steps` steps and returns the full ordered history.
    pub fn run(&mut self, steps: usize) -> &[StepRecord] {
        for _ in 0..steps {
            self.step();
        }
        &self.history
    }

    /// Aggregate records of every step taken so far, oldest first.
    pub fn history(&self) -> &[StepRecord] {
        &self.history
    }

    /// Number of steps taken so far.
    pub fn steps_taken(&self) -> usize {
        self.history.len()
    }

    /// Current snapshot, indexed by node id.
    pub fn node_states(&self) -> &[HealthState] {
        &self.states
    }

    /// Current state of a single node.
    ///
    /// # Errors
    ///
    /// - `NetworkError::UnknownNode` - `node` is not in the graph
    pub fn state_of(&self, node: NodeId) -> Result<HealthState, NetworkError> {
        self.states
            .get(node.index())
            .copied()
            .ok_or(NetworkError::UnknownNode { node })
    }

    /// The contact network this simulation runs over.
    pub fn network(&self) -> &ContactNetwork {
        &self.network
    }

    /// The transition probabilities in effect.
    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    /// Digest of the run so far.
    pub fn summary(&self) -> RunSummary {
        let fallback = StepRecord::tally(0, &self.states);
        RunSummary::from_history(self.network.node_count(), &self.history, fallback)
    }

    fn infected_neighbor_count(&self, node: NodeId) -> usize {
        // nodes() only yields members, so the lookup cannot fail
        self.network
            .neighbors(node)
            .unwrap_or(&[])
            .iter()
            .filter(|neighbor| self.states[neighbor.index()].is_infected())
            .count()
    }
}
