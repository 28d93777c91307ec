//! Random contact-network construction.

use crate::sim::RandomSource;

use super::{ContactNetwork, NodeId};

impl ContactNetwork {
    /// Builds an Erdős–Rényi G(n, p) contact network.
    ///
    /// Every unordered node pair receives an edge independently with
    /// probability `edge_probability`, one uniform draw per pair. The draw
    /// order is ascending by pair, so the same source state always yields
    /// the same graph.
    pub fn random(
        node_count: usize,
        edge_probability: f64,
        rng: &mut impl RandomSource,
    ) -> Self {
        let mut adjacency = vec![Vec::new(); node_count];
        let mut edge_count = 0;

        for u in 0..node_count {
            for v in (u + 1)..node_count {
                if rng.next_unit() < edge_probability {
                    adjacency[u].push(NodeId::new(v));
                    adjacency[v].push(NodeId::new(u));
                    edge_count += 1;
                }
            }
        }

        Self {
            adjacency,
            edge_count,
        }
    }
}
