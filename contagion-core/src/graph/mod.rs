//! Fixed undirected contact networks.
//!
//! A [`ContactNetwork`] is built once, before simulation starts, and is
//! read-only thereafter: the engine only ever enumerates nodes and their
//! neighbors.

pub mod random;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by contact-network lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// Node is not a member of this graph
    #[error("unknown node: {node}")]
    UnknownNode {
        /// The rejected node identity
        node: NodeId,
    },
}

/// Opaque identity of one individual in the contact network.
///
/// Carries no meaning beyond distinguishing individuals; the set of
/// identities is fixed for the lifetime of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Creates a node identity from its index in the population.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying population index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable undirected contact graph over a fixed node set.
///
/// Stored as an adjacency list indexed by node. Adjacency is symmetric:
/// `u` appears in `neighbors(v)` iff `v` appears in `neighbors(u)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactNetwork {
    adjacency: Vec<Vec<NodeId>>,
    edge_count: usize,
}

impl ContactNetwork {
    /// Builds a network from an explicit edge list.
    ///
    /// Self-loops carry no contact and are skipped, as are duplicate edges.
    ///
    /// # Errors
    ///
    /// - `NetworkError::UnknownNode` - An edge endpoint is outside `0..node_count`
    pub fn from_edges(
        node_count: usize,
        edges: &[(NodeId, NodeId)],
    ) -> Result<Self, NetworkError> {
        let mut adjacency = vec![Vec::new(); node_count];
        let mut edge_count = 0;

        for &(u, v) in edges {
            for endpoint in [u, v] {
                if endpoint.index() >= node_count {
                    return Err(NetworkError::UnknownNode { node: endpoint });
                }
            }
            if u == v || adjacency[u.index()].contains(&v) {
                continue;
            }
            adjacency[u.index()].push(v);
            adjacency[v.index()].push(u);
            edge_count += 1;
        }

        Ok(Self {
            adjacency,
            edge_count,
        })
    }

    /// Number of individuals in the network.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the network has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected contact edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether `node` is a member of this network.
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.adjacency.len()
    }

    /// Iterates over every node identity in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + use<> {
        (0..self.adjacency.len()).map(NodeId::new)
    }

    /// Returns the contacts adjacent to `node`.
    ///
    /// # Errors
    ///
    /// - `NetworkError::UnknownNode` - `node` is not a member of the graph
    pub fn neighbors(&self, node: NodeId) -> Result<&[NodeId], NetworkError> {
        self.adjacency
            .get(node.index())
            .map(Vec::as_slice)
            .ok_or(NetworkError::UnknownNode { node })
    }

    /// Returns the number of contacts adjacent to `node`.
    ///
    /// # Errors
    ///
    /// - `NetworkError::UnknownNode` - `node` is not a member of the graph
    pub fn degree(&self, node: NodeId) -> Result<usize, NetworkError> {
        self.neighbors(node).map(<[NodeId]>::len)
    }
}
