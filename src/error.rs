// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{NodeId, Vertex};

/// Error conditions which may occur when building a [Graph](crate::Graph)
/// or searching for a route over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A way refers to a node without a known position.
    /// This means the map data is inconsistent.
    #[error("node {0} has no known location")]
    NodeNotFound(NodeId),

    /// There are no way nodes to snap a position to.
    #[error("no road data available")]
    NoNodesAvailable,

    /// There is no connection between the two vertices.
    #[error("no route from {from} to {to}")]
    Unreachable { from: Vertex, to: Vertex },

    /// The vertex does not exist in the graph.
    #[error("invalid vertex: {0}")]
    InvalidVertex(Vertex),
}

impl Error {
    /// Returns true for errors which mean "no route exists" rather than
    /// a failure of the routing machinery.
    pub fn is_no_route(&self) -> bool {
        matches!(self, Self::NoNodesAvailable | Self::Unreachable { .. })
    }
}
