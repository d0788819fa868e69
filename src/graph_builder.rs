// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{earth_distance, Error, Graph, LocationIndex, NodeId};

/// Helper object used for converting way geometries into a [Graph].
///
/// Every pair of consecutive way nodes becomes an undirected edge weighted
/// by the [earth_distance] between them. Nodes shared between ways are
/// represented by a single [Vertex](crate::Vertex).
pub struct GraphBuilder<'a> {
    g: &'a mut Graph,
    locations: &'a LocationIndex,
    ways: usize,
}

impl<'a> GraphBuilder<'a> {
    /// Creates a new graph builder, adding edges to `g`. All positions
    /// are resolved through `locations`.
    pub fn new(g: &'a mut Graph, locations: &'a LocationIndex) -> Self {
        Self {
            g,
            locations,
            ways: 0,
        }
    }

    /// Adds all provided ways.
    ///
    /// Stops at the first node without a known position - the graph
    /// should not be used after that, as it would be missing edges.
    pub fn add_ways<'w, I>(&mut self, ways: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = &'w [NodeId]>,
    {
        for nodes in ways {
            self.add_way(nodes)?;
        }

        log::debug!(
            "graph built from {} ways: {} vertices, {} edges",
            self.ways,
            self.g.len(),
            self.g.edge_count()
        );
        Ok(())
    }

    /// Adds a single way, given as an ordered sequence of its nodes.
    pub fn add_way(&mut self, nodes: &[NodeId]) -> Result<(), Error> {
        self.ways += 1;

        if let [only] = nodes {
            self.locations.get(*only)?;
            self.g.add_vertex(*only);
            return Ok(());
        }

        for pair in nodes.windows(2) {
            let left = self.locations.get(pair[0])?;
            let right = self.locations.get(pair[1])?;

            let u = self.g.add_vertex(pair[0]);
            let v = self.g.add_vertex(pair[1]);
            self.g.add_edge(u, v, earth_distance(left, right));
        }

        Ok(())
    }
}
