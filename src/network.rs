// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{
    extract_route, find_nearest_node, shortest_paths, Coordinate, Error, Graph, GraphBuilder,
    LocationIndex, NodeId, Route, SnapMetric, Vertex,
};

/// Road network ready for answering route queries: node positions,
/// way geometries and the [Graph] built from them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Network {
    locations: LocationIndex,
    ways: Vec<Vec<NodeId>>,
    graph: Graph,
}

impl Network {
    /// Builds the [Graph] from the provided way geometries.
    ///
    /// Every node referenced by a way must be present in `locations`,
    /// otherwise [Error::NodeNotFound] is returned.
    pub fn new(locations: LocationIndex, ways: Vec<Vec<NodeId>>) -> Result<Self, Error> {
        let mut graph = Graph::default();
        GraphBuilder::new(&mut graph, &locations).add_ways(ways.iter().map(Vec::as_slice))?;
        Ok(Self {
            locations,
            ways,
            graph,
        })
    }

    pub fn locations(&self) -> &LocationIndex {
        &self.locations
    }

    /// Returns an iterator over all way geometries.
    pub fn ways(&self) -> impl Iterator<Item = &[NodeId]> {
        self.ways.iter().map(Vec::as_slice)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Snaps a position to the closest vertex of the graph.
    pub fn snap(&self, position: Coordinate, metric: SnapMetric) -> Result<Vertex, Error> {
        let node_id = find_nearest_node(self.ways(), &self.locations, position, metric)?;
        self.graph.vertex(node_id).ok_or(Error::NodeNotFound(node_id))
    }

    /// Finds the shortest route between the vertices closest to `start` and `end`.
    ///
    /// [Error::NoNodesAvailable] and [Error::Unreachable] are expected outcomes
    /// (see [Error::is_no_route]); other errors indicate inconsistent data.
    pub fn find_route(
        &self,
        start: Coordinate,
        end: Coordinate,
        metric: SnapMetric,
    ) -> Result<Route, Error> {
        let from = self.snap(start, metric)?;
        let to = self.snap(end, metric)?;
        log::debug!(
            "snapped start to node {:?}, end to node {:?}",
            self.graph.node_id(from),
            self.graph.node_id(to)
        );

        let paths = shortest_paths(&self.graph, from, Some(to))?;
        extract_route(&paths, to)
    }

    /// Resolves positions of all vertices along a route.
    pub fn route_coordinates(&self, route: &Route) -> Result<Vec<Coordinate>, Error> {
        route.coordinates(&self.graph, &self.locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple_network() -> Network {
        //  1 ── 2 ── 3        10 ── 11
        //       │
        //       4
        let locations = LocationIndex::from_iter([
            (NodeId(1), Coordinate::new(0.0, 0.0)),
            (NodeId(2), Coordinate::new(0.0, 0.01)),
            (NodeId(3), Coordinate::new(0.0, 0.02)),
            (NodeId(4), Coordinate::new(-0.01, 0.01)),
            (NodeId(10), Coordinate::new(0.0, 1.0)),
            (NodeId(11), Coordinate::new(0.0, 1.01)),
        ]);
        let ways = vec![
            vec![NodeId(1), NodeId(2), NodeId(3)],
            vec![NodeId(2), NodeId(4)],
            vec![NodeId(10), NodeId(11)],
        ];
        Network::new(locations, ways).unwrap()
    }

    #[test]
    fn find_route() {
        let n = simple_network();
        let route = n
            .find_route(
                Coordinate::new(0.001, -0.001),
                Coordinate::new(-0.009, 0.011),
                SnapMetric::Planar,
            )
            .unwrap();

        assert_eq!(
            n.route_coordinates(&route).unwrap(),
            vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(0.0, 0.01),
                Coordinate::new(-0.01, 0.01),
            ]
        );
    }

    #[test]
    fn find_route_same_node() {
        let n = simple_network();
        let route = n
            .find_route(
                Coordinate::new(0.0, 0.019),
                Coordinate::new(0.001, 0.021),
                SnapMetric::Haversine,
            )
            .unwrap();

        assert!(route.is_empty());
        assert_eq!(route.distance(), 0.0);
        assert_eq!(
            n.route_coordinates(&route).unwrap(),
            vec![Coordinate::new(0.0, 0.02)]
        );
    }

    #[test]
    fn find_route_unreachable() {
        let n = simple_network();
        let err = n
            .find_route(
                Coordinate::new(0.0, 0.0),
                Coordinate::new(0.0, 1.0),
                SnapMetric::Planar,
            )
            .unwrap_err();

        assert!(matches!(err, Error::Unreachable { .. }));
        assert!(err.is_no_route());
    }

    #[test]
    fn find_route_no_ways() {
        let n = Network::default();
        let err = n
            .find_route(
                Coordinate::new(0.0, 0.0),
                Coordinate::new(1.0, 1.0),
                SnapMetric::Planar,
            )
            .unwrap_err();

        assert_eq!(err, Error::NoNodesAvailable);
        assert!(err.is_no_route());
    }

    #[test]
    fn missing_location() {
        let locations = LocationIndex::from_iter([(NodeId(1), Coordinate::new(0.0, 0.0))]);
        let ways = vec![vec![NodeId(1), NodeId(2)]];
        assert_eq!(
            Network::new(locations, ways),
            Err(Error::NodeNotFound(NodeId(2)))
        );
        assert!(!Error::NodeNotFound(NodeId(2)).is_no_route());
    }
}
