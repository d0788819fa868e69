// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Shortest road paths between two coordinates over [OpenStreetMap](https://www.openstreetmap.org/) data.
//!
//! Every OSM way is converted into edges of an undirected graph, weighted by the
//! great-circle distance between consecutive nodes. Query coordinates are snapped
//! to the closest way node, and Dijkstra's algorithm finds the shortest route
//! between the two snapped nodes.
//!
//! # Example
//!
//! ```no_run
//! let options = osmpath::osm::Options::default();
//! let network = osmpath::osm::load_network_from_file(&options, "path/to/monaco.osm")
//!     .expect("failed to load monaco.osm");
//!
//! let route = network
//!     .find_route(
//!         osmpath::Coordinate::new(43.7384, 7.4246),
//!         osmpath::Coordinate::new(43.7478, 7.4323),
//!         osmpath::SnapMetric::Planar,
//!     )
//!     .expect("failed to find route");
//!
//! println!("Route: {:?}", route.coordinates(network.graph(), network.locations()));
//! ```

mod dijkstra;
mod distance;
mod error;
mod graph;
mod graph_builder;
mod location;
mod nearest;
mod network;
pub mod osm;
mod route;

pub use dijkstra::{shortest_paths, ShortestPaths};
pub use distance::{earth_distance, planar_distance_squared};
pub use error::Error;
pub use graph::{Edge, Graph, Vertex};
pub use graph_builder::GraphBuilder;
pub use location::LocationIndex;
pub use nearest::{find_nearest_node, SnapMetric};
pub use network::Network;
pub use route::{extract_route, Route};

/// Identifier of an OpenStreetMap node.
///
/// OSM ids are converted into their absolute value, so that
/// negative ids of not-yet-uploaded features (as produced by editors like JOSM)
/// are still usable. Zero is never a valid id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Converts a raw (possibly negative) OSM id into a [NodeId].
    /// Returns `None` for zero.
    pub fn from_osm(id: i64) -> Option<Self> {
        match id.unsigned_abs() {
            0 => None,
            id => Some(Self(id)),
        }
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A latitude-longitude position, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns true if both latitude and longitude are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_from_osm() {
        assert_eq!(NodeId::from_osm(42), Some(NodeId(42)));
        assert_eq!(NodeId::from_osm(-42), Some(NodeId(42)));
        assert_eq!(NodeId::from_osm(0), None);
        assert_eq!(NodeId::from_osm(i64::MIN), Some(NodeId(1 << 63)));
    }

    #[test]
    fn coordinate_is_finite() {
        assert!(Coordinate::new(52.23, 21.01).is_finite());
        assert!(!Coordinate::new(f64::NAN, 21.01).is_finite());
        assert!(!Coordinate::new(52.23, f64::INFINITY).is_finite());
    }
}
