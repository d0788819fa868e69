// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{earth_distance, planar_distance_squared, Coordinate, Error, LocationIndex, NodeId};

/// Distance function used when snapping a position to the closest way node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SnapMetric {
    /// Squared euclidean distance over raw latitude and longitude degrees.
    ///
    /// Fast, but only an approximation: it ignores the convergence of meridians,
    /// and may pick a sub-optimal node when candidates are far apart or
    /// far from the equator.
    #[default]
    Planar,

    /// Great-circle distance, consistent with edge weights of the [Graph](crate::Graph).
    Haversine,
}

impl SnapMetric {
    /// Computes the distance proxy between two positions.
    /// Values are only comparable between calls with the same metric.
    pub fn distance(self, a: Coordinate, b: Coordinate) -> f64 {
        match self {
            Self::Planar => planar_distance_squared(a, b),
            Self::Haversine => earth_distance(a, b),
        }
    }
}

/// Finds the way node closest to the given position.
///
/// Every node occurrence of every way is checked, so this function is linear
/// in the total length of all ways. On ties, the first encountered node wins.
///
/// Returns [Error::NoNodesAvailable] if there are no way nodes at all, or
/// [Error::NodeNotFound] if a way refers to a node without a known position.
pub fn find_nearest_node<'w, I>(
    ways: I,
    locations: &LocationIndex,
    position: Coordinate,
    metric: SnapMetric,
) -> Result<NodeId, Error>
where
    I: IntoIterator<Item = &'w [NodeId]>,
{
    let mut best: Option<(NodeId, f64)> = None;

    for &node_id in ways.into_iter().flatten() {
        let distance = metric.distance(position, locations.get(node_id)?);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((node_id, distance)),
        }
    }

    best.map(|(node_id, _)| node_id).ok_or(Error::NoNodesAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: NodeId = NodeId(1);
    const B: NodeId = NodeId(2);
    const C: NodeId = NodeId(3);

    fn locations() -> LocationIndex {
        LocationIndex::from_iter([
            (A, Coordinate::new(0.0, 0.0)),
            (B, Coordinate::new(1.0, 0.0)),
            (C, Coordinate::new(2.0, 0.0)),
        ])
    }

    fn nearest(
        ways: &[&[NodeId]],
        lat: f64,
        lon: f64,
        metric: SnapMetric,
    ) -> Result<NodeId, Error> {
        find_nearest_node(
            ways.iter().copied(),
            &locations(),
            Coordinate::new(lat, lon),
            metric,
        )
    }

    #[test]
    fn planar() {
        let ways: &[&[NodeId]] = &[&[A, B, C]];

        // 0.4² = 0.16 < 0.6² = 0.36
        assert_eq!(nearest(ways, 0.4, 0.0, SnapMetric::Planar), Ok(A));
        assert_eq!(nearest(ways, 0.6, 0.0, SnapMetric::Planar), Ok(B));
        assert_eq!(nearest(ways, 1.9, 0.3, SnapMetric::Planar), Ok(C));
        assert_eq!(nearest(ways, -5.0, 0.0, SnapMetric::Planar), Ok(A));
    }

    #[test]
    fn haversine() {
        let ways: &[&[NodeId]] = &[&[A, B, C]];
        assert_eq!(nearest(ways, 0.4, 0.0, SnapMetric::Haversine), Ok(A));
        assert_eq!(nearest(ways, 1.6, 0.1, SnapMetric::Haversine), Ok(C));
    }

    #[test]
    fn ties_go_to_first_encountered() {
        assert_eq!(nearest(&[&[A, C]], 1.0, 0.0, SnapMetric::Planar), Ok(A));
        assert_eq!(nearest(&[&[C], &[A]], 1.0, 0.0, SnapMetric::Planar), Ok(C));
    }

    #[test]
    fn repeated_occurrences() {
        let ways: &[&[NodeId]] = &[&[A, B], &[B, C], &[C]];
        assert_eq!(nearest(ways, 1.1, 0.0, SnapMetric::Planar), Ok(B));
    }

    #[test]
    fn no_nodes() {
        assert_eq!(nearest(&[], 0.0, 0.0, SnapMetric::Planar), Err(Error::NoNodesAvailable));
        assert_eq!(
            nearest(&[&[], &[]], 0.0, 0.0, SnapMetric::Planar),
            Err(Error::NoNodesAvailable)
        );
    }

    #[test]
    fn unknown_node() {
        assert_eq!(
            nearest(&[&[A, NodeId(42)]], 0.0, 0.0, SnapMetric::Planar),
            Err(Error::NodeNotFound(NodeId(42)))
        );
    }
}
