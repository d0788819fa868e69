// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{Coordinate, Error, Graph, LocationIndex, ShortestPaths, Vertex};

/// Shortest route between two vertices of a [Graph].
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    vertices: Vec<Vertex>,
    distance: f64,
}

impl Route {
    /// Returns all vertices along the route, from the source to the target (inclusive).
    /// There is always at least one vertex.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the total length of the route, in kilometers.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the number of edges along the route.
    pub fn len(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Returns true if the source and target are the same vertex.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over consecutive `(from, to)` vertex pairs along the route.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Resolves positions of all vertices along the route, from the source to the target.
    pub fn coordinates(
        &self,
        g: &Graph,
        locations: &LocationIndex,
    ) -> Result<Vec<Coordinate>, Error> {
        self.vertices
            .iter()
            .map(|&v| {
                let node_id = g.node_id(v).ok_or(Error::InvalidVertex(v))?;
                locations.get(node_id)
            })
            .collect()
    }
}

/// Reconstructs the route from the search source to `target`
/// by following the predecessor links.
///
/// Returns [Error::Unreachable] if there is no connection between the source and target.
/// If the target is the source, the route has no edges and zero distance.
pub fn extract_route(paths: &ShortestPaths, target: Vertex) -> Result<Route, Error> {
    let source = paths.source();
    if target == source {
        return Ok(Route {
            vertices: vec![source],
            distance: 0.0,
        });
    }

    let unreachable = Error::Unreachable {
        from: source,
        to: target,
    };

    let mut vertices = vec![target];
    let mut last = target;
    while last != source {
        // Every vertex appears at most once on a path
        if vertices.len() > paths.len() {
            return Err(unreachable);
        }

        last = paths.predecessor(last).ok_or(unreachable)?;
        vertices.push(last);
    }

    vertices.reverse();
    Ok(Route {
        vertices,
        distance: paths.distance(target),
    })
}
