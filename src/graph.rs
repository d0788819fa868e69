// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::hash_map::{Entry, HashMap};

use crate::NodeId;

/// Dense handle of a node in a [Graph].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex(pub usize);

impl Vertex {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Represents a connection from a specific [Vertex] to `to`.
///
/// `weight` is the great-circle distance between the two nodes, in kilometers,
/// and is always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: Vertex,
    pub weight: f64,
}

/// Undirected, weighted road network.
///
/// Vertices are stored in an arena and are never removed. Every undirected edge
/// is kept in the adjacency lists of both its ends. Multiple edges between the same
/// pair of vertices are allowed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Graph {
    node_ids: Vec<NodeId>,
    vertices: HashMap<NodeId, Vertex>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    /// Returns the number of vertices in the graph.
    pub fn len(&self) -> usize {
        self.node_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    /// Returns the number of undirected edges in the graph, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns an iterator over all vertices in the graph.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        (0..self.node_ids.len()).map(Vertex)
    }

    pub fn contains(&self, v: Vertex) -> bool {
        v.index() < self.node_ids.len()
    }

    /// Returns the [NodeId] represented by a vertex.
    pub fn node_id(&self, v: Vertex) -> Option<NodeId> {
        self.node_ids.get(v.index()).copied()
    }

    /// Returns the vertex representing a node, if the node is a part of the graph.
    pub fn vertex(&self, id: NodeId) -> Option<Vertex> {
        self.vertices.get(&id).copied()
    }

    /// Returns the vertex representing a node, creating it if necessary.
    pub fn add_vertex(&mut self, id: NodeId) -> Vertex {
        match self.vertices.entry(id) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                let v = Vertex(self.node_ids.len());
                self.node_ids.push(id);
                self.adjacency.push(Vec::default());
                e.insert(v);
                v
            }
        }
    }

    /// Gets all [Edges](Edge) incident to a vertex.
    pub fn get_edges(&self, v: Vertex) -> &[Edge] {
        self.adjacency
            .get(v.index())
            .map(|e| e.as_slice())
            .unwrap_or_default()
    }

    /// Gets the weight of the lightest edge between two vertices.
    /// If such an edge doesn't exist, returns [f64::INFINITY].
    pub fn get_edge(&self, from: Vertex, to: Vertex) -> f64 {
        self.get_edges(from)
            .iter()
            .filter(|e| e.to == to)
            .map(|e| e.weight)
            .fold(f64::INFINITY, f64::min)
    }

    /// Adds an undirected edge between two existing vertices.
    pub fn add_edge(&mut self, a: Vertex, b: Vertex, weight: f64) {
        assert!(self.contains(a) && self.contains(b));
        debug_assert!(weight.is_finite() && weight >= 0.0);

        self.adjacency[a.index()].push(Edge { to: b, weight });
        if a != b {
            self.adjacency[b.index()].push(Edge { to: a, weight });
        }
        self.edge_count += 1;
    }
}
