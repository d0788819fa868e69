// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::BinaryHeap;

use crate::{Edge, Error, Graph, Vertex};

#[derive(Debug, Clone, Copy)]
struct QueueItem {
    at: Vertex,
    distance: f64,
}

impl PartialEq for QueueItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for QueueItem {}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueItem {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // NOTE: We revert the order of comparison,
        // as lower distances are considered better ("higher"),
        // and Rust's BinaryHeap is a max-heap.
        other.distance.total_cmp(&self.distance)
    }
}

/// Result of a single-source shortest path search over a [Graph].
///
/// Distances and predecessors are final for every settled vertex. If the search
/// was stopped early (after settling its target), other vertices may only have
/// tentative values.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: Vertex,
    distances: Vec<f64>,
    predecessors: Vec<Option<Vertex>>,
    settled: Vec<bool>,
}

impl ShortestPaths {
    /// Returns the vertex from which the search has started.
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Returns the number of vertices covered by the search.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Returns the shortest known distance from the source, or [f64::INFINITY]
    /// if the vertex was not reached.
    pub fn distance(&self, v: Vertex) -> f64 {
        self.distances
            .get(v.index())
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// Returns the vertex preceding `v` on the shortest path from the source.
    /// `None` for the source itself and for vertices which were not reached.
    pub fn predecessor(&self, v: Vertex) -> Option<Vertex> {
        self.predecessors.get(v.index()).copied().flatten()
    }

    /// Returns true if the distance to `v` is known to be final.
    pub fn is_settled(&self, v: Vertex) -> bool {
        self.settled.get(v.index()).copied().unwrap_or(false)
    }
}

/// Uses [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// to find shortest paths from `source` to other vertices of the graph.
///
/// If `target` is provided, the search stops as soon as the target is settled.
/// Otherwise, the whole connected component of `source` is explored.
///
/// Returns [Error::InvalidVertex] if `source` or `target` don't exist in the graph.
pub fn shortest_paths(
    g: &Graph,
    source: Vertex,
    target: Option<Vertex>,
) -> Result<ShortestPaths, Error> {
    if !g.contains(source) {
        return Err(Error::InvalidVertex(source));
    }
    if let Some(target) = target.filter(|&t| !g.contains(t)) {
        return Err(Error::InvalidVertex(target));
    }

    let mut paths = ShortestPaths {
        source,
        distances: vec![f64::INFINITY; g.len()],
        predecessors: vec![None; g.len()],
        settled: vec![false; g.len()],
    };
    let mut queue: BinaryHeap<QueueItem> = BinaryHeap::default();
    let mut steps: usize = 0;

    paths.distances[source.index()] = 0.0;
    queue.push(QueueItem {
        at: source,
        distance: 0.0,
    });

    while let Some(item) = queue.pop() {
        // Contrary to the textbook definition, the queue might hold
        // multiple items for the same vertex - only the first one counts.
        if paths.settled[item.at.index()] {
            continue;
        }
        paths.settled[item.at.index()] = true;
        steps += 1;

        if Some(item.at) == target {
            break;
        }

        for &Edge {
            to: neighbor,
            weight,
        } in g.get_edges(item.at)
        {
            if paths.settled[neighbor.index()] {
                continue;
            }

            let neighbor_distance = item.distance + weight;
            if neighbor_distance < paths.distances[neighbor.index()] {
                paths.distances[neighbor.index()] = neighbor_distance;
                paths.predecessors[neighbor.index()] = Some(item.at);
                queue.push(QueueItem {
                    at: neighbor,
                    distance: neighbor_distance,
                });
            }
        }
    }

    log::debug!("dijkstra from {}: settled {} vertices", source, steps);
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeId;

    /// Builds the following graph, with weights in brackets:
    ///
    /// ```text
    /// 0 ─[1]─ 1 ─[1]─ 2
    ///  \             /
    ///   └────[5]────┘
    ///
    /// 3 ─[1]─ 4
    /// ```
    fn simple_graph() -> Graph {
        let mut g = Graph::default();
        let v: Vec<Vertex> = (1..=5).map(|id| g.add_vertex(NodeId(id))).collect();
        g.add_edge(v[0], v[1], 1.0);
        g.add_edge(v[1], v[2], 1.0);
        g.add_edge(v[0], v[2], 5.0);
        g.add_edge(v[3], v[4], 1.0);
        g
    }

    #[test]
    fn full_search() {
        let g = simple_graph();
        let paths = shortest_paths(&g, Vertex(0), None).unwrap();

        assert_eq!(paths.source(), Vertex(0));
        assert_eq!(paths.len(), 5);

        assert_eq!(paths.distance(Vertex(0)), 0.0);
        assert_eq!(paths.distance(Vertex(1)), 1.0);
        assert_eq!(paths.distance(Vertex(2)), 2.0);
        assert!(paths.distance(Vertex(3)).is_infinite());
        assert!(paths.distance(Vertex(4)).is_infinite());

        assert_eq!(paths.predecessor(Vertex(0)), None);
        assert_eq!(paths.predecessor(Vertex(1)), Some(Vertex(0)));
        assert_eq!(paths.predecessor(Vertex(2)), Some(Vertex(1)));
        assert_eq!(paths.predecessor(Vertex(3)), None);

        assert!(paths.is_settled(Vertex(2)));
        assert!(!paths.is_settled(Vertex(3)));
    }

    #[test]
    fn early_exit() {
        let g = simple_graph();
        let paths = shortest_paths(&g, Vertex(0), Some(Vertex(1))).unwrap();

        assert!(paths.is_settled(Vertex(1)));
        assert_eq!(paths.distance(Vertex(1)), 1.0);
        assert!(!paths.is_settled(Vertex(2)));
    }

    #[test]
    fn parallel_edges() {
        let mut g = Graph::default();
        let a = g.add_vertex(NodeId(1));
        let b = g.add_vertex(NodeId(2));
        g.add_edge(a, b, 4.0);
        g.add_edge(a, b, 1.5);
        g.add_edge(b, a, 3.0);

        let paths = shortest_paths(&g, a, Some(b)).unwrap();
        assert_eq!(paths.distance(b), 1.5);
        assert_eq!(paths.predecessor(b), Some(a));
    }

    #[test]
    fn zero_weight_edges() {
        let mut g = Graph::default();
        let a = g.add_vertex(NodeId(1));
        let b = g.add_vertex(NodeId(2));
        let c = g.add_vertex(NodeId(3));
        g.add_edge(a, a, 0.0);
        g.add_edge(a, b, 0.0);
        g.add_edge(b, c, 2.0);

        let paths = shortest_paths(&g, a, None).unwrap();
        assert_eq!(paths.distance(b), 0.0);
        assert_eq!(paths.distance(c), 2.0);
        assert_eq!(paths.predecessor(a), None);
    }

    #[test]
    fn invalid_vertices() {
        let g = simple_graph();
        assert_eq!(
            shortest_paths(&g, Vertex(5), None),
            Err(Error::InvalidVertex(Vertex(5)))
        );
        assert_eq!(
            shortest_paths(&g, Vertex(0), Some(Vertex(9))),
            Err(Error::InvalidVertex(Vertex(9)))
        );
    }
}
