// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::{Coordinate, Error, NodeId};

/// Positions of all known OpenStreetMap nodes.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LocationIndex(HashMap<NodeId, Coordinate>);

impl LocationIndex {
    /// Returns the number of known nodes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.0.contains_key(&id)
    }

    /// Records the position of a node, overwriting any previous one.
    pub fn put(&mut self, id: NodeId, position: Coordinate) {
        self.0.insert(id, position);
    }

    /// Retrieves the position of a node, or [Error::NodeNotFound].
    pub fn get(&self, id: NodeId) -> Result<Coordinate, Error> {
        self.0.get(&id).copied().ok_or(Error::NodeNotFound(id))
    }
}

impl FromIterator<(NodeId, Coordinate)> for LocationIndex {
    fn from_iter<I: IntoIterator<Item = (NodeId, Coordinate)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
