// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{LocationIndex, Network, NodeId};

use super::{model, Options};

/// Helper object used for storing state related to converting [OSM features](super::model::Feature)
/// into a [Network].
///
/// Loading happens in two phases: first all features are consumed (node positions
/// are recorded and matching way geometries kept), and only then the graph is built,
/// so that ways may refer to nodes appearing later in the file.
pub(super) struct NetworkLoader<'a> {
    options: &'a Options<'a>,
    locations: LocationIndex,
    ways: Vec<Vec<NodeId>>,
    skipped_ways: usize,
}

impl<'a> NetworkLoader<'a> {
    /// Create a new, empty network loader.
    pub(super) fn new(options: &'a Options<'a>) -> Self {
        Self {
            options,
            locations: LocationIndex::default(),
            ways: Vec::default(),
            skipped_ways: 0,
        }
    }

    /// Add all features from the provided iterator.
    pub(super) fn add_features<I, E>(&mut self, features: I) -> Result<(), E>
    where
        I: IntoIterator<Item = Result<model::Feature, E>>,
    {
        for f in features {
            self.add_feature(f?);
        }
        Ok(())
    }

    fn add_feature(&mut self, f: model::Feature) {
        match f {
            model::Feature::Node(n) => self.locations.put(n.id, n.position),
            model::Feature::Way(w) => self.add_way(w),
        }
    }

    fn add_way(&mut self, w: model::Way) {
        if self.options.way_filter.matches(&w.tags) {
            self.ways.push(w.nodes);
        } else {
            self.skipped_ways += 1;
        }
    }

    /// Builds the [Network] from all added features.
    pub(super) fn finish(mut self) -> Result<Network, crate::Error> {
        if self.options.skip_unknown_nodes {
            self.remove_unknown_nodes();
        }

        log::info!(
            "loaded {} nodes and {} ways ({} ways skipped by the {:?} filter)",
            self.locations.len(),
            self.ways.len(),
            self.skipped_ways,
            self.options.way_filter.name,
        );

        Network::new(self.locations, self.ways)
    }

    fn remove_unknown_nodes(&mut self) {
        let locations = &self.locations;
        let mut removed: usize = 0;

        for nodes in self.ways.iter_mut() {
            let before = nodes.len();
            nodes.retain(|&id| locations.contains(id));
            removed += before - nodes.len();
        }

        if removed > 0 {
            log::warn!("removed {} references to nodes without a position", removed);
        }
    }
}
