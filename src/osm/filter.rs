// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

/// Describes which OSM ways are converted into edges of the [Graph](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WayFilter<'a> {
    /// Human readable name of the filter, used only for logging.
    pub name: &'a str,

    /// Key which must be present on a way for it to be used for routing,
    /// e.g. "highway". If `None`, every way is used, regardless of its tags.
    pub key: Option<&'a str>,

    /// Values under [WayFilter::key] which exclude a way from routing,
    /// e.g. "proposed" or "construction".
    pub excluded_values: &'a [&'a str],

    /// Array of OSM [access tags](https://wiki.openstreetmap.org/wiki/Key:access#Land-based_transportation)
    /// (in order from least to most specific) to consider when checking for road prohibitions.
    /// The most specific present tag decides; "no" and "private" exclude a way.
    pub access: &'a [&'a str],
}

impl<'a> WayFilter<'a> {
    /// Checks if a way with the given tags should be used for routing.
    pub fn matches(&self, tags: &HashMap<String, String>) -> bool {
        let Some(key) = self.key else {
            return true;
        };

        match tags.get(key) {
            Some(value) if !self.excluded_values.contains(&value.as_str()) => {
                self.is_allowed(tags)
            }
            _ => false,
        }
    }

    /// Checks if the way is not prohibited by the [access tags](WayFilter::access).
    pub fn is_allowed(&self, tags: &HashMap<String, String>) -> bool {
        match self
            .access
            .iter()
            .rev()
            .find_map(|&mode| tags.get(mode).map(|v| v.as_str()))
        {
            Some("no") | Some("private") => false,
            _ => true,
        }
    }
}

/// Uses every way for routing, regardless of its tags.
pub const ALL_WAYS: WayFilter<'static> = WayFilter {
    name: "all",
    key: None,
    excluded_values: &[],
    access: &[],
};

/// Uses only [highway=*](https://wiki.openstreetmap.org/wiki/Key:highway) ways,
/// skipping ones which are not (yet or anymore) usable roads and ones with
/// restricted access.
pub const HIGHWAYS: WayFilter<'static> = WayFilter {
    name: "highways",
    key: Some("highway"),
    excluded_values: &[
        "abandoned",
        "construction",
        "disused",
        "planned",
        "platform",
        "proposed",
        "raceway",
        "razed",
        "rest_area",
        "services",
    ],
    access: &["access", "vehicle"],
};
