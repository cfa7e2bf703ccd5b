//! Network graph registry.
//!
//! A `Graph` is built once by a loader and then treated as read-only for the
//! lifetime of all queries. Edge weights come from a pluggable distance
//! function so the algorithms stay agnostic to how weights are produced.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Coords, Edge, Station};

/// Computes the weight of a connection between two stations.
pub type DistanceFn = fn(&Station, &Station) -> f64;

/// Default distance metric: every connection weighs 1.0.
pub fn unit_distance(_from: &Station, _to: &Station) -> f64 {
    1.0
}

/// Station registry keyed by name.
///
/// Construction is permissive by design: `add_station` is idempotent (the
/// first call for a name fixes that station's attributes) and
/// `add_connection` silently ignores calls naming an unregistered endpoint.
///
/// # Examples
///
/// ```
/// use metro_router::network::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_station("Karlsplatz");
/// graph.add_station("Stephansplatz");
/// graph.add_connection("Karlsplatz", "Stephansplatz", 1, "red");
///
/// let karlsplatz = graph.station("Karlsplatz").unwrap();
/// assert!(karlsplatz.edge_to("Stephansplatz").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    stations: HashMap<String, Station>,
    distance_fn: DistanceFn,
}

impl Graph {
    /// Creates an empty graph using the unit distance metric.
    pub fn new() -> Self {
        Self::with_distance_fn(unit_distance)
    }

    /// Creates an empty graph with a custom distance function.
    pub fn with_distance_fn(distance_fn: DistanceFn) -> Self {
        Self {
            stations: HashMap::new(),
            distance_fn,
        }
    }

    /// Registers a station without coordinates.
    ///
    /// No-op if a station with this name already exists.
    pub fn add_station(&mut self, name: impl Into<String>) {
        self.insert_station(name.into(), None);
    }

    /// Registers a station with coordinates.
    ///
    /// No-op if a station with this name already exists.
    pub fn add_station_at(&mut self, name: impl Into<String>, coords: Coords) {
        self.insert_station(name.into(), Some(coords));
    }

    fn insert_station(&mut self, name: String, coords: Option<Coords>) {
        self.stations
            .entry(name.clone())
            .or_insert_with(|| Station::new(name, coords));
    }

    /// Installs a symmetric connection between two registered stations.
    ///
    /// The weight comes from the graph's distance function. If either
    /// endpoint is unregistered the call is silently ignored. An existing
    /// connection between the pair is overwritten, not duplicated.
    pub fn add_connection(&mut self, from: &str, to: &str, line: u32, label: &str) {
        let (Some(from_station), Some(to_station)) =
            (self.stations.get(from), self.stations.get(to))
        else {
            debug!(from, to, "skipping connection with unregistered endpoint");
            return;
        };

        let distance = (self.distance_fn)(from_station, to_station);
        let forward = Edge::new(from, to, line, label, distance);
        let backward = forward.reversed();

        if let Some(station) = self.stations.get_mut(from) {
            station.insert_connection(forward);
        }
        if let Some(station) = self.stations.get_mut(to) {
            station.insert_connection(backward);
        }
    }

    /// Looks up a station by name.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.get(name)
    }

    /// Iterates over all stations in no particular order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Returns the number of registered stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
