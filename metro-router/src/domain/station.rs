//! Station type.

use std::collections::HashMap;

use serde::Serialize;

use super::Edge;

/// Geographic coordinates, carried for external consumers only.
///
/// No search algorithm reads these; they exist so that presentation
/// collaborators (listing, drawing) can place stations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coords {
    pub lat: f64,
    pub lon: f64,
}

impl Coords {
    /// Creates a coordinate pair.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A uniquely named node in the transit network.
///
/// Identity is the case-sensitive name. The adjacency map holds at most one
/// edge per distinct neighbor; installing a second connection to the same
/// neighbor overwrites the first rather than creating a multi-edge.
#[derive(Debug, Clone)]
pub struct Station {
    name: String,
    coords: Option<Coords>,
    connections: HashMap<String, Edge>,
}

impl Station {
    pub(crate) fn new(name: impl Into<String>, coords: Option<Coords>) -> Self {
        Self {
            name: name.into(),
            coords,
            connections: HashMap::new(),
        }
    }

    /// Returns the station's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the station's coordinates, if any were recorded.
    pub fn coords(&self) -> Option<Coords> {
        self.coords
    }

    /// Returns the adjacency map from neighbor name to the connecting edge.
    pub fn connections(&self) -> &HashMap<String, Edge> {
        &self.connections
    }

    /// Returns the edge to the given neighbor, if directly connected.
    pub fn edge_to(&self, neighbor: &str) -> Option<&Edge> {
        self.connections.get(neighbor)
    }

    /// Installs an outgoing edge, keyed by its destination.
    ///
    /// Overwrites any existing edge to the same neighbor.
    pub(crate) fn insert_connection(&mut self, edge: Edge) {
        self.connections.insert(edge.to.clone(), edge);
    }
}
