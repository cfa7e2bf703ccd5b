//! Route result type.

use serde::Serialize;

use super::{DomainError, Edge};

/// An ordered station/edge path through the network.
///
/// A route over *n* stations carries exactly *n − 1* edges, where edge *i*
/// connects station *i* to station *i + 1*. This invariant holds for every
/// route ever produced, including intermediate values during search and
/// waypoint composition. A route is a value: cloning deep-copies both
/// sequences, so extending a clone never mutates the original.
///
/// # Examples
///
/// ```
/// use metro_router::domain::{Edge, Route};
///
/// let route = Route::new(
///     vec!["Karlsplatz".into(), "Stephansplatz".into()],
///     vec![Edge::new("Karlsplatz", "Stephansplatz", 1, "red", 1.0)],
/// )
/// .unwrap();
///
/// assert_eq!(route.hop_count(), 1);
/// assert_eq!(route.total_distance(), 1.0);
/// assert_eq!(route.line_changes(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    stations: Vec<String>,
    edges: Vec<Edge>,
}

impl Route {
    /// Constructs a route from pre-built sequences, validating the shape.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `stations` is empty
    /// - `stations.len() != edges.len() + 1`
    /// - edge *i* does not run from station *i* to station *i + 1*
    pub fn new(stations: Vec<String>, edges: Vec<Edge>) -> Result<Self, DomainError> {
        if stations.is_empty() {
            return Err(DomainError::EmptyRoute);
        }
        if stations.len() != edges.len() + 1 {
            return Err(DomainError::LengthMismatch {
                stations: stations.len(),
                edges: edges.len(),
            });
        }
        for (index, edge) in edges.iter().enumerate() {
            if edge.from != stations[index] || edge.to != stations[index + 1] {
                return Err(DomainError::DisconnectedEdge { index });
            }
        }

        Ok(Self { stations, edges })
    }

    /// Creates a single-station route with no edges.
    pub fn start(station: impl Into<String>) -> Self {
        Self {
            stations: vec![station.into()],
            edges: Vec::new(),
        }
    }

    /// Appends a station reached over the given edge.
    pub(crate) fn push(&mut self, station: impl Into<String>, edge: Edge) {
        self.stations.push(station.into());
        self.edges.push(edge);
    }

    /// Removes the most recently pushed station and edge.
    ///
    /// The initial station is never removed.
    pub(crate) fn pop(&mut self) {
        debug_assert!(self.stations.len() > 1, "cannot pop the initial station");
        self.stations.pop();
        self.edges.pop();
    }

    /// Concatenates two routes that share a boundary station.
    ///
    /// `other` must begin at this route's final station; the duplicated
    /// boundary station is dropped so the result keeps the
    /// stations-equals-edges-plus-one invariant.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the boundary stations do not match.
    pub fn join(&self, other: &Route) -> Result<Route, DomainError> {
        if self.last_station() != other.first_station() {
            return Err(DomainError::DisjointRoutes(
                self.last_station().to_owned(),
                other.first_station().to_owned(),
            ));
        }

        let mut stations = Vec::with_capacity(self.stations.len() + other.stations.len() - 1);
        stations.extend_from_slice(&self.stations[..self.stations.len() - 1]);
        stations.extend_from_slice(&other.stations);

        let mut edges = Vec::with_capacity(self.edges.len() + other.edges.len());
        edges.extend_from_slice(&self.edges);
        edges.extend_from_slice(&other.edges);

        Ok(Route { stations, edges })
    }

    /// Returns the ordered station names.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Returns the ordered edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the first station.
    pub fn first_station(&self) -> &str {
        // A route always has at least one station
        &self.stations[0]
    }

    /// Returns the final station.
    pub fn last_station(&self) -> &str {
        &self.stations[self.stations.len() - 1]
    }

    /// Returns the number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the sum of edge distance weights.
    pub fn total_distance(&self) -> f64 {
        self.edges.iter().map(|e| e.distance).sum()
    }

    /// Returns the number of adjacent edge pairs on different lines.
    pub fn line_changes(&self) -> usize {
        self.edges
            .windows(2)
            .filter(|pair| pair[0].line != pair[1].line)
            .count()
    }

    /// Returns true if the route visits the given station.
    pub fn visits(&self, station: &str) -> bool {
        self.stations.iter().any(|s| s == station)
    }
}
