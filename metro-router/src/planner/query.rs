//! Route query parameters.

use std::collections::HashSet;

/// A request for routes between two named stations.
///
/// The same shape drives all three search strategies. Forbidden stations are
/// excluded from results; waypoints must be visited as intermediate stops in
/// the given order.
#[derive(Debug, Clone)]
pub struct RouteQuery {
    /// Name of the start station.
    pub start: String,

    /// Name of the end station.
    pub end: String,

    /// Stations no returned route may pass through.
    pub avoid: HashSet<String>,

    /// Ordered intermediate stations every returned route must visit.
    pub waypoints: Vec<String>,
}

impl RouteQuery {
    /// Create a query between two stations with no constraints.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            avoid: HashSet::new(),
            waypoints: Vec::new(),
        }
    }

    /// Adds stations to the forbidden set.
    pub fn avoiding<I, S>(mut self, stations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.avoid.extend(stations.into_iter().map(Into::into));
        self
    }

    /// Appends waypoints to visit, in order.
    pub fn via<I, S>(mut self, waypoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.waypoints.extend(waypoints.into_iter().map(Into::into));
        self
    }
}
