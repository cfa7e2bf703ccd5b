//! Connection edge type.

use serde::Serialize;

/// One directed half of an undirected connection between two stations.
///
/// Every logical connection in the network is materialized as two `Edge`
/// values, one per direction, with identical line, label, and distance.
/// The label is display-only (typically the line's color name); algorithms
/// read only `line` and `distance`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    /// Source station name
    pub from: String,
    /// Destination station name
    pub to: String,
    /// Line identifier grouping edges of the same service
    pub line: u32,
    /// Display label for the line (e.g. a color name)
    pub label: String,
    /// Non-negative distance weight
    pub distance: f64,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        line: u32,
        label: impl Into<String>,
        distance: f64,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            line,
            label: label.into(),
            distance,
        }
    }

    /// Returns the same connection traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            line: self.line,
            label: self.label.clone(),
            distance: self.distance,
        }
    }
}
