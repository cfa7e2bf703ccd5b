//! Domain error types.
//!
//! These errors represent structural violations in route construction.
//! "No path found" is never an error; searches report that through empty
//! collections or `None`.

/// Domain-level errors for route construction and composition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Route has no stations
    #[error("route must contain at least one station")]
    EmptyRoute,

    /// Station and edge sequences have incompatible lengths
    #[error("route has {stations} stations but {edges} edges")]
    LengthMismatch { stations: usize, edges: usize },

    /// An edge does not connect its adjacent stations
    #[error("edge {index} does not connect its adjacent stations")]
    DisconnectedEdge { index: usize },

    /// Two routes being joined do not share a boundary station
    #[error("routes do not share a boundary station: {0} vs {1}")]
    DisjointRoutes(String, String),
}
