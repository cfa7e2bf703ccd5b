//! Search configuration.

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of stations a single enumerated path may visit.
    ///
    /// Only exhaustive enumeration uses this; it is the safeguard that keeps
    /// depth-first search finite on cyclic networks. A bound of `n` admits
    /// paths of at most `n - 1` edges.
    pub max_depth: usize,
}

impl SearchConfig {
    /// Create a configuration with the given depth bound.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 15 }
    }
}
