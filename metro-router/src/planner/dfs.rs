//! Exhaustive simple-path enumeration.
//!
//! Depth-first search that yields every simple path between two stations,
//! bounded by a maximum path depth. The bound is what keeps the search
//! finite on cyclic networks.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{Route, Station};
use crate::network::Graph;

/// Enumerates every simple path from `start` to `end`.
///
/// A path qualifies if it repeats no station, visits at most `max_depth`
/// stations, and touches no station in `avoid` (the check runs at node
/// entry, so a forbidden start or end yields nothing). Returns an empty vec
/// when either endpoint is unknown. Path order follows adjacency-map
/// iteration and is not significant.
pub(super) fn enumerate(
    graph: &Graph,
    start: &str,
    end: &str,
    avoid: &HashSet<String>,
    max_depth: usize,
) -> Vec<Route> {
    let (Some(start_station), Some(_)) = (graph.station(start), graph.station(end)) else {
        return Vec::new();
    };

    let mut found = Vec::new();
    let mut visited = HashSet::new();
    let mut path = Route::start(start);
    explore(
        graph,
        start_station,
        end,
        avoid,
        max_depth,
        &mut visited,
        &mut path,
        &mut found,
    );

    debug!(start, end, routes = found.len(), "path enumeration complete");
    found
}

/// Visits `current` (already the last station of `path`), recording the
/// path when it reaches `end` and otherwise descending into unvisited
/// neighbors. The visited set and path are unwound on backtrack.
#[allow(clippy::too_many_arguments)]
fn explore(
    graph: &Graph,
    current: &Station,
    end: &str,
    avoid: &HashSet<String>,
    depth_left: usize,
    visited: &mut HashSet<String>,
    path: &mut Route,
    found: &mut Vec<Route>,
) {
    if depth_left == 0 || avoid.contains(current.name()) {
        return;
    }

    visited.insert(current.name().to_owned());

    if current.name() == end {
        found.push(path.clone());
    } else {
        for (neighbor, edge) in current.connections() {
            if visited.contains(neighbor) {
                continue;
            }
            let Some(next) = graph.station(neighbor) else {
                continue;
            };

            path.push(neighbor.clone(), edge.clone());
            explore(graph, next, end, avoid, depth_left - 1, visited, path, found);
            path.pop();
        }
    }

    visited.remove(current.name());
}
