//! Fewest-hops search.
//!
//! Level-order expansion where every edge costs one hop. Stations are marked
//! visited when first enqueued, so the first time the end station comes off
//! the queue its route is globally hop-minimal.

use std::collections::{HashSet, VecDeque};

use tracing::trace;

use crate::domain::Route;
use crate::network::Graph;

/// Finds a route with the minimum number of edges from `start` to `end`.
///
/// Forbidden stations are filtered before enqueueing. Returns `None` when
/// either endpoint is unknown or no route exists.
pub(super) fn fewest_hops(
    graph: &Graph,
    start: &str,
    end: &str,
    avoid: &HashSet<String>,
) -> Option<Route> {
    graph.station(start)?;
    graph.station(end)?;

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(start.to_owned());

    let mut queue: VecDeque<Route> = VecDeque::new();
    queue.push_back(Route::start(start));

    while let Some(route) = queue.pop_front() {
        if route.last_station() == end {
            return Some(route);
        }

        let Some(station) = graph.station(route.last_station()) else {
            continue;
        };
        trace!(station = station.name(), hops = route.hop_count(), "expanding");

        for (neighbor, edge) in station.connections() {
            if visited.contains(neighbor) || avoid.contains(neighbor) {
                continue;
            }
            visited.insert(neighbor.clone());

            let mut extended = route.clone();
            extended.push(neighbor.clone(), edge.clone());
            queue.push_back(extended);
        }
    }

    None
}
