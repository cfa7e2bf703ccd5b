//! Minimum-distance search with an optional line-change penalty.
//!
//! Classic non-negative-weight shortest path over a binary-heap frontier.
//! Each frontier entry carries the line of the edge most recently used to
//! reach its station; with a positive penalty, relaxing onto a different
//! line costs extra. The carried line is a single scalar per entry rather
//! than (station, line) expanded state, so with a positive penalty the
//! result is a bias toward fewer changes, not a guaranteed optimum over the
//! penalized weights.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::trace;

use crate::domain::{Edge, Route};
use crate::network::Graph;

/// Frontier entry ordered by tentative distance, smallest first.
#[derive(Debug, Clone)]
struct FrontierEntry {
    distance: f64,
    station: String,
    /// Line of the edge last relaxed into this station; `None` before the
    /// first hop.
    line: Option<u32>,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the smallest distance.
        other.distance.total_cmp(&self.distance)
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Finds a route minimizing total distance from `start` to `end`.
///
/// With `penalty > 0`, an edge whose line differs from the line used to
/// reach the current station has the penalty added to its effective weight.
/// Returns `None` when either endpoint is unknown or unreachable. Ties in
/// the frontier break arbitrarily.
pub(super) fn min_distance(
    graph: &Graph,
    start: &str,
    end: &str,
    avoid: &HashSet<String>,
    penalty: f64,
) -> Option<Route> {
    graph.station(start)?;
    graph.station(end)?;

    let mut distances: HashMap<String, f64> = graph
        .stations()
        .map(|s| (s.name().to_owned(), f64::INFINITY))
        .collect();
    let mut previous: HashMap<String, String> = HashMap::new();
    let mut previous_edge: HashMap<String, Edge> = HashMap::new();

    let mut frontier = BinaryHeap::new();
    distances.insert(start.to_owned(), 0.0);
    frontier.push(FrontierEntry {
        distance: 0.0,
        station: start.to_owned(),
        line: None,
    });

    while let Some(entry) = frontier.pop() {
        if entry.station == end {
            break;
        }

        let settled = distances.get(&entry.station).copied()?;
        if entry.distance > settled {
            continue; // stale entry
        }

        let Some(station) = graph.station(&entry.station) else {
            continue;
        };
        trace!(station = station.name(), distance = entry.distance, "settling");

        for (neighbor, edge) in station.connections() {
            if avoid.contains(neighbor) {
                continue;
            }

            let mut weight = edge.distance;
            if penalty > 0.0 && entry.line.is_some_and(|line| line != edge.line) {
                weight += penalty;
            }

            let tentative = settled + weight;
            let best = distances.get(neighbor).copied().unwrap_or(f64::INFINITY);
            if tentative < best {
                distances.insert(neighbor.clone(), tentative);
                previous.insert(neighbor.clone(), entry.station.clone());
                previous_edge.insert(neighbor.clone(), edge.clone());
                frontier.push(FrontierEntry {
                    distance: tentative,
                    station: neighbor.clone(),
                    line: Some(edge.line),
                });
            }
        }
    }

    backtrack(start, end, &previous, &previous_edge)
}

/// Rebuilds the route by following predecessor links from the end station.
/// Returns `None` if the chain does not lead back to the start.
fn backtrack(
    start: &str,
    end: &str,
    previous: &HashMap<String, String>,
    previous_edge: &HashMap<String, Edge>,
) -> Option<Route> {
    let mut path = vec![end.to_owned()];
    let mut cursor = end;
    while let Some(prev) = previous.get(cursor) {
        path.push(prev.clone());
        cursor = prev;
    }
    path.reverse();

    if path[0] != start {
        return None;
    }

    let mut route = Route::start(path[0].clone());
    for station in &path[1..] {
        let edge = previous_edge.get(station)?.clone();
        route.push(station.clone(), edge);
    }
    Some(route)
}
