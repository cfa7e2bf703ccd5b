//! Waypoint leg decomposition and recombination.
//!
//! A query through waypoints w1…wk becomes the legs start→w1, w1→w2, …,
//! wk→end. Each leg is solved independently with the same constraints and
//! the results are stitched back together, dropping the duplicated boundary
//! station at every seam. Waypoint chains fail atomically: one unsolvable
//! leg voids the whole query.

use crate::domain::Route;

use super::query::RouteQuery;

/// The full stop sequence of a query: start, waypoints in order, end.
fn stop_sequence(query: &RouteQuery) -> Vec<&str> {
    let mut stops = Vec::with_capacity(query.waypoints.len() + 2);
    stops.push(query.start.as_str());
    stops.extend(query.waypoints.iter().map(String::as_str));
    stops.push(query.end.as_str());
    stops
}

/// Solves each leg with `solve` and concatenates the single best routes.
///
/// Returns `None` as soon as any leg has no solution. A waypoint-free query
/// degenerates to a single leg.
pub(super) fn chain_best<F>(query: &RouteQuery, solve: F) -> Option<Route>
where
    F: Fn(&str, &str) -> Option<Route>,
{
    let stops = stop_sequence(query);
    let mut combined: Option<Route> = None;

    for pair in stops.windows(2) {
        let leg = solve(pair[0], pair[1])?;
        combined = Some(match combined {
            None => leg,
            Some(route) => route.join(&leg).ok()?,
        });
    }

    combined
}

/// Solves each leg with `solve` and combines the per-leg route lists by
/// Cartesian product.
///
/// Returns an empty vec as soon as any leg has zero solutions; no partial
/// results are produced.
pub(super) fn chain_all<F>(query: &RouteQuery, solve: F) -> Vec<Route>
where
    F: Fn(&str, &str) -> Vec<Route>,
{
    let stops = stop_sequence(query);
    let mut combined: Option<Vec<Route>> = None;

    for pair in stops.windows(2) {
        let legs = solve(pair[0], pair[1]);
        if legs.is_empty() {
            return Vec::new();
        }
        combined = Some(match combined {
            None => legs,
            Some(routes) => cross_join(&routes, &legs),
        });
    }

    combined.unwrap_or_default()
}

/// Joins every route in `front` with every route in `back`.
fn cross_join(front: &[Route], back: &[Route]) -> Vec<Route> {
    let mut joined = Vec::with_capacity(front.len() * back.len());
    for first in front {
        for second in back {
            // Legs share their boundary station by construction.
            if let Ok(route) = first.join(second) {
                joined.push(route);
            }
        }
    }
    joined
}
