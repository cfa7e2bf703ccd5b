//! Planner facade over the search strategies.

use crate::domain::Route;
use crate::network::Graph;

use super::config::SearchConfig;
use super::query::RouteQuery;
use super::{bfs, dfs, dijkstra, waypoints};

/// Route planner borrowing a read-only network graph.
///
/// Each query allocates and discards its own search state, so a single
/// planner (or several, sharing one graph) can serve queries concurrently.
///
/// # Examples
///
/// ```
/// use metro_router::network::Graph;
/// use metro_router::planner::{Planner, RouteQuery};
///
/// let mut graph = Graph::new();
/// for name in ["Karlsplatz", "Stephansplatz", "Schwedenplatz"] {
///     graph.add_station(name);
/// }
/// graph.add_connection("Karlsplatz", "Stephansplatz", 1, "red");
/// graph.add_connection("Stephansplatz", "Schwedenplatz", 1, "red");
///
/// let planner = Planner::new(&graph);
/// let query = RouteQuery::new("Karlsplatz", "Schwedenplatz");
///
/// let route = planner.shortest_hops(&query).unwrap();
/// assert_eq!(route.hop_count(), 2);
/// ```
pub struct Planner<'g> {
    graph: &'g Graph,
    config: SearchConfig,
}

impl<'g> Planner<'g> {
    /// Creates a planner with the default configuration.
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_config(graph, SearchConfig::default())
    }

    /// Creates a planner with a custom configuration.
    pub fn with_config(graph: &'g Graph, config: SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Enumerates every simple path satisfying the query.
    ///
    /// Paths repeat no station within a leg, avoid the forbidden set, visit
    /// the waypoints in order, and stay within the configured depth bound
    /// per leg. Returns an empty vec when the query has no solutions or
    /// names an unknown station.
    pub fn find_all_routes(&self, query: &RouteQuery) -> Vec<Route> {
        waypoints::chain_all(query, |from, to| {
            dfs::enumerate(self.graph, from, to, &query.avoid, self.config.max_depth)
        })
    }

    /// Finds the route with the fewest edges satisfying the query.
    ///
    /// Returns `None` when no such route exists or the query names an
    /// unknown station.
    pub fn shortest_hops(&self, query: &RouteQuery) -> Option<Route> {
        waypoints::chain_best(query, |from, to| {
            bfs::fewest_hops(self.graph, from, to, &query.avoid)
        })
    }

    /// Finds the minimum-total-distance route satisfying the query.
    ///
    /// With `line_change_penalty > 0`, staying on one line is favored: each
    /// relaxation onto a different line costs the penalty on top of the edge
    /// weight. Every waypoint leg is solved with the same penalty. Returns
    /// `None` when no route exists or the query names an unknown station.
    pub fn shortest_distance(&self, query: &RouteQuery, line_change_penalty: f64) -> Option<Route> {
        waypoints::chain_best(query, |from, to| {
            dijkstra::min_distance(self.graph, from, to, &query.avoid, line_change_penalty)
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    const STATIONS: usize = 6;

    fn station_name(index: usize) -> String {
        format!("S{index}")
    }

    /// Random graphs over six stations with unit edge weights.
    fn arb_graph() -> impl Strategy<Value = Graph> {
        proptest::collection::vec(
            (0..STATIONS, 0..STATIONS, 1u32..4),
            0..14,
        )
        .prop_map(|edges| {
            let mut graph = Graph::new();
            for i in 0..STATIONS {
                graph.add_station(station_name(i));
            }
            for (a, b, line) in edges {
                if a != b {
                    graph.add_connection(&station_name(a), &station_name(b), line, "line");
                }
            }
            graph
        })
    }

    fn endpoints() -> impl Strategy<Value = (usize, usize)> {
        (0..STATIONS, 0..STATIONS)
    }

    proptest! {
        /// Every enumerated path is well-formed, simple, and correctly
        /// anchored at the endpoints.
        #[test]
        fn enumeration_yields_simple_well_formed_paths(
            graph in arb_graph(),
            (start, end) in endpoints(),
        ) {
            let planner = Planner::new(&graph);
            let query = RouteQuery::new(station_name(start), station_name(end));

            for route in planner.find_all_routes(&query) {
                prop_assert_eq!(route.stations().len(), route.edges().len() + 1);
                prop_assert_eq!(route.first_station(), query.start.as_str());
                prop_assert_eq!(route.last_station(), query.end.as_str());

                let unique: HashSet<&String> = route.stations().iter().collect();
                prop_assert_eq!(unique.len(), route.stations().len());
            }
        }

        /// BFS agrees with brute-force enumeration: it finds a route exactly
        /// when one exists, and its hop count is the minimum over all simple
        /// paths.
        #[test]
        fn bfs_is_hop_minimal(
            graph in arb_graph(),
            (start, end) in endpoints(),
        ) {
            let planner = Planner::new(&graph);
            let query = RouteQuery::new(station_name(start), station_name(end));

            let all = planner.find_all_routes(&query);
            let best = planner.shortest_hops(&query);

            match all.iter().map(Route::hop_count).min() {
                None => prop_assert!(best.is_none()),
                Some(min_hops) => {
                    let route = best.expect("route exists, BFS must find one");
                    prop_assert_eq!(route.hop_count(), min_hops);
                }
            }
        }

        /// With no penalty, weighted search is distance-minimal; on unit
        /// weights that is the hop-minimal distance.
        #[test]
        fn dijkstra_without_penalty_is_distance_minimal(
            graph in arb_graph(),
            (start, end) in endpoints(),
        ) {
            let planner = Planner::new(&graph);
            let query = RouteQuery::new(station_name(start), station_name(end));

            let all = planner.find_all_routes(&query);
            let best = planner.shortest_distance(&query, 0.0);

            match all.iter().map(Route::hop_count).min() {
                None => prop_assert!(best.is_none()),
                Some(min_hops) => {
                    let route = best.expect("route exists, search must find one");
                    prop_assert_eq!(route.total_distance(), min_hops as f64);
                }
            }
        }

        /// No strategy ever routes through a forbidden intermediate station.
        #[test]
        fn forbidden_stations_are_respected(
            graph in arb_graph(),
            (start, end) in endpoints(),
            avoid_index in 0..STATIONS,
        ) {
            prop_assume!(avoid_index != start && avoid_index != end);

            let avoided = station_name(avoid_index);
            let planner = Planner::new(&graph);
            let query = RouteQuery::new(station_name(start), station_name(end))
                .avoiding([avoided.clone()]);

            for route in planner.find_all_routes(&query) {
                prop_assert!(!route.visits(&avoided));
            }
            if let Some(route) = planner.shortest_hops(&query) {
                prop_assert!(!route.visits(&avoided));
            }
            if let Some(route) = planner.shortest_distance(&query, 0.0) {
                prop_assert!(!route.visits(&avoided));
            }
        }
    }
}
