//! Route search over the network graph.
//!
//! Three strategies share one query shape: exhaustive simple-path
//! enumeration (depth-first, depth-bounded), fewest-hops search
//! (breadth-first), and minimum-distance search with an optional
//! line-change penalty (Dijkstra). Queries with waypoints are decomposed
//! into consecutive legs, solved independently, and stitched back together.

mod bfs;
mod config;
mod dfs;
mod dijkstra;
mod query;
mod search;
mod waypoints;

pub use config::SearchConfig;
pub use query::RouteQuery;
pub use search::Planner;
