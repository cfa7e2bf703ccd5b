//! Network value types.
//!
//! Stations, edges, and routes are plain owned values: station identity is
//! the (case-sensitive) name, edges are the directed halves of undirected
//! connections, and a route is an ordered station/edge path that always
//! satisfies `stations.len() == edges.len() + 1`.

mod edge;
mod error;
mod route;
mod station;

pub use edge::Edge;
pub use error::DomainError;
pub use route::Route;
pub use station::{Coords, Station};
