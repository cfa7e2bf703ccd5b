//! Transit network route finder.
//!
//! Models a fixed network of named stations connected by line-tagged edges
//! and answers route queries with three strategies: exhaustive simple-path
//! enumeration, fewest-hops search, and minimum-distance search with an
//! optional line-change penalty. Any strategy can be driven through an
//! ordered sequence of required waypoints.

pub mod domain;
pub mod loader;
pub mod network;
pub mod planner;
