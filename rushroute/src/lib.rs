//! Shortest routes in road networks under distance, speed-limit and learned cost models.

pub mod error;
pub mod graph;
pub mod network;
pub mod profile;
pub mod cost;
pub mod patterns;
pub mod route;
pub mod spatial;

mod search_space;

#[cfg(test)]
mod test_utils;

pub use error::Error;
pub use network::{Edge, Node, NodeId, RoadClass, RoadNetwork};
pub use profile::{Profile, RushHours, SpeedLimits};
pub use cost::{CostMode, CostModel};
pub use patterns::{PatternPolicy, PatternSimulator, PatternStats};
pub use route::{PathFinder, RouteQuery, RouteResult};
