//! In-memory road network.
//!
//! [`RoadNetwork`] keeps nodes and directed edges keyed by externally assigned node identifiers.
//! It is populated by an ingestion step, optionally perturbed once by the
//! [`PatternSimulator`](crate::patterns::PatternSimulator) and read-only afterwards.

mod road_class;
mod road_network;

pub use road_class::*;
pub use road_network::*;
