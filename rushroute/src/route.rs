//! Route finding.

use crate::cost::{CostMode, CostModel};
use crate::error::Error;
use crate::graph::Cost;
use crate::network::{Edge, NodeId, RoadNetwork};
use crate::search_space::*;

use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteQuery {
  pub origin: NodeId,
  pub destination: NodeId,
  pub mode: CostMode,
  /// Local civil hour, 0 to 23
  pub hour: u8,
}

impl RouteQuery {
  pub fn new(origin: NodeId, destination: NodeId, mode: CostMode, hour: u8) -> Self {
    RouteQuery {
      origin,
      destination,
      mode,
      hour,
    }
  }
}

/// A route from origin to destination. An empty path means that the destination isn't reachable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
  pub path: Vec<NodeId>,
  /// Sum of traversed edge lengths in meters
  pub total_distance: f64,
  /// Expected travel time in seconds at learned speeds, whatever mode found the path
  pub estimated_time: f64,
  pub mode: CostMode,
}

impl RouteResult {
  fn unreachable(mode: CostMode) -> Self {
    RouteResult {
      path: Vec::new(),
      total_distance: 0.0,
      estimated_time: 0.0,
      mode,
    }
  }

  pub fn is_found(&self) -> bool {
    !self.path.is_empty()
  }
}

/// Shortest path search over a frozen road network.
///
/// The finder only borrows the network, so nothing can mutate it while queries are served.
pub struct PathFinder<'a> {
  network: &'a RoadNetwork,
  cost_model: CostModel,
}

impl<'a> PathFinder<'a> {
  pub fn new(network: &'a RoadNetwork, cost_model: CostModel) -> Self {
    PathFinder {
      network,
      cost_model,
    }
  }

  pub fn network(&self) -> &RoadNetwork {
    self.network
  }

  pub fn cost_model(&self) -> &CostModel {
    &self.cost_model
  }

  pub fn route(&self, query: &RouteQuery) -> Result<RouteResult, Error> {
    self.validate(query)?;

    let cost_model = &self.cost_model;
    let (mode, hour) = (query.mode, query.hour);
    let graph = (self.network, move |edge: &Edge| -> Cost {
      cost_model.cost(edge, mode, hour)
    });

    let mut search_space: SearchSpace<NodeId> = SearchSpace::new();
    search_space.init(query.origin);

    while let Some(state) = search_space.pop() {
      if state.id == query.destination {
        break;
      }
      if search_space.is_stale(&state) {
        continue;
      }
      search_space.relax(graph, state.id, state.cost);
    }

    debug!(
      "Search {} -> {} ({:?} at {}h) resolved {} nodes",
      query.origin,
      query.destination,
      query.mode,
      query.hour,
      search_space.num_resolved()
    );

    if search_space.cost(query.destination).is_none() {
      return Ok(RouteResult::unreachable(query.mode));
    }

    // Need to reverse the list to get elements in the routing order
    let mut path = search_space.unwind(query.destination);
    path.reverse();

    let (total_distance, estimated_time) = self.measure(&path, hour);

    Ok(RouteResult {
      path,
      total_distance,
      estimated_time,
      mode,
    })
  }

  /// Physical distance and learned travel time of a path.
  ///
  /// When parallel edges connect two consecutive nodes the first one in adjacency order is taken,
  /// regardless of which one the search went through.
  pub fn measure(&self, path: &[NodeId], hour: u8) -> (f64, f64) {
    path
      .windows(2)
      .filter_map(|pair| self.first_edge(pair[0], pair[1]))
      .fold((0.0, 0.0), |(distance, time), edge| {
        (
          distance + edge.distance,
          time + self.cost_model.travel_time(edge, hour),
        )
      })
  }

  fn first_edge(&self, from: NodeId, to: NodeId) -> Option<&Edge> {
    self
      .network
      .get_edges(from)
      .and_then(|edges| edges.iter().find(|edge| edge.to == to))
  }

  fn validate(&self, query: &RouteQuery) -> Result<(), Error> {
    if query.hour > 23 {
      return Err(Error::InvalidQueryParameter(format!(
        "hour of day must be within 0..=23, got {}",
        query.hour
      )));
    }
    for (role, id) in [("origin", query.origin), ("destination", query.destination)].iter() {
      if !self.network.contains(*id) {
        return Err(Error::InvalidQueryParameter(format!(
          "unknown {} node {}",
          role, id
        )));
      }
    }
    Ok(())
  }
}
