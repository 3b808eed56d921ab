use super::road_class::RoadClass;
use crate::graph::*;
use crate::profile::SpeedLimits;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Node identifier, assigned externally (e.g. OpenStreetMap node id)
pub type NodeId = i64;

/// A point of the road network in WGS84 degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
  pub id: NodeId,
  pub lat: f64,
  pub lon: f64,
}

/// Directed edge, stored in the adjacency list of its origin node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
  pub to: NodeId,
  /// Length in meters
  pub distance: f64,
  /// Posted speed in km/h, derived from the road class when the edge is created
  pub speed_limit: f64,
  pub road_class: RoadClass,
  /// Observed speed relative to the expected one: 0.6 means 40% slower, 1.4 means 40% faster
  pub crowd_multiplier: f64,
}

impl Edge {
  pub fn new(to: NodeId, distance: f64, speed_limit: f64, road_class: RoadClass) -> Self {
    Edge {
      to,
      distance,
      speed_limit,
      road_class,
      crowd_multiplier: 1.0,
    }
  }

  pub fn with_crowd_multiplier(mut self, crowd_multiplier: f64) -> Self {
    self.crowd_multiplier = crowd_multiplier;
    self
  }
}

/// Road network with O(1) access to nodes and their outgoing edges.
///
/// Edges may point to nodes which were never added. Such edges are kept, but a route can't pass
/// through them until the node shows up.
#[derive(Default, Clone, Debug, Serialize, Deserialize)]
pub struct RoadNetwork {
  nodes: HashMap<NodeId, Node>,
  adjacency: HashMap<NodeId, Vec<Edge>>,
  speed_limits: SpeedLimits,
}

impl RoadNetwork {
  pub fn new() -> Self {
    Default::default()
  }

  pub fn with_speed_limits(speed_limits: SpeedLimits) -> Self {
    RoadNetwork {
      nodes: HashMap::new(),
      adjacency: HashMap::new(),
      speed_limits,
    }
  }

  /// Inserts a node, overwriting an existing node with the same id.
  pub fn add_node(&mut self, id: NodeId, lat: f64, lon: f64) -> &mut Self {
    self.nodes.insert(id, Node { id, lat, lon });
    self
  }

  /// Appends a directed edge to the adjacency list of `from`.
  ///
  /// The distance is expected to be non-negative, it's up to the caller to make sure of it: the
  /// search gives no guarantees on negative edges.
  pub fn add_edge(
    &mut self,
    from: NodeId,
    to: NodeId,
    distance: f64,
    road_class: RoadClass,
  ) -> &mut Self {
    let speed_limit = self.speed_limits.speed_limit(road_class);
    self
      .adjacency
      .entry(from)
      .or_insert_with(Vec::new)
      .push(Edge::new(to, distance, speed_limit, road_class));
    self
  }

  /// Same as [`RoadNetwork::add_edge`], with the road class given as a tag like `"primary_link"`.
  pub fn add_edge_tagged(&mut self, from: NodeId, to: NodeId, distance: f64, tag: &str) -> &mut Self {
    self.add_edge(from, to, distance, RoadClass::from_tag(tag))
  }

  /// Replaces the speed limit table and sets the speed limit of every edge from it. Crowd
  /// multipliers are left alone.
  pub fn apply_speed_limits(&mut self, speed_limits: SpeedLimits) {
    for edge in self.adjacency.values_mut().flat_map(|edges| edges.iter_mut()) {
      edge.speed_limit = speed_limits.speed_limit(edge.road_class);
    }
    self.speed_limits = speed_limits;
  }

  pub fn get_node(&self, id: NodeId) -> Option<&Node> {
    self.nodes.get(&id)
  }

  pub fn contains(&self, id: NodeId) -> bool {
    self.nodes.contains_key(&id)
  }

  /// Outgoing edges of a node in insertion order, `None` if the node isn't in the network.
  pub fn get_edges(&self, id: NodeId) -> Option<&[Edge]> {
    if !self.contains(id) {
      return None;
    }
    Some(self.adjacency.get(&id).map_or(&[][..], |edges| edges.as_slice()))
  }

  pub fn nodes(&self) -> impl Iterator<Item = &Node> {
    self.nodes.values()
  }

  pub fn speed_limits(&self) -> &SpeedLimits {
    &self.speed_limits
  }

  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  pub fn edge_count(&self) -> usize {
    self.adjacency.values().map(|edges| edges.len()).sum()
  }

  /// Mutable access to every edge, ordered by origin id and then by insertion order.
  ///
  /// The order doesn't depend on the hash map layout, which keeps seeded simulations reproducible.
  pub(crate) fn edges_mut(&mut self) -> impl Iterator<Item = &mut Edge> {
    let mut lists: Vec<(&NodeId, &mut Vec<Edge>)> = self.adjacency.iter_mut().collect();
    lists.sort_unstable_by_key(|(id, _)| **id);
    lists.into_iter().flat_map(|(_, edges)| edges.iter_mut())
  }
}

/// Outgoing edges of a node with their costs. Edges leading to unknown nodes are skipped.
pub struct WeightedEdges<'a, C> {
  network: &'a RoadNetwork,
  edges: std::slice::Iter<'a, Edge>,
  cost: C,
}

impl<'a, C: Fn(&Edge) -> Cost> Iterator for WeightedEdges<'a, C> {
  type Item = (NodeId, Cost);

  fn next(&mut self) -> Option<Self::Item> {
    let network = self.network;
    let cost = &self.cost;
    self
      .edges
      .find(|edge| network.contains(edge.to))
      .map(|edge| (edge.to, cost(edge)))
  }
}

impl GraphBase for RoadNetwork {
  type NodeId = NodeId;
}

/// The tuple of a network plus edge cost function is a weighted graph
impl<'a, C: Copy + Fn(&Edge) -> Cost> IntoWeightedNeighbors for (&'a RoadNetwork, C) {
  type Neighbors = WeightedEdges<'a, C>;

  fn weighted_neighbors(self, node: NodeId) -> Self::Neighbors {
    let edges = self.0.adjacency.get(&node).map_or(&[][..], |edges| edges.as_slice());
    WeightedEdges {
      network: self.0,
      edges: edges.iter(),
      cost: self.1,
    }
  }
}
