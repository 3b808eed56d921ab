//! Geographic helpers.

use crate::network::{Node, NodeId, RoadNetwork};
use geo::algorithm::haversine_distance::HaversineDistance;
use geo::Point;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

fn to_point(node: &Node) -> Point<f64> {
  Point::new(node.lon, node.lat)
}

/// Great-circle distance between two nodes in meters
pub fn haversine_distance(from: &Node, to: &Node) -> f64 {
  to_point(from).haversine_distance(&to_point(to))
}

#[derive(Debug)]
struct Entry {
  id: NodeId,
  position: [f64; 2],
}

impl RTreeObject for Entry {
  type Envelope = AABB<[f64; 2]>;

  fn envelope(&self) -> Self::Envelope {
    AABB::from_point(self.position)
  }
}

impl PointDistance for Entry {
  fn distance_2(&self, point: &[f64; 2]) -> f64 {
    let dx = self.position[0] - point[0];
    let dy = self.position[1] - point[1];
    dx * dx + dy * dy
  }
}

/// Spatial index for snapping coordinates to the network.
///
/// Only nodes with outgoing edges are indexed, a route can't start at any other node. Distances
/// are compared in plain degrees, which is good enough to find the closest node in a city-sized
/// area but isn't a true geodesic nearest neighbor.
pub struct NodeLocator {
  rtree: RTree<Entry>,
}

impl NodeLocator {
  pub fn new(network: &RoadNetwork) -> Self {
    let entries = network
      .nodes()
      .filter(|node| network.get_edges(node.id).map_or(false, |edges| !edges.is_empty()))
      .map(|node| Entry {
        id: node.id,
        position: [node.lon, node.lat],
      })
      .collect();

    NodeLocator {
      rtree: RTree::bulk_load(entries),
    }
  }

  pub fn nearest(&self, lat: f64, lon: f64) -> Option<NodeId> {
    self.rtree.nearest_neighbor(&[lon, lat]).map(|entry| entry.id)
  }

  pub fn len(&self) -> usize {
    self.rtree.size()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
