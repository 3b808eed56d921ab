use crate::network::*;

/// Distance between neighbors of [`grid`]
pub const GRID_SPACING: f64 = 250.0;

/// Network where every edge is a 100m residential road. Node `id` is placed at (0, id).
pub fn network_from_nodes_and_edges(nodes: &[NodeId], edges: &[(NodeId, NodeId)]) -> RoadNetwork {
  let mut network = RoadNetwork::new();
  for id in nodes {
    network.add_node(*id, 0.0, *id as f64);
  }
  for (from, to) in edges {
    network.add_edge(*from, *to, 100.0, RoadClass::Residential);
  }
  network
}

/// `width` x `height` grid of two-way roads, node ids are assigned row by row starting at 0.
///
/// Road classes alternate so that every cost mode has something to choose from: every third row is
/// a motorway, other rows are primary and residential, columns are tertiary or secondary.
pub fn grid(width: i64, height: i64) -> RoadNetwork {
  let mut network = RoadNetwork::new();
  let id = |x: i64, y: i64| y * width + x;

  for y in 0..height {
    for x in 0..width {
      network.add_node(id(x, y), y as f64 * 0.002, x as f64 * 0.002);
    }
  }

  for y in 0..height {
    let class = match y % 3 {
      0 => RoadClass::Motorway,
      1 => RoadClass::Primary,
      _ => RoadClass::Residential,
    };
    for x in 0..width - 1 {
      network
        .add_edge(id(x, y), id(x + 1, y), GRID_SPACING, class)
        .add_edge(id(x + 1, y), id(x, y), GRID_SPACING, class);
    }
  }

  for x in 0..width {
    let class = if x % 2 == 0 { RoadClass::Tertiary } else { RoadClass::Secondary };
    for y in 0..height - 1 {
      network
        .add_edge(id(x, y), id(x, y + 1), GRID_SPACING, class)
        .add_edge(id(x, y + 1), id(x, y), GRID_SPACING, class);
    }
  }

  network
}
