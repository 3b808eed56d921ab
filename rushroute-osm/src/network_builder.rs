use crate::osm::{read_ways, OsmData};
use crate::Error;
use log::{info, warn};
use rushroute::spatial::haversine_distance;
use rushroute::{RoadNetwork, SpeedLimits};

pub fn import_osm_pbf(pbf_path: &str, speed_limits: SpeedLimits) -> Result<RoadNetwork, Error> {
    let data = read_ways(pbf_path)?;

    Ok(build_network(&data, speed_limits))
}

// Every pair of consecutive way nodes becomes a directed edge, plus the opposite edge unless the
// way is one-way. Pairs with a node whose coordinates are unknown are dropped.
pub fn build_network(data: &OsmData, speed_limits: SpeedLimits) -> RoadNetwork {
    let mut network = RoadNetwork::with_speed_limits(speed_limits);

    for (id, coord) in &data.nodes {
        network.add_node(id.0, coord.lat, coord.lon);
    }

    let mut skipped = 0;
    for way in &data.ways {
        let road_class = match way.properties.road_class {
            Some(road_class) => road_class,
            None => continue,
        };

        for pair in way.nodes.windows(2) {
            let (from, to) = (pair[0].0, pair[1].0);
            let distance = match (network.get_node(from), network.get_node(to)) {
                (Some(a), Some(b)) => haversine_distance(a, b),
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            network.add_edge(from, to, distance, road_class);
            if way.properties.backward() {
                network.add_edge(to, from, distance, road_class);
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {} way segments with missing nodes", skipped);
    }
    info!(
        "Built network with {} nodes and {} edges from {} ways",
        network.node_count(),
        network.edge_count(),
        data.ways.len()
    );
    network
}
