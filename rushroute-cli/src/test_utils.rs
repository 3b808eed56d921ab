use rushroute::{RoadClass, RoadNetwork};

/// 1 -> 2 -> 3 over 2km of motorway and a one-way 1.5km residential street 1 -> 3
pub fn triangle() -> RoadNetwork {
    let mut network = RoadNetwork::new();
    network
        .add_node(1, 0.0, 0.0)
        .add_node(2, 0.0, 0.01)
        .add_node(3, 0.0, 0.02)
        .add_edge(1, 2, 1000.0, RoadClass::Motorway)
        .add_edge(2, 3, 1000.0, RoadClass::Motorway)
        .add_edge(1, 3, 1500.0, RoadClass::Residential);
    network
}
