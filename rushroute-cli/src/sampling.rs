use rand::seq::SliceRandom;
use rand::Rng;
use rushroute::{NodeId, RoadNetwork};

// Upper bound on the nodes considered, taken in ascending id order
const MAX_CANDIDATES: usize = 5000;

/// Picks up to `count` distinct nodes with outgoing edges, good candidates for a route origin.
pub fn random_connected_nodes<R: Rng>(network: &RoadNetwork, count: usize, rng: &mut R) -> Vec<NodeId> {
    let mut candidates: Vec<NodeId> = network
        .nodes()
        .map(|node| node.id)
        .filter(|id| network.get_edges(*id).map_or(false, |edges| !edges.is_empty()))
        .collect();

    candidates.sort_unstable();
    candidates.truncate(MAX_CANDIDATES);
    candidates.shuffle(rng);
    candidates.truncate(count);
    candidates
}
