use crate::Error;
use rushroute::RoadNetwork;
use std::fs::File;
use std::io::{BufReader, BufWriter};

pub fn save_network(network: &RoadNetwork, path: &str) -> Result<(), Error> {
    let file = BufWriter::new(File::create(path)?);
    bincode::serialize_into(file, network)?;
    Ok(())
}

pub fn load_network(path: &str) -> Result<RoadNetwork, Error> {
    let file = BufReader::new(File::open(path)?);
    Ok(bincode::deserialize_from(file)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rushroute::RoadClass;
    use tempdir::TempDir;

    #[test]
    fn test_snapshot_keeps_network() {
        let mut network = RoadNetwork::new();
        network
            .add_node(1, 47.61, -122.33)
            .add_node(2, 47.62, -122.34)
            .add_edge(1, 2, 1200.0, RoadClass::Trunk)
            .add_edge(2, 1, 1200.0, RoadClass::TrunkLink)
            .add_edge(2, 3, 50.0, RoadClass::Unclassified);

        let dir = TempDir::new("rushroute-osm").unwrap();
        let path = dir.path().join("network.bin");
        let path = path.to_str().unwrap();

        save_network(&network, path).unwrap();
        let loaded = load_network(path).unwrap();

        assert_eq!(loaded.node_count(), 2);
        assert_eq!(loaded.edge_count(), 3);
        assert_eq!(loaded.get_node(2), network.get_node(2));
        assert_eq!(loaded.get_edges(2), network.get_edges(2));
        assert_eq!(loaded.speed_limits(), network.speed_limits());
    }

    #[test]
    fn test_missing_snapshot() {
        assert!(matches!(
            load_network("/nonexistent/network.bin"),
            Err(Error::Io(_))
        ));
    }
}
