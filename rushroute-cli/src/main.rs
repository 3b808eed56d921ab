mod comparison;
mod export;
mod interactive;
mod sampling;

#[cfg(test)]
mod test_utils;

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use comparison::{compare, print_comparison};
use export::routes_to_json;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rushroute::spatial::NodeLocator;
use rushroute::{CostModel, NodeId, PathFinder, PatternSimulator, Profile, RoadNetwork};
use rushroute_osm::{import_osm_pbf, load_network};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::str::FromStr;
use std::time::Instant;

/// Coordinate given as `lat,lon`
#[derive(Copy, Clone, Debug)]
struct LatLon {
    lat: f64,
    lon: f64,
}

impl FromStr for LatLon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coords: Vec<_> = s.split(',').map(|c| c.trim().parse::<f64>()).collect();
        match coords.as_slice() {
            [Ok(lat), Ok(lon)] => Ok(LatLon { lat: *lat, lon: *lon }),
            _ => Err(format!("Expected 'lat,lon', got '{}'", s)),
        }
    }
}

/// Compares shortest distance, traditional GPS and learned traffic routes
#[derive(Parser)]
#[command(name = "rushroute")]
struct Args {
    /// Network snapshot written by rushroute-osm
    #[arg(long, conflicts_with = "pbf", required_unless_present = "pbf")]
    network: Option<String>,
    /// OpenStreetMap PBF extract, imported on startup
    #[arg(long)]
    pbf: Option<String>,
    /// JSON routing profile overriding speed limits and rush hours
    #[arg(long)]
    profile: Option<String>,
    /// Seed for the traffic pattern simulation and node sampling
    #[arg(long)]
    seed: Option<u64>,
    /// Hour of the day, evening rush by default
    #[arg(long, default_value_t = 17, value_parser = clap::value_parser!(u8).range(0..24))]
    hour: u8,
    #[arg(long, conflicts_with = "from_coord")]
    from: Option<NodeId>,
    #[arg(long, conflicts_with = "to_coord")]
    to: Option<NodeId>,
    /// Origin as `lat,lon`, snapped to the closest node
    #[arg(long, allow_hyphen_values = true)]
    from_coord: Option<LatLon>,
    /// Destination as `lat,lon`, snapped to the closest node
    #[arg(long, allow_hyphen_values = true)]
    to_coord: Option<LatLon>,
    /// Print routes as JSON instead of the comparison
    #[arg(long)]
    json: bool,
    /// Keep asking for routes after the first comparison
    #[arg(long)]
    interactive: bool,
}

fn load_profile(path: &str) -> anyhow::Result<Profile> {
    let file = File::open(path).with_context(|| format!("Can't open profile {}", path))?;
    serde_json::from_reader(BufReader::new(file)).with_context(|| format!("Invalid profile {}", path))
}

// A snapshot keeps the speed limits it was imported with unless a profile replaces them
fn load(args: &Args, profile: Option<&Profile>) -> anyhow::Result<RoadNetwork> {
    let timer = Instant::now();
    let network = match (&args.network, &args.pbf) {
        (Some(path), _) => {
            let mut network = load_network(path)?;
            if let Some(profile) = profile {
                info!("Applying profile speed limits to snapshot {}", path);
                network.apply_speed_limits(profile.speed_limits.clone());
            }
            network
        }
        (None, Some(pbf)) => {
            let speed_limits = profile.map(|p| p.speed_limits.clone()).unwrap_or_default();
            import_osm_pbf(pbf, speed_limits)?
        }
        (None, None) => bail!("Either --network or --pbf is required"),
    };
    info!(
        "Loaded network with {} nodes and {} edges in {:.1} seconds",
        network.node_count(),
        network.edge_count(),
        timer.elapsed().as_secs_f32()
    );
    Ok(network)
}

fn endpoint(
    network: &RoadNetwork,
    locator: &NodeLocator,
    id: Option<NodeId>,
    coord: Option<LatLon>,
    fallback: Option<NodeId>,
) -> anyhow::Result<NodeId> {
    if let Some(id) = id {
        return Ok(id);
    }
    if let Some(coord) = coord {
        return locator
            .nearest(coord.lat, coord.lon)
            .ok_or_else(|| anyhow!("No node close to {},{}", coord.lat, coord.lon));
    }
    fallback.ok_or_else(|| {
        anyhow!(
            "Could not find connected nodes in a network of {} nodes",
            network.node_count()
        )
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let profile = args.profile.as_deref().map(load_profile).transpose()?;
    let mut network = load(&args, profile.as_ref())?;

    let simulator = match args.seed {
        Some(seed) => PatternSimulator::with_seed(seed),
        None => PatternSimulator::from_entropy(),
    };
    simulator.apply(&mut network);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let samples = sampling::random_connected_nodes(&network, 10, &mut rng);
    let locator = NodeLocator::new(&network);

    let origin = endpoint(&network, &locator, args.from, args.from_coord, samples.first().copied())?;
    let destination = endpoint(&network, &locator, args.to, args.to_coord, samples.get(1).copied())?;
    info!("Routing from node {} to node {} at {}h", origin, destination, args.hour);

    let rush_hours = profile.map(|p| p.rush_hours).unwrap_or_default();
    let finder = PathFinder::new(&network, CostModel::new(rush_hours));
    let routes = compare(&finder, origin, destination, args.hour)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        writeln!(out, "{}", routes_to_json(&network, &routes)?)?;
    } else {
        print_comparison(&routes, &mut out)?;
    }

    if args.interactive {
        let stdin = io::stdin();
        interactive::run(&finder, &samples, stdin.lock(), &mut out)?;
    }
    Ok(())
}
