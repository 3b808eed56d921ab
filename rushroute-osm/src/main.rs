use clap::Parser;
use log::info;
use rushroute::SpeedLimits;
use rushroute_osm::{import_osm_pbf, save_network};
use std::time::Instant;

/// Imports an OpenStreetMap extract into a road network snapshot
#[derive(Parser)]
#[command(name = "rushroute-osm")]
struct Args {
    /// OpenStreetMap PBF extract
    pbf: String,
    /// Where to write the network snapshot
    out: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let load_timer = Instant::now();

    let network = import_osm_pbf(&args.pbf, SpeedLimits::default())?;

    info!(
        "Loaded network with {} nodes and {} edges in {:.2} seconds",
        network.node_count(),
        network.edge_count(),
        load_timer.elapsed().as_secs_f32()
    );

    save_network(&network, &args.out)?;
    info!("Saved network snapshot to {}", args.out);
    Ok(())
}
