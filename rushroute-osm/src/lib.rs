mod error;
mod network_builder;
mod network_serde;
pub mod osm;

pub use error::Error;
pub use network_builder::*;
pub use network_serde::{load_network, save_network};
