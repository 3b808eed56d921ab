use super::categorize::WayProperties;
use osmpbfreader::objects::{NodeId, WayId};
use std::collections::HashMap;

// Coord are coordinates in decimal degrees WGS84
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

// Way is a drivable OpenStreetMap way with its ordered node references
#[derive(Clone, Debug)]
pub struct Way {
    pub id: WayId,
    pub nodes: Vec<NodeId>,
    pub properties: WayProperties,
}

// OsmData holds the drivable ways and the coordinates of the nodes they reference
#[derive(Default)]
pub struct OsmData {
    pub nodes: HashMap<NodeId, Coord>,
    pub ways: Vec<Way>,
}
