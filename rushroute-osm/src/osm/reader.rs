use super::categorize::*;
use super::models::*;
use crate::Error;
use log::info;
use std::io::{Read, Seek};
use std::time::Instant;

struct Reader {
    data: OsmData,
}

impl Reader {
    fn new() -> Reader {
        Reader {
            data: OsmData::default(),
        }
    }

    fn read_ways<R: Read>(&mut self, pbf: &mut osmpbfreader::OsmPbfReader<R>) -> Result<(), Error> {
        for obj in pbf.par_iter() {
            if let osmpbfreader::OsmObj::Way(way) = obj.map_err(decode_error)? {
                let mut properties = WayProperties::default();
                for (key, val) in way.tags.iter() {
                    properties.update(key.as_str(), val.as_str());
                }
                if properties.drivable() && way.nodes.len() >= 2 {
                    self.data.ways.push(Way {
                        id: way.id,
                        nodes: way.nodes,
                        properties,
                    });
                }
            }
        }
        Ok(())
    }

    // Only the nodes referenced by a drivable way are kept
    fn read_nodes<R: Read>(&mut self, pbf: &mut osmpbfreader::OsmPbfReader<R>) -> Result<(), Error> {
        let referenced: std::collections::HashSet<_> = self
            .data
            .ways
            .iter()
            .flat_map(|way| way.nodes.iter().cloned())
            .collect();

        for obj in pbf.par_iter() {
            if let osmpbfreader::OsmObj::Node(node) = obj.map_err(decode_error)? {
                if referenced.contains(&node.id) {
                    self.data.nodes.insert(
                        node.id,
                        Coord {
                            lat: node.lat(),
                            lon: node.lon(),
                        },
                    );
                }
            }
        }
        Ok(())
    }
}

// A corrupt or truncated block fails the whole import instead of yielding a partial network
fn decode_error(e: osmpbfreader::Error) -> Error {
    Error::Pbf(e.to_string())
}

pub fn read_pbf<R: Read + Seek>(input: R) -> Result<OsmData, Error> {
    let mut r = Reader::new();
    let mut pbf = osmpbfreader::OsmPbfReader::new(input);

    {
        let t = Instant::now();
        r.read_ways(&mut pbf)?;
        info!(
            "Decoded {} drivable ways in {:.2}s",
            r.data.ways.len(),
            t.elapsed().as_secs_f32()
        );
    }
    {
        let t = Instant::now();
        pbf.rewind().map_err(decode_error)?;
        r.read_nodes(&mut pbf)?;
        info!(
            "Decoded {} nodes in {:.2}s",
            r.data.nodes.len(),
            t.elapsed().as_secs_f32()
        );
    }

    Ok(r.data)
}

pub fn read_ways(filename: &str) -> Result<OsmData, Error> {
    let file = std::fs::File::open(filename)?;
    read_pbf(file)
}
