use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Can't decode PBF: {0}")]
    Pbf(String),
    #[error("Invalid network snapshot: {0}")]
    Snapshot(#[from] bincode::Error),
}
