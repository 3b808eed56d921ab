use thiserror::Error;

/// Rejected query. Lookups of absent nodes aren't errors, they return `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
  #[error("Invalid query parameter: {0}")]
  InvalidQueryParameter(String),
}
