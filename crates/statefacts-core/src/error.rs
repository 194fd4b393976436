//! Error types for `statefacts-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown state code: {0:?}")]
  UnknownStateCode(String),

  #[error("fun fact index {index} is out of range for a list of {len}")]
  IndexOutOfRange { index: usize, len: usize },

  #[error("malformed reference dataset: {0}")]
  Dataset(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
