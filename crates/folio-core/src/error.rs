//! Error types for `folio-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("client not found: {0}")]
  ClientNotFound(i64),

  #[error("client {0} is inactive")]
  ClientInactive(i64),

  #[error("asset not found: {0}")]
  AssetNotFound(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
