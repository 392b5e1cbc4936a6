//! Decoding helpers between SQLite rows and the core domain types.
//!
//! Timestamps are stored as RFC 3339 strings; the `active` flag as the
//! integers 0/1, which rusqlite converts to `bool` directly. Identifiers
//! are SQLite rowids and need no decoding.

use chrono::{DateTime, Utc};
use folio_core::{
  asset::AssetWithClient,
  client::Client,
};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `clients` row.
pub struct RawClient {
  pub id:         i64,
  pub name:       String,
  pub email:      String,
  pub active:     bool,
  pub created_at: String,
}

impl RawClient {
  pub fn into_client(self) -> Result<Client> {
    Ok(Client {
      id:         self.id,
      name:       self.name,
      email:      self.email,
      active:     self.active,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw values read from an `assets` row joined with its `clients` row.
pub struct RawAssetWithClient {
  pub id:        i64,
  pub name:      String,
  pub value:     f64,
  pub client_id: i64,
  pub client:    RawClient,
}

impl RawAssetWithClient {
  pub fn into_asset_with_client(self) -> Result<AssetWithClient> {
    Ok(AssetWithClient {
      id:        self.id,
      name:      self.name,
      value:     self.value,
      client_id: self.client_id,
      client:    self.client.into_client()?,
    })
  }
}
