//! Asset — a financial position record belonging to exactly one client.
//!
//! Assets are write-once: they are created and deleted, never updated.

use serde::{Deserialize, Serialize};

use crate::client::Client;

/// A persisted asset record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
  pub id:        i64,
  pub name:      String,
  pub value:     f64,
  pub client_id: i64,
}

/// Input to [`crate::store::LedgerStore::add_asset`].
///
/// `client_id` must resolve to an existing, active client at creation
/// time; the store checks both before inserting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
  pub name:      String,
  pub value:     f64,
  pub client_id: i64,
}

/// An asset joined with its owning client's full record, as returned by
/// the list-all operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetWithClient {
  pub id:        i64,
  pub name:      String,
  pub value:     f64,
  pub client_id: i64,
  pub client:    Client,
}
