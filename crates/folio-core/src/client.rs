//! Client — the registered customer entity that owns assets.
//!
//! Identifiers are positive integers assigned by the store on insert;
//! they are never accepted from callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered client record.
///
/// `active` gates asset creation: new assets may only be attached while
/// the flag is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
  pub id:         i64,
  pub name:       String,
  pub email:      String,
  pub active:     bool,
  /// Server-assigned timestamp; never changes after creation.
  pub created_at: DateTime<Utc>,
}

/// Input to [`crate::store::LedgerStore::add_client`].
/// `id` and `created_at` are always set by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClient {
  pub name:   String,
  pub email:  String,
  pub active: bool,
}

/// A partial update for a client record. Fields left as `None` keep
/// their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientPatch {
  pub name:   Option<String>,
  pub email:  Option<String>,
  pub active: Option<bool>,
}

impl ClientPatch {
  /// `true` when no field is set. An empty patch is still a valid
  /// update request; it returns the record unchanged.
  pub fn is_empty(&self) -> bool {
    self.name.is_none() && self.email.is_none() && self.active.is_none()
  }
}
