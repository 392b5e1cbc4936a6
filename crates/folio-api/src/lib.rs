//! JSON REST API for the folio asset ledger.
//!
//! Exposes an axum [`Router`] backed by any [`folio_core::store::LedgerStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! axum::serve(listener, folio_api::api_router(store.clone())).await?;
//! ```

pub mod assets;
pub mod catalog;
pub mod clients;
pub mod error;
pub mod validate;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, post, put},
};
use folio_core::store::LedgerStore;
use serde::Deserialize;

pub use error::{ApiError, Json};

#[cfg(test)]
mod tests;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// `FOLIO_*` environment.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: std::path::PathBuf,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: LedgerStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Clients
    .route("/clients", post(clients::create::<S>))
    .route("/clients/list", get(clients::list::<S>))
    .route("/clients/edit/{id}", put(clients::update::<S>))
    .route("/clients/delete/{id}", delete(clients::remove::<S>))
    // Assets
    .route("/assets", get(assets::list::<S>).post(assets::create::<S>))
    .route("/assets/cliente/{id}", get(assets::list_for_client::<S>))
    .route("/assets/delete/{id}", delete(assets::remove::<S>))
    // Catalog
    .route("/assets/catalog", get(catalog::list))
    .with_state(store)
}
