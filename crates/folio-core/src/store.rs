//! The `LedgerStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `folio-store-sqlite`).
//! Higher layers (`folio-api`) depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::{
  asset::{Asset, AssetWithClient, NewAsset},
  client::{Client, ClientPatch, NewClient},
};

/// Abstraction over a folio ledger backend.
///
/// Every operation is a single request/response against the store; there
/// is no session or multi-step protocol. Isolation across concurrent
/// writes is the backend's concern.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait LedgerStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Clients ───────────────────────────────────────────────────────────

  /// Create and persist a new client. The identifier and creation
  /// timestamp are assigned by the store.
  fn add_client(
    &self,
    input: NewClient,
  ) -> impl Future<Output = Result<Client, Self::Error>> + Send + '_;

  /// Retrieve a client by identifier. Returns `None` if not found.
  fn get_client(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Client>, Self::Error>> + Send + '_;

  /// List all clients.
  fn list_clients(
    &self,
  ) -> impl Future<Output = Result<Vec<Client>, Self::Error>> + Send + '_;

  /// Apply a partial update and return the updated record.
  ///
  /// Fields left unset in `patch` keep their stored value; an empty patch
  /// returns the record unchanged. Returns an error if the client does
  /// not exist.
  fn update_client(
    &self,
    id: i64,
    patch: ClientPatch,
  ) -> impl Future<Output = Result<Client, Self::Error>> + Send + '_;

  /// Delete a client by identifier. Returns an error if the client does
  /// not exist. Handling of the client's assets is the backend's
  /// referential-integrity policy.
  fn delete_client(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Assets ────────────────────────────────────────────────────────────

  /// Persist a new asset for an existing, active client.
  ///
  /// The referenced client is checked before the insert: a missing client
  /// or an inactive one is an error, regardless of any foreign-key
  /// constraint the backend may also enforce.
  fn add_asset(
    &self,
    input: NewAsset,
  ) -> impl Future<Output = Result<Asset, Self::Error>> + Send + '_;

  /// Retrieve an asset by identifier. Returns `None` if not found.
  fn get_asset(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Asset>, Self::Error>> + Send + '_;

  /// List every asset, each joined with its owning client's full record.
  fn list_assets(
    &self,
  ) -> impl Future<Output = Result<Vec<AssetWithClient>, Self::Error>> + Send + '_;

  /// List the assets owned by `client_id`, unjoined. A client with no
  /// assets yields an empty vector; existence of the client is the
  /// caller's concern.
  fn list_assets_for_client(
    &self,
    client_id: i64,
  ) -> impl Future<Output = Result<Vec<Asset>, Self::Error>> + Send + '_;

  /// Delete an asset by identifier. Returns an error if the asset does
  /// not exist.
  fn delete_asset(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
