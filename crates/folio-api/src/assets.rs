//! Handlers for the `/assets` endpoint group.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/assets` | Body: `{"name","value","clientId"}`; 201 |
//! | `GET`    | `/assets` | All assets, each joined with its client |
//! | `GET`    | `/assets/cliente/:id` | One client's assets, unjoined |
//! | `DELETE` | `/assets/delete/:id` | 204, or 404 if absent |
//!
//! Asset names are restricted to the reference catalog, and a client must
//! be active to receive new assets.

use std::sync::Arc;

use axum::{
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use folio_core::{
  asset::{Asset, AssetWithClient, NewAsset},
  catalog,
  store::LedgerStore,
};
use serde::Deserialize;

use crate::{
  Json,
  error::ApiError,
  validate::{Issue, check_id, fail_on},
};

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetBody {
  pub name:      String,
  pub value:     f64,
  pub client_id: i64,
}

/// `POST /assets` — returns 201 + the stored record.
///
/// 400 if the referenced client does not exist, 403 if it is inactive.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateAssetBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: LedgerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let mut issues = Vec::new();
  if !catalog::contains_name(&body.name) {
    issues.push(Issue::new("name", "must be one of the catalog asset names"));
  }
  if body.client_id <= 0 {
    issues.push(Issue::new("clientId", "must be a positive integer"));
  }
  fail_on(issues)?;

  let client = store
    .get_client(body.client_id)
    .await
    .map_err(ApiError::store("failed to create asset"))?
    .ok_or_else(|| ApiError::BadRequest("client not found".to_owned()))?;

  if !client.active {
    return Err(ApiError::Forbidden(
      "client is inactive; activate it before adding assets".to_owned(),
    ));
  }

  let asset = store
    .add_asset(NewAsset {
      name:      body.name,
      value:     body.value,
      client_id: body.client_id,
    })
    .await
    .map_err(ApiError::store("failed to create asset"))?;

  Ok((StatusCode::CREATED, axum::Json(asset)))
}

// ─── List all ─────────────────────────────────────────────────────────────────

/// `GET /assets` — every asset, annotated with its owning client.
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<axum::Json<Vec<AssetWithClient>>, ApiError>
where
  S: LedgerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let assets = store
    .list_assets()
    .await
    .map_err(ApiError::store("failed to list assets"))?;
  Ok(axum::Json(assets))
}

// ─── List by client ───────────────────────────────────────────────────────────

/// `GET /assets/cliente/:id` — 404 if the client does not exist, otherwise
/// the client's assets (an empty array is a normal answer).
pub async fn list_for_client<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<axum::Json<Vec<Asset>>, ApiError>
where
  S: LedgerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  check_id(id)?;

  store
    .get_client(id)
    .await
    .map_err(ApiError::store("failed to list assets"))?
    .ok_or_else(|| ApiError::NotFound("client not found".to_owned()))?;

  let assets = store
    .list_assets_for_client(id)
    .await
    .map_err(ApiError::store("failed to list assets"))?;

  Ok(axum::Json(assets))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /assets/delete/:id` — 204 on success, 404 if absent.
pub async fn remove<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError>
where
  S: LedgerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  check_id(id)?;

  store
    .get_asset(id)
    .await
    .map_err(ApiError::store("failed to delete asset"))?
    .ok_or_else(|| ApiError::NotFound(format!("asset {id} not found")))?;

  store
    .delete_asset(id)
    .await
    .map_err(ApiError::store("failed to delete asset"))?;

  Ok(StatusCode::NO_CONTENT)
}
