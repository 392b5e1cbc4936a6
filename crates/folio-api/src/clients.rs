//! Handlers for the `/clients` endpoint group.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/clients` | Body: `{"name","email","active"}`; 201 |
//! | `GET`    | `/clients/list` | All clients, no pagination |
//! | `PUT`    | `/clients/edit/:id` | Strict partial body; unknown fields rejected |
//! | `DELETE` | `/clients/delete/:id` | 204, or 404 if absent |

use std::sync::Arc;

use axum::{
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use folio_core::{
  client::{Client, ClientPatch, NewClient},
  store::LedgerStore,
};
use serde::Deserialize;

use crate::{
  Json,
  error::ApiError,
  validate::{check_email, check_id, check_name, fail_on},
};

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateClientBody {
  pub name:   String,
  pub email:  String,
  pub active: bool,
}

/// `POST /clients` — returns 201 + the stored record.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateClientBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: LedgerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let mut issues = Vec::new();
  check_name(&mut issues, &body.name);
  check_email(&mut issues, &body.email);
  fail_on(issues)?;

  let client = store
    .add_client(NewClient {
      name:   body.name,
      email:  body.email,
      active: body.active,
    })
    .await
    .map_err(ApiError::store("failed to create client"))?;

  Ok((StatusCode::CREATED, axum::Json(client)))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /clients/list`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<axum::Json<Vec<Client>>, ApiError>
where
  S: LedgerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let clients = store
    .list_clients()
    .await
    .map_err(ApiError::store("failed to list clients"))?;
  Ok(axum::Json(clients))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// Strict partial body for `PUT /clients/edit/:id`. Unknown keys are a
/// deserialisation error, which the [`Json`] extractor maps to 400.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateClientBody {
  pub name:   Option<String>,
  pub email:  Option<String>,
  pub active: Option<bool>,
}

/// `PUT /clients/edit/:id` — applies the present fields, returns the
/// updated record. An empty body `{}` is a valid no-op.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<UpdateClientBody>,
) -> Result<axum::Json<Client>, ApiError>
where
  S: LedgerStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  check_id(id)?;

  let mut issues = Vec::new();
  if let Some(name) = &body.name {
    check_name(&mut issues, name);
  }
  if let Some(email) = &body.email {
    check_email(&mut issues, email);
  }
  fail_on(issues)?;

  let patch = ClientPatch {
    name:   body.name,
    email:  body.email,
    active: body.active,
  };

  // A missing record and a constraint violation (e.g. duplicate email)
  // both come back as a store error; the route reports 400 either way.
  let client = store.update_client(id, patch).await.map_err(|e| {
    tracing::warn!(client_id = id, error = %e, "client update failed");
    ApiError::BadRequest("failed to update client".to_owned())
  })?;

  Ok(axum::Json(client))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /clients/delete/:id` — 204 on success, 404 if absent.
/// Dependent assets are handled by the store's referential policy.
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
    .get_client(id)
    .await
    .map_err(ApiError::store("failed to delete client"))?
    .ok_or_else(|| ApiError::NotFound(format!("client {id} not found")))?;

  store
    .delete_client(id)
    .await
    .map_err(ApiError::store("failed to delete client"))?;

  Ok(StatusCode::NO_CONTENT)
}
