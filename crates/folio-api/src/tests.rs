//! Router-level tests: real handlers over an in-memory SQLite store.

use std::sync::Arc;

use axum::{
  Router,
  body::{self, Body},
  http::{Request, StatusCode, header},
};
use folio_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::api_router;

async fn app() -> Router {
  let store = SqliteStore::open_in_memory()
    .await
    .expect("in-memory store");
  api_router(Arc::new(store))
}

/// Drive one request through the router; returns the status and the JSON
/// body (`Null` for empty bodies).
async fn send(
  app: &Router,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> (StatusCode, Value) {
  let request = match body {
    Some(v) => Request::builder()
      .method(method)
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(v.to_string()))
      .unwrap(),
    None => Request::builder()
      .method(method)
      .uri(uri)
      .body(Body::empty())
      .unwrap(),
  };

  let response = app.clone().oneshot(request).await.unwrap();
  let status = response.status();
  let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
  let value = if bytes.is_empty() {
    Value::Null
  } else {
    // Most responses are JSON, but axum's path-rejection 400s carry a
    // plain-text body; fall back to a string rather than panicking.
    serde_json::from_slice(&bytes)
      .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
  };
  (status, value)
}

async fn create_client(app: &Router, name: &str, email: &str, active: bool) -> Value {
  let (status, body) = send(
    app,
    "POST",
    "/clients",
    Some(json!({ "name": name, "email": email, "active": active })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  body
}

// ─── Clients ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_client_returns_201_with_integer_id() {
  let app = app().await;
  let client = create_client(&app, "Ana", "ana@x.com", true).await;

  assert!(client["id"].as_i64().unwrap() > 0);
  assert_eq!(client["name"], "Ana");
  assert_eq!(client["email"], "ana@x.com");
  assert_eq!(client["active"], true);
  assert!(client["createdAt"].is_string());
}

#[tokio::test]
async fn create_client_malformed_email_is_rejected() {
  let app = app().await;
  let (status, body) = send(
    &app,
    "POST",
    "/clients",
    Some(json!({ "name": "Ana", "email": "not-an-email", "active": true })),
  )
  .await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["issues"][0]["field"], "email");

  // Nothing was persisted.
  let (_, clients) = send(&app, "GET", "/clients/list", None).await;
  assert_eq!(clients.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_client_missing_field_is_400() {
  let app = app().await;
  let (status, _) = send(
    &app,
    "POST",
    "/clients",
    Some(json!({ "name": "Ana", "email": "ana@x.com" })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_client_blank_name_is_rejected() {
  let app = app().await;
  let (status, body) = send(
    &app,
    "POST",
    "/clients",
    Some(json!({ "name": "   ", "email": "ana@x.com", "active": true })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["issues"][0]["field"], "name");
}

#[tokio::test]
async fn create_client_duplicate_email_is_500() {
  let app = app().await;
  create_client(&app, "Ana", "ana@x.com", true).await;

  let (status, body) = send(
    &app,
    "POST",
    "/clients",
    Some(json!({ "name": "Ana 2", "email": "ana@x.com", "active": true })),
  )
  .await;
  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(body["error"], "failed to create client");
}

#[tokio::test]
async fn list_clients_returns_all() {
  let app = app().await;
  create_client(&app, "Ana", "ana@x.com", true).await;
  create_client(&app, "Bia", "bia@x.com", false).await;

  let (status, clients) = send(&app, "GET", "/clients/list", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(clients.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn update_client_partial_body() {
  let app = app().await;
  let client = create_client(&app, "Ana", "ana@x.com", true).await;
  let id = client["id"].as_i64().unwrap();

  let (status, updated) = send(
    &app,
    "PUT",
    &format!("/clients/edit/{id}"),
    Some(json!({ "active": false })),
  )
  .await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(updated["active"], false);
  assert_eq!(updated["name"], "Ana");
  assert_eq!(updated["email"], "ana@x.com");
}

#[tokio::test]
async fn update_client_empty_body_is_a_noop() {
  let app = app().await;
  let client = create_client(&app, "Ana", "ana@x.com", true).await;
  let id = client["id"].as_i64().unwrap();

  let (status, updated) =
    send(&app, "PUT", &format!("/clients/edit/{id}"), Some(json!({}))).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(updated["name"], "Ana");
  assert_eq!(updated["email"], "ana@x.com");
  assert_eq!(updated["active"], true);
}

#[tokio::test]
async fn update_client_unknown_field_is_rejected() {
  let app = app().await;
  let client = create_client(&app, "Ana", "ana@x.com", true).await;
  let id = client["id"].as_i64().unwrap();

  let (status, _) = send(
    &app,
    "PUT",
    &format!("/clients/edit/{id}"),
    Some(json!({ "nickname": "A" })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_client_missing_record_is_400() {
  let app = app().await;
  let (status, body) = send(
    &app,
    "PUT",
    "/clients/edit/99",
    Some(json!({ "active": false })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "failed to update client");
}

#[tokio::test]
async fn delete_client_returns_204_and_removes_it() {
  let app = app().await;
  let client = create_client(&app, "Ana", "ana@x.com", true).await;
  let id = client["id"].as_i64().unwrap();

  let (status, body) =
    send(&app, "DELETE", &format!("/clients/delete/{id}"), None).await;
  assert_eq!(status, StatusCode::NO_CONTENT);
  assert_eq!(body, Value::Null);

  let (_, clients) = send(&app, "GET", "/clients/list", None).await;
  assert_eq!(clients.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn delete_client_missing_is_404() {
  let app = app().await;
  let (status, _) = send(&app, "DELETE", "/clients/delete/7", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

// ─── Assets ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_asset_name_outside_catalog_is_rejected() {
  let app = app().await;
  let client = create_client(&app, "Ana", "ana@x.com", true).await;

  let (status, body) = send(
    &app,
    "POST",
    "/assets",
    Some(json!({ "name": "DOGE", "value": 1.0, "clientId": client["id"] })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["issues"][0]["field"], "name");
}

#[tokio::test]
async fn create_asset_for_missing_client_is_400_and_persists_nothing() {
  let app = app().await;

  let (status, body) = send(
    &app,
    "POST",
    "/assets",
    Some(json!({ "name": "PETR4", "value": 39.5, "clientId": 123 })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "client not found");

  let (_, assets) = send(&app, "GET", "/assets", None).await;
  assert_eq!(assets.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_asset_for_inactive_client_is_403_and_persists_nothing() {
  let app = app().await;
  let client = create_client(&app, "Bia", "bia@x.com", false).await;
  let id = client["id"].as_i64().unwrap();

  let (status, _) = send(
    &app,
    "POST",
    "/assets",
    Some(json!({ "name": "VALE3", "value": 67.8, "clientId": id })),
  )
  .await;
  assert_eq!(status, StatusCode::FORBIDDEN);

  let (_, assets) = send(&app, "GET", &format!("/assets/cliente/{id}"), None).await;
  assert_eq!(assets.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn list_assets_joins_owning_client() {
  let app = app().await;
  let client = create_client(&app, "Ana", "ana@x.com", true).await;
  let id = client["id"].as_i64().unwrap();

  let (status, _) = send(
    &app,
    "POST",
    "/assets",
    Some(json!({ "name": "PETR4", "value": 39.5, "clientId": id })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);

  let (status, assets) = send(&app, "GET", "/assets", None).await;
  assert_eq!(status, StatusCode::OK);
  let assets = assets.as_array().unwrap();
  assert_eq!(assets.len(), 1);
  assert_eq!(assets[0]["client"]["email"], "ana@x.com");
  assert_eq!(assets[0]["clientId"], id);
}

#[tokio::test]
async fn list_assets_by_client_with_none_is_empty_array() {
  let app = app().await;
  let client = create_client(&app, "Ana", "ana@x.com", true).await;
  let id = client["id"].as_i64().unwrap();

  let (status, assets) = send(&app, "GET", &format!("/assets/cliente/{id}"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(assets.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn list_assets_by_unknown_client_is_404() {
  let app = app().await;
  let (status, _) = send(&app, "GET", "/assets/cliente/42", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_assets_by_malformed_client_id_is_400() {
  let app = app().await;

  let (status, _) = send(&app, "GET", "/assets/cliente/abc", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (status, _) = send(&app, "GET", "/assets/cliente/0", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_asset_returns_204() {
  let app = app().await;
  let client = create_client(&app, "Ana", "ana@x.com", true).await;
  let id = client["id"].as_i64().unwrap();

  let (_, asset) = send(
    &app,
    "POST",
    "/assets",
    Some(json!({ "name": "PETR4", "value": 39.5, "clientId": id })),
  )
  .await;
  let asset_id = asset["id"].as_i64().unwrap();

  let (status, _) =
    send(&app, "DELETE", &format!("/assets/delete/{asset_id}"), None).await;
  assert_eq!(status, StatusCode::NO_CONTENT);

  let (_, assets) = send(&app, "GET", &format!("/assets/cliente/{id}"), None).await;
  assert_eq!(assets.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn delete_asset_missing_is_404() {
  let app = app().await;
  let (status, _) = send(&app, "DELETE", "/assets/delete/5", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn catalog_is_fixed_regardless_of_stored_state() {
  let app = app().await;

  let (status, before) = send(&app, "GET", "/assets/catalog", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(before.as_array().unwrap().len(), 15);

  create_client(&app, "Ana", "ana@x.com", true).await;

  let (status, after) = send(&app, "GET", "/assets/catalog", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(after, before);
  assert_eq!(after[0]["name"], "PETR4");
  assert_eq!(after[0]["referencePrice"], 39.5);
}

// ─── End to end ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_client_then_asset_then_list_by_client() {
  let app = app().await;

  let client = create_client(&app, "Ana", "ana@x.com", true).await;
  let client_id = client["id"].as_i64().unwrap();

  let (status, asset) = send(
    &app,
    "POST",
    "/assets",
    Some(json!({ "name": "PETR4", "value": 39.5, "clientId": client_id })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  let asset_id = asset["id"].as_i64().unwrap();

  let (status, assets) =
    send(&app, "GET", &format!("/assets/cliente/{client_id}"), None).await;
  assert_eq!(status, StatusCode::OK);
  let assets = assets.as_array().unwrap();
  assert_eq!(assets.len(), 1);
  assert_eq!(assets[0]["id"].as_i64().unwrap(), asset_id);
  assert_eq!(assets[0]["name"], "PETR4");
  assert_eq!(assets[0]["value"], 39.5);
  assert_eq!(assets[0]["clientId"], client_id);
}
