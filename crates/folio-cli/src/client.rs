//! Async HTTP client wrapping the folio JSON API.

use anyhow::{Context, Result, anyhow};
use folio_core::{
  asset::{Asset, AssetWithClient, NewAsset},
  client::{Client, ClientPatch, NewClient},
};
use reqwest::Response;
use serde::Deserialize;
use std::time::Duration;

/// A catalog row as served by the API. Deserialised locally because the
/// server-side entries borrow their names from the binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRow {
  pub name:            String,
  pub category:        String,
  pub reference_price: f64,
}

/// Async HTTP client for the folio JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client:   reqwest::Client,
  base_url: String,
}

impl ApiClient {
  pub fn new(base_url: String) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, base_url })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{path}", self.base_url.trim_end_matches('/'))
  }

  /// Map a non-2xx response to an error carrying the server's message.
  async fn check(resp: Response, what: &str) -> Result<Response> {
    if resp.status().is_success() {
      return Ok(resp);
    }
    let status = resp.status();
    let message = resp.text().await.unwrap_or_default();
    Err(anyhow!("{what} → {status}: {message}"))
  }

  // ── Clients ───────────────────────────────────────────────────────────────

  /// `GET /clients/list`
  pub async fn list_clients(&self) -> Result<Vec<Client>> {
    let resp = self
      .client
      .get(self.url("/clients/list"))
      .send()
      .await
      .context("GET /clients/list failed")?;
    Self::check(resp, "GET /clients/list")
      .await?
      .json()
      .await
      .context("deserialising clients")
  }

  /// `POST /clients`
  pub async fn create_client(&self, input: &NewClient) -> Result<Client> {
    let resp = self
      .client
      .post(self.url("/clients"))
      .json(input)
      .send()
      .await
      .context("POST /clients failed")?;
    Self::check(resp, "POST /clients")
      .await?
      .json()
      .await
      .context("deserialising created client")
  }

  /// `PUT /clients/edit/:id`
  pub async fn update_client(&self, id: i64, patch: &ClientPatch) -> Result<Client> {
    let resp = self
      .client
      .put(self.url(&format!("/clients/edit/{id}")))
      .json(patch)
      .send()
      .await
      .context("PUT /clients/edit failed")?;
    Self::check(resp, "PUT /clients/edit")
      .await?
      .json()
      .await
      .context("deserialising updated client")
  }

  /// `DELETE /clients/delete/:id`
  pub async fn delete_client(&self, id: i64) -> Result<()> {
    let resp = self
      .client
      .delete(self.url(&format!("/clients/delete/{id}")))
      .send()
      .await
      .context("DELETE /clients/delete failed")?;
    Self::check(resp, "DELETE /clients/delete").await?;
    Ok(())
  }

  // ── Assets ────────────────────────────────────────────────────────────────

  /// `GET /assets`
  pub async fn list_assets(&self) -> Result<Vec<AssetWithClient>> {
    let resp = self
      .client
      .get(self.url("/assets"))
      .send()
      .await
      .context("GET /assets failed")?;
    Self::check(resp, "GET /assets")
      .await?
      .json()
      .await
      .context("deserialising assets")
  }

  /// `GET /assets/cliente/:id`
  pub async fn client_assets(&self, client_id: i64) -> Result<Vec<Asset>> {
    let resp = self
      .client
      .get(self.url(&format!("/assets/cliente/{client_id}")))
      .send()
      .await
      .context("GET /assets/cliente failed")?;
    Self::check(resp, "GET /assets/cliente")
      .await?
      .json()
      .await
      .context("deserialising client assets")
  }

  /// `POST /assets`
  pub async fn create_asset(&self, input: &NewAsset) -> Result<Asset> {
    let resp = self
      .client
      .post(self.url("/assets"))
      .json(input)
      .send()
      .await
      .context("POST /assets failed")?;
    Self::check(resp, "POST /assets")
      .await?
      .json()
      .await
      .context("deserialising created asset")
  }

  /// `DELETE /assets/delete/:id`
  pub async fn delete_asset(&self, id: i64) -> Result<()> {
    let resp = self
      .client
      .delete(self.url(&format!("/assets/delete/{id}")))
      .send()
      .await
      .context("DELETE /assets/delete failed")?;
    Self::check(resp, "DELETE /assets/delete").await?;
    Ok(())
  }

  // ── Catalog ───────────────────────────────────────────────────────────────

  /// `GET /assets/catalog`
  pub async fn catalog(&self) -> Result<Vec<CatalogRow>> {
    let resp = self
      .client
      .get(self.url("/assets/catalog"))
      .send()
      .await
      .context("GET /assets/catalog failed")?;
    Self::check(resp, "GET /assets/catalog")
      .await?
      .json()
      .await
      .context("deserialising catalog")
  }
}
