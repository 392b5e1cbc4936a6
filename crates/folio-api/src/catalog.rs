//! Handler for `GET /assets/catalog`.

use axum::Json;
use folio_core::catalog::{CATALOG, CatalogEntry};

/// `GET /assets/catalog` — the fixed reference list, unconditionally 200.
/// Stored state never changes the answer.
pub async fn list() -> Json<&'static [CatalogEntry]> {
  Json(CATALOG.as_slice())
}
