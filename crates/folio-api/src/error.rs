//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Also defines the crate's [`Json`] extractor, which downgrades axum's
//! body-rejection status to 400 so every malformed request body lands in
//! the same bucket as a schema-validation failure.

use axum::{
  extract::{FromRequest, rejection::JsonRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::validate::Issue;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Request validation failed; carries one entry per offending field.
  #[error("validation failed")]
  Validation(Vec<Issue>),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("forbidden: {0}")]
  Forbidden(String),

  /// Unexpected store failure. The response carries only the static
  /// route message; the cause goes to the log.
  #[error("{message}")]
  Store {
    message: &'static str,
    #[source]
    source:  Box<dyn std::error::Error + Send + Sync>,
  },
}

impl ApiError {
  /// Wrap a store error under a static, route-specific message.
  pub fn store<E>(message: &'static str) -> impl FnOnce(E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    move |source| ApiError::Store { message, source: Box::new(source) }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Validation(issues) => (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({ "error": "validation failed", "issues": issues })),
      )
        .into_response(),
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, axum::Json(json!({ "error": m }))).into_response()
      }
      ApiError::NotFound(m) => {
        (StatusCode::NOT_FOUND, axum::Json(json!({ "error": m }))).into_response()
      }
      ApiError::Forbidden(m) => {
        (StatusCode::FORBIDDEN, axum::Json(json!({ "error": m }))).into_response()
      }
      ApiError::Store { message, source } => {
        tracing::error!(error = %source, "store failure");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          axum::Json(json!({ "error": message })),
        )
          .into_response()
      }
    }
  }
}

/// JSON body extractor whose rejection is an [`ApiError`] (status 400)
/// instead of axum's default 422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}
