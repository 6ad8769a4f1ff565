//! Error taxonomy for curriculum generation and its HTTP mapping.
//!
//! Every failure leaves the service as `{ "error": "<message>" }` with the status
//! returned by [`GenerationError::status`]. Nothing here retries.

use axum::{
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use thiserror::Error;

use crate::protocol::ErrorOut;

#[derive(Error, Debug)]
pub enum GenerationError {
  /// A required field is missing, too long, or not a known value.
  #[error("{0}")]
  Validation(String),

  #[error("Rate limit exceeded. Please try again in a moment.")]
  RateLimited,

  #[error("AI usage limit reached. Please add credits to continue.")]
  QuotaExceeded,

  /// Any other non-success status from the completion service.
  #[error("AI gateway error")]
  Upstream { status: u16 },

  /// The completion text was not a curriculum JSON object.
  #[error("Failed to parse curriculum from AI response: {0}")]
  SchemaParse(String),

  #[error("No content in AI response")]
  EmptyResponse,

  #[error("LLM_API_KEY is not configured")]
  NotConfigured,

  /// The request never produced a response (connect, timeout, body read).
  #[error("AI gateway unreachable: {0}")]
  Transport(String),
}

impl GenerationError {
  pub fn status(&self) -> StatusCode {
    match self {
      GenerationError::Validation(_) => StatusCode::BAD_REQUEST,
      GenerationError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
      GenerationError::QuotaExceeded => StatusCode::PAYMENT_REQUIRED,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// Status the completion service answered with, for generic upstream failures.
  pub fn upstream_status(&self) -> Option<u16> {
    match self {
      GenerationError::Upstream { status } => Some(*status),
      _ => None,
    }
  }
}

impl From<reqwest::Error> for GenerationError {
  fn from(e: reqwest::Error) -> Self {
    GenerationError::Transport(e.to_string())
  }
}

/// Malformed or incomplete request bodies are client errors like any other
/// validation failure.
impl From<JsonRejection> for GenerationError {
  fn from(rejection: JsonRejection) -> Self {
    GenerationError::Validation(rejection.body_text())
  }
}

impl IntoResponse for GenerationError {
  fn into_response(self) -> Response {
    (self.status(), Json(ErrorOut { error: self.to_string() })).into_response()
  }
}
