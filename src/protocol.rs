//! HTTP request/response DTOs that are not domain records themselves (serde ready).
//! Curriculum, program and audit payloads live next to the code that builds them.

use axum::extract::FromRequest;
use serde::{Deserialize, Serialize};

use crate::domain::Curriculum;
use crate::error::GenerationError;

/// JSON body extractor whose rejections render as `{error}` with a 400.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(GenerationError))]
pub struct ApiJson<T>(pub T);

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorOut {
  pub error: String,
}

#[derive(Serialize)]
pub struct HealthOut {
  pub ok: bool,
  /// True when a completion API key is configured.
  pub remote: bool,
}

#[derive(Deserialize)]
pub struct ExportIn {
  pub curriculum: Curriculum,
  pub subject: String,
}
