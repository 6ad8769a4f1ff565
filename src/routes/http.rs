//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Errors leave as `GenerationError`, which renders `{error}` with the mapped status.

use std::sync::Arc;
use axum::{extract::State, Json, response::IntoResponse};
use tracing::{info, instrument};

use crate::audit::{AuditReport, AuditRequest};
use crate::domain::{Curriculum, GenerationRequest};
use crate::error::GenerationError;
use crate::export::Document;
use crate::logic::*;
use crate::program::{ProgramPlan, ProgramRequest};
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn http_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(HealthOut { ok: true, remote: state.llm.is_some() })
}

#[instrument(level = "info", skip(state, body), fields(subject_len = body.subject.len(), goals_len = body.goals.len()))]
pub async fn http_post_mock_curriculum(
  State(state): State<Arc<AppState>>,
  ApiJson(body): ApiJson<GenerationRequest>,
) -> Result<Json<Curriculum>, GenerationError> {
  generate_mock(&state, &body).await.map(Json)
}

#[instrument(level = "info", skip(state, body), fields(subject_len = body.subject.len(), goals_len = body.goals.len()))]
pub async fn http_post_generate_curriculum(
  State(state): State<Arc<AppState>>,
  ApiJson(body): ApiJson<GenerationRequest>,
) -> Result<Json<Curriculum>, GenerationError> {
  match generate_remote(&state, &body).await {
    Ok(c) => {
      info!(target: "curricula_backend", weeks = c.weeks.len(), "Remote curriculum served");
      Ok(Json(c))
    }
    Err(e) => {
      info!(target: "curricula_backend", status = e.status().as_u16(), upstream_status = ?e.upstream_status(), error = %e, "Remote curriculum failed");
      Err(e)
    }
  }
}

#[instrument(level = "info", skip(body), fields(weeks = body.curriculum.weeks.len()))]
pub async fn http_post_export(ApiJson(body): ApiJson<ExportIn>) -> Result<Json<Document>, GenerationError> {
  export_curriculum(&body).map(Json)
}

#[instrument(level = "info", skip(body))]
pub async fn http_post_program(ApiJson(body): ApiJson<ProgramRequest>) -> Result<Json<ProgramPlan>, GenerationError> {
  plan_program(&body).map(Json)
}

#[instrument(level = "info", skip(state, body), fields(file_name = %body.file_name))]
pub async fn http_post_audit(
  State(state): State<Arc<AppState>>,
  ApiJson(body): ApiJson<AuditRequest>,
) -> Result<Json<AuditReport>, GenerationError> {
  run_audit(&state, &body).await.map(Json)
}
