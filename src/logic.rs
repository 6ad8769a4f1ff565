//! Core behaviors behind the HTTP handlers.
//!
//! This includes:
//!   - Mock (template) generation with an optional synthetic delay
//!   - Remote generation through the completion client
//!   - Document export, program building and the syllabus audit

use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::assembler::assemble;
use crate::audit::{audit_syllabus, AuditReport, AuditRequest};
use crate::domain::{Curriculum, GenerationRequest};
use crate::error::GenerationError;
use crate::export::{render_document, Document};
use crate::program::{build_program, ProgramPlan, ProgramRequest};
use crate::protocol::ExportIn;
use crate::state::AppState;

#[instrument(level = "info", skip_all, fields(level = %req.level, duration = %req.duration))]
pub async fn generate_mock(state: &AppState, req: &GenerationRequest) -> Result<Curriculum, GenerationError> {
  // Unknown levels are allowed here; the Beginner bank covers them.
  let req = req.validate_lenient()?;
  let delay = Duration::from_millis(state.timing.mock_delay_ms);
  if !delay.is_zero() {
    tokio::time::sleep(delay).await;
  }
  let c = assemble(&req.subject, &req.level, &req.duration, &req.goals);
  info!(target: "curricula_backend", weeks = c.weeks.len(), outcomes = c.learning_outcomes.len(), "Mock curriculum served");
  Ok(c)
}

#[instrument(level = "info", skip_all, fields(level = %req.level, duration = %req.duration))]
pub async fn generate_remote(state: &AppState, req: &GenerationRequest) -> Result<Curriculum, GenerationError> {
  let req = req.validate()?;
  let Some(client) = &state.llm else {
    warn!(target: "curricula_backend", "Remote generation requested but LLM_API_KEY is not set");
    return Err(GenerationError::NotConfigured);
  };
  client.generate_curriculum(&state.prompts, &req).await
}

pub fn export_curriculum(body: &ExportIn) -> Result<Document, GenerationError> {
  body.curriculum.check_shape().map_err(GenerationError::Validation)?;
  Ok(render_document(&body.curriculum, body.subject.trim()))
}

pub fn plan_program(req: &ProgramRequest) -> Result<ProgramPlan, GenerationError> {
  build_program(req)
}

pub async fn run_audit(state: &AppState, req: &AuditRequest) -> Result<AuditReport, GenerationError> {
  audit_syllabus(req, Duration::from_millis(state.timing.audit_delay_ms)).await
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::{Prompts, Timing};

  fn offline_state(mock_delay_ms: u64) -> AppState {
    AppState::from_parts(None, Prompts::default(), Timing { mock_delay_ms, audit_delay_ms: 0 })
  }

  fn request() -> GenerationRequest {
    GenerationRequest {
      subject: " Rust ".into(),
      level: "intermediate".into(),
      duration: "3 months".into(),
      goals: "Write async services. Profile hot paths".into(),
    }
  }

  #[tokio::test]
  async fn mock_generation_uses_validated_inputs() {
    let c = generate_mock(&offline_state(0), &request()).await.unwrap();
    assert_eq!(c.title, "Rust — Intermediate Curriculum");
    assert_eq!(c.weeks.len(), 12);
    assert_eq!(c.learning_outcomes.len(), 6);
  }

  #[tokio::test(start_paused = true)]
  async fn mock_generation_waits_for_configured_delay() {
    let start = tokio::time::Instant::now();
    generate_mock(&offline_state(2000), &request()).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(2000));
  }

  #[tokio::test]
  async fn invalid_input_never_reaches_generation() {
    let mut r = request();
    r.goals = "   ".into();
    assert!(matches!(generate_mock(&offline_state(0), &r).await, Err(GenerationError::Validation(_))));
    assert!(matches!(generate_remote(&offline_state(0), &r).await, Err(GenerationError::Validation(_))));
  }

  #[tokio::test]
  async fn mock_accepts_unknown_level_but_remote_does_not() {
    let mut r = request();
    r.level = "Expert".into();
    let c = generate_mock(&offline_state(0), &r).await.unwrap();
    assert_eq!(c.title, "Rust — Expert Curriculum");
    assert_eq!(c.weeks[0].title, "Introduction & Fundamentals in Rust");
    assert!(matches!(generate_remote(&offline_state(0), &r).await, Err(GenerationError::Validation(_))));
  }

  #[tokio::test]
  async fn remote_without_key_is_not_configured() {
    let err = generate_remote(&offline_state(0), &request()).await.unwrap_err();
    assert!(matches!(err, GenerationError::NotConfigured));
  }

  #[test]
  fn export_rejects_malformed_curriculum() {
    let mut curriculum = assemble("Rust", "Beginner", "4 weeks", "ok");
    curriculum.learning_outcomes.truncate(2);
    let err = export_curriculum(&ExportIn { curriculum, subject: "Rust".into() }).unwrap_err();
    assert!(matches!(err, GenerationError::Validation(_)));
  }
}
