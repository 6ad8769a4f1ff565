//! Syllabus audit. The upload is checked and decoded, then a fixed report is
//! returned; no document analysis happens here.

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::GenerationError;

const ACCEPTED_EXTENSIONS: [&str; 3] = [".pdf", ".doc", ".docx"];

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRequest {
  pub file_name: String,
  pub content_base64: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
  pub report_id: String,
  pub file_name: String,
  pub bytes: usize,
  pub freshness_score: u8,
  pub missing_topics: Vec<String>,
  pub outdated_content: Vec<String>,
  pub modern_tools: Vec<String>,
  pub strong_areas: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

/// Decode and sanity-check the upload; returns the decoded byte count.
fn check_upload(req: &AuditRequest) -> Result<usize, GenerationError> {
  let name = req.file_name.trim();
  if name.is_empty() {
    return Err(GenerationError::Validation("fileName is required".into()));
  }
  let lower = name.to_ascii_lowercase();
  if !ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
    return Err(GenerationError::Validation("only .pdf, .doc and .docx syllabi are supported".into()));
  }
  let bytes = STANDARD
    .decode(req.content_base64.trim())
    .map_err(|e| GenerationError::Validation(format!("contentBase64 is not valid base64: {}", e)))?;
  if bytes.is_empty() {
    return Err(GenerationError::Validation("uploaded file is empty".into()));
  }
  Ok(bytes.len())
}

#[instrument(level = "info", skip(req), fields(file_name = %req.file_name, b64_len = req.content_base64.len()))]
pub async fn audit_syllabus(req: &AuditRequest, delay: Duration) -> Result<AuditReport, GenerationError> {
  let bytes = check_upload(req)?;
  if !delay.is_zero() {
    tokio::time::sleep(delay).await;
  }

  let report = AuditReport {
    report_id: Uuid::new_v4().to_string(),
    file_name: req.file_name.trim().to_string(),
    bytes,
    freshness_score: 68,
    missing_topics: strings(&["DevOps & CI/CD Pipelines", "Ethical AI & Bias Mitigation", "Serverless Architecture"]),
    outdated_content: strings(&["Legacy ASP.NET WebForms", "SVN Version Control", "jQuery Heavy Manipulation"]),
    modern_tools: strings(&["Docker & Kubernetes", "React/Next.js", "GitHub Actions", "TensorFlow/PyTorch"]),
    strong_areas: strings(&["Core Data Structures", "Database Fundamentals", "Object-Oriented Design Principles"]),
  };
  info!(report_id = %report.report_id, bytes, "Syllabus audit complete");
  Ok(report)
}
