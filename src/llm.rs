//! Minimal client for an OpenAI-compatible chat.completions endpoint.
//!
//! One call per curriculum: no retries, no streaming. Upstream status codes are
//! classified into `GenerationError` variants; the completion text is stripped
//! of code fences and parsed as a `Curriculum`.
//!
//! NOTE: We never log the API key, and response bodies are truncated before logging.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::config::Prompts;
use crate::domain::{Curriculum, GenerationRequest};
use crate::error::GenerationError;
use crate::util::{fill_template, strip_code_fences, trunc_for_log};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const LOG_BODY_MAX: usize = 2000;

#[derive(Clone)]
pub struct CompletionClient {
  pub client: reqwest::Client,
  pub api_key: String,
  pub base_url: String,
  pub model: String,
}

impl CompletionClient {
  /// Construct the client if we find LLM_API_KEY; otherwise return None.
  pub fn from_env() -> Option<Self> {
    let api_key = std::env::var("LLM_API_KEY").ok().filter(|k| !k.trim().is_empty())?;
    let base_url = std::env::var("LLM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
    let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
    let timeout_secs = std::env::var("LLM_TIMEOUT_SECS")
      .ok()
      .and_then(|s| s.parse::<u64>().ok())
      .unwrap_or(DEFAULT_TIMEOUT_SECS);

    match Self::new(api_key, base_url, model, Duration::from_secs(timeout_secs)) {
      Ok(c) => Some(c),
      Err(e) => {
        error!(target: "curricula_backend", error = %e, "Failed to build HTTP client");
        None
      }
    }
  }

  pub fn new(
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
  ) -> Result<Self, GenerationError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let base_url = base_url.trim_end_matches('/').to_string();
    Ok(Self { client, api_key, base_url, model })
  }

  /// Single chat completion; returns the raw completion text.
  #[instrument(level = "info", skip(self, system, user), fields(model = %self.model))]
  async fn chat(&self, system: &str, user: &str) -> Result<String, GenerationError> {
    let url = format!("{}/chat/completions", self.base_url);
    let req = ChatCompletionRequest {
      model: self.model.clone(),
      messages: vec![
        ChatMessageReq { role: "system".into(), content: system.into() },
        ChatMessageReq { role: "user".into(), content: user.into() },
      ],
    };

    let start = std::time::Instant::now();
    let res = self.client.post(&url)
      .header(USER_AGENT, "curricula-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
      .json(&req).send().await?;

    let status = res.status();
    if !status.is_success() {
      let body = res.text().await.unwrap_or_default();
      return Err(classify_failure(status, &body));
    }

    let body: ChatCompletionResponse = res.json().await?;
    let elapsed = start.elapsed();
    if let Some(usage) = &body.usage {
      info!(?elapsed, prompt_tokens = ?usage.prompt_tokens, completion_tokens = ?usage.completion_tokens, total_tokens = ?usage.total_tokens, "Completion usage");
    }

    body.choices.into_iter().next()
      .and_then(|c| c.message.content)
      .filter(|t| !t.trim().is_empty())
      .ok_or(GenerationError::EmptyResponse)
  }

  /// Ask the model for a curriculum and parse its JSON answer.
  #[instrument(
    level = "info",
    skip(self, prompts, req),
    fields(level = %req.level, duration = %req.duration, subject_len = req.subject.len(), goals_len = req.goals.len())
  )]
  pub async fn generate_curriculum(
    &self,
    prompts: &Prompts,
    req: &GenerationRequest,
  ) -> Result<Curriculum, GenerationError> {
    let user = fill_template(
      &prompts.curriculum_user_template,
      &[
        ("level", req.level.as_str()),
        ("subject", req.subject.as_str()),
        ("duration", req.duration.as_str()),
        ("goals", req.goals.as_str()),
      ],
    );

    let text = self.chat(&prompts.curriculum_system, &user).await?;
    let curriculum = parse_curriculum(&text)?;
    info!(weeks = curriculum.weeks.len(), outcomes = curriculum.learning_outcomes.len(), "Curriculum generated by model");
    Ok(curriculum)
  }
}

/// Strip code fences from completion text and parse + shape-check the curriculum.
pub fn parse_curriculum(text: &str) -> Result<Curriculum, GenerationError> {
  let cleaned = strip_code_fences(text);
  let curriculum = serde_json::from_str::<Curriculum>(&cleaned).map_err(|e| {
    error!(target: "curricula_backend", error = %e, content = %trunc_for_log(text, LOG_BODY_MAX), "Failed to parse AI response");
    GenerationError::SchemaParse(e.to_string())
  })?;
  curriculum.check_shape().map_err(|reason| {
    error!(target: "curricula_backend", %reason, "AI response does not match curriculum schema");
    GenerationError::SchemaParse(reason)
  })?;
  Ok(curriculum)
}

fn classify_failure(status: StatusCode, body: &str) -> GenerationError {
  match status {
    StatusCode::TOO_MANY_REQUESTS => {
      warn!(target: "curricula_backend", %status, "Completion service rate limited the request");
      GenerationError::RateLimited
    }
    StatusCode::PAYMENT_REQUIRED => {
      warn!(target: "curricula_backend", %status, "Completion service quota exhausted");
      GenerationError::QuotaExceeded
    }
    _ => {
      let msg = extract_api_error(body).unwrap_or_else(|| trunc_for_log(body, LOG_BODY_MAX));
      error!(target: "curricula_backend", %status, body = %msg, "AI gateway error");
      GenerationError::Upstream { status: status.as_u16() }
    }
  }
}

// --- Chat DTOs ---

#[derive(Serialize)]
struct ChatCompletionRequest {
  model: String,
  messages: Vec<ChatMessageReq>,
}
#[derive(Serialize)]
struct ChatMessageReq { role: String, content: String }

#[derive(Deserialize)]
struct ChatCompletionResponse {
  #[serde(default)] choices: Vec<ChatChoice>,
  #[serde(default)] usage: Option<Usage>,
}
#[derive(Deserialize)]
struct ChatChoice { message: ChatMessageResp }
#[derive(Deserialize)]
struct ChatMessageResp { content: Option<String> }
#[derive(Deserialize)]
struct Usage {
  #[serde(default)] prompt_tokens: Option<u32>,
  #[serde(default)] completion_tokens: Option<u32>,
  #[serde(default)] total_tokens: Option<u32>,
}

/// Try to extract a clean error message from an OpenAI-style error body.
fn extract_api_error(body: &str) -> Option<String> {
  #[derive(Deserialize)]
  struct EWrap { error: EObj }
  #[derive(Deserialize)]
  struct EObj { message: String }
  serde_json::from_str::<EWrap>(body).ok().map(|w| w.error.message)
}
