//! Loading application configuration (prompts + synthetic delays) from TOML.
//!
//! See `AppConfig`, `Prompts` and `Timing` for the expected schema. Every table
//! and key is optional; missing ones keep their defaults.

use serde::Deserialize;
use tracing::{error, info};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub prompts: Prompts,
  #[serde(default)]
  pub timing: Timing,
}

/// Prompts used by the completion client.
/// `curriculum_user_template` understands `{level}`, `{subject}`, `{duration}` and `{goals}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Prompts {
  pub curriculum_system: String,
  pub curriculum_user_template: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      curriculum_system: r#"You are an expert curriculum designer. Generate a detailed, structured curriculum based on the user's input. Return ONLY valid JSON matching this exact schema (no markdown, no code fences):

{
  "title": "string - descriptive curriculum title",
  "level": "string - the level provided",
  "duration": "string - the duration provided",
  "learningOutcomes": ["array of 4-6 specific, measurable learning outcomes"],
  "weeks": [
    {
      "week": 1,
      "title": "string - descriptive week title",
      "topics": ["3 specific topics with brief descriptions"],
      "assignment": "string - specific, actionable assignment for this week"
    }
  ]
}

Produce between 2 and 16 weeks. Make the curriculum realistic, pedagogically sound, and progressive. Each week should build on previous weeks. Topics should be specific to the subject, not generic. Assignments should be practical and measurable."#.into(),
      curriculum_user_template: "Create a {level} level curriculum for \"{subject}\" spanning {duration}. Learning goals: {goals}".into(),
    }
  }
}

/// Synthetic latency for the offline paths, in milliseconds. Zero disables it.
#[derive(Clone, Debug, Deserialize, Default)]
#[serde(default)]
pub struct Timing {
  pub mock_delay_ms: u64,
  pub audit_delay_ms: u64,
}

/// Attempt to load `AppConfig` from CURRICULA_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_app_config_from_env() -> Option<AppConfig> {
  let path = std::env::var("CURRICULA_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_app_config(&s) {
      Ok(cfg) => {
        info!(target: "curricula_backend", %path, "Loaded app config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "curricula_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "curricula_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

pub fn parse_app_config(s: &str) -> Result<AppConfig, toml::de::Error> {
  toml::from_str::<AppConfig>(s)
}
