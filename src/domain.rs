//! Domain models: course level, generation request, and the curriculum record itself.
//!
//! Wire names are camelCase so the same structs serve the frontend, the remote
//! model's JSON output, and the export endpoint.

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

pub const MAX_SUBJECT_CHARS: usize = 100;
pub const MAX_DURATION_CHARS: usize = 50;
pub const MAX_GOALS_CHARS: usize = 500;
pub const MAX_LEVEL_CHARS: usize = 30;

pub const MIN_WEEKS: usize = 2;
pub const MAX_WEEKS: usize = 16;
pub const MIN_OUTCOMES: usize = 4;
pub const MAX_OUTCOMES: usize = 6;
pub const TOPICS_PER_WEEK: usize = 3;

/// Course level selected in the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
  Beginner,
  Intermediate,
  Advanced,
}

impl Level {
  /// Case-insensitive parse; surrounding whitespace is ignored.
  pub fn parse(s: &str) -> Option<Level> {
    match s.trim().to_ascii_lowercase().as_str() {
      "beginner" => Some(Level::Beginner),
      "intermediate" => Some(Level::Intermediate),
      "advanced" => Some(Level::Advanced),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Level::Beginner => "Beginner",
      Level::Intermediate => "Intermediate",
      Level::Advanced => "Advanced",
    }
  }
}

impl Default for Level {
  fn default() -> Self { Level::Beginner }
}

impl std::fmt::Display for Level {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// The four form fields shared by the mock and remote generation paths.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GenerationRequest {
  pub subject: String,
  pub level: String,
  pub duration: String,
  pub goals: String,
}

impl GenerationRequest {
  /// Trim every field and enforce presence and length limits. A known level is
  /// canonicalized; any other label is kept as typed so template selection can
  /// fall back on it.
  pub fn validate_lenient(&self) -> Result<GenerationRequest, GenerationError> {
    let subject = required("subject", &self.subject, MAX_SUBJECT_CHARS)?;
    let duration = required("duration", &self.duration, MAX_DURATION_CHARS)?;
    let goals = required("goals", &self.goals, MAX_GOALS_CHARS)?;
    let level_raw = required("level", &self.level, MAX_LEVEL_CHARS)?;
    let level = match Level::parse(&level_raw) {
      Some(l) => l.as_str().to_string(),
      None => level_raw,
    };
    Ok(GenerationRequest { subject, level, duration, goals })
  }

  /// Like `validate_lenient`, but the level must be one of the three known ones.
  pub fn validate(&self) -> Result<GenerationRequest, GenerationError> {
    let req = self.validate_lenient()?;
    if Level::parse(&req.level).is_none() {
      return Err(GenerationError::Validation(format!(
        "level must be one of Beginner, Intermediate, Advanced (got '{}')",
        req.level
      )));
    }
    Ok(req)
  }
}

fn required(field: &str, value: &str, max_chars: usize) -> Result<String, GenerationError> {
  let v = value.trim();
  if v.is_empty() {
    return Err(GenerationError::Validation(format!("{} is required", field)));
  }
  if v.chars().count() > max_chars {
    return Err(GenerationError::Validation(format!(
      "{} must be at most {} characters",
      field, max_chars
    )));
  }
  Ok(v.to_string())
}

/// One week of the syllabus.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
  pub week: u32,
  pub title: String,
  pub topics: Vec<String>,
  pub assignment: String,
}

/// Share of activities at one Bloom's taxonomy level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloomShare {
  pub level: String,
  pub percentage: f64,
}

/// The structured syllabus produced by either generation path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curriculum {
  pub title: String,
  pub level: String,
  pub duration: String,
  pub learning_outcomes: Vec<String>,
  pub weeks: Vec<WeekPlan>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub industry_alignment_score: Option<u8>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub blooms_taxonomy: Option<Vec<BloomShare>>,
}

impl Curriculum {
  /// Check the structural invariants of a curriculum that came from outside
  /// (model output, export requests). Returns a short reason on failure.
  pub fn check_shape(&self) -> Result<(), String> {
    if self.title.trim().is_empty() {
      return Err("title is empty".into());
    }
    let n_out = self.learning_outcomes.len();
    if !(MIN_OUTCOMES..=MAX_OUTCOMES).contains(&n_out) {
      return Err(format!("expected {}-{} learning outcomes, got {}", MIN_OUTCOMES, MAX_OUTCOMES, n_out));
    }
    let n_weeks = self.weeks.len();
    if !(MIN_WEEKS..=MAX_WEEKS).contains(&n_weeks) {
      return Err(format!("expected {}-{} weeks, got {}", MIN_WEEKS, MAX_WEEKS, n_weeks));
    }
    for w in &self.weeks {
      if w.week < 1 {
        return Err("week numbers start at 1".into());
      }
      if w.topics.len() != TOPICS_PER_WEEK {
        return Err(format!("week {} has {} topics, expected {}", w.week, w.topics.len(), TOPICS_PER_WEEK));
      }
    }
    if let Some(score) = self.industry_alignment_score {
      if score > 100 {
        return Err(format!("industryAlignmentScore {} out of range", score));
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn req(subject: &str, level: &str, duration: &str, goals: &str) -> GenerationRequest {
    GenerationRequest {
      subject: subject.into(),
      level: level.into(),
      duration: duration.into(),
      goals: goals.into(),
    }
  }

  #[test]
  fn validate_trims_and_canonicalizes_level() {
    let v = req("  Rust  ", "advanced", " 8 weeks ", " ship a CLI ").validate().unwrap();
    assert_eq!(v.subject, "Rust");
    assert_eq!(v.level, "Advanced");
    assert_eq!(v.duration, "8 weeks");
    assert_eq!(v.goals, "ship a CLI");
  }

  #[test]
  fn validate_rejects_blank_fields() {
    let err = req("   ", "Beginner", "8 weeks", "goals").validate().unwrap_err();
    assert!(matches!(err, GenerationError::Validation(ref m) if m.contains("subject")));
    assert!(req("Rust", "Beginner", "", "goals").validate().is_err());
    assert!(req("Rust", "Beginner", "8 weeks", " \t").validate().is_err());
  }

  #[test]
  fn validate_rejects_long_fields_and_unknown_level() {
    let long = "x".repeat(MAX_SUBJECT_CHARS + 1);
    assert!(req(&long, "Beginner", "8 weeks", "goals").validate().is_err());
    assert!(req("Rust", "Expert", "8 weeks", "goals").validate().is_err());
  }

  #[test]
  fn lenient_validation_keeps_unknown_level() {
    let v = req("Rust", " Expert ", "8 weeks", "goals").validate_lenient().unwrap();
    assert_eq!(v.level, "Expert");
    let v = req("Rust", "BEGINNER", "8 weeks", "goals").validate_lenient().unwrap();
    assert_eq!(v.level, "Beginner");
    assert!(req("Rust", "  ", "8 weeks", "goals").validate_lenient().is_err());
    let long = "x".repeat(MAX_LEVEL_CHARS + 1);
    assert!(req("Rust", &long, "8 weeks", "goals").validate_lenient().is_err());
  }

  #[test]
  fn curriculum_uses_camel_case_and_skips_absent_optionals() {
    let c = Curriculum {
      title: "t".into(),
      level: "Beginner".into(),
      duration: "2 weeks".into(),
      learning_outcomes: vec!["a".into()],
      weeks: vec![],
      industry_alignment_score: None,
      blooms_taxonomy: None,
    };
    let v = serde_json::to_value(&c).unwrap();
    assert!(v.get("learningOutcomes").is_some());
    assert!(v.get("industryAlignmentScore").is_none());
    assert!(v.get("bloomsTaxonomy").is_none());
  }

  #[test]
  fn check_shape_flags_wrong_topic_count() {
    let week = |n: u32, topics: usize| WeekPlan {
      week: n,
      title: "w".into(),
      topics: vec!["t".to_string(); topics],
      assignment: "a".into(),
    };
    let mut c = Curriculum {
      title: "t".into(),
      level: "Beginner".into(),
      duration: "2 weeks".into(),
      learning_outcomes: vec!["o".to_string(); 4],
      weeks: vec![week(1, 3), week(2, 3)],
      industry_alignment_score: Some(80),
      blooms_taxonomy: None,
    };
    assert!(c.check_shape().is_ok());
    c.weeks[1] = week(2, 2);
    assert!(c.check_shape().unwrap_err().contains("week 2"));
  }
}
