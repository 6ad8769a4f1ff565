//! Mock multi-semester degree plan.
//!
//! Every semester gets the same five-slot layout (two core, one elective, a lab
//! and a communication elective), with course codes derived from the semester
//! index. The first core course chains to the previous semester's one.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::GenerationError;

const DEFAULT_SEMESTERS: usize = 8;
const MAX_SEMESTERS: usize = 16;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramRequest {
  pub degree: String,
  pub specialization: String,
  #[serde(default)] pub years: String,
  #[serde(default)] pub semesters: String,
  #[serde(default)] pub industry_focus: String,
  #[serde(default)] pub university_pattern: String,
  #[serde(default)] pub total_credits: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SubjectKind {
  Core,
  Elective,
  Lab,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SemesterSubject {
  pub code: String,
  pub name: String,
  #[serde(rename = "type")]
  pub kind: SubjectKind,
  pub credits: u32,
  pub prerequisite: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Semester {
  pub id: u32,
  pub subjects: Vec<SemesterSubject>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProgramPlan {
  pub semesters: Vec<Semester>,
}

/// Semester count from the leading number of the form value ("6 semesters" is 6).
/// No leading digits, or zero, means the default.
fn semester_count(raw: &str) -> usize {
  let digits: String = raw.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
  if digits.is_empty() {
    return DEFAULT_SEMESTERS;
  }
  match digits.parse::<usize>() {
    Ok(0) => DEFAULT_SEMESTERS,
    Ok(n) => n.min(MAX_SEMESTERS),
    Err(_) => MAX_SEMESTERS,
  }
}

#[instrument(
  level = "info",
  skip_all,
  fields(semesters = %req.semesters, years = %req.years, pattern = %req.university_pattern, total_credits = %req.total_credits)
)]
pub fn build_program(req: &ProgramRequest) -> Result<ProgramPlan, GenerationError> {
  let degree = req.degree.trim();
  let specialization = req.specialization.trim();
  if degree.is_empty() || specialization.is_empty() {
    return Err(GenerationError::Validation("degree and specialization are required".into()));
  }
  let focus = req.industry_focus.trim();

  let semesters = (0..semester_count(&req.semesters))
    .map(|i| {
      let base = 100 + i * 10;
      let subject = |code: String, name: String, kind: SubjectKind, credits: u32, prerequisite: String| {
        SemesterSubject { code, name, kind, credits, prerequisite }
      };
      Semester {
        id: (i + 1) as u32,
        subjects: vec![
          subject(
            format!("CS{}", base + 1),
            if i == 0 { "Introduction to Programming".to_string() } else { format!("Advanced {} {}", specialization, i) },
            SubjectKind::Core,
            4,
            if i > 0 { format!("CS{}", base - 10 + 1) } else { "-".to_string() },
          ),
          subject(format!("CS{}", base + 2), format!("Mathematics for {} {}", degree, i + 1), SubjectKind::Core, 3, "-".into()),
          subject(format!("CS{}", base + 3), format!("{} Principles", focus), SubjectKind::Elective, 3, "-".into()),
          subject(format!("LB{}", base + 1), format!("{} Lab {}", specialization, i + 1), SubjectKind::Lab, 2, "-".into()),
          subject(format!("HS{}", base + 1), "Communication Skills".into(), SubjectKind::Elective, 2, "-".into()),
        ],
      }
    })
    .collect();

  Ok(ProgramPlan { semesters })
}
