//! Paginated document layout for a curriculum.
//!
//! Positions are in millimetres on an A4-sized page, top margin 20. Bullets
//! break to a new page past 270, week headings past 240 so a heading is never
//! stranded at the bottom of a page.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::domain::Curriculum;

const TOP: u32 = 20;
const BULLET_BREAK: u32 = 270;
const HEADING_BREAK: u32 = 240;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
  Title,
  Subtitle,
  Heading,
  Body,
  Emphasis,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Line {
  pub y: u32,
  pub style: LineStyle,
  pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page {
  pub number: u32,
  pub lines: Vec<Line>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
  pub file_name: String,
  pub pages: Vec<Page>,
}

/// Cursor over the current page.
struct Layout {
  pages: Vec<Page>,
  y: u32,
}

impl Layout {
  fn new() -> Self {
    Self { pages: vec![Page { number: 1, lines: vec![] }], y: TOP }
  }

  fn break_if_past(&mut self, limit: u32) {
    if self.y > limit {
      let number = self.pages.len() as u32 + 1;
      self.pages.push(Page { number, lines: vec![] });
      self.y = TOP;
    }
  }

  fn put(&mut self, style: LineStyle, text: String, advance: u32) {
    let y = self.y;
    if let Some(page) = self.pages.last_mut() {
      page.lines.push(Line { y, style, text });
    }
    self.y += advance;
  }
}

/// `"Intro to  ML"` → `"Intro_to_ML_Curriculum.pdf"`.
pub fn file_name_for(subject: &str) -> String {
  let joined = subject.split_whitespace().collect::<Vec<_>>().join("_");
  format!("{}_Curriculum.pdf", joined)
}

#[instrument(level = "info", skip(curriculum), fields(weeks = curriculum.weeks.len(), subject_len = subject.len()))]
pub fn render_document(curriculum: &Curriculum, subject: &str) -> Document {
  let mut doc = Layout::new();

  doc.put(LineStyle::Title, curriculum.title.clone(), 12);
  doc.put(
    LineStyle::Subtitle,
    format!("Level: {} | Duration: {}", curriculum.level, curriculum.duration),
    16,
  );

  doc.put(LineStyle::Heading, "Learning Outcomes".into(), 8);
  for outcome in &curriculum.learning_outcomes {
    doc.break_if_past(BULLET_BREAK);
    doc.put(LineStyle::Body, format!("• {}", outcome), 6);
  }
  doc.y += 8;

  for week in &curriculum.weeks {
    doc.break_if_past(HEADING_BREAK);
    doc.put(LineStyle::Heading, format!("Week {}: {}", week.week, week.title), 7);
    for topic in &week.topics {
      doc.break_if_past(BULLET_BREAK);
      doc.put(LineStyle::Body, format!("  • {}", topic), 5);
    }
    doc.y += 3;
    doc.put(LineStyle::Emphasis, format!("Assignment: {}", week.assignment), 10);
  }

  debug!(pages = doc.pages.len(), "Document laid out");
  Document { file_name: file_name_for(subject), pages: doc.pages }
}
