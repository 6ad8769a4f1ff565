//! Week-topic template banks, one per level.
//!
//! Each bank holds 8 triples ordered from fundamentals to capstone. Week `i`
//! (0-based) uses `bank[i % 8]`, so longer courses cycle through the bank again.

use crate::domain::Level;

pub const BANK_SIZE: usize = 8;

/// Three phrase fragments: title/first topic, second topic (also drives the
/// assignment), third topic.
pub type Template = [&'static str; 3];
pub type TemplateBank = [Template; BANK_SIZE];

pub static BEGINNER: TemplateBank = [
  ["Introduction & Fundamentals", "Core Concepts Overview", "Setting Up Your Environment"],
  ["Basic Terminology", "Key Principles", "Foundational Frameworks"],
  ["Hands-On Basics", "Guided Practice", "Simple Exercises"],
  ["Building Blocks", "Step-by-Step Walkthroughs", "Practical Examples"],
  ["Intermediate Concepts", "Connecting Ideas", "Pattern Recognition"],
  ["Applied Learning", "Mini Projects", "Peer Discussion"],
  ["Review & Consolidation", "Practice Assessment", "Knowledge Check"],
  ["Capstone Project", "Final Presentation", "Course Wrap-up"],
];

pub static INTERMEDIATE: TemplateBank = [
  ["Advanced Fundamentals Review", "Gap Analysis", "Goal Setting"],
  ["Deep Dive into Core Theory", "Case Studies", "Analytical Frameworks"],
  ["Advanced Techniques", "Best Practices", "Industry Standards"],
  ["Complex Problem Solving", "Real-World Scenarios", "Critical Thinking"],
  ["Integration & Systems Thinking", "Cross-Domain Applications", "Synthesis"],
  ["Project Planning", "Design Methodology", "Implementation Strategy"],
  ["Advanced Project Work", "Iteration & Feedback", "Quality Assurance"],
  ["Portfolio Development", "Professional Presentation", "Peer Review"],
];

pub static ADVANCED: TemplateBank = [
  ["State of the Art Review", "Research Methodology", "Advanced Theory"],
  ["Cutting-Edge Techniques", "Innovation Frameworks", "Experimental Design"],
  ["Expert-Level Analysis", "Complex Systems", "Advanced Modeling"],
  ["Research & Development", "Original Contributions", "Peer Review"],
  ["Leadership in Practice", "Mentoring Others", "Knowledge Transfer"],
  ["Industry Applications", "Consulting Scenarios", "Strategic Planning"],
  ["Advanced Capstone Project", "Publication-Ready Work", "Presentation"],
  ["Professional Development", "Career Strategy", "Continuing Education"],
];

/// Bank for a level label. Unknown labels get the Beginner bank.
pub fn bank_for(level: &str) -> &'static TemplateBank {
  match Level::parse(level).unwrap_or_default() {
    Level::Beginner => &BEGINNER,
    Level::Intermediate => &INTERMEDIATE,
    Level::Advanced => &ADVANCED,
  }
}

/// Template for 0-based week index, wrapping every `BANK_SIZE` weeks.
pub fn template_for_week(bank: &'static TemplateBank, week_index: usize) -> &'static Template {
  &bank[week_index % BANK_SIZE]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn levels_select_their_bank() {
    assert_eq!(bank_for("Beginner")[0][0], "Introduction & Fundamentals");
    assert_eq!(bank_for("Intermediate")[0][0], "Advanced Fundamentals Review");
    assert_eq!(bank_for("advanced")[0][0], "State of the Art Review");
  }

  #[test]
  fn unknown_level_falls_back_to_beginner() {
    assert!(std::ptr::eq(bank_for("Wizard"), &BEGINNER));
    assert!(std::ptr::eq(bank_for(""), &BEGINNER));
  }

  #[test]
  fn index_wraps_modulo_bank_size() {
    let bank = bank_for("Beginner");
    assert_eq!(template_for_week(bank, 8), template_for_week(bank, 0));
    assert_eq!(template_for_week(bank, 15), template_for_week(bank, 7));
    assert_eq!(template_for_week(bank, 7)[0], "Capstone Project");
  }
}
