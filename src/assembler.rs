//! Template-driven curriculum assembly (the offline generation path).
//!
//! `assemble` is pure: same inputs, same output, no I/O.

use tracing::{debug, instrument};

use crate::domain::{Curriculum, WeekPlan};
use crate::normalize::week_count;
use crate::templates::{bank_for, template_for_week};

const MAX_GOAL_OUTCOMES: usize = 2;
const MIN_GOAL_FRAGMENT_CHARS: usize = 5;

#[instrument(level = "debug", skip_all, fields(subject_len = subject.len(), %level, %duration))]
pub fn assemble(subject: &str, level: &str, duration: &str, goals: &str) -> Curriculum {
  let n_weeks = week_count(duration);
  let bank = bank_for(level);
  let subject_lc = subject.to_lowercase();

  let weeks: Vec<WeekPlan> = (0..n_weeks)
    .map(|i| {
      let [head, middle, tail] = *template_for_week(bank, i);
      let assignment = if i == n_weeks - 1 {
        format!("Complete a comprehensive final project demonstrating mastery of {}", subject)
      } else {
        format!(
          "{} exercise: Apply this week's {} concepts in a hands-on activity",
          middle, subject_lc
        )
      };
      WeekPlan {
        week: (i + 1) as u32,
        title: format!("{} in {}", head, subject),
        topics: vec![
          format!("{} — understanding the key aspects of {}", head, subject),
          format!("{} — applying concepts to {}", middle, subject_lc),
          format!("{} — practical exploration of {} techniques", tail, subject_lc),
        ],
        assignment,
      }
    })
    .collect();

  let mut learning_outcomes = vec![
    format!("Demonstrate a strong {}-level understanding of {}", level.to_lowercase(), subject),
    format!("Apply core {} concepts to solve real-world problems", subject_lc),
    format!("Analyze and evaluate {} scenarios using established frameworks", subject_lc),
    format!("Create original work that showcases proficiency in {}", subject_lc),
  ];
  learning_outcomes.extend(goal_outcomes(goals));

  debug!(weeks = weeks.len(), outcomes = learning_outcomes.len(), "Curriculum assembled");

  Curriculum {
    title: format!("{} — {} Curriculum", subject, level),
    level: level.to_string(),
    duration: duration.to_string(),
    learning_outcomes,
    weeks,
    industry_alignment_score: None,
    blooms_taxonomy: None,
  }
}

/// Up to two extra outcomes lifted from the goals text: split on `.`, `,`, `;`,
/// keep trimmed fragments longer than 5 characters.
pub fn goal_outcomes(goals: &str) -> Vec<String> {
  goals
    .split(['.', ',', ';'])
    .map(str::trim)
    .filter(|g| g.chars().count() > MIN_GOAL_FRAGMENT_CHARS)
    .take(MAX_GOAL_OUTCOMES)
    .map(str::to_string)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{MAX_WEEKS, MIN_WEEKS};

  #[test]
  fn week_count_follows_duration() {
    assert_eq!(assemble("Rust", "Beginner", "8 weeks", "ok").weeks.len(), 8);
    assert_eq!(assemble("Rust", "Beginner", "3 months", "ok").weeks.len(), 12);
    assert_eq!(assemble("Rust", "Beginner", "random text", "ok").weeks.len(), 6);
    assert_eq!(assemble("Rust", "Beginner", "20 weeks", "ok").weeks.len(), 16);
    for d in ["1 week", "100 weeks", "5 months", "soon"] {
      let n = assemble("Rust", "Advanced", d, "ok").weeks.len();
      assert!((MIN_WEEKS..=MAX_WEEKS).contains(&n), "{} -> {}", d, n);
    }
  }

  #[test]
  fn weeks_are_numbered_and_titled() {
    let c = assemble("Machine Learning", "Intermediate", "4 weeks", "ok");
    assert_eq!(c.weeks.iter().map(|w| w.week).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(c.weeks[0].title, "Advanced Fundamentals Review in Machine Learning");
    assert_eq!(
      c.weeks[0].topics,
      vec![
        "Advanced Fundamentals Review — understanding the key aspects of Machine Learning".to_string(),
        "Gap Analysis — applying concepts to machine learning".to_string(),
        "Goal Setting — practical exploration of machine learning techniques".to_string(),
      ]
    );
    assert_eq!(
      c.weeks[0].assignment,
      "Gap Analysis exercise: Apply this week's machine learning concepts in a hands-on activity"
    );
    assert!(c.weeks.iter().all(|w| w.topics.len() == 3));
  }

  #[test]
  fn only_last_week_is_the_final_project() {
    let c = assemble("Rust", "Beginner", "10 weeks", "ok");
    let (last, rest) = c.weeks.split_last().unwrap();
    assert_eq!(last.assignment, "Complete a comprehensive final project demonstrating mastery of Rust");
    assert!(rest.iter().all(|w| !w.assignment.contains("comprehensive final project")));
  }

  #[test]
  fn templates_wrap_after_eight_weeks() {
    let c = assemble("Rust", "Beginner", "10 weeks", "ok");
    assert_eq!(c.weeks[8].title, c.weeks[0].title);
    assert_eq!(c.weeks[8].topics, c.weeks[0].topics);
    assert_eq!(c.weeks[9].title, c.weeks[1].title);
  }

  #[test]
  fn unknown_level_uses_beginner_templates_but_keeps_label() {
    let c = assemble("Rust", "Wizard", "2 weeks", "ok");
    assert_eq!(c.weeks[0].title, "Introduction & Fundamentals in Rust");
    assert_eq!(c.title, "Rust — Wizard Curriculum");
    assert!(c.learning_outcomes[0].contains("wizard-level"));
  }

  #[test]
  fn outcomes_take_up_to_two_goal_fragments() {
    assert_eq!(assemble("Rust", "Beginner", "8 weeks", "ok").learning_outcomes.len(), 4);

    let c = assemble(
      "Rust",
      "Beginner",
      "8 weeks",
      "Build a CLI tool. Understand ownership; Write tests, ship it",
    );
    assert_eq!(c.learning_outcomes.len(), 6);
    assert_eq!(c.learning_outcomes[4], "Build a CLI tool");
    assert_eq!(c.learning_outcomes[5], "Understand ownership");

    let one = goal_outcomes("tiny, also, Learn async programming");
    assert_eq!(one, vec!["Learn async programming".to_string()]);
  }

  #[test]
  fn fragment_length_boundary_is_strict() {
    assert!(goal_outcomes("abcde").is_empty());
    assert_eq!(goal_outcomes("  abcdef  "), vec!["abcdef".to_string()]);
  }

  #[test]
  fn output_is_deterministic_and_titled() {
    let a = assemble("Data Science", "Advanced", "3 months", "Publish a paper. Mentor juniors");
    let b = assemble("Data Science", "Advanced", "3 months", "Publish a paper. Mentor juniors");
    assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    assert_eq!(a.title, "Data Science — Advanced Curriculum");
    assert_eq!(a.duration, "3 months");
    assert!(a.check_shape().is_ok());
  }
}
