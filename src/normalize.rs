//! Duration text → week count.
//!
//! "<n> week" wins over "<n> month" (months count as 4 weeks); anything else is
//! the default. The result is always clamped into `MIN_WEEKS..=MAX_WEEKS`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{MAX_WEEKS, MIN_WEEKS};

pub const DEFAULT_WEEKS: usize = 6;
const WEEKS_PER_MONTH: usize = 4;

static WEEK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s*week").unwrap());
static MONTH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s*month").unwrap());

/// Extract a bounded week count from free text. Never fails.
pub fn week_count(duration: &str) -> usize {
  let raw = if let Some(n) = first_number(&WEEK_RE, duration) {
    n
  } else if let Some(n) = first_number(&MONTH_RE, duration) {
    n.saturating_mul(WEEKS_PER_MONTH)
  } else {
    DEFAULT_WEEKS
  };
  raw.clamp(MIN_WEEKS, MAX_WEEKS)
}

// Digit runs too long for usize saturate, so they clamp to the maximum.
fn first_number(re: &Regex, text: &str) -> Option<usize> {
  let digits = re.captures(text)?.get(1)?.as_str();
  Some(digits.parse::<usize>().unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn weeks_and_months() {
    assert_eq!(week_count("8 weeks"), 8);
    assert_eq!(week_count("3 months"), 12);
    assert_eq!(week_count("10Weeks intensive"), 10);
    assert_eq!(week_count("About 2 MONTHS"), 8);
  }

  #[test]
  fn defaults_when_nothing_matches() {
    assert_eq!(week_count("random text"), DEFAULT_WEEKS);
    assert_eq!(week_count("a semester"), DEFAULT_WEEKS);
    assert_eq!(week_count("weeks"), DEFAULT_WEEKS);
  }

  #[test]
  fn clamps_into_range() {
    assert_eq!(week_count("20 weeks"), 16);
    assert_eq!(week_count("1 week"), 2);
    assert_eq!(week_count("0 weeks"), 2);
    assert_eq!(week_count("6 months"), 16);
    assert_eq!(week_count("99999999999999999999999 weeks"), 16);
  }

  #[test]
  fn week_beats_month_regardless_of_position() {
    assert_eq!(week_count("2 months or 5 weeks"), 5);
    assert_eq!(week_count("3 weeks over 1 month"), 3);
  }
}
