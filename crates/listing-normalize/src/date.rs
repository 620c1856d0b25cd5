//! Date extraction from free text.
//!
//! Two notations are recognized anywhere inside a string:
//!
//! - `D[D].M[M].YYYY` (day first, period separated), e.g. `31.1.2016`
//! - `M[M]-D[D]-YYYY` (US, month first, hyphen separated), e.g. `12-31-2016`
//!
//! Both render as `DD.MM.YYYY`. Values are not checked against the calendar,
//! so `31.02.2016` passes through unchanged.

use std::sync::LazyLock;

use regex::Regex;

use crate::normalizer::{MatchGroups, Normalizer};

/// Date pattern groups:
/// - 1: day (period form) or month (US form)
/// - 2: month (period form)
/// - 3: year (period form)
/// - 4: day (US form)
/// - 5: year (US form)
static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})(?:\.([0-9]{1,2})\.([0-9]{4})|-([0-9]{1,2})-([0-9]{4}))")
        .expect("Invalid date regex")
});

const LEADING: usize = 1;
const MONTH: usize = 2;
const YEAR: usize = 3;
const US_DAY: usize = 4;
const US_YEAR: usize = 5;

/// Notation of a matched date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `D[D].M[M].YYYY`
    DayMonthYear,
    /// `M[M]-D[D]-YYYY`
    Us,
}

impl DateFormat {
    /// Determines which branch of the date pattern matched.
    ///
    /// The period form is the only one that captures group 2, so its presence
    /// decides the notation.
    pub fn detect(groups: &MatchGroups<'_>) -> Self {
        if groups.is_present(MONTH) {
            DateFormat::DayMonthYear
        } else {
            DateFormat::Us
        }
    }
}

/// Normalizes the first date found in a string to `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateNormalizer;

impl DateNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for DateNormalizer {
    fn pattern(&self) -> &Regex {
        &DATE_REGEX
    }

    fn rewrite(&self, groups: Option<&MatchGroups<'_>>) -> String {
        let Some(groups) = groups else {
            return String::new();
        };
        let (day, month, year) = match DateFormat::detect(groups) {
            DateFormat::DayMonthYear => (groups.get(LEADING), groups.get(MONTH), groups.get(YEAR)),
            DateFormat::Us => (groups.get(US_DAY), groups.get(LEADING), groups.get(US_YEAR)),
        };
        format!(
            "{}.{}.{}",
            zero_pad(day.unwrap_or_default()),
            zero_pad(month.unwrap_or_default()),
            year.unwrap_or_default()
        )
    }
}

/// Pads a one-digit component to two digits.
fn zero_pad(component: &str) -> String {
    format!("{component:0>2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_period_form() {
        let groups = DateNormalizer.extract("1.2.2016").unwrap();
        assert_eq!(DateFormat::detect(&groups), DateFormat::DayMonthYear);
        assert_eq!(groups.get(US_DAY), None);
        assert_eq!(groups.get(US_YEAR), None);
    }

    #[test]
    fn detect_us_form() {
        let groups = DateNormalizer.extract("1-2-2016").unwrap();
        assert_eq!(DateFormat::detect(&groups), DateFormat::Us);
        assert_eq!(groups.get(MONTH), None);
        assert_eq!(groups.get(YEAR), None);
    }

    #[test]
    fn zero_pad_only_short_components() {
        assert_eq!(zero_pad("1"), "01");
        assert_eq!(zero_pad("12"), "12");
    }

    #[test]
    fn rewrite_without_match_is_empty() {
        assert_eq!(DateNormalizer.rewrite(None), "");
    }
}
