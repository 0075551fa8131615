//! Per-intent validation rule chains
//!
//! Each chain evaluates an ordered list of checks over the current slot
//! mapping and returns the first violation, or `Valid`. A check only
//! fires when its slot is present, so a chain can run on every turn
//! while slots fill in one at a time. Violation messages quote the
//! rejected value and name the violated slot; the handler turns them
//! into a re-elicit for exactly that slot.

pub mod rules;

use chrono::NaiveDate;
use tracing::debug;

use crate::event::{Slots, slot};

/// Outcome of running a rule chain over the current slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every present slot passed its checks.
    Valid,
    /// The first check that failed, with the message to re-prompt with.
    Invalid {
        /// Name of the violated slot.
        slot: String,
        /// User-facing message explaining the rejection.
        message: String,
    },
}

impl ValidationResult {
    fn invalid(slot: &str, message: String) -> Self {
        Self::Invalid {
            slot: slot.to_string(),
            message,
        }
    }

    /// True for the `Valid` outcome.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Rule chain for the rating intent.
///
/// Order: location, date parseability, score range, date not in the
/// future, date within the last 30 days.
pub fn validate_rating(slots: &Slots, today: NaiveDate) -> ValidationResult {
    debug!("validating rating slots");

    if let Some(location) = slots.get(slot::SESSION_LOCATION) {
        if !rules::is_valid_location(location) {
            return ValidationResult::invalid(
                slot::SESSION_LOCATION,
                format!(
                    "{location} is not a valid session location. Which city did this event \
                     take place in? Please can you try a different location?"
                ),
            );
        }
    }

    if let Some(date) = slots.get(slot::SESSION_DATE) {
        if !rules::is_valid_date(date) {
            return ValidationResult::invalid(slot::SESSION_DATE, date_format_message(date));
        }
    }

    if let Some(raw_score) = slots.get(slot::SESSION_SCORE) {
        let in_range = rules::parse_score(raw_score).is_some_and(rules::is_valid_score);
        if !in_range {
            return ValidationResult::invalid(
                slot::SESSION_SCORE,
                format!(
                    "{raw_score} is not a valid session score. Please enter a score \
                     between 1 and 5"
                ),
            );
        }
    }

    if let Some(raw_date) = slots.get(slot::SESSION_DATE) {
        if let Some(date) = rules::parse_flexible_date(raw_date) {
            if rules::is_future_date(date, today) {
                return ValidationResult::invalid(
                    slot::SESSION_DATE,
                    future_date_message(raw_date),
                );
            }
            if !rules::within_last_days(date, today, 30) {
                return ValidationResult::invalid(
                    slot::SESSION_DATE,
                    format!(
                        "{raw_date} is more than 30 days ago and I only record ratings for \
                         sessions in the last 30 days. Please enter a more recent date or \
                         leave a rating more promptly next time."
                    ),
                );
            }
        }
    }

    ValidationResult::Valid
}

/// Rule chain for the feedback intent.
///
/// Order: location, date parseability, date not in the future, date
/// within the last 30 days, then comments. The comments check only
/// activates once the session id, location, and date are all present;
/// free text is deliberately the last slot solicited.
pub fn validate_feedback(slots: &Slots, today: NaiveDate) -> ValidationResult {
    debug!("validating feedback slots");

    if let Some(location) = slots.get(slot::SESSION_LOCATION) {
        if !rules::is_valid_location(location) {
            return ValidationResult::invalid(
                slot::SESSION_LOCATION,
                format!(
                    "{location} is not a valid session location. Which city did this event \
                     take place in? Please can you try a different location?"
                ),
            );
        }
    }

    if let Some(date) = slots.get(slot::SESSION_DATE) {
        if !rules::is_valid_date(date) {
            return ValidationResult::invalid(slot::SESSION_DATE, date_format_message(date));
        }
    }

    if let Some(raw_date) = slots.get(slot::SESSION_DATE) {
        if let Some(date) = rules::parse_flexible_date(raw_date) {
            if rules::is_future_date(date, today) {
                return ValidationResult::invalid(
                    slot::SESSION_DATE,
                    future_date_message(raw_date),
                );
            }
            if !rules::within_last_days(date, today, 30) {
                return ValidationResult::invalid(
                    slot::SESSION_DATE,
                    format!(
                        "{raw_date} is more than 30 days ago and I only record feedback for \
                         sessions in the last 30 days. Please enter a more recent date or \
                         leave your feedback more promptly next time."
                    ),
                );
            }
        }
    }

    let prerequisites_met = slots.is_filled(slot::SESSION_ID)
        && slots.is_filled(slot::SESSION_LOCATION)
        && slots.is_filled(slot::SESSION_DATE);
    if prerequisites_met && !rules::is_valid_comments(slots.get(slot::SESSION_COMMENTS)) {
        return ValidationResult::invalid(
            slot::SESSION_COMMENTS,
            "I didn't get your feedback. What did you think of the session?".to_string(),
        );
    }

    ValidationResult::Valid
}

/// Rule chain for the test-selection intent: target membership only.
pub fn validate_testing(slots: &Slots) -> ValidationResult {
    debug!("validating test selection slots");

    if let Some(target) = slots.get(slot::TEST_TARGET) {
        if !rules::is_valid_test_target(target) {
            return ValidationResult::invalid(
                slot::TEST_TARGET,
                format!("{target} is not a valid test target. Try A, B or C?"),
            );
        }
    }

    ValidationResult::Valid
}

fn date_format_message(date: &str) -> String {
    format!(
        "{date} isn't a valid date. Please enter a date in day month year format, \
         or month day year format if you prefer."
    )
}

fn future_date_message(date: &str) -> String {
    format!("{date} is in the future. Please enter a date in the past, or today's date")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()
    }

    fn slots(entries: &[(&str, &str)]) -> Slots {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), Some(value.to_string())))
            .collect()
    }

    #[test]
    fn test_empty_slots_are_vacuously_valid() {
        assert!(validate_rating(&Slots::new(), today()).is_valid());
        assert!(validate_feedback(&Slots::new(), today()).is_valid());
        assert!(validate_testing(&Slots::new()).is_valid());
    }

    #[test]
    fn test_rating_chain_reports_first_violation_only() {
        // Both the location and the score are bad; location is checked first.
        let slots = slots(&[("SessionLocation", "Paris"), ("SessionScore", "9")]);
        match validate_rating(&slots, today()) {
            ValidationResult::Invalid { slot, message } => {
                assert_eq!(slot, "SessionLocation");
                assert!(message.contains("Paris"));
            }
            ValidationResult::Valid => panic!("expected a violation"),
        }
    }

    #[test]
    fn test_rating_score_out_of_range() {
        let slots = slots(&[("SessionLocation", "London"), ("SessionScore", "7")]);
        match validate_rating(&slots, today()) {
            ValidationResult::Invalid { slot, message } => {
                assert_eq!(slot, "SessionScore");
                assert!(message.contains('7'));
                assert!(message.contains("between 1 and 5"));
            }
            ValidationResult::Valid => panic!("expected a violation"),
        }
    }

    #[test]
    fn test_rating_unparseable_score_is_a_violation_not_a_crash() {
        let slots = slots(&[("SessionScore", "five")]);
        match validate_rating(&slots, today()) {
            ValidationResult::Invalid { slot, message } => {
                assert_eq!(slot, "SessionScore");
                assert!(message.contains("five"));
            }
            ValidationResult::Valid => panic!("expected a violation"),
        }
    }

    #[test]
    fn test_rating_rejects_future_date() {
        let slots = slots(&[("SessionDate", "2025-07-16")]);
        match validate_rating(&slots, today()) {
            ValidationResult::Invalid { slot, message } => {
                assert_eq!(slot, "SessionDate");
                assert!(message.contains("future"));
            }
            ValidationResult::Valid => panic!("expected a violation"),
        }
    }

    #[test]
    fn test_rating_thirty_day_boundary_is_exclusive() {
        // Exactly 30 days before today fails; 29 days passes.
        let boundary = slots(&[("SessionDate", "2025-06-15")]);
        assert!(!validate_rating(&boundary, today()).is_valid());

        let inside = slots(&[("SessionDate", "2025-06-16")]);
        assert!(validate_rating(&inside, today()).is_valid());
    }

    #[test]
    fn test_feedback_comments_wait_for_prerequisites() {
        // Short comments alone do not trigger the comments check.
        let early = slots(&[("SessionComments", "ok")]);
        assert!(validate_feedback(&early, today()).is_valid());

        // Once id, location, and date are present the check fires.
        let complete = slots(&[
            ("SessionID", "abc"),
            ("SessionLocation", "London"),
            ("SessionDate", "2025-07-14"),
            ("SessionComments", "ok"),
        ]);
        match validate_feedback(&complete, today()) {
            ValidationResult::Invalid { slot, .. } => assert_eq!(slot, "SessionComments"),
            ValidationResult::Valid => panic!("expected a violation"),
        }
    }

    #[test]
    fn test_feedback_has_no_score_check() {
        let slots = slots(&[("SessionScore", "11")]);
        assert!(validate_feedback(&slots, today()).is_valid());
    }

    #[test]
    fn test_testing_chain() {
        assert!(validate_testing(&slots(&[("TestTarget", "B")])).is_valid());
        match validate_testing(&slots(&[("TestTarget", "D")])) {
            ValidationResult::Invalid { slot, message } => {
                assert_eq!(slot, "TestTarget");
                assert!(message.contains('D'));
            }
            ValidationResult::Valid => panic!("expected a violation"),
        }
    }
}
