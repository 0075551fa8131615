//! Leaf slot validators
//!
//! Pure predicates over individual slot values. Each takes the value by
//! reference, touches no shared state, and does no I/O; the rule chains
//! in the parent module decide which of these fire and in what order.

use chrono::{Duration, NaiveDate};

/// Cities sessions are held in.
///
/// TODO: source this allow-list from the persisted locations table
/// (`Config::table_name`) instead of a constant.
const VALID_LOCATIONS: &[&str] = &[
    "london",
    "leeds",
    "manchester",
    "tel aviv",
    "new york",
    "san francisco",
    "seattle",
    "stockholm",
    "dublin",
    "helsinki",
    "singapore",
    "dummy",
];

/// Date formats accepted from the platform, in precedence order.
///
/// ISO first (what the platform normally sends), then month-first, then
/// day-first numeric orderings, then spelled-out month forms. Ambiguous
/// all-numeric dates therefore resolve month-first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d %B %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%b %d %Y",
];

/// Case-insensitive membership in the location allow-list.
pub fn is_valid_location(location: &str) -> bool {
    VALID_LOCATIONS.contains(&location.trim().to_lowercase().as_str())
}

/// Parse a calendar date in any accepted ordering.
pub fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// True when the value parses as a calendar date at all.
pub fn is_valid_date(value: &str) -> bool {
    parse_flexible_date(value).is_some()
}

/// Strictly after today.
pub fn is_future_date(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// Strictly after (today − `days`); a date exactly `days` ago fails.
pub fn within_last_days(date: NaiveDate, today: NaiveDate, days: i64) -> bool {
    date > today - Duration::days(days)
}

/// Integer score in the closed range [1, 5].
pub fn is_valid_score(score: i64) -> bool {
    (1..=5).contains(&score)
}

/// Convert a slot string to an integer score.
///
/// The platform sometimes delivers scores as float strings ("4.0");
/// fractional values truncate toward zero. `None` when the string is
/// not numeric at all.
pub fn parse_score(value: &str) -> Option<i64> {
    value.trim().parse::<f64>().ok().map(|score| score as i64)
}

/// Present and longer than four characters.
pub fn is_valid_comments(comments: Option<&str>) -> bool {
    matches!(comments, Some(text) if text.chars().count() > 4)
}

/// Targets the test-selection flow accepts.
pub const TEST_TARGETS: &[&str] = &["A", "B", "C"];

/// Member of the fixed test-target set.
pub fn is_valid_test_target(target: &str) -> bool {
    TEST_TARGETS.contains(&target)
}
