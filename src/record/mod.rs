//! Finalized records emitted to the event stream
//!
//! A record is built from the slot values of a turn, serialized once,
//! and handed to the stream collaborator; it is never mutated after
//! construction. During slot collection the same shape doubles as the
//! in-progress draft stashed in the session attributes, with its
//! unfilled fields still null.

use serde::{Deserialize, Serialize};

use crate::event::{Slots, slot};
use crate::validation::rules;

/// Sentiment classification of a piece of free text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

/// A sentiment label plus the confidence score for that label.
///
/// Per-label scores other than the winning one are discarded by the
/// collaborator before the result reaches this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentimentResult {
    pub sentiment: SentimentLabel,
    pub confidence: f64,
}

/// A finalized session rating.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RatingRecord {
    pub record_type: String,
    pub user_id: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub score: Option<i64>,
    #[serde(rename = "ID")]
    pub id: Option<String>,
}

impl RatingRecord {
    /// Build a rating from the current slots.
    ///
    /// Location and session id are title-cased here and nowhere else;
    /// unfilled slots stay null so the same shape serves as the
    /// per-turn draft.
    pub fn from_slots(slots: &Slots, user_id: Option<&str>) -> Self {
        Self {
            record_type: "SessionRating".to_string(),
            user_id: user_id.map(str::to_string),
            location: slots.get(slot::SESSION_LOCATION).map(title_case),
            date: slots.get(slot::SESSION_DATE).map(str::to_string),
            score: slots.get(slot::SESSION_SCORE).and_then(rules::parse_score),
            id: slots.get(slot::SESSION_ID).map(title_case),
        }
    }
}

/// Finalized free-text feedback on a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct FeedbackRecord {
    pub record_type: String,
    pub user_id: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub session_comments: Option<String>,
    /// Absent on drafts; filled once the comments have been analyzed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentResult>,
    #[serde(rename = "ID")]
    pub id: Option<String>,
}

impl FeedbackRecord {
    /// Build feedback from the current slots, without sentiment.
    pub fn from_slots(slots: &Slots, user_id: Option<&str>) -> Self {
        Self {
            record_type: "SessionFeedback".to_string(),
            user_id: user_id.map(str::to_string),
            location: slots.get(slot::SESSION_LOCATION).map(title_case),
            date: slots.get(slot::SESSION_DATE).map(str::to_string),
            session_comments: slots.get(slot::SESSION_COMMENTS).map(str::to_string),
            sentiment: None,
            id: slots.get(slot::SESSION_ID).map(title_case),
        }
    }

    /// Attach the sentiment result ahead of emission.
    pub fn with_sentiment(mut self, sentiment: SentimentResult) -> Self {
        self.sentiment = Some(sentiment);
        self
    }
}

/// Title-case each whitespace-separated word ("tel aviv" → "Tel Aviv").
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
