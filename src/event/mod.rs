//! Inbound turn events from the dialog platform
//!
//! One `TurnEvent` arrives per conversational turn. The platform owns
//! the conversation; this crate receives the event by value, inspects
//! the partially-filled slots, and hands back a response without
//! retaining anything.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Recognized slot names, as the platform spells them.
pub mod slot {
    pub const SESSION_ID: &str = "SessionID";
    pub const SESSION_DATE: &str = "SessionDate";
    pub const SESSION_LOCATION: &str = "SessionLocation";
    pub const SESSION_SCORE: &str = "SessionScore";
    pub const SESSION_COMMENTS: &str = "SessionComments";
    pub const TEST_TARGET: &str = "TestTarget";
}

/// One inbound request from the dialog platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TurnEvent {
    /// Identity of the bot the platform invoked; logged only.
    #[serde(default)]
    pub bot: BotInfo,
    /// Caller identifier assigned by the platform.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Whether the platform is still collecting slots or fulfilling.
    pub invocation_source: InvocationSource,
    /// Cross-turn state; null on the first turn of a session.
    #[serde(default)]
    pub session_attributes: Option<SessionAttributes>,
    /// The intent being pursued this turn.
    pub current_intent: CurrentIntent,
}

impl TurnEvent {
    /// The session attributes, with an absent mapping treated as empty.
    pub fn session_attributes(&self) -> SessionAttributes {
        self.session_attributes.clone().unwrap_or_default()
    }
}

/// Bot identity attached to the event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BotInfo {
    #[serde(default)]
    pub name: String,
}

/// Which hook of the turn lifecycle the platform is invoking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum InvocationSource {
    /// Mid-conversation: validate what has been collected so far.
    DialogCodeHook,
    /// All slots filled: perform terminal processing.
    FulfillmentCodeHook,
}

/// The intent under collection, with its slot values so far.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    /// Intent name as registered with the platform.
    pub name: String,
    /// Platform confirmation state for this intent.
    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,
    /// Named slot values; unfilled slots arrive as nulls.
    #[serde(default)]
    pub slots: Slots,
}

/// Confirmation state the platform tracks for an intent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ConfirmationStatus {
    #[default]
    None,
    Confirmed,
    Denied,
}

/// The slot mapping for the current intent.
///
/// Lookups are defensive by construction: a slot name that is missing
/// from the mapping and a slot explicitly set to null are both simply
/// absent. No slot read can fail.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Slots(HashMap<String, Option<String>>);

impl Slots {
    /// An empty slot mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a slot value; absent and null are indistinguishable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(|value| value.as_deref())
    }

    /// True when the named slot carries a value.
    pub fn is_filled(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set a slot value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), Some(value.into()));
    }

    /// Null a slot in place so the platform re-collects it.
    ///
    /// The key stays in the mapping; the platform expects every slot it
    /// knows about to be echoed back, filled or not.
    pub fn clear(&mut self, name: &str) {
        self.0.insert(name.to_string(), None);
    }

    /// Number of slot entries, filled or not.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no slot entries exist at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Option<String>)> for Slots {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Cross-turn state threaded through the platform.
///
/// The keys this crate manages are typed fields; everything else the
/// platform or another component stashed rides along in `extra` and is
/// echoed back untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionAttributes {
    /// In-progress rating draft, serialized; for inspection only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_rating: Option<String>,
    /// In-progress feedback draft, serialized; for inspection only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_feedback: Option<String>,
    /// In-progress test selection, serialized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_test: Option<String>,
    /// Last rating that reached the stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_confirmed_rating: Option<String>,
    /// Last feedback that reached the stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_confirmed_feedback: Option<String>,
    /// Last test selection that was fulfilled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_confirmed_test: Option<String>,
    /// Keys this crate does not manage, echoed back verbatim.
    #[serde(flatten)]
    pub extra: HashMap<String, String>,
}

impl SessionAttributes {
    /// Overwrite the in-progress rating draft for this turn.
    pub fn stash_rating_draft(&mut self, payload: impl Into<String>) {
        self.current_rating = Some(payload.into());
    }

    /// Clear the rating draft and record the finalized payload.
    pub fn confirm_rating(&mut self, payload: impl Into<String>) {
        self.current_rating = None;
        self.last_confirmed_rating = Some(payload.into());
    }

    /// Overwrite the in-progress feedback draft for this turn.
    pub fn stash_feedback_draft(&mut self, payload: impl Into<String>) {
        self.current_feedback = Some(payload.into());
    }

    /// Clear the feedback draft and record the finalized payload.
    pub fn confirm_feedback(&mut self, payload: impl Into<String>) {
        self.current_feedback = None;
        self.last_confirmed_feedback = Some(payload.into());
    }

    /// Overwrite the in-progress test selection for this turn.
    pub fn stash_test_draft(&mut self, payload: impl Into<String>) {
        self.current_test = Some(payload.into());
    }

    /// Clear the test draft and record the fulfilled selection.
    pub fn confirm_test(&mut self, payload: impl Into<String>) {
        self.current_test = None;
        self.last_confirmed_test = Some(payload.into());
    }
}
