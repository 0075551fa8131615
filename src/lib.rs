//! Dialog backend for collecting conference-session feedback
//!
//! This crate is the code-hook core behind a voice/text assistant that
//! gathers numeric ratings and free-text comments about conference
//! talks. The external dialog platform drives the conversation and
//! calls in once per turn; this crate provides:
//! - Turn-by-turn validation of partially-filled slots, with tailored
//!   re-prompts for the first invalid field
//! - The four turn outcomes (re-elicit a slot, delegate, close,
//!   confirm) in the platform's wire shapes
//! - Finalized rating/feedback records emitted to a downstream event
//!   stream, with sentiment analysis attached to feedback
//! - Intent dispatch that fails loudly on unknown intents
//!
//! The platform, the sentiment service, and the stream are external
//! collaborators; the last two are reached through the traits in
//! [`collaborators`].

pub mod collaborators;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod handlers;
pub mod record;
pub mod response;
pub mod validation;

// Re-export main types
pub use collaborators::{PARTITION_KEY, RecordStream, SentimentAnalyzer, StreamAck};

pub use config::Config;

pub use dispatch::{dispatch, handle_turn, intent};

pub use error::{DialogError, DialogResult};

pub use event::{
    BotInfo, ConfirmationStatus, CurrentIntent, InvocationSource, SessionAttributes, Slots,
    TurnEvent, slot,
};

pub use handlers::TurnContext;

pub use record::{FeedbackRecord, RatingRecord, SentimentLabel, SentimentResult};

pub use response::{
    CardAttachment, CardButton, DialogAction, FulfillmentState, ResponseCard, ResponseMessage,
    TurnResponse,
};

pub use validation::{ValidationResult, validate_feedback, validate_rating, validate_testing};
