//! Single-turn acknowledgement handlers
//!
//! Thanks and cancel are stateless: no slots, no validation, no
//! collaborator calls. Each closes immediately with a reply drawn
//! uniformly from its fixed pool via the context's random source.

use tracing::debug;

use crate::event::TurnEvent;
use crate::response::{FulfillmentState, ResponseMessage, TurnResponse};

use super::TurnContext;

/// Replies the thanks intent draws from.
pub const THANKS_REPLIES: &[&str] = &[
    "No problem!",
    "You are very welcome.",
    "Happy to help.",
    "That's fine.",
    "No. Thank you.",
    "Any time.",
];

/// Replies the cancel intent draws from.
pub const CANCEL_REPLIES: &[&str] = &[
    "No problem. Let me know if I can help with anything else.",
    "Let me know if you need anything else in future.",
    "OK. Chat to you again soon.",
];

/// Acknowledge the user's thanks.
pub fn thanks(ctx: &TurnContext, event: &TurnEvent) -> TurnResponse {
    debug!(user_id = ?event.user_id, "handling thanks turn");
    TurnResponse::close(
        event.session_attributes(),
        FulfillmentState::Fulfilled,
        ResponseMessage::plain_text(ctx.pick(THANKS_REPLIES)),
    )
}

/// Acknowledge a cancellation.
pub fn cancel_request(ctx: &TurnContext, event: &TurnEvent) -> TurnResponse {
    debug!(user_id = ?event.user_id, "handling cancel turn");
    TurnResponse::close(
        event.session_attributes(),
        FulfillmentState::Fulfilled,
        ResponseMessage::plain_text(ctx.pick(CANCEL_REPLIES)),
    )
}
