//! Intent routing and the per-turn entry point
//!
//! One `TurnEvent` in, one `TurnResponse` out. The dispatcher is a
//! total function over the five registered intents; any other name is
//! a hard error for the call, never a defaulted reply.

use tracing::debug;
use uuid::Uuid;

use crate::error::{DialogError, DialogResult};
use crate::event::TurnEvent;
use crate::handlers::{TurnContext, feedback, rating, smalltalk, testing};
use crate::response::TurnResponse;

/// Intent names as registered with the dialog platform.
pub mod intent {
    pub const RATE_SESSION: &str = "RateSession";
    pub const PROVIDE_FEEDBACK: &str = "ProvideFeedback";
    pub const THANKS: &str = "Thanks";
    pub const CANCEL_REQUEST: &str = "CancelRequest";
    pub const TESTING: &str = "Testing";
}

/// Route a turn event to the handler for its intent.
pub async fn dispatch(ctx: &TurnContext, event: &TurnEvent) -> DialogResult<TurnResponse> {
    debug!(
        user_id = ?event.user_id,
        intent = %event.current_intent.name,
        "dispatching turn"
    );

    match event.current_intent.name.as_str() {
        intent::TESTING => testing::run_test(ctx, event),
        intent::CANCEL_REQUEST => Ok(smalltalk::cancel_request(ctx, event)),
        intent::THANKS => Ok(smalltalk::thanks(ctx, event)),
        intent::RATE_SESSION => rating::rate_session(ctx, event).await,
        intent::PROVIDE_FEEDBACK => feedback::provide_feedback(ctx, event).await,
        unknown => Err(DialogError::UnknownIntent(unknown.to_string())),
    }
}

/// Handle one complete turn: log the invocation, dispatch, log the
/// outcome. This is the boundary the hosting runtime calls.
pub async fn handle_turn(ctx: &TurnContext, event: &TurnEvent) -> DialogResult<TurnResponse> {
    let invocation_id = Uuid::new_v4();
    debug!(%invocation_id, bot = %event.bot.name, "received turn event");

    let response = dispatch(ctx, event).await?;

    debug!(%invocation_id, "turn handled");
    Ok(response)
}
