//! Handler for the session-rating intent

use tracing::debug;

use crate::collaborators::PARTITION_KEY;
use crate::error::{DialogError, DialogResult};
use crate::event::{InvocationSource, TurnEvent};
use crate::record::RatingRecord;
use crate::response::{FulfillmentState, ResponseMessage, TurnResponse};
use crate::validation::{self, ValidationResult};

use super::TurnContext;

const CONFIRMATION: &str = "Thank you for rating this session.";

/// Handle one turn of the rating intent.
///
/// Mid-dialog turns validate whatever slots have been collected so far
/// and either re-elicit the first invalid one or delegate. The
/// fulfillment turn emits the finalized rating to the stream and
/// closes. The in-progress draft is rebuilt from the current slots and
/// overwritten in the session attributes every turn; it is cleared, and
/// the confirmed payload recorded, only at close.
pub async fn rate_session(ctx: &TurnContext, event: &TurnEvent) -> DialogResult<TurnResponse> {
    debug!(user_id = ?event.user_id, "handling rating turn");

    let intent = &event.current_intent;
    let mut session_attributes = event.session_attributes();
    let slots = intent.slots.clone();

    let record = RatingRecord::from_slots(&slots, event.user_id.as_deref());
    let payload = serde_json::to_string(&record)?;
    session_attributes.stash_rating_draft(payload.clone());

    match event.invocation_source {
        InvocationSource::DialogCodeHook => {
            match validation::validate_rating(&slots, ctx.today()) {
                ValidationResult::Invalid { slot, message } => {
                    let mut slots = slots;
                    slots.clear(&slot);
                    Ok(TurnResponse::elicit_slot(
                        session_attributes,
                        intent.name.clone(),
                        slots,
                        slot,
                        ResponseMessage::plain_text(message),
                    ))
                }
                ValidationResult::Valid => Ok(TurnResponse::delegate(session_attributes, slots)),
            }
        }
        InvocationSource::FulfillmentCodeHook => {
            debug!(record = %payload, "fulfilling rating");

            let ack = ctx
                .stream()
                .put_record(ctx.config().stream_name(), PARTITION_KEY, &payload)
                .await
                .map_err(DialogError::StreamWrite)?;
            debug!(sequence_number = %ack.sequence_number, "rating posted to stream");

            session_attributes.confirm_rating(payload);
            Ok(TurnResponse::close(
                session_attributes,
                FulfillmentState::Fulfilled,
                ResponseMessage::plain_text(CONFIRMATION),
            ))
        }
    }
}
