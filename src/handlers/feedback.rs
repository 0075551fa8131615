//! Handler for the free-text feedback intent

use tracing::debug;

use crate::collaborators::PARTITION_KEY;
use crate::error::{DialogError, DialogResult};
use crate::event::{InvocationSource, TurnEvent, slot};
use crate::record::FeedbackRecord;
use crate::response::{FulfillmentState, ResponseMessage, TurnResponse};
use crate::validation::{self, ValidationResult};

use super::TurnContext;

const CONFIRMATION: &str = "Thank you for providing feedback on this session.";

/// Handle one turn of the feedback intent.
///
/// Same turn machine as the rating handler, with one addition at
/// fulfillment: the comments are run through the sentiment collaborator
/// and the result rides along on the emitted record. Sentiment is
/// analyzed inline rather than deferred; the collaborator is fast
/// enough that the turn absorbs the latency.
pub async fn provide_feedback(ctx: &TurnContext, event: &TurnEvent) -> DialogResult<TurnResponse> {
    debug!(user_id = ?event.user_id, "handling feedback turn");

    let intent = &event.current_intent;
    let mut session_attributes = event.session_attributes();
    let slots = intent.slots.clone();

    let record = FeedbackRecord::from_slots(&slots, event.user_id.as_deref());
    let draft = serde_json::to_string(&record)?;
    session_attributes.stash_feedback_draft(draft);

    match event.invocation_source {
        InvocationSource::DialogCodeHook => {
            match validation::validate_feedback(&slots, ctx.today()) {
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
            let comments = slots.get(slot::SESSION_COMMENTS).unwrap_or("");
            let sentiment = ctx
                .sentiment()
                .analyze(comments)
                .await
                .map_err(DialogError::SentimentAnalysis)?;

            let payload = serde_json::to_string(&record.with_sentiment(sentiment))?;
            debug!(record = %payload, "fulfilling feedback");

            let ack = ctx
                .stream()
                .put_record(ctx.config().stream_name(), PARTITION_KEY, &payload)
                .await
                .map_err(DialogError::StreamWrite)?;
            debug!(sequence_number = %ack.sequence_number, "feedback posted to stream");

            session_attributes.confirm_feedback(payload);
            Ok(TurnResponse::close(
                session_attributes,
                FulfillmentState::Fulfilled,
                ResponseMessage::plain_text(CONFIRMATION),
            ))
        }
    }
}
