//! Handler for the guided test-selection flow

use tracing::debug;

use crate::error::DialogResult;
use crate::event::{InvocationSource, TurnEvent, slot};
use crate::response::{FulfillmentState, ResponseCard, ResponseMessage, TurnResponse};
use crate::validation::{self, ValidationResult, rules};

use super::TurnContext;

const CARD_PROMPT: &str = "Select an option or type another option";

/// Handle one turn of the test-selection intent.
///
/// The only validated slot is the test target. An invalid target is
/// re-elicited with a multiple-choice card listing the accepted
/// targets, so the chain's own violation message is replaced by the
/// card prompt. Fulfillment closes naming the chosen target; no
/// collaborators are involved.
pub fn run_test(ctx: &TurnContext, event: &TurnEvent) -> DialogResult<TurnResponse> {
    debug!(user_id = ?event.user_id, "handling test-selection turn");

    let intent = &event.current_intent;
    let mut session_attributes = event.session_attributes();
    let slots = intent.slots.clone();

    let target = slots.get(slot::TEST_TARGET).map(str::to_string);
    let payload = serde_json::json!({ "TestTarget": target }).to_string();
    session_attributes.stash_test_draft(payload.clone());

    match event.invocation_source {
        InvocationSource::DialogCodeHook => match validation::validate_testing(&slots) {
            ValidationResult::Invalid { slot, .. } => {
                let mut slots = slots;
                slots.clear(&slot);

                let response = TurnResponse::elicit_slot_with_card(
                    session_attributes,
                    intent.name.clone(),
                    slots,
                    slot,
                    ResponseMessage::plain_text(CARD_PROMPT),
                    ResponseCard::generic(
                        "Test targets",
                        "Pick the target to exercise",
                        rules::TEST_TARGETS,
                    ),
                );
                debug!(?response, "re-eliciting test target with card");
                Ok(response)
            }
            ValidationResult::Valid => Ok(TurnResponse::delegate(session_attributes, slots)),
        },
        InvocationSource::FulfillmentCodeHook => {
            session_attributes.confirm_test(payload);
            let chosen = target.as_deref().unwrap_or("none");
            Ok(TurnResponse::close(
                session_attributes,
                FulfillmentState::Fulfilled,
                ResponseMessage::plain_text(format!(
                    "Fulfilling testing intent with TestTarget: {chosen}"
                )),
            ))
        }
    }
}
