//! Turn responses returned to the dialog platform
//!
//! Four outcomes exist for a turn: re-elicit one slot, delegate slot
//! collection back to the platform, close the conversation, or ask the
//! platform to confirm the intent. Each is a deterministic mapping from
//! its inputs to the platform's wire shape; all the constructors here
//! are stateless.

use serde::{Deserialize, Serialize};

use crate::event::{SessionAttributes, Slots};

/// A plain-text message attached to a response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMessage {
    pub content_type: String,
    pub content: String,
}

impl ResponseMessage {
    /// A `PlainText` message.
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content_type: "PlainText".to_string(),
            content: content.into(),
        }
    }
}

/// Terminal state reported on a `Close` response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

/// The platform instruction carried by a response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum DialogAction {
    /// Re-prompt the user for one specific slot.
    #[serde(rename_all = "camelCase")]
    ElicitSlot {
        intent_name: String,
        slots: Slots,
        slot_to_elicit: String,
        message: ResponseMessage,
        #[serde(skip_serializing_if = "Option::is_none")]
        response_card: Option<ResponseCard>,
    },
    /// Ask the platform to confirm the intent as filled.
    #[serde(rename_all = "camelCase")]
    ConfirmIntent {
        intent_name: String,
        slots: Slots,
        message: ResponseMessage,
    },
    /// Hand control back to the platform's normal slot collection.
    Delegate { slots: Slots },
    /// End the conversation with a terminal message.
    #[serde(rename_all = "camelCase")]
    Close {
        fulfillment_state: FulfillmentState,
        message: ResponseMessage,
    },
}

/// One full response to the platform: the echoed session attributes
/// plus the dialog action to take.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TurnResponse {
    pub session_attributes: SessionAttributes,
    pub dialog_action: DialogAction,
}

impl TurnResponse {
    /// Re-elicit one slot with a tailored message.
    pub fn elicit_slot(
        session_attributes: SessionAttributes,
        intent_name: impl Into<String>,
        slots: Slots,
        slot_to_elicit: impl Into<String>,
        message: ResponseMessage,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::ElicitSlot {
                intent_name: intent_name.into(),
                slots,
                slot_to_elicit: slot_to_elicit.into(),
                message,
                response_card: None,
            },
        }
    }

    /// Re-elicit one slot with a multiple-choice card attached.
    pub fn elicit_slot_with_card(
        session_attributes: SessionAttributes,
        intent_name: impl Into<String>,
        slots: Slots,
        slot_to_elicit: impl Into<String>,
        message: ResponseMessage,
        response_card: ResponseCard,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::ElicitSlot {
                intent_name: intent_name.into(),
                slots,
                slot_to_elicit: slot_to_elicit.into(),
                message,
                response_card: Some(response_card),
            },
        }
    }

    /// Ask the platform to confirm the intent.
    ///
    /// No current handler issues this, but the platform contract
    /// includes it and callers may.
    pub fn confirm_intent(
        session_attributes: SessionAttributes,
        intent_name: impl Into<String>,
        slots: Slots,
        message: ResponseMessage,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::ConfirmIntent {
                intent_name: intent_name.into(),
                slots,
                message,
            },
        }
    }

    /// Hand slot collection back to the platform unchanged.
    pub fn delegate(session_attributes: SessionAttributes, slots: Slots) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::Delegate { slots },
        }
    }

    /// End the conversation.
    pub fn close(
        session_attributes: SessionAttributes,
        fulfillment_state: FulfillmentState,
        message: ResponseMessage,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::Close {
                fulfillment_state,
                message,
            },
        }
    }
}

/// A generic multiple-choice card for guided re-prompting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCard {
    pub content_type: String,
    pub version: u32,
    pub generic_attachments: Vec<CardAttachment>,
}

/// One attachment on a response card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardAttachment {
    pub title: String,
    pub sub_title: String,
    pub buttons: Vec<CardButton>,
}

/// A single button; text is shown, value is submitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardButton {
    pub text: String,
    pub value: String,
}

impl ResponseCard {
    /// Build a one-attachment card whose buttons submit their labels.
    pub fn generic(
        title: impl Into<String>,
        sub_title: impl Into<String>,
        options: &[&str],
    ) -> Self {
        let buttons = options
            .iter()
            .map(|option| CardButton {
                text: option.to_string(),
                value: option.to_string(),
            })
            .collect();

        Self {
            content_type: "application/vnd.amazonaws.card.generic".to_string(),
            version: 1,
            generic_attachments: vec![CardAttachment {
                title: title.into(),
                sub_title: sub_title.into(),
                buttons,
            }],
        }
    }
}
