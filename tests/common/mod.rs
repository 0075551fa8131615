//! Shared fixtures and collaborator doubles for the scenario tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono_tz::Tz;

use feedback_dialog::{
    BotInfo, Config, ConfirmationStatus, CurrentIntent, InvocationSource, RecordStream,
    SentimentAnalyzer, SentimentLabel, SentimentResult, Slots, StreamAck, TurnContext, TurnEvent,
};

pub const STREAM_NAME: &str = "session-records";
pub const USER_ID: &str = "user-42";

/// Sentiment double returning a canned result and counting calls.
pub struct FixedSentiment {
    pub result: SentimentResult,
    pub calls: Mutex<Vec<String>>,
}

impl FixedSentiment {
    pub fn positive() -> Self {
        Self {
            result: SentimentResult {
                sentiment: SentimentLabel::Positive,
                confidence: 0.93,
            },
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SentimentAnalyzer for FixedSentiment {
    async fn analyze(&self, text: &str) -> anyhow::Result<SentimentResult> {
        self.calls.lock().unwrap().push(text.to_string());
        Ok(self.result.clone())
    }
}

/// Sentiment double that always fails.
pub struct FailingSentiment;

#[async_trait]
impl SentimentAnalyzer for FailingSentiment {
    async fn analyze(&self, _text: &str) -> anyhow::Result<SentimentResult> {
        Err(anyhow::anyhow!("sentiment service unreachable"))
    }
}

/// One recorded stream write.
#[derive(Debug, Clone)]
pub struct StreamWrite {
    pub stream_name: String,
    pub partition_key: String,
    pub payload: String,
}

/// Stream double that records every write.
#[derive(Default)]
pub struct RecordingStream {
    pub writes: Mutex<Vec<StreamWrite>>,
}

#[async_trait]
impl RecordStream for RecordingStream {
    async fn put_record(
        &self,
        stream_name: &str,
        partition_key: &str,
        payload: &str,
    ) -> anyhow::Result<StreamAck> {
        self.writes.lock().unwrap().push(StreamWrite {
            stream_name: stream_name.to_string(),
            partition_key: partition_key.to_string(),
            payload: payload.to_string(),
        });
        Ok(StreamAck {
            sequence_number: "49590338271490256608559692538361571095921575989136588898".to_string(),
            shard_id: "shardId-000000000000".to_string(),
        })
    }
}

/// Stream double that always rejects the write.
pub struct FailingStream;

#[async_trait]
impl RecordStream for FailingStream {
    async fn put_record(
        &self,
        _stream_name: &str,
        _partition_key: &str,
        _payload: &str,
    ) -> anyhow::Result<StreamAck> {
        Err(anyhow::anyhow!("provisioned throughput exceeded"))
    }
}

/// A context over recording doubles, handing the doubles back for
/// later inspection.
pub fn recording_context() -> (TurnContext, Arc<FixedSentiment>, Arc<RecordingStream>) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let sentiment = Arc::new(FixedSentiment::positive());
    let stream = Arc::new(RecordingStream::default());
    let ctx = TurnContext::new(
        Config::new(STREAM_NAME, "session-locations", Tz::Europe__London),
        sentiment.clone(),
        stream.clone(),
    );
    (ctx, sentiment, stream)
}

/// Build a turn event the way the platform sends one.
pub fn turn_event(intent_name: &str, source: InvocationSource, slots: Slots) -> TurnEvent {
    TurnEvent {
        bot: BotInfo {
            name: "FeedbackBot".to_string(),
        },
        user_id: Some(USER_ID.to_string()),
        invocation_source: source,
        session_attributes: None,
        current_intent: CurrentIntent {
            name: intent_name.to_string(),
            confirmation_status: ConfirmationStatus::None,
            slots,
        },
    }
}

/// Build a slot mapping from filled entries.
pub fn slots(entries: &[(&str, &str)]) -> Slots {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), Some(value.to_string())))
        .collect()
}
