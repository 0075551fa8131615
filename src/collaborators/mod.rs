//! Collaborator seams for the two external services
//!
//! The sentiment service and the record stream are reached through
//! these traits so the handlers stay testable without the network.
//! Calls are plain blocking awaits bounded by the host call's own
//! timeout: no retry, no backoff, and a failure fails the turn.

use async_trait::async_trait;

use crate::record::SentimentResult;

/// Partition key used for every stream write.
pub const PARTITION_KEY: &str = "partitionKey";

/// Classifies a piece of free text, returning the winning label and
/// its confidence.
#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> anyhow::Result<SentimentResult>;
}

/// Appends serialized records to the downstream event stream.
#[async_trait]
pub trait RecordStream: Send + Sync {
    async fn put_record(
        &self,
        stream_name: &str,
        partition_key: &str,
        payload: &str,
    ) -> anyhow::Result<StreamAck>;
}

/// Opaque acknowledgment of a stream write; logged and ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamAck {
    pub sequence_number: String,
    pub shard_id: String,
}
