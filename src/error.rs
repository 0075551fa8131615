//! Error taxonomy for turn handling

use thiserror::Error;

/// Errors that abort the handling of a single turn.
///
/// Validation violations are deliberately not represented here: they are
/// ordinary values (`validation::ValidationResult::Invalid`) and always
/// become a re-elicit response rather than an error.
#[derive(Debug, Error)]
pub enum DialogError {
    /// The inbound intent name matches no registered handler.
    #[error("intent with name `{0}` not supported")]
    UnknownIntent(String),

    /// A required environment variable is missing.
    #[error("missing required environment variable `{0}`")]
    MissingConfig(&'static str),

    /// The configured operating time zone is not a known IANA name.
    #[error("unrecognized operating time zone `{0}`")]
    InvalidTimeZone(String),

    /// The sentiment collaborator failed; the turn fails with it.
    #[error("sentiment analysis failed")]
    SentimentAnalysis(#[source] anyhow::Error),

    /// The stream collaborator rejected the record write.
    #[error("stream write failed")]
    StreamWrite(#[source] anyhow::Error),

    /// A finalized record could not be serialized for emission.
    #[error("failed to encode record payload")]
    RecordEncode(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type DialogResult<T> = Result<T, DialogError>;
