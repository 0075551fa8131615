//! Intent handlers and the per-invocation context
//!
//! Each handler drives one intent through the two-state turn machine:
//! - `DialogCodeHook`: run the intent's validation chain; a violation
//!   becomes a re-elicit for the violated slot, otherwise control is
//!   delegated back to the platform.
//! - `FulfillmentCodeHook`: build the finalized record, call whatever
//!   collaborators the intent needs, emit the record, and close.
//!
//! `TurnContext` carries everything a handler may reach for: the
//! collaborator handles, the process configuration, and a seedable
//! random source for the reply pools.

pub mod feedback;
pub mod rating;
pub mod smalltalk;
pub mod testing;

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collaborators::{RecordStream, SentimentAnalyzer};
use crate::config::Config;

/// Shared dependencies for handling turns.
///
/// One context serves any number of concurrent invocations; handlers
/// only read from it, apart from the RNG behind its own lock.
pub struct TurnContext {
    config: Config,
    sentiment: Arc<dyn SentimentAnalyzer>,
    stream: Arc<dyn RecordStream>,
    rng: Mutex<StdRng>,
}

impl TurnContext {
    /// Create a context with an entropy-seeded random source.
    pub fn new(
        config: Config,
        sentiment: Arc<dyn SentimentAnalyzer>,
        stream: Arc<dyn RecordStream>,
    ) -> Self {
        Self {
            config,
            sentiment,
            stream,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Replace the random source with a deterministic, seeded one.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Process configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sentiment collaborator.
    pub fn sentiment(&self) -> &dyn SentimentAnalyzer {
        self.sentiment.as_ref()
    }

    /// Stream collaborator.
    pub fn stream(&self) -> &dyn RecordStream {
        self.stream.as_ref()
    }

    /// Today's date in the configured operating time zone.
    pub fn today(&self) -> NaiveDate {
        Utc::now()
            .with_timezone(&self.config.time_zone())
            .date_naive()
    }

    /// Pick one entry from a fixed reply pool, uniformly.
    pub fn pick<'a>(&self, pool: &'a [&'a str]) -> &'a str {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        pool[rng.gen_range(0..pool.len())]
    }
}
