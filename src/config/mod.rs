//! Process configuration for the dialog backend
//!
//! Everything the core consumes from its environment lives here: the
//! destination stream for finalized records, the persisted locations
//! table, and the operating time zone that "today" is computed in.

use std::env;

use chrono_tz::Tz;

use crate::error::{DialogError, DialogResult};

/// Environment variable naming the destination record stream.
pub const STREAM_NAME_VAR: &str = "STREAM_NAME";

/// Environment variable naming the persisted locations table.
pub const TABLE_NAME_VAR: &str = "TABLE_NAME";

/// Environment variable naming the operating time zone (IANA).
pub const TIME_ZONE_VAR: &str = "BOT_TIME_ZONE";

const DEFAULT_TIME_ZONE: Tz = Tz::Europe__London;

/// Static configuration for one deployment of the backend.
#[derive(Debug, Clone)]
pub struct Config {
    stream_name: String,
    table_name: String,
    time_zone: Tz,
}

impl Config {
    /// Build a configuration from explicit values.
    pub fn new(
        stream_name: impl Into<String>,
        table_name: impl Into<String>,
        time_zone: Tz,
    ) -> Self {
        Self {
            stream_name: stream_name.into(),
            table_name: table_name.into(),
            time_zone,
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// `STREAM_NAME` and `TABLE_NAME` are required; `BOT_TIME_ZONE` is
    /// optional and defaults to Europe/London.
    pub fn from_env() -> DialogResult<Self> {
        let stream_name =
            env::var(STREAM_NAME_VAR).map_err(|_| DialogError::MissingConfig(STREAM_NAME_VAR))?;
        let table_name =
            env::var(TABLE_NAME_VAR).map_err(|_| DialogError::MissingConfig(TABLE_NAME_VAR))?;
        let time_zone = match env::var(TIME_ZONE_VAR) {
            Ok(name) => name
                .parse::<Tz>()
                .map_err(|_| DialogError::InvalidTimeZone(name))?,
            Err(_) => DEFAULT_TIME_ZONE,
        };

        Ok(Self {
            stream_name,
            table_name,
            time_zone,
        })
    }

    /// Name of the stream finalized records are written to.
    pub fn stream_name(&self) -> &str {
        &self.stream_name
    }

    /// Name of the persisted locations table.
    ///
    /// Read but not yet consulted; the location allow-list still lives
    /// in `validation::rules` until it migrates here.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// The time zone "today" is computed in for date validation.
    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }
}
