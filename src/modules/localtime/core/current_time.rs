use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// `yyyy-MM-dd'T'HH:mm:ss`, no offset, no fractional seconds.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Which wall-clock the service reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeZoneMode {
    /// Server-local time, whatever the host or pod timezone is.
    #[default]
    Local,
    Utc,
}

impl TimeZoneMode {
    pub fn now(self) -> NaiveDateTime {
        match self {
            TimeZoneMode::Local => Local::now().naive_local(),
            TimeZoneMode::Utc => Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown time zone mode `{0}`, expected `local` or `utc`")]
pub struct ParseTimeZoneModeError(pub String);

impl FromStr for TimeZoneMode {
    type Err = ParseTimeZoneModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(TimeZoneMode::Local),
            "utc" => Ok(TimeZoneMode::Utc),
            _ => Err(ParseTimeZoneModeError(s.to_string())),
        }
    }
}

impl fmt::Display for TimeZoneMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneMode::Local => f.write_str("local"),
            TimeZoneMode::Utc => f.write_str("utc"),
        }
    }
}

/// Response payload of the time endpoint: `{"currentTime": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTime {
    #[serde(rename = "currentTime")]
    pub current_time: String,
}

impl CurrentTime {
    pub fn at(instant: NaiveDateTime) -> Self {
        Self {
            current_time: instant.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn now(zone: TimeZoneMode) -> Self {
        Self::at(zone.now())
    }
}
