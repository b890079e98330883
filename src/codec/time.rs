//! Time column formats and parsing.

use std::fmt;
use std::num::ParseIntError;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Column format value meaning "integer seconds since the Unix epoch".
pub const TIME_FORMAT_UNIX: &str = "unix";

/// How a time column is encoded in the input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// RFC 3339, e.g. `1991-04-05T11:11:11Z`
    #[default]
    Rfc3339,
    /// Integer seconds since the Unix epoch
    Unix,
    /// A chrono strftime pattern, e.g. `%Y-%m-%d %H:%M:%S`
    Pattern(String),
}

impl TimeFormat {
    /// Interpret a column format value.
    pub fn from_format_str(format: &str) -> Self {
        match format {
            "" => TimeFormat::Rfc3339,
            TIME_FORMAT_UNIX => TimeFormat::Unix,
            pattern => TimeFormat::Pattern(pattern.to_string()),
        }
    }

    /// Parse `raw` into an instant.
    ///
    /// Patterns without an offset are read as UTC; patterns without a time
    /// of day are read as midnight UTC.
    pub fn parse(&self, raw: &str) -> Result<DateTime<FixedOffset>, TimeError> {
        match self {
            TimeFormat::Rfc3339 => Ok(DateTime::parse_from_rfc3339(raw)?),
            TimeFormat::Unix => {
                let secs: i64 = raw.parse()?;
                DateTime::from_timestamp(secs, 0)
                    .map(|t| t.fixed_offset())
                    .ok_or(TimeError::OutOfRange(secs))
            }
            TimeFormat::Pattern(pattern) => parse_pattern(raw, pattern),
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeFormat::Rfc3339 => write!(f, "RFC 3339"),
            TimeFormat::Unix => write!(f, "{TIME_FORMAT_UNIX}"),
            TimeFormat::Pattern(pattern) => write!(f, "{pattern}"),
        }
    }
}

fn parse_pattern(raw: &str, pattern: &str) -> Result<DateTime<FixedOffset>, TimeError> {
    let err = match DateTime::parse_from_str(raw, pattern) {
        Ok(t) => return Ok(t),
        Err(e) => e,
    };
    if let Ok(t) = NaiveDateTime::parse_from_str(raw, pattern) {
        return Ok(t.and_utc().fixed_offset());
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, pattern) {
        return Ok(d.and_time(NaiveTime::MIN).and_utc().fixed_offset());
    }
    Err(TimeError::Chrono(err))
}

/// Why a time field could not be parsed.
#[derive(Debug, Error)]
pub enum TimeError {
    #[error(transparent)]
    Chrono(#[from] chrono::ParseError),

    #[error("invalid unix timestamp: {0}")]
    Int(#[from] ParseIntError),

    #[error("unix timestamp {0} is out of range")]
    OutOfRange(i64),
}
