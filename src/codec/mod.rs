//! Field codec: raw text to typed intermediate values.
//!
//! This module provides:
//! - `FieldValue`: the typed value one text field converts into
//! - `encode`: conversion of one field under its resolved shape
//! - `TimeFormat`: per-column time encodings
//!
//! A `FieldValue` is itself a serde `Deserializer` (see `de`), so an
//! assembled record can be fed to any `Deserialize` target.

use chrono::{DateTime, FixedOffset};

use crate::error::{Error, Result};
use crate::shape::ScalarKind;

mod de;
mod time;

pub use time::{TIME_FORMAT_UNIX, TimeError, TimeFormat};

/// A converted field, ready to be decoded into a target member.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Str(String),
    Time(DateTime<FixedOffset>),
    Seq(Vec<FieldValue>),
}

/// Convert one raw field.
///
/// Sequences are split on a bare `,`; there is no escaping, so elements
/// cannot contain commas. An empty sequence field is an empty sequence.
/// Time values use `format`, or RFC 3339 when the column has none.
pub fn encode(
    raw: &str,
    kind: ScalarKind,
    sequence: bool,
    column: &str,
    format: Option<&TimeFormat>,
) -> Result<FieldValue> {
    if !sequence {
        return encode_scalar(raw, kind, column, format);
    }
    if raw.is_empty() {
        return Ok(FieldValue::Seq(Vec::new()));
    }
    raw.split(',')
        .map(|element| encode_scalar(element, kind, column, format))
        .collect::<Result<Vec<_>>>()
        .map(FieldValue::Seq)
}

fn encode_scalar(
    raw: &str,
    kind: ScalarKind,
    column: &str,
    format: Option<&TimeFormat>,
) -> Result<FieldValue> {
    match kind {
        ScalarKind::SignedInteger => raw
            .trim()
            .parse::<i64>()
            .map(FieldValue::Int)
            .map_err(|e| parse_failure(raw, kind, column, Box::new(e))),
        ScalarKind::UnsignedInteger => raw
            .trim()
            .parse::<u64>()
            .map(FieldValue::Uint)
            .map_err(|e| parse_failure(raw, kind, column, Box::new(e))),
        ScalarKind::Float => raw
            .trim()
            .parse::<f64>()
            .map(FieldValue::Float)
            .map_err(|e| parse_failure(raw, kind, column, Box::new(e))),
        ScalarKind::Boolean => raw
            .trim()
            .parse::<bool>()
            .map(FieldValue::Bool)
            .map_err(|e| parse_failure(raw, kind, column, Box::new(e))),
        ScalarKind::String => Ok(FieldValue::Str(raw.to_string())),
        ScalarKind::Time => format
            .unwrap_or(&TimeFormat::Rfc3339)
            .parse(raw)
            .map(FieldValue::Time)
            .map_err(|source| Error::TimeParse {
                column: column.to_string(),
                value: raw.to_string(),
                source,
            }),
    }
}

fn parse_failure(
    raw: &str,
    kind: ScalarKind,
    column: &str,
    source: Box<dyn std::error::Error + Send + Sync>,
) -> Error {
    Error::FieldParse {
        column: column.to_string(),
        value: raw.to_string(),
        kind,
        source,
    }
}
