//! Error types for csvee read operations.
//!
//! This module provides:
//! - `Error`: every failure a `Reader` can report
//! - `Result`: the crate-wide result alias
//!
//! End of input is not an error: `Reader::read` returns `Ok(None)`.

use std::fmt;

use thiserror::Error;

use crate::codec::TimeError;
use crate::shape::ScalarKind;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading and mapping records.
#[derive(Debug, Error)]
pub enum Error {
    /// A data line did not have one field per configured column name.
    #[error(
        "line {line}: the number of column names ({expected}) does not match the number of fields in the record ({found})"
    )]
    ColumnNamesMismatch {
        /// Line of the offending record
        line: u64,
        /// Number of column names
        expected: usize,
        /// Number of fields on the line
        found: usize,
    },

    /// The target type is neither a struct nor a map with string keys.
    #[error("target type must be a struct or a map with string keys")]
    UnsupportedTargetType,

    /// A column maps to a field whose type cannot be filled from text.
    #[error(
        "column '{column}': field type must be an integer, float, bool, string, time, or a sequence of those"
    )]
    InvalidFieldType {
        /// Column name
        column: String,
    },

    /// A time column could not be parsed.
    #[error("column '{column}': could not parse '{value}' as a time")]
    TimeParse {
        /// Column name
        column: String,
        /// Offending text
        value: String,
        /// The underlying parse failure
        #[source]
        source: TimeError,
    },

    /// A numeric or boolean column could not be parsed.
    #[error("column '{column}': could not parse '{value}' as {kind}")]
    FieldParse {
        /// Column name
        column: String,
        /// Offending text
        value: String,
        /// Kind the field resolved to
        kind: ScalarKind,
        /// The underlying parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The header line could not be tokenized.
    #[error("could not read CSV headers")]
    Header(#[source] csv::Error),

    /// Header mode was requested on an empty input.
    #[error("could not read CSV headers: input is empty")]
    EmptyHeader,

    /// Tokenizer failure on a data line.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// I/O error while opening a source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The assembled record could not be decoded into the target.
    #[error("decode error{}: {message}", column_suffix(.column))]
    Decode {
        /// Column being decoded when the failure happened, if known
        column: Option<String>,
        /// Message from the target's `Deserialize` impl
        message: String,
    },

    /// Reader options are invalid or could not be loaded.
    #[error("invalid reader options: {0}")]
    Options(String),
}

fn column_suffix(column: &Option<String>) -> String {
    match column {
        Some(column) => format!(" in column '{column}'"),
        None => String::new(),
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Decode {
            column: None,
            message: msg.to_string(),
        }
    }

    fn missing_field(field: &'static str) -> Self {
        Error::Decode {
            column: Some(field.to_string()),
            message: format!("missing field `{field}`"),
        }
    }
}

impl Error {
    /// Column the error is attributed to, if any.
    pub fn column(&self) -> Option<&str> {
        match self {
            Error::InvalidFieldType { column }
            | Error::TimeParse { column, .. }
            | Error::FieldParse { column, .. } => Some(column.as_str()),
            Error::Decode { column, .. } => column.as_deref(),
            _ => None,
        }
    }

    /// Attribute a decode failure to `column` unless it already names one.
    pub(crate) fn in_column(self, column: &str) -> Self {
        match self {
            Error::Decode {
                column: None,
                message,
            } => Error::Decode {
                column: Some(column.to_string()),
                message,
            },
            other => other,
        }
    }

    /// Whether the error was raised before a data line was read.
    pub fn is_header_error(&self) -> bool {
        matches!(self, Error::Header(_) | Error::EmptyHeader)
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
