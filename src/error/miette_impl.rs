//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::Error;

/// A diagnostic wrapper for read errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct ReadDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error
    pub source: Option<Error>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(e: &Error) -> Option<String> {
    let help = match e {
        Error::ColumnNamesMismatch { .. } => {
            "Every line needs exactly one field per column name; check the delimiter and quoting"
        }
        Error::UnsupportedTargetType => "Read into a struct or a map keyed by String",
        Error::InvalidFieldType { .. } => {
            "Use a scalar, a Timestamp, or a Vec of those for fields filled from CSV columns"
        }
        Error::TimeParse { .. } => {
            "Set a column format (\"unix\" or a strftime pattern) or supply RFC 3339 text"
        }
        Error::Header(_) | Error::EmptyHeader => "The first line must hold the column names",
        Error::Options(_) => "Delimiter, quote, escape and comment must be ASCII characters",
        _ => return None,
    };
    Some(help.to_string())
}

impl From<Error> for ReadDiagnostic {
    fn from(e: Error) -> Self {
        let message = match e.column() {
            Some(column) => format!("failed to read column '{column}'"),
            None => "failed to read CSV record".to_string(),
        };
        ReadDiagnostic {
            message,
            help: help_for(&e),
            source: Some(e),
            severity: Severity::Error,
        }
    }
}

impl From<Error> for miette::Report {
    fn from(e: Error) -> Self {
        miette::Report::new(ReadDiagnostic::from(e))
    }
}
