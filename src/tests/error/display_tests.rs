//! Error messages and helpers.

use std::error::Error as _;

use serde::de::Error as _;

use crate::{Error, ScalarKind, TimeFormat};

#[test]
fn mismatch_message_names_both_counts() {
    let err = Error::ColumnNamesMismatch {
        line: 4,
        expected: 3,
        found: 2,
    };

    let message = err.to_string();
    assert!(message.starts_with("line 4:"));
    assert!(message.contains("(3)"));
    assert!(message.contains("(2)"));
}

#[test]
fn field_errors_carry_their_column() {
    let err = Error::InvalidFieldType {
        column: "tags".into(),
    };
    assert_eq!(err.column(), Some("tags"));
    assert!(err.to_string().contains("'tags'"));

    assert_eq!(Error::UnsupportedTargetType.column(), None);
}

#[test]
fn parse_errors_keep_their_source() {
    let source = "x".parse::<i64>().unwrap_err();
    let err = Error::FieldParse {
        column: "n".into(),
        value: "x".into(),
        kind: ScalarKind::SignedInteger,
        source: Box::new(source),
    };

    assert_eq!(err.to_string(), "column 'n': could not parse 'x' as signed integer");
    assert!(err.source().is_some());
}

#[test]
fn time_errors_keep_their_source() {
    let source = TimeFormat::Unix.parse("soon").unwrap_err();
    let err = Error::TimeParse {
        column: "at".into(),
        value: "soon".into(),
        source,
    };

    assert_eq!(err.column(), Some("at"));
    assert!(err.source().is_some());
}

#[test]
fn serde_custom_errors_are_decode_errors() {
    let err = Error::custom("boom");

    assert!(matches!(&err, Error::Decode { column: None, message } if message == "boom"));
    assert_eq!(err.column(), None);
    assert_eq!(err.to_string(), "decode error: boom");
}

#[test]
fn decode_errors_name_their_column_once_known() {
    let err = Error::custom("bad width").in_column("a");

    assert_eq!(err.column(), Some("a"));
    assert_eq!(err.to_string(), "decode error in column 'a': bad width");

    // The innermost column wins.
    assert_eq!(err.in_column("outer").column(), Some("a"));
}

#[test]
fn missing_fields_are_attributed_to_the_field() {
    let err = Error::missing_field("b");

    assert_eq!(err.column(), Some("b"));
    assert_eq!(err.to_string(), "decode error in column 'b': missing field `b`");
}

#[test]
fn in_column_leaves_other_errors_alone() {
    let err = Error::UnsupportedTargetType.in_column("a");
    assert!(matches!(err, Error::UnsupportedTargetType));
}

#[test]
fn header_errors_are_flagged() {
    assert!(Error::EmptyHeader.is_header_error());
    assert!(!Error::UnsupportedTargetType.is_header_error());
}

#[test]
fn io_errors_convert() {
    let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(err, Error::Io(_)));
}

#[cfg(feature = "miette")]
mod diagnostics {
    use miette::Diagnostic;

    use crate::{Error, ReadDiagnostic};

    #[test]
    fn diagnostic_has_help_for_schema_errors() {
        let diag = ReadDiagnostic::from(Error::ColumnNamesMismatch {
            line: 1,
            expected: 2,
            found: 1,
        });

        assert_eq!(diag.message, "failed to read CSV record");
        assert!(diag.help().is_some());
        assert_eq!(diag.severity(), Some(miette::Severity::Error));
    }

    #[test]
    fn diagnostic_names_the_column() {
        let diag = ReadDiagnostic::from(Error::InvalidFieldType {
            column: "x".into(),
        });

        assert_eq!(diag.message, "failed to read column 'x'");
    }

    #[test]
    fn decode_errors_have_no_help() {
        let diag = ReadDiagnostic::from(Error::Decode {
            column: None,
            message: "bad".into(),
        });
        assert!(diag.help.is_none());
    }

    #[test]
    fn errors_convert_to_reports() {
        let report: miette::Report = Error::EmptyHeader.into();
        assert!(report.to_string().contains("failed to read"));
    }
}
