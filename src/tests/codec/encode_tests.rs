//! Tests for field conversion and FieldValue decoding.

use chrono::{TimeZone, Utc};
use serde::Deserialize;

use crate::codec::encode;
use crate::{Error, FieldValue, ScalarKind, TimeFormat, Timestamp};

#[test]
fn numbers_are_trimmed_before_parsing() {
    assert_eq!(
        encode(" -12 ", ScalarKind::SignedInteger, false, "c", None).unwrap(),
        FieldValue::Int(-12)
    );
    assert_eq!(
        encode("7\t", ScalarKind::UnsignedInteger, false, "c", None).unwrap(),
        FieldValue::Uint(7)
    );
    assert_eq!(
        encode(" 2.5", ScalarKind::Float, false, "c", None).unwrap(),
        FieldValue::Float(2.5)
    );
    assert_eq!(
        encode("false ", ScalarKind::Boolean, false, "c", None).unwrap(),
        FieldValue::Bool(false)
    );
}

#[test]
fn strings_are_kept_verbatim() {
    assert_eq!(
        encode("  a \\ b ", ScalarKind::String, false, "c", None).unwrap(),
        FieldValue::Str("  a \\ b ".into())
    );
}

#[test]
fn negative_unsigned_is_a_parse_error() {
    let err = encode("-1", ScalarKind::UnsignedInteger, false, "count", None).unwrap_err();

    match err {
        Error::FieldParse { column, value, kind, .. } => {
            assert_eq!(column, "count");
            assert_eq!(value, "-1");
            assert_eq!(kind, ScalarKind::UnsignedInteger);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn booleans_are_literal() {
    assert!(encode("1", ScalarKind::Boolean, false, "c", None).is_err());
    assert!(encode("TRUE", ScalarKind::Boolean, false, "c", None).is_err());
}

#[test]
fn sequences_split_on_bare_commas() {
    assert_eq!(
        encode("1,2,3", ScalarKind::SignedInteger, true, "c", None).unwrap(),
        FieldValue::Seq(vec![
            FieldValue::Int(1),
            FieldValue::Int(2),
            FieldValue::Int(3)
        ])
    );
    assert_eq!(
        encode("a,,b", ScalarKind::String, true, "c", None).unwrap(),
        FieldValue::Seq(vec![
            FieldValue::Str("a".into()),
            FieldValue::Str(String::new()),
            FieldValue::Str("b".into()),
        ])
    );
}

#[test]
fn empty_sequence_field_is_an_empty_sequence() {
    for kind in [ScalarKind::SignedInteger, ScalarKind::String, ScalarKind::Time] {
        assert_eq!(
            encode("", kind, true, "c", None).unwrap(),
            FieldValue::Seq(Vec::new())
        );
    }
}

#[test]
fn one_bad_element_fails_the_whole_sequence() {
    assert!(matches!(
        encode("1,x,3", ScalarKind::SignedInteger, true, "c", None),
        Err(Error::FieldParse { .. })
    ));
}

#[test]
fn time_uses_the_column_format() {
    let unix = TimeFormat::Unix;
    let value = encode("86400", ScalarKind::Time, false, "c", Some(&unix)).unwrap();

    let FieldValue::Time(t) = value else {
        panic!("expected a time value");
    };
    assert_eq!(t, Utc.with_ymd_and_hms(1970, 1, 2, 0, 0, 0).unwrap());
}

#[test]
fn time_defaults_to_rfc3339() {
    assert!(encode("1991-04-05T11:11:11Z", ScalarKind::Time, false, "c", None).is_ok());
    assert!(matches!(
        encode("1991-04-05", ScalarKind::Time, false, "c", None),
        Err(Error::TimeParse { .. })
    ));
}

#[derive(Debug, Deserialize, PartialEq)]
struct Wrapped(Timestamp);

#[test]
fn time_values_decode_into_timestamps() {
    let t = Utc.with_ymd_and_hms(2001, 2, 3, 4, 5, 6).unwrap();
    let value = FieldValue::Time(t.fixed_offset());

    let decoded = Timestamp::deserialize(value.clone()).unwrap();
    assert_eq!(decoded, Timestamp(t));

    let wrapped = Wrapped::deserialize(value).unwrap();
    assert_eq!(wrapped, Wrapped(Timestamp(t)));
}

#[test]
fn time_values_decode_into_strings_as_rfc3339() {
    let t = Utc.with_ymd_and_hms(2001, 2, 3, 4, 5, 6).unwrap();

    let text = String::deserialize(FieldValue::Time(t.fixed_offset())).unwrap();
    assert_eq!(text, "2001-02-03T04:05:06Z");
}

#[test]
fn fractional_seconds_survive_rendering() {
    let t = Utc.timestamp_opt(1, 250_000_000).unwrap();

    let decoded = Timestamp::deserialize(FieldValue::Time(t.fixed_offset())).unwrap();
    assert_eq!(decoded.timestamp_subsec_millis(), 250);
}

#[test]
fn sequences_decode_into_vecs() {
    let value = FieldValue::Seq(vec![FieldValue::Uint(4), FieldValue::Uint(5)]);

    let decoded = Vec::<u16>::deserialize(value).unwrap();
    assert_eq!(decoded, vec![4, 5]);
}

#[test]
fn options_wrap_present_values() {
    let decoded = Option::<i32>::deserialize(FieldValue::Int(3)).unwrap();
    assert_eq!(decoded, Some(3));
}

#[test]
fn mismatched_decode_is_an_error() {
    assert!(matches!(
        bool::deserialize(FieldValue::Str("yes".into())),
        Err(Error::Decode { column: None, .. })
    ));
}
