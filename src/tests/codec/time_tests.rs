//! Tests for TimeFormat.

use chrono::{FixedOffset, TimeZone, Utc};

use crate::{TIME_FORMAT_UNIX, TimeError, TimeFormat};

#[test]
fn format_values_map_to_variants() {
    assert_eq!(TimeFormat::from_format_str(""), TimeFormat::Rfc3339);
    assert_eq!(TimeFormat::from_format_str(TIME_FORMAT_UNIX), TimeFormat::Unix);
    assert_eq!(
        TimeFormat::from_format_str("%Y"),
        TimeFormat::Pattern("%Y".to_string())
    );
    assert_eq!(TimeFormat::default(), TimeFormat::Rfc3339);
}

#[test]
fn unix_seconds_are_utc() {
    let t = TimeFormat::Unix.parse("1613235342").unwrap();

    assert_eq!(t, Utc.with_ymd_and_hms(2021, 2, 13, 16, 55, 42).unwrap());
    assert_eq!(t.offset().local_minus_utc(), 0);
}

#[test]
fn unix_accepts_negative_seconds() {
    let t = TimeFormat::Unix.parse("-60").unwrap();
    assert_eq!(t.timestamp(), -60);
}

#[test]
fn unix_rejects_non_integers() {
    assert!(matches!(
        TimeFormat::Unix.parse("1.5"),
        Err(TimeError::Int(_))
    ));
    assert!(matches!(
        TimeFormat::Unix.parse(""),
        Err(TimeError::Int(_))
    ));
}

#[test]
fn unix_rejects_out_of_range_seconds() {
    assert!(matches!(
        TimeFormat::Unix.parse(&i64::MAX.to_string()),
        Err(TimeError::OutOfRange(_))
    ));
}

#[test]
fn rfc3339_keeps_the_offset() {
    let t = TimeFormat::Rfc3339
        .parse("1991-04-05T11:11:11+02:00")
        .unwrap();

    let east = FixedOffset::east_opt(2 * 3600).unwrap();
    assert_eq!(t.offset(), &east);
    assert_eq!(t, Utc.with_ymd_and_hms(1991, 4, 5, 9, 11, 11).unwrap());
}

#[test]
fn pattern_with_offset() {
    let format = TimeFormat::Pattern("%d.%m.%Y %H:%M %z".into());
    let t = format.parse("05.04.1991 11:11 -0100").unwrap();

    assert_eq!(t, Utc.with_ymd_and_hms(1991, 4, 5, 12, 11, 0).unwrap());
}

#[test]
fn pattern_without_offset_is_utc() {
    let format = TimeFormat::Pattern("%Y-%m-%d %H:%M:%S".into());
    let t = format.parse("1991-04-05 11:11:11").unwrap();

    assert_eq!(t, Utc.with_ymd_and_hms(1991, 4, 5, 11, 11, 11).unwrap());
}

#[test]
fn date_only_pattern_is_midnight_utc() {
    let format = TimeFormat::Pattern("%Y-%m-%d".into());
    let t = format.parse("1991-04-05").unwrap();

    assert_eq!(t, Utc.with_ymd_and_hms(1991, 4, 5, 0, 0, 0).unwrap());
}

#[test]
fn pattern_mismatch_is_a_chrono_error() {
    let format = TimeFormat::Pattern("%Y-%m-%d".into());

    assert!(matches!(
        format.parse("April 5th"),
        Err(TimeError::Chrono(_))
    ));
}

#[test]
fn formats_display_as_configured() {
    assert_eq!(TimeFormat::Unix.to_string(), "unix");
    assert_eq!(TimeFormat::Rfc3339.to_string(), "RFC 3339");
    assert_eq!(TimeFormat::Pattern("%s".into()).to_string(), "%s");
}
