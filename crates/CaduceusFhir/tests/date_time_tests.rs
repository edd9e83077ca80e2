use caduceus_fhir::{
    DatePrecision, FormatError, TemporalKind, XsDate, XsDateTime, XsInstant, XsTime, XsTimeZone,
    parse_date, parse_date_time, parse_instant, parse_time, parse_time_zone,
};

#[test]
fn test_parse_full_date() {
    let date = parse_date("2015-02-22").unwrap();
    assert_eq!(date, XsDate::from_ymd(2015, 2, 22));
    assert_eq!(date.precision(), DatePrecision::Day);
    assert_eq!(date.to_string(), "2015-02-22");
}

#[test]
fn test_parse_utc_date_time() {
    let value = parse_date_time("2014-01-23T00:00:00Z").unwrap();
    assert_eq!(value.date, XsDate::from_ymd(2014, 1, 23));
    assert_eq!(value.time, Some(XsTime::from_hms(0, 0, 0)));
    assert_eq!(value.zone, Some(XsTimeZone::Utc));
    assert_eq!(value.to_string(), "2014-01-23T00:00:00Z");
}

#[test]
fn test_canonical_literals_round_trip() {
    let literals = [
        "2015",
        "2015-02",
        "2015-02-07",
        "2015-02-07T13:28:17",
        "2015-02-07T13:28:17Z",
        "2015-02-07T13:28:17-05:00",
        "2015-02-07T13:28:17.239+02:00",
        "2017-01-01T00:00:00.000000001Z",
        "-0044-03-15",
    ];
    for literal in literals {
        let parsed = parse_date_time(literal).unwrap();
        assert_eq!(parsed.to_string(), literal, "literal {literal}");
    }
}

#[test]
fn test_date_grammar_rejections() {
    for input in ["999", "-999", "10000", "-10000", "-1", "2015-2", "2015-13", "2015-02-7", "", "0000", "-0000", "0000-01-01"] {
        assert!(
            matches!(parse_date(input), Err(FormatError::Grammar { kind: TemporalKind::Date, .. })),
            "accepted {input:?}"
        );
    }
}

#[test]
fn test_time_grammar_rejections() {
    for input in ["21:32", "25:25:10", "-10:00:00", "1:20:10", "10:00:00Z", "10:00:00+01:00", "12:60:00", "10:00:00.99999999999999999999"] {
        assert!(
            matches!(parse_time(input), Err(FormatError::Grammar { kind: TemporalKind::Time, .. })),
            "accepted {input:?}"
        );
    }
}

#[test]
fn test_calendar_is_checked() {
    assert!(parse_date("2016-02-29").is_ok());
    assert_eq!(
        parse_date("2015-02-29"),
        Err(FormatError::InvalidCalendarDate {
            input: "2015-02-29".to_string()
        })
    );
}

#[test]
fn test_small_years_keep_their_digits() {
    for literal in ["0001", "0010", "0100", "1000", "-0001"] {
        assert_eq!(parse_date(literal).unwrap().to_string(), literal);
    }
    assert!(parse_date_time("0000-01-01T00:00:00Z").is_err());
}

#[test]
fn test_negative_year() {
    let date = parse_date("-0500").unwrap();
    assert_eq!(date.year, -500);
    assert_eq!(date.precision(), DatePrecision::Year);
    assert_eq!(date.to_string(), "-0500");
}

#[test]
fn test_fraction_formatting() {
    let time = XsTime::from_hms(12, 12, 12).with_fraction(0.00001);
    assert_eq!(time.to_string(), "12:12:12.00001");

    let time = XsTime::from_hms(12, 12, 12).with_fraction(0.000000001);
    assert_eq!(time.to_string(), "12:12:12.000000001");

    let time = XsTime::from_hms(12, 12, 12).with_fraction(0.0);
    assert_eq!(time.to_string(), "12:12:12");
    assert_eq!(XsTime::from_hms(12, 12, 12).to_string(), "12:12:12");
}

#[test]
fn test_fraction_keeps_digits() {
    let time = parse_time("08:30:00.123").unwrap();
    assert_eq!(time.fraction, Some(0.123));
    assert_eq!(time.to_string(), "08:30:00.123");

    let time = parse_time("10:00:00.9999999").unwrap();
    assert!(time.fraction.is_some_and(|f| f < 1.0));
    assert_eq!(time.to_string(), "10:00:00.9999999");
}

#[test]
fn test_utc_and_zero_offset_are_distinct() {
    let zulu = parse_time_zone("Z").unwrap();
    let zero = parse_time_zone("+00:00").unwrap();
    assert_ne!(zulu, zero);
    assert_eq!(zulu.offset_minutes(), zero.offset_minutes());
    assert_eq!(zero.to_string(), "+00:00");

    let value = parse_date_time("2015-02-07T13:28:17+00:00").unwrap();
    assert_eq!(value.to_string(), "2015-02-07T13:28:17+00:00");
}

#[test]
fn test_zone_requires_time() {
    assert!(parse_date_time("2015-02-07Z").is_err());
    let built = XsDateTime::new(XsDate::from_ymd(2015, 2, 7), None, Some(XsTimeZone::Utc));
    assert_eq!(built.validate(), Err(FormatError::ZoneWithoutTime));
}

#[test]
fn test_instant_requires_zone() {
    let instant: XsInstant = parse_instant("2015-02-07T13:28:17.239+02:00").unwrap();
    assert_eq!(instant.as_date_time().zone, Some(XsTimeZone::offset(2, 0)));
    assert!(matches!(
        parse_instant("2015-02-07T13:28:17"),
        Err(FormatError::Grammar { kind: TemporalKind::Instant, .. })
    ));
}

#[test]
fn test_serde_reports_literal() {
    let error = serde_json::from_str::<XsDateTime>("\"2015-02-07T25:00:00Z\"").unwrap_err();
    assert!(error.to_string().contains("2015-02-07T25:00:00Z"));
}
