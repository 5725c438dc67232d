use super::{format_percentage, parse_timestamp, truncate_to_hour, AmountFormat, DateRange, Granularity, RangeError, TimestampError};
use anyhow::Result;
use chrono::{TimeDelta, TimeZone, Utc};

#[test]
fn test_timestamp_parses_supported_formats() -> Result<()> {
    let expected = Utc.with_ymd_and_hms(2024, 8, 30, 9, 46, 32).unwrap();

    let test_cases = vec![
        "2024-08-30T09:46:32",
        "2024-08-30 09:46:32",
        "2024-08-30T09:46:32Z",
        "2024-08-30T11:46:32+02:00",
        "  2024-08-30T09:46:32  ",
    ];

    for input in test_cases {
        assert_eq!(parse_timestamp(input)?, expected, "input: {input}");
    }

    assert_eq!(parse_timestamp("2024-08-30T09:46")?, Utc.with_ymd_and_hms(2024, 8, 30, 9, 46, 0).unwrap());
    assert_eq!(parse_timestamp("2023-07-08")?, Utc.with_ymd_and_hms(2023, 7, 8, 0, 0, 0).unwrap());
    assert_eq!(
        parse_timestamp("2024-08-30 09:46:32.250")?,
        expected + TimeDelta::milliseconds(250)
    );

    Ok(())
}

#[test]
fn test_timestamp_rejects_unparseable_values() {
    assert!(matches!(parse_timestamp(""), Err(TimestampError::Empty)));
    assert!(matches!(parse_timestamp("   "), Err(TimestampError::Empty)));
    assert!(matches!(parse_timestamp("not a date"), Err(TimestampError::InvalidFormat(_))));
    assert!(parse_timestamp("2024-13-01").is_err());
    assert!(parse_timestamp("2024-02-30T10:00:00").is_err());
}

#[test]
fn test_truncate_to_hour_drops_sub_hour_precision() -> Result<()> {
    let instant = parse_timestamp("2024-08-30T09:46:32.999")?;

    assert_eq!(truncate_to_hour(instant), Utc.with_ymd_and_hms(2024, 8, 30, 9, 0, 0).unwrap());

    let on_the_hour = Utc.with_ymd_and_hms(2024, 8, 30, 10, 0, 0).unwrap();

    assert_eq!(truncate_to_hour(on_the_hour), on_the_hour);

    Ok(())
}

#[test]
fn test_date_range_is_inclusive_on_both_ends() -> Result<()> {
    let start = parse_timestamp("2024-08-30T00:00:00")?;
    let end = parse_timestamp("2024-08-31T00:00:00")?;
    let range = DateRange::new(start, end);

    assert!(range.contains(start));
    assert!(range.contains(end));
    assert!(range.contains(start + TimeDelta::hours(5)));
    assert!(!range.contains(start - TimeDelta::seconds(1)));
    assert!(!range.contains(end + TimeDelta::seconds(1)));

    Ok(())
}

#[test]
fn test_reversed_date_range_matches_nothing() -> Result<()> {
    let start = parse_timestamp("2024-08-31T00:00:00")?;
    let end = parse_timestamp("2024-08-30T00:00:00")?;
    let range = DateRange::new(start, end);

    assert!(range.is_reversed());
    assert!(!range.contains(start));
    assert!(!range.contains(end));

    Ok(())
}

#[test]
fn test_date_range_covering_spans_extremes() -> Result<()> {
    let early = parse_timestamp("2024-08-30T01:00:00")?;
    let middle = parse_timestamp("2024-08-30T05:00:00")?;
    let late = parse_timestamp("2024-08-31T23:59:59")?;

    let range = DateRange::covering(vec![middle, late, early]);

    assert_eq!(range, Some(DateRange::new(early, late)));
    assert_eq!(DateRange::covering(Vec::new()), None);

    Ok(())
}

#[test]
fn test_granularity_controls_accepted_bounds() -> Result<()> {
    assert_eq!(Granularity::Date.parse_bound("2023-07-09")?, Utc.with_ymd_and_hms(2023, 7, 9, 0, 0, 0).unwrap());
    assert!(matches!(Granularity::Date.parse_bound("2023-07-09T10:00:00"), Err(RangeError::DateRequired(_))));

    assert_eq!(Granularity::DateTime.parse_bound("2023-07-09T10:00:00")?, Utc.with_ymd_and_hms(2023, 7, 9, 10, 0, 0).unwrap());
    assert_eq!(Granularity::DateTime.parse_bound("2023-07-09")?, Utc.with_ymd_and_hms(2023, 7, 9, 0, 0, 0).unwrap());
    assert!(matches!(Granularity::DateTime.parse_bound("yesterday"), Err(RangeError::Timestamp(_))));

    Ok(())
}

#[test]
fn test_legacy_amount_format_scales_from_one_hundred_thousand() {
    let test_cases = vec![
        (0.0, "$0.00"),
        (300.0, "$300.00"),
        (3398.73, "$3398.73"),
        (99_999.99, "$99999.99"),
        (100_000.0, "$0.10 M"),
        (150_000.0, "$0.15 M"),
        (2_500_000.0, "$2.50 M"),
    ];

    for (amount, expected) in test_cases {
        assert_eq!(AmountFormat::Legacy.format(amount), expected, "amount: {amount}");
    }
}

#[test]
fn test_plain_and_scaled_amount_formats() {
    assert_eq!(AmountFormat::Plain.format(150_000.0), "$150000.00");
    assert_eq!(AmountFormat::Plain.format(12.5), "$12.50");

    assert_eq!(AmountFormat::Scaled.format(150_000.0), "$150.00 K");
    assert_eq!(AmountFormat::Scaled.format(2_500_000.0), "$2.50 M");
    assert_eq!(AmountFormat::Scaled.format(999.0), "$999.00");
}

#[test]
fn test_amount_rounding_follows_stored_binary_value() {
    let test_cases = vec![
        (1.005, "$1.00"),
        (2.675, "$2.67"),
        (1.045, "$1.04"),
        (10.235, "$10.23"),
        (0.125, "$0.13"),
        (-0.125, "$-0.13"),
    ];

    for (amount, expected) in test_cases {
        assert_eq!(AmountFormat::Plain.format(amount), expected, "amount: {amount}");
    }

    assert_eq!(AmountFormat::Legacy.format(1.005), "$1.00");
    assert_eq!(format_percentage(2.675), "2.67%");
}

#[test]
fn test_formats_render_not_a_number_sentinel() {
    assert_eq!(AmountFormat::Legacy.format(f64::NAN), "$NaN");
    assert_eq!(AmountFormat::Scaled.format(f64::NAN), "$NaN");
    assert_eq!(format_percentage(f64::NAN), "NaN%");
    assert_eq!(format_percentage(50.0), "50.00%");
    assert_eq!(format_percentage(100.0 / 3.0), "33.33%");
}
