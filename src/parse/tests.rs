//! Tests for the primitive parsers

use super::*;

#[test]
fn bool_accepts_true_false_case_insensitive() {
    assert_eq!(parse_bool(b"true"), (true, ParseResult::Success));
    assert_eq!(parse_bool(b"FALSE"), (false, ParseResult::Success));
    assert_eq!(parse_bool(b"TrUe"), (true, ParseResult::Success));
    assert_eq!(parse_bool(b"  false  "), (false, ParseResult::Success));
}

#[test]
fn bool_rejects_other_tokens() {
    assert_eq!(parse_bool(b"1").1, ParseResult::Failure);
    assert_eq!(parse_bool(b"yes").1, ParseResult::Failure);
    assert_eq!(parse_bool(b"").1, ParseResult::Failure);
}

#[test]
fn int_parses_signed_literals() {
    assert_eq!(parse_int::<i32>(b"42"), (42, ParseResult::Success));
    assert_eq!(parse_int::<i32>(b"-42"), (-42, ParseResult::Success));
    assert_eq!(parse_int::<i32>(b"+7"), (7, ParseResult::Success));
    assert_eq!(parse_int::<i64>(b" 123 "), (123, ParseResult::Success));
}

#[test]
fn int_honors_width_bounds() {
    assert_eq!(parse_int::<i8>(b"127"), (127, ParseResult::Success));
    assert_eq!(parse_int::<i8>(b"-128"), (-128, ParseResult::Success));
    assert_eq!(parse_int::<i8>(b"128"), (127, ParseResult::Overflow));
    assert_eq!(parse_int::<i8>(b"-129"), (-128, ParseResult::Underflow));
    assert_eq!(
        parse_int::<i64>(b"9223372036854775807"),
        (i64::MAX, ParseResult::Success)
    );
    assert_eq!(
        parse_int::<i64>(b"9223372036854775808").1,
        ParseResult::Overflow
    );
}

#[test]
fn int_rejects_malformed_tokens() {
    assert_eq!(parse_int::<i32>(b"").1, ParseResult::Failure);
    assert_eq!(parse_int::<i32>(b"+").1, ParseResult::Failure);
    assert_eq!(parse_int::<i32>(b"12x").1, ParseResult::Failure);
    assert_eq!(parse_int::<i32>(b"1 2").1, ParseResult::Failure);
    assert_eq!(parse_int::<i32>(b"3.5").1, ParseResult::Failure);
}

#[test]
fn int_very_long_digit_string_overflows() {
    let digits = [b'9'; 50];
    assert_eq!(parse_int::<i64>(&digits), (i64::MAX, ParseResult::Overflow));
}

#[test]
fn float_parses_standard_grammar() {
    let (v, r) = parse_float::<f64>(b"3.5");
    assert_eq!(r, ParseResult::Success);
    assert_eq!(v, 3.5);

    let (v, r) = parse_float::<f32>(b"-0.25");
    assert_eq!(r, ParseResult::Success);
    assert_eq!(v, -0.25f32);
}

#[test]
fn float_accepts_inf_and_nan() {
    let (v, r) = parse_float::<f64>(b"inf");
    assert_eq!(r, ParseResult::Success);
    assert!(v.is_infinite());

    let (v, r) = parse_float::<f64>(b"NaN");
    assert_eq!(r, ParseResult::Success);
    assert!(v.is_nan());
}

#[test]
fn float_saturates_huge_magnitudes_silently() {
    let (v, r) = parse_float::<f64>(b"1e999");
    assert_eq!(r, ParseResult::Success);
    assert!(v.is_infinite());
}

#[test]
fn float_rejects_malformed_tokens() {
    assert_eq!(parse_float::<f64>(b"abc").1, ParseResult::Failure);
    assert_eq!(parse_float::<f64>(b"").1, ParseResult::Failure);
    assert_eq!(parse_float::<f64>(b"1.2.3").1, ParseResult::Failure);
}

#[test]
fn decimal_scales_to_declared_scale() {
    assert_eq!(
        parse_decimal::<i32>(b"123.45", 5, 2),
        (12345, ParseResult::Success)
    );
    assert_eq!(
        parse_decimal::<i32>(b"-7.5", 5, 2),
        (-750, ParseResult::Success)
    );
    assert_eq!(parse_decimal::<i32>(b"42", 5, 2), (4200, ParseResult::Success));
    assert_eq!(
        parse_decimal::<i64>(b"1e2", 10, 0),
        (100, ParseResult::Success)
    );
    assert_eq!(
        parse_decimal::<i64>(b"2.5e-1", 10, 2),
        (25, ParseResult::Success)
    );
}

#[test]
fn decimal_overflow_when_whole_digits_exceed_precision() {
    assert_eq!(parse_decimal::<i32>(b"100.00", 4, 2).1, ParseResult::Overflow);
    assert_eq!(parse_decimal::<i32>(b"12345", 4, 0).1, ParseResult::Overflow);
    assert_eq!(parse_decimal::<i64>(b"1e30", 18, 0).1, ParseResult::Overflow);
}

#[test]
fn decimal_underflow_when_fraction_exceeds_scale() {
    let (v, r) = parse_decimal::<i32>(b"1.234", 5, 2);
    assert_eq!(r, ParseResult::Underflow);
    assert_eq!(v, 123);
}

#[test]
fn decimal_wide_backing_widths() {
    assert_eq!(
        parse_decimal::<i64>(b"123456789012.345", 15, 3),
        (123_456_789_012_345, ParseResult::Success)
    );
    assert_eq!(
        parse_decimal::<i128>(b"99999999999999999999.5", 21, 1),
        (999_999_999_999_999_999_995, ParseResult::Success)
    );
}

#[test]
fn decimal_rejects_malformed_tokens() {
    assert_eq!(parse_decimal::<i32>(b"", 5, 2).1, ParseResult::Failure);
    assert_eq!(parse_decimal::<i32>(b".", 5, 2).1, ParseResult::Failure);
    assert_eq!(parse_decimal::<i32>(b"abc", 5, 2).1, ParseResult::Failure);
    assert_eq!(parse_decimal::<i32>(b"1.2.3", 5, 2).1, ParseResult::Failure);
    assert_eq!(parse_decimal::<i32>(b"1e", 5, 2).1, ParseResult::Failure);
}

#[test]
fn timestamp_date_only() {
    let ts = TimestampValue::parse(b"2024-01-15");
    assert!(ts.has_date_or_time());
    assert_eq!(ts.date_days(), Some(19737));
    assert_eq!(ts.time_micros(), None);
}

#[test]
fn timestamp_time_only() {
    let ts = TimestampValue::parse(b"13:45:30");
    assert!(ts.has_date_or_time());
    assert_eq!(ts.date_days(), None);
    assert_eq!(ts.time_micros(), Some(49_530_000_000));
}

#[test]
fn timestamp_combined_both_separators() {
    for input in [&b"2024-01-15T13:45:30"[..], b"2024-01-15 13:45:30"] {
        let ts = TimestampValue::parse(input);
        assert_eq!(ts.date_days(), Some(19737));
        assert_eq!(ts.time_micros(), Some(49_530_000_000));
        assert_eq!(
            ts.micros_since_epoch(),
            19737 * 86_400 * 1_000_000 + 49_530_000_000
        );
    }
}

#[test]
fn timestamp_fractional_seconds_pad_to_micros() {
    let ts = TimestampValue::parse(b"00:00:01.5");
    assert_eq!(ts.time_micros(), Some(1_500_000));

    let ts = TimestampValue::parse(b"00:00:00.000001");
    assert_eq!(ts.time_micros(), Some(1));
}

#[test]
fn timestamp_partial_component_still_counts() {
    let ts = TimestampValue::parse(b"2024-01-15 99:99:99");
    assert!(ts.has_date_or_time());
    assert_eq!(ts.date_days(), Some(19737));
    assert_eq!(ts.time_micros(), None);
}

#[test]
fn timestamp_rejects_invalid_calendar_dates() {
    assert!(!TimestampValue::parse(b"2023-02-29").has_date_or_time());
    assert!(!TimestampValue::parse(b"2024-13-01").has_date_or_time());
    assert!(!TimestampValue::parse(b"2024-04-31").has_date_or_time());
    assert!(TimestampValue::parse(b"2024-02-29").has_date_or_time());
}

#[test]
fn timestamp_neither_component_is_empty_value() {
    assert!(!TimestampValue::parse(b"gibberish").has_date_or_time());
    assert!(!TimestampValue::parse(b"").has_date_or_time());
    assert!(!TimestampValue::parse(b"not a timestamp").has_date_or_time());
    assert!(!TimestampValue::parse(&[0xff, 0xfe]).has_date_or_time());
}

#[test]
fn unescape_strips_escape_character() {
    let mut dst = [0u8; 16];
    let n = unescape_into(b"a\\|b", b'\\', &mut dst);
    assert_eq!(&dst[..n], b"a|b");
}

#[test]
fn unescape_escaped_escape_is_literal() {
    let mut dst = [0u8; 16];
    let n = unescape_into(b"a\\\\b", b'\\', &mut dst);
    assert_eq!(&dst[..n], b"a\\b");
}

#[test]
fn unescape_output_never_longer_than_input() {
    let src = b"\\a\\b\\c";
    let mut dst = [0u8; 16];
    let n = unescape_into(src, b'\\', &mut dst);
    assert!(n <= src.len());
    assert_eq!(&dst[..n], b"abc");
}

#[test]
fn unescape_drops_trailing_escape() {
    let mut dst = [0u8; 16];
    let n = unescape_into(b"ab\\", b'\\', &mut dst);
    assert_eq!(&dst[..n], b"ab");
}

#[test]
fn unescape_caps_at_destination_length() {
    let mut dst = [0u8; 2];
    let n = unescape_into(b"abcdef", b'\\', &mut dst);
    assert_eq!(n, 2);
    assert_eq!(&dst[..n], b"ab");
}
