//! # Fixed-Width Decimal Parsing
//!
//! Parses a decimal literal into a scaled integer at the column's declared
//! scale, backed by one of the three physical widths (i32/i64/i128).
//!
//! Unlike the integer and float parsers, nothing here is best-effort from the
//! decoder's point of view: more integer digits than `precision - scale`
//! report `Overflow`, more fractional digits than `scale` report `Underflow`
//! (with the truncated value), and the decoder rejects both.

use crate::parse::numeric::parse_int;
use crate::parse::ParseResult;

/// Integer widths that can back a decimal slot.
pub trait DecimalNative: Copy {
    fn from_i128(v: i128) -> Self;
}

impl DecimalNative for i32 {
    fn from_i128(v: i128) -> Self {
        v as i32
    }
}

impl DecimalNative for i64 {
    fn from_i128(v: i128) -> Self {
        v as i64
    }
}

impl DecimalNative for i128 {
    fn from_i128(v: i128) -> Self {
        v
    }
}

/// Parses a decimal literal to a scaled integer at the declared scale.
///
/// Grammar: `[+-]? digits [. digits] [eE [+-] digits]`, whitespace-trimmed,
/// at least one mantissa digit required.
pub fn parse_decimal<T: DecimalNative>(bytes: &[u8], precision: u8, scale: u8) -> (T, ParseResult) {
    debug_assert!(scale <= precision);
    let fail = (T::from_i128(0), ParseResult::Failure);

    let s = bytes.trim_ascii();
    let (negative, s) = match s.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, s),
    };

    let mut acc: i128 = 0;
    let mut acc_saturated = false;
    let mut mantissa_digits = 0usize;
    let mut frac_digits: i32 = 0;
    let mut seen_dot = false;
    let mut exponent: i32 = 0;

    let mut idx = 0;
    while idx < s.len() {
        match s[idx] {
            b'0'..=b'9' => {
                let digit = (s[idx] - b'0') as i128;
                match acc.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                    Some(v) => acc = v,
                    None => acc_saturated = true,
                }
                mantissa_digits += 1;
                if seen_dot {
                    frac_digits += 1;
                }
            }
            b'.' if !seen_dot => seen_dot = true,
            b'e' | b'E' => {
                let (exp, exp_result) = parse_int::<i32>(&s[idx + 1..]);
                match exp_result {
                    ParseResult::Success => exponent = exp,
                    ParseResult::Overflow => return (T::from_i128(0), ParseResult::Overflow),
                    ParseResult::Underflow => return (T::from_i128(0), ParseResult::Underflow),
                    ParseResult::Failure => return fail,
                }
                idx = s.len();
                continue;
            }
            _ => return fail,
        }
        idx += 1;
    }

    if mantissa_digits == 0 {
        return fail;
    }
    if acc_saturated {
        return (T::from_i128(0), ParseResult::Overflow);
    }

    // Rescale the digit string to the declared scale. A positive shift pads
    // with zeros; a negative shift truncates fractional digits.
    let shift = scale as i32 - frac_digits + exponent;
    let (mut scaled, result) = if shift >= 0 {
        match pow10(shift).and_then(|p| acc.checked_mul(p)) {
            Some(v) => (v, ParseResult::Success),
            None if acc == 0 => (0, ParseResult::Success),
            None => return (T::from_i128(0), ParseResult::Overflow),
        }
    } else {
        match pow10(-shift) {
            Some(p) => (acc / p, ParseResult::Underflow),
            None => (0, ParseResult::Underflow),
        }
    };

    match pow10(precision as i32) {
        Some(limit) if scaled < limit => {}
        _ => return (T::from_i128(0), ParseResult::Overflow),
    }

    if negative {
        scaled = -scaled;
    }
    // On underflow the truncated value is still returned so callers can
    // choose their policy.
    (T::from_i128(scaled), result)
}

fn pow10(exp: i32) -> Option<i128> {
    if !(0..=38).contains(&exp) {
        return None;
    }
    Some(10i128.pow(exp as u32))
}
