//! # Boolean, Integer, and Float Parsing
//!
//! Integer parsing is generic over the signed widths via [`ParseInt`]:
//! digits accumulate into an `i128` and the result is range-checked against
//! the target width, so an out-of-range literal is detected rather than
//! wrapped. Float parsing defers to the standard library grammar, which
//! accepts `inf`/`nan` and saturates huge magnitudes to infinity.

use crate::parse::ParseResult;

/// Signed integer widths the text parser can target.
pub trait ParseInt: Copy {
    const MIN_I128: i128;
    const MAX_I128: i128;

    /// Converts a value already known to be in range.
    fn from_i128(v: i128) -> Self;
}

macro_rules! impl_parse_int {
    ($($ty:ty),+) => {
        $(
            impl ParseInt for $ty {
                const MIN_I128: i128 = <$ty>::MIN as i128;
                const MAX_I128: i128 = <$ty>::MAX as i128;

                fn from_i128(v: i128) -> Self {
                    v as $ty
                }
            }
        )+
    };
}

impl_parse_int!(i8, i16, i32, i64, i128);

/// Parses `true`/`false` (ASCII case-insensitive, whitespace-trimmed).
pub fn parse_bool(bytes: &[u8]) -> (bool, ParseResult) {
    let s = bytes.trim_ascii();
    if s.eq_ignore_ascii_case(b"true") {
        (true, ParseResult::Success)
    } else if s.eq_ignore_ascii_case(b"false") {
        (false, ParseResult::Success)
    } else {
        (false, ParseResult::Failure)
    }
}

/// Parses a signed decimal integer literal into the target width.
///
/// Out-of-range values clamp to the width's MIN/MAX and report
/// `Underflow`/`Overflow`; any non-digit content is `Failure`.
pub fn parse_int<T: ParseInt>(bytes: &[u8]) -> (T, ParseResult) {
    let s = bytes.trim_ascii();
    let (negative, digits) = match s.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, s),
    };
    if digits.is_empty() {
        return (T::from_i128(0), ParseResult::Failure);
    }

    let mut acc: i128 = 0;
    let mut saturated = false;
    for &b in digits {
        if !b.is_ascii_digit() {
            return (T::from_i128(0), ParseResult::Failure);
        }
        let digit = (b - b'0') as i128;
        match acc.checked_mul(10).and_then(|v| v.checked_add(digit)) {
            Some(v) => acc = v,
            None => saturated = true,
        }
    }

    if negative {
        // i128::MIN magnitude is unreachable through checked accumulation of
        // positive digits, so negation cannot overflow here.
        if saturated || -acc < T::MIN_I128 {
            return (T::from_i128(T::MIN_I128), ParseResult::Underflow);
        }
        (T::from_i128(-acc), ParseResult::Success)
    } else {
        if saturated || acc > T::MAX_I128 {
            return (T::from_i128(T::MAX_I128), ParseResult::Overflow);
        }
        (T::from_i128(acc), ParseResult::Success)
    }
}

/// Parses a floating-point literal through the standard library grammar.
///
/// `inf`, `-inf`, and `nan` are valid values; magnitudes beyond the type's
/// range saturate to infinity and still count as success.
pub fn parse_float<T: std::str::FromStr + Default>(bytes: &[u8]) -> (T, ParseResult) {
    let Ok(s) = std::str::from_utf8(bytes.trim_ascii()) else {
        return (T::default(), ParseResult::Failure);
    };
    match s.parse::<T>() {
        Ok(v) => (v, ParseResult::Success),
        Err(_) => (T::default(), ParseResult::Failure),
    }
}
