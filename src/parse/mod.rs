//! # Primitive Text Parsers
//!
//! Text-to-value micro-parsers with an explicit success/failure contract.
//! Each parser takes the raw field bytes and returns a value plus a
//! [`ParseResult`]; none of them allocate or touch row memory.
//!
//! | Parser | Input grammar | Failure modes |
//! |--------|---------------|---------------|
//! | `parse_bool` | `true`/`false`, case-insensitive | malformed |
//! | `parse_int` | `[+-]?[0-9]+` | malformed, overflow, underflow |
//! | `parse_float` | standard float grammar, `inf`/`nan` | malformed |
//! | `parse_decimal` | `[+-]?digits[.digits][eE[+-]digits]` | malformed, overflow, underflow |
//! | `TimestampValue::parse` | date, time, or date+time | neither component |
//! | `unescape_into` | escape-character removal | (total) |
//!
//! Surrounding ASCII whitespace is tolerated by the numeric parsers.
//! Out-of-range integers report `Overflow`/`Underflow` with the clamped
//! value; floats saturate to infinity through the standard grammar and still
//! report `Success` — decimals are the only family where the caller is
//! expected to reject anything short of exact success.

mod decimal;
mod escape;
mod numeric;
mod timestamp;

#[cfg(test)]
mod tests;

pub use decimal::{parse_decimal, DecimalNative};
pub use escape::unescape_into;
pub use numeric::{parse_bool, parse_float, parse_int, ParseInt};
pub use timestamp::TimestampValue;

/// Outcome of a primitive parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseResult {
    Success,
    Failure,
    Overflow,
    Underflow,
}

impl ParseResult {
    pub fn is_success(self) -> bool {
        self == ParseResult::Success
    }
}
