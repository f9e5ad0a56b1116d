//! # Timestamp Parsing
//!
//! Parses date, time-of-day, or combined timestamp text into a
//! [`TimestampValue`]: an optional date (days since the Unix epoch) plus an
//! optional time-of-day (microseconds since midnight).
//!
//! ## Accepted Formats
//!
//! | Shape | Example |
//! |-------|---------|
//! | Date only | `2024-01-15` |
//! | Time only | `13:45:30` or `13:45:30.123456` |
//! | Combined | `2024-01-15T13:45:30` or `2024-01-15 13:45:30` |
//!
//! A combined string with only one valid component is a partial success; the
//! decoder accepts any result carrying at least one component and rejects
//! results carrying neither.

/// Parsed timestamp: optional date and optional time-of-day components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampValue {
    date: Option<i32>,
    time: Option<i64>,
}

const MICROS_PER_DAY: i64 = 86_400 * 1_000_000;

impl TimestampValue {
    /// Parses timestamp text. Never fails outright; a string with neither a
    /// recognizable date nor time yields a value where
    /// [`has_date_or_time`](Self::has_date_or_time) is false.
    pub fn parse(bytes: &[u8]) -> Self {
        let none = Self {
            date: None,
            time: None,
        };
        let Ok(s) = std::str::from_utf8(bytes) else {
            return none;
        };
        let s = s.trim();

        if let Some(idx) = s.find(['T', ' ']) {
            return Self {
                date: parse_date(&s[..idx]),
                time: parse_time(&s[idx + 1..]),
            };
        }
        if s.contains(':') {
            return Self {
                date: None,
                time: parse_time(s),
            };
        }
        Self {
            date: parse_date(s),
            time: None,
        }
    }

    /// True when at least one of the date / time-of-day components parsed.
    pub fn has_date_or_time(&self) -> bool {
        self.date.is_some() || self.time.is_some()
    }

    pub fn date_days(&self) -> Option<i32> {
        self.date
    }

    pub fn time_micros(&self) -> Option<i64> {
        self.time
    }

    /// Canonical slot encoding: microseconds since the Unix epoch. A missing
    /// date means the epoch day; a missing time means midnight.
    pub fn micros_since_epoch(&self) -> i64 {
        let days = self.date.unwrap_or(0) as i64;
        days * MICROS_PER_DAY + self.time.unwrap_or(0)
    }
}

fn parse_date(s: &str) -> Option<i32> {
    let mut parts = s.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;

    if !(1..=12).contains(&month) {
        return None;
    }
    if day < 1 || day > days_in_month(year, month) {
        return None;
    }
    Some(date_to_days_since_epoch(year, month, day))
}

fn parse_time(s: &str) -> Option<i64> {
    let (clock, frac) = match s.find('.') {
        Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
        None => (s, None),
    };

    let mut parts = clock.splitn(3, ':');
    let hour: u32 = parts.next()?.parse().ok()?;
    let minute: u32 = parts.next()?.parse().ok()?;
    let second: u32 = parts.next()?.parse().ok()?;

    if hour > 23 || minute > 59 || second > 59 {
        return None;
    }

    let base = (hour as i64 * 3600 + minute as i64 * 60 + second as i64) * 1_000_000;

    let fractional: i64 = match frac {
        Some(f) if !f.is_empty() && f.len() <= 6 && f.bytes().all(|b| b.is_ascii_digit()) => {
            // Right-pad to microsecond resolution: ".5" is 500000 micros.
            let padded = format!("{:0<6}", f);
            padded.parse().ok()?
        }
        Some(_) => return None,
        None => 0,
    };

    Some(base + fractional)
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn date_to_days_since_epoch(year: i32, month: u32, day: u32) -> i32 {
    let mut days: i32 = 0;

    if year >= 1970 {
        for y in 1970..year {
            days += if is_leap_year(y) { 366 } else { 365 };
        }
    } else {
        for y in year..1970 {
            days -= if is_leap_year(y) { 366 } else { 365 };
        }
    }

    for m in 1..month {
        days += days_in_month(year, m) as i32;
    }

    days + day as i32 - 1
}
