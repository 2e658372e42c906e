//! `HH:MM` wall-clock arithmetic.
//!
//! Offsets are `(hours, minutes)` pairs. Results are never wrapped at
//! midnight: adding past 23:59 yields hours above 23 and subtracting below
//! 00:00 yields negative hours.

use crate::error::{Result, SunlightError};

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Parses exactly two digits, a colon and two digits. Minutes must be below
/// 60; hours are not capped at 23 so that unwrapped results parse back.
pub fn parse_clock(clock: &str) -> Result<(i32, i32)> {
    let invalid = || SunlightError::InvalidClock {
        value: clock.to_string(),
    };
    let (hours, minutes) = clock.split_once(':').ok_or_else(invalid)?;
    let hours = two_digits(hours).ok_or_else(invalid)?;
    let minutes = two_digits(minutes).filter(|m| *m < 60).ok_or_else(invalid)?;
    Ok((hours, minutes))
}

fn two_digits(field: &str) -> Option<i32> {
    match field.as_bytes() {
        [tens @ b'0'..=b'9', units @ b'0'..=b'9'] => {
            Some(((tens - b'0') * 10 + (units - b'0')) as i32)
        }
        _ => None,
    }
}

pub fn format_clock(time: (i32, i32)) -> String {
    format!("{:02}:{:02}", time.0, time.1)
}

/// Time from `start` to `end` as `(hours, minutes)`, borrowing an hour when
/// the minute difference is negative. `end` must not precede `start`.
pub fn elapsed(start: &str, end: &str) -> Result<(i32, i32)> {
    let (start_h, start_m) = parse_clock(start)?;
    let (end_h, end_m) = parse_clock(end)?;
    let mut hours = end_h - start_h;
    let mut minutes = end_m - start_m;
    if minutes < 0 {
        minutes += 60;
        hours -= 1;
    }
    Ok((hours, minutes))
}

pub fn add_offset(clock: &str, hours: i32, minutes: i32) -> Result<String> {
    let (h, m) = parse_clock(clock)?;
    let mut hours = h + hours;
    let mut minutes = m + minutes;
    while minutes > 59 {
        minutes -= 60;
        hours += 1;
    }
    Ok(format_clock((hours, minutes)))
}

pub fn subtract_offset(clock: &str, hours: i32, minutes: i32) -> Result<String> {
    let (h, m) = parse_clock(clock)?;
    let mut hours = h - hours;
    let mut minutes = m - minutes;
    while minutes < 0 {
        minutes += 60;
        hours -= 1;
    }
    Ok(format_clock((hours, minutes)))
}

pub fn offset_to_seconds(offset: (i32, i32)) -> i64 {
    offset.0 as i64 * SECONDS_PER_HOUR + offset.1 as i64 * SECONDS_PER_MINUTE
}

/// Truncates to whole minutes, then carries minutes into hours.
pub fn seconds_to_offset(seconds: f64) -> (i32, i32) {
    let total_minutes = (seconds / SECONDS_PER_MINUTE as f64) as i32;
    (total_minutes / 60, total_minutes % 60)
}
