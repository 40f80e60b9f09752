//! Time-of-day arithmetic.
//!
//! Converts between clock text and minutes past midnight and measures the
//! span between two clock times. Two textual forms are accepted:
//!
//! - 24-hour `"HH:MM"` (`"06:00"`, `"17:30"`)
//! - 12-hour with an `am`/`pm` suffix (`"9:05am"`, `"12:30 PM"`, `"7pm"`)
//!
//! Spans never come out as zero: an end at or before the start is read as
//! falling on the next day.

use crate::constants::{MINUTES_PER_DAY, MINUTES_PER_HOUR};
use crate::errors::{Result, WeekplanError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Parse clock text into minutes past midnight.
///
/// Whitespace anywhere in the text is ignored and the suffix is
/// case-insensitive. With a suffix, hour 12 maps to 0 for `am` and stays 12
/// for `pm`; every other `pm` hour adds twelve. A missing minute part reads
/// as `:00`.
///
/// # Errors
/// Returns [`WeekplanError::Format`] when the text has no parseable hour, an
/// unparseable minute part, or a component outside its clock range.
pub fn time_to_minutes(text: &str) -> Result<u32> {
    let compact: String =
        text.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_ascii_lowercase();

    let (clock, meridiem) = split_meridiem(&compact);
    let (hour_text, minute_text) = match clock.split_once(':') {
        Some((hour, minute)) => (hour, Some(minute)),
        None => (clock, None),
    };

    let hour = parse_component(hour_text)
        .ok_or_else(|| WeekplanError::format(text, "no parseable hour component"))?;

    let minute = match minute_text {
        Some(minute_text) => parse_component(minute_text)
            .ok_or_else(|| WeekplanError::format(text, "unparseable minute component"))?,
        None => 0,
    };
    if minute >= MINUTES_PER_HOUR {
        return Err(WeekplanError::format(text, "minutes must be between 0 and 59"));
    }

    let hour = match meridiem {
        Some(meridiem) => {
            if !(1..=12).contains(&hour) {
                return Err(WeekplanError::format(
                    text,
                    "12-hour clock hour must be between 1 and 12",
                ));
            }
            match meridiem {
                Meridiem::Am => hour % 12,
                Meridiem::Pm => hour % 12 + 12,
            }
        }
        None => {
            if hour > 23 {
                return Err(WeekplanError::format(text, "hour must be between 0 and 23"));
            }
            hour
        }
    };

    Ok(hour * MINUTES_PER_HOUR + minute)
}

/// Render minutes past midnight as zero-padded 24-hour `"HH:MM"`.
///
/// Values past the end of the day wrap onto the next day's clock, so
/// `minutes_to_time(1800)` is `"06:00"`.
pub fn minutes_to_time(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", minutes / MINUTES_PER_HOUR, minutes % MINUTES_PER_HOUR)
}

/// Minutes from `start` to `end`, both given as minutes past midnight.
///
/// Both endpoints are read as clock positions, so values past one day
/// wrap first. A zero or negative difference means the span crosses
/// midnight; the result is always in `1..=1440`, and identical endpoints
/// measure a full day.
pub fn span_minutes(start: u32, end: u32) -> u32 {
    let span = (end % MINUTES_PER_DAY + MINUTES_PER_DAY - start % MINUTES_PER_DAY) % MINUTES_PER_DAY;
    if span == 0 {
        MINUTES_PER_DAY
    } else {
        span
    }
}

/// Minutes between two clock texts, wrapping across midnight.
///
/// # Errors
/// Returns [`WeekplanError::Format`] when either endpoint fails to parse.
pub fn duration_minutes(start: &str, end: &str) -> Result<u32> {
    Ok(span_minutes(time_to_minutes(start)?, time_to_minutes(end)?))
}

fn split_meridiem(compact: &str) -> (&str, Option<Meridiem>) {
    if let Some(clock) = compact.strip_suffix("am") {
        (clock, Some(Meridiem::Am))
    } else if let Some(clock) = compact.strip_suffix("pm") {
        (clock, Some(Meridiem::Pm))
    } else {
        (compact, None)
    }
}

fn parse_component(text: &str) -> Option<u32> {
    if text.is_empty() || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
