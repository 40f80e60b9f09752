//! Clock-time ranges within a day

use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::constants::{MINUTES_PER_DAY, TIME_RANGE_SEPARATOR};
use crate::errors::{Result, WeekplanError};
use crate::utils::time_of_day::{minutes_to_time, span_minutes, time_to_minutes};

/// A `[start, end)` range of clock times
///
/// Keeps the text exactly as written (`"9:05am"`) alongside the parsed
/// minutes past midnight. An end at or before the start is read as falling
/// on the next day, so the range always has a positive duration.
///
/// Serialized in the compact `"start-end"` form.
#[derive(Debug, Clone, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub struct TimeRange {
    start: String,
    end: String,
    start_minutes: u32,
    end_minutes: u32,
}

impl TimeRange {
    /// Build a range from two clock texts
    ///
    /// # Errors
    /// Returns [`WeekplanError::Format`] when either endpoint fails to parse.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self> {
        let start = start.into();
        let end = end.into();
        let start_minutes = time_to_minutes(&start)?;
        let end_minutes = time_to_minutes(&end)?;
        Ok(Self { start, end, start_minutes, end_minutes })
    }

    /// Build a range from minutes past midnight, rendered as `"HH:MM"`
    ///
    /// Minutes beyond the end of the day wrap onto the next day's clock.
    pub fn from_minutes(start: u32, end: u32) -> Self {
        let start_text = minutes_to_time(start);
        let end_text = minutes_to_time(end);
        Self {
            start_minutes: start % MINUTES_PER_DAY,
            end_minutes: end % MINUTES_PER_DAY,
            start: start_text,
            end: end_text,
        }
    }

    /// Start text as written
    pub fn start(&self) -> &str {
        &self.start
    }

    /// End text as written
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Start as minutes past midnight
    ///
    /// ```
    /// use weekplan_domain::TimeRange;
    ///
    /// let range: TimeRange = "9:05am-10:00am".parse().unwrap();
    /// assert_eq!(range.start(), "9:05am");
    /// assert_eq!(range.start_minutes(), 545);
    /// assert_eq!(range.end_minutes(), 600);
    /// ```
    pub fn start_minutes(&self) -> u32 {
        self.start_minutes
    }

    /// End as minutes past midnight, before any wrap is applied
    pub fn end_minutes(&self) -> u32 {
        self.end_minutes
    }

    /// Length of the range in minutes (1..=1440)
    pub fn duration_minutes(&self) -> u32 {
        span_minutes(self.start_minutes, self.end_minutes)
    }

    /// End measured on a continuous axis starting at this range's day, so a
    /// range crossing midnight ends past 1440
    pub fn normalized_end(&self) -> u32 {
        self.start_minutes + self.duration_minutes()
    }

    /// Whether the range runs past midnight into the next day
    pub fn crosses_midnight(&self) -> bool {
        self.end_minutes <= self.start_minutes
    }

    /// Inclusive-bound overlap test on normalized intervals
    ///
    /// Ranges that merely touch (`08:00-09:00` and `09:00-10:00`) count as
    /// overlapping.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_minutes <= other.normalized_end() && self.normalized_end() >= other.start_minutes
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start, TIME_RANGE_SEPARATOR, self.end)
    }
}

impl FromStr for TimeRange {
    type Err = WeekplanError;

    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once(TIME_RANGE_SEPARATOR)
            .ok_or_else(|| WeekplanError::format(s, "expected a 'start-end' range"))?;
        Self::new(start.trim(), end.trim())
    }
}
