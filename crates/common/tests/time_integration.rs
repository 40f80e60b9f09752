//! Integration tests for the `time` module.
//!
//! Covers the minute formatting helpers used in weekly summaries.

use weekplan_common::{format_minutes, format_minutes_as_hours};

/// Both formatters agree on whole-hour totals across a week's range
#[test]
fn test_formatters_agree_on_whole_hours() {
    for hours in [1_u32, 2, 8, 24, 56, 168] {
        let minutes = hours * 60;
        assert_eq!(format_minutes(minutes), format!("{hours}h 0m"));
        let unit = if hours == 1 { "hour" } else { "hours" };
        assert_eq!(format_minutes_as_hours(minutes), format!("{hours} {unit}"));
    }
}

#[test]
fn test_weekly_total_formats() {
    // 27h 15m, a typical sample-week total
    assert_eq!(format_minutes(1635), "27h 15m");
    assert_eq!(format_minutes_as_hours(1635), "27.3 hours");
}

#[test]
fn test_rounding_to_tenths() {
    assert_eq!(format_minutes_as_hours(3), "0.1 hours");
    assert_eq!(format_minutes_as_hours(2), "0 hours");
    assert_eq!(format_minutes_as_hours(57), "1 hour");
}
