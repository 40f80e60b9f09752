//! Human-readable formatting of minute totals
//!
//! Schedule statistics are accumulated as whole minutes. These helpers turn
//! those totals into the strings shown next to the weekly legend.

/// Format a minute total as hours and minutes
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use weekplan_common::time::format::format_minutes;
///
/// assert_eq!(format_minutes(0), "0m");
/// assert_eq!(format_minutes(45), "45m");
/// assert_eq!(format_minutes(60), "1h 0m");
/// assert_eq!(format_minutes(1530), "25h 30m");
/// # }
/// ```
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours == 0 {
        return format!("{mins}m");
    }

    format!("{hours}h {mins}m")
}

/// Format a minute total as decimal hours, dropping a trailing `.0`
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use weekplan_common::time::format::format_minutes_as_hours;
///
/// assert_eq!(format_minutes_as_hours(60), "1 hour");
/// assert_eq!(format_minutes_as_hours(1500), "25 hours");
/// assert_eq!(format_minutes_as_hours(450), "7.5 hours");
/// assert_eq!(format_minutes_as_hours(20), "0.3 hours");
/// # }
/// ```
pub fn format_minutes_as_hours(minutes: u32) -> String {
    // Tenths of an hour, rounded half up
    let tenths = (u64::from(minutes) * 10 + 30) / 60;
    let whole = tenths / 10;
    let fraction = tenths % 10;

    let number = if fraction == 0 { whole.to_string() } else { format!("{whole}.{fraction}") };
    let unit = if tenths == 10 { "hour" } else { "hours" };

    format!("{number} {unit}")
}
