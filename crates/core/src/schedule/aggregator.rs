//! Weekly per-category totals

use weekplan_common::format_minutes;
use weekplan_domain::constants::{MEALS_WEIGHT_DIVISOR, MINUTES_PER_WEEK};
use weekplan_domain::{Activity, ActivityCategory, CategoryTotals, WeekSchedule, WeeklyStats};

/// Minutes an activity contributes to its category total
///
/// Meals count half their clock time, rounded down.
pub fn weighted_minutes(activity: &Activity) -> u32 {
    let minutes = activity.duration_minutes();
    match activity.category {
        ActivityCategory::Meals => minutes / MEALS_WEIGHT_DIVISOR,
        _ => minutes,
    }
}

/// Scheduled share of the week as a whole percent, rounding halves up
pub fn utilization_percentage(total_minutes: u32) -> u32 {
    let scaled = u64::from(total_minutes) * 100;
    let week = u64::from(MINUTES_PER_WEEK);
    u32::try_from((scaled * 2 + week) / (week * 2)).unwrap_or(u32::MAX)
}

/// Sum every activity of the week into per-category totals
pub fn aggregate_week(schedule: &WeekSchedule) -> WeeklyStats {
    let mut totals = CategoryTotals::default();
    for activity in schedule.activities() {
        totals.add(activity.category, weighted_minutes(activity));
    }

    let total_scheduled_minutes = totals.total();
    WeeklyStats {
        totals,
        total_scheduled_minutes,
        scheduled_hours_percentage: utilization_percentage(total_scheduled_minutes),
    }
}

/// One `"Label: 5h 0m"` line per category in legend order, followed by the
/// overall total and utilization
pub fn summary_lines(stats: &WeeklyStats) -> Vec<String> {
    let mut lines: Vec<String> = stats
        .totals
        .iter()
        .map(|(category, minutes)| format!("{}: {}", category.label(), format_minutes(minutes)))
        .collect();
    lines.push(format!(
        "Total: {} ({}% of the week)",
        format_minutes(stats.total_scheduled_minutes),
        stats.scheduled_hours_percentage
    ));
    lines
}
