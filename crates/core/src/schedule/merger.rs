//! Overlaying day-specific activities onto pattern output

use weekplan_domain::{Activity, ActivitySource, ScheduleConfig};

/// Overlay `overrides` onto `base`, one at a time in the order given
///
/// For each override, every activity it overlaps is dropped (bounds are
/// inclusive, so an activity that merely touches the override goes too).
/// The override is then inserted before the first remaining activity that
/// ends after the override starts, or appended when there is none.
///
/// Overrides are not sorted first. A later override evicts any earlier one
/// it overlaps, so the result depends on input order when overrides
/// intersect each other.
pub fn merge_unique(base: Vec<Activity>, overrides: &[Activity]) -> Vec<Activity> {
    let mut merged = base;

    for unique in overrides {
        let unique = unique.clone().with_source(ActivitySource::Override);
        let before = merged.len();
        merged.retain(|existing| !unique.time.overlaps(&existing.time));

        let start = unique.time.start_minutes();
        let position = merged
            .iter()
            .position(|existing| existing.time.normalized_end() > start)
            .unwrap_or(merged.len());

        tracing::trace!(
            activity = %unique.name,
            time = %unique.time,
            removed = before - merged.len(),
            position,
            "Merged unique activity"
        );
        merged.insert(position, unique);
    }

    merged
}

/// Fill an override's empty `details` with its registered location
///
/// Activities that already carry details, or whose name has no entry in
/// `locations`, are returned unchanged.
pub fn resolve_location(activity: &Activity, config: &ScheduleConfig) -> Activity {
    let mut resolved = activity.clone();
    if resolved.details.is_empty() {
        if let Some(location) = config.location_for(&resolved.name) {
            resolved.details = location.to_string();
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use weekplan_domain::{ActivityCategory, TimeRange};

    use super::*;

    fn pattern_activity(start: u32, end: u32, name: &str) -> Activity {
        Activity::new(TimeRange::from_minutes(start, end), name, ActivityCategory::Study, "")
    }

    fn class(range: &str, name: &str) -> Activity {
        Activity::new(range.parse().unwrap(), name, ActivityCategory::Class, "")
    }

    fn names(activities: &[Activity]) -> Vec<&str> {
        activities.iter().map(|a| a.name.as_str()).collect()
    }

    fn weekday_base() -> Vec<Activity> {
        vec![
            pattern_activity(360, 390, "Morning Routine"),
            pattern_activity(390, 420, "Breakfast"),
            pattern_activity(420, 480, "Study Block"),
            pattern_activity(480, 540, "Weight Training"),
        ]
    }

    #[test]
    fn test_no_overrides_keeps_base() {
        let merged = merge_unique(weekday_base(), &[]);
        assert_eq!(merged, weekday_base());
    }

    #[test]
    fn test_override_after_pattern_is_appended() {
        let merged = merge_unique(weekday_base(), &[class("9:05am-10:00am", "PD 2050")]);
        assert_eq!(merged.len(), 5);
        assert_eq!(merged[4].name, "PD 2050");
        assert_eq!(merged[4].source, ActivitySource::Override);
    }

    #[test]
    fn test_override_replaces_overlapping_activity() {
        let merged = merge_unique(weekday_base(), &[class("7:10am-7:50am", "Seminar")]);
        assert_eq!(names(&merged), vec!["Morning Routine", "Breakfast", "Seminar", "Weight Training"]);
    }

    #[test]
    fn test_touching_activities_are_removed() {
        // 07:00-08:00 touches Breakfast's end and Weight Training's start
        let merged = merge_unique(weekday_base(), &[class("7:00am-8:00am", "Lab")]);
        assert_eq!(names(&merged), vec!["Morning Routine", "Lab"]);
    }

    #[test]
    fn test_override_inserted_in_time_order() {
        let base = vec![pattern_activity(360, 390, "Morning Routine"), pattern_activity(600, 660, "Reading")];
        let merged = merge_unique(base, &[class("8:00am-9:00am", "Lecture")]);
        assert_eq!(names(&merged), vec!["Morning Routine", "Lecture", "Reading"]);
    }

    #[test]
    fn test_later_override_evicts_earlier_one() {
        let merged = merge_unique(
            Vec::new(),
            &[class("9:00am-10:00am", "First"), class("9:30am-10:30am", "Second")],
        );
        assert_eq!(names(&merged), vec!["Second"]);
    }

    #[test]
    fn test_input_order_matters_for_overlapping_overrides() {
        let first = class("9:00am-10:00am", "First");
        let second = class("9:30am-10:30am", "Second");
        let forward = merge_unique(Vec::new(), &[first.clone(), second.clone()]);
        let backward = merge_unique(Vec::new(), &[second, first]);
        assert_ne!(names(&forward), names(&backward));
    }

    #[test]
    fn test_overrides_never_overlap_each_other() {
        let merged = merge_unique(
            weekday_base(),
            &[
                class("9:00am-10:00am", "A"),
                class("6:15am-6:45am", "B"),
                class("9:45am-11:00am", "C"),
                class("1:00pm-2:00pm", "D"),
            ],
        );
        let overrides: Vec<&Activity> = merged.iter().filter(|a| a.is_override()).collect();
        for (i, left) in overrides.iter().enumerate() {
            for right in &overrides[i + 1..] {
                assert!(!left.time.overlaps(&right.time), "{} overlaps {}", left.name, right.name);
            }
        }
    }

    #[test]
    fn test_sorted_disjoint_overrides_are_idempotent() {
        let overrides = [class("9:05am-10:00am", "PD 2050"), class("11:15am-12:10pm", "CS 4065")];
        let once = merge_unique(weekday_base(), &overrides);
        let twice = merge_unique(once.clone(), &overrides);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_overnight_override_clears_late_activity() {
        let base = vec![pattern_activity(1380, 1410, "Late Call"), pattern_activity(390, 420, "Breakfast")];
        let merged = merge_unique(base, &[class("10:00pm-6:00am", "Sleep")]);
        assert_eq!(names(&merged), vec!["Breakfast", "Sleep"]);
    }

    #[test]
    fn test_resolve_location_fills_empty_details() {
        let mut config = ScheduleConfig::default();
        config.locations.insert("CS4092".to_string(), "Baldwin Hall 544".to_string());

        let resolved = resolve_location(&class("5:30pm-6:20pm", "CS 4092"), &config);
        assert_eq!(resolved.details, "Baldwin Hall 544");

        let mut explicit = class("5:30pm-6:20pm", "CS 4092");
        explicit.details = "Online".to_string();
        assert_eq!(resolve_location(&explicit, &config).details, "Online");

        let unknown = resolve_location(&class("1:00pm-2:00pm", "Office Hours"), &config);
        assert_eq!(unknown.details, "");
    }
}
