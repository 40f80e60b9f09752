//! Pattern expansion
//!
//! Replays a [`DayPattern`]'s blocks back to back from its start time. The
//! cursor runs on a continuous minute axis, so a pattern may run past
//! midnight; the rendered clock text wraps onto the next day.

use weekplan_domain::config::is_valid_block_length;
use weekplan_domain::{
    time_to_minutes, Activity, DayPattern, Result, TimeRange, WeekplanError,
};

use super::catalog::TemplateCatalog;

/// Expand the pattern named `name` into a gap-free activity sequence
///
/// Each activity ends exactly where the next one starts. A pattern with no
/// blocks expands to an empty sequence.
///
/// # Errors
/// - [`WeekplanError::Format`] if the pattern's start time does not parse
/// - [`WeekplanError::UnknownTemplate`] if a block references a missing
///   template
/// - [`WeekplanError::Config`] if a block's effective duration is zero or
///   longer than a day
pub fn expand_pattern(
    name: &str,
    pattern: &DayPattern,
    catalog: &TemplateCatalog<'_>,
) -> Result<Vec<Activity>> {
    let mut cursor = time_to_minutes(&pattern.start)?;
    let mut activities = Vec::with_capacity(pattern.blocks.len());

    for block in &pattern.blocks {
        let template = catalog.resolve(name, &block.template)?;
        let minutes = block.duration_or(template.duration);
        if !is_valid_block_length(minutes) {
            return Err(WeekplanError::Config(format!(
                "pattern '{name}' has a {minutes}-minute '{}' block",
                block.template
            )));
        }

        let end = cursor + minutes;
        activities.push(Activity::new(
            TimeRange::from_minutes(cursor, end),
            template.name.clone(),
            template.category,
            template.details.clone(),
        ));
        cursor = end;
    }

    tracing::trace!(pattern = name, activities = activities.len(), "Expanded day pattern");
    Ok(activities)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use weekplan_domain::{ActivityCategory, ActivityTemplate, PatternBlock};

    use super::*;

    fn template(name: &str, category: ActivityCategory, duration: u32) -> ActivityTemplate {
        ActivityTemplate {
            name: name.to_string(),
            category,
            details: String::new(),
            duration,
        }
    }

    fn templates() -> BTreeMap<String, ActivityTemplate> {
        BTreeMap::from([
            ("morningRoutine".to_string(), template("Morning Routine", ActivityCategory::Routine, 30)),
            ("breakfast".to_string(), template("Breakfast", ActivityCategory::Meals, 30)),
            ("morningStudy".to_string(), template("Study Block", ActivityCategory::Study, 60)),
            ("sleep".to_string(), template("Sleep", ActivityCategory::Sleep, 480)),
        ])
    }

    fn pattern(start: &str, blocks: Vec<PatternBlock>) -> DayPattern {
        DayPattern { start: start.to_string(), blocks }
    }

    #[test]
    fn test_expand_back_to_back() {
        let templates = templates();
        let catalog = TemplateCatalog::new(&templates);
        let weekday = pattern(
            "06:00",
            vec![PatternBlock::new("morningRoutine", 30), PatternBlock::new("breakfast", 30)],
        );

        let activities = expand_pattern("weekday", &weekday, &catalog).unwrap();

        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].time.to_string(), "06:00-06:30");
        assert_eq!(activities[0].category, ActivityCategory::Routine);
        assert_eq!(activities[1].time.to_string(), "06:30-07:00");
        assert_eq!(activities[1].category, ActivityCategory::Meals);
    }

    #[test]
    fn test_expansion_is_contiguous() {
        let templates = templates();
        let catalog = TemplateCatalog::new(&templates);
        let day = pattern(
            "7:15am",
            vec![
                PatternBlock::new("morningRoutine", 25),
                PatternBlock::with_default_duration("breakfast"),
                PatternBlock::new("morningStudy", 95),
                PatternBlock::with_default_duration("morningStudy"),
            ],
        );

        let activities = expand_pattern("weekday", &day, &catalog).unwrap();

        for pair in activities.windows(2) {
            assert_eq!(pair[0].time.end(), pair[1].time.start());
        }
        assert_eq!(activities[3].duration_minutes(), 60);
    }

    #[test]
    fn test_expansion_wraps_past_midnight() {
        let templates = templates();
        let catalog = TemplateCatalog::new(&templates);
        let night = pattern(
            "21:30",
            vec![PatternBlock::new("breakfast", 30), PatternBlock::with_default_duration("sleep")],
        );

        let activities = expand_pattern("night", &night, &catalog).unwrap();

        assert_eq!(activities[1].time.to_string(), "22:00-06:00");
        assert_eq!(activities[1].duration_minutes(), 480);
    }

    #[test]
    fn test_empty_pattern_expands_to_nothing() {
        let templates = templates();
        let catalog = TemplateCatalog::new(&templates);
        let activities = expand_pattern("rest", &pattern("08:00", Vec::new()), &catalog).unwrap();
        assert!(activities.is_empty());
    }

    #[test]
    fn test_unknown_template_aborts() {
        let templates = templates();
        let catalog = TemplateCatalog::new(&templates);
        let day = pattern("06:00", vec![PatternBlock::new("nap", 20)]);
        let err = expand_pattern("weekday", &day, &catalog).unwrap_err();
        assert!(matches!(err, WeekplanError::UnknownTemplate { ref key, .. } if key == "nap"));
    }

    #[test]
    fn test_zero_length_block_is_rejected() {
        let templates = templates();
        let catalog = TemplateCatalog::new(&templates);
        let day = pattern("06:00", vec![PatternBlock::new("breakfast", 0)]);
        assert!(matches!(
            expand_pattern("weekday", &day, &catalog),
            Err(WeekplanError::Config(_))
        ));
    }

    #[test]
    fn test_bad_start_is_format_error() {
        let templates = templates();
        let catalog = TemplateCatalog::new(&templates);
        let day = pattern("dawn", vec![PatternBlock::new("breakfast", 30)]);
        assert!(matches!(
            expand_pattern("weekday", &day, &catalog),
            Err(WeekplanError::Format { .. })
        ));
    }
}
