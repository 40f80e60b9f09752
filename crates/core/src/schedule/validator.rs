//! Daily study/work rule checks
//!
//! Violations are advisory: they are logged and returned in a
//! [`ValidationReport`] but never stop a schedule from being produced.
//! `rules.required_breaks` is not consulted.

use weekplan_domain::{
    Activity, ActivityCategory, RuleViolation, ScheduleRules, ValidationReport, WeekSchedule,
    Weekday,
};

/// Checks each day against the configured [`ScheduleRules`]
#[derive(Debug, Clone, Copy)]
pub struct ScheduleValidator {
    rules: ScheduleRules,
}

impl ScheduleValidator {
    /// Validator enforcing `rules`
    pub fn new(rules: ScheduleRules) -> Self {
        Self { rules }
    }

    /// Limits in effect
    pub fn rules(&self) -> &ScheduleRules {
        &self.rules
    }

    /// Violations for a single day's activities
    pub fn check_day(&self, activities: &[Activity]) -> Vec<RuleViolation> {
        let mut study = 0;
        let mut work = 0;
        for activity in activities {
            match activity.category {
                ActivityCategory::Study => study += activity.duration_minutes(),
                ActivityCategory::Work => work += activity.duration_minutes(),
                _ => {}
            }
        }

        let mut violations = Vec::new();
        if study < self.rules.min_study_time {
            violations.push(RuleViolation::InsufficientStudy {
                actual: study,
                minimum: self.rules.min_study_time,
            });
        }
        if work > self.rules.max_work_time {
            violations.push(RuleViolation::ExcessiveWork {
                actual: work,
                maximum: self.rules.max_work_time,
            });
        }
        violations
    }

    /// Validate the given days, logging each violation as a warning
    pub fn validate_days<'a, I>(&self, days: I) -> ValidationReport
    where
        I: IntoIterator<Item = (Weekday, &'a [Activity])>,
    {
        let mut report = ValidationReport::default();
        for (day, activities) in days {
            for violation in self.check_day(activities) {
                match violation {
                    RuleViolation::InsufficientStudy { actual, minimum } => {
                        tracing::warn!(%day, actual, limit = minimum, "Insufficient study time");
                    }
                    RuleViolation::ExcessiveWork { actual, maximum } => {
                        tracing::warn!(%day, actual, limit = maximum, "Exceeds maximum work time");
                    }
                }
                report.push(day, violation);
            }
        }
        report
    }

    /// Validate all seven days of `schedule`
    pub fn validate_week(&self, schedule: &WeekSchedule) -> ValidationReport {
        self.validate_days(schedule.iter())
    }
}
