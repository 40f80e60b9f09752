//! Schedule service - weekly generation orchestration

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use weekplan_common::log_error;
use weekplan_domain::{
    Activity, DayConfig, DaySchedule, Result, ScheduleConfig, ValidationReport, WeekSchedule,
    WeekplanError, Weekday, WeeklyStats,
};

use super::aggregator::aggregate_week;
use super::catalog::TemplateCatalog;
use super::expander::expand_pattern;
use super::merger::{merge_unique, resolve_location};
use super::ports::{ScheduleCache, ScheduleConfigSource};
use super::validator::ScheduleValidator;

/// Everything produced for one configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub schedule: WeekSchedule,
    pub stats: WeeklyStats,
    pub report: ValidationReport,
}

/// Generates weekly plans from a [`ScheduleConfig`]
///
/// Only days present in `config.days` are generated and validated; every
/// other day stays empty. Generation fails as a whole on the first
/// configuration or format error, and failures are never cached.
#[derive(Default)]
pub struct ScheduleService {
    cache: Option<Arc<dyn ScheduleCache>>,
}

impl ScheduleService {
    /// Create a service without memoization
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service that consults `cache` before generating
    pub fn with_cache(cache: Arc<dyn ScheduleCache>) -> Self {
        Self { cache: Some(cache) }
    }

    /// Generate (or fetch the memoized) plan for `config`
    ///
    /// # Errors
    /// - [`WeekplanError::UnknownPattern`] if a day names a missing pattern
    /// - [`WeekplanError::UnknownTemplate`] if a pattern block names a
    ///   missing template
    /// - [`WeekplanError::Format`] if a pattern start time does not parse
    /// - [`WeekplanError::Config`] for an invalid block duration
    pub fn generate(&self, config: &ScheduleConfig) -> Result<Arc<WeeklyPlan>> {
        if let Some(cache) = &self.cache {
            if let Some(plan) = cache.get(config) {
                tracing::info!("Weekly plan served from cache");
                return Ok(plan);
            }
            tracing::info!("Weekly plan cache miss, generating");
        }

        let plan = match self.build_plan(config) {
            Ok(plan) => Arc::new(plan),
            Err(err) => {
                log_error(&err, "Weekly plan generation failed");
                return Err(err);
            }
        };

        if let Some(cache) = &self.cache {
            cache.insert(config, Arc::clone(&plan));
        }
        Ok(plan)
    }

    /// Load a configuration from `source` and generate its plan
    ///
    /// # Errors
    /// Propagates errors from the source and from [`Self::generate`].
    pub fn generate_from(&self, source: &dyn ScheduleConfigSource) -> Result<Arc<WeeklyPlan>> {
        let config = source.load()?;
        self.generate(&config)
    }

    /// Generate a single day, bypassing validation, aggregation, and the
    /// cache
    ///
    /// Returns an empty schedule for a day without configuration.
    ///
    /// # Errors
    /// Same as [`Self::generate`], restricted to `day`.
    pub fn generate_day(&self, config: &ScheduleConfig, day: Weekday) -> Result<DaySchedule> {
        match config.day(day) {
            Some(day_config) => build_day(config, day, day_config),
            None => Ok(Vec::new()),
        }
    }

    fn build_plan(&self, config: &ScheduleConfig) -> Result<WeeklyPlan> {
        let mut schedule = WeekSchedule::new();
        for (day, day_config) in &config.days {
            schedule.set_day(*day, build_day(config, *day, day_config)?);
        }

        let validator = ScheduleValidator::new(config.rules);
        let report = validator.validate_days(
            schedule.iter().filter(|(day, _)| config.days.contains_key(day)),
        );
        let stats = aggregate_week(&schedule);

        tracing::debug!(
            activities = schedule.activity_count(),
            total_minutes = stats.total_scheduled_minutes,
            utilization = stats.scheduled_hours_percentage,
            warnings = report.warnings.len(),
            "Generated weekly plan"
        );
        Ok(WeeklyPlan { schedule, stats, report })
    }
}

fn build_day(config: &ScheduleConfig, day: Weekday, day_config: &DayConfig) -> Result<DaySchedule> {
    let _span = tracing::debug_span!("generate_day", %day, pattern = %day_config.pattern).entered();

    let pattern = config.pattern(&day_config.pattern).ok_or_else(|| {
        WeekplanError::UnknownPattern { day, pattern: day_config.pattern.clone() }
    })?;

    let catalog = TemplateCatalog::from_config(config);
    let base = expand_pattern(&day_config.pattern, pattern, &catalog)?;

    let overrides: Vec<Activity> =
        day_config.unique.iter().map(|unique| resolve_location(unique, config)).collect();
    let activities = merge_unique(base, &overrides);

    tracing::debug!(activities = activities.len(), overrides = overrides.len(), "Generated day");
    Ok(activities)
}
