//! Schedule configuration document
//!
//! The compact, generative description of a week: reusable activity
//! templates, named day patterns built from them, per-day bindings with
//! day-specific overrides, and the daily rule thresholds.
//!
//! ## Example (TOML)
//! ```toml
//! [templates.breakfast]
//! name = "Breakfast"
//! category = "meals"
//! details = "Morning meal"
//! duration = 30
//!
//! [patterns.weekday]
//! start = "06:00"
//! blocks = [["breakfast", 30], "breakfast"]
//!
//! [days.Monday]
//! pattern = "weekday"
//! unique = [{ time = "9:05am-10:00am", name = "PD 2050", category = "class" }]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::MINUTES_PER_DAY;
use crate::errors::{Result, WeekplanError};
use crate::types::{Activity, ActivityCategory, Weekday};
use crate::utils::time_of_day::time_to_minutes;

/// A reusable activity shape missing only its start time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityTemplate {
    #[serde(alias = "activity")]
    pub name: String,

    #[serde(alias = "type")]
    pub category: ActivityCategory,

    #[serde(default)]
    pub details: String,

    /// Default block length in minutes
    pub duration: u32,
}

/// One block of a day pattern
///
/// Written as `["templateKey", minutes]`, or as a bare `"templateKey"` to
/// use the template's default duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPatternBlock", into = "RawPatternBlock")]
pub struct PatternBlock {
    pub template: String,
    pub duration: Option<u32>,
}

impl PatternBlock {
    /// Block with an explicit length in minutes
    pub fn new(template: impl Into<String>, duration: u32) -> Self {
        Self { template: template.into(), duration: Some(duration) }
    }

    /// Block that inherits the template's default duration
    pub fn with_default_duration(template: impl Into<String>) -> Self {
        Self { template: template.into(), duration: None }
    }

    /// Explicit duration, falling back to `template_default`
    pub fn duration_or(&self, template_default: u32) -> u32 {
        self.duration.unwrap_or(template_default)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawPatternBlock {
    Timed(String, u32),
    Default(String),
}

impl From<RawPatternBlock> for PatternBlock {
    fn from(raw: RawPatternBlock) -> Self {
        match raw {
            RawPatternBlock::Timed(template, duration) => Self::new(template, duration),
            RawPatternBlock::Default(template) => Self::with_default_duration(template),
        }
    }
}

impl From<PatternBlock> for RawPatternBlock {
    fn from(block: PatternBlock) -> Self {
        match block.duration {
            Some(duration) => Self::Timed(block.template, duration),
            None => Self::Default(block.template),
        }
    }
}

/// A named recipe for a day: back-to-back blocks from a start time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPattern {
    pub start: String,

    #[serde(default)]
    pub blocks: Vec<PatternBlock>,
}

/// Binds one weekday to a pattern plus its day-specific overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayConfig {
    pub pattern: String,

    /// Applied in the order listed
    #[serde(default)]
    pub unique: Vec<Activity>,
}

/// Break lengths between sessions, in minutes
///
/// Carried in the configuration document but not enforced anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequiredBreaks {
    pub study: u32,
    pub work: u32,
}

impl Default for RequiredBreaks {
    fn default() -> Self {
        Self {
            study: 15, // minutes
            work: 30,  // minutes
        }
    }
}

/// Daily thresholds checked by validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleRules {
    /// Minimum study minutes per day (default: 120 = 2 hours)
    #[serde(alias = "minStudyTime")]
    pub min_study_time: u32,

    /// Maximum work minutes per day (default: 480 = 8 hours)
    #[serde(alias = "maxWorkTime")]
    pub max_work_time: u32,

    #[serde(alias = "requiredBreaks")]
    pub required_breaks: RequiredBreaks,
}

impl Default for ScheduleRules {
    fn default() -> Self {
        Self { min_study_time: 120, max_work_time: 480, required_breaks: RequiredBreaks::default() }
    }
}

/// Wake-up and bedtime clock texts for one kind of day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WakeSleep {
    pub wakeup: String,
    pub sleep: String,
}

/// Wake-up and bedtime defaults for weekdays and weekends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultTimes {
    pub weekday: WakeSleep,
    pub weekend: WakeSleep,
}

impl Default for DefaultTimes {
    fn default() -> Self {
        Self {
            weekday: WakeSleep { wakeup: "06:00".to_string(), sleep: "22:00".to_string() },
            weekend: WakeSleep { wakeup: "07:00".to_string(), sleep: "22:00".to_string() },
        }
    }
}

impl DefaultTimes {
    /// Weekend times on Saturday and Sunday, weekday times otherwise
    pub fn for_day(&self, day: Weekday) -> &WakeSleep {
        if day.is_weekend() {
            &self.weekend
        } else {
            &self.weekday
        }
    }
}

/// The full schedule configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub templates: BTreeMap<String, ActivityTemplate>,

    /// Course code to room, used to fill in override details
    pub locations: BTreeMap<String, String>,

    #[serde(alias = "defaultTimes")]
    pub default_times: DefaultTimes,

    pub patterns: BTreeMap<String, DayPattern>,

    pub days: BTreeMap<Weekday, DayConfig>,

    pub rules: ScheduleRules,
}

impl ScheduleConfig {
    /// Configuration bound to `day`, if the day is scheduled
    pub fn day(&self, day: Weekday) -> Option<&DayConfig> {
        self.days.get(&day)
    }

    /// Pattern registered under `name`
    pub fn pattern(&self, name: &str) -> Option<&DayPattern> {
        self.patterns.get(name)
    }

    /// Room registered for an activity name; whitespace in the name is
    /// ignored, so `"PD 2050"` finds the `PD2050` entry
    pub fn location_for(&self, name: &str) -> Option<&str> {
        let code: String = name.chars().filter(|c| !c.is_whitespace()).collect();
        self.locations.get(&code).map(String::as_str)
    }

    /// Structural checks that generation relies on
    ///
    /// # Errors
    /// - [`WeekplanError::Format`] for any unparseable time text
    /// - [`WeekplanError::UnknownTemplate`] for a block naming a missing
    ///   template
    /// - [`WeekplanError::UnknownPattern`] for a day naming a missing pattern
    /// - [`WeekplanError::Config`] for durations that are zero or longer
    ///   than a day
    pub fn validate(&self) -> Result<()> {
        for (key, template) in &self.templates {
            if !is_valid_block_length(template.duration) {
                return Err(WeekplanError::Config(format!(
                    "template '{key}' has a default duration of {} minutes",
                    template.duration
                )));
            }
        }

        for times in [&self.default_times.weekday, &self.default_times.weekend] {
            time_to_minutes(&times.wakeup)?;
            time_to_minutes(&times.sleep)?;
        }

        for (name, pattern) in &self.patterns {
            time_to_minutes(&pattern.start)?;
            for block in &pattern.blocks {
                let template = self.templates.get(&block.template).ok_or_else(|| {
                    WeekplanError::UnknownTemplate {
                        pattern: name.clone(),
                        key: block.template.clone(),
                    }
                })?;
                let minutes = block.duration_or(template.duration);
                if !is_valid_block_length(minutes) {
                    return Err(WeekplanError::Config(format!(
                        "pattern '{name}' has a {minutes}-minute '{}' block",
                        block.template
                    )));
                }
            }
        }

        for (day, day_config) in &self.days {
            if !self.patterns.contains_key(&day_config.pattern) {
                return Err(WeekplanError::UnknownPattern {
                    day: *day,
                    pattern: day_config.pattern.clone(),
                });
            }
        }

        Ok(())
    }
}

/// A block must end strictly after it starts and fit within one day
pub fn is_valid_block_length(minutes: u32) -> bool {
    (1..=MINUTES_PER_DAY).contains(&minutes)
}
