//! Scheduled activities and their categories

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::CATEGORY_COUNT;
use crate::impl_domain_key_conversions;
use crate::types::TimeRange;

/// ActivityCategory: the fixed classification used for color-coding and
/// weekly aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export, rename_all = "lowercase"))]
pub enum ActivityCategory {
    Class,
    Study,
    Work,
    Workout,
    Meals,
    Project,
    Routine,
    Sleep,
    Leisure,
}

impl_domain_key_conversions!(ActivityCategory {
    Class => "class",
    Study => "study",
    Work => "work",
    Workout => "workout",
    Meals => "meals",
    Project => "project",
    Routine => "routine",
    Sleep => "sleep",
    Leisure => "leisure",
});

impl ActivityCategory {
    /// All categories in legend order
    pub const ALL: [Self; CATEGORY_COUNT] = [
        Self::Class,
        Self::Study,
        Self::Work,
        Self::Workout,
        Self::Meals,
        Self::Project,
        Self::Routine,
        Self::Sleep,
        Self::Leisure,
    ];

    /// Canonical display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Study => "Study",
            Self::Work => "Work",
            Self::Workout => "Workout",
            Self::Meals => "Meals",
            Self::Project => "Project",
            Self::Routine => "Routine",
            Self::Sleep => "Sleep",
            Self::Leisure => "Leisure",
        }
    }

    /// Position in [`ActivityCategory::ALL`], used to index fixed-size tables
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Where a generated activity came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export, rename_all = "lowercase"))]
pub enum ActivitySource {
    /// Produced by replaying a day pattern
    #[default]
    Pattern,
    /// A day-specific activity that superseded pattern output
    Override,
}

impl_domain_key_conversions!(ActivitySource {
    Pattern => "pattern",
    Override => "override",
});

/// One scheduled, time-bounded item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Activity {
    /// Clock range, serialized as `"start-end"`
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub time: TimeRange,

    #[serde(alias = "activity")]
    pub name: String,

    #[serde(alias = "type")]
    pub category: ActivityCategory,

    #[serde(default)]
    pub details: String,

    #[serde(default)]
    pub source: ActivitySource,
}

impl Activity {
    /// Create a pattern-sourced activity
    pub fn new(
        time: TimeRange,
        name: impl Into<String>,
        category: ActivityCategory,
        details: impl Into<String>,
    ) -> Self {
        Self {
            time,
            name: name.into(),
            category,
            details: details.into(),
            source: ActivitySource::Pattern,
        }
    }

    /// Same activity, tagged with a different source
    pub fn with_source(mut self, source: ActivitySource) -> Self {
        self.source = source;
        self
    }

    /// Length in minutes, wrapping across midnight
    pub fn duration_minutes(&self) -> u32 {
        self.time.duration_minutes()
    }

    /// Whether a day override produced this activity
    pub fn is_override(&self) -> bool {
        self.source == ActivitySource::Override
    }
}
