//! Domain types and models

pub mod activity;
pub mod schedule;
pub mod stats;
pub mod time_range;
pub mod validation;
pub mod weekday;

pub use activity::{Activity, ActivityCategory, ActivitySource};
pub use schedule::{DaySchedule, WeekSchedule};
pub use stats::{CategoryTotals, WeeklyStats};
pub use time_range::TimeRange;
pub use validation::{RuleViolation, ValidationReport, ValidationWarning};
pub use weekday::Weekday;
